/// Dense polynomials in coefficient form.
pub mod field_polynomial;
/// Lagrange interpolation over the integer domain `{0, 1, ..., m - 1}`.
pub mod interpolation;

pub use field_polynomial::FpPolynomial;
pub use interpolation::IntegerDomain;
