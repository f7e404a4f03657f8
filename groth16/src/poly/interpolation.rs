use crate::errors::Result;
use crate::poly::FpPolynomial;
use r1zk_algebra::prelude::*;

/// The evaluation domain `{0, 1, ..., size - 1}`, with the data needed to interpolate
/// any vector of `size` values over it.
///
/// Interpolation uses `L_i(x) = t(x) / (x - i) * w_i^{-1}`, where
/// `t(x) = (x - 0)(x - 1)...(x - (size - 1))` is the vanishing polynomial and
/// `w_i = prod_{j != i} (i - j) = (-1)^(size - 1 - i) * i! * (size - 1 - i)!`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerDomain<F> {
    vanishing: FpPolynomial<F>,
    inv_weights: Vec<F>,
}

impl<F: Scalar> IntegerDomain<F> {
    /// Build the domain of the given size.
    pub fn new(size: usize) -> Result<Self> {
        let points: Vec<F> = (0..size as u64).map(F::from).collect();
        let vanishing = FpPolynomial::from_zeroes(&points);

        let mut factorials = Vec::with_capacity(size);
        let mut acc = F::one();
        for i in 0..size {
            if i > 0 {
                acc.mul_assign(&points[i]);
            }
            factorials.push(acc);
        }

        let mut inv_weights = Vec::with_capacity(size);
        for i in 0..size {
            let mut w = factorials[i].mul(&factorials[size - 1 - i]);
            if (size - 1 - i) % 2 == 1 {
                w = w.neg();
            }
            inv_weights.push(w.inv()?);
        }

        Ok(Self {
            vanishing,
            inv_weights,
        })
    }

    /// Return the number of points in the domain.
    pub fn size(&self) -> usize {
        self.inv_weights.len()
    }

    /// Return `t(x)`, the monic polynomial vanishing on every point of the domain.
    pub fn vanishing_polynomial(&self) -> &FpPolynomial<F> {
        &self.vanishing
    }

    /// Return the unique polynomial of degree below `size` taking `values[i]` at `x = i`.
    pub fn interpolate(&self, values: &[F]) -> Result<FpPolynomial<F>> {
        if values.len() != self.size() {
            return Err(AlgebraError::ParameterError.into());
        }
        let mut coefs = vec![F::zero(); self.size()];
        for (i, value) in values.iter().enumerate() {
            if value.is_zero() {
                continue;
            }
            let scale = value.mul(&self.inv_weights[i]);
            let basis = divide_by_root(&self.vanishing.coefs, &F::from(i as u64));
            for (coef, b) in coefs.iter_mut().zip(basis.iter()) {
                coef.add_assign(&b.mul(&scale));
            }
        }
        Ok(FpPolynomial::from_coefs(coefs))
    }
}

impl<F: Scalar> FpPolynomial<F> {
    /// Lagrange interpolation of `values` over the domain `{0, 1, ..., values.len() - 1}`.
    /// # Example
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// // p(0) = 1, p(1) = 2, p(2) = 5 gives p(x) = x^2 + 1
    /// let values: Vec<BLSScalar> = [1u32, 2, 5].iter().map(|v| BLSScalar::from(*v)).collect();
    /// let poly = FpPolynomial::interpolate_on_range(&values).unwrap();
    /// let expected = FpPolynomial::from_coefs(
    ///     [1u32, 0, 1].iter().map(|v| BLSScalar::from(*v)).collect(),
    /// );
    /// assert_eq!(poly, expected);
    /// ```
    pub fn interpolate_on_range(values: &[F]) -> Result<Self> {
        IntegerDomain::new(values.len())?.interpolate(values)
    }

    /// Return `t(x) = (x - 0)(x - 1)...(x - (size - 1))`.
    pub fn vanishing_on_range(size: usize) -> Self {
        let points: Vec<F> = (0..size as u64).map(F::from).collect();
        Self::from_zeroes(&points)
    }
}

/// Synthetic division of a polynomial by `(x - root)`, assuming `root` is one of its zeroes.
fn divide_by_root<F: Scalar>(coefs: &[F], root: &F) -> Vec<F> {
    let degree = coefs.len().saturating_sub(1);
    let mut quotient = vec![F::zero(); degree];
    let mut carry = F::zero();
    for k in (1..=degree).rev() {
        carry = coefs[k].add(&carry.mul(root));
        quotient[k - 1] = carry;
    }
    quotient
}
