use crate::errors::{Groth16Error, Result};
use crate::poly::{FpPolynomial, IntegerDomain};
use crate::r1cs::{Matrix, Witness, R1CS};
use ark_std::{end_timer, start_timer};
use r1zk_algebra::prelude::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The interpolated columns of L, R and O, one polynomial per wire and matrix,
/// together with the vanishing polynomial of the constraint domain.
///
/// Depends only on the circuit, so it is shared by setup and every proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnPolynomials<F> {
    /// `u_j(x)`, interpolating column `j` of L.
    pub l: Vec<FpPolynomial<F>>,
    /// `v_j(x)`, interpolating column `j` of R.
    pub r: Vec<FpPolynomial<F>>,
    /// `w_j(x)`, interpolating column `j` of O.
    pub o: Vec<FpPolynomial<F>>,
    /// `t(x)`, vanishing on `{0, ..., m - 1}`.
    pub t: FpPolynomial<F>,
}

impl<F: Scalar> ColumnPolynomials<F> {
    /// Interpolate every column of the circuit; row `i` maps to `x = i`.
    pub fn new(r1cs: &R1CS) -> Result<Self> {
        let timer = start_timer!(|| "Interpolate R1CS columns");
        let domain = IntegerDomain::new(r1cs.num_constraints())?;
        let l = interpolate_columns(&domain, r1cs.l())?;
        let r = interpolate_columns(&domain, r1cs.r())?;
        let o = interpolate_columns(&domain, r1cs.o())?;
        end_timer!(timer);
        tracing::debug!(
            num_constraints = r1cs.num_constraints(),
            num_wires = r1cs.num_wires(),
            "interpolated R1CS columns"
        );
        Ok(Self {
            l,
            r,
            o,
            t: domain.vanishing_polynomial().clone(),
        })
    }

    /// Return the number of wires.
    pub fn num_wires(&self) -> usize {
        self.l.len()
    }

    /// Return the number of constraints, i.e. the degree of `t(x)`.
    pub fn num_constraints(&self) -> usize {
        self.t.degree()
    }
}

#[cfg(not(feature = "parallel"))]
fn interpolate_columns<F: Scalar>(
    domain: &IntegerDomain<F>,
    matrix: &Matrix,
) -> Result<Vec<FpPolynomial<F>>> {
    (0..matrix.cols())
        .map(|j| interpolate_column(domain, matrix, j))
        .collect()
}

#[cfg(feature = "parallel")]
fn interpolate_columns<F: Scalar>(
    domain: &IntegerDomain<F>,
    matrix: &Matrix,
) -> Result<Vec<FpPolynomial<F>>> {
    (0..matrix.cols())
        .into_par_iter()
        .map(|j| interpolate_column(domain, matrix, j))
        .collect()
}

fn interpolate_column<F: Scalar>(
    domain: &IntegerDomain<F>,
    matrix: &Matrix,
    col: usize,
) -> Result<FpPolynomial<F>> {
    let values: Vec<F> = matrix.column(col).map(F::from_i64).collect();
    domain.interpolate(&values)
}

/// `sum_j weights[j] * polys[j]`
fn weighted_sum<F: Scalar>(polys: &[FpPolynomial<F>], weights: &[F]) -> FpPolynomial<F> {
    let len = polys.iter().map(|p| p.coefs.len()).max().unwrap_or(1);
    let mut coefs = vec![F::zero(); len];
    for (poly, weight) in polys.iter().zip(weights.iter()) {
        if weight.is_zero() {
            continue;
        }
        for (acc, c) in coefs.iter_mut().zip(poly.coefs.iter()) {
            acc.add_assign(&c.mul(weight));
        }
    }
    FpPolynomial::from_coefs(coefs)
}

/// The quadratic arithmetic program of a circuit instantiated with a witness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QAP<F> {
    /// `u(x) = sum_j W[j] * u_j(x)`
    pub u: FpPolynomial<F>,
    /// `v(x) = sum_j W[j] * v_j(x)`
    pub v: FpPolynomial<F>,
    /// `w(x) = sum_j W[j] * w_j(x)`
    pub w: FpPolynomial<F>,
    /// The vanishing polynomial
    pub t: FpPolynomial<F>,
    /// `h(x) = (u(x) v(x) - w(x)) / t(x)`
    pub h: FpPolynomial<F>,
}

impl<F: Scalar> QAP<F> {
    /// Weight the interpolated columns by the witness and divide out `t(x)`.
    ///
    /// Fails with `MalformedCircuit` if the witness length differs from the wire count,
    /// and with `InvalidWitness` if `t(x)` does not divide `u(x) v(x) - w(x)`.
    pub fn from_columns(columns: &ColumnPolynomials<F>, witness: &Witness<F>) -> Result<Self> {
        if witness.len() != columns.num_wires() {
            return Err(Groth16Error::MalformedCircuit);
        }
        let values = witness.values();
        let u = weighted_sum(&columns.l, values);
        let v = weighted_sum(&columns.r, values);
        let w = weighted_sum(&columns.o, values);

        let (h, remainder) = u.mul(&v).sub(&w).div_rem(&columns.t)?;
        if !remainder.is_zero() {
            tracing::warn!("witness does not satisfy the constraint system");
            return Err(Groth16Error::InvalidWitness);
        }

        Ok(Self {
            u,
            v,
            w,
            t: columns.t.clone(),
            h,
        })
    }
}

/// Convert the circuit and witness into `(u, v, w, t, h)`.
pub fn r1cs_to_qap<F: Scalar>(r1cs: &R1CS, witness: &Witness<F>) -> Result<QAP<F>> {
    r1cs.check_witness(witness)?;
    let columns = ColumnPolynomials::new(r1cs)?;
    QAP::from_columns(&columns, witness)
}
