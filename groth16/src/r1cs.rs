use crate::errors::{Groth16Error, Result};
use r1zk_algebra::prelude::*;

/// A dense integer matrix with a fixed shape, stored row-major in a single allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    entries: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from its rows. Fails with `MalformedCircuit` if there are no rows,
    /// no columns, or the rows have different lengths.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.len());
        if num_rows == 0 || num_cols == 0 || rows.iter().any(|r| r.len() != num_cols) {
            return Err(Groth16Error::MalformedCircuit);
        }
        let entries = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            entries,
        })
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.cols + col]
    }

    /// Return a row as a slice.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.entries[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over the entries of a column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().skip(col).step_by(self.cols).copied()
    }

    /// Return the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.entries.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    /// Multiply by the witness vector, in the field.
    fn mul_vector<F: Scalar>(&self, vector: &[F]) -> Vec<F> {
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(vector.iter())
                    .filter(|(a, _)| **a != 0)
                    .fold(F::zero(), |acc, (a, w)| acc.add(&F::from_i64(*a).mul(w)))
            })
            .collect()
    }
}

/// A rank-1 constraint system `(L w) o (R w) = (O w)`: one row per constraint,
/// one column per wire. Wire 0 carries the constant 1 by convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1CS {
    l: Matrix,
    r: Matrix,
    o: Matrix,
}

impl R1CS {
    /// Build the constraint system, checking that L, R and O share the same shape.
    pub fn new(l: Matrix, r: Matrix, o: Matrix) -> Result<Self> {
        let same_rows = l.rows() == r.rows() && r.rows() == o.rows();
        let same_cols = l.cols() == r.cols() && r.cols() == o.cols();
        if !same_rows || !same_cols {
            return Err(Groth16Error::MalformedCircuit);
        }
        Ok(Self { l, r, o })
    }

    /// Build the constraint system from nested rows.
    pub fn from_rows(l: Vec<Vec<i64>>, r: Vec<Vec<i64>>, o: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(Matrix::new(l)?, Matrix::new(r)?, Matrix::new(o)?)
    }

    /// Return the number of constraints `m`.
    pub fn num_constraints(&self) -> usize {
        self.l.rows()
    }

    /// Return the number of wires `n`, including the constant wire.
    pub fn num_wires(&self) -> usize {
        self.l.cols()
    }

    /// Return the left matrix.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// Return the right matrix.
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// Return the output matrix.
    pub fn o(&self) -> &Matrix {
        &self.o
    }

    /// Check that the witness has one entry per wire and assigns 1 to the constant wire.
    pub fn check_witness<F: Scalar>(&self, witness: &Witness<F>) -> Result<()> {
        if witness.len() != self.num_wires() || witness.values()[0] != F::one() {
            return Err(Groth16Error::MalformedCircuit);
        }
        Ok(())
    }

    /// Evaluate every constraint directly on the witness.
    pub fn is_satisfied_by<F: Scalar>(&self, witness: &Witness<F>) -> Result<bool> {
        self.check_witness(witness)?;
        let values = witness.values();
        let left = self.l.mul_vector(values);
        let right = self.r.mul_vector(values);
        let out = self.o.mul_vector(values);
        Ok(left
            .iter()
            .zip_eq(right.iter())
            .zip_eq(out.iter())
            .all(|((a, b), c)| a.mul(b) == *c))
    }
}

/// The full assignment of the circuit wires: a public prefix followed by a private suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness<F> {
    values: Vec<F>,
    num_public: usize,
}

impl<F: Scalar> Witness<F> {
    /// Concatenate the public and private parts.
    pub fn new(public: Vec<F>, private: Vec<F>) -> Self {
        let num_public = public.len();
        let mut values = public;
        values.extend(private);
        Self { values, num_public }
    }

    /// Embed integer public and private parts into the field.
    pub fn from_i64(public: &[i64], private: &[i64]) -> Self {
        Self::new(
            public.iter().map(|v| F::from_i64(*v)).collect(),
            private.iter().map(|v| F::from_i64(*v)).collect(),
        )
    }

    /// Return the number of wires assigned.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return true if no wire is assigned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the number of public entries.
    pub fn num_public(&self) -> usize {
        self.num_public
    }

    /// Return every wire value.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Return the public prefix.
    pub fn public_inputs(&self) -> &[F] {
        &self.values[..self.num_public]
    }

    /// Return the private suffix.
    pub fn private_inputs(&self) -> &[F] {
        &self.values[self.num_public..]
    }
}
