use crate::errors::{Groth16Error, Result};
use r1zk_algebra::prelude::*;

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, lowest degree first
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// use r1zk_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BLSScalar>::zero();
    /// let zero = BLSScalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.coefs, vec![zero]);
    /// assert_eq!(poly.eval(&BLSScalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficients are trimmed; an empty vector gives the zero polynomial.
    /// # Example
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// use r1zk_algebra::{Zero, One, ops::*};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&two), five);
    /// let poly2 = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero, zero]);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build the monic polynomial whose roots are `zeroes`.
    /// # Example
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// use r1zk_algebra::{Zero, One, ops::*};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// let poly = FpPolynomial::from_zeroes(&[zero, one, two]);
    /// assert_eq!(poly.degree(), 3);
    /// assert_eq!(poly.eval(&two), zero);
    /// assert_eq!(poly.coefs[3], one);
    /// ```
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let mut p = r.clone();
            r.coefs.insert(0, F::zero()); // multiply by X
            p.mul_scalar_assign(root);
            r.sub_assign(&p); // r = r * (X - root)
        }
        r
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let coefs = (0..=degree).map(|_| F::random(prng)).collect();
        Self::from_coefs(coefs)
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return degree of the polynomial; the zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefs.iter().all(|c| c.is_zero())
    }

    /// Evaluate a polynomial on a point with Horner's rule.
    /// # Example
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// // 5 + 5x + x^3 at x = 5
    /// let poly = FpPolynomial::from_coefs(vec![
    ///     BLSScalar::from(5u32),
    ///     BLSScalar::from(5u32),
    ///     BLSScalar::from(0u32),
    ///     BLSScalar::from(1u32),
    /// ]);
    /// assert_eq!(poly.eval(&BLSScalar::from(5u32)), BLSScalar::from(155u32));
    /// ```
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtracts another polynomial from self.
    /// # Example:
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// use r1zk_algebra::{Zero, One, ops::*};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// let three = two.add(&one);
    /// let mut poly1 = FpPolynomial::from_coefs(vec![three, three, two]);
    /// let poly2 = FpPolynomial::from_coefs(vec![three, two, one, one]);
    /// poly1.sub_assign(&poly2);
    /// let poly_expected = FpPolynomial::from_coefs(vec![zero, one, one, one.neg()]);
    /// assert_eq!(poly1, poly_expected);
    /// ```
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            self.coefs
                .extend(other.coefs[n..].iter().map(|other_coef| other_coef.neg()));
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg(&self) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(&F::one().neg());
        new
    }

    /// Multiply polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Multiply two polynomials by schoolbook convolution.
    ///
    /// Before trimming the product has `len(self) + len(other) - 1` coefficients.
    /// # Example:
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// use r1zk_algebra::{One, ops::*};
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// // (1 + x)(1 + x) = 1 + 2x + x^2
    /// let poly = FpPolynomial::from_coefs(vec![one, one]);
    /// assert_eq!(poly.mul(&poly), FpPolynomial::from_coefs(vec![one, two, one]));
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.coefs.is_empty() || other.coefs.is_empty() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coefs.iter().enumerate() {
                coefs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::from_coefs(coefs)
    }

    /// Divide by `divisor`, returning `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and `deg(remainder) < deg(divisor)`.
    ///
    /// The divisor is trimmed before use. Fails with `DivisionByZero` on the zero polynomial.
    /// # Example:
    /// ```
    /// use r1zk_groth16::poly::FpPolynomial;
    /// use r1zk_algebra::bls12_381::BLSScalar;
    /// use r1zk_algebra::{Zero, One, ops::*};
    /// let zero = BLSScalar::zero();
    /// let one = BLSScalar::one();
    /// let two = one.add(&one);
    /// // (x^2 + 2x + 2) = (x + 1)(x + 1) + 1
    /// let num = FpPolynomial::from_coefs(vec![two, two, one]);
    /// let den = FpPolynomial::from_coefs(vec![one, one]);
    /// let (q, r) = num.div_rem(&den).unwrap();
    /// assert_eq!(q, den);
    /// assert_eq!(r, FpPolynomial::one());
    /// assert!(num.div_rem(&FpPolynomial::from_coefs(vec![zero, zero])).is_err());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let divisor = Self::from_coefs(divisor.coefs.clone());
        if divisor.is_zero() {
            return Err(Groth16Error::DivisionByZero);
        }
        let k = self.coefs.len();
        let l = divisor.coefs.len();
        if l > k {
            return Ok((Self::zero(), Self::from_coefs(self.coefs.clone())));
        }
        let divisor_coefs = &divisor.coefs[..];
        let bl_inv = divisor_coefs[l - 1].inv()?;
        let mut rem = self.coefs.clone();
        let mut quo = vec![F::zero(); k - l + 1];
        for i in (0..(k - l + 1)).rev() {
            let qi = bl_inv.mul(&rem[i + l - 1]);
            for (j, d) in divisor_coefs.iter().enumerate() {
                rem[i + j].sub_assign(&qi.mul(d));
            }
            quo[i] = qi;
        }
        rem.truncate(l - 1);
        Ok((Self::from_coefs(quo), Self::from_coefs(rem)))
    }
}

#[cfg(test)]
mod test {
    use crate::errors::Groth16Error;
    use crate::poly::FpPolynomial;
    use r1zk_algebra::{bls12_381::BLSScalar, prelude::*};
    use rand_chacha::ChaChaRng;

    fn scalars(values: &[i64]) -> Vec<BLSScalar> {
        values.iter().map(|v| BLSScalar::from_i64(*v)).collect()
    }

    #[test]
    fn from_zeroes() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let zeroes: Vec<BLSScalar> = (0..10).map(|_| BLSScalar::random(&mut prng)).collect();
        let poly = FpPolynomial::from_zeroes(&zeroes[..]);
        assert_eq!(poly.degree(), 10);
        for root in zeroes.iter() {
            assert_eq!(BLSScalar::zero(), poly.eval(root));
        }
    }

    #[test]
    fn trimming() {
        let poly = FpPolynomial::from_coefs(scalars(&[0, 0, 0]));
        assert_eq!(poly, FpPolynomial::zero());
        assert!(poly.is_zero());

        let poly = FpPolynomial::<BLSScalar>::from_coefs(vec![]);
        assert_eq!(poly.coefs.len(), 1);

        let a = FpPolynomial::from_coefs(scalars(&[1, 2, 3]));
        let b = FpPolynomial::from_coefs(scalars(&[0, 0, 3]));
        assert_eq!(a.sub(&b).degree(), 1);
        assert_eq!(a.sub(&a), FpPolynomial::zero());
        assert_eq!(a.add(&a.neg()), FpPolynomial::zero());
        assert_eq!(a.mul_scalar(&BLSScalar::zero()), FpPolynomial::zero());
    }

    #[test]
    fn multiplication() {
        // (x - 1)(x + 1) = x^2 - 1
        let a = FpPolynomial::from_coefs(scalars(&[-1, 1]));
        let b = FpPolynomial::from_coefs(scalars(&[1, 1]));
        assert_eq!(a.mul(&b), FpPolynomial::from_coefs(scalars(&[-1, 0, 1])));

        let zero = FpPolynomial::zero();
        assert_eq!(a.mul(&zero), zero);
        assert_eq!(a.mul(&FpPolynomial::one()), a);

        let mut prng = ChaChaRng::from_seed([1u8; 32]);
        let p = FpPolynomial::<BLSScalar>::random(&mut prng, 7);
        let q = FpPolynomial::<BLSScalar>::random(&mut prng, 4);
        let x = BLSScalar::random(&mut prng);
        assert_eq!(p.mul(&q).eval(&x), p.eval(&x).mul(&q.eval(&x)));
        assert_eq!(p.mul(&q), q.mul(&p));
    }

    #[test]
    fn division_laws() {
        let mut prng = ChaChaRng::from_seed([2u8; 32]);
        for (deg_a, deg_b) in [(0, 0), (5, 1), (3, 3), (12, 6)] {
            let a = FpPolynomial::<BLSScalar>::random(&mut prng, deg_a);
            let b = FpPolynomial::<BLSScalar>::random(&mut prng, deg_b);
            let (q, r) = a.mul(&b).div_rem(&b).unwrap();
            assert_eq!(q, a);
            assert!(r.is_zero());
        }

        let num = FpPolynomial::<BLSScalar>::random(&mut prng, 9);
        let den = FpPolynomial::<BLSScalar>::random(&mut prng, 4);
        let (q, r) = num.div_rem(&den).unwrap();
        assert!(r.degree() < den.degree());
        assert_eq!(q.mul(&den).add(&r), num);
    }

    #[test]
    fn division_edge_cases() {
        let num = FpPolynomial::from_coefs(scalars(&[4, 5]));
        let den = FpPolynomial::from_coefs(scalars(&[1, 2, 3]));
        let (q, r) = num.div_rem(&den).unwrap();
        assert_eq!(q, FpPolynomial::zero());
        assert_eq!(r, num);

        // a short numerator with trailing zeroes comes back trimmed
        let padded = FpPolynomial {
            coefs: scalars(&[1, 0, 0]),
        };
        let den = FpPolynomial::from_coefs(scalars(&[0, 0, 0, 1]));
        let (q, r) = padded.div_rem(&den).unwrap();
        assert_eq!(q, FpPolynomial::zero());
        assert_eq!(r, FpPolynomial::one());
        assert_eq!(r.coefs.len(), 1);

        // trailing zeroes in the divisor are ignored
        let den = FpPolynomial {
            coefs: scalars(&[-1, 1, 0, 0]),
        };
        let num = FpPolynomial::from_coefs(scalars(&[-1, 0, 1]));
        let (q, r) = num.div_rem(&den).unwrap();
        assert_eq!(q, FpPolynomial::from_coefs(scalars(&[1, 1])));
        assert!(r.is_zero());

        let zero = FpPolynomial {
            coefs: scalars(&[0, 0]),
        };
        assert_eq!(num.div_rem(&zero), Err(Groth16Error::DivisionByZero));

        let constant = FpPolynomial::from_coefs(scalars(&[2]));
        let (q, r) = num.div_rem(&constant).unwrap();
        assert_eq!(q.mul_scalar(&BLSScalar::from(2u32)), num);
        assert!(r.is_zero());
    }
}
