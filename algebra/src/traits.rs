use crate::prelude::*;
use ark_std::fmt::{Debug, Display};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + for<'a> From<&'a BigUint>
    + Clone
    + One
    + Zero
    + Zeroize
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            for _ in 0..64 {
                if e & 1 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }

    /// Embed a signed integer; negative values map to the field negation of their magnitude.
    fn from_i64(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 {
            magnitude.neg()
        } else {
            magnitude
        }
    }

    /// Convert into BigUint, often for debug.
    fn into_biguint(self) -> BigUint {
        self.into()
    }
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Neg<Output = Self>
    + Serialize
    + for<'de> Deserialize<'de>
    + Sync
    + Send
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// Return the doubling of the group element
    fn double(&self) -> Self;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Compute the multiscalar multiplication `sum_i scalars[i] * points[i]`.
    ///
    /// Extra entries on the longer side are ignored; callers check lengths.
    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&p.mul(s)))
    }
}

/// The trait for a pair of groups for pairing
pub trait Pairing {
    /// The scalar type
    type ScalarField: Scalar;

    /// The first group
    type G1: Group<ScalarType = Self::ScalarField>;

    /// The second group
    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group, written additively
    type Gt: Group<ScalarType = Self::ScalarField>;

    /// The pairing operation
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// The product of pairing operation
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt;
}

#[cfg(test)]
pub(crate) mod group_tests {
    use crate::prelude::*;

    pub(crate) fn test_scalar_operations<S: Scalar>() {
        let a = S::from(40u32);
        let b = S::from(60u32);
        assert_eq!(a.add(&b), S::from(100u32));

        let mut x = S::from(0u32);
        x.add_assign(&a);
        x.add_assign(&b);
        assert_eq!(x, S::from(100u32));

        let c = S::from(10u32).mul(&b);
        assert_eq!(c, S::from(600u32));

        let a = S::from(0xFFFFFFFFu32);
        assert_eq!(a.add(&S::one()), S::from(0x100000000u64));

        let mut x = S::from(120u32);
        x.sub_assign(&b);
        x.sub_assign(&S::from(40u32));
        assert_eq!(x, S::from(20u32));

        let a = S::from(40u32);
        assert_eq!(a.neg().add(&a), S::zero());
        assert_eq!(a.inv().unwrap().mul(&a), S::one());
        assert!(S::zero().inv().is_err());

        assert_eq!(S::from(3u32).pow(&[20]), S::from(3486784401u64));
        assert_eq!(S::from(7u32).square(), S::from(49u32));
    }

    pub(crate) fn test_signed_embedding<S: Scalar>() {
        assert_eq!(S::from_i64(0), S::zero());
        assert_eq!(S::from_i64(155), S::from(155u32));
        assert_eq!(S::from_i64(-5).add(&S::from(5u32)), S::zero());
        assert_eq!(S::from_i64(-5), S::from(5u32).neg());

        let min = S::from_i64(i64::MIN);
        assert_eq!(min.add(&S::from(1u64 << 63)), S::zero());

        let modulus_minus_one = S::get_field_size_biguint() - 1u32;
        assert_eq!(S::from_i64(-1).into_biguint(), modulus_minus_one);
    }

    pub(crate) fn test_scalar_serialization<S: Scalar>() {
        let a = S::from(100u32);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), S::bytes_len());
        let b = S::from_bytes(bytes.as_slice()).unwrap();
        assert_eq!(a, b);

        let json = serde_json::to_string(&a).unwrap();
        let c: S = serde_json::from_str(&json).unwrap();
        assert_eq!(a, c);
    }

    pub(crate) fn run_multiexp_test<G: Group>() {
        let g = G::multi_exp(&[], &[]);
        assert_eq!(g, G::get_identity());

        let g1 = G::get_base();
        let zero = G::ScalarType::from(0u32);
        let one = G::ScalarType::from(1u32);
        assert_eq!(G::multi_exp(&[&zero], &[&g1]), G::get_identity());
        assert_eq!(G::multi_exp(&[&one, &zero], &[&g1, &g1]), G::get_base());

        let g2 = g1.add(&g1);
        let g3 = g1.mul(&G::ScalarType::from(500u32));
        let thousand = G::ScalarType::from(1000u32);
        let two = G::ScalarType::from(2u32);
        let three = G::ScalarType::from(3u32);
        let g = G::multi_exp(&[&thousand, &two, &three], &[&g1, &g2, &g3]);
        let expected = G::get_base().mul(&G::ScalarType::from((1000 + 4 + 1500) as u32));
        assert_eq!(g, expected);
        assert_eq!(g1.double(), g2);
    }

    pub(crate) fn test_group_serialization<G: Group>() {
        let mut prng = test_rng();
        let p = G::random(&mut prng);
        let bytes = p.to_compressed_bytes();
        assert_eq!(bytes.len(), G::COMPRESSED_LEN);
        assert_eq!(G::from_compressed_bytes(&bytes).unwrap(), p);
        assert!(G::from_compressed_bytes(&bytes[1..]).is_err());

        let json = serde_json::to_string(&p).unwrap();
        let q: G = serde_json::from_str(&json).unwrap();
        assert_eq!(p, q);
    }
}
