use crate::bls12_381::{from_compressed, to_compressed, BLSPairingEngine, BLSScalar, BLSG1, BLSG2};
use crate::prelude::*;
use crate::traits::Pairing;
use ark_bls12_381::Fq12;
use ark_ff::{Field, PrimeField};

/// The wrapped struct for `ark_bls12_381::Fq12`, which is the pairing result.
///
/// The group is written additively: `Add` is field multiplication and scalar
/// multiplication is exponentiation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BLSGt(pub(crate) Fq12);

impl Default for BLSGt {
    fn default() -> Self {
        Self::get_identity()
    }
}

impl Neg for BLSGt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut v = self.0;
        v.conjugate_in_place();
        Self(v)
    }
}

impl<'a> Add<&'a BLSGt> for BLSGt {
    type Output = BLSGt;

    #[inline]
    fn add(self, rhs: &'a BLSGt) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> Sub<&'a BLSGt> for BLSGt {
    type Output = BLSGt;

    #[inline]
    fn sub(self, rhs: &'a BLSGt) -> Self::Output {
        self.add(&rhs.neg())
    }
}

impl<'a> Mul<&'a BLSScalar> for BLSGt {
    type Output = BLSGt;

    #[inline]
    fn mul(self, rhs: &'a BLSScalar) -> Self::Output {
        Self(self.0.pow(rhs.0.into_bigint()))
    }
}

impl<'a> AddAssign<&'a BLSGt> for BLSGt {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BLSGt) {
        self.0.mul_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BLSGt> for BLSGt {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BLSGt) {
        *self = self.sub(rhs)
    }
}

impl Group for BLSGt {
    type ScalarType = BLSScalar;
    const COMPRESSED_LEN: usize = 576;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.square())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(Fq12::one())
    }

    #[inline]
    fn get_base() -> Self {
        BLSPairingEngine::pairing(&BLSG1::get_base(), &BLSG2::get_base())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        BLSPairingEngine::pairing(&BLSG1::random(prng), &BLSG2::get_base())
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        to_compressed(&self.0)
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(from_compressed(bytes)?))
    }
}
