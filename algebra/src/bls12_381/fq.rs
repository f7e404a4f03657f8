use crate::prelude::*;
use ark_bls12_381::Fq;
use ark_ff::PrimeField;
use ark_std::{
    fmt::{Debug, Display, Formatter},
    result::Result as StdResult,
    str::FromStr,
};
use num_bigint::BigUint;

/// The wrapped struct for `ark_bls12_381::Fq`, the base field of the curve.
///
/// Only used to carry affine coordinates; arithmetic stays inside arkworks.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BLSFq(pub(crate) Fq);

impl BLSFq {
    /// Return the field size as a BigUint
    #[inline]
    pub fn get_field_size_biguint() -> BigUint {
        Fq::MODULUS.into()
    }

    /// Return true if the element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Debug for BLSFq {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <BigUint as Debug>::fmt(&(*self).into(), f)
    }
}

impl Display for BLSFq {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <BigUint as Display>::fmt(&(*self).into(), f)
    }
}

impl FromStr for BLSFq {
    type Err = AlgebraError;

    fn from_str(string: &str) -> StdResult<Self, AlgebraError> {
        let value = parse_decimal_below(string, &Self::get_field_size_biguint())?;
        Ok(Self::from(&value))
    }
}

impl Into<BigUint> for BLSFq {
    #[inline]
    fn into(self) -> BigUint {
        self.0.into_bigint().into()
    }
}

impl<'a> From<&'a BigUint> for BLSFq {
    #[inline]
    fn from(src: &BigUint) -> Self {
        Self(Fq::from(src.clone()))
    }
}

impl From<u64> for BLSFq {
    #[inline]
    fn from(value: u64) -> Self {
        Self(Fq::from(value))
    }
}
