use crate::bls12_381::{BLSGt, BLSScalar, BLSG1, BLSG2};
use crate::traits::Pairing;
use ark_bls12_381::{Bls12_381, Config};
use ark_ec::{
    bls12::{G1Prepared, G2Prepared},
    pairing::Pairing as ArkPairing,
    CurveGroup,
};
use ark_std::vec::Vec;

/// The pairing engine for BLS12-381
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BLSPairingEngine;

impl Pairing for BLSPairingEngine {
    type ScalarField = BLSScalar;
    type G1 = BLSG1;
    type G2 = BLSG2;
    type Gt = BLSGt;

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BLSGt(Bls12_381::pairing(a.0, b.0).0)
    }

    #[inline]
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt {
        let c1: Vec<G1Prepared<Config>> = a.iter().map(|x| x.0.into_affine().into()).collect();
        let c2: Vec<G2Prepared<Config>> = b.iter().map(|x| x.0.into_affine().into()).collect();
        BLSGt(Bls12_381::multi_pairing(c1, c2).0)
    }
}
