use crate::bls12_381::{from_compressed, to_compressed, BLSFq, BLSScalar};
use crate::prelude::*;
use ark_bls12_381::{Fq2, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_std::fmt::{Debug, Display, Formatter};

/// The wrapped struct for `ark_bls12_381::G2Projective`
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BLSG2(pub(crate) G2Projective);

impl Debug for BLSG2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <G2Affine as Display>::fmt(&self.0.into_affine(), f)
    }
}

impl Group for BLSG2 {
    type ScalarType = BLSScalar;
    const COMPRESSED_LEN: usize = 96;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.double())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G2Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G2Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G2Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        to_compressed(&self.0.into_affine())
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine: G2Affine = from_compressed(bytes)?;
        Ok(Self(affine.into_group()))
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G2Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G2Projective>>(),
        );

        Self(G2Projective::msm_unchecked(&points_raw, &scalars_raw))
    }
}

impl<'a> Add<&'a BLSG2> for BLSG2 {
    type Output = BLSG2;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl<'a> Sub<&'a BLSG2> for BLSG2 {
    type Output = BLSG2;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl<'a> Mul<&'a BLSScalar> for BLSG2 {
    type Output = BLSG2;

    #[inline]
    fn mul(self, rhs: &BLSScalar) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> AddAssign<&'a BLSG2> for BLSG2 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BLSG2) {
        self.0.add_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BLSG2> for BLSG2 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BLSG2) {
        self.0.sub_assign(&rhs.0)
    }
}

impl Neg for BLSG2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl BLSG2 {
    /// Get the x-coordinate `(c0, c1)` of the affine point; zero for the identity.
    #[inline]
    pub fn get_x(&self) -> (BLSFq, BLSFq) {
        let x = self.0.into_affine().x;
        (BLSFq(x.c0), BLSFq(x.c1))
    }

    /// Get the y-coordinate `(c0, c1)` of the affine point; zero for the identity.
    #[inline]
    pub fn get_y(&self) -> (BLSFq, BLSFq) {
        let y = self.0.into_affine().y;
        (BLSFq(y.c0), BLSFq(y.c1))
    }

    /// Construct from the `(c0, c1)` pairs of the affine coordinates, checking curve and
    /// subgroup membership. All-zero coordinates decode to the identity.
    pub fn from_xy(x: (BLSFq, BLSFq), y: (BLSFq, BLSFq)) -> Result<Self> {
        if x.0.is_zero() && x.1.is_zero() && y.0.is_zero() && y.1.is_zero() {
            return Ok(Self::get_identity());
        }
        let (x0, x1) = x;
        let (y0, y1) = y;
        let affine = G2Affine::new_unchecked(Fq2::new(x0.0, x1.0), Fq2::new(y0.0, y1.0));
        if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
            return Err(AlgebraError::DecompressElementError);
        }
        Ok(Self(affine.into_group()))
    }
}
