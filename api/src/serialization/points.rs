use r1zk_algebra::bls12_381::{BLSFq, BLSG1, BLSG2};
use r1zk_algebra::prelude::*;
use std::str::FromStr;

/// An affine G1 point as decimal coordinates; the identity is `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1Json {
    pub x: String,
    pub y: String,
}

/// An affine G2 point as the `c0`, `c1` decimal components of each coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2Json {
    pub x0: String,
    pub x1: String,
    pub y0: String,
    pub y1: String,
}

impl From<&BLSG1> for G1Json {
    fn from(point: &BLSG1) -> Self {
        Self {
            x: point.get_x().to_string(),
            y: point.get_y().to_string(),
        }
    }
}

impl TryFrom<&G1Json> for BLSG1 {
    type Error = AlgebraError;

    fn try_from(json: &G1Json) -> Result<Self, AlgebraError> {
        BLSG1::from_xy(BLSFq::from_str(&json.x)?, BLSFq::from_str(&json.y)?)
    }
}

impl From<&BLSG2> for G2Json {
    fn from(point: &BLSG2) -> Self {
        let (x0, x1) = point.get_x();
        let (y0, y1) = point.get_y();
        Self {
            x0: x0.to_string(),
            x1: x1.to_string(),
            y0: y0.to_string(),
            y1: y1.to_string(),
        }
    }
}

impl TryFrom<&G2Json> for BLSG2 {
    type Error = AlgebraError;

    fn try_from(json: &G2Json) -> Result<Self, AlgebraError> {
        BLSG2::from_xy(
            (BLSFq::from_str(&json.x0)?, BLSFq::from_str(&json.x1)?),
            (BLSFq::from_str(&json.y0)?, BLSFq::from_str(&json.y1)?),
        )
    }
}

pub(crate) fn g1_vec_to_json(points: &[BLSG1]) -> Vec<G1Json> {
    points.iter().map(G1Json::from).collect()
}

pub(crate) fn g1_vec_from_json(points: &[G1Json]) -> Result<Vec<BLSG1>, AlgebraError> {
    points.iter().map(BLSG1::try_from).collect()
}

pub(crate) fn g2_vec_to_json(points: &[BLSG2]) -> Vec<G2Json> {
    points.iter().map(G2Json::from).collect()
}

pub(crate) fn g2_vec_from_json(points: &[G2Json]) -> Result<Vec<BLSG2>, AlgebraError> {
    points.iter().map(BLSG2::try_from).collect()
}
