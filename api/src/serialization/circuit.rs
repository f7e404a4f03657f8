use r1zk_algebra::bls12_381::BLSScalar;
use r1zk_algebra::prelude::*;
use r1zk_groth16::errors::Groth16Error;
use r1zk_groth16::r1cs::{Witness, R1CS};

/// `r1cs.json`: the three constraint matrices as rows of integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct R1CSJson {
    #[serde(rename = "L")]
    pub l: Vec<Vec<i64>>,
    #[serde(rename = "R")]
    pub r: Vec<Vec<i64>>,
    #[serde(rename = "O")]
    pub o: Vec<Vec<i64>>,
}

impl R1CSJson {
    /// Check the shapes and build the constraint system.
    pub fn to_r1cs(&self) -> Result<R1CS, Groth16Error> {
        R1CS::from_rows(self.l.clone(), self.r.clone(), self.o.clone())
    }
}

impl From<&R1CS> for R1CSJson {
    fn from(r1cs: &R1CS) -> Self {
        Self {
            l: r1cs.l().to_rows(),
            r: r1cs.r().to_rows(),
            o: r1cs.o().to_rows(),
        }
    }
}

/// `witness.json`: the public prefix, starting with the constant wire, and the private suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WitnessJson {
    pub public_inputs: Vec<i64>,
    #[serde(default)]
    pub private_inputs: Vec<i64>,
}

impl WitnessJson {
    /// Embed both parts into the scalar field.
    pub fn to_witness(&self) -> Witness<BLSScalar> {
        Witness::from_i64(&self.public_inputs, &self.private_inputs)
    }

    /// Embed the public part only, as the verifier sees it.
    pub fn public_scalars(&self) -> Vec<BLSScalar> {
        self.public_inputs
            .iter()
            .map(|v| BLSScalar::from_i64(*v))
            .collect()
    }
}
