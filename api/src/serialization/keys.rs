use super::points::{g1_vec_from_json, g1_vec_to_json, g2_vec_from_json, g2_vec_to_json};
use super::{G1Json, G2Json};
use crate::errors::{ApiError, Result};
use crate::Engine;
use r1zk_algebra::bls12_381::{BLSG1, BLSG2};
use r1zk_algebra::errors::AlgebraError;
use r1zk_groth16::errors::Groth16Error;
use r1zk_groth16::groth16::{Proof, ProvingKey, VerifyingKey};

/// `pk.json`: `srs1`, `srs2` and `srs3` are Omega, Theta and Upsilon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvingKeyJson {
    pub srs1: Vec<G1Json>,
    pub srs2: Vec<G2Json>,
    pub srs3: Vec<G1Json>,
    pub alpha: G1Json,
    pub beta: G2Json,
    pub prover_psi: Vec<G1Json>,
    pub beta_g1: G1Json,
    pub delta_g1: G1Json,
    pub delta_g2: G2Json,
    pub num_public: usize,
}

impl From<&ProvingKey<Engine>> for ProvingKeyJson {
    fn from(pk: &ProvingKey<Engine>) -> Self {
        Self {
            srs1: g1_vec_to_json(&pk.omega),
            srs2: g2_vec_to_json(&pk.theta),
            srs3: g1_vec_to_json(&pk.upsilon),
            alpha: G1Json::from(&pk.alpha_g1),
            beta: G2Json::from(&pk.beta_g2),
            prover_psi: g1_vec_to_json(&pk.private_psi),
            beta_g1: G1Json::from(&pk.beta_g1),
            delta_g1: G1Json::from(&pk.delta_g1),
            delta_g2: G2Json::from(&pk.delta_g2),
            num_public: pk.num_public,
        }
    }
}

impl TryFrom<&ProvingKeyJson> for ProvingKey<Engine> {
    type Error = ApiError;

    fn try_from(json: &ProvingKeyJson) -> Result<Self> {
        Ok(ProvingKey {
            omega: g1_vec_from_json(&json.srs1)?,
            theta: g2_vec_from_json(&json.srs2)?,
            upsilon: g1_vec_from_json(&json.srs3)?,
            alpha_g1: BLSG1::try_from(&json.alpha)?,
            beta_g2: BLSG2::try_from(&json.beta)?,
            beta_g1: BLSG1::try_from(&json.beta_g1)?,
            delta_g1: BLSG1::try_from(&json.delta_g1)?,
            delta_g2: BLSG2::try_from(&json.delta_g2)?,
            private_psi: g1_vec_from_json(&json.prover_psi)?,
            num_public: json.num_public,
        })
    }
}

/// `vk.json`: `teta` is `delta * G2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyingKeyJson {
    pub alpha: G1Json,
    pub beta: G2Json,
    pub gamma: G2Json,
    pub teta: G2Json,
    pub verifier_psi: Vec<G1Json>,
}

impl From<&VerifyingKey<Engine>> for VerifyingKeyJson {
    fn from(vk: &VerifyingKey<Engine>) -> Self {
        Self {
            alpha: G1Json::from(&vk.alpha_g1),
            beta: G2Json::from(&vk.beta_g2),
            gamma: G2Json::from(&vk.gamma_g2),
            teta: G2Json::from(&vk.delta_g2),
            verifier_psi: g1_vec_to_json(&vk.public_psi),
        }
    }
}

impl TryFrom<&VerifyingKeyJson> for VerifyingKey<Engine> {
    type Error = ApiError;

    fn try_from(json: &VerifyingKeyJson) -> Result<Self> {
        Ok(VerifyingKey {
            alpha_g1: BLSG1::try_from(&json.alpha)?,
            beta_g2: BLSG2::try_from(&json.beta)?,
            gamma_g2: BLSG2::try_from(&json.gamma)?,
            delta_g2: BLSG2::try_from(&json.teta)?,
            public_psi: g1_vec_from_json(&json.verifier_psi)?,
        })
    }
}

/// `proof.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    #[serde(rename = "A")]
    pub a: G1Json,
    #[serde(rename = "B")]
    pub b: G2Json,
    #[serde(rename = "C")]
    pub c: G1Json,
}

impl From<&Proof<Engine>> for ProofJson {
    fn from(proof: &Proof<Engine>) -> Self {
        Self {
            a: G1Json::from(&proof.a),
            b: G2Json::from(&proof.b),
            c: G1Json::from(&proof.c),
        }
    }
}

/// A proof point that fails to decode is reported as `PairingFailure`.
impl TryFrom<&ProofJson> for Proof<Engine> {
    type Error = ApiError;

    fn try_from(json: &ProofJson) -> Result<Self> {
        let decode = |e: AlgebraError| {
            tracing::warn!("invalid proof element: {}", e);
            ApiError::Groth16(Groth16Error::PairingFailure)
        };
        Ok(Proof {
            a: BLSG1::try_from(&json.a).map_err(decode)?,
            b: BLSG2::try_from(&json.b).map_err(decode)?,
            c: BLSG1::try_from(&json.c).map_err(decode)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::R1CSJson;
    use r1zk_algebra::bls12_381::BLSScalar;
    use r1zk_algebra::prelude::*;
    use r1zk_groth16::groth16::{prove, setup};
    use r1zk_groth16::r1cs::Witness;
    use rand_chacha::ChaChaRng;

    fn cubic_keys() -> (ProvingKey<Engine>, VerifyingKey<Engine>, Proof<Engine>) {
        let r1cs = R1CSJson {
            l: vec![vec![0, 0, 0, 1], vec![0, 0, 0, 1]],
            r: vec![vec![0, 0, 0, 1], vec![0, 0, 1, 0]],
            o: vec![vec![0, 0, 1, 0], vec![-5, 1, 0, -5]],
        }
        .to_r1cs()
        .unwrap();
        let mut prng = ChaChaRng::from_seed([7u8; 32]);
        let (pk, vk) = setup::<Engine, _>(&mut prng, &r1cs, 2).unwrap();
        let witness = Witness::<BLSScalar>::from_i64(&[1, 155], &[25, 5]);
        let proof = prove(&pk, &r1cs, &witness).unwrap();
        (pk, vk, proof)
    }

    #[test]
    fn keys_and_proof_survive_json() {
        let (pk, vk, proof) = cubic_keys();

        let text = serde_json::to_string(&ProvingKeyJson::from(&pk)).unwrap();
        let json: ProvingKeyJson = serde_json::from_str(&text).unwrap();
        assert_eq!(ProvingKey::<Engine>::try_from(&json).unwrap(), pk);

        let text = serde_json::to_string(&VerifyingKeyJson::from(&vk)).unwrap();
        let json: VerifyingKeyJson = serde_json::from_str(&text).unwrap();
        assert_eq!(VerifyingKey::<Engine>::try_from(&json).unwrap(), vk);

        let text = serde_json::to_string(&ProofJson::from(&proof)).unwrap();
        let json: ProofJson = serde_json::from_str(&text).unwrap();
        assert_eq!(Proof::<Engine>::try_from(&json).unwrap(), proof);
    }

    #[test]
    fn reference_field_names() {
        let (pk, vk, proof) = cubic_keys();

        let value = serde_json::to_value(ProvingKeyJson::from(&pk)).unwrap();
        for field in [
            "srs1", "srs2", "srs3", "alpha", "beta", "proverPsi", "betaG1", "deltaG1", "deltaG2",
            "numPublic",
        ] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(value["srs3"].as_array().unwrap().len(), 1);
        assert_eq!(value["numPublic"], 2);

        let value = serde_json::to_value(VerifyingKeyJson::from(&vk)).unwrap();
        for field in ["alpha", "beta", "gamma", "teta", "verifierPsi"] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
        assert!(value["teta"].get("x1").is_some());

        let value = serde_json::to_value(ProofJson::from(&proof)).unwrap();
        for field in ["A", "B", "C"] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
        assert!(value["A"].get("x").is_some());
    }

    #[test]
    fn off_curve_proof_is_a_pairing_failure() {
        let (_, _, proof) = cubic_keys();
        let mut json = ProofJson::from(&proof);
        json.c.y = json.a.y.clone();
        assert!(matches!(
            Proof::<Engine>::try_from(&json),
            Err(ApiError::Groth16(Groth16Error::PairingFailure))
        ));
    }
}
