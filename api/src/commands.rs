use crate::errors::Result;
use crate::files::{load_json, save_json};
use crate::serialization::{ProofJson, ProvingKeyJson, R1CSJson, VerifyingKeyJson, WitnessJson};
use crate::Engine;
use r1zk_algebra::prelude::*;
use r1zk_groth16::groth16::{self, Proof, ProvingKey, VerifyingKey};
use std::fs;
use std::path::Path;

/// The proving key file written by [`setup`].
pub const PK_FILE: &str = "pk.json";
/// The verifying key file written by [`setup`].
pub const VK_FILE: &str = "vk.json";

/// Run the trusted setup for the circuit in `r1cs_path`, taking the number of public
/// inputs from `witness_path`, and write `pk.json` and `vk.json` into `out_dir`.
pub fn setup<R: CryptoRng + RngCore>(
    prng: &mut R,
    r1cs_path: &Path,
    witness_path: &Path,
    out_dir: &Path,
) -> Result<()> {
    let r1cs = load_json::<R1CSJson, _>(r1cs_path)?.to_r1cs()?;
    let witness: WitnessJson = load_json(witness_path)?;
    let num_public = witness.public_inputs.len();

    let (pk, vk) = groth16::setup::<Engine, _>(prng, &r1cs, num_public)?;

    fs::create_dir_all(out_dir)?;
    save_json(out_dir.join(PK_FILE), &ProvingKeyJson::from(&pk))?;
    save_json(out_dir.join(VK_FILE), &VerifyingKeyJson::from(&vk))?;
    tracing::info!(
        num_constraints = r1cs.num_constraints(),
        num_wires = r1cs.num_wires(),
        num_public,
        out_dir = %out_dir.display(),
        "wrote proving and verifying keys"
    );
    Ok(())
}

/// Prove the witness in `witness_path` against the circuit and write `proof_path`.
///
/// With `blind` set, `A`, `B` and `C` are randomized with scalars drawn from `prng`.
pub fn prove<R: CryptoRng + RngCore>(
    prng: &mut R,
    pk_path: &Path,
    r1cs_path: &Path,
    witness_path: &Path,
    proof_path: &Path,
    blind: bool,
) -> Result<()> {
    let pk = ProvingKey::<Engine>::try_from(&load_json::<ProvingKeyJson, _>(pk_path)?)?;
    let r1cs = load_json::<R1CSJson, _>(r1cs_path)?.to_r1cs()?;
    let witness = load_json::<WitnessJson, _>(witness_path)?.to_witness();

    let proof = if blind {
        groth16::prove_with_blinding(prng, &pk, &r1cs, &witness)?
    } else {
        groth16::prove(&pk, &r1cs, &witness)?
    };

    save_json(proof_path, &ProofJson::from(&proof))?;
    tracing::info!(proof = %proof_path.display(), blind, "wrote proof");
    Ok(())
}

/// Check the proof in `proof_path` against the public inputs of `witness_path`.
///
/// Only `publicInputs` is read from the witness file.
pub fn verify(vk_path: &Path, proof_path: &Path, witness_path: &Path) -> Result<bool> {
    let vk = VerifyingKey::<Engine>::try_from(&load_json::<VerifyingKeyJson, _>(vk_path)?)?;
    let proof = Proof::<Engine>::try_from(&load_json::<ProofJson, _>(proof_path)?)?;
    let public_inputs = load_json::<WitnessJson, _>(witness_path)?.public_scalars();

    let valid = groth16::verify(&vk, &proof, &public_inputs)?;
    tracing::info!(valid, "verified proof");
    Ok(valid)
}
