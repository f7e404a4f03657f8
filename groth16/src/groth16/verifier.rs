use crate::errors::{Groth16Error, Result};
use crate::groth16::prover::Proof;
use crate::groth16::setup::{PreparedVerifyingKey, VerifyingKey};
use ark_std::{end_timer, start_timer};
use r1zk_algebra::prelude::*;

/// Check `proof` against the public inputs.
///
/// Returns `Ok(false)` if the pairing equation does not hold, and
/// `PublicInputMismatch` if the number of inputs differs from the key.
pub fn verify<P: Pairing>(
    vk: &VerifyingKey<P>,
    proof: &Proof<P>,
    public_inputs: &[P::ScalarField],
) -> Result<bool> {
    if public_inputs.len() != vk.num_public() {
        return Err(Groth16Error::PublicInputMismatch);
    }
    let alpha_beta = P::pairing(&vk.alpha_g1, &vk.beta_g2);
    check_pairing_equation(vk, &alpha_beta, proof, public_inputs)
}

/// Same as [`verify`], reusing the cached `e(alpha, beta)`.
pub fn verify_prepared<P: Pairing>(
    pvk: &PreparedVerifyingKey<P>,
    proof: &Proof<P>,
    public_inputs: &[P::ScalarField],
) -> Result<bool> {
    if public_inputs.len() != pvk.vk.num_public() {
        return Err(Groth16Error::PublicInputMismatch);
    }
    check_pairing_equation(&pvk.vk, &pvk.alpha_beta, proof, public_inputs)
}

/// `X = sum_i public_inputs[i] * public_psi[i]`
pub(crate) fn public_commitment<P: Pairing>(
    vk: &VerifyingKey<P>,
    public_inputs: &[P::ScalarField],
) -> P::G1 {
    let scalars: Vec<&P::ScalarField> = public_inputs.iter().collect();
    let points: Vec<&P::G1> = vk.public_psi.iter().collect();
    P::G1::multi_exp(&scalars, &points)
}

// e(A, B) = e(alpha, beta) + e(C, delta) + e(X, gamma), with Gt written additively
fn check_pairing_equation<P: Pairing>(
    vk: &VerifyingKey<P>,
    alpha_beta: &P::Gt,
    proof: &Proof<P>,
    public_inputs: &[P::ScalarField],
) -> Result<bool> {
    let verifier_timer = start_timer!(|| "Groth16::Verifier");
    let x = public_commitment(vk, public_inputs);
    let lhs = P::pairing(&proof.a, &proof.b);
    let rhs = alpha_beta.add(&P::product_of_pairings(
        &[proof.c, x],
        &[vk.delta_g2, vk.gamma_g2],
    ));
    end_timer!(verifier_timer);

    if lhs == rhs {
        tracing::debug!(num_public = public_inputs.len(), "proof verified");
        Ok(true)
    } else {
        tracing::warn!("pairing check failed");
        Ok(false)
    }
}
