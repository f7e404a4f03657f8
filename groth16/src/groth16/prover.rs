use crate::errors::{Groth16Error, Result};
use crate::groth16::setup::ProvingKey;
use crate::poly::FpPolynomial;
use crate::qap::r1cs_to_qap;
use crate::r1cs::{Witness, R1CS};
use ark_std::{end_timer, start_timer};
use r1zk_algebra::prelude::*;

/// A Groth16 proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<P: Pairing> {
    /// `A` in G1
    pub a: P::G1,
    /// `B` in G2
    pub b: P::G2,
    /// `C` in G1
    pub c: P::G1,
}

/// Prove that `witness` satisfies `r1cs`, without blinding.
///
/// The output is a deterministic function of the key, circuit and witness.
pub fn prove<P: Pairing>(
    pk: &ProvingKey<P>,
    r1cs: &R1CS,
    witness: &Witness<P::ScalarField>,
) -> Result<Proof<P>> {
    prove_inner(pk, r1cs, witness, None)
}

/// Prove that `witness` satisfies `r1cs`, blinding `A`, `B` and `C` with fresh
/// scalars `r`, `s` drawn from `prng`.
pub fn prove_with_blinding<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    pk: &ProvingKey<P>,
    r1cs: &R1CS,
    witness: &Witness<P::ScalarField>,
) -> Result<Proof<P>> {
    let mut r = P::ScalarField::random(prng);
    let mut s = P::ScalarField::random(prng);
    let proof = prove_inner(pk, r1cs, witness, Some((&r, &s)));
    r.zeroize();
    s.zeroize();
    proof
}

fn prove_inner<P: Pairing>(
    pk: &ProvingKey<P>,
    r1cs: &R1CS,
    witness: &Witness<P::ScalarField>,
    blinding: Option<(&P::ScalarField, &P::ScalarField)>,
) -> Result<Proof<P>> {
    let prover_timer = start_timer!(|| "Groth16::Prover");
    r1cs.check_witness(witness).map_err(|_| Groth16Error::InvalidWitness)?;
    if witness.num_public() != pk.num_public
        || pk.num_public + pk.private_psi.len() != witness.len()
    {
        return Err(Groth16Error::SRSLengthMismatch);
    }

    let qap = r1cs_to_qap(r1cs, witness)?;

    let timer = start_timer!(|| "Commit to u, v, h");
    let mut a = commit_coefs(&pk.omega, &qap.u)?.add(&pk.alpha_g1);
    let mut b = commit_coefs(&pk.theta, &qap.v)?.add(&pk.beta_g2);
    let scalars: Vec<&P::ScalarField> = witness.private_inputs().iter().collect();
    let points: Vec<&P::G1> = pk.private_psi.iter().collect();
    let mut c = P::G1::multi_exp(&scalars, &points).add(&commit_coefs(&pk.upsilon, &qap.h)?);
    end_timer!(timer);

    if let Some((r, s)) = blinding {
        // B is also needed in G1 to cancel the cross terms in C
        let b_g1 = commit_coefs(&pk.omega, &qap.v)?
            .add(&pk.beta_g1)
            .add(&pk.delta_g1.mul(s));
        a = a.add(&pk.delta_g1.mul(r));
        b = b.add(&pk.delta_g2.mul(s));
        c = c
            .add(&a.mul(s))
            .add(&b_g1.mul(r))
            .sub(&pk.delta_g1.mul(&r.mul(s)));
    }

    end_timer!(prover_timer);
    tracing::debug!(
        num_constraints = r1cs.num_constraints(),
        num_wires = r1cs.num_wires(),
        blinded = blinding.is_some(),
        "generated proof"
    );
    Ok(Proof { a, b, c })
}

/// `sum_i coefs[i] * bases[i]`, failing if the polynomial needs more bases than given.
fn commit_coefs<G: Group>(bases: &[G], poly: &FpPolynomial<G::ScalarType>) -> Result<G> {
    let coefs = poly.get_coefs_ref();
    let used = coefs
        .iter()
        .rposition(|c| !c.is_zero())
        .map_or(0, |i| i + 1);
    if used > bases.len() {
        return Err(Groth16Error::SRSLengthMismatch);
    }
    if used == 0 {
        return Ok(G::get_identity());
    }
    let scalars: Vec<&G::ScalarType> = coefs[..used].iter().collect();
    let points: Vec<&G> = bases[..used].iter().collect();
    Ok(G::multi_exp(&scalars, &points))
}
