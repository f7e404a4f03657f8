use crate::errors::{Groth16Error, Result};
use crate::poly::FpPolynomial;
use crate::qap::ColumnPolynomials;
use crate::r1cs::R1CS;
use ark_std::{end_timer, start_timer};
use r1zk_algebra::prelude::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The toxic waste of the setup. Zeroized when dropped.
pub(crate) struct Trapdoor<F: Scalar> {
    pub(crate) tau: F,
    pub(crate) alpha: F,
    pub(crate) beta: F,
    pub(crate) gamma: F,
    pub(crate) delta: F,
}

impl<F: Scalar> Trapdoor<F> {
    /// Sample fresh secrets, with `tau` outside the roots of `t`.
    pub(crate) fn sample<R: CryptoRng + RngCore>(prng: &mut R, t: &FpPolynomial<F>) -> Self {
        let mut tau = F::random(prng);
        while t.eval(&tau).is_zero() {
            tau = F::random(prng);
        }
        Self {
            tau,
            alpha: sample_nonzero(prng),
            beta: sample_nonzero(prng),
            gamma: sample_nonzero(prng),
            delta: sample_nonzero(prng),
        }
    }
}

impl<F: Scalar> Drop for Trapdoor<F> {
    fn drop(&mut self) {
        self.tau.zeroize();
        self.alpha.zeroize();
        self.beta.zeroize();
        self.gamma.zeroize();
        self.delta.zeroize();
    }
}

fn sample_nonzero<F: Scalar, R: CryptoRng + RngCore>(prng: &mut R) -> F {
    loop {
        let x = F::random(prng);
        if !x.is_zero() {
            return x;
        }
    }
}

/// The proving key, i.e. the structured reference string handed to provers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProvingKey<P: Pairing> {
    /// `tau^i * G1` for `i` in `0..m`.
    pub omega: Vec<P::G1>,
    /// `tau^i * G2` for `i` in `0..m`.
    pub theta: Vec<P::G2>,
    /// `tau^i * t(tau) / delta * G1` for `i` in `0..m - 1`.
    pub upsilon: Vec<P::G1>,
    /// `alpha * G1`
    pub alpha_g1: P::G1,
    /// `beta * G2`
    pub beta_g2: P::G2,
    /// `beta * G1`
    pub beta_g1: P::G1,
    /// `delta * G1`
    pub delta_g1: P::G1,
    /// `delta * G2`
    pub delta_g2: P::G2,
    /// `psi_j / delta * G1` for the private wires.
    pub private_psi: Vec<P::G1>,
    /// The number of public wires, including the constant wire.
    pub num_public: usize,
}

/// The verifying key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifyingKey<P: Pairing> {
    /// `alpha * G1`
    pub alpha_g1: P::G1,
    /// `beta * G2`
    pub beta_g2: P::G2,
    /// `gamma * G2`
    pub gamma_g2: P::G2,
    /// `delta * G2`
    pub delta_g2: P::G2,
    /// `psi_j / gamma * G1` for the public wires.
    pub public_psi: Vec<P::G1>,
}

impl<P: Pairing> VerifyingKey<P> {
    /// Return the number of public inputs the key expects.
    pub fn num_public(&self) -> usize {
        self.public_psi.len()
    }

    /// Precompute `e(alpha, beta)` for repeated verification.
    pub fn prepare(self) -> PreparedVerifyingKey<P> {
        let alpha_beta = P::pairing(&self.alpha_g1, &self.beta_g2);
        PreparedVerifyingKey {
            vk: self,
            alpha_beta,
        }
    }
}

/// A verifying key together with the cached pairing of its constant terms.
#[derive(Debug, Clone)]
pub struct PreparedVerifyingKey<P: Pairing> {
    /// The underlying key.
    pub vk: VerifyingKey<P>,
    /// `e(alpha * G1, beta * G2)`
    pub alpha_beta: P::Gt,
}

/// Run the trusted setup for `r1cs`, treating the first `num_public` wires as public.
///
/// The trapdoor is sampled from `prng` and destroyed before returning.
pub fn setup<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    r1cs: &R1CS,
    num_public: usize,
) -> Result<(ProvingKey<P>, VerifyingKey<P>)> {
    if num_public > r1cs.num_wires() {
        tracing::warn!(
            num_public,
            num_wires = r1cs.num_wires(),
            "more public inputs than wires"
        );
        return Err(Groth16Error::SetupFailed);
    }
    let columns = ColumnPolynomials::new(r1cs)?;
    let trapdoor = Trapdoor::sample(prng, &columns.t);
    setup_with_trapdoor(&columns, num_public, &trapdoor)
}

pub(crate) fn setup_with_trapdoor<P: Pairing>(
    columns: &ColumnPolynomials<P::ScalarField>,
    num_public: usize,
    trapdoor: &Trapdoor<P::ScalarField>,
) -> Result<(ProvingKey<P>, VerifyingKey<P>)> {
    let setup_timer = start_timer!(|| "Groth16::Setup");
    let m = columns.num_constraints();
    let n = columns.num_wires();
    if num_public > n {
        return Err(Groth16Error::SetupFailed);
    }

    let g1 = P::G1::get_base();
    let g2 = P::G2::get_base();

    let timer = start_timer!(|| "Encode powers of tau");
    let mut powers = powers_of(&trapdoor.tau, m);
    let omega = encode(&g1, &powers);
    let theta = encode(&g2, &powers);

    let mut delta_inv = trapdoor.delta.inv()?;
    let mut gamma_inv = trapdoor.gamma.inv()?;
    let mut t_over_delta = columns.t.eval(&trapdoor.tau).mul(&delta_inv);
    let mut upsilon_scalars: Vec<P::ScalarField> = powers
        .iter()
        .take(m - 1)
        .map(|p| p.mul(&t_over_delta))
        .collect();
    let upsilon = encode(&g1, &upsilon_scalars);
    end_timer!(timer);

    let timer = start_timer!(|| "Encode wire commitments");
    let mut psi_scalars = wire_scalars(columns, trapdoor, num_public, &gamma_inv, &delta_inv);
    let mut psi = encode(&g1, &psi_scalars);
    let private_psi = psi.split_off(num_public);
    end_timer!(timer);

    powers.zeroize();
    upsilon_scalars.zeroize();
    psi_scalars.zeroize();
    delta_inv.zeroize();
    gamma_inv.zeroize();
    t_over_delta.zeroize();

    let pk = ProvingKey {
        omega,
        theta,
        upsilon,
        alpha_g1: g1.mul(&trapdoor.alpha),
        beta_g2: g2.mul(&trapdoor.beta),
        beta_g1: g1.mul(&trapdoor.beta),
        delta_g1: g1.mul(&trapdoor.delta),
        delta_g2: g2.mul(&trapdoor.delta),
        private_psi,
        num_public,
    };
    let vk = VerifyingKey {
        alpha_g1: pk.alpha_g1,
        beta_g2: pk.beta_g2,
        gamma_g2: g2.mul(&trapdoor.gamma),
        delta_g2: pk.delta_g2,
        public_psi: psi,
    };
    end_timer!(setup_timer);
    tracing::debug!(
        num_constraints = m,
        num_wires = n,
        num_public,
        "generated proving and verifying keys"
    );
    Ok((pk, vk))
}

fn powers_of<F: Scalar>(x: &F, count: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(count);
    let mut acc = F::one();
    for _ in 0..count {
        powers.push(acc);
        acc.mul_assign(x);
    }
    acc.zeroize();
    powers
}

/// `(beta * u_j(tau) + alpha * v_j(tau) + w_j(tau)) / (gamma or delta)` for every wire `j`.
fn wire_scalars<F: Scalar>(
    columns: &ColumnPolynomials<F>,
    trapdoor: &Trapdoor<F>,
    num_public: usize,
    gamma_inv: &F,
    delta_inv: &F,
) -> Vec<F> {
    let tau = &trapdoor.tau;
    columns
        .l
        .iter()
        .zip_eq(columns.r.iter())
        .zip_eq(columns.o.iter())
        .enumerate()
        .map(|(j, ((u, v), w))| {
            let mut u_tau = u.eval(tau);
            let mut v_tau = v.eval(tau);
            let mut psi = w.eval(tau);
            u_tau.mul_assign(&trapdoor.beta);
            v_tau.mul_assign(&trapdoor.alpha);
            psi.add_assign(&u_tau);
            psi.add_assign(&v_tau);
            u_tau.zeroize();
            v_tau.zeroize();

            // scaled in place
            if j < num_public {
                psi.mul_assign(gamma_inv);
            } else {
                psi.mul_assign(delta_inv);
            }
            psi
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn encode<G: Group>(base: &G, scalars: &[G::ScalarType]) -> Vec<G> {
    scalars.iter().map(|s| base.mul(s)).collect()
}

#[cfg(feature = "parallel")]
fn encode<G: Group>(base: &G, scalars: &[G::ScalarType]) -> Vec<G> {
    scalars.par_iter().map(|s| base.mul(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groth16::verifier::public_commitment;
    use crate::r1cs::tests::{cubic_circuit, cubic_witness};
    use r1zk_algebra::bls12_381::{BLSPairingEngine, BLSScalar};
    use rand_chacha::ChaChaRng;

    type E = BLSPairingEngine;

    fn known_trapdoor() -> Trapdoor<BLSScalar> {
        Trapdoor {
            tau: BLSScalar::from(7u32),
            alpha: BLSScalar::from(3u32),
            beta: BLSScalar::from(11u32),
            gamma: BLSScalar::from(13u32),
            delta: BLSScalar::from(17u32),
        }
    }

    #[test]
    fn key_sizes_follow_the_circuit() {
        let r1cs = cubic_circuit();
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        for k in 0..=r1cs.num_wires() {
            let (pk, vk) = setup::<E, _>(&mut prng, &r1cs, k).unwrap();
            assert_eq!(vk.public_psi.len(), k);
            assert_eq!(vk.num_public(), k);
            assert_eq!(pk.private_psi.len(), r1cs.num_wires() - k);
            assert_eq!(pk.num_public, k);
            assert_eq!(pk.omega.len(), 2);
            assert_eq!(pk.theta.len(), 2);
            assert_eq!(pk.upsilon.len(), 1);
        }
        assert_eq!(
            setup::<E, _>(&mut prng, &r1cs, 5).map(|_| ()),
            Err(Groth16Error::SetupFailed)
        );
    }

    #[test]
    fn encoded_values_match_the_trapdoor() {
        let r1cs = cubic_circuit();
        let columns = ColumnPolynomials::new(&r1cs).unwrap();
        let trapdoor = known_trapdoor();
        let (pk, vk) = setup_with_trapdoor::<E>(&columns, 2, &trapdoor).unwrap();

        let g1 = <E as Pairing>::G1::get_base();
        let g2 = <E as Pairing>::G2::get_base();
        let tau = BLSScalar::from(7u32);
        assert_eq!(pk.omega, vec![g1, g1.mul(&tau)]);
        assert_eq!(pk.theta, vec![g2, g2.mul(&tau)]);

        // t(7) = 7 * 6 = 42
        let upsilon = BLSScalar::from(42u32).mul(&BLSScalar::from(17u32).inv().unwrap());
        assert_eq!(pk.upsilon, vec![g1.mul(&upsilon)]);

        assert_eq!(pk.alpha_g1, g1.mul(&BLSScalar::from(3u32)));
        assert_eq!(vk.alpha_g1, pk.alpha_g1);
        assert_eq!(vk.gamma_g2, g2.mul(&BLSScalar::from(13u32)));
        assert_eq!(vk.delta_g2, g2.mul(&BLSScalar::from(17u32)));
    }

    #[test]
    fn public_commitment_matches_full_psi() {
        let r1cs = cubic_circuit();
        let columns = ColumnPolynomials::new(&r1cs).unwrap();
        let trapdoor = known_trapdoor();
        let (pk, vk) = setup_with_trapdoor::<E>(&columns, 2, &trapdoor).unwrap();

        // psi_j evaluated directly from the matrices' columns at tau = 7
        let tau = BLSScalar::from(7u32);
        let gamma_inv = BLSScalar::from(13u32).inv().unwrap();
        let delta_inv = BLSScalar::from(17u32).inv().unwrap();
        let g1 = <E as Pairing>::G1::get_base();
        let full_psi: Vec<_> = (0..r1cs.num_wires())
            .map(|j| {
                let u = columns.l[j].eval(&tau);
                let v = columns.r[j].eval(&tau);
                let w = columns.o[j].eval(&tau);
                let s = BLSScalar::from(11u32) * u + BLSScalar::from(3u32) * v + w;
                g1.mul(&(s * if j < 2 { gamma_inv } else { delta_inv }))
            })
            .collect();
        assert_eq!(vk.public_psi[..], full_psi[..2]);
        assert_eq!(pk.private_psi[..], full_psi[2..]);

        let witness = cubic_witness(155);
        let scalars: Vec<_> = witness.values()[..2].iter().collect();
        let points: Vec<_> = full_psi[..2].iter().collect();
        let expected = <E as Pairing>::G1::multi_exp(&scalars, &points);
        assert_eq!(public_commitment(&vk, witness.public_inputs()), expected);
    }

    #[test]
    fn wire_scalars_split_between_gamma_and_delta() {
        let r1cs = cubic_circuit();
        let columns = ColumnPolynomials::new(&r1cs).unwrap();
        let trapdoor = known_trapdoor();
        let gamma_inv = BLSScalar::from(13u32).inv().unwrap();
        let delta_inv = BLSScalar::from(17u32).inv().unwrap();

        for num_public in [0, 2, 4] {
            let scalars = wire_scalars(&columns, &trapdoor, num_public, &gamma_inv, &delta_inv);
            assert_eq!(scalars.len(), r1cs.num_wires());
            for (j, s) in scalars.iter().enumerate() {
                let tau = BLSScalar::from(7u32);
                let psi = BLSScalar::from(11u32) * columns.l[j].eval(&tau)
                    + BLSScalar::from(3u32) * columns.r[j].eval(&tau)
                    + columns.o[j].eval(&tau);
                let scale = if j < num_public { gamma_inv } else { delta_inv };
                assert_eq!(*s, psi * scale);
            }
        }
    }

    #[test]
    fn sampled_trapdoor_avoids_the_domain() {
        let t = FpPolynomial::<BLSScalar>::vanishing_on_range(3);
        let mut prng = ChaChaRng::from_seed([9u8; 32]);
        let trapdoor = Trapdoor::sample(&mut prng, &t);
        assert!(!t.eval(&trapdoor.tau).is_zero());
        for x in [&trapdoor.alpha, &trapdoor.beta, &trapdoor.gamma, &trapdoor.delta] {
            assert!(!x.is_zero());
        }
    }
}
