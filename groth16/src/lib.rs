//! Groth16 over a rank-1 constraint system: polynomial arithmetic, the R1CS to QAP
//! transform, trusted setup, proving and verification.

#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::many_single_char_names)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;
/// The Groth16 trusted setup, prover and verifier.
pub mod groth16;
/// Dense polynomials over the scalar field and interpolation on integer domains.
pub mod poly;
/// The quadratic arithmetic program derived from an R1CS.
pub mod qap;
/// Rank-1 constraint systems and witnesses.
pub mod r1cs;
