//! The file-based interface of r1zk: JSON circuits, witnesses, keys and proofs,
//! and the `setup`, `prove` and `verify` commands built on them.
#![deny(unused_import_braces, trivial_casts)]
#![deny(non_shorthand_field_patterns, unused_must_use)]
#![forbid(unsafe_code)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// The setup, prove and verify commands.
pub mod commands;
/// Module for error handling.
pub mod errors;
/// Reading and writing JSON files.
pub mod files;
/// The JSON representations of circuits, witnesses, keys and proofs.
pub mod serialization;

pub use r1zk_algebra::bls12_381::BLSPairingEngine as Engine;
pub use r1zk_groth16::errors::Groth16Error;
