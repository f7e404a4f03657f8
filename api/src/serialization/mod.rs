mod circuit;
mod keys;
mod points;

pub use circuit::{R1CSJson, WitnessJson};
pub use keys::{ProofJson, ProvingKeyJson, VerifyingKeyJson};
pub use points::{G1Json, G2Json};
