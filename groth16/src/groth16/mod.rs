mod prover;
mod setup;
mod verifier;

pub use prover::{prove, prove_with_blinding, Proof};
pub use setup::{setup, PreparedVerifyingKey, ProvingKey, VerifyingKey};
pub use verifier::{verify, verify_prepared};
