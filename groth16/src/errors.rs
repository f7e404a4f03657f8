use ark_std::{error, fmt};
use r1zk_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, Groth16Error>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Groth16Error {
    /// Algebra error
    Algebra(AlgebraError),
    /// L, R, O or the witness do not have consistent shapes.
    MalformedCircuit,
    /// Polynomial division by the zero polynomial.
    DivisionByZero,
    /// The witness does not satisfy the circuit, or has the wrong length.
    InvalidWitness,
    /// A key vector is too short for the polynomial or witness slice it must encode.
    SRSLengthMismatch,
    /// The number of public inputs differs from the verifying key.
    PublicInputMismatch,
    /// A proof or key element is not a valid group element.
    PairingFailure,
    /// The setup parameters are inconsistent with the circuit.
    SetupFailed,
}

impl fmt::Display for Groth16Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Groth16Error::*;
        let msg = match self {
            Algebra(e) => return write!(f, "Algebra: {}", e),
            MalformedCircuit => "Malformed circuit: inconsistent matrix or witness shapes",
            DivisionByZero => "Division by zero polynomial",
            InvalidWitness => "Witness does not satisfy the constraint system",
            SRSLengthMismatch => "Reference string length does not match the circuit",
            PublicInputMismatch => "Unexpected number of public inputs",
            PairingFailure => "Invalid group element in proof or key",
            SetupFailed => "Setup failed: public input count exceeds wire count",
        };
        f.write_str(msg)
    }
}

impl error::Error for Groth16Error {}

impl From<AlgebraError> for Groth16Error {
    fn from(e: AlgebraError) -> Groth16Error {
        Groth16Error::Algebra(e)
    }
}
