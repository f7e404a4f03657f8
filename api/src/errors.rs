use r1zk_algebra::prelude::AlgebraError;
use r1zk_groth16::errors::Groth16Error;
use std::{error, fmt, io};

pub(crate) type Result<T> = core::result::Result<T, ApiError>;

#[derive(Debug)]
#[allow(missing_docs)]
pub enum ApiError {
    Groth16(Groth16Error),
    Algebra(AlgebraError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ApiError::*;
        match self {
            Groth16(e) => write!(f, "Groth16: {}", e),
            Algebra(e) => write!(f, "Algebra: {}", e),
            Io(e) => write!(f, "I/O: {}", e),
            Json(e) => write!(f, "JSON: {}", e),
        }
    }
}

impl error::Error for ApiError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ApiError::Groth16(e) => Some(e),
            ApiError::Algebra(e) => Some(e),
            ApiError::Io(e) => Some(e),
            ApiError::Json(e) => Some(e),
        }
    }
}

impl From<Groth16Error> for ApiError {
    fn from(e: Groth16Error) -> ApiError {
        ApiError::Groth16(e)
    }
}

impl From<AlgebraError> for ApiError {
    fn from(e: AlgebraError) -> ApiError {
        ApiError::Algebra(e)
    }
}

impl From<io::Error> for ApiError {
    fn from(e: io::Error) -> ApiError {
        ApiError::Io(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> ApiError {
        ApiError::Json(e)
    }
}
