//! Field, group and pairing abstractions over BLS12-381 used by the r1zk
//! proving system.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the BLS12-381 curve
pub mod bls12_381;

/// Module for error handling
pub mod errors;

/// Module for the prelude
pub mod prelude;

/// Module for test rngs
pub mod rand_helper;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for traits
pub mod traits;

/// Module for utils
pub mod utils;

#[doc(hidden)]
pub use ark_std::{
    borrow, cmp, collections, fmt, hash, io, iter, marker, ops, rand, result, One, UniformRand,
    Zero,
};

#[doc(hidden)]
pub use num_bigint::BigUint;

#[doc(hidden)]
pub use zeroize::Zeroize;
