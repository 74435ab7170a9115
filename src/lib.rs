#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod kernel;
pub mod word;

#[cfg(feature = "alloc")]
pub mod bigint;

#[cfg(feature = "std")]
pub mod driver;

pub use error::ParseError;
pub use word::{BASE, BASE_LOG, DoubleWord, QuadWord, SWord, Word};

#[cfg(feature = "alloc")]
pub use bigint::UBigInt;
