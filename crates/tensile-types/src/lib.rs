//! # tensile-types
//!
//! Shared types, error types, and physical constants
//! for the tensile mass-spring surface engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other tensile crates share.

pub mod constants;
pub mod error;

pub use error::{TensileError, TensileResult};
