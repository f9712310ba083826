//! Integer mixing and modular arithmetic helpers.
//!
//! This module provides:
//! - [`mixer`]: the bijective avalanche function used for seeding
//! - [`modular`]: multiplicative inverses modulo 2^64 for reversible steps

pub mod mixer;
pub mod modular;

pub use mixer::{mix, seed_word, GOLDEN_GAMMA};
pub use modular::mod_inverse;
