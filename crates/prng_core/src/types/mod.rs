//! Shared types for the generator layer.
//!
//! - `GeneratorError`: failures from generator operations, deserialisation
//!   and configuration (`types::error`)

pub mod error;

pub use error::{GeneratorError, Result};
