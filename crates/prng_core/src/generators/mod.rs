//! # Generator Core
//!
//! Deterministic, bit-reproducible pseudo-random generators and the shared
//! contract they implement.
//!
//! ## Module Structure
//!
//! - [`traits`]: the [`Generator`] contract and its derived views
//! - [`tricycle`]: [`TricycleGenerator`], three words, reversible
//! - [`distinct`]: [`DistinctGenerator`], one word, reversible with jump-ahead
//! - [`codec`]: the `` #TAG`hex~hex` `` text format
//! - [`adapter`]: [`RngAdapter`], a `rand_core::RngCore` view
//! - [`bounded`]: type-generic bounded integer draws
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::generators::{DistinctGenerator, Generator, TricycleGenerator};
//!
//! let mut rng = TricycleGenerator::new(12345);
//! let text = rng.serialize();
//!
//! let mut restored = TricycleGenerator::new(0);
//! restored.deserialize_in_place(&text).unwrap();
//! assert_eq!(restored, rng);
//!
//! // Capabilities are queried, never assumed.
//! assert!(!rng.supports_skip());
//! assert!(DistinctGenerator::new(1).supports_skip());
//! ```

pub mod adapter;
pub mod bounded;
pub mod codec;
pub mod distinct;
pub mod traits;
pub mod tricycle;

pub use adapter::RngAdapter;
pub use bounded::{next_integer_below, next_integer_between};
pub use distinct::DistinctGenerator;
pub use traits::Generator;
pub use tricycle::TricycleGenerator;
