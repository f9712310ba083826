//! # prng_core: Reversible Pseudo-Random Generators
//!
//! ## Layer 1 (Foundation) Role
//!
//! prng_core is the bottom layer of the workspace, providing:
//! - The Bit-Mixer and modular-inverse helpers (`math`)
//! - The [`Generator`](generators::Generator) contract with forward and
//!   backward stepping, jump-ahead, state access and bounded draws
//!   (`generators`)
//! - Concrete generators: `TricycleGenerator` (`TriR`) and
//!   `DistinctGenerator` (`DisR`)
//! - Lossless text serialisation and a [`GeneratorRegistry`](registry::GeneratorRegistry)
//!   for rebuilding generators from text (`registry`)
//! - Configuration loading (`config`)
//! - Error types: `GeneratorError` (`types::error`)
//!
//! ## Determinism
//!
//! Every output is a pure function of the state words. Seeding consults no
//! hidden entropy; only the explicit `from_entropy` constructors and a
//! configuration without seed or state read the thread-local entropy source.
//!
//! ## Thread Safety
//!
//! Generators are `Send + Sync` but perform no internal locking. Mutating
//! one instance from several threads requires external synchronisation.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::generators::{Generator, TricycleGenerator};
//! use prng_core::registry::GeneratorRegistry;
//!
//! let mut rng = TricycleGenerator::new(42);
//! let roll = rng.next_i32_between(1, 7);
//! assert!((1..7).contains(&roll));
//!
//! // Step back exactly once.
//! let value = rng.next_u64();
//! assert_eq!(rng.previous_u64().unwrap(), value);
//!
//! // Save and restore through the registry.
//! let registry = GeneratorRegistry::with_defaults();
//! let restored = registry.deserialize(&rng.serialize()).unwrap();
//! assert_eq!(restored.state_words(), rng.state_words());
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod generators;
pub mod math;
pub mod registry;
pub mod types;

pub use generators::{DistinctGenerator, Generator, RngAdapter, TricycleGenerator};
pub use registry::GeneratorRegistry;
pub use types::{GeneratorError, Result};
