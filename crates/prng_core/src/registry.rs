//! Tag-to-prototype lookup for reconstructing generators from text.
//!
//! A [`GeneratorRegistry`] is an ordinary value: the application builds one
//! at startup (usually via [`GeneratorRegistry::with_defaults`]), registers
//! any extra generator types, and passes it to whatever needs to decode
//! serialised state. There is no process-wide table and nothing is
//! registered implicitly.
//!
//! Registration is keyed by [`Generator::tag`]; registering a second
//! prototype with the same tag replaces the first.

use std::collections::BTreeMap;

use crate::generators::{codec, DistinctGenerator, Generator, TricycleGenerator};
use crate::types::{GeneratorError, Result};

/// Mapping from tag to prototype generator.
///
/// Prototypes are only used as factories through [`Generator::copy`] and
/// [`Generator::deserialize_in_place`]; their own state is irrelevant.
///
/// # Examples
///
/// ```
/// use prng_core::generators::{Generator, TricycleGenerator};
/// use prng_core::registry::GeneratorRegistry;
///
/// let registry = GeneratorRegistry::with_defaults();
/// let original = TricycleGenerator::new(31337);
///
/// let restored = registry.deserialize(&original.serialize()).unwrap();
/// assert_eq!(restored.tag(), "TriR");
/// assert_eq!(restored.state_words(), original.state_words());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorRegistry {
    prototypes: BTreeMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every generator shipped with this crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Registers [`TricycleGenerator`] and [`DistinctGenerator`].
    pub fn register_defaults(&mut self) {
        self.register(Box::new(TricycleGenerator::new(0)));
        self.register(Box::new(DistinctGenerator::new(0)));
    }

    /// Registers `prototype` under its tag.
    ///
    /// Returns the prototype previously registered under that tag, if any.
    /// The last registration wins.
    pub fn register(&mut self, prototype: Box<dyn Generator>) -> Option<Box<dyn Generator>> {
        let tag = prototype.tag();
        let previous = self.prototypes.insert(tag.to_string(), prototype);
        if previous.is_some() {
            tracing::debug!(tag, "replaced generator prototype");
        } else {
            tracing::debug!(tag, "registered generator prototype");
        }
        previous
    }

    /// Whether a prototype is registered under `tag`.
    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.prototypes.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.prototypes.keys().map(String::as_str)
    }

    /// Number of registered prototypes.
    #[inline]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Whether no prototype is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// The prototype registered under `tag`.
    pub fn prototype(&self, tag: &str) -> Option<&dyn Generator> {
        self.prototypes.get(tag).map(|prototype| prototype.as_ref())
    }

    /// Creates a fresh generator of the type registered under `tag`, seeded
    /// with `seed`.
    ///
    /// # Errors
    ///
    /// `UnknownTag` if nothing is registered under `tag`.
    pub fn create(&self, tag: &str, seed: u64) -> Result<Box<dyn Generator>> {
        let mut generator = self.lookup(tag)?.copy();
        generator.seed(seed);
        Ok(generator)
    }

    /// Reconstructs a generator from its serialised text.
    ///
    /// Reads the leading tag, copies the matching prototype and decodes the
    /// state into the copy.
    ///
    /// # Errors
    ///
    /// - `MalformedState` if the text is not well formed or its word count
    ///   does not match the registered type
    /// - `UnknownTag` if no prototype is registered for the parsed tag
    pub fn deserialize(&self, text: &str) -> Result<Box<dyn Generator>> {
        let tag = codec::parse_tag(text)?;
        let mut generator = self.lookup(tag)?.copy();
        generator.deserialize_in_place(text).map_err(|err| {
            tracing::debug!(tag, error = %err, "failed to decode generator state");
            err
        })?;
        Ok(generator)
    }

    fn lookup(&self, tag: &str) -> Result<&dyn Generator> {
        self.prototype(tag).ok_or_else(|| {
            tracing::debug!(tag, "no generator prototype registered");
            GeneratorError::UnknownTag(tag.to_string())
        })
    }
}
