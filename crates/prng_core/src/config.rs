//! Generator configuration.
//!
//! [`GeneratorConfig`] describes which generator to build and how to
//! initialise it. It can be assembled with [`GeneratorConfig::builder`] or
//! loaded from TOML:
//!
//! ```toml
//! kind = "tricycle"
//! seed = 42
//! ```
//!
//! or, to resume a saved stream:
//!
//! ```toml
//! kind = "distinct"
//! state = "#DisR`BDD732262FEB6E95`"
//! ```
//!
//! When neither `seed` nor `state` is given the generator is seeded from the
//! thread-local entropy source.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::generators::{codec, DistinctGenerator, Generator, TricycleGenerator};
use crate::types::{GeneratorError, Result};

/// Generator algorithms that can be named in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// [`TricycleGenerator`] (`TriR`).
    #[default]
    Tricycle,
    /// [`DistinctGenerator`] (`DisR`).
    Distinct,
}

impl GeneratorKind {
    /// Serialisation tag of the generator type.
    pub fn tag(&self) -> &'static str {
        match self {
            GeneratorKind::Tricycle => TricycleGenerator::TAG,
            GeneratorKind::Distinct => DistinctGenerator::TAG,
        }
    }

    /// Number of state words of the generator type.
    pub fn state_count(&self) -> usize {
        match self {
            GeneratorKind::Tricycle => TricycleGenerator::STATE_COUNT,
            GeneratorKind::Distinct => DistinctGenerator::STATE_COUNT,
        }
    }

    fn seeded(&self, seed: u64) -> Box<dyn Generator> {
        match self {
            GeneratorKind::Tricycle => Box::new(TricycleGenerator::new(seed)),
            GeneratorKind::Distinct => Box::new(DistinctGenerator::new(seed)),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = GeneratorError;

    /// Accepts the lower-case kind name or the serialisation tag.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TriR" => return Ok(GeneratorKind::Tricycle),
            "DisR" => return Ok(GeneratorKind::Distinct),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "tricycle" => Ok(GeneratorKind::Tricycle),
            "distinct" => Ok(GeneratorKind::Distinct),
            _ => Err(GeneratorError::InvalidConfig(format!(
                "unknown generator kind '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Tricycle => write!(f, "tricycle"),
            GeneratorKind::Distinct => write!(f, "distinct"),
        }
    }
}

/// How to build a generator.
///
/// # Examples
///
/// ```
/// use prng_core::config::{GeneratorConfig, GeneratorKind};
/// use prng_core::generators::{Generator, TricycleGenerator};
///
/// let config = GeneratorConfig::builder()
///     .kind(GeneratorKind::Tricycle)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// let generator = config.build_generator().unwrap();
/// assert_eq!(generator.state_words(), TricycleGenerator::new(42).state_words());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generator algorithm.
    kind: GeneratorKind,
    /// Seed expanded by the Bit-Mixer.
    seed: Option<u64>,
    /// Serialised state restored verbatim.
    state: Option<String>,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the document does not parse or fails
    /// [`GeneratorConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the generator algorithm.
    #[inline]
    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the optional serialised state.
    #[inline]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if:
    /// - both `seed` and `state` are set
    /// - `state` does not decode, carries another tag, or has the wrong
    ///   word count for `kind`
    pub fn validate(&self) -> Result<()> {
        if let Some(state) = &self.state {
            if self.seed.is_some() {
                return Err(GeneratorError::InvalidConfig(
                    "seed and state are mutually exclusive".to_string(),
                ));
            }
            codec::decode_for(state, self.kind.tag(), self.kind.state_count())
                .map_err(|e| GeneratorError::InvalidConfig(e.to_string()))?;
        }
        Ok(())
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configuration is invalid.
    pub fn build_generator(&self) -> Result<Box<dyn Generator>> {
        self.validate()?;
        tracing::debug!(
            kind = %self.kind,
            seeded = self.seed.is_some(),
            restored = self.state.is_some(),
            "building generator from configuration"
        );
        match (&self.state, self.seed) {
            (Some(state), _) => {
                let mut generator = self.kind.seeded(0);
                generator.deserialize_in_place(state)?;
                Ok(generator)
            }
            (None, Some(seed)) => Ok(self.kind.seeded(seed)),
            (None, None) => Ok(self.kind.seeded(rand::random())),
        }
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Validation happens in [`GeneratorConfigBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    kind: GeneratorKind,
    seed: Option<u64>,
    state: Option<String>,
}

impl GeneratorConfigBuilder {
    /// Sets the generator algorithm.
    #[inline]
    pub fn kind(mut self, kind: GeneratorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the serialised state to restore.
    #[inline]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if validation fails.
    pub fn build(self) -> Result<GeneratorConfig> {
        let config = GeneratorConfig {
            kind: self.kind,
            seed: self.seed,
            state: self.state,
        };
        config.validate()?;
        Ok(config)
    }
}
