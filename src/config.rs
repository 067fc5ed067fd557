//! Serializable generator configuration.
//!
//! A [`GeneratorConfig`] captures the two caller-controlled settings of a
//! generator: its origin seed and its fractional precision.  It is the only
//! piece of generator state that can be persisted; the current seed is not
//! part of it.
//!
//! ```json
//! { "seed": 123, "digits": 6 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PseudoRandomError, Result};
use crate::generator::{check_digits, PseudoRandom, MAX_DIGITS};

fn default_digits() -> u32 {
    MAX_DIGITS
}

/// Origin seed and precision for building a [`PseudoRandom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Origin seed; `None` seeds from the wall clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Decimal digits carried by fractional outputs, `1..=8`.
    #[serde(default = "default_digits")]
    pub digits: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            digits: default_digits(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: GeneratorConfig =
            serde_json::from_str(text).map_err(|err| PseudoRandomError::Decode(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| PseudoRandomError::Io(format!("{}: {err}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Renders the configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| PseudoRandomError::Decode(err.to_string()))
    }

    /// Checks that `digits` is within range.
    pub fn validate(&self) -> Result<()> {
        check_digits(self.digits).map(|_| ())
    }

    /// Builds a generator from this configuration.
    pub fn build(&self) -> Result<PseudoRandom> {
        self.validate()?;
        let mut random = match self.seed {
            Some(seed) => PseudoRandom::from_u32(seed),
            None => PseudoRandom::from_time(),
        };
        random.set_digits(self.digits)?;
        Ok(random)
    }
}

impl PseudoRandom {
    /// Snapshots the origin seed and precision of this generator.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(self.origin_seed()),
            digits: self.digits(),
        }
    }
}
