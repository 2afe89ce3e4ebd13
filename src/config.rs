//! Accessor configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::path::PathSyntax;
use crate::Result;

/// What `assign` does when an index lies past the end of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadPolicy {
    /// Fill the gap with placeholders, then append.
    #[default]
    PadWithPlaceholder,
    /// Only `index == len` appends; anything further is `IndexOutOfRange`.
    StrictAppend,
}

/// Default limit on placeholders a single write may insert.
pub const DEFAULT_MAX_PAD: usize = 1024;

/// Configuration for a [`KeyPathAccessor`](crate::KeyPathAccessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    pub syntax: PathSyntax,
    pub pad_policy: PadPolicy,
    /// Largest gap `PadWithPlaceholder` fills before an index write fails
    /// with `IndexOutOfRange`.
    pub max_pad: usize,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            syntax: PathSyntax::default(),
            pad_policy: PadPolicy::default(),
            max_pad: DEFAULT_MAX_PAD,
        }
    }
}

impl AccessorConfig {
    /// Load from a JSON document and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.syntax.validate()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.syntax.delimiter = delimiter;
        self
    }

    pub fn with_pad_policy(mut self, pad_policy: PadPolicy) -> Self {
        self.pad_policy = pad_policy;
        self
    }

    pub fn with_max_pad(mut self, max_pad: usize) -> Self {
        self.max_pad = max_pad;
        self
    }
}
