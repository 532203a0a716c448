//! Encoder configuration.

use crate::error::{Result, SoundexError};
use crate::{STANDARD_GROUP_DELIMITER, STANDARD_GROUP_SPEC};
use serde::{Deserialize, Serialize};

/// Knobs applied on every `encode` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Collapse consecutive emissions of the same group, e.g. "A112223444" -> "A1234".
    pub collapse_doublings: bool,
    /// Pad with `no_group_symbol` or cut so the code is exactly `result_length` long.
    pub enforce_length: bool,
    /// Code length including the leading character. Must be at least 1.
    pub result_length: usize,
    /// Filler used when padding.
    pub no_group_symbol: char,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            collapse_doublings: true,
            enforce_length: true,
            result_length: 4,
            no_group_symbol: '0',
        }
    }
}

impl EncoderConfig {
    pub fn with_collapse_doublings(mut self, collapse: bool) -> Self {
        self.collapse_doublings = collapse;
        self
    }

    pub fn with_enforce_length(mut self, enforce: bool) -> Self {
        self.enforce_length = enforce;
        self
    }

    pub fn with_result_length(mut self, len: usize) -> Self {
        self.result_length = len;
        self
    }

    pub fn with_no_group_symbol(mut self, symbol: char) -> Self {
        self.no_group_symbol = symbol;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.result_length == 0 {
            return Err(SoundexError::InvalidConfig(
                "result_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Everything needed to build an encoder: group specification plus knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderSettings {
    pub groups: String,
    pub delimiter: char,
    pub encoder: EncoderConfig,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            groups: STANDARD_GROUP_SPEC.into(),
            delimiter: STANDARD_GROUP_DELIMITER,
            encoder: EncoderConfig::default(),
        }
    }
}

impl EncoderSettings {
    /// Parse settings from JSON. Missing fields fall back to standard Soundex.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.encoder.validate()?;
        Ok(settings)
    }
}
