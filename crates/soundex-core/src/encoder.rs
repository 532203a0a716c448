//! Grouped phonetic encoder.

use crate::config::{EncoderConfig, EncoderSettings};
use crate::error::{Result, SoundexError};
use crate::groups::GroupTable;
use crate::traits::PhoneticEncoder;
use crate::STANDARD_GROUP_DELIMITER;
use tracing::{debug, trace};

/// Soundex-family encoder over a configurable group table.
///
/// `encode` borrows the encoder immutably, so a configured encoder can be shared
/// across threads for concurrent encoding. Reconfiguration needs `&mut self`
/// and therefore never overlaps an in-flight `encode`.
#[derive(Debug, Clone, Default)]
pub struct GroupedEncoder {
    groups: GroupTable,
    config: EncoderConfig,
}

impl GroupedEncoder {
    /// Standard Soundex groups with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom groups separated by the standard delimiter.
    pub fn with_groups(spec: &str) -> Result<Self> {
        Self::with_groups_and_delimiter(spec, STANDARD_GROUP_DELIMITER)
    }

    pub fn with_groups_and_delimiter(spec: &str, delimiter: char) -> Result<Self> {
        Ok(Self {
            groups: GroupTable::parse(spec, delimiter)?,
            config: EncoderConfig::default(),
        })
    }

    /// Standard groups with the given settings.
    pub fn with_config(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            groups: GroupTable::standard(),
            config,
        })
    }

    pub fn from_settings(settings: &EncoderSettings) -> Result<Self> {
        settings.encoder.validate()?;
        Ok(Self {
            groups: GroupTable::parse(&settings.groups, settings.delimiter)?,
            config: settings.encoder.clone(),
        })
    }

    /// Replace the group table. On error the current table stays in effect.
    pub fn set_groups(&mut self, spec: &str, delimiter: char) -> Result<()> {
        let groups = GroupTable::parse(spec, delimiter)?;
        debug!(spec, groups = groups.len(), "replaced group table");
        self.groups = groups;
        Ok(())
    }

    pub fn set_groups_default_delimiter(&mut self, spec: &str) -> Result<()> {
        self.set_groups(spec, STANDARD_GROUP_DELIMITER)
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Replace all settings at once. Invalid settings are rejected and the old ones kept.
    pub fn set_config(&mut self, config: EncoderConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn collapse_doublings(&self) -> bool {
        self.config.collapse_doublings
    }

    pub fn set_collapse_doublings(&mut self, collapse: bool) {
        self.config.collapse_doublings = collapse;
    }

    pub fn enforce_length(&self) -> bool {
        self.config.enforce_length
    }

    pub fn set_enforce_length(&mut self, enforce: bool) {
        self.config.enforce_length = enforce;
    }

    pub fn result_length(&self) -> usize {
        self.config.result_length
    }

    pub fn set_result_length(&mut self, len: usize) -> Result<()> {
        let config = self.config.clone().with_result_length(len);
        self.set_config(config)
    }

    pub fn no_group_symbol(&self) -> char {
        self.config.no_group_symbol
    }

    pub fn set_no_group_symbol(&mut self, symbol: char) {
        self.config.no_group_symbol = symbol;
    }

    /// Encode `word`: its first character verbatim, then the reduced group-symbol
    /// sequence of the rest, padded or cut to `result_length` when length is enforced.
    pub fn encode(&self, word: &str) -> Result<String> {
        let mut chars = word.chars();
        let first = chars
            .next()
            .ok_or_else(|| SoundexError::InvalidInput("cannot encode an empty word".into()))?;

        let config = &self.config;
        let limit = if config.enforce_length {
            config.result_length - 1
        } else {
            usize::MAX
        };

        let mut code = String::with_capacity(word.len());
        code.push(first);

        let mut emitted = 0usize;
        let mut previous: Option<usize> = None;
        for c in chars {
            if emitted >= limit {
                break;
            }
            // Unmapped characters neither emit nor reset `previous`.
            let Some(group) = self.groups.group_of(c) else {
                continue;
            };
            // `group_of` only yields indices of parsed groups.
            let Some(symbol) = self.groups.symbol(group) else {
                continue;
            };
            if !config.collapse_doublings || previous != Some(group) {
                code.push(symbol);
                previous = Some(group);
                emitted += 1;
            }
        }

        if config.enforce_length {
            code.extend(std::iter::repeat(config.no_group_symbol).take(limit - emitted));
        }

        trace!(word, code = %code, "encoded");
        Ok(code)
    }
}

impl PhoneticEncoder for GroupedEncoder {
    fn encode(&self, word: &str) -> Result<String> {
        GroupedEncoder::encode(self, word)
    }
}
