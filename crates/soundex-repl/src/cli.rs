//! Command-line arguments for the `soundex` binary.

use anyhow::{Context, Result};
use clap::Parser;
use soundex_core::{EncoderSettings, GroupedEncoder};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "soundex")]
#[command(about = "Interactive Soundex encoder: type words, get codes, 'Q' quits", long_about = None)]
pub struct Args {
    /// JSON settings file (groups, delimiter, encoder options)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Group specification, e.g. "1BFPV/2CGJKQSXZ/3DT/4L/5MN/6R"
    #[arg(short, long)]
    pub groups: Option<String>,

    /// Separator between groups in the specification
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Code length including the leading character
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Symbol used to pad short codes
    #[arg(short, long)]
    pub pad_symbol: Option<char>,

    /// Emit every group symbol, even when repeated
    #[arg(long)]
    pub no_collapse: bool,

    /// Neither pad nor truncate codes
    #[arg(long)]
    pub no_enforce_length: bool,
}

impl Args {
    /// Settings from the config file (or standard Soundex), with flags applied on top.
    pub fn settings(&self) -> Result<EncoderSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                EncoderSettings::from_json(&json)
                    .with_context(|| format!("invalid settings in {}", path.display()))?
            }
            None => EncoderSettings::default(),
        };

        if let Some(groups) = &self.groups {
            settings.groups = groups.clone();
        }
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter;
        }
        if let Some(length) = self.length {
            settings.encoder.result_length = length;
        }
        if let Some(symbol) = self.pad_symbol {
            settings.encoder.no_group_symbol = symbol;
        }
        if self.no_collapse {
            settings.encoder.collapse_doublings = false;
        }
        if self.no_enforce_length {
            settings.encoder.enforce_length = false;
        }
        Ok(settings)
    }

    pub fn build_encoder(&self) -> Result<GroupedEncoder> {
        let settings = self.settings()?;
        GroupedEncoder::from_settings(&settings).context("invalid encoder settings")
    }
}
