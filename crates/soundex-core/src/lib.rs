//! Soundex Core — configurable grouped phonetic encoder.
//!
//! A word is reduced to a short code: its leading character followed by the
//! symbols of the groups its remaining characters fall into, with repeated
//! groups collapsed and the result padded or cut to a fixed length.

pub mod config;
pub mod encoder;
pub mod error;
pub mod groups;
pub mod traits;

pub use config::{EncoderConfig, EncoderSettings};
pub use encoder::GroupedEncoder;
pub use error::{Result, SoundexError};
pub use groups::GroupTable;
pub use traits::PhoneticEncoder;

/// Group specification of classic American Soundex.
pub const STANDARD_GROUP_SPEC: &str = "1BFPV/2CGJKQSXZ/3DT/4L/5MN/6R";
/// Default separator between groups in a group specification.
pub const STANDARD_GROUP_DELIMITER: char = '/';
