use crate::Result;

/// Trait for word-to-code phonetic encoders.
pub trait PhoneticEncoder: Send + Sync {
    /// Encode a single non-empty word.
    fn encode(&self, word: &str) -> Result<String>;

    /// Whether two words share the same code.
    fn sounds_alike(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.encode(a)? == self.encode(b)?)
    }
}
