//! Group table: character -> group lookup built from a compact group specification.
//!
//! A specification lists groups separated by a delimiter. Each group is its
//! output symbol followed by its member characters, so `"1BFPV/2CGJKQSXZ"`
//! defines group 0 (symbol `1`, members `BFPV`) and group 1 (symbol `2`).

use crate::error::{Result, SoundexError};
use crate::{STANDARD_GROUP_DELIMITER, STANDARD_GROUP_SPEC};
use tracing::debug;

/// Dense lookup from character code to group index, plus the group symbols.
///
/// The lookup covers only the code range spanned by member characters;
/// anything outside it, or inside it but unlisted, has no group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    first_code: u32,
    table: Vec<Option<usize>>,
    symbols: Vec<char>,
}

impl GroupTable {
    /// Build a table from `spec`, splitting groups on `delimiter`.
    ///
    /// A character listed in several groups belongs to the rightmost one.
    pub fn parse(spec: &str, delimiter: char) -> Result<Self> {
        if spec.is_empty() {
            return Err(SoundexError::EmptyGroupSpec);
        }

        let segments: Vec<&str> = spec.split(delimiter).collect();
        let mut symbols = Vec::with_capacity(segments.len());
        let mut min = u32::MAX;
        let mut max = 0u32;

        for (index, segment) in segments.iter().enumerate() {
            let mut chars = segment.chars();
            let symbol = chars.next().ok_or(SoundexError::EmptyGroup { index })?;
            let mut members = 0usize;
            for c in chars {
                members += 1;
                min = min.min(c as u32);
                max = max.max(c as u32);
            }
            if members == 0 {
                return Err(SoundexError::MissingMembers { index, symbol });
            }
            symbols.push(symbol);
        }

        // Every group has a member, so min <= max here.
        let mut table = vec![None; (max - min) as usize + 1];
        for (group, segment) in segments.iter().enumerate() {
            for c in segment.chars().skip(1) {
                let slot = &mut table[(c as u32 - min) as usize];
                if let Some(previous) = slot.replace(group) {
                    if previous != group {
                        debug!(member = %c, previous, group, "member listed twice, later group wins");
                    }
                }
            }
        }

        debug!(groups = symbols.len(), span = table.len(), first_code = min, "built group table");
        Ok(Self { first_code: min, table, symbols })
    }

    /// Classic American Soundex groups.
    pub fn standard() -> Self {
        // STANDARD_GROUP_SPEC is a constant with six non-empty groups; parsing it cannot fail.
        match Self::parse(STANDARD_GROUP_SPEC, STANDARD_GROUP_DELIMITER) {
            Ok(table) => table,
            Err(e) => unreachable!("standard group spec is well-formed: {e}"),
        }
    }

    /// Group index of `c`, if any.
    #[inline]
    pub fn group_of(&self, c: char) -> Option<usize> {
        let offset = (c as u32).checked_sub(self.first_code)?;
        self.table.get(offset as usize).copied().flatten()
    }

    /// Output symbol of `group`, `None` past the last group.
    #[inline]
    pub fn symbol(&self, group: usize) -> Option<char> {
        self.symbols.get(group).copied()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Code of the lowest member character.
    pub fn first_code(&self) -> u32 {
        self.first_code
    }

    /// Width of the lookup range.
    pub fn span(&self) -> usize {
        self.table.len()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::standard()
    }
}
