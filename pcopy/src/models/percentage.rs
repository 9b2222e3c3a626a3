// src/models/percentage.rs
use std::fmt;
use std::str::FromStr;

use crate::error::CopyError;

/// A whole-number percentage in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Parses a percentage the way it arrives on the command line.
    ///
    /// Only plain ASCII digits are accepted, so signs, decimals and
    /// whitespace are rejected before the range check.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::InvalidPercentage`] if `raw` is not made up solely
    /// of digits or its value falls outside `1..=100`.
    #[inline]
    pub fn parse(raw: &str) -> Result<Self, CopyError> {
        let invalid = || CopyError::InvalidPercentage(raw.to_owned());

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // Overflowing u32 is just another out-of-range value.
        let value: u32 = raw.parse().map_err(|_| invalid())?;
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or_else(invalid)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of files to take out of `total`, rounded up.
    ///
    /// Computed as `(total * percentage + 99) / 100` in integers and capped at
    /// `total`, so any non-empty set yields at least one file.
    #[inline]
    #[must_use]
    pub fn selection_count(self, total: usize) -> usize {
        let scaled = total
            .saturating_mul(usize::from(self.0))
            .saturating_add(99)
            / 100;
        scaled.min(total)
    }
}

impl FromStr for Percentage {
    type Err = CopyError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Percentage {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
