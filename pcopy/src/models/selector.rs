// src/models/selector.rs
use std::fmt;

use glob::{MatchOptions, Pattern};

use crate::error::CopyError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Which files in the source directory are eligible for copying.
#[derive(Debug, Clone)]
pub enum ExtensionSelector {
    /// The `*` token: every regular file.
    All,
    /// Names ending in `.<extension>`, compared case-insensitively.
    Extension { raw: String, pattern: Pattern },
}

impl ExtensionSelector {
    pub const WILDCARD: &'static str = "*";

    /// Builds a selector from the command-line token.
    ///
    /// The extension is taken literally; any glob metacharacters in it are
    /// escaped before the `*.<ext>` pattern is compiled.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::InvalidSelector`] if the escaped pattern fails to
    /// compile.
    #[inline]
    pub fn parse(raw: &str) -> Result<Self, CopyError> {
        if raw == Self::WILDCARD {
            return Ok(Self::All);
        }

        let glob = format!("*.{}", Pattern::escape(raw));
        let pattern = Pattern::new(&glob).map_err(|source| CopyError::InvalidSelector {
            selector: raw.to_owned(),
            source,
        })?;

        Ok(Self::Extension {
            raw: raw.to_owned(),
            pattern,
        })
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Extension { pattern, .. } => pattern.matches_with(file_name, MATCH_OPTIONS),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::WILDCARD,
            Self::Extension { raw, .. } => raw,
        }
    }
}

impl fmt::Display for ExtensionSelector {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
