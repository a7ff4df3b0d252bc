use glob::{MatchOptions, Pattern};
use std::path::{Path, MAIN_SEPARATOR};

use crate::error::{Error, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled target pattern.
///
/// Patterns without a separator match the file name of an entry at any
/// depth below the root. Patterns with a separator match the tail of the
/// entry's path relative to the root.
#[derive(Debug, Clone)]
pub enum TargetPattern {
    Name(Pattern),
    Relative(Pattern),
}

impl TargetPattern {
    pub fn new(raw: &str) -> Result<Self> {
        let compile = |glob: &str| {
            Pattern::new(glob).map_err(|source| Error::InvalidPattern {
                pattern: raw.to_string(),
                source,
            })
        };

        if raw.contains('/') || raw.contains(MAIN_SEPARATOR) {
            Ok(Self::Relative(compile(&format!("**/{raw}"))?))
        } else {
            Ok(Self::Name(compile(raw)?))
        }
    }

    /// `relative` is the entry's path with the scan root stripped.
    pub fn matches(&self, relative: &Path) -> bool {
        match self {
            Self::Name(pattern) => relative
                .file_name()
                .map(|name| pattern.matches_with(&name.to_string_lossy(), MATCH_OPTIONS))
                .unwrap_or(false),
            Self::Relative(pattern) => pattern.matches_path_with(relative, MATCH_OPTIONS),
        }
    }
}

/// Compile every pattern up front so a malformed one fails the run before
/// anything is scanned.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<TargetPattern>> {
    patterns.iter().map(|p| TargetPattern::new(p)).collect()
}
