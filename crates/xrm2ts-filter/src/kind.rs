//! Match kinds for filter rules.

use serde::{Deserialize, Serialize};

/// How a [`FilterRule`](crate::FilterRule) pattern is compared to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchKind {
    /// Name equals the pattern.
    Equals,
    /// Name contains the pattern.
    #[default]
    Contains,
    /// Name starts with the pattern.
    StartsWith,
    /// Name ends with the pattern.
    EndsWith,
    /// Name contains a match of the regular expression.
    #[serde(alias = "Regex")]
    RegEx,
}

impl MatchKind {
    /// Returns `true` if the pattern is compared as plain text.
    pub fn is_literal(self) -> bool {
        !matches!(self, MatchKind::RegEx)
    }

    /// Evaluates a plain-text comparison.
    ///
    /// Both arguments must already be lower-cased. Always `false` for
    /// `RegEx`, which is evaluated by the rule's compiled expression.
    pub fn eval_literal(self, name: &str, pattern: &str) -> bool {
        match self {
            MatchKind::Equals => name == pattern,
            MatchKind::Contains => name.contains(pattern),
            MatchKind::StartsWith => name.starts_with(pattern),
            MatchKind::EndsWith => name.ends_with(pattern),
            MatchKind::RegEx => false,
        }
    }

    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Equals => "Equals",
            MatchKind::Contains => "Contains",
            MatchKind::StartsWith => "StartsWith",
            MatchKind::EndsWith => "EndsWith",
            MatchKind::RegEx => "RegEx",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
