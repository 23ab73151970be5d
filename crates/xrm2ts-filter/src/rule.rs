//! A single exclusion rule.
//!
//! A [`FilterRule`] is a pattern plus the [`MatchKind`] that says how the
//! pattern is compared against a candidate name.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::kind::MatchKind;

/// A single exclusion predicate.
///
/// # Example
///
/// ```
/// use xrm2ts_filter::{FilterRule, MatchKind};
///
/// let rule = FilterRule::new("_bpf_", MatchKind::Contains).unwrap();
/// assert!(rule.matches("new_BPF_approval"));
/// assert_eq!(rule.to_string(), "Contains: _bpf_");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RuleDef", into = "RuleDef")]
pub struct FilterRule {
    pattern: String,
    kind: MatchKind,
    regex: Option<Regex>,
}

impl FilterRule {
    /// Creates a rule, rejecting a malformed regular expression.
    pub fn new(pattern: impl Into<String>, kind: MatchKind) -> Result<Self> {
        let pattern = pattern.into();
        let regex = match kind {
            MatchKind::RegEx => Some(compile(&pattern)?),
            _ => None,
        };
        Ok(FilterRule {
            pattern,
            kind,
            regex,
        })
    }

    /// Creates an `Equals` rule.
    pub fn equals(pattern: impl Into<String>) -> Self {
        Self::literal(pattern, MatchKind::Equals)
    }

    /// Creates a `Contains` rule.
    pub fn contains(pattern: impl Into<String>) -> Self {
        Self::literal(pattern, MatchKind::Contains)
    }

    /// Creates a `StartsWith` rule.
    pub fn starts_with(pattern: impl Into<String>) -> Self {
        Self::literal(pattern, MatchKind::StartsWith)
    }

    /// Creates an `EndsWith` rule.
    pub fn ends_with(pattern: impl Into<String>) -> Self {
        Self::literal(pattern, MatchKind::EndsWith)
    }

    /// Creates a `RegEx` rule, rejecting a malformed expression.
    pub fn regex(pattern: impl Into<String>) -> Result<Self> {
        Self::new(pattern, MatchKind::RegEx)
    }

    fn literal(pattern: impl Into<String>, kind: MatchKind) -> Self {
        debug_assert!(kind.is_literal());
        FilterRule {
            pattern: pattern.into(),
            kind,
            regex: None,
        }
    }

    /// Returns the pattern as written.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the match kind.
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Replaces the pattern.
    ///
    /// If the rule is a `RegEx` rule and the new pattern does not compile,
    /// the pattern is kept, the rule is downgraded to `Contains`, and the
    /// compile error is returned so the caller can tell the user.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) -> Result<()> {
        self.pattern = pattern.into();
        self.revalidate()
    }

    /// Replaces the match kind, with the same downgrade as [`set_pattern`].
    ///
    /// [`set_pattern`]: FilterRule::set_pattern
    pub fn set_kind(&mut self, kind: MatchKind) -> Result<()> {
        self.kind = kind;
        self.revalidate()
    }

    fn revalidate(&mut self) -> Result<()> {
        self.regex = None;
        if self.kind != MatchKind::RegEx {
            return Ok(());
        }
        match compile(&self.pattern) {
            Ok(regex) => {
                self.regex = Some(regex);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    pattern = %self.pattern,
                    "invalid regex filter, match kind changed to Contains"
                );
                self.kind = MatchKind::Contains;
                Err(err)
            }
        }
    }

    /// Evaluates this rule against a candidate name.
    pub fn matches(&self, name: &str) -> bool {
        self.matches_lowered(&name.to_lowercase())
    }

    /// Evaluates this rule against a name that is already lower-cased.
    pub(crate) fn matches_lowered(&self, name: &str) -> bool {
        match self.kind {
            // A rule whose expression never compiled matches nothing.
            MatchKind::RegEx => self.regex.as_ref().is_some_and(|re| re.is_match(name)),
            kind => kind.eval_literal(name, &self.pattern.to_lowercase()),
        }
    }
}

/// Compiles the lower-cased pattern, matching literal kinds.
fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&pattern.to_lowercase())
        .case_insensitive(true)
        .build()
        .map_err(|source| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })
}

impl PartialEq for FilterRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.kind == other.kind
    }
}

impl Eq for FilterRule {}

impl std::fmt::Display for FilterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.pattern)
    }
}

/// Serialized shape of a rule.
///
/// Aliases accept settings exported by the desktop tool.
#[derive(Serialize, Deserialize)]
struct RuleDef {
    #[serde(alias = "FilterString")]
    pattern: String,
    #[serde(default, alias = "FilterMatchType")]
    match_kind: MatchKind,
}

impl From<RuleDef> for FilterRule {
    fn from(def: RuleDef) -> Self {
        let mut rule = FilterRule {
            pattern: def.pattern,
            kind: def.match_kind,
            regex: None,
        };
        // The downgrade is already reported through tracing.
        let _ = rule.revalidate();
        rule
    }
}

impl From<FilterRule> for RuleDef {
    fn from(rule: FilterRule) -> Self {
        RuleDef {
            pattern: rule.pattern,
            match_kind: rule.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_is_case_insensitive() {
        let rule = FilterRule::equals("VersionNumber");
        assert!(rule.matches("versionnumber"));
        assert!(rule.matches("VERSIONNUMBER"));
        assert!(!rule.matches("versionnumber2"));
    }

    #[test]
    fn pattern_keeps_its_casing() {
        let rule = FilterRule::starts_with("OnBehalf");
        assert_eq!(rule.pattern(), "OnBehalf");
        assert!(rule.matches("onbehalfby"));
    }

    #[test]
    fn regex_matches_anywhere() {
        let rule = FilterRule::regex("^adx_.*id$").unwrap();
        assert!(rule.matches("adx_webpageid"));
        assert!(!rule.matches("adx_webpagename"));

        let rule = FilterRule::regex("bpf").unwrap();
        assert!(rule.matches("new_BPF_process"));
    }

    #[test]
    fn regex_pattern_is_lower_cased() {
        // `\D` lower-cases to `\d`.
        let rule = FilterRule::regex(r"^\D+$").unwrap();
        assert!(rule.matches("12345"));
        assert!(!rule.matches("abc"));
        assert_eq!(rule.pattern(), r"^\D+$");
    }

    #[test]
    fn regex_is_case_insensitive() {
        let rule = FilterRule::regex("Yomi").unwrap();
        assert!(rule.matches("address1_yominame"));
    }

    #[test]
    fn strict_construction_rejects_bad_regex() {
        let err = FilterRule::regex("(unclosed").unwrap_err();
        assert!(matches!(err, FilterError::InvalidRegex { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn set_pattern_downgrades_bad_regex() {
        let mut rule = FilterRule::regex("ok").unwrap();
        let result = rule.set_pattern("[broken");

        assert!(result.is_err());
        assert_eq!(rule.kind(), MatchKind::Contains);
        assert_eq!(rule.pattern(), "[broken");
        assert!(rule.matches("x[broken]"));
    }

    #[test]
    fn set_kind_downgrades_bad_regex() {
        let mut rule = FilterRule::contains("(a");
        assert!(rule.set_kind(MatchKind::RegEx).is_err());
        assert_eq!(rule.kind(), MatchKind::Contains);
    }

    #[test]
    fn set_kind_to_regex_compiles() {
        let mut rule = FilterRule::contains("^new_");
        rule.set_kind(MatchKind::RegEx).unwrap();
        assert!(rule.matches("new_field"));
        assert!(!rule.matches("old_new_field"));
    }

    #[test]
    fn display() {
        assert_eq!(
            FilterRule::equals("versionnumber").to_string(),
            "Equals: versionnumber"
        );
    }

    #[test]
    fn equality_ignores_compiled_state() {
        assert_eq!(FilterRule::regex("a+").unwrap(), FilterRule::regex("a+").unwrap());
        assert_ne!(FilterRule::equals("a"), FilterRule::contains("a"));
    }
}
