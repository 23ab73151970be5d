//! Exclusion filters for CRM metadata records.
//!
//! A [`FilterSet`] is an ordered list of [`FilterRule`]s. Each rule pairs a
//! pattern with a [`MatchKind`]. A name is *filtered* (excluded from code
//! generation) when at least one rule matches it.
//!
//! # Quick Start
//!
//! ```rust
//! use xrm2ts_filter::{FilterRule, FilterSet};
//!
//! let filters = FilterSet::from(vec![
//!     FilterRule::equals("versionnumber"),
//!     FilterRule::contains("yominame"),
//! ]);
//!
//! assert!(filters.is_filtered("VersionNumber"));
//! assert!(filters.is_filtered("address1_yominame"));
//! assert!(!filters.is_filtered("versionnumber2"));
//! ```
//!
//! # Matching Semantics
//!
//! | Kind | Matches when the lower-cased name... |
//! |------|--------------------------------------|
//! | `Equals` | equals the lower-cased pattern |
//! | `Contains` | contains the lower-cased pattern |
//! | `StartsWith` | starts with the lower-cased pattern |
//! | `EndsWith` | ends with the lower-cased pattern |
//! | `RegEx` | contains a match of the lower-cased pattern (case-insensitive) |
//!
//! Patterns are lower-cased at evaluation time, so rules imported from a
//! settings file keep whatever casing their author used.
//!
//! # Regular Expressions
//!
//! A rule never holds a malformed regular expression. Strict construction
//! ([`FilterRule::new`], [`FilterRule::regex`]) rejects it, while assignment
//! ([`FilterRule::set_pattern`], [`FilterRule::set_kind`], deserialization)
//! downgrades the rule to [`MatchKind::Contains`] and reports the problem.

mod error;
mod kind;
mod rule;
mod set;

pub use error::{FilterError, Result};
pub use kind::MatchKind;
pub use rule::FilterRule;
pub use set::{is_filtered, FilterSet};
