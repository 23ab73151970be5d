//! Ordered collections of filter rules.

use serde::{Deserialize, Serialize};

use crate::rule::FilterRule;

/// An ordered set of exclusion rules.
///
/// A name is filtered when at least one rule matches it. Rules are
/// evaluated in order and evaluation stops at the first match. An empty
/// set never filters anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    rules: Vec<FilterRule>,
}

impl FilterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: FilterRule) {
        self.rules.push(rule);
    }

    /// Adds a rule, builder style.
    pub fn with(mut self, rule: FilterRule) -> Self {
        self.push(rule);
        self
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Returns mutable access to the rules, for editing in place.
    pub fn rules_mut(&mut self) -> &mut Vec<FilterRule> {
        &mut self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule matching `name`, if any.
    pub fn first_match(&self, name: &str) -> Option<&FilterRule> {
        let name = name.to_lowercase();
        self.rules.iter().find(|rule| rule.matches_lowered(&name))
    }

    /// Returns `true` if any rule matches `name`.
    pub fn is_filtered(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }
}

impl From<Vec<FilterRule>> for FilterSet {
    fn from(rules: Vec<FilterRule>) -> Self {
        FilterSet { rules }
    }
}

impl FromIterator<FilterRule> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterRule>>(iter: I) -> Self {
        FilterSet {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterRule;
    type IntoIter = std::slice::Iter<'a, FilterRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Returns `true` if `name` is excluded by `filters`.
pub fn is_filtered(name: &str, filters: &FilterSet) -> bool {
    filters.is_filtered(name)
}
