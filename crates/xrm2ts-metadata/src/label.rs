//! Localized label sets.

use serde::{Deserialize, Serialize};

/// A label carried in several languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    pub localized_labels: Vec<LocalizedLabel>,
    pub user_localized_label: Option<LocalizedLabel>,
}

/// One label text tagged with its language code (LCID).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalizedLabel {
    pub label: String,
    pub language_code: i32,
}

impl Label {
    /// Creates a label with a single localization.
    pub fn new(text: impl Into<String>, language_code: i32) -> Self {
        Label::default().with(text, language_code)
    }

    /// Adds a localization, builder style.
    pub fn with(mut self, text: impl Into<String>, language_code: i32) -> Self {
        self.localized_labels.push(LocalizedLabel {
            label: text.into(),
            language_code,
        });
        self
    }

    /// Returns the text for `language_code`, if this label carries one.
    pub fn localized(&self, language_code: i32) -> Option<&str> {
        self.localized_labels
            .iter()
            .find(|l| l.language_code == language_code)
            .map(|l| l.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_matching_language() {
        let label = Label::new("Account", 1033).with("Compte", 1036);
        assert_eq!(label.localized(1036), Some("Compte"));
        assert_eq!(label.localized(1033), Some("Account"));
    }

    #[test]
    fn missing_language_is_none() {
        let label = Label::new("Account", 1033);
        assert_eq!(label.localized(1031), None);
        assert_eq!(Label::default().localized(1033), None);
    }

    #[test]
    fn deserializes_web_api_shape() {
        let json = r#"{
            "LocalizedLabels": [{"Label": "Konto", "LanguageCode": 1031}],
            "UserLocalizedLabel": {"Label": "Konto", "LanguageCode": 1031}
        }"#;
        let label: Label = serde_json::from_str(json).unwrap();
        assert_eq!(label.localized(1031), Some("Konto"));
        assert!(label.user_localized_label.is_some());
    }
}
