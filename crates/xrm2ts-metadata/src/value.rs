//! Runtime shapes of metadata property values.
//!
//! The provider hands out plain scalars, values boxed in a managed-property
//! wrapper, and localized label sets. [`PropertyValue`] names each shape so
//! a single [`render`](PropertyValue::render) turns any of them into text.

use crate::label::Label;
use crate::model::AttributeTypeCode;

/// One property value, borrowed from its metadata record.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<'a> {
    /// Text value.
    Text(&'a str),
    /// Integer value.
    Integer(i64),
    /// Boolean value.
    Bool(bool),
    /// Enumeration variant, by name.
    Enum(&'static str),
    /// A container holding exactly one inner value.
    Wrapped(Box<PropertyValue<'a>>),
    /// Localized label set.
    Label(&'a Label),
    /// Property not set.
    None,
}

impl<'a> PropertyValue<'a> {
    /// Wraps an optional inner value; `None` when the wrapper is absent.
    pub fn wrapped(inner: Option<PropertyValue<'a>>) -> Self {
        match inner {
            Some(value) => PropertyValue::Wrapped(Box::new(value)),
            None => PropertyValue::None,
        }
    }

    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, PropertyValue::None)
    }

    /// Renders the value as display text.
    ///
    /// Labels resolve to the localization for `language_code`. A label with
    /// no such localization renders as an empty string, as does `None`.
    /// Booleans render as `True` and `False`.
    pub fn render(&self, language_code: i32) -> String {
        match self {
            PropertyValue::Text(s) => (*s).to_string(),
            PropertyValue::Integer(n) => n.to_string(),
            PropertyValue::Bool(true) => "True".to_string(),
            PropertyValue::Bool(false) => "False".to_string(),
            PropertyValue::Enum(name) => (*name).to_string(),
            PropertyValue::Wrapped(inner) => inner.render(language_code),
            PropertyValue::Label(label) => label
                .localized(language_code)
                .unwrap_or_default()
                .to_string(),
            PropertyValue::None => String::new(),
        }
    }
}

// Conversions from field types to PropertyValue

impl<'a> From<&'a String> for PropertyValue<'a> {
    fn from(s: &'a String) -> Self {
        PropertyValue::Text(s)
    }
}

impl<'a> From<&'a Option<String>> for PropertyValue<'a> {
    fn from(s: &'a Option<String>) -> Self {
        s.as_deref().map_or(PropertyValue::None, PropertyValue::Text)
    }
}

impl From<Option<bool>> for PropertyValue<'_> {
    fn from(b: Option<bool>) -> Self {
        b.map_or(PropertyValue::None, PropertyValue::Bool)
    }
}

impl From<Option<i32>> for PropertyValue<'_> {
    fn from(n: Option<i32>) -> Self {
        n.map_or(PropertyValue::None, |n| PropertyValue::Integer(n as i64))
    }
}

impl From<Option<AttributeTypeCode>> for PropertyValue<'_> {
    fn from(code: Option<AttributeTypeCode>) -> Self {
        code.map_or(PropertyValue::None, |c| PropertyValue::Enum(c.as_str()))
    }
}

impl<'a> From<&'a Label> for PropertyValue<'a> {
    fn from(label: &'a Label) -> Self {
        PropertyValue::Label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(PropertyValue::Text("account").render(1033), "account");
        assert_eq!(PropertyValue::Integer(-42).render(1033), "-42");
        assert_eq!(PropertyValue::Bool(true).render(1033), "True");
        assert_eq!(PropertyValue::Bool(false).render(1033), "False");
        assert_eq!(PropertyValue::Enum("Lookup").render(1033), "Lookup");
        assert_eq!(PropertyValue::None.render(1033), "");
    }

    #[test]
    fn wrapped_renders_inner() {
        let value = PropertyValue::wrapped(Some(PropertyValue::Bool(false)));
        assert_eq!(value.render(1033), "False");

        let value = PropertyValue::wrapped(Some(PropertyValue::Enum("SystemRequired")));
        assert_eq!(value.render(1033), "SystemRequired");

        assert!(PropertyValue::wrapped(None).is_none());
    }

    #[test]
    fn label_without_language_renders_empty() {
        let label = Label::new("Account", 1033);
        assert_eq!(PropertyValue::Label(&label).render(1033), "Account");
        assert_eq!(PropertyValue::Label(&label).render(1036), "");
    }

    #[test]
    fn optional_conversions() {
        let name: Option<String> = None;
        assert!(PropertyValue::from(&name).is_none());
        assert_eq!(PropertyValue::from(Some(7)), PropertyValue::Integer(7));
        assert_eq!(
            PropertyValue::from(Some(AttributeTypeCode::Money)),
            PropertyValue::Enum("Money")
        );
    }
}
