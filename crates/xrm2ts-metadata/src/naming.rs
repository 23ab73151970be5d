//! Naming and typing rules for generated script code.
//!
//! Two rules derive script-facing names from attribute metadata:
//!
//! - [`script_type`]: maps a type code to its script datatype
//! - [`web_api_name`]: the field name the Web API uses for an attribute
//!
//! Every caller goes through these functions so generated names never
//! disagree between call sites.

use crate::model::{AttributeMetadata, AttributeTypeCode};

/// Script datatype of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptType {
    Number,
    String,
}

impl ScriptType {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptType::Number => "number",
            ScriptType::String => "string",
        }
    }
}

impl std::fmt::Display for ScriptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a type code to its script datatype.
///
/// Numeric-like codes become `number`; every other code, including
/// unknown and absent ones, becomes `string`.
pub fn script_type(code: Option<AttributeTypeCode>) -> ScriptType {
    match code {
        Some(code) if code.is_numeric_like() => ScriptType::Number,
        _ => ScriptType::String,
    }
}

/// Returns the Web API field name for an attribute.
///
/// The lower-cased schema name, wrapped as `_<name>_value` for lookup-like
/// attributes that are not the primary key and whose name does not contain
/// `activity`.
pub fn web_api_name(attribute: &AttributeMetadata) -> String {
    let name = attribute.schema_name.to_lowercase();
    let is_lookup = attribute
        .attribute_type
        .is_some_and(AttributeTypeCode::is_lookup_like);

    if is_lookup && !attribute.is_primary_key() && !name.contains("activity") {
        format!("_{}_value", name)
    } else {
        name
    }
}

impl AttributeMetadata {
    /// Script datatype of this attribute.
    pub fn script_type(&self) -> ScriptType {
        script_type(self.attribute_type)
    }

    /// Web API field name of this attribute.
    pub fn web_api_name(&self) -> String {
        web_api_name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(schema_name: &str, code: AttributeTypeCode) -> AttributeMetadata {
        AttributeMetadata {
            logical_name: schema_name.to_lowercase(),
            schema_name: schema_name.into(),
            attribute_type: Some(code),
            is_primary_id: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn numeric_codes_map_to_number() {
        for code in [
            AttributeTypeCode::Virtual,
            AttributeTypeCode::State,
            AttributeTypeCode::Integer,
            AttributeTypeCode::BigInt,
            AttributeTypeCode::Money,
            AttributeTypeCode::Decimal,
            AttributeTypeCode::Double,
        ] {
            assert_eq!(script_type(Some(code)), ScriptType::Number, "{code}");
        }
    }

    #[test]
    fn other_codes_map_to_string() {
        for code in [
            AttributeTypeCode::Memo,
            AttributeTypeCode::Lookup,
            AttributeTypeCode::Status,
            AttributeTypeCode::Picklist,
            AttributeTypeCode::Boolean,
            AttributeTypeCode::Unknown,
        ] {
            assert_eq!(script_type(Some(code)), ScriptType::String, "{code}");
        }
        assert_eq!(script_type(None), ScriptType::String);
    }

    #[test]
    fn lookup_gets_value_wrapper() {
        let parent = attribute("ParentAccountId", AttributeTypeCode::Lookup);
        assert_eq!(web_api_name(&parent), "_parentaccountid_value");

        let owner = attribute("OwnerId", AttributeTypeCode::Owner);
        assert_eq!(owner.web_api_name(), "_ownerid_value");

        let party = attribute("To", AttributeTypeCode::PartyList);
        assert_eq!(party.web_api_name(), "_to_value");
    }

    #[test]
    fn activity_names_are_unchanged() {
        let activity = attribute("ActivityId", AttributeTypeCode::Lookup);
        assert_eq!(web_api_name(&activity), "activityid");
    }

    #[test]
    fn primary_key_is_unchanged() {
        let mut key = attribute("AccountId", AttributeTypeCode::Lookup);
        key.is_primary_id = Some(true);
        assert_eq!(web_api_name(&key), "accountid");
    }

    #[test]
    fn non_lookup_is_lowercased_only() {
        let name = attribute("AccountNumber", AttributeTypeCode::String);
        assert_eq!(web_api_name(&name), "accountnumber");

        let customer = attribute("CustomerId", AttributeTypeCode::Customer);
        assert_eq!(web_api_name(&customer), "customerid");
    }
}
