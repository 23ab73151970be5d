//! Entity and attribute metadata records.
//!
//! Field names follow the CRM Web API so a metadata dump deserializes
//! directly. Every field is optional on the wire; absent values take their
//! `Default`.

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Metadata for one entity (table), with its attributes in provider order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityMetadata {
    pub metadata_id: Option<String>,
    pub logical_name: String,
    pub schema_name: String,
    pub entity_set_name: Option<String>,
    pub logical_collection_name: Option<String>,
    pub object_type_code: Option<i32>,
    pub primary_id_attribute: Option<String>,
    pub primary_name_attribute: Option<String>,
    pub is_custom_entity: Option<bool>,
    pub is_activity: Option<bool>,
    pub is_intersect: Option<bool>,
    pub is_customizable: Option<BooleanManagedProperty>,
    pub display_name: Label,
    pub display_collection_name: Label,
    pub description: Label,
    pub attributes: Vec<AttributeMetadata>,
}

impl EntityMetadata {
    /// Returns `true` if the provider flagged this entity as custom.
    pub fn is_custom(&self) -> bool {
        self.is_custom_entity.unwrap_or(false)
    }
}

/// Metadata for one attribute (column) of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttributeMetadata {
    pub metadata_id: Option<String>,
    pub logical_name: String,
    pub schema_name: String,
    pub entity_logical_name: Option<String>,
    pub attribute_type: Option<AttributeTypeCode>,
    pub attribute_type_name: Option<AttributeTypeDisplayName>,
    pub attribute_of: Option<String>,
    pub column_number: Option<i32>,
    pub is_primary_id: Option<bool>,
    pub is_primary_name: Option<bool>,
    pub is_custom_attribute: Option<bool>,
    pub is_valid_for_create: Option<bool>,
    pub is_valid_for_read: Option<bool>,
    pub is_valid_for_update: Option<bool>,
    pub is_logical: Option<bool>,
    pub is_customizable: Option<BooleanManagedProperty>,
    pub required_level: Option<RequiredLevelManagedProperty>,
    pub display_name: Label,
    pub description: Label,
}

impl AttributeMetadata {
    /// Returns `true` for virtual attributes (e.g. `owneridname`).
    pub fn is_virtual(&self) -> bool {
        self.attribute_type == Some(AttributeTypeCode::Virtual)
    }

    /// Returns `true` if this attribute is its entity's primary key.
    pub fn is_primary_key(&self) -> bool {
        self.is_primary_id.unwrap_or(false)
    }
}

/// Attribute type codes as reported by the metadata provider.
///
/// Names the crate does not know deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeTypeCode {
    Boolean,
    Customer,
    DateTime,
    Decimal,
    Double,
    Integer,
    Lookup,
    Memo,
    Money,
    Owner,
    PartyList,
    Picklist,
    State,
    Status,
    String,
    Uniqueidentifier,
    CalendarRules,
    Virtual,
    BigInt,
    ManagedProperty,
    EntityName,
    #[serde(other)]
    Unknown,
}

impl AttributeTypeCode {
    /// Returns the provider's name for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeTypeCode::Boolean => "Boolean",
            AttributeTypeCode::Customer => "Customer",
            AttributeTypeCode::DateTime => "DateTime",
            AttributeTypeCode::Decimal => "Decimal",
            AttributeTypeCode::Double => "Double",
            AttributeTypeCode::Integer => "Integer",
            AttributeTypeCode::Lookup => "Lookup",
            AttributeTypeCode::Memo => "Memo",
            AttributeTypeCode::Money => "Money",
            AttributeTypeCode::Owner => "Owner",
            AttributeTypeCode::PartyList => "PartyList",
            AttributeTypeCode::Picklist => "Picklist",
            AttributeTypeCode::State => "State",
            AttributeTypeCode::Status => "Status",
            AttributeTypeCode::String => "String",
            AttributeTypeCode::Uniqueidentifier => "Uniqueidentifier",
            AttributeTypeCode::CalendarRules => "CalendarRules",
            AttributeTypeCode::Virtual => "Virtual",
            AttributeTypeCode::BigInt => "BigInt",
            AttributeTypeCode::ManagedProperty => "ManagedProperty",
            AttributeTypeCode::EntityName => "EntityName",
            AttributeTypeCode::Unknown => "Unknown",
        }
    }

    /// Relational types whose Web API field is `_<name>_value`.
    pub fn is_lookup_like(self) -> bool {
        matches!(
            self,
            AttributeTypeCode::Lookup | AttributeTypeCode::Owner | AttributeTypeCode::PartyList
        )
    }

    /// Types emitted as script numbers.
    pub fn is_numeric_like(self) -> bool {
        matches!(
            self,
            AttributeTypeCode::Virtual
                | AttributeTypeCode::State
                | AttributeTypeCode::Integer
                | AttributeTypeCode::BigInt
                | AttributeTypeCode::Money
                | AttributeTypeCode::Decimal
                | AttributeTypeCode::Double
        )
    }
}

impl std::fmt::Display for AttributeTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wrapped type name, e.g. `{"Value": "LookupType"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttributeTypeDisplayName {
    pub value: String,
}

/// A boolean wrapped with its managed-solution metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BooleanManagedProperty {
    pub value: bool,
    pub can_be_changed: bool,
    pub managed_property_logical_name: Option<String>,
}

impl BooleanManagedProperty {
    pub fn new(value: bool) -> Self {
        BooleanManagedProperty {
            value,
            ..Default::default()
        }
    }
}

/// Requirement level of an attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeRequiredLevel {
    #[default]
    None,
    SystemRequired,
    ApplicationRequired,
    Recommended,
}

impl AttributeRequiredLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeRequiredLevel::None => "None",
            AttributeRequiredLevel::SystemRequired => "SystemRequired",
            AttributeRequiredLevel::ApplicationRequired => "ApplicationRequired",
            AttributeRequiredLevel::Recommended => "Recommended",
        }
    }
}

/// A required level wrapped with its managed-solution metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequiredLevelManagedProperty {
    pub value: AttributeRequiredLevel,
    pub can_be_changed: bool,
    pub managed_property_logical_name: Option<String>,
}
