//! CRM metadata model for template-driven code generation.
//!
//! This crate models the entity and attribute metadata handed to the
//! generator and turns every public property of a metadata record into a
//! display string a template can use.
//!
//! - [`EntityMetadata`] and [`AttributeMetadata`]: read-only records,
//!   deserializable from the Web API's PascalCase JSON
//! - [`PropertyValue`]: the shape of one property (scalar, wrapped, label)
//! - [`MetadataObject`]: a static `(name, accessor)` table per record type
//! - [`resolve`] / [`properties`]: case-insensitive lookup and enumeration
//! - [`naming`]: script datatype mapping and the Web API lookup-name rule
//!
//! # Example
//!
//! ```rust
//! use xrm2ts_metadata::{resolve, AttributeMetadata, AttributeTypeCode, Label};
//!
//! let attribute = AttributeMetadata {
//!     schema_name: "ParentAccountId".into(),
//!     attribute_type: Some(AttributeTypeCode::Lookup),
//!     display_name: Label::new("Parent Account", 1033),
//!     ..Default::default()
//! };
//!
//! assert_eq!(resolve(&attribute, "AttributeType", 1033).as_deref(), Some("Lookup"));
//! assert_eq!(resolve(&attribute, "displayname", 1033).as_deref(), Some("Parent Account"));
//! assert_eq!(resolve(&attribute, "displayname", 1036).as_deref(), Some(""));
//! assert_eq!(attribute.web_api_name(), "_parentaccountid_value");
//! ```

mod fields;
mod label;
mod model;
pub mod naming;
mod value;

pub use fields::{properties, resolve, Field, Getter, MetadataObject};
pub use label::{Label, LocalizedLabel};
pub use model::{
    AttributeMetadata, AttributeRequiredLevel, AttributeTypeCode, AttributeTypeDisplayName,
    BooleanManagedProperty, EntityMetadata, RequiredLevelManagedProperty,
};
pub use naming::ScriptType;
pub use value::PropertyValue;
