//! Static property tables for metadata records.
//!
//! Each metadata type lists its readable properties once, as a table of
//! `(name, accessor)` pairs. Templates reach any property by its
//! lower-cased name, and adding a row here is all it takes to expose a new
//! field.

use crate::model::{AttributeMetadata, EntityMetadata};
use crate::value::PropertyValue;

/// Accessor returning one property of `T`.
pub type Getter<T> = for<'a> fn(&'a T) -> PropertyValue<'a>;

/// A named, readable property of a metadata type.
pub struct Field<T: 'static> {
    /// Lower-cased property name.
    pub name: &'static str,
    /// Reads the property from a record.
    pub get: Getter<T>,
}

/// A metadata record type with a static property table.
pub trait MetadataObject: Sized + 'static {
    /// Returns every readable property, in a stable order.
    fn fields() -> &'static [Field<Self>];

    /// Looks up a property by name, ignoring case.
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields()
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

/// Resolves one property of `object` to display text.
///
/// Returns `None` only when `object` has no property called `property`.
pub fn resolve<T: MetadataObject>(object: &T, property: &str, language_code: i32) -> Option<String> {
    T::field(property).map(|f| (f.get)(object).render(language_code))
}

/// Resolves every property of `object`, in table order.
pub fn properties<T: MetadataObject>(
    object: &T,
    language_code: i32,
) -> impl Iterator<Item = (&'static str, String)> + '_ {
    T::fields()
        .iter()
        .map(move |f| (f.name, (f.get)(object).render(language_code)))
}

static ENTITY_FIELDS: &[Field<EntityMetadata>] = &[
    Field {
        name: "metadataid",
        get: |e| (&e.metadata_id).into(),
    },
    Field {
        name: "logicalname",
        get: |e| (&e.logical_name).into(),
    },
    Field {
        name: "schemaname",
        get: |e| (&e.schema_name).into(),
    },
    Field {
        name: "entitysetname",
        get: |e| (&e.entity_set_name).into(),
    },
    Field {
        name: "logicalcollectionname",
        get: |e| (&e.logical_collection_name).into(),
    },
    Field {
        name: "objecttypecode",
        get: |e| e.object_type_code.into(),
    },
    Field {
        name: "primaryidattribute",
        get: |e| (&e.primary_id_attribute).into(),
    },
    Field {
        name: "primarynameattribute",
        get: |e| (&e.primary_name_attribute).into(),
    },
    Field {
        name: "iscustomentity",
        get: |e| e.is_custom_entity.into(),
    },
    Field {
        name: "isactivity",
        get: |e| e.is_activity.into(),
    },
    Field {
        name: "isintersect",
        get: |e| e.is_intersect.into(),
    },
    Field {
        name: "iscustomizable",
        get: |e| {
            PropertyValue::wrapped(e.is_customizable.as_ref().map(|p| PropertyValue::Bool(p.value)))
        },
    },
    Field {
        name: "displayname",
        get: |e| (&e.display_name).into(),
    },
    Field {
        name: "displaycollectionname",
        get: |e| (&e.display_collection_name).into(),
    },
    Field {
        name: "description",
        get: |e| (&e.description).into(),
    },
];

static ATTRIBUTE_FIELDS: &[Field<AttributeMetadata>] = &[
    Field {
        name: "metadataid",
        get: |a| (&a.metadata_id).into(),
    },
    Field {
        name: "logicalname",
        get: |a| (&a.logical_name).into(),
    },
    Field {
        name: "schemaname",
        get: |a| (&a.schema_name).into(),
    },
    Field {
        name: "entitylogicalname",
        get: |a| (&a.entity_logical_name).into(),
    },
    Field {
        name: "attributetype",
        get: |a| a.attribute_type.into(),
    },
    Field {
        name: "attributetypename",
        get: |a| {
            PropertyValue::wrapped(
                a.attribute_type_name
                    .as_ref()
                    .map(|n| PropertyValue::Text(&n.value)),
            )
        },
    },
    Field {
        name: "attributeof",
        get: |a| (&a.attribute_of).into(),
    },
    Field {
        name: "columnnumber",
        get: |a| a.column_number.into(),
    },
    Field {
        name: "isprimaryid",
        get: |a| a.is_primary_id.into(),
    },
    Field {
        name: "isprimaryname",
        get: |a| a.is_primary_name.into(),
    },
    Field {
        name: "iscustomattribute",
        get: |a| a.is_custom_attribute.into(),
    },
    Field {
        name: "isvalidforcreate",
        get: |a| a.is_valid_for_create.into(),
    },
    Field {
        name: "isvalidforread",
        get: |a| a.is_valid_for_read.into(),
    },
    Field {
        name: "isvalidforupdate",
        get: |a| a.is_valid_for_update.into(),
    },
    Field {
        name: "islogical",
        get: |a| a.is_logical.into(),
    },
    Field {
        name: "iscustomizable",
        get: |a| {
            PropertyValue::wrapped(a.is_customizable.as_ref().map(|p| PropertyValue::Bool(p.value)))
        },
    },
    Field {
        name: "requiredlevel",
        get: |a| {
            PropertyValue::wrapped(
                a.required_level
                    .as_ref()
                    .map(|r| PropertyValue::Enum(r.value.as_str())),
            )
        },
    },
    Field {
        name: "displayname",
        get: |a| (&a.display_name).into(),
    },
    Field {
        name: "description",
        get: |a| (&a.description).into(),
    },
];

impl MetadataObject for EntityMetadata {
    fn fields() -> &'static [Field<Self>] {
        ENTITY_FIELDS
    }
}

impl MetadataObject for AttributeMetadata {
    fn fields() -> &'static [Field<Self>] {
        ATTRIBUTE_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::model::{
        AttributeRequiredLevel, AttributeTypeCode, AttributeTypeDisplayName,
        BooleanManagedProperty, RequiredLevelManagedProperty,
    };
    use std::collections::HashSet;

    fn account() -> EntityMetadata {
        EntityMetadata {
            logical_name: "account".into(),
            schema_name: "Account".into(),
            entity_set_name: Some("accounts".into()),
            object_type_code: Some(1),
            primary_id_attribute: Some("accountid".into()),
            is_custom_entity: Some(false),
            is_customizable: Some(BooleanManagedProperty::new(true)),
            display_name: Label::new("Account", 1033),
            ..Default::default()
        }
    }

    #[test]
    fn names_are_unique_and_lowercase() {
        for names in [
            EntityMetadata::fields().iter().map(|f| f.name).collect::<Vec<_>>(),
            AttributeMetadata::fields().iter().map(|f| f.name).collect::<Vec<_>>(),
        ] {
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len());
            assert!(names.iter().all(|n| *n == n.to_lowercase()));
        }
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let entity = account();
        assert_eq!(resolve(&entity, "LogicalName", 1033).as_deref(), Some("account"));
        assert_eq!(resolve(&entity, "ENTITYSETNAME", 1033).as_deref(), Some("accounts"));
    }

    #[test]
    fn resolve_unknown_property_is_none() {
        assert_eq!(resolve(&account(), "nosuchproperty", 1033), None);
    }

    #[test]
    fn resolve_value_shapes() {
        let entity = account();
        assert_eq!(resolve(&entity, "objecttypecode", 1033).as_deref(), Some("1"));
        assert_eq!(resolve(&entity, "iscustomentity", 1033).as_deref(), Some("False"));
        assert_eq!(resolve(&entity, "iscustomizable", 1033).as_deref(), Some("True"));
        assert_eq!(resolve(&entity, "displayname", 1033).as_deref(), Some("Account"));
        assert_eq!(resolve(&entity, "displayname", 1031).as_deref(), Some(""));
        assert_eq!(resolve(&entity, "isactivity", 1033).as_deref(), Some(""));
    }

    #[test]
    fn resolve_attribute_wrappers() {
        let attribute = AttributeMetadata {
            schema_name: "ParentAccountId".into(),
            attribute_type: Some(AttributeTypeCode::Lookup),
            attribute_type_name: Some(AttributeTypeDisplayName {
                value: "LookupType".into(),
            }),
            required_level: Some(RequiredLevelManagedProperty {
                value: AttributeRequiredLevel::ApplicationRequired,
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(resolve(&attribute, "attributetype", 1033).as_deref(), Some("Lookup"));
        assert_eq!(
            resolve(&attribute, "attributetypename", 1033).as_deref(),
            Some("LookupType")
        );
        assert_eq!(
            resolve(&attribute, "requiredlevel", 1033).as_deref(),
            Some("ApplicationRequired")
        );
    }

    #[test]
    fn properties_follow_table_order() {
        let entity = account();
        let names: Vec<_> = properties(&entity, 1033).map(|(name, _)| name).collect();
        let table: Vec<_> = EntityMetadata::fields().iter().map(|f| f.name).collect();
        assert_eq!(names, table);
    }
}
