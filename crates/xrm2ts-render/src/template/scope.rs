use xrm2ts_metadata::{properties, AttributeMetadata, EntityMetadata, MetadataObject};

/// Resolved property values of one metadata record.
///
/// Built when the interpreter enters an entity or attribute, and dropped
/// when it leaves. Keys are the lower-cased property names of the record
/// type, in field-table order.
#[derive(Debug, Clone)]
pub struct Scope<'m, T> {
    record: &'m T,
    values: Vec<(&'static str, String)>,
}

pub type EntityScope<'m> = Scope<'m, EntityMetadata>;
pub type AttributeScope<'m> = Scope<'m, AttributeMetadata>;

impl<'m, T: MetadataObject> Scope<'m, T> {
    pub fn new(record: &'m T, language_code: i32) -> Self {
        Scope {
            record,
            values: properties(record, language_code).collect(),
        }
    }

    /// The record this scope was built from.
    pub fn record(&self) -> &'m T {
        self.record
    }

    /// Looks up a resolved value by lower-cased property name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }
}
