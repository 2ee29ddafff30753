use indexmap::IndexMap;

use crate::Value;

/// The read-only record produced by deserializing one node against a schema.
///
/// It exposes exactly the field names the schema declared, in registration
/// order. Identity is per call; two deserializations of the same document
/// produce independent objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    fields: IndexMap<String, Value>,
}

impl Object {
    pub(crate) fn new(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the value of the field with the given name, if declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the value of the field with the given name, extracted into the
    /// requested type. If the field does not exist or holds a different
    /// variant, returns None.
    pub fn value<'a, V>(&'a self, name: &str) -> Option<V>
    where
        V: TryFrom<&'a Value>,
    {
        self.fields.get(name).and_then(|value| V::try_from(value).ok())
    }

    /// Returns the fields of the object, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
