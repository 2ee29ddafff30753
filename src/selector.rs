use std::sync::Arc;

use roxmltree::Node;

use crate::coerce::Coercer;
use crate::engine::{self, DeserializeError};
use crate::xml;
use crate::{Schema, Value};

/// One schema-bound rule mapping a declared field to a matching procedure
/// over an XML subtree.
#[derive(Debug)]
pub(crate) struct Selector {
    name: String,
    kind: SelectorKind,
}

#[derive(Debug)]
pub(crate) enum SelectorKind {
    /// An attribute on the current node, by attribute name.
    Attribute {
        attribute: String,
        coercer: Option<Coercer>,
    },
    /// The first direct child with the given tag, as its inner markup.
    Node {
        tag: String,
        coercer: Option<Coercer>,
    },
    /// Every direct child with the given tag, each independently coerced.
    Nodes {
        tag: String,
        coercer: Option<Coercer>,
    },
    /// The first direct child matching the sub-schema's root (or the
    /// override tag), deserialized through the sub-schema.
    Nested {
        schema: Arc<Schema>,
        tag: Option<String>,
    },
    /// Every matching direct child, deserialized through the sub-schema.
    NestedMultiple {
        schema: Arc<Schema>,
        tag: Option<String>,
    },
}

impl Selector {
    pub(crate) fn new(name: impl Into<String>, kind: SelectorKind) -> Self {
        Self { name: name.into(), kind }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Matches this selector against the current node.
    ///
    /// The zero-match asymmetry is deliberate: the singular variants fail
    /// when their target is absent, the list variants yield an empty list.
    pub(crate) fn match_node(&self, node: Node<'_, '_>) -> Result<Value, DeserializeError> {
        match &self.kind {
            SelectorKind::Attribute { attribute, coercer } => {
                let raw = node
                    .attribute(attribute.as_str())
                    .ok_or_else(|| DeserializeError::MissingAttribute { name: attribute.clone() })?;
                self.coerce(coercer, raw)
            }
            SelectorKind::Node { tag, coercer } => {
                let child = xml::find_child(node, tag)
                    .ok_or_else(|| DeserializeError::MissingChild { tag: tag.clone() })?;
                self.coerce(coercer, xml::inner_markup(child))
            }
            SelectorKind::Nodes { tag, coercer } => {
                let mut values = Vec::new();
                for child in xml::matching_children(node, tag) {
                    values.push(self.coerce(coercer, xml::inner_markup(child))?);
                }
                Ok(Value::List(values))
            }
            SelectorKind::Nested { schema, tag } => {
                let tag = tag.as_deref().unwrap_or_else(|| schema.root_tag());
                let child = xml::find_child(node, tag)
                    .ok_or_else(|| DeserializeError::MissingChild { tag: tag.to_string() })?;
                engine::deserialize_node(schema, child).map(Value::Object)
            }
            SelectorKind::NestedMultiple { schema, tag } => {
                let tag = tag.as_deref().unwrap_or_else(|| schema.root_tag());
                engine::deserialize_all(schema, node, tag).map(Value::ObjectList)
            }
        }
    }

    fn coerce(&self, coercer: &Option<Coercer>, raw: &str) -> Result<Value, DeserializeError> {
        match coercer {
            Some(coercer) => coercer.apply(raw).map_err(|source| DeserializeError::Coercion {
                field: self.name.clone(),
                source,
            }),
            None => Ok(Value::String(raw.to_string())),
        }
    }
}
