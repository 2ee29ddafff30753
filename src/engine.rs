//! The recursive materialization engine.
//!
//! Stateless beyond the call stack: every invocation walks one subtree with
//! one shared, immutable schema. Nested selectors re-enter
//! [`deserialize_node`] and [`deserialize_all`] with their sub-schema.

use indexmap::IndexMap;
use roxmltree::Node;
use thiserror::Error as ThisError;

use crate::coerce::CoerceError;
use crate::{Object, Schema, xml};

#[derive(Debug, ThisError)]
pub enum DeserializeError {
    /// The node tree adapter rejected the document; propagated unchanged.
    #[error("invalid xml: {0}")]
    Parse(#[from] roxmltree::Error),
    #[error("no element matching root tag {tag:?}")]
    RootNotFound { tag: String },
    #[error("no child element matching tag {tag:?}")]
    MissingChild { tag: String },
    #[error("missing attribute {name:?}")]
    MissingAttribute { name: String },
    #[error("field {field:?}: {source}")]
    Coercion {
        field: String,
        #[source]
        source: CoerceError,
    },
}

/// Runs every selector of the schema against the given root node, in
/// registration order, and materializes the resulting object. The first
/// selector to fail aborts the whole call; there is no partial object.
pub(crate) fn deserialize_node(schema: &Schema, node: Node<'_, '_>) -> Result<Object, DeserializeError> {
    let mut fields = IndexMap::with_capacity(schema.selectors().len());

    for selector in schema.selectors() {
        let value = selector.match_node(node)?;
        fields.insert(selector.name().to_string(), value);
    }

    Ok(Object::new(fields))
}

/// Locates the first direct child of `tree` matching the schema's root tag
/// and deserializes it.
pub(crate) fn deserialize_first(schema: &Schema, tree: Node<'_, '_>) -> Result<Object, DeserializeError> {
    let root = xml::find_child(tree, schema.root_tag()).ok_or_else(|| DeserializeError::RootNotFound {
        tag: schema.root_tag().to_string(),
    })?;

    deserialize_node(schema, root)
}

/// Deserializes every direct child of `tree` matching `tag`, in document
/// order. Zero matches is an empty list, not an error.
pub(crate) fn deserialize_all(schema: &Schema, tree: Node<'_, '_>, tag: &str) -> Result<Vec<Object>, DeserializeError> {
    let mut objects = Vec::new();

    for root in xml::matching_children(tree, tag) {
        objects.push(deserialize_node(schema, root)?);
    }

    Ok(objects)
}
