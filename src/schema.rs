use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error as ThisError;

use crate::Object;
use crate::coerce::Coercer;
use crate::engine::{self, DeserializeError};
use crate::selector::{Selector, SelectorKind};

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("no root tag was declared")]
    MissingRoot,
    #[error("root tag declared more than once")]
    RootRedeclared,
    #[error("field {0:?} is bound more than once")]
    DuplicateField(String),
}

/// A declarative description of how one object type maps onto an XML
/// subtree: the tag its root node must carry, plus one selector per field.
///
/// A schema is built once through [`SchemaBuilder`], is immutable
/// afterwards, and may be shared by any number of concurrent
/// [`deserialize`](Schema::deserialize) calls. Sub-schemas are shared
/// through [`Arc`], so one schema value can serve both as a document root
/// and as a nesting target.
#[derive(Debug)]
pub struct Schema {
    root_tag: String,
    selectors: Vec<Selector>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The tag a node must have to be treated as this schema's root.
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    pub(crate) fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// Parses the document and deserializes the first top-level element
    /// matching this schema's root tag into an [`Object`].
    ///
    /// Parse failures of the underlying XML parser are propagated unchanged
    /// as [`DeserializeError::Parse`].
    pub fn deserialize(&self, xml: &str) -> Result<Object, DeserializeError> {
        let document = roxmltree::Document::parse(xml)?;
        engine::deserialize_first(self, document.root())
    }
}

/// Builds an immutable [`Schema`].
///
/// Registration order is preserved: selectors are evaluated, and object
/// fields populated, in the order they were added here. Binding the same
/// field name twice, declaring the root twice, or never declaring it at all
/// is rejected by [`build`](SchemaBuilder::build) rather than silently
/// patched over.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    root_tag: Option<String>,
    root_redeclared: bool,
    selectors: Vec<Selector>,
}

impl SchemaBuilder {
    /// Declares the root tag. Must be called exactly once.
    pub fn root(mut self, tag: impl Into<String>) -> Self {
        if self.root_tag.is_some() {
            self.root_redeclared = true;
        }
        self.root_tag = Some(tag.into());
        self
    }

    /// Binds `name` to an attribute on the root node itself.
    pub fn attribute(
        mut self,
        name: impl Into<String>,
        attribute: impl Into<String>,
        coercer: impl Into<Option<Coercer>>,
    ) -> Self {
        self.selectors.push(Selector::new(
            name,
            SelectorKind::Attribute {
                attribute: attribute.into(),
                coercer: coercer.into(),
            },
        ));
        self
    }

    /// Binds `name` to the inner markup of the first direct child with the
    /// given tag.
    pub fn node(
        mut self,
        name: impl Into<String>,
        tag: impl Into<String>,
        coercer: impl Into<Option<Coercer>>,
    ) -> Self {
        self.selectors.push(Selector::new(
            name,
            SelectorKind::Node {
                tag: tag.into(),
                coercer: coercer.into(),
            },
        ));
        self
    }

    /// Binds `name` to the list of inner markups of every direct child with
    /// the given tag, in document order.
    pub fn nodes(
        mut self,
        name: impl Into<String>,
        tag: impl Into<String>,
        coercer: impl Into<Option<Coercer>>,
    ) -> Self {
        self.selectors.push(Selector::new(
            name,
            SelectorKind::Nodes {
                tag: tag.into(),
                coercer: coercer.into(),
            },
        ));
        self
    }

    /// Binds `name` to a single nested object deserialized through
    /// `schema`. The matched tag defaults to the sub-schema's own root tag
    /// unless `tag` overrides it; the sub-schema itself is never mutated.
    pub fn nested(mut self, name: impl Into<String>, schema: impl Into<Arc<Schema>>, tag: Option<&str>) -> Self {
        self.selectors.push(Selector::new(
            name,
            SelectorKind::Nested {
                schema: schema.into(),
                tag: tag.map(str::to_string),
            },
        ));
        self
    }

    /// Binds `name` to the list of nested objects deserialized through
    /// `schema` from every matching direct child, in document order.
    pub fn nested_multiple(mut self, name: impl Into<String>, schema: impl Into<Arc<Schema>>, tag: Option<&str>) -> Self {
        self.selectors.push(Selector::new(
            name,
            SelectorKind::NestedMultiple {
                schema: schema.into(),
                tag: tag.map(str::to_string),
            },
        ));
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        if self.root_redeclared {
            return Err(SchemaError::RootRedeclared);
        }

        let root_tag = self.root_tag.ok_or(SchemaError::MissingRoot)?;

        let mut names = HashSet::new();
        for selector in &self.selectors {
            if !names.insert(selector.name()) {
                return Err(SchemaError::DuplicateField(selector.name().to_string()));
            }
        }

        Ok(Schema {
            root_tag,
            selectors: self.selectors,
        })
    }
}
