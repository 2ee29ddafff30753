//! Declarative XML-to-object deserialization.
//!
//! Describe, per object type, which tag constitutes its root and which
//! attributes, child elements, and child-element lists become which named
//! fields; the engine walks a parsed document and materializes the matching
//! object graph.
//!
//! ```
//! use xmlbind::Schema;
//!
//! let song = Schema::builder()
//!     .root("song")
//!     .node("artist", "artist", None)
//!     .node("name", "name", None)
//!     .build()
//!     .unwrap();
//!
//! let songs = Schema::builder()
//!     .root("songs")
//!     .nested_multiple("songs", song, None)
//!     .build()
//!     .unwrap();
//!
//! let result = songs
//!     .deserialize("<songs><song><artist>Aphex Twin</artist><name>Windowlicker</name></song></songs>")
//!     .unwrap();
//!
//! let entries = result.get("songs").unwrap().as_objects().unwrap();
//! assert_eq!(entries[0].get("artist").unwrap().as_str(), Some("Aphex Twin"));
//! ```

mod coerce;

pub use coerce::Builtin;
pub use coerce::Coerce;
pub use coerce::CoerceError;
pub use coerce::Coercer;

mod engine;

pub use engine::DeserializeError;

mod object;

pub use object::Object;

mod schema;

pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaError;

mod selector;

mod value;

pub use value::Value;

mod xml;
