use chrono::{DateTime, Utc};

use crate::Object;

/// A value produced by matching one selector against a node.
///
/// Scalar variants come out of coercion (or raw string passthrough), the
/// list and object variants out of the multi-match and nested selectors.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Instant(DateTime<Utc>),
    List(Vec<Value>),
    Object(Object),
    ObjectList(Vec<Object>),
}

macro_rules! declare_value {
    ($qualifier:ty, $variant:path) => {
        impl From<$qualifier> for Value {
            fn from(value: $qualifier) -> Self {
                $variant(value)
            }
        }

        impl<'a> TryFrom<&'a Value> for &'a $qualifier {
            type Error = ();

            fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
                match value {
                    $variant(value) => Ok(value),
                    _ => Err(()),
                }
            }
        }
    };
}

declare_value!(String, Value::String);
declare_value!(i64, Value::Integer);
declare_value!(f64, Value::Float);
declare_value!(bool, Value::Boolean);
declare_value!(DateTime<Utc>, Value::Instant);
declare_value!(Vec<Value>, Value::List);
declare_value!(Object, Value::Object);
declare_value!(Vec<Object>, Value::ObjectList);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Instant(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_objects(&self) -> Option<&[Object]> {
        match self {
            Value::ObjectList(objects) => Some(objects),
            _ => None,
        }
    }
}
