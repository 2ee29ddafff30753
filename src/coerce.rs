use chrono::{DateTime, Utc};
use thiserror::Error as ThisError;

use crate::Value;

#[derive(Debug, ThisError)]
#[error("could not convert {raw:?}: {reason}")]
pub struct CoerceError {
    raw: String,
    reason: String,
}

impl CoerceError {
    pub fn new(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// The raw string the conversion rejected.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// A user-supplied string to value conversion.
///
/// `Send + Sync` is required so schemas stay shareable across threads.
pub trait Coerce: Send + Sync {
    fn coerce(&self, raw: &str) -> Result<Value, CoerceError>;
}

impl<F> Coerce for F
where
    F: Fn(&str) -> Result<Value, CoerceError> + Send + Sync,
{
    fn coerce(&self, raw: &str) -> Result<Value, CoerceError> {
        self(raw)
    }
}

/// The named built-in conversions.
#[derive(Clone, Copy, Debug)]
pub enum Builtin {
    Integer,
    Float,
    Boolean,
    /// An RFC 3339 timestamp, normalized to UTC.
    Instant,
}

impl Builtin {
    fn coerce(self, raw: &str) -> Result<Value, CoerceError> {
        match self {
            Builtin::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|error| CoerceError::new(raw, error.to_string())),
            Builtin::Float => raw
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|error| CoerceError::new(raw, error.to_string())),
            Builtin::Boolean => raw
                .trim()
                .parse::<bool>()
                .map(Value::Boolean)
                .map_err(|error| CoerceError::new(raw, error.to_string())),
            Builtin::Instant => DateTime::parse_from_rfc3339(raw.trim())
                .map(|instant| Value::Instant(instant.with_timezone(&Utc)))
                .map_err(|error| CoerceError::new(raw, error.to_string())),
        }
    }
}

/// A conversion attached to a scalar selector: either one of the named
/// built-ins or a custom [`Coerce`] capability. A custom capability always
/// takes precedence over the built-ins since a selector carries at most one
/// `Coercer`. A selector with no `Coercer` passes the raw string through.
pub enum Coercer {
    Builtin(Builtin),
    Custom(Box<dyn Coerce>),
}

impl Coercer {
    pub fn integer() -> Self {
        Coercer::Builtin(Builtin::Integer)
    }

    pub fn float() -> Self {
        Coercer::Builtin(Builtin::Float)
    }

    pub fn boolean() -> Self {
        Coercer::Builtin(Builtin::Boolean)
    }

    pub fn instant() -> Self {
        Coercer::Builtin(Builtin::Instant)
    }

    pub fn custom(coerce: impl Coerce + 'static) -> Self {
        Coercer::Custom(Box::new(coerce))
    }

    pub fn apply(&self, raw: &str) -> Result<Value, CoerceError> {
        match self {
            Coercer::Custom(coerce) => coerce.coerce(raw),
            Coercer::Builtin(builtin) => builtin.coerce(raw),
        }
    }
}

impl From<Builtin> for Coercer {
    fn from(builtin: Builtin) -> Self {
        Coercer::Builtin(builtin)
    }
}

impl std::fmt::Debug for Coercer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coercer::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Coercer::Custom(_) => f.debug_tuple("Custom").finish(),
        }
    }
}
