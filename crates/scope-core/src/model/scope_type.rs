//! Familias de tipo declarables para un scope y formas de valor en runtime.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ScopeError;

/// Tipo declarado de un scope. Gobierna la coerción y la forma de llamada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    Array,
    Hash,
    Boolean,
    /// Sólo string o número.
    #[default]
    Default,
}

impl ScopeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Array => "array",
            ScopeType::Hash => "hash",
            ScopeType::Boolean => "boolean",
            ScopeType::Default => "default",
        }
    }

    /// Formas de valor aceptadas. `Boolean` acepta cualquiera (nunca valida).
    pub fn allows(&self, shape: ValueShape) -> bool {
        match self {
            ScopeType::Array => shape == ValueShape::Array,
            ScopeType::Hash => shape == ValueShape::Object,
            ScopeType::Boolean => true,
            ScopeType::Default => matches!(shape, ValueShape::String | ValueShape::Number),
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeType {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(ScopeType::Array),
            "hash" => Ok(ScopeType::Hash),
            "boolean" => Ok(ScopeType::Boolean),
            "default" => Ok(ScopeType::Default),
            other => Err(ScopeError::UnknownType(other.to_string())),
        }
    }
}

/// Forma en runtime de un `serde_json::Value` (para mensajes de error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueShape::Null,
            Value::Bool(_) => ValueShape::Bool,
            Value::Number(_) => ValueShape::Number,
            Value::String(_) => ValueShape::String,
            Value::Array(_) => ValueShape::Array,
            Value::Object(_) => ValueShape::Object,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueShape::Null => "null",
            ValueShape::Bool => "boolean",
            ValueShape::Number => "number",
            ValueShape::String => "string",
            ValueShape::Array => "array",
            ValueShape::Object => "object",
        };
        f.write_str(name)
    }
}
