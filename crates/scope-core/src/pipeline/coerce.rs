//! Validación de tipo del valor resuelto.
use serde_json::Value;

use crate::errors::ScopeError;
use crate::model::{ScopeType, ValueShape};

/// Pertenencia exacta a `{"true", true, "1", 1}`.
pub fn is_true_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true" || s == "1",
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

/// `Boolean` nunca falla: devuelve `Some(Bool)`. Para el resto, un valor
/// presente (no nulo) con forma no permitida produce `TypeMismatch`.
pub fn coerce(kind: ScopeType, key: &str, value: Option<Value>) -> Result<Option<Value>, ScopeError> {
    if kind == ScopeType::Boolean {
        let truthy = value.as_ref().is_some_and(is_true_value);
        return Ok(Some(Value::Bool(truthy)));
    }
    match &value {
        Some(v) if !v.is_null() && !kind.allows(ValueShape::of(v)) => {
            Err(ScopeError::TypeMismatch { key: key.to_string(),
                                           expected: kind,
                                           actual: ValueShape::of(v) })
        }
        _ => Ok(value),
    }
}
