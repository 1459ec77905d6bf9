//! Errores del motor de scopes.
//!
//! Todos son errores de programación/configuración: no hay variantes
//! reintentables. La capa que envuelve al motor decide cómo presentarlos.

use thiserror::Error;

use crate::model::{ScopeType, ValueShape};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScopeError {
    /// Clave de opción no reconocida durante el registro.
    #[error("unknown scope option `{option}` (expected one of: type, if, unless, default, as, using, allow_blank)")]
    InvalidOption { option: String },

    /// `using` combinado con un `type` distinto de `hash`.
    #[error("scope `{scope}`: cannot combine `using` with type `{declared}`, only `hash` is allowed")]
    ConflictingType { scope: String, declared: ScopeType },

    /// El valor resuelto no tiene la forma permitida por el tipo declarado.
    #[error("expected type `{expected}` in params[\"{key}\"], got {actual}")]
    TypeMismatch { key: String, expected: ScopeType, actual: ValueShape },

    #[error("unknown scope type `{0}`")]
    UnknownType(String),

    #[error("invalid value for option `{option}`: {reason}")]
    InvalidOptionValue { option: String, reason: String },

    /// El target no expone una operación con ese nombre.
    #[error("target has no scope named `{0}`")]
    UndefinedScope(String),

    #[error("unknown scope group `{0}`")]
    UnknownGroup(String),
}
