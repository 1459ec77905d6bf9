//! Construcción de argumentos e invocación sobre el target.
use serde_json::Value;

use crate::errors::ScopeError;
use crate::model::{ScopeConfig, ScopeType};
use crate::target::{ScopeArgs, ScopeTarget};

/// Boolean -> sin argumentos; `using` con valor presente -> posicionales por
/// clave (clave ausente -> `null`); resto -> el valor como único argumento.
pub fn build_args(kind: ScopeType, value: Option<Value>, using: Option<&[String]>) -> ScopeArgs {
    if kind == ScopeType::Boolean {
        return ScopeArgs::None;
    }
    match (using, value) {
        (Some(keys), Some(Value::Object(map))) => {
            ScopeArgs::Many(keys.iter()
                                .map(|k| map.get(k).cloned().unwrap_or(Value::Null))
                                .collect())
        }
        (_, value) => ScopeArgs::One(value.unwrap_or(Value::Null)),
    }
}

pub fn invoke<T, C>(scope: &str, target: T, value: Option<Value>, config: &ScopeConfig<C>) -> Result<T, ScopeError>
    where T: ScopeTarget
{
    let args = build_args(config.kind, value, config.using.as_deref());
    target.call_scope(scope, args)
}
