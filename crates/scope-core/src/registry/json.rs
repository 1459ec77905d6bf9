//! Registro declarativo a partir de JSON (bag de opciones sin tipar).
use serde_json::Value;

use super::ScopeRegistry;
use crate::errors::ScopeError;
use crate::model::{Condition, DefaultValue, ScopeOptions};

impl<C> ScopeOptions<C> {
    /// Construye opciones desde un objeto JSON. Claves reconocidas: `type`,
    /// `if`, `unless`, `default`, `as`, `using`, `allow_blank` (también
    /// `allowBlank`). `null` equivale a un objeto vacío.
    pub fn from_json(raw: &Value) -> Result<Self, ScopeError> {
        let map = match raw {
            Value::Null => return Ok(Self::new()),
            Value::Object(map) => map,
            other => return Err(invalid("options", format!("expected an object, got {other}"))),
        };

        let mut options = Self::new();
        for (key, value) in map {
            match key.as_str() {
                "type" => {
                    let name = value.as_str()
                                    .ok_or_else(|| invalid("type", "expected a type name"))?;
                    options.kind = Some(name.parse()?);
                }
                "as" => {
                    options.alias = Some(match value {
                                             Value::String(s) => s.clone(),
                                             Value::Number(n) => n.to_string(),
                                             _ => return Err(invalid("as", "expected a string")),
                                         });
                }
                "using" => options.using = Some(parse_using(value)?),
                "if" => options.when = Some(parse_condition("if", value)?),
                "unless" => options.unless = Some(parse_condition("unless", value)?),
                "default" => options.default = Some(DefaultValue::Literal(value.clone())),
                "allow_blank" | "allowBlank" => {
                    let flag = value.as_bool()
                                    .ok_or_else(|| invalid("allow_blank", "expected a boolean"))?;
                    options.allow_blank = Some(flag);
                }
                other => return Err(ScopeError::InvalidOption { option: other.to_string() }),
            }
        }
        Ok(options)
    }
}

impl<C> ScopeRegistry<C> {
    /// Registra un grupo descrito como `{scope: options, ...}` en orden de documento.
    pub fn register_json(&mut self, group: &str, raw: &Value) -> Result<(), ScopeError> {
        let scopes = raw.as_object()
                        .ok_or_else(|| invalid("group", format!("group `{group}` must be an object")))?;
        for (scope, options) in scopes {
            let options = ScopeOptions::from_json(options)?;
            self.register(group, [scope.as_str()], options)?;
        }
        Ok(())
    }
}

/// `"min"` -> `["min"]`; arrays deben ser de strings.
fn parse_using(value: &Value) -> Result<Vec<String>, ScopeError> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items.iter()
                                    .map(|v| v.as_str()
                                              .map(str::to_string)
                                              .ok_or_else(|| invalid("using", "keys must be strings")))
                                    .collect(),
        _ => Err(invalid("using", "expected a key or a list of keys")),
    }
}

fn parse_condition<C>(option: &str, value: &Value) -> Result<Condition<C>, ScopeError> {
    match value {
        Value::Bool(b) => Ok(Condition::Literal(*b)),
        Value::String(name) => Ok(Condition::Named(name.clone())),
        _ => Err(invalid(option, "expected a boolean or a condition name")),
    }
}

fn invalid(option: &str, reason: impl Into<String>) -> ScopeError {
    ScopeError::InvalidOptionValue { option: option.to_string(),
                                     reason: reason.into() }
}
