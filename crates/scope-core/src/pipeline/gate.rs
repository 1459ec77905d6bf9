//! Supresión de valores en blanco.
use serde_json::Value;

/// Blanco: ausente, `null`, string vacío (o sólo espacios), array u objeto
/// vacío. Cero y `false` no son blancos.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}

pub fn should_fire(should_apply: bool, value: Option<&Value>, allow_blank: bool) -> bool {
    should_apply && (allow_blank || !is_blank(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_and_false_are_not_blank() {
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
    }

    #[test]
    fn empty_values_are_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!("   "))));
        assert!(is_blank(Some(&json!([]))));
        assert!(is_blank(Some(&json!({}))));
    }

    #[test]
    fn allow_blank_overrides_only_when_applicable() {
        assert!(!should_fire(true, Some(&json!("")), false));
        assert!(should_fire(true, Some(&json!("")), true));
        assert!(!should_fire(false, Some(&json!("x")), true));
    }
}
