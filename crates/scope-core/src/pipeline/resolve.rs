//! Resolución del valor crudo de un scope.
use serde_json::{Map, Value};

use crate::model::ScopeConfig;

/// Resultado de la resolución: valor crudo y si el scope debe considerarse.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub value: Option<Value>,
    pub should_apply: bool,
}

/// params[alias] si la clave existe; si no, el default (el supplier diferido
/// se invoca aquí, nunca al registrar); si tampoco hay default, no aplica.
pub fn resolve<C>(config: &ScopeConfig<C>, params: &Map<String, Value>, ctx: &C) -> Resolution {
    if let Some(value) = params.get(config.alias.as_str()) {
        return Resolution { value: Some(value.clone()),
                            should_apply: true };
    }
    match &config.default {
        Some(default) => Resolution { value: Some(default.produce(ctx)),
                                      should_apply: true },
        None => Resolution { value: None,
                             should_apply: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScopeOptions;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn params(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn looks_up_alias_not_scope_name() {
        let mut cfg: ScopeConfig = ScopeConfig::seed("by_degree");
        cfg.merge(&ScopeOptions::new().alias("degree"));
        let r = resolve(&cfg, &params(json!({"degree": "123", "by_degree": "x"})), &());
        assert_eq!(r, Resolution { value: Some(json!("123")), should_apply: true });
    }

    #[test]
    fn missing_key_without_default_does_not_apply() {
        let cfg: ScopeConfig = ScopeConfig::seed("status");
        let r = resolve(&cfg, &params(json!({})), &());
        assert_eq!(r, Resolution { value: None, should_apply: false });
    }

    #[test]
    fn deferred_default_only_runs_when_key_missing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut cfg: ScopeConfig = ScopeConfig::seed("status");
        cfg.merge(&ScopeOptions::new().default_with(move |_: &()| {
                                          counter.fetch_add(1, Ordering::SeqCst);
                                          json!("active")
                                      }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let present = resolve(&cfg, &params(json!({"status": "archived"})), &());
        assert_eq!(present.value, Some(json!("archived")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let missing = resolve(&cfg, &params(json!({})), &());
        assert_eq!(missing, Resolution { value: Some(json!("active")), should_apply: true });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn null_param_counts_as_present() {
        let cfg: ScopeConfig = ScopeConfig::seed("status");
        let r = resolve(&cfg, &params(json!({"status": null})), &());
        assert_eq!(r, Resolution { value: Some(Value::Null), should_apply: true });
    }
}
