//! `if`/`unless`: se almacenan siempre; sólo se consultan si el motor lo activa.
use scope_core::{Condition, EngineSettings, Params, ScopeArgs, ScopeContext, ScopeError, ScopeOptions, ScopeRegistry, ScopeTarget};
use serde_json::{json, Value};

#[derive(Debug, Default)]
struct Names(Vec<String>);

impl ScopeTarget for Names {
    fn call_scope(mut self, scope: &str, _args: ScopeArgs) -> Result<Self, ScopeError> {
        self.0.push(scope.to_string());
        Ok(self)
    }
}

struct Session {
    admin: bool,
}

impl ScopeContext for Session {
    fn named_condition(&self, name: &str) -> Option<bool> {
        match name {
            "admin" => Some(self.admin),
            _ => None,
        }
    }
}

fn params(v: Value) -> Params {
    v.as_object().cloned().unwrap_or_default()
}

fn register(reg: &mut ScopeRegistry<Session>) {
    reg.register("g", ["drafts"], ScopeOptions::new().when(|s: &Session| s.admin)).unwrap();
    reg.register("g", ["published"], ScopeOptions::new().unless_named("admin")).unwrap();
    reg.register("g", ["mystery"], ScopeOptions::new().when_named("unknown")).unwrap();
}

#[test]
fn conditions_are_stored_but_not_enforced_by_default() {
    let mut reg = ScopeRegistry::new();
    register(&mut reg);
    assert!(matches!(reg.config("g", "published").unwrap().unless, Some(Condition::Named(ref n)) if n == "admin"));

    let p = params(json!({"drafts": "1", "published": "1", "mystery": "1"}));
    let out = reg.apply_scopes_with("g", Names::default(), &p, &Session { admin: false }).unwrap();
    assert_eq!(out.0, vec!["drafts", "published", "mystery"]);
}

#[test]
fn enforced_conditions_filter_scopes() {
    let mut reg = ScopeRegistry::with_settings(EngineSettings { enforce_conditions: true });
    register(&mut reg);
    let p = params(json!({"drafts": "1", "published": "1", "mystery": "1"}));

    let guest = reg.apply_scopes_with("g", Names::default(), &p, &Session { admin: false }).unwrap();
    assert_eq!(guest.0, vec!["published", "mystery"]);

    let admin = reg.apply_scopes_with("g", Names::default(), &p, &Session { admin: true }).unwrap();
    assert_eq!(admin.0, vec!["drafts", "mystery"]);
}

#[test]
fn literal_conditions_from_json() {
    let mut reg = ScopeRegistry::with_settings(EngineSettings { enforce_conditions: true });
    reg.register_json("g", &json!({"off": {"if": false}, "on": {"unless": false}})).unwrap();
    let out = reg.apply_scopes_with("g", Names::default(), &params(json!({"off": "x", "on": "y"})), &Session { admin: false })
                 .unwrap();
    assert_eq!(out.0, vec!["on"]);
}
