//! Target como tabla de handlers pre-resueltos y uso concurrente del registro.
use std::sync::Arc;
use std::thread;

use scope_core::{Params, ScopeArgs, ScopeError, ScopeOptions, ScopeRegistry, ScopeTable, ScopeType};
use serde_json::{json, Value};

/// Query de juguete: acumula filtros SQL-like.
#[derive(Debug, Clone, Default, PartialEq)]
struct Query {
    filters: Vec<String>,
}

impl Query {
    fn filter(mut self, clause: String) -> Self {
        self.filters.push(clause);
        self
    }
}

fn table() -> ScopeTable<Query> {
    ScopeTable::new().with_scope("featured", |q: Query, _| q.filter("featured = true".into()))
                     .with_scope("by_degree", |q: Query, args| {
                         let degree = args.into_vec().remove(0);
                         q.filter(format!("degree = {degree}"))
                     })
                     .with_scope("by_price_range", |q: Query, args| match args {
                         ScopeArgs::Many(v) => q.filter(format!("price between {} and {}", v[0], v[1])),
                         other => q.filter(format!("price {other:?}")),
                     })
}

fn registry() -> ScopeRegistry {
    let mut reg = ScopeRegistry::new();
    reg.register("graduation", ["featured"], ScopeOptions::new().kind(ScopeType::Boolean))
       .unwrap();
    reg.register("graduation", ["by_degree"], ScopeOptions::new().alias("degree"))
       .unwrap();
    reg.register("graduation", ["by_price_range"], ScopeOptions::new().using(["min", "max"]))
       .unwrap();
    reg
}

fn params(v: Value) -> Params {
    v.as_object().cloned().unwrap_or_default()
}

#[test]
fn table_target_chains_every_firing_scope() {
    let reg = registry();
    let table = table();
    let p = params(json!({"featured": "1", "degree": "msc", "by_price_range": {"min": 1, "max": 5}}));
    let query = reg.apply_scopes("graduation", table.bind(Query::default()), &p)
                   .unwrap()
                   .into_inner();
    assert_eq!(query.filters,
               vec!["featured = true".to_string(),
                    "degree = \"msc\"".to_string(),
                    "price between 1 and 5".to_string()]);
}

#[test]
fn registered_scope_missing_from_table_fails() {
    let mut reg = registry();
    reg.register("graduation", ["by_year"], ScopeOptions::new()).unwrap();
    let table = table();
    let err = reg.apply_scopes("graduation", table.bind(Query::default()), &params(json!({"by_year": 2020})))
                 .unwrap_err();
    assert_eq!(err, ScopeError::UndefinedScope("by_year".into()));
}

#[test]
fn registry_is_shared_read_only_across_threads() {
    let reg = Arc::new(registry());
    let table = Arc::new(table());
    let handles: Vec<_> = (0..4).map(|i| {
                                    let reg = Arc::clone(&reg);
                                    let table = Arc::clone(&table);
                                    thread::spawn(move || {
                                        let p = params(json!({ "degree": format!("d{i}") }));
                                        reg.apply_scopes("graduation", table.bind(Query::default()), &p)
                                           .map(|b| b.into_inner())
                                    })
                                })
                                .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let q = h.join().unwrap().unwrap();
        assert_eq!(q.filters, vec![format!("degree = \"d{i}\"")]);
    }
}
