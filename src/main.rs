use scopeflow_rust::config::{read_json, registry_from_json, CONFIG};
use scopeflow_rust::{Params, ScopeArgs, ScopeOptions, ScopeRegistry, ScopeTable, ScopeType};
use serde_json::{json, Value};

/// Query de demostración: lista de cláusulas WHERE.
#[derive(Debug, Clone, Default)]
struct Graduations {
    clauses: Vec<String>,
}

impl Graduations {
    fn push(mut self, clause: String) -> Self {
        self.clauses.push(clause);
        self
    }

    fn to_sql(&self) -> String {
        if self.clauses.is_empty() {
            return "SELECT * FROM graduations".to_string();
        }
        format!("SELECT * FROM graduations WHERE {}", self.clauses.join(" AND "))
    }
}

fn graduation_scopes() -> ScopeTable<Graduations> {
    ScopeTable::new().with_scope("featured", |q: Graduations, _| q.push("featured = TRUE".into()))
                     .with_scope("by_degree", |q: Graduations, args| {
                         q.push(format!("degree = {}", render(args)))
                     })
                     .with_scope("by_period", |q: Graduations, args| match args {
                         ScopeArgs::Many(v) if v.len() == 2 => {
                             q.push(format!("started_at >= {} AND ended_at <= {}", v[0], v[1]))
                         }
                         other => q.push(format!("period = {}", render(other))),
                     })
                     .with_scope("status", |q: Graduations, args| q.push(format!("status = {}", render(args))))
}

fn render(args: ScopeArgs) -> String {
    args.into_vec().iter().map(Value::to_string).collect::<Vec<_>>().join(", ")
}

/// Ejemplo `graduation` con registro programático.
fn run_graduation_example() -> Result<(), String> {
    let mut scopes: ScopeRegistry = ScopeRegistry::with_settings(CONFIG.engine);
    scopes.register("graduation", ["featured"], ScopeOptions::new().kind(ScopeType::Boolean))
          .map_err(|e| e.to_string())?;
    scopes.register("graduation", ["by_degree"], ScopeOptions::new().alias("degree"))
          .map_err(|e| e.to_string())?;
    scopes.register("graduation", ["by_period"], ScopeOptions::new().using(["started_at", "ended_at"]))
          .map_err(|e| e.to_string())?;
    scopes.register("graduation", ["status"], ScopeOptions::new().default_value("active"))
          .map_err(|e| e.to_string())?;

    let table = graduation_scopes();
    let requests = [json!({"featured": "true", "degree": "bsc"}),
                    json!({"by_period": {"started_at": "2020-01-01", "ended_at": "2021-01-01"}, "status": "archived"}),
                    json!({"degree": ""})];
    for raw in requests {
        let params: Params = raw.as_object().cloned().unwrap_or_default();
        let query = scopes.apply_scopes("graduation", table.bind(Graduations::default()), &params)
                          .map_err(|e| e.to_string())?
                          .into_inner();
        println!("{raw} -> {}", query.to_sql());
    }
    Ok(())
}

/// Si hay ficheros configurados (SCOPEFLOW_SCOPES_FILE/SCOPEFLOW_PARAMS_FILE),
/// aplica el grupo configurado contra la query de demostración.
fn run_configured() -> Result<bool, String> {
    let (Some(scopes_file), Some(params_file)) = (&CONFIG.scopes_file, &CONFIG.params_file) else {
        return Ok(false);
    };
    let doc = read_json(scopes_file).map_err(|e| e.to_string())?;
    let registry = registry_from_json(&doc, CONFIG.engine).map_err(|e| e.to_string())?;
    let params: Params = match read_json(params_file).map_err(|e| e.to_string())? {
        Value::Object(map) => map,
        _ => return Err(format!("{params_file}: params must be an object")),
    };
    let query = registry.apply_scopes(&CONFIG.group, graduation_scopes().bind(Graduations::default()), &params)
                        .map_err(|e| e.to_string())?
                        .into_inner();
    println!("[{}] {}", CONFIG.group, query.to_sql());
    Ok(true)
}

fn main() {
    match run_configured() {
        Ok(true) => return,
        Ok(false) => {}
        Err(e) => {
            eprintln!("Configured run failed: {e}");
            std::process::exit(1);
        }
    }
    if let Err(e) = run_graduation_example() {
        eprintln!("Graduation example failed: {e}");
        std::process::exit(1);
    }
}
