use std::path::Path;

use log::debug;
use scope_core::{EngineSettings, Params, ScopeArgs, ScopeError, ScopeRegistry, ScopeTarget};
use serde::Serialize;
use serde_json::Value;

/// Target de la CLI: registra cada scope disparado con sus argumentos.
#[derive(Debug, Default)]
struct CallLog {
    calls: Vec<Call>,
}

#[derive(Debug, Serialize)]
struct Call {
    scope: String,
    args: Vec<Value>,
}

impl ScopeTarget for CallLog {
    fn call_scope(mut self, scope: &str, args: ScopeArgs) -> Result<Self, ScopeError> {
        self.calls.push(Call { scope: scope.to_string(),
                               args: args.into_vec() });
        Ok(self)
    }
}

#[derive(Debug, Serialize)]
struct ScopeSummary<'a> {
    group: &'a str,
    scope: &'a str,
    alias: &'a str,
    #[serde(rename = "type")]
    kind: scope_core::ScopeType,
    using: Option<&'a [String]>,
    has_default: bool,
    allow_blank: bool,
}

fn main() {
    // Cargar .env si existe (SCOPEFLOW_*)
    let _ = dotenvy::dotenv();
    // CLI mínima: `scope-cli apply --scopes <file> --params <file> [--group <name>]`
    //             `scope-cli list --scopes <file>`
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("");

    let mut scopes: Option<String> = std::env::var("SCOPEFLOW_SCOPES_FILE").ok();
    let mut params: Option<String> = std::env::var("SCOPEFLOW_PARAMS_FILE").ok();
    let mut group: Option<String> = std::env::var("SCOPEFLOW_GROUP").ok();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--scopes" => {
                i += 1;
                if i < args.len() { scopes = Some(args[i].clone()); }
            }
            "--params" => {
                i += 1;
                if i < args.len() { params = Some(args[i].clone()); }
            }
            "--group" => {
                i += 1;
                if i < args.len() { group = Some(args[i].clone()); }
            }
            other => eprintln!("[scope-cli] argumento ignorado: {other}"),
        }
        i += 1;
    }

    let Some(scopes_path) = scopes else {
        usage();
        std::process::exit(2);
    };
    let registry = load_registry(&scopes_path);

    match command {
        "list" => list(&registry),
        "apply" => {
            let Some(params_path) = params else {
                usage();
                std::process::exit(2);
            };
            let group = group.or_else(|| registry.groups().next().map(str::to_string))
                             .unwrap_or_default();
            apply(&registry, &group, &params_path);
        }
        _ => {
            usage();
            std::process::exit(2);
        }
    }
}

fn usage() {
    eprintln!("Uso: scope-cli apply --scopes <file> --params <file> [--group <name>]");
    eprintln!("     scope-cli list --scopes <file>");
}

fn read_json(path: &str) -> Value {
    let raw = match std::fs::read_to_string(Path::new(path)) {
        Ok(r) => r,
        Err(e) => { eprintln!("[scope-cli] no se pudo leer {path}: {e}"); std::process::exit(3); }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => { eprintln!("[scope-cli] JSON inválido en {path}: {e}"); std::process::exit(3); }
    }
}

/// El fichero de scopes es `{grupo: {scope: opciones}}`.
fn load_registry(path: &str) -> ScopeRegistry {
    let doc = read_json(path);
    let Some(groups) = doc.as_object() else {
        eprintln!("[scope-cli] {path}: se esperaba un objeto de grupos");
        std::process::exit(3);
    };
    let mut registry = ScopeRegistry::with_settings(EngineSettings::from_env());
    for (group, scopes) in groups {
        if let Err(e) = registry.register_json(group, scopes) {
            eprintln!("[scope-cli] error registrando grupo {group}: {e}");
            std::process::exit(4);
        }
    }
    debug!("load_registry:done path={path} groups={}", groups.len());
    registry
}

fn list(registry: &ScopeRegistry) {
    for group in registry.groups() {
        let Some(table) = registry.group(group) else { continue };
        for (scope, cfg) in table {
            let summary = ScopeSummary { group,
                                         scope,
                                         alias: &cfg.alias,
                                         kind: cfg.kind,
                                         using: cfg.using.as_deref(),
                                         has_default: cfg.default.is_some(),
                                         allow_blank: cfg.allow_blank };
            match serde_json::to_string(&summary) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("[scope-cli] {e}"),
            }
        }
    }
}

fn apply(registry: &ScopeRegistry, group: &str, params_path: &str) {
    if !registry.contains_group(group) {
        eprintln!("[scope-cli] {}", ScopeError::UnknownGroup(group.to_string()));
        std::process::exit(4);
    }
    let params: Params = match read_json(params_path) {
        Value::Object(map) => map,
        _ => { eprintln!("[scope-cli] {params_path}: los params deben ser un objeto"); std::process::exit(3); }
    };
    match registry.apply_scopes(group, CallLog::default(), &params) {
        Ok(log) => {
            for call in &log.calls {
                match serde_json::to_string(call) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("[scope-cli] {e}"),
                }
            }
        }
        Err(e) => {
            eprintln!("[scope-cli] {e}");
            std::process::exit(5);
        }
    }
}
