//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;
use std::fs;

use scope_core::{EngineSettings, ScopeError, ScopeRegistry};
use serde_json::Value;
use thiserror::Error;

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fichero JSON `{grupo: {scope: opciones}}`.
    pub scopes_file: Option<String>,
    /// Fichero JSON con los params de ejemplo.
    pub params_file: Option<String>,
    /// Grupo aplicado por defecto.
    pub group: String,
    pub engine: EngineSettings,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    scope_core::settings::init_dotenv();
    AppConfig { scopes_file: env::var("SCOPEFLOW_SCOPES_FILE").ok(),
                params_file: env::var("SCOPEFLOW_PARAMS_FILE").ok(),
                group: env::var("SCOPEFLOW_GROUP").unwrap_or_else(|_| "default".to_string()),
                engine: EngineSettings::from_env() }
});

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid json in {path}: {source}")]
    Json { path: String, source: serde_json::Error },
    #[error("scope file must be an object of groups")]
    NotAnObject,
    #[error(transparent)]
    Scope(#[from] ScopeError),
}

/// Lee un fichero JSON.
pub fn read_json(path: &str) -> Result<Value, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json { path: path.to_string(), source })
}

/// Construye un registro a partir de un documento `{grupo: {scope: opciones}}`.
pub fn registry_from_json(doc: &Value, settings: EngineSettings) -> Result<ScopeRegistry, ConfigError> {
    let groups = doc.as_object().ok_or(ConfigError::NotAnObject)?;
    let mut registry = ScopeRegistry::with_settings(settings);
    for (group, scopes) in groups {
        registry.register_json(group, scopes)?;
    }
    Ok(registry)
}
