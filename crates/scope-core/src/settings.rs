//! Ajustes del motor cargados desde variables de entorno.
//! Convención `SCOPEFLOW_*`; el `.env` se carga una sola vez.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineSettings {
    /// Si `true`, `if`/`unless` deciden si un scope se considera. Por defecto
    /// se almacenan pero no se consultan.
    pub enforce_conditions: bool,
}

impl EngineSettings {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let enforce_conditions = env::var("SCOPEFLOW_ENFORCE_CONDITIONS").ok()
                                                                         .map(|v| parse_flag(&v))
                                                                         .unwrap_or(false);
        Self { enforce_conditions }
    }
}

pub(crate) fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
