//! Modelo de configuración: tipos, opciones de registro y config efectiva.
mod config;
mod options;
mod scope_type;

pub use config::ScopeConfig;
pub use options::{Condition, DefaultValue, Predicate, ScopeContext, ScopeOptions, Supplier};
pub use scope_type::{ScopeType, ValueShape};
