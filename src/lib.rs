//! ScopeFlow Rust Library
//!
//! Este crate actúa como la librería central de ScopeFlow:
//! - Re-exporta el motor de `scope-core` (registro y aplicación de scopes).
//! - Expone `config` con la configuración de aplicación leída del entorno.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;

pub use scope_core::*;
