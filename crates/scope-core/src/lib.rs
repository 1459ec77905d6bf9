//! scope-core: mapeo declarativo de parámetros de petición a scopes.
//!
//! Se registra de antemano qué claves de params activan qué operaciones
//! ("scopes") de un target, con qué tipo y con qué valor por defecto; luego
//! se aplica esa descripción contra un mapa de params en cada petición.
//!
//! ```ignore
//! let mut scopes = ScopeRegistry::new();
//! scopes.register("graduation", ["featured"], ScopeOptions::new().kind(ScopeType::Boolean))?;
//! scopes.register("graduation", ["by_degree"], ScopeOptions::new().alias("degree"))?;
//! let query = scopes.apply_scopes("graduation", table.bind(query), &params)?.into_inner();
//! ```
pub mod errors;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod settings;
pub mod target;

pub use errors::ScopeError;
pub use model::{Condition, DefaultValue, ScopeConfig, ScopeContext, ScopeOptions, ScopeType, ValueShape};
pub use registry::{GroupTable, ScopeRegistry};
pub use settings::EngineSettings;
pub use target::{Bound, ScopeArgs, ScopeTable, ScopeTarget};

/// Mapa de parámetros de petición.
pub type Params = serde_json::Map<String, serde_json::Value>;
