//! Capacidad del target: cómo el motor invoca una operación por nombre.
//!
//! El motor nunca hace reflexión. El caller implementa `ScopeTarget` de forma
//! explícita, o registra handlers ya resueltos en un `ScopeTable` y lo enlaza
//! al valor con `bind`.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::ScopeError;

/// Forma exacta de los argumentos de una llamada de scope.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeArgs {
    /// Scopes booleanos: llamada sin argumentos.
    None,
    One(Value),
    /// Posicionales extraídos con `using`, en orden.
    Many(Vec<Value>),
}

impl ScopeArgs {
    pub fn len(&self) -> usize {
        match self {
            ScopeArgs::None => 0,
            ScopeArgs::One(_) => 1,
            ScopeArgs::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<Value> {
        match self {
            ScopeArgs::None => vec![],
            ScopeArgs::One(v) => vec![v],
            ScopeArgs::Many(v) => v,
        }
    }
}

/// Objeto sobre el que se encadenan los scopes. Cada llamada devuelve el
/// target (posiblemente nuevo) que recibe el siguiente scope.
pub trait ScopeTarget: Sized {
    fn call_scope(self, scope: &str, args: ScopeArgs) -> Result<Self, ScopeError>;
}

pub type ScopeHandler<T> = Box<dyn Fn(T, ScopeArgs) -> T + Send + Sync>;

/// Tabla nombre -> handler pre-resuelto.
pub struct ScopeTable<T> {
    handlers: IndexMap<String, ScopeHandler<T>>,
}

impl<T> ScopeTable<T> {
    pub fn new() -> Self {
        Self { handlers: IndexMap::new() }
    }

    pub fn with_scope(mut self, name: impl Into<String>, handler: impl Fn(T, ScopeArgs) -> T + Send + Sync + 'static) -> Self {
        self.insert(name, handler);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, handler: impl Fn(T, ScopeArgs) -> T + Send + Sync + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Invoca el handler `scope`; `UndefinedScope` si no existe.
    pub fn invoke(&self, target: T, scope: &str, args: ScopeArgs) -> Result<T, ScopeError> {
        let handler = self.handlers
                          .get(scope)
                          .ok_or_else(|| ScopeError::UndefinedScope(scope.to_string()))?;
        Ok(handler(target, args))
    }

    /// Enlaza un valor a la tabla para usarlo como `ScopeTarget`.
    pub fn bind(&self, target: T) -> Bound<'_, T> {
        Bound { table: self, target }
    }
}

impl<T> Default for ScopeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ScopeTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeTable")
         .field("scopes", &self.handlers.keys().collect::<Vec<_>>())
         .finish()
    }
}

/// Valor enlazado a un `ScopeTable`.
#[derive(Debug)]
pub struct Bound<'a, T> {
    table: &'a ScopeTable<T>,
    target: T,
}

impl<T> Bound<'_, T> {
    pub fn get(&self) -> &T {
        &self.target
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T> ScopeTarget for Bound<'_, T> {
    fn call_scope(self, scope: &str, args: ScopeArgs) -> Result<Self, ScopeError> {
        let table = self.table;
        let target = table.invoke(self.target, scope, args)?;
        Ok(Bound { table, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> ScopeTable<Vec<String>> {
        ScopeTable::new().with_scope("featured", |mut log: Vec<String>, args| {
                              log.push(format!("featured/{}", args.len()));
                              log
                          })
    }

    #[test]
    fn bound_target_threads_handler_result() {
        let t = table();
        let out = t.bind(vec![]).call_scope("featured", ScopeArgs::None).unwrap();
        let out = out.call_scope("featured", ScopeArgs::One(json!(1))).unwrap();
        assert_eq!(out.into_inner(), vec!["featured/0".to_string(), "featured/1".to_string()]);
    }

    #[test]
    fn missing_handler_is_undefined_scope() {
        let t = table();
        let err = t.bind(vec![]).call_scope("by_degree", ScopeArgs::None).unwrap_err();
        assert_eq!(err, ScopeError::UndefinedScope("by_degree".into()));
    }
}
