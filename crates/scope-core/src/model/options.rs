//! Opciones de registro parcialmente especificadas.
//!
//! `ScopeOptions` es el "bag" de opciones de un `register`: cada campo es
//! opcional y sólo los campos presentes se fusionan sobre la configuración
//! previa del scope (ver `ScopeConfig::merge`).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::ScopeType;

/// Contexto de la llamada que recibe un default diferido o una condición.
///
/// Las condiciones con nombre se resuelven aquí en lugar de evaluar código.
pub trait ScopeContext {
    /// `None` si el nombre no es conocido por el contexto.
    fn named_condition(&self, _name: &str) -> Option<bool> {
        None
    }
}

impl ScopeContext for () {}

pub type Supplier<C> = Arc<dyn Fn(&C) -> Value + Send + Sync>;
pub type Predicate<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// Valor por defecto: literal o supplier invocado perezosamente al aplicar.
pub enum DefaultValue<C = ()> {
    Literal(Value),
    Deferred(Supplier<C>),
}

impl<C> DefaultValue<C> {
    /// Nunca se llama durante el registro.
    pub fn produce(&self, ctx: &C) -> Value {
        match self {
            DefaultValue::Literal(v) => v.clone(),
            DefaultValue::Deferred(f) => f(ctx),
        }
    }
}

impl<C> Clone for DefaultValue<C> {
    fn clone(&self) -> Self {
        match self {
            DefaultValue::Literal(v) => DefaultValue::Literal(v.clone()),
            DefaultValue::Deferred(f) => DefaultValue::Deferred(Arc::clone(f)),
        }
    }
}

impl<C> fmt::Debug for DefaultValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            DefaultValue::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Condición `if`/`unless` de un scope.
pub enum Condition<C = ()> {
    Predicate(Predicate<C>),
    /// Referencia resuelta vía `ScopeContext::named_condition`.
    Named(String),
    Literal(bool),
}

impl<C: ScopeContext> Condition<C> {
    /// `true` si la condición produce `expected`. Un nombre que el contexto no
    /// conoce se considera aplicable.
    pub fn evaluate(&self, ctx: &C, expected: bool) -> bool {
        match self {
            Condition::Predicate(p) => p(ctx) == expected,
            Condition::Named(name) => ctx.named_condition(name).map_or(true, |v| v == expected),
            Condition::Literal(b) => *b == expected,
        }
    }
}

impl<C> Clone for Condition<C> {
    fn clone(&self) -> Self {
        match self {
            Condition::Predicate(p) => Condition::Predicate(Arc::clone(p)),
            Condition::Named(n) => Condition::Named(n.clone()),
            Condition::Literal(b) => Condition::Literal(*b),
        }
    }
}

impl<C> fmt::Debug for Condition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
            Condition::Named(n) => f.debug_tuple("Named").field(n).finish(),
            Condition::Literal(b) => f.debug_tuple("Literal").field(b).finish(),
        }
    }
}

pub struct ScopeOptions<C = ()> {
    pub kind: Option<ScopeType>,
    pub alias: Option<String>,
    pub using: Option<Vec<String>>,
    pub when: Option<Condition<C>>,
    pub unless: Option<Condition<C>>,
    pub default: Option<DefaultValue<C>>,
    pub allow_blank: Option<bool>,
}

impl<C> ScopeOptions<C> {
    pub fn new() -> Self {
        Self { kind: None,
               alias: None,
               using: None,
               when: None,
               unless: None,
               default: None,
               allow_blank: None }
    }

    pub fn kind(mut self, kind: ScopeType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Clave de params a consultar (por defecto el nombre del scope).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Claves de desestructuración; fuerza `type = hash` al registrar.
    pub fn using<I, S>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.using = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn when(mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.when = Some(Condition::Predicate(Arc::new(predicate)));
        self
    }

    pub fn unless(mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.unless = Some(Condition::Predicate(Arc::new(predicate)));
        self
    }

    pub fn when_named(mut self, name: impl Into<String>) -> Self {
        self.when = Some(Condition::Named(name.into()));
        self
    }

    pub fn unless_named(mut self, name: impl Into<String>) -> Self {
        self.unless = Some(Condition::Named(name.into()));
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Literal(value.into()));
        self
    }

    /// Default diferido: el supplier se invoca en cada aplicación que lo necesite.
    pub fn default_with(mut self, supplier: impl Fn(&C) -> Value + Send + Sync + 'static) -> Self {
        self.default = Some(DefaultValue::Deferred(Arc::new(supplier)));
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = Some(allow);
        self
    }
}

impl<C> Default for ScopeOptions<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ScopeOptions<C> {
    fn clone(&self) -> Self {
        Self { kind: self.kind,
               alias: self.alias.clone(),
               using: self.using.clone(),
               when: self.when.clone(),
               unless: self.unless.clone(),
               default: self.default.clone(),
               allow_blank: self.allow_blank }
    }
}

impl<C> fmt::Debug for ScopeOptions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeOptions")
         .field("kind", &self.kind)
         .field("alias", &self.alias)
         .field("using", &self.using)
         .field("when", &self.when)
         .field("unless", &self.unless)
         .field("default", &self.default)
         .field("allow_blank", &self.allow_blank)
         .finish()
    }
}
