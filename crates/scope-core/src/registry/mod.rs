//! Registro de grupos de scopes y aplicación contra un target.
//!
//! Dos fases:
//! - Registro (`register`, `register_json`): construye y fusiona la tabla
//!   ordenada de cada grupo. Requiere `&mut self`; se espera que ocurra
//!   durante el setup, antes de servir peticiones.
//! - Aplicación (`apply_scopes`, `apply_scopes_with`): sólo lectura. Recorre
//!   los scopes del grupo en orden de primer registro y encadena el target a
//!   través de cada scope que dispara.
//!
//! El registro es atómico por llamada: si algún scope rompe un invariante
//! ninguna entrada se modifica.

mod json;

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use crate::errors::ScopeError;
use crate::model::{ScopeConfig, ScopeContext, ScopeOptions, ScopeType};
use crate::pipeline::{coerce, invoke, resolve, should_fire, Resolution};
use crate::settings::EngineSettings;
use crate::target::ScopeTarget;

/// Tabla ordenada nombre de scope -> configuración.
pub type GroupTable<C> = IndexMap<String, ScopeConfig<C>>;

pub struct ScopeRegistry<C = ()> {
    groups: IndexMap<String, GroupTable<C>>,
    settings: EngineSettings,
}

impl<C> ScopeRegistry<C> {
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        Self { groups: IndexMap::new(),
               settings }
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Registra (o re-registra) `scopes` dentro de `group` con `options`.
    ///
    /// - `using` sin `type` fuerza `type = hash`.
    /// - Un scope nuevo arranca como `{as: nombre, type: default}`.
    /// - Las opciones presentes sobrescriben; las ausentes se conservan.
    /// - `using` junto a un tipo distinto de `hash` (declarado ahora o ya
    ///   presente en la entrada) falla con `ConflictingType`.
    pub fn register<I, S>(&mut self, group: impl Into<String>, scopes: I, options: ScopeOptions<C>) -> Result<(), ScopeError>
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let group = group.into();
        let mut options = options;
        if options.using.is_some() && options.kind.is_none() {
            options.kind = Some(ScopeType::Hash);
        }

        let existing = self.groups.get(&group);
        let mut staged: Vec<(String, ScopeConfig<C>)> = Vec::new();
        for scope in scopes {
            let scope = scope.into();
            let mut config = existing.and_then(|t| t.get(&scope))
                                     .cloned()
                                     .unwrap_or_else(|| ScopeConfig::seed(&scope));
            config.merge(&options);
            if config.using.is_some() && config.kind != ScopeType::Hash {
                return Err(ScopeError::ConflictingType { scope,
                                                         declared: config.kind });
            }
            staged.push((scope, config));
        }

        let table = self.groups.entry(group.clone()).or_default();
        for (scope, config) in staged {
            debug!("register:scope group={group} scope={scope} alias={} type={}", config.alias, config.kind);
            table.insert(scope, config);
        }
        Ok(())
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Nombres de grupo en orden de registro.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn group(&self, group: &str) -> Option<&GroupTable<C>> {
        self.groups.get(group)
    }

    /// Nombres de scope de un grupo (vacío si el grupo no existe).
    pub fn scopes(&self, group: &str) -> Vec<&str> {
        self.groups
            .get(group)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn config(&self, group: &str, scope: &str) -> Option<&ScopeConfig<C>> {
        self.groups.get(group).and_then(|t| t.get(scope))
    }
}

impl<C: ScopeContext> ScopeRegistry<C> {
    /// Aplica el grupo `group` sobre `target` usando `params`.
    ///
    /// Un grupo sin configuración devuelve el target intacto. El primer
    /// `TypeMismatch` aborta la aplicación: los scopes posteriores no se
    /// intentan.
    pub fn apply_scopes_with<T>(&self, group: &str, target: T, params: &Map<String, Value>, ctx: &C) -> Result<T, ScopeError>
        where T: ScopeTarget
    {
        let Some(table) = self.groups.get(group) else {
            debug!("apply_scopes:skip group={group} (not registered)");
            return Ok(target);
        };
        debug!("apply_scopes:start group={group} scopes={}", table.len());

        let mut target = target;
        let mut fired = 0usize;
        for (scope, config) in table {
            if self.settings.enforce_conditions && !conditions_allow(config, ctx) {
                debug!("apply_scopes:skip group={group} scope={scope} reason=condition");
                continue;
            }
            let Resolution { value, should_apply } = resolve(config, params, ctx);
            let value = coerce(config.kind, &config.alias, value)?;
            if !should_fire(should_apply, value.as_ref(), config.allow_blank) {
                debug!("apply_scopes:skip group={group} scope={scope} applicable={should_apply}");
                continue;
            }
            debug!("apply_scopes:fire group={group} scope={scope}");
            target = invoke(scope, target, value, config)?;
            fired += 1;
        }
        debug!("apply_scopes:done group={group} fired={fired}");
        Ok(target)
    }
}

impl ScopeRegistry<()> {
    /// `apply_scopes_with` con contexto vacío.
    pub fn apply_scopes<T>(&self, group: &str, target: T, params: &Map<String, Value>) -> Result<T, ScopeError>
        where T: ScopeTarget
    {
        self.apply_scopes_with(group, target, params, &())
    }
}

fn conditions_allow<C: ScopeContext>(config: &ScopeConfig<C>, ctx: &C) -> bool {
    let when_ok = config.when.as_ref().map_or(true, |c| c.evaluate(ctx, true));
    let unless_ok = config.unless.as_ref().map_or(true, |c| c.evaluate(ctx, false));
    when_ok && unless_ok
}

impl<C> Default for ScopeRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for ScopeRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeRegistry")
         .field("groups", &self.groups)
         .field("settings", &self.settings)
         .finish()
    }
}
