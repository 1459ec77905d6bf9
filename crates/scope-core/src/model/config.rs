//! Configuración efectiva de un scope dentro de un grupo.
use std::fmt;

use super::{Condition, DefaultValue, ScopeOptions, ScopeType};

pub struct ScopeConfig<C = ()> {
    /// Clave de params consultada.
    pub alias: String,
    pub kind: ScopeType,
    /// Sólo presente cuando `kind == Hash`.
    pub using: Option<Vec<String>>,
    pub when: Option<Condition<C>>,
    pub unless: Option<Condition<C>>,
    pub default: Option<DefaultValue<C>>,
    pub allow_blank: bool,
}

impl<C> ScopeConfig<C> {
    /// Semilla de un scope recién registrado: `{as: scope, type: default}`.
    pub fn seed(scope: &str) -> Self {
        Self { alias: scope.to_string(),
               kind: ScopeType::Default,
               using: None,
               when: None,
               unless: None,
               default: None,
               allow_blank: false }
    }

    /// Merge campo a campo: lo presente en `options` gana, el resto se conserva.
    pub fn merge(&mut self, options: &ScopeOptions<C>) {
        if let Some(kind) = options.kind {
            self.kind = kind;
        }
        if let Some(alias) = &options.alias {
            self.alias = alias.clone();
        }
        if let Some(using) = &options.using {
            self.using = Some(using.clone());
        }
        if let Some(when) = &options.when {
            self.when = Some(when.clone());
        }
        if let Some(unless) = &options.unless {
            self.unless = Some(unless.clone());
        }
        if let Some(default) = &options.default {
            self.default = Some(default.clone());
        }
        if let Some(allow) = options.allow_blank {
            self.allow_blank = allow;
        }
    }
}

impl<C> Clone for ScopeConfig<C> {
    fn clone(&self) -> Self {
        Self { alias: self.alias.clone(),
               kind: self.kind,
               using: self.using.clone(),
               when: self.when.clone(),
               unless: self.unless.clone(),
               default: self.default.clone(),
               allow_blank: self.allow_blank }
    }
}

impl<C> fmt::Debug for ScopeConfig<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeConfig")
         .field("alias", &self.alias)
         .field("kind", &self.kind)
         .field("using", &self.using)
         .field("when", &self.when)
         .field("unless", &self.unless)
         .field("default", &self.default)
         .field("allow_blank", &self.allow_blank)
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unspecified_fields() {
        let mut cfg: ScopeConfig = ScopeConfig::seed("by_degree");
        cfg.merge(&ScopeOptions::new().alias("degree").allow_blank(true));
        cfg.merge(&ScopeOptions::new().kind(ScopeType::Array));

        assert_eq!(cfg.alias, "degree");
        assert!(cfg.allow_blank);
        assert_eq!(cfg.kind, ScopeType::Array);
    }

    #[test]
    fn seed_uses_scope_name_as_alias() {
        let cfg: ScopeConfig = ScopeConfig::seed("featured");
        assert_eq!(cfg.alias, "featured");
        assert_eq!(cfg.kind, ScopeType::Default);
        assert!(cfg.using.is_none());
        assert!(!cfg.allow_blank);
    }
}
