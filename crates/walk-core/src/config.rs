//! config.rs — Configuration de l’évaluateur.
//!
//! - Defaults sûrs (`EvalConfig::default()`)
//! - Lecture **ENV** (préfixe `WALK_...`) via `EvalConfig::from_env()`
//! - **Overrides CLI** via `CliOverrides` (appliqués avec `apply_cli_overrides`)
//! - `validate()` pour les incohérences
//!
//! ENV supportés (tous facultatifs) :
//!   WALK_STRATEGY=iterative|memoized|recursive
//!   WALK_MAX_INDEX=<u32>   (borné à `MAX_INDEX`)
//!   WALK_MAX_CALLS=<u64>
//!   WALK_TRACE=0|1
//!
//! Une valeur ENV illisible est ignorée : le défaut reste en place.
//! NB: pas de parsing TOML ici. La CLI lit `walk.toml` via la feature `serde`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::{Strategy, MAX_INDEX};

/// Budget d’appels par défaut pour la stratégie récursive.
/// `term(33)` en récursion naïve coûte ~11,4 M appels, `term(36)` ~48,3 M.
pub const DEFAULT_MAX_CALLS: u64 = 50_000_000;

/// Configuration complète d’un `Evaluator`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EvalConfig {
    /// Algorithme interne (résultat identique quel que soit le choix).
    pub strategy: Strategy,
    /// Plus grand indice accepté. Jamais au-delà de `MAX_INDEX`.
    pub max_index: u32,
    /// Nombre maximal d’appels de la stratégie récursive.
    pub max_calls: u64,
    /// Émet un événement `trace` par pas de calcul.
    pub trace: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Iterative,
            max_index: MAX_INDEX,
            max_calls: DEFAULT_MAX_CALLS,
            trace: false,
        }
    }
}

/* ─────────────────────── Overrides (CLI / couches) ─────────────────────── */

/// Overrides typiques fournis par une CLI en amont.
#[derive(Default, Clone, Debug)]
pub struct CliOverrides {
    pub strategy: Option<Strategy>,
    pub max_index: Option<u32>,
    pub max_calls: Option<u64>,
    pub trace: Option<bool>,
}

impl EvalConfig {
    /// Construit depuis les valeurs par défaut + ENV.
    pub fn from_env() -> Self {
        let mut c = Self::default();
        c.apply_env();
        c
    }

    /// Applique les variables d’environnement `WALK_*`.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Même chose que `apply_env`, avec une source de variables injectable (tests).
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("WALK_STRATEGY")  { if let Ok(s) = v.parse::<Strategy>()  { self.strategy = s; } }
        if let Some(v) = lookup("WALK_MAX_INDEX") { if let Some(n) = parse_u32(&v)        { self.max_index = n.min(MAX_INDEX); } }
        if let Some(v) = lookup("WALK_MAX_CALLS") { if let Some(n) = parse_u64(&v)        { self.max_calls = n; } }
        if let Some(v) = lookup("WALK_TRACE")     { if let Some(b) = parse_bool(&v)       { self.trace = b; } }
    }

    /// Applique des overrides “dernier mot” typiquement issus d’une CLI.
    pub fn apply_cli_overrides(&mut self, o: &CliOverrides) {
        if let Some(x) = o.strategy  { self.strategy = x; }
        if let Some(x) = o.max_index { self.max_index = x.min(MAX_INDEX); }
        if let Some(x) = o.max_calls { self.max_calls = x; }
        if let Some(x) = o.trace     { self.trace = x; }
    }

    /// Validation de base.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_calls == 0 {
            return Err(ConfigError::Invalid("max_calls doit être > 0"));
        }
        if self.max_index > MAX_INDEX {
            return Err(ConfigError::Invalid("max_index au-delà de MAX_INDEX (91)"));
        }
        Ok(())
    }
}

/* ────────────────────────── Parsing d’ENV ────────────────────────── */

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}
fn parse_u64(s: &str) -> Option<u64> {
    s.trim().replace('_', "").parse::<u64>().ok()
}

/* ───────────────────────────── Tests ───────────────────────────── */

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_are_sane() {
        let c = EvalConfig::default();
        assert_eq!(c.strategy, Strategy::Iterative);
        assert_eq!(c.max_index, MAX_INDEX);
        assert!(c.max_calls > 1_000_000);
        assert!(!c.trace);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn env_layer() {
        let mut c = EvalConfig::default();
        c.apply_vars(vars(&[
            ("WALK_STRATEGY", "Memoized"),
            ("WALK_MAX_INDEX", "40"),
            ("WALK_MAX_CALLS", "1_000"),
            ("WALK_TRACE", "yes"),
        ]));
        assert_eq!(c.strategy, Strategy::Memoized);
        assert_eq!(c.max_index, 40);
        assert_eq!(c.max_calls, 1_000);
        assert!(c.trace);
    }

    #[test]
    fn env_garbage_keeps_defaults() {
        let mut c = EvalConfig::default();
        c.apply_vars(vars(&[
            ("WALK_STRATEGY", "quantum"),
            ("WALK_MAX_INDEX", "-4"),
            ("WALK_TRACE", "peut-être"),
        ]));
        assert_eq!(c, EvalConfig::default());
    }

    #[test]
    fn max_index_is_clamped() {
        let mut c = EvalConfig::default();
        c.apply_vars(vars(&[("WALK_MAX_INDEX", "500")]));
        assert_eq!(c.max_index, MAX_INDEX);

        let o = CliOverrides { max_index: Some(1_000), ..Default::default() };
        c.apply_cli_overrides(&o);
        assert_eq!(c.max_index, MAX_INDEX);
    }

    #[test]
    fn cli_overrides_last_word() {
        let mut c = EvalConfig::default();
        c.apply_vars(vars(&[("WALK_STRATEGY", "recursive")]));
        let o = CliOverrides {
            strategy: Some(Strategy::Memoized),
            max_calls: Some(42),
            ..Default::default()
        };
        c.apply_cli_overrides(&o);
        assert_eq!(c.strategy, Strategy::Memoized);
        assert_eq!(c.max_calls, 42);
    }

    #[test]
    fn validate_budget() {
        let c = EvalConfig { max_calls: 0, ..Default::default() };
        assert_eq!(c.validate(), Err(ConfigError::Invalid("max_calls doit être > 0")));
    }
}
