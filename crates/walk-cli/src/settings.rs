//! settings.rs — Fichier de configuration `walk.toml`.
//!
//! ```toml
//! [eval]
//! strategy = "memoized"
//! max_index = 60
//! max_calls = 1000000
//! trace = false
//! ```
//!
//! Ordre d’application : défauts < fichier < ENV `WALK_*` < flags CLI.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use walk_core::{CliOverrides, EvalConfig, MAX_INDEX};

/// Nom du fichier cherché dans le dossier courant quand `--config` est absent.
pub const DEFAULT_FILE: &str = "walk.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub eval: EvalConfig,
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).wrap_err("TOML invalide")
    }

    /// Lit le fichier demandé (doit exister) ou, à défaut, `walk.toml` s’il existe.
    pub fn load(explicit: Option<&Utf8Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let fallback = Utf8PathBuf::from(DEFAULT_FILE);
                if fallback.exists() {
                    Self::read(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Utf8Path) -> Result<Self> {
        let s = fs::read_to_string(path).wrap_err_with(|| format!("lecture {path}"))?;
        let settings = Self::from_toml(&s).wrap_err_with(|| format!("config {path}"))?;
        tracing::debug!(%path, eval = ?settings.eval, "configuration chargée");
        Ok(settings)
    }
}

/// Empile les couches et valide le résultat.
pub fn resolve(
    file: EvalConfig,
    env: impl Fn(&str) -> Option<String>,
    overrides: &CliOverrides,
) -> Result<EvalConfig> {
    let mut cfg = file;
    // même plafond que les couches ENV et CLI
    cfg.max_index = cfg.max_index.min(MAX_INDEX);
    cfg.apply_vars(env);
    cfg.apply_cli_overrides(overrides);
    cfg.validate()?;
    Ok(cfg)
}
