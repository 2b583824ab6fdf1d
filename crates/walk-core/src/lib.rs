//! walk-core — Cœur de l’évaluateur `walk`
//!
//! Calcule le N-ième terme de la suite binaire-récursive :
//! `term(0) = 1`, `term(1) = 1`, `term(k) = term(k-1) + term(k-2)`.
//!
//! ## Modules
//! - `types`  : alias natifs (`Term`, `Index`, `Char`, `Slot`).
//! - `error`  : erreurs `EvalError` / `ConfigError` (thiserror).
//! - `config` : `EvalConfig` (défauts + ENV `WALK_*` + overrides CLI).
//! - `eval`   : `evaluate`, stratégies (itérative, mémoïsée, récursive), `Evaluator`.
//! - `terms`  : itérateur `Terms` sur la suite, arrêté au premier débordement.
//! - `slot`   : écriture du résultat dans un emplacement possédé par l’appelant.
//! - `demo`   : reproduction du programme de démonstration (slot ≠ code de sortie).
//!
//! ## Features
//! - **tracing** *(par défaut)* : instrumentation via `tracing`.
//! - **serde** : (dé)sérialisation de `EvalConfig` / `Strategy`.
//!
//! ```
//! use walk_core::{evaluate, EvalError};
//!
//! assert_eq!(evaluate(5), Ok(8));
//! assert_eq!(evaluate(-1), Err(EvalError::Domain { index: -1 }));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

// ---------- Intégration tracing (optionnelle) ----------
// Doit précéder les `mod` : portée textuelle des macro_rules.
macro_rules! walk_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "walk-core", $($arg)+);
    };
}

// ---------- Modules publics ----------
pub mod config;
pub mod demo;
pub mod error;
pub mod eval;
pub mod slot;
pub mod terms;
pub mod types;

// ---------- Reexports de confort ----------
pub use config::{CliOverrides, EvalConfig};
pub use demo::{DemoOutcome, DEMO_INPUT};
pub use error::{ConfigError, ErrorKind, EvalError};
pub use eval::{evaluate, evaluate_with, EvalOutput, Evaluator, Memo, Strategy, MAX_INDEX};
pub use slot::{evaluate_into, OutputSlot};
pub use terms::{terms, Terms};
pub use types::{Char, Index, Slot, Term};

// ---------- Version ----------
/// Version du crate (lisible, via Cargo).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renvoie une bannière de version (utile pour logs/outils).
pub fn version() -> String {
    format!("walk-core {VERSION}")
}

// ---------- Prelude ----------
pub mod prelude {
    pub use crate::{
        evaluate, evaluate_into, terms, EvalConfig, EvalError, Evaluator, Index, OutputSlot,
        Strategy, Term,
    };
}
