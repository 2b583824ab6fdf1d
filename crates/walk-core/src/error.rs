//! error.rs — Erreurs de l’évaluateur et de la configuration.

use thiserror::Error;

use crate::types::Index;

/// Catégorie “plate” d’une erreur d’évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Entrée hors domaine (indice négatif).
    InvalidArgument,
    /// Le terme ne tient pas dans `Term`.
    ArithmeticOverflow,
    /// Budget de calcul épuisé : appels récursifs ou plafond d’indice configuré.
    ResourceExhaustion,
}

/// Échec d’une évaluation. Toujours terminal, jamais de valeur partielle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("indice négatif {index} : la suite n’est définie que pour n >= 0")]
    Domain { index: Index },

    #[error("débordement arithmétique : term({index}) dépasse i64::MAX")]
    Overflow { index: Index },

    #[error("indice {index} au-delà de la limite configurée ({limit})")]
    IndexLimit { index: Index, limit: u32 },

    #[error("budget d’appels épuisé ({limit})")]
    BudgetExhausted { limit: u64 },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain { .. } => ErrorKind::InvalidArgument,
            Self::Overflow { .. } => ErrorKind::ArithmeticOverflow,
            Self::IndexLimit { .. } | Self::BudgetExhausted { .. } => ErrorKind::ResourceExhaustion,
        }
    }
}

/// Erreurs de configuration (ENV, fichier, overrides).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("valeur invalide pour {key} : {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("configuration incohérente : {0}")]
    Invalid(&'static str),
}
