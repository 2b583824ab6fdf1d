//! slot.rs — Écriture du résultat dans un emplacement possédé par l’appelant.
//!
//! Équivalent sûr de `*p = walk(a)` : l’appelant prête un `&mut Term`,
//! l’évaluateur y écrit. En cas d’erreur, l’emplacement n’est pas touché.

use crate::error::EvalError;
use crate::eval::evaluate;
use crate::types::{Index, Slot, Term};

/// Évalue `term(n)` et l’écrit dans `slot`.
#[inline]
pub fn evaluate_into(n: Index, slot: Slot<'_>) -> Result<(), EvalError> {
    *slot = evaluate(n)?;
    Ok(())
}

/// Emplacement de sortie qui sait s’il a été écrit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSlot {
    value: Option<Term>,
}

impl OutputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valeur écrite, si une écriture a eu lieu.
    pub fn get(&self) -> Option<Term> {
        self.value
    }

    pub fn is_written(&self) -> bool {
        self.value.is_some()
    }

    /// Évalue `term(n)` et mémorise le résultat ; renvoie la valeur écrite.
    pub fn store(&mut self, n: Index) -> Result<Term, EvalError> {
        let term = evaluate(n)?;
        self.value = Some(term);
        Ok(term)
    }
}
