//! demo.rs — Programme de démonstration.
//!
//! Le `main` de démonstration :
//!   a = 5 ; p = &a ; *p = walk(a) ; return a
//! Le résultat (8) est écrit dans l’emplacement, mais le code de sortie
//! rapporté est l’entrée (5), pas le terme.

use crate::error::EvalError;
use crate::slot::evaluate_into;
use crate::types::{Index, Term};

/// Entrée codée en dur dans la démonstration.
pub const DEMO_INPUT: Index = 5;

/// Ce que l’appelant de la démonstration observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOutcome {
    pub input: Index,
    /// Contenu de l’emplacement après l’appel : `term(input)`.
    pub slot: Term,
    /// Statut de processus : l’entrée, réduite à un octet comme le voit le shell.
    pub exit_code: u8,
}

/// Exécute la démonstration pour `input`.
pub fn run(input: Index) -> Result<DemoOutcome, EvalError> {
    let mut slot: Term = input;
    evaluate_into(input, &mut slot)?;
    walk_event!(info, input, slot, "démo : emplacement écrit, code de sortie = entrée");
    Ok(DemoOutcome { input, slot, exit_code: (input & 0xFF) as u8 })
}

/// Démonstration avec l’entrée par défaut (`DEMO_INPUT`).
pub fn run_default() -> Result<DemoOutcome, EvalError> {
    run(DEMO_INPUT)
}
