//! walk-core/src/eval.rs
//!
//! Évaluateur de la suite `walk` :
//!   term(0) = 1, term(1) = 1, term(k) = term(k-1) + term(k-2)
//!
//! Trois stratégies, résultats identiques :
//!   - `Iterative`  : deux variables roulantes, O(n), mémoire constante (défaut)
//!   - `Memoized`   : cache indexé (`Memo`), réutilisé d’un appel à l’autre
//!   - `Recursive`  : double récursion littérale, bornée par un budget d’appels
//!
//! API:
//!   - `evaluate(n) -> Result<Term, EvalError>`
//!   - `evaluate_with(n, Strategy) -> Result<Term, EvalError>`
//!   - `Evaluator::new(EvalConfig).evaluate_with_stats(n) -> Result<EvalOutput, EvalError>`
//!
//! Erreurs : indice négatif → `Domain`, indice > `MAX_INDEX` → `Overflow`,
//! indice > `config.max_index` → `IndexLimit`, budget récursif → `BudgetExhausted`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EvalConfig;
use crate::error::{ConfigError, EvalError};
use crate::types::{Index, Term};

/// Plus grand indice dont le terme tient dans `Term` (i64).
/// term(91) = 7 540 113 804 746 346 429 ; term(92) déborde.
pub const MAX_INDEX: u32 = 91;

/* ───────────────────────────── Stratégies ───────────────────────────── */

/// Algorithme interne. Non observable dans les résultats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    #[default]
    Iterative,
    Memoized,
    Recursive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Iterative, Strategy::Memoized, Strategy::Recursive];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Memoized => "memoized",
            Strategy::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" | "iter" => Ok(Strategy::Iterative),
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "recursive" | "naive" => Ok(Strategy::Recursive),
            _ => Err(ConfigError::InvalidValue { key: "strategy", value: s.to_string() }),
        }
    }
}

/* ───────────────────────────── API libre ───────────────────────────── */

/// Calcule `term(n)` avec la stratégie itérative.
#[inline]
#[must_use = "le terme calculé est la seule sortie de l’évaluateur"]
pub fn evaluate(n: Index) -> Result<Term, EvalError> {
    let idx = check_domain(n)?;
    iterative(idx, n, false).map(|(term, _)| term)
}

/// Calcule `term(n)` avec une stratégie donnée et la configuration par défaut.
#[inline]
#[must_use = "le terme calculé est la seule sortie de l’évaluateur"]
pub fn evaluate_with(n: Index, strategy: Strategy) -> Result<Term, EvalError> {
    Evaluator::new(EvalConfig { strategy, ..EvalConfig::default() }).evaluate(n)
}

/* ───────────────────────────── Evaluator ───────────────────────────── */

/// Résultat détaillé d’une évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalOutput {
    pub index: Index,
    pub term: Term,
    pub strategy: Strategy,
    /// Additions (itératif), cases remplies (mémoïsé) ou appels (récursif).
    pub steps: u64,
}

/// Évaluateur configuré. Le cache `Memo` survit entre les appels.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
    memo: Memo,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config, memo: Memo::new() }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    #[must_use = "le terme calculé est la seule sortie de l’évaluateur"]
    pub fn evaluate(&mut self, n: Index) -> Result<Term, EvalError> {
        self.evaluate_with_stats(n).map(|out| out.term)
    }

    pub fn evaluate_with_stats(&mut self, n: Index) -> Result<EvalOutput, EvalError> {
        let idx = check_domain(n)?;
        let limit = self.config.max_index.min(MAX_INDEX);
        if idx > limit {
            return Err(EvalError::IndexLimit { index: n, limit });
        }

        let strategy = self.config.strategy;
        let trace = self.config.trace;
        let (term, steps) = match strategy {
            Strategy::Iterative => iterative(idx, n, trace)?,
            Strategy::Memoized => self.memo.fill_to(idx, n, trace)?,
            Strategy::Recursive => Recursion::new(n, self.config.max_calls).run(idx)?,
        };

        walk_event!(debug, index = n, term, %strategy, steps, "évaluation terminée");
        Ok(EvalOutput { index: n, term, strategy, steps })
    }
}

/* ───────────────────────────── Cache ───────────────────────────── */

/// Cache de termes indexé par indice, rempli de bas en haut.
#[derive(Debug, Clone)]
pub struct Memo {
    cache: Vec<Term>,
}

impl Default for Memo {
    fn default() -> Self {
        Self::new()
    }
}

impl Memo {
    pub fn new() -> Self {
        Self { cache: vec![1, 1] }
    }

    /// Nombre de termes connus.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Toujours faux : les deux cas de base sont pré-remplis.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn get(&self, n: u32) -> Option<Term> {
        self.cache.get(n as usize).copied()
    }

    pub fn clear(&mut self) {
        self.cache.truncate(2);
    }

    fn fill_to(&mut self, n: u32, requested: Index, trace: bool) -> Result<(Term, u64), EvalError> {
        let target = n as usize;
        let mut filled = 0u64;
        while self.cache.len() <= target {
            let k = self.cache.len();
            let next = self.cache[k - 1]
                .checked_add(self.cache[k - 2])
                .ok_or(EvalError::Overflow { index: requested })?;
            self.cache.push(next);
            filled += 1;
            if trace {
                walk_event!(trace, index = k, term = next, "memo");
            }
        }
        Ok((self.cache[target], filled))
    }
}

/* ───────────────────────────── Algorithmes ───────────────────────────── */

fn check_domain(n: Index) -> Result<u32, EvalError> {
    if n < 0 {
        return Err(EvalError::Domain { index: n });
    }
    match u32::try_from(n) {
        Ok(idx) if idx <= MAX_INDEX => Ok(idx),
        _ => {
            walk_event!(warn, index = n, max = MAX_INDEX, "débordement : indice trop grand pour i64");
            Err(EvalError::Overflow { index: n })
        }
    }
}

fn iterative(n: u32, requested: Index, trace: bool) -> Result<(Term, u64), EvalError> {
    let (mut prev, mut cur): (Term, Term) = (1, 1);
    let mut steps = 0u64;
    for _ in 2..=n {
        let next = prev.checked_add(cur).ok_or(EvalError::Overflow { index: requested })?;
        prev = cur;
        cur = next;
        steps += 1;
        if trace {
            // indice du terme courant : steps + 1
            walk_event!(trace, index = steps + 1, term = cur, "pas");
        }
    }
    Ok((cur, steps))
}

/// Double récursion littérale, avec compteur d’appels.
struct Recursion {
    requested: Index,
    calls: u64,
    limit: u64,
}

impl Recursion {
    fn new(requested: Index, limit: u64) -> Self {
        Self { requested, calls: 0, limit }
    }

    fn run(mut self, n: u32) -> Result<(Term, u64), EvalError> {
        let term = self.walk(n)?;
        Ok((term, self.calls))
    }

    fn walk(&mut self, n: u32) -> Result<Term, EvalError> {
        self.calls += 1;
        if self.calls > self.limit {
            walk_event!(warn, limit = self.limit, index = self.requested, "budget d’appels épuisé");
            return Err(EvalError::BudgetExhausted { limit: self.limit });
        }
        if n <= 1 {
            return Ok(1);
        }
        let a = self.walk(n - 1)?;
        let b = self.walk(n - 2)?;
        a.checked_add(b).ok_or(EvalError::Overflow { index: self.requested })
    }
}

/* ───────────────────────────── Tests ───────────────────────────── */
