//! terms.rs — Itérateur sur la suite : term(0), term(1), …
//!
//! S’arrête (renvoie `None`) au premier terme qui ne tient plus dans `Term`,
//! soit après `MAX_INDEX + 1` éléments.

use std::iter::FusedIterator;

use crate::eval::MAX_INDEX;
use crate::types::Term;

/// Itérateur fusionné sur les termes de la suite.
#[derive(Debug, Clone)]
pub struct Terms {
    prev: Term,
    cur: Term,
    index: u32,
    done: bool,
}

/// Itère depuis `term(0)`.
pub fn terms() -> Terms {
    Terms { prev: 1, cur: 1, index: 0, done: false }
}

impl Terms {
    /// Indice du prochain terme produit.
    pub fn next_index(&self) -> u32 {
        self.index
    }
}

impl Iterator for Terms {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        if self.done {
            return None;
        }
        // term(0) et term(1) valent tous deux 1 : `prev` reste à 1 au premier pas.
        let out = if self.index == 0 { self.prev } else { self.cur };
        if self.index >= 1 {
            match self.prev.checked_add(self.cur) {
                Some(next) => {
                    self.prev = self.cur;
                    self.cur = next;
                }
                None => self.done = true,
            }
        }
        self.index += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = (MAX_INDEX + 1).saturating_sub(self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Terms {}
impl FusedIterator for Terms {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use crate::types::Index;

    #[test]
    fn first_terms() {
        let v: Vec<Term> = terms().take(11).collect();
        assert_eq!(v, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn agrees_with_evaluate_and_stops_at_overflow() {
        let all: Vec<Term> = terms().collect();
        assert_eq!(all.len(), MAX_INDEX as usize + 1);
        for (n, t) in all.iter().enumerate() {
            assert_eq!(evaluate(n as Index), Ok(*t));
        }
    }

    #[test]
    fn fused_and_sized() {
        let mut it = terms();
        assert_eq!(it.len(), 92);
        it.by_ref().take(90).for_each(drop);
        assert_eq!(it.next_index(), 90);
        assert_eq!(it.len(), 2);
        assert!(it.next().is_some());
        assert!(it.next().is_some());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.len(), 0);
    }
}
