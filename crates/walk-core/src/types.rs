//! types.rs — Alias de types natifs.
//!
//! Équivalents natifs des alias et attributs de portabilité C/C++ :
//! - `char_t`      → [`Char`]
//! - `pointer_t<T>` → [`Slot`] (emprunt exclusif, pas de pointeur brut)
//! - `NODISCARD` / `ALWAYS_INLINE` → `#[must_use]` / `#[inline]` aux points d’usage.

/// Valeur d’un terme de la suite.
pub type Term = i64;

/// Indice demandé par l’appelant. Signé pour pouvoir rejeter les négatifs.
pub type Index = i64;

/// Caractère “octet”, équivalent du `char` C.
pub type Char = u8;

/// Emplacement de sortie possédé par l’appelant.
pub type Slot<'a, T = Term> = &'a mut T;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_alias_is_a_plain_borrow() {
        let mut x: Term = 5;
        let s: Slot<'_> = &mut x;
        *s = 8;
        assert_eq!(x, 8);

        let mut c: Char = b'a';
        let s: Slot<'_, Char> = &mut c;
        *s = b'z';
        assert_eq!(c, b'z');
    }
}
