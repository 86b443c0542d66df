//! Case-insensitive ordering used for outlet listings.
//!
//! Keys are folded with the Unicode default lowercase mapping
//! (`str::to_lowercase`: full mapping, no locale tailoring) and the folded
//! strings are compared by Unicode scalar value. `"Roma"` and `"roma"` tie;
//! `"Ávila"` sorts after every ASCII letter.

use std::cmp::Ordering;

/// Folds a sort key to its case-insensitive form.
pub fn fold_key(value: &str) -> String {
    value.to_lowercase()
}

/// Compares two strings after folding both.
pub fn cmp_folded(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        let a = a.bytes().map(|c| c.to_ascii_lowercase());
        let b = b.bytes().map(|c| c.to_ascii_lowercase());
        return a.cmp(b);
    }
    fold_key(a).cmp(&fold_key(b))
}
