// src/listings/collation.rs
//! Italian-style "base sensitivity" string ordering: accents and case do not
//! affect the order ("Città" sorts with "citta").

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collation key: NFD, combining marks dropped, lower-cased.
pub fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn compare_base(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b))
}
