//! Arabic (base-10) numeral decoding, including full-width digit forms.

use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize `s` (folding full-width digits down to ASCII) and parse it
/// as a base-10 integer.
pub fn decode(s: &str) -> Option<i64> {
    let normalized: String = s.nfkc().collect();
    normalized.parse::<i64>().ok()
}
