//! Third-person "-eth" conjugation heuristic.
//!
//! Not a dictionary conjugator: "goes" becomes "goeth", "runs" becomes
//! "runeth", and irregular verbs come out however the suffix rules leave
//! them.
//!
//! Stripping "es"/"s" ignores case and an all-uppercase verb takes an
//! uppercase suffix, so "IT RAINS" becomes "IT RAINETH" rather than
//! "IT RAINSeth", which a case-sensitive strip would produce.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

use crate::core::lexicon::AUXILIARIES;

static AUXILIARY_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| AUXILIARIES.iter().copied().collect());

const SUFFIX: &str = "eth";

/// Whether `word` is an auxiliary verb (case-insensitive).
pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARY_SET.contains(word.to_lowercase().as_str())
}

/// Conjugate a verb following "he", "she" or "it".
///
/// Returns `None` when the verb is left as-is: auxiliaries, and words
/// already ending in "eth".
pub fn conjugate_third_person(verb: &str) -> Option<String> {
    if is_auxiliary(verb) || ends_with_ignore_case(verb, SUFFIX) {
        return None;
    }

    let base = if ends_with_ignore_case(verb, "es") {
        &verb[..verb.len() - 2]
    } else if ends_with_ignore_case(verb, "s") {
        &verb[..verb.len() - 1]
    } else {
        verb
    };

    let suffix = if verb == verb.to_uppercase() {
        SUFFIX.to_uppercase()
    } else {
        SUFFIX.to_string()
    };
    Some(format!("{base}{suffix}"))
}

/// ASCII suffix test on raw bytes; a multi-byte tail never equals an
/// ASCII suffix, so slicing off `suffix.len()` bytes afterwards stays on a
/// char boundary.
fn ends_with_ignore_case(word: &str, suffix: &str) -> bool {
    let (w, s) = (word.as_bytes(), suffix.as_bytes());
    w.len() >= s.len() && w[w.len() - s.len()..].eq_ignore_ascii_case(s)
}
