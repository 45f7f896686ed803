//! Fixed word tables driving the rewrite stages.
//!
//! Order inside each table is significant: entries are applied top to
//! bottom, and an earlier entry can consume text a later one would match.

/// Contractions expanded before any pronoun or verb rule runs.
/// Replacements are written exactly as they should appear.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "I am"),
    ("i've", "I have"),
    ("you've", "you have"),
    ("you'll", "you will"),
    ("don't", "do not"),
    ("can't", "cannot"),
];

/// Prepositions whose following "you" is an object ("thee").
pub const PREPOSITIONS: &[&str] = &[
    "to", "for", "with", "at", "by", "from", "about", "as", "into", "like", "through", "after",
    "over", "between", "out", "against", "during", "without", "before", "under", "around",
    "among",
];

/// Possessive and reflexive forms, applied after the elision rule.
pub const POSSESSIVES: &[(&str, &str)] = &[
    ("your", "thy"),
    ("yours", "thine"),
    ("yourself", "thyself"),
];

/// Second-person verb pairs. The pronoun in each phrase is "you" and is
/// always rendered "thou".
pub const VERB_IDIOMS: &[(&str, &str)] = &[
    ("you are", "thou art"),
    ("are you", "art thou"),
    ("you were", "thou wast"),
    ("were you", "wast thou"),
    ("do you", "dost thou"),
    ("you do", "thou dost"),
    ("did you", "didst thou"),
    ("have you", "hast thou"),
    ("you have", "thou hast"),
    ("will you", "wilt thou"),
    ("shall you", "shalt thou"),
    ("can you", "canst thou"),
    ("should you", "shouldst thou"),
    ("would you", "wouldst thou"),
    ("could you", "couldst thou"),
    ("may you", "mayst thou"),
    ("must you", "must thou"),
];

/// Third-person verb forms. "doeth" folds a doubled suffix back to "doth".
pub const ARCHAIC_VERBS: &[(&str, &str)] = &[
    ("does", "doth"),
    ("doeth", "doth"),
    ("has", "hath"),
];

pub const FLAVOR_WORDS: &[(&str, &str)] = &[
    ("very", "right"),
    ("really", "verily"),
    ("hello", "hail"),
    ("hi", "hail"),
    ("goodbye", "fare thee well"),
    ("friend", "good sir"),
];

/// Subjects that trigger the "-eth" heuristic.
pub const THIRD_PERSON_SUBJECTS: &[&str] = &["he", "she", "it"];

/// Verbs left alone by the "-eth" heuristic.
pub const AUXILIARIES: &[&str] = &[
    "is", "are", "am", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "shall", "can", "may", "must", "should", "would", "could",
];

/// Interjections prepended in bardic style.
pub const OPENERS: &[&str] = &["Prithee,", "Forsooth,", "Verily,", "Hark,", "Lo,"];
