//! Rewrite rules: a word-boundary pattern plus a replacement policy.

use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use std::fmt;

use crate::core::case::preserve_case;

/// Function computing a replacement from the captures of one match.
pub type ComputeFn = Box<dyn Fn(&Captures<'_>) -> String + Send + Sync>;

/// How a matched substring is replaced.
pub enum Replacement {
    /// Inserted exactly as written, whatever the casing of the match.
    Literal(&'static str),
    /// A lowercase literal rendered in the casing of the whole match.
    Cased(&'static str),
    /// A replacement computed from the match.
    Computed(ComputeFn),
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Cased(s) => f.debug_tuple("Cased").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A single substitution applied globally over the text.
#[derive(Debug)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: Replacement,
}

impl RewriteRule {
    /// Match `word` as a whole word, case-insensitively.
    ///
    /// `word` is escaped, so phrases with apostrophes or spaces are
    /// matched literally ("don't", "you are").
    pub(crate) fn word(word: &str, replacement: Replacement) -> Self {
        Self::pattern(&format!(r"(?i)\b{}\b", regex::escape(word)), replacement)
    }

    /// Build a rule from a raw regex source.
    ///
    /// Rule sources are compiled from fixed tables when the pipeline is
    /// first built; an invalid source is a programming error, caught by
    /// the pipeline's own tests.
    pub(crate) fn pattern(source: &str, replacement: Replacement) -> Self {
        let pattern = Regex::new(source)
            .unwrap_or_else(|e| panic!("invalid rewrite pattern {source:?}: {e}"));
        Self {
            pattern,
            replacement,
        }
    }

    /// Shorthand for a computed rule.
    pub(crate) fn computed<F>(source: &str, f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> String + Send + Sync + 'static,
    {
        Self::pattern(source, Replacement::Computed(Box::new(f)))
    }

    pub fn source(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replace every non-overlapping match, leftmost first.
    ///
    /// Returns the input borrowed when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.replacement {
            Replacement::Literal(literal) => {
                self.pattern.replace_all(text, NoExpand(*literal))
            }
            Replacement::Cased(canonical) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| preserve_case(&caps[0], canonical)),
            Replacement::Computed(f) => self.pattern.replace_all(text, |caps: &Captures<'_>| f(caps)),
        }
    }
}
