//! Bardic decoration — the only nondeterministic step.
//!
//! The random choice sits behind [`OpenerSource`] so callers can seed it
//! or pin it outright.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::core::lexicon::OPENERS;
use crate::schema::request::Style;

/// Chooses which opener to prepend.
pub trait OpenerSource {
    /// Return an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

impl OpenerSource for StdRng {
    fn pick(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }
}

impl OpenerSource for ThreadRng {
    fn pick(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }
}

/// Always picks the same opener (index taken modulo the opener count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedOpener(pub usize);

impl OpenerSource for FixedOpener {
    fn pick(&mut self, count: usize) -> usize {
        self.0 % count
    }
}

/// Prepend an opener when `style` is bardic; plain text passes through.
pub fn decorate(text: String, style: Style, source: &mut dyn OpenerSource) -> String {
    match style {
        Style::Plain => text,
        Style::Bardic => {
            let opener = OPENERS[source.pick(OPENERS.len()) % OPENERS.len()];
            tracing::debug!(opener, "bardic opener chosen");
            format!("{opener} {text}")
        }
    }
}
