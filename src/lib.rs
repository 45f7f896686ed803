//! Olde English — renders modern English text in an Early Modern English
//! ("thou art", "she runeth") style.
//!
//! Text passes through a fixed sequence of word-boundary rewrite stages
//! (contractions, object pronouns, possessives, verb idioms, the bare
//! pronoun, archaic verb forms, flavor words and an "-eth" heuristic),
//! then an optional bardic opener is prepended.

pub mod core;
pub mod schema;

pub use crate::core::engine::{to_olde_english, transform, OldeEngine};
pub use crate::schema::request::{Style, TransformOptions, TransformRequest};
