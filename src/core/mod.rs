pub mod case;
pub mod decoration;
pub mod engine;
pub mod lexicon;
pub mod pipeline;
pub mod reply;
pub mod rule;
pub mod verb;
