pub mod config;
pub mod phrasebook;
pub mod request;
