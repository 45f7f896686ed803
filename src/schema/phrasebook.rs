//! Phrasebooks — golden input/output pairs, stored as RON, used to pin
//! the engine's behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::decoration::FixedOpener;
use crate::core::engine::OldeEngine;
use crate::schema::request::{Style, TransformOptions};

#[derive(Debug, Error)]
pub enum PhrasebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// One expected transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCase {
    pub input: String,
    #[serde(default)]
    pub style: Style,
    /// Opener index used when `style` is bardic.
    #[serde(default)]
    pub opener: usize,
    pub expected: String,
}

/// A case whose actual output differed from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phrasebook {
    pub cases: Vec<PhraseCase>,
}

impl Phrasebook {
    pub fn load_from_ron(path: &Path) -> Result<Phrasebook, PhrasebookError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// The file holds a bare list of cases.
    pub fn parse_ron(input: &str) -> Result<Phrasebook, PhrasebookError> {
        let cases: Vec<PhraseCase> = ron::from_str(input)?;
        Ok(Phrasebook { cases })
    }

    /// Run every case and collect the ones that disagree.
    pub fn check(&self) -> Vec<Mismatch> {
        self.cases
            .iter()
            .enumerate()
            .filter_map(|(index, case)| {
                let mut engine = OldeEngine::builder()
                    .opener_source(FixedOpener(case.opener))
                    .build();
                let actual = engine.transform(&case.input, &TransformOptions::with_style(case.style));
                (actual != case.expected).then(|| Mismatch {
                    index,
                    input: case.input.clone(),
                    expected: case.expected.clone(),
                    actual,
                })
            })
            .collect()
    }
}
