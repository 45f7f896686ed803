use serde::{Deserialize, Serialize};

/// Output style. A closed set: unknown names fall back to `Plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    #[default]
    Plain,
    /// Prefix the output with a random archaic interjection.
    Bardic,
}

impl Style {
    /// Parse a style name leniently; never fails.
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("bardic") {
            Self::Bardic
        } else {
            Self::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bardic => "bardic",
        }
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for Style {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.as_str().to_string()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub style: Style,
}

impl TransformOptions {
    pub fn with_style(style: Style) -> Self {
        Self { style }
    }
}

/// A complete request as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Missing text is treated as empty.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub style: Style,
}

impl TransformRequest {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: Some(text.into()),
            style,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn options(&self) -> TransformOptions {
        TransformOptions { style: self.style }
    }
}
