//! Case preservation — carries a matched word's capitalization onto its
//! replacement.

/// The casing pattern observed on a matched substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTemplate {
    /// Every cased character is uppercase: "YOU".
    Upper,
    /// First character uppercase, rest mixed or lower: "You".
    Capitalized,
    /// Anything else: "you".
    Lower,
}

impl CaseTemplate {
    /// Derive the template from an original matched substring.
    pub fn of(original: &str) -> Self {
        if original == original.to_uppercase() {
            return Self::Upper;
        }
        match original.chars().next() {
            Some(first) if first.is_uppercase() => Self::Capitalized,
            _ => Self::Lower,
        }
    }

    /// Render a lowercase canonical replacement in this casing.
    pub fn apply(self, replacement: &str) -> String {
        match self {
            Self::Upper => replacement.to_uppercase(),
            Self::Capitalized => {
                let mut chars = replacement.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Self::Lower => replacement.to_string(),
        }
    }
}

/// Render `replacement` with the casing pattern of `original`.
pub fn preserve_case(original: &str, replacement: &str) -> String {
    CaseTemplate::of(original).apply(replacement)
}
