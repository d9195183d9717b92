use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the seven independently validated question groups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Section {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::A,
        Section::B,
        Section::C,
        Section::D,
        Section::E,
        Section::F,
        Section::G,
    ];

    /// Key of the section object inside a response (`sectionA`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Section::A => "sectionA",
            Section::B => "sectionB",
            Section::C => "sectionC",
            Section::D => "sectionD",
            Section::E => "sectionE",
            Section::F => "sectionF",
            Section::G => "sectionG",
        }
    }

    /// Element id a front end uses to scroll the section into view.
    pub fn anchor(self) -> String {
        format!("section-{}", self.letter().to_ascii_lowercase())
    }

    pub fn letter(self) -> char {
        match self {
            Section::A => 'A',
            Section::B => 'B',
            Section::C => 'C',
            Section::D => 'D',
            Section::E => 'E',
            Section::F => 'F',
            Section::G => 'G',
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::A => "Respondent Information",
            Section::B => "Awareness & Understanding",
            Section::C => "Current ESG Practices and Maturity Levels",
            Section::D => "Value & Impact",
            Section::E => "Barriers",
            Section::F => "Internal Readiness",
            Section::G => "Open Ended",
        }
    }

    /// Resolves the section owning a JSON pointer such as `/sectionC/social/x`.
    pub fn from_pointer(pointer: &str) -> Option<Section> {
        let head = pointer.trim_start_matches('/').split('/').next()?;
        Section::ALL
            .into_iter()
            .find(|section| section.key() == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_resolves_owning_section() {
        assert_eq!(
            Section::from_pointer("/sectionC/social/diversityInclusion"),
            Some(Section::C)
        );
        assert_eq!(Section::from_pointer("/sectionG"), Some(Section::G));
        assert_eq!(Section::from_pointer("/submittedAt"), None);
    }

    #[test]
    fn anchor_uses_lowercase_letter() {
        assert_eq!(Section::E.anchor(), "section-e");
    }
}
