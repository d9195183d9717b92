use serde::{Deserialize, Serialize};

use crate::spec::response::SurveyResponse;

/// The three "select all that apply" questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultiSelectField {
    FinancialBenefits,
    StrategicChallenges,
    TrackedIndicators,
}

impl MultiSelectField {
    pub const ALL: [MultiSelectField; 3] = [
        MultiSelectField::FinancialBenefits,
        MultiSelectField::StrategicChallenges,
        MultiSelectField::TrackedIndicators,
    ];

    pub fn pointer(self) -> &'static str {
        match self {
            MultiSelectField::FinancialBenefits => "/sectionD/financialBenefits",
            MultiSelectField::StrategicChallenges => "/sectionE/strategicChallenges",
            MultiSelectField::TrackedIndicators => "/sectionF/trackedIndicators",
        }
    }

    pub fn tags(self, response: &SurveyResponse) -> &[String] {
        match self {
            MultiSelectField::FinancialBenefits => &response.section_d.financial_benefits,
            MultiSelectField::StrategicChallenges => &response.section_e.strategic_challenges,
            MultiSelectField::TrackedIndicators => &response.section_f.tracked_indicators,
        }
    }

    pub fn tags_mut(self, response: &mut SurveyResponse) -> &mut Vec<String> {
        match self {
            MultiSelectField::FinancialBenefits => &mut response.section_d.financial_benefits,
            MultiSelectField::StrategicChallenges => &mut response.section_e.strategic_challenges,
            MultiSelectField::TrackedIndicators => &mut response.section_f.tracked_indicators,
        }
    }
}

/// Flips membership of `tag`: removes it when present, appends it otherwise.
/// Returns whether the tag is selected afterwards.
pub fn toggle(tags: &mut Vec<String>, tag: &str) -> bool {
    let before = tags.len();
    tags.retain(|existing| existing != tag);
    if tags.len() == before {
        tags.push(tag.to_string());
        true
    } else {
        false
    }
}

impl SurveyResponse {
    pub fn toggle(&mut self, field: MultiSelectField, tag: &str) -> bool {
        toggle(field.tags_mut(self), tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut tags = Vec::new();
        assert!(toggle(&mut tags, "Energy consumption"));
        assert!(toggle(&mut tags, "CO₂ emissions"));
        assert_eq!(tags, vec!["Energy consumption", "CO₂ emissions"]);

        assert!(!toggle(&mut tags, "Energy consumption"));
        assert_eq!(tags, vec!["CO₂ emissions"]);
    }

    #[test]
    fn re_added_tag_goes_to_the_end() {
        let mut tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        toggle(&mut tags, "a");
        toggle(&mut tags, "a");
        assert_eq!(tags, vec!["b", "c", "a"]);
    }

    #[test]
    fn response_toggle_targets_the_right_section() {
        let mut response = SurveyResponse::default();
        response.toggle(MultiSelectField::StrategicChallenges, "Low regulatory pressure");
        assert_eq!(
            MultiSelectField::StrategicChallenges.tags(&response),
            ["Low regulatory pressure".to_string()]
        );
        assert!(response.section_d.financial_benefits.is_empty());
    }
}
