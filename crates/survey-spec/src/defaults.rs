//! Initial, unanswered survey state.
//!
//! Every scale starts on its resting member and every text or tag list starts
//! empty, so the result deserializes and type-checks like any other response.

use crate::scale::{AgreementLevel, BarrierSignificance, FamiliarityLevel, ImplementationExtent};
use crate::spec::response::{
    BarrierRatings, EnvironmentalPractices, GovernancePractices, SectionA, SectionB, SectionC,
    SectionD, SectionE, SectionF, SectionG, SocialPractices, SurveyResponse,
};

/// Builds the response a respondent starts editing from.
pub fn default_response() -> SurveyResponse {
    let not_at_all = ImplementationExtent::NotAtAll;
    let not_significant = BarrierSignificance::NotSignificant;

    SurveyResponse {
        section_a: SectionA {
            role: String::new(),
            role_other: String::new(),
            department: String::new(),
            department_other: String::new(),
            telecom_experience: String::new(),
            company: String::new(),
        },
        section_b: SectionB {
            familiarity_with_esg: FamiliarityLevel::NotAtAllFamiliar,
            sustainability_practice_level: String::new(),
            esg_reporting: String::new(),
        },
        section_c: SectionC {
            environmental: EnvironmentalPractices {
                energy_efficiency: not_at_all,
                data_centre_energy_management: not_at_all,
                waste_management: not_at_all,
                regulatory_compliance: not_at_all,
                environmental_tracking: not_at_all,
            },
            social: SocialPractices {
                employee_wellbeing: not_at_all,
                diversity_inclusion: not_at_all,
                community_investment: not_at_all,
                customer_satisfaction: not_at_all,
                data_privacy_protection: not_at_all,
                training_development: not_at_all,
            },
            governance: GovernancePractices {
                board_oversight: not_at_all,
                ethical_conduct: not_at_all,
                risk_management: not_at_all,
                transparency_reporting: not_at_all,
                stakeholder_engagement: not_at_all,
            },
        },
        section_d: SectionD {
            esg_importance: String::new(),
            financial_benefits: Vec::new(),
            profitability_agreement: AgreementLevel::Neutral,
            measurable_link: String::new(),
        },
        section_e: SectionE {
            strategic_challenges: Vec::new(),
            barrier_significance: BarrierRatings {
                financial_constraints: not_significant,
                lack_of_skills: not_significant,
                limited_data: not_significant,
                resistance_to_change: not_significant,
                lack_of_guidance: not_significant,
            },
        },
        section_f: SectionF {
            readiness: String::new(),
            dedicated_esg_team: String::new(),
            tracked_indicators: Vec::new(),
        },
        section_g: SectionG {
            recommendations: String::new(),
        },
    }
}

impl Default for SurveyResponse {
    fn default() -> Self {
        default_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scales_start_on_resting_members() {
        let value = serde_json::to_value(default_response()).expect("serialize");
        assert_eq!(value["sectionB"]["familiarityWithESG"], "Not at all familiar");
        assert_eq!(value["sectionC"]["social"]["trainingDevelopment"], "Not at all");
        assert_eq!(
            value["sectionD"]["profitabilityAgreement"],
            "Neither agree nor disagree"
        );
        assert_eq!(
            value["sectionE"]["barrierSignificance"]["limitedData"],
            "Not significant"
        );
        assert_eq!(value["sectionF"]["trackedIndicators"], json!([]));
        assert_eq!(value["sectionA"]["roleOther"], "");
    }

    #[test]
    fn defaults_round_trip_through_json() {
        let value = serde_json::to_value(default_response()).expect("serialize");
        let back: SurveyResponse = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, default_response());
    }
}
