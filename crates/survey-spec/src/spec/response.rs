use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scale::{AgreementLevel, BarrierSignificance, FamiliarityLevel, ImplementationExtent};

/// Respondent information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionA {
    pub role: String,
    #[serde(default)]
    pub role_other: String,
    pub department: String,
    #[serde(default)]
    pub department_other: String,
    pub telecom_experience: String,
    pub company: String,
}

/// Awareness & understanding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionB {
    #[serde(rename = "familiarityWithESG")]
    pub familiarity_with_esg: FamiliarityLevel,
    pub sustainability_practice_level: String,
    pub esg_reporting: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalPractices {
    pub energy_efficiency: ImplementationExtent,
    pub data_centre_energy_management: ImplementationExtent,
    pub waste_management: ImplementationExtent,
    pub regulatory_compliance: ImplementationExtent,
    pub environmental_tracking: ImplementationExtent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialPractices {
    pub employee_wellbeing: ImplementationExtent,
    pub diversity_inclusion: ImplementationExtent,
    pub community_investment: ImplementationExtent,
    pub customer_satisfaction: ImplementationExtent,
    pub data_privacy_protection: ImplementationExtent,
    pub training_development: ImplementationExtent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GovernancePractices {
    pub board_oversight: ImplementationExtent,
    pub ethical_conduct: ImplementationExtent,
    pub risk_management: ImplementationExtent,
    pub transparency_reporting: ImplementationExtent,
    pub stakeholder_engagement: ImplementationExtent,
}

/// Practice maturity ratings grouped by ESG pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionC {
    pub environmental: EnvironmentalPractices,
    pub social: SocialPractices,
    pub governance: GovernancePractices,
}

/// Perceived value & financial impact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionD {
    pub esg_importance: String,
    pub financial_benefits: Vec<String>,
    pub profitability_agreement: AgreementLevel,
    pub measurable_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarrierRatings {
    pub financial_constraints: BarrierSignificance,
    pub lack_of_skills: BarrierSignificance,
    pub limited_data: BarrierSignificance,
    pub resistance_to_change: BarrierSignificance,
    pub lack_of_guidance: BarrierSignificance,
}

/// Strategic challenges and barrier ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionE {
    pub strategic_challenges: Vec<String>,
    pub barrier_significance: BarrierRatings,
}

/// Internal readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionF {
    pub readiness: String,
    #[serde(rename = "dedicatedESGTeam")]
    pub dedicated_esg_team: String,
    pub tracked_indicators: Vec<String>,
}

/// Open-ended recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionG {
    #[serde(default)]
    pub recommendations: String,
}

/// A complete survey response, one per respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub section_a: SectionA,
    pub section_b: SectionB,
    pub section_c: SectionC,
    pub section_d: SectionD,
    pub section_e: SectionE,
    pub section_f: SectionF,
    pub section_g: SectionG,
}

impl SectionA {
    /// Role as shown to readers, substituting the free-text answer for "Other".
    pub fn display_role(&self) -> &str {
        display_with_other(&self.role, &self.role_other)
    }

    pub fn display_department(&self) -> &str {
        display_with_other(&self.department, &self.department_other)
    }
}

fn display_with_other<'a>(choice: &'a str, other: &'a str) -> &'a str {
    if choice == crate::spec::options::OTHER && !other.trim().is_empty() {
        other
    } else {
        choice
    }
}

impl EnvironmentalPractices {
    /// Ratings paired with their JSON keys, in question order.
    pub fn ratings(&self) -> [(&'static str, ImplementationExtent); 5] {
        [
            ("energyEfficiency", self.energy_efficiency),
            ("dataCentreEnergyManagement", self.data_centre_energy_management),
            ("wasteManagement", self.waste_management),
            ("regulatoryCompliance", self.regulatory_compliance),
            ("environmentalTracking", self.environmental_tracking),
        ]
    }
}

impl SocialPractices {
    pub fn ratings(&self) -> [(&'static str, ImplementationExtent); 6] {
        [
            ("employeeWellbeing", self.employee_wellbeing),
            ("diversityInclusion", self.diversity_inclusion),
            ("communityInvestment", self.community_investment),
            ("customerSatisfaction", self.customer_satisfaction),
            ("dataPrivacyProtection", self.data_privacy_protection),
            ("trainingDevelopment", self.training_development),
        ]
    }
}

impl GovernancePractices {
    pub fn ratings(&self) -> [(&'static str, ImplementationExtent); 5] {
        [
            ("boardOversight", self.board_oversight),
            ("ethicalConduct", self.ethical_conduct),
            ("riskManagement", self.risk_management),
            ("transparencyReporting", self.transparency_reporting),
            ("stakeholderEngagement", self.stakeholder_engagement),
        ]
    }
}

impl BarrierRatings {
    pub fn ratings(&self) -> [(&'static str, BarrierSignificance); 5] {
        [
            ("financialConstraints", self.financial_constraints),
            ("lackOfSkills", self.lack_of_skills),
            ("limitedData", self.limited_data),
            ("resistanceToChange", self.resistance_to_change),
            ("lackOfGuidance", self.lack_of_guidance),
        ]
    }
}
