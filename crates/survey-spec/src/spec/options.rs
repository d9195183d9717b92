//! Answer lists offered by the survey form for its choice-style text questions.
//!
//! The validator accepts any non-empty text for these questions; the lists
//! exist so front ends render the same choices everywhere.

/// Literal choice that unlocks the paired free-text field in Section A.
pub const OTHER: &str = "Other (please specify)";

pub const ROLES: &[&str] = &[
    "Senior Manager / Executive",
    "Middle Manager",
    "Non Management Staff",
    OTHER,
];

pub const DEPARTMENTS: &[&str] = &[
    "Finance",
    "ESG / Sustainability",
    "Human Resources",
    "Legal compliance",
    "IT",
    OTHER,
];

pub const TELECOM_EXPERIENCE: &[&str] = &[
    "0–2 years",
    "3–5 years",
    "6–10 years",
    "More than 10 years",
];

pub const COMPANIES: &[&str] = &["MTN Cameroon", "Orange Cameroon", "CAMTEL", "NEXTTEL"];

pub const SUSTAINABILITY_PRACTICE_LEVELS: &[&str] = &[
    "Mainly CSR activities (philanthropy, charity)",
    "A mix of CSR and early ESG elements",
    "A structured ESG strategy with defined KPIs",
    "No formal CSR or ESG practices",
    "Not sure",
];

pub const ESG_REPORTING: &[&str] = &["Yes", "No", "In progress", "Not sure"];

pub const ESG_IMPORTANCE: &[&str] = &[
    "Extremely important",
    "Very important",
    "Somewhat important",
    "Not so important",
    "Not at all important",
];

pub const FINANCIAL_BENEFITS: &[&str] = &[
    "Reduced operational costs",
    "Increased revenue or customer loyalty",
    "Reduced cost of borrowing",
    "Enhanced brand reputation",
    "Improved risk management",
    "No financial benefits",
];

pub const MEASURABLE_LINK: &[&str] = &["Yes", "No", "Not sure"];

pub const STRATEGIC_CHALLENGES: &[&str] = &[
    "Lack of knowledge or expertise",
    "Lack of structured ESG governance",
    "Limited financial resources",
    "Low regulatory pressure",
    "Lack of industry ESG standards",
    "Difficulty measuring ESG impact",
    "Low management priority",
];

pub const READINESS: &[&str] = &[
    "Fully prepared",
    "Moderately prepared",
    "Not prepared",
    "Not sure",
];

pub const DEDICATED_ESG_TEAM: &[&str] = &["Yes", "No", "Under discussion"];

pub const TRACKED_INDICATORS: &[&str] = &[
    "Energy consumption",
    "CO₂ emissions",
    "Employee satisfaction metrics",
    "Data privacy or security incidents",
    "Governance or compliance indicators",
];

/// Choice list offered for the field at `pointer`, if the form shows one.
pub fn choices_for(pointer: &str) -> Option<&'static [&'static str]> {
    let choices = match pointer {
        "/sectionA/role" => ROLES,
        "/sectionA/department" => DEPARTMENTS,
        "/sectionA/telecomExperience" => TELECOM_EXPERIENCE,
        "/sectionA/company" => COMPANIES,
        "/sectionB/sustainabilityPracticeLevel" => SUSTAINABILITY_PRACTICE_LEVELS,
        "/sectionB/esgReporting" => ESG_REPORTING,
        "/sectionD/esgImportance" => ESG_IMPORTANCE,
        "/sectionD/financialBenefits" => FINANCIAL_BENEFITS,
        "/sectionD/measurableLink" => MEASURABLE_LINK,
        "/sectionE/strategicChallenges" => STRATEGIC_CHALLENGES,
        "/sectionF/readiness" => READINESS,
        "/sectionF/dedicatedESGTeam" => DEDICATED_ESG_TEAM,
        "/sectionF/trackedIndicators" => TRACKED_INDICATORS,
        _ => return None,
    };
    Some(choices)
}
