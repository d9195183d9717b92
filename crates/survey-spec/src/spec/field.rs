use serde::Serialize;

use crate::scale::ScaleKind;
use crate::spec::section::Section;

/// Constraint class of a single response leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "scale", rename_all = "snake_case")]
pub enum FieldKind {
    /// Non-empty text.
    Text,
    /// Free text that may be empty or absent.
    OptionalText,
    /// One value of a closed scale.
    Scale(ScaleKind),
    /// Non-empty list of distinct tags.
    MultiSelect,
}

impl FieldKind {
    pub fn is_required(self) -> bool {
        !matches!(self, FieldKind::OptionalText)
    }
}

/// Declarative description of one response leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub section: Section,
    /// JSON pointer from the response root.
    pub pointer: &'static str,
    /// Short label used in reports.
    pub label: &'static str,
    /// Question text as asked on the form.
    pub title: &'static str,
    pub kind: FieldKind,
    /// Message reported when a required value is missing or empty.
    pub required_message: &'static str,
}

const fn text(
    section: Section,
    pointer: &'static str,
    label: &'static str,
    title: &'static str,
    required_message: &'static str,
) -> FieldSpec {
    FieldSpec {
        section,
        pointer,
        label,
        title,
        kind: FieldKind::Text,
        required_message,
    }
}

const fn optional(
    section: Section,
    pointer: &'static str,
    label: &'static str,
    title: &'static str,
) -> FieldSpec {
    FieldSpec {
        section,
        pointer,
        label,
        title,
        kind: FieldKind::OptionalText,
        required_message: "",
    }
}

const fn scale(
    section: Section,
    pointer: &'static str,
    label: &'static str,
    title: &'static str,
    kind: ScaleKind,
) -> FieldSpec {
    FieldSpec {
        section,
        pointer,
        label,
        title,
        kind: FieldKind::Scale(kind),
        required_message: "Please select a rating",
    }
}

const fn multi(
    section: Section,
    pointer: &'static str,
    label: &'static str,
    title: &'static str,
    required_message: &'static str,
) -> FieldSpec {
    FieldSpec {
        section,
        pointer,
        label,
        title,
        kind: FieldKind::MultiSelect,
        required_message,
    }
}

const EXTENT: ScaleKind = ScaleKind::ImplementationExtent;
const BARRIER: ScaleKind = ScaleKind::BarrierSignificance;

/// Every leaf of a survey response, in form order.
pub const FIELDS: &[FieldSpec] = &[
    text(
        Section::A,
        "/sectionA/role",
        "Role",
        "1. What is your role in the company?",
        "Role is required",
    ),
    optional(
        Section::A,
        "/sectionA/roleOther",
        "Role (other)",
        "Please specify your role",
    ),
    text(
        Section::A,
        "/sectionA/department",
        "Department",
        "2. Which department do you work in?",
        "Department is required",
    ),
    optional(
        Section::A,
        "/sectionA/departmentOther",
        "Department (other)",
        "Please specify your department",
    ),
    text(
        Section::A,
        "/sectionA/telecomExperience",
        "Experience",
        "3. How many years have you worked in the telecom sector?",
        "Experience is required",
    ),
    text(
        Section::A,
        "/sectionA/company",
        "Company",
        "4. Which telecom company are you employed by?",
        "Company is required",
    ),
    scale(
        Section::B,
        "/sectionB/familiarityWithESG",
        "ESG Familiarity",
        "5. How familiar are you with the term 'ESG' (Environmental, Social, and Governance)?",
        ScaleKind::Familiarity,
    ),
    text(
        Section::B,
        "/sectionB/sustainabilityPracticeLevel",
        "Sustainability Practice Level",
        "6. Which of the following best describes your company's level of sustainability practices?",
        "This field is required",
    ),
    text(
        Section::B,
        "/sectionB/esgReporting",
        "ESG Reporting Status",
        "7. Does your company currently publish an annual sustainability or ESG report?",
        "This field is required",
    ),
    scale(
        Section::C,
        "/sectionC/environmental/energyEfficiency",
        "Energy efficiency initiatives (solar sites, low energy equipment)",
        "8. To what extent does your company implement the following environmental practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/environmental/dataCentreEnergyManagement",
        "Network or data centre energy management",
        "8. To what extent does your company implement the following environmental practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/environmental/wasteManagement",
        "Waste management & recycling",
        "8. To what extent does your company implement the following environmental practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/environmental/regulatoryCompliance",
        "Environmental regulatory compliance",
        "8. To what extent does your company implement the following environmental practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/environmental/environmentalTracking",
        "Tracking environmental performance metrics (e.g., CO₂ emissions)",
        "8. To what extent does your company implement the following environmental practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/social/employeeWellbeing",
        "Employee health, safety, and wellbeing",
        "9. To what extent does your company implement the following social practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/social/diversityInclusion",
        "Diversity & inclusion programs",
        "9. To what extent does your company implement the following social practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/social/communityInvestment",
        "Community investment / social initiatives",
        "9. To what extent does your company implement the following social practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/social/customerSatisfaction",
        "Customer satisfaction programs and surveys",
        "9. To what extent does your company implement the following social practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/social/dataPrivacyProtection",
        "Data privacy and security (cybersecurity)",
        "9. To what extent does your company implement the following social practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/social/trainingDevelopment",
        "Employee training and skill development",
        "9. To what extent does your company implement the following social practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/governance/boardOversight",
        "Board-level oversight for sustainability",
        "10. To what extent does your company implement the following governance practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/governance/ethicalConduct",
        "Policies for ethical conduct and anti-corruption",
        "10. To what extent does your company implement the following governance practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/governance/riskManagement",
        "Integration of ESG into risk management",
        "10. To what extent does your company implement the following governance practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/governance/transparencyReporting",
        "Transparency in public reporting",
        "10. To what extent does your company implement the following governance practices?",
        EXTENT,
    ),
    scale(
        Section::C,
        "/sectionC/governance/stakeholderEngagement",
        "Stakeholder engagement",
        "10. To what extent does your company implement the following governance practices?",
        EXTENT,
    ),
    text(
        Section::D,
        "/sectionD/esgImportance",
        "ESG Importance",
        "11. How important do you believe ESG is for the financial performance of your company?",
        "Importance is required",
    ),
    multi(
        Section::D,
        "/sectionD/financialBenefits",
        "Associated Financial Benefits",
        "12. What specific financial benefits do you associate with ESG adoption? (Select all that apply)",
        "Select at least one benefit",
    ),
    scale(
        Section::D,
        "/sectionD/profitabilityAgreement",
        "Profitability Agreement",
        "13. To what extent do you agree that strong ESG performance leads to long-term profitability?",
        ScaleKind::Agreement,
    ),
    text(
        Section::D,
        "/sectionD/measurableLink",
        "Measurable Link",
        "14. Do you believe there is a measurable link between ESG and financial success?",
        "This field is required",
    ),
    multi(
        Section::E,
        "/sectionE/strategicChallenges",
        "Primary Strategic Challenges",
        "15. Primary Strategic Challenges (Select all that apply)",
        "Select at least one challenge",
    ),
    scale(
        Section::E,
        "/sectionE/barrierSignificance/financialConstraints",
        "Limited financial resources",
        "16. Rate the significance of the following barriers:",
        BARRIER,
    ),
    scale(
        Section::E,
        "/sectionE/barrierSignificance/lackOfSkills",
        "Lack of relevant skills/expertise",
        "16. Rate the significance of the following barriers:",
        BARRIER,
    ),
    scale(
        Section::E,
        "/sectionE/barrierSignificance/limitedData",
        "Limited quality data to measure performance",
        "16. Rate the significance of the following barriers:",
        BARRIER,
    ),
    scale(
        Section::E,
        "/sectionE/barrierSignificance/resistanceToChange",
        "Internal resistance to change",
        "16. Rate the significance of the following barriers:",
        BARRIER,
    ),
    scale(
        Section::E,
        "/sectionE/barrierSignificance/lackOfGuidance",
        "Lack of clear regulatory guidance",
        "16. Rate the significance of the following barriers:",
        BARRIER,
    ),
    text(
        Section::F,
        "/sectionF/readiness",
        "Readiness Level",
        "17. How prepared is your company internally for mandatory ESG reporting?",
        "Readiness is required",
    ),
    text(
        Section::F,
        "/sectionF/dedicatedESGTeam",
        "Dedicated ESG Team",
        "18. Does your company have a dedicated ESG or Sustainability team?",
        "This field is required",
    ),
    multi(
        Section::F,
        "/sectionF/trackedIndicators",
        "Tracked Performance Indicators",
        "19. Which indicators are currently tracked? (Select all that apply)",
        "Select at least one indicator",
    ),
    optional(
        Section::G,
        "/sectionG/recommendations",
        "Recommendations",
        "20. What recommendations would you give for improving ESG adoption in the Cameroon telecom sector?",
    ),
];

/// Looks up the field declared at `pointer`.
pub fn field(pointer: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.pointer == pointer)
}

pub fn fields_in(section: Section) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |spec| spec.section == section)
}

/// Fields whose pointer sits below `prefix` (e.g. `/sectionC/social/`).
pub fn fields_under(prefix: &'static str) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS
        .iter()
        .filter(move |spec| spec.pointer.starts_with(prefix))
}
