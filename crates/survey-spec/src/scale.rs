use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifies one of the closed ordinal scales used by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Familiarity,
    ImplementationExtent,
    Agreement,
    BarrierSignificance,
}

impl ScaleKind {
    /// Wire values of the scale in display order.
    pub fn values(self) -> &'static [&'static str] {
        match self {
            ScaleKind::Familiarity => FamiliarityLevel::LABELS,
            ScaleKind::ImplementationExtent => ImplementationExtent::LABELS,
            ScaleKind::Agreement => AgreementLevel::LABELS,
            ScaleKind::BarrierSignificance => BarrierSignificance::LABELS,
        }
    }

    pub fn contains(self, candidate: &str) -> bool {
        self.values().contains(&candidate)
    }
}

/// Shared behaviour of the four survey scales.
pub trait Scale: Copy + Sized + 'static {
    const KIND: ScaleKind;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == raw)
    }
}

/// Four-point self-reported knowledge scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum FamiliarityLevel {
    #[serde(rename = "Very familiar")]
    VeryFamiliar,
    #[serde(rename = "Somewhat familiar")]
    SomewhatFamiliar,
    #[serde(rename = "Not so familiar")]
    NotSoFamiliar,
    #[default]
    #[serde(rename = "Not at all familiar")]
    NotAtAllFamiliar,
}

impl FamiliarityLevel {
    const LABELS: &'static [&'static str] = &[
        "Very familiar",
        "Somewhat familiar",
        "Not so familiar",
        "Not at all familiar",
    ];
}

impl Scale for FamiliarityLevel {
    const KIND: ScaleKind = ScaleKind::Familiarity;
    const ALL: &'static [Self] = &[
        FamiliarityLevel::VeryFamiliar,
        FamiliarityLevel::SomewhatFamiliar,
        FamiliarityLevel::NotSoFamiliar,
        FamiliarityLevel::NotAtAllFamiliar,
    ];

    fn as_str(self) -> &'static str {
        match self {
            FamiliarityLevel::VeryFamiliar => "Very familiar",
            FamiliarityLevel::SomewhatFamiliar => "Somewhat familiar",
            FamiliarityLevel::NotSoFamiliar => "Not so familiar",
            FamiliarityLevel::NotAtAllFamiliar => "Not at all familiar",
        }
    }
}

/// Five-point scale describing how thoroughly a practice is adopted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum ImplementationExtent {
    #[default]
    #[serde(rename = "Not at all")]
    NotAtAll,
    #[serde(rename = "Slightly")]
    Slightly,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "To a large extent")]
    LargeExtent,
    #[serde(rename = "Very extensively")]
    VeryExtensively,
}

impl ImplementationExtent {
    const LABELS: &'static [&'static str] = &[
        "Not at all",
        "Slightly",
        "Moderate",
        "To a large extent",
        "Very extensively",
    ];
}

impl Scale for ImplementationExtent {
    const KIND: ScaleKind = ScaleKind::ImplementationExtent;
    const ALL: &'static [Self] = &[
        ImplementationExtent::NotAtAll,
        ImplementationExtent::Slightly,
        ImplementationExtent::Moderate,
        ImplementationExtent::LargeExtent,
        ImplementationExtent::VeryExtensively,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ImplementationExtent::NotAtAll => "Not at all",
            ImplementationExtent::Slightly => "Slightly",
            ImplementationExtent::Moderate => "Moderate",
            ImplementationExtent::LargeExtent => "To a large extent",
            ImplementationExtent::VeryExtensively => "Very extensively",
        }
    }
}

/// Five-point Likert agreement scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum AgreementLevel {
    #[serde(rename = "Strongly agree")]
    StronglyAgree,
    #[serde(rename = "Agree")]
    Agree,
    #[default]
    #[serde(rename = "Neither agree nor disagree")]
    Neutral,
    #[serde(rename = "Disagree")]
    Disagree,
    #[serde(rename = "Strongly disagree")]
    StronglyDisagree,
}

impl AgreementLevel {
    const LABELS: &'static [&'static str] = &[
        "Strongly agree",
        "Agree",
        "Neither agree nor disagree",
        "Disagree",
        "Strongly disagree",
    ];
}

impl Scale for AgreementLevel {
    const KIND: ScaleKind = ScaleKind::Agreement;
    const ALL: &'static [Self] = &[
        AgreementLevel::StronglyAgree,
        AgreementLevel::Agree,
        AgreementLevel::Neutral,
        AgreementLevel::Disagree,
        AgreementLevel::StronglyDisagree,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AgreementLevel::StronglyAgree => "Strongly agree",
            AgreementLevel::Agree => "Agree",
            AgreementLevel::Neutral => "Neither agree nor disagree",
            AgreementLevel::Disagree => "Disagree",
            AgreementLevel::StronglyDisagree => "Strongly disagree",
        }
    }
}

/// Five-point scale describing how impactful an obstacle is perceived to be.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum BarrierSignificance {
    #[default]
    #[serde(rename = "Not significant")]
    NotSignificant,
    #[serde(rename = "Slightly significant")]
    SlightlySignificant,
    #[serde(rename = "Moderately significant")]
    ModeratelySignificant,
    #[serde(rename = "Very significant")]
    VerySignificant,
    #[serde(rename = "Extremely significant")]
    ExtremelySignificant,
}

impl BarrierSignificance {
    const LABELS: &'static [&'static str] = &[
        "Not significant",
        "Slightly significant",
        "Moderately significant",
        "Very significant",
        "Extremely significant",
    ];
}

impl Scale for BarrierSignificance {
    const KIND: ScaleKind = ScaleKind::BarrierSignificance;
    const ALL: &'static [Self] = &[
        BarrierSignificance::NotSignificant,
        BarrierSignificance::SlightlySignificant,
        BarrierSignificance::ModeratelySignificant,
        BarrierSignificance::VerySignificant,
        BarrierSignificance::ExtremelySignificant,
    ];

    fn as_str(self) -> &'static str {
        match self {
            BarrierSignificance::NotSignificant => "Not significant",
            BarrierSignificance::SlightlySignificant => "Slightly significant",
            BarrierSignificance::ModeratelySignificant => "Moderately significant",
            BarrierSignificance::VerySignificant => "Very significant",
            BarrierSignificance::ExtremelySignificant => "Extremely significant",
        }
    }
}
