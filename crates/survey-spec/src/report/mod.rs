//! Static, human-readable report derived from a survey response.
//!
//! [`build_report`] is a pure function of the response and a [`ReportStamp`];
//! the stamp carries the only time-varying parts (timestamp and cosmetic
//! submission id). Renderers turn the resulting [`Report`] into HTML or text.

mod html;
mod text;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::scale::Scale;
use crate::spec::field::field;
use crate::spec::response::SurveyResponse;
use crate::spec::section::Section;

pub use html::{ReportError, ReportRenderer, render_html};
pub use text::render_text;

/// Marker shown in place of empty free text.
pub const NO_RECOMMENDATIONS: &str = "No recommendations provided.";

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_LEN: usize = 8;

/// Time-varying inputs of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStamp {
    /// Cosmetic identifier; collisions are possible and tolerated.
    pub submission_id: String,
    pub recorded_at: DateTime<Utc>,
}

impl ReportStamp {
    pub fn new(submission_id: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            submission_id: submission_id.into(),
            recorded_at,
        }
    }

    /// Stamps "now" with a random 8-character base-36 id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let submission_id = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect::<String>();
        Self::new(submission_id, Utc::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub company: String,
    pub submission_id: String,
    pub recorded_at: String,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub letter: String,
    /// Element id matching [`Section::anchor`].
    pub anchor: String,
    pub heading: String,
    pub blocks: Vec<ReportBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBlock {
    /// Key/value pairs; `grid` lays them out side by side.
    Fields {
        grid: bool,
        entries: Vec<ReportEntry>,
    },
    Matrix(ReportMatrix),
    Tags {
        label: String,
        marker: String,
        tags: Vec<String>,
    },
    Text {
        label: String,
        value: String,
        provided: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
}

/// One row per practice or barrier, one column per scale value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMatrix {
    pub title: String,
    pub row_header: String,
    pub columns: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub label: String,
    pub value: String,
    pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub column: String,
    pub selected: bool,
}

impl ReportMatrix {
    pub fn selected_count(&self, row: usize) -> usize {
        self.rows
            .get(row)
            .map(|row| row.cells.iter().filter(|cell| cell.selected).count())
            .unwrap_or(0)
    }
}

impl Report {
    pub fn matrices(&self) -> impl Iterator<Item = &ReportMatrix> {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .filter_map(|block| match block {
                ReportBlock::Matrix(matrix) => Some(matrix),
                _ => None,
            })
    }
}

/// Builds the report document for `response`.
pub fn build_report(response: &SurveyResponse, stamp: &ReportStamp) -> Report {
    let a = &response.section_a;
    let b = &response.section_b;
    let c = &response.section_c;
    let d = &response.section_d;
    let e = &response.section_e;
    let f = &response.section_f;
    let g = &response.section_g;

    let sections = vec![
        section(
            Section::A,
            "Respondent Profile",
            vec![ReportBlock::Fields {
                grid: true,
                entries: vec![
                    entry("/sectionA/company", &a.company),
                    entry("/sectionA/role", a.display_role()),
                    entry("/sectionA/department", a.display_department()),
                    entry("/sectionA/telecomExperience", &a.telecom_experience),
                ],
            }],
        ),
        section(
            Section::B,
            "Awareness & Strategy",
            vec![ReportBlock::Fields {
                grid: false,
                entries: vec![
                    entry("/sectionB/familiarityWithESG", b.familiarity_with_esg.as_str()),
                    entry(
                        "/sectionB/sustainabilityPracticeLevel",
                        &b.sustainability_practice_level,
                    ),
                    entry("/sectionB/esgReporting", &b.esg_reporting),
                ],
            }],
        ),
        section(
            Section::C,
            "Practice Maturity Matrix",
            vec![
                matrix(
                    "Environmental Practices",
                    "Practice",
                    "/sectionC/environmental/",
                    &c.environmental.ratings(),
                ),
                matrix(
                    "Social Practices",
                    "Practice",
                    "/sectionC/social/",
                    &c.social.ratings(),
                ),
                matrix(
                    "Governance Practices",
                    "Practice",
                    "/sectionC/governance/",
                    &c.governance.ratings(),
                ),
            ],
        ),
        section(
            Section::D,
            "Financial Impact & Value",
            vec![
                single("/sectionD/esgImportance", &d.esg_importance),
                tags("/sectionD/financialBenefits", "✓", &d.financial_benefits),
                single(
                    "/sectionD/profitabilityAgreement",
                    d.profitability_agreement.as_str(),
                ),
                single("/sectionD/measurableLink", &d.measurable_link),
            ],
        ),
        section(
            Section::E,
            "Challenges & Barriers",
            vec![
                tags("/sectionE/strategicChallenges", "⚠", &e.strategic_challenges),
                matrix(
                    "Barrier Significance",
                    "Barrier",
                    "/sectionE/barrierSignificance/",
                    &e.barrier_significance.ratings(),
                ),
            ],
        ),
        section(
            Section::F,
            "Internal Readiness",
            vec![
                single("/sectionF/readiness", &f.readiness),
                single("/sectionF/dedicatedESGTeam", &f.dedicated_esg_team),
                tags("/sectionF/trackedIndicators", "●", &f.tracked_indicators),
            ],
        ),
        section(
            Section::G,
            "Strategic Recommendations",
            vec![free_text("/sectionG/recommendations", &g.recommendations)],
        ),
    ];

    Report {
        title: "ESG Telecom Survey".into(),
        company: a.company.clone(),
        submission_id: stamp.submission_id.clone(),
        recorded_at: stamp
            .recorded_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        sections,
    }
}

fn section(section: Section, heading: &str, blocks: Vec<ReportBlock>) -> ReportSection {
    let letter = section.letter();
    ReportSection {
        letter: letter.to_string(),
        anchor: section.anchor(),
        heading: format!("{letter}. {heading}"),
        blocks,
    }
}

fn label_of(pointer: &str) -> String {
    field(pointer)
        .map(|spec| spec.label.to_string())
        .unwrap_or_else(|| pointer.to_string())
}

fn entry(pointer: &str, value: &str) -> ReportEntry {
    ReportEntry {
        label: label_of(pointer),
        value: value.to_string(),
    }
}

fn single(pointer: &str, value: &str) -> ReportBlock {
    ReportBlock::Fields {
        grid: false,
        entries: vec![entry(pointer, value)],
    }
}

fn tags(pointer: &str, marker: &str, values: &[String]) -> ReportBlock {
    ReportBlock::Tags {
        label: label_of(pointer),
        marker: marker.to_string(),
        tags: values.to_vec(),
    }
}

fn free_text(pointer: &str, value: &str) -> ReportBlock {
    let provided = !value.trim().is_empty();
    ReportBlock::Text {
        label: label_of(pointer),
        value: if provided {
            value.to_string()
        } else {
            NO_RECOMMENDATIONS.to_string()
        },
        provided,
    }
}

fn matrix<S: Scale>(
    title: &str,
    row_header: &str,
    prefix: &str,
    ratings: &[(&'static str, S)],
) -> ReportBlock {
    let columns = S::ALL
        .iter()
        .map(|value| value.as_str().to_string())
        .collect::<Vec<_>>();

    let rows = ratings
        .iter()
        .map(|(key, rating)| MatrixRow {
            label: label_of(&format!("{prefix}{key}")),
            value: rating.as_str().to_string(),
            cells: S::ALL
                .iter()
                .map(|column| MatrixCell {
                    column: column.as_str().to_string(),
                    selected: column.as_str() == rating.as_str(),
                })
                .collect(),
        })
        .collect();

    ReportBlock::Matrix(ReportMatrix {
        title: title.to_string(),
        row_header: row_header.to_string(),
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ImplementationExtent;
    use crate::spec::options::OTHER;

    fn stamp() -> ReportStamp {
        let recorded_at = DateTime::parse_from_rfc3339("2025-03-04T10:15:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        ReportStamp::new("ABCD1234", recorded_at)
    }

    #[test]
    fn generated_ids_are_uppercase_base36() {
        let stamp = ReportStamp::generate();
        assert_eq!(stamp.submission_id.len(), ID_LEN);
        assert!(
            stamp
                .submission_id
                .chars()
                .all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase())
        );
    }

    #[test]
    fn matrices_mark_the_recorded_rating() {
        let mut response = SurveyResponse::default();
        response.section_c.social.diversity_inclusion = ImplementationExtent::Moderate;
        let report = build_report(&response, &stamp());

        let social = report
            .matrices()
            .find(|matrix| matrix.title == "Social Practices")
            .expect("social matrix");
        let row = &social.rows[1];
        assert_eq!(row.label, "Diversity & inclusion programs");
        let selected: Vec<_> = row
            .cells
            .iter()
            .filter(|cell| cell.selected)
            .map(|cell| cell.column.as_str())
            .collect();
        assert_eq!(selected, vec!["Moderate"]);
    }

    #[test]
    fn empty_recommendations_use_marker() {
        let report = build_report(&SurveyResponse::default(), &stamp());
        let last = report.sections.last().expect("section g");
        assert_eq!(
            last.blocks[0],
            ReportBlock::Text {
                label: "Recommendations".into(),
                value: NO_RECOMMENDATIONS.into(),
                provided: false,
            }
        );
    }

    #[test]
    fn other_role_shows_free_text() {
        let mut response = SurveyResponse::default();
        response.section_a.role = OTHER.into();
        response.section_a.role_other = "Network planner".into();
        let report = build_report(&response, &stamp());
        let ReportBlock::Fields { entries, .. } = &report.sections[0].blocks[0] else {
            panic!("expected respondent fields");
        };
        let role = entries.iter().find(|entry| entry.label == "Role").expect("role");
        assert_eq!(role.value, "Network planner");
    }

    #[test]
    fn stamp_fields_are_copied_verbatim() {
        let report = build_report(&SurveyResponse::default(), &stamp());
        assert_eq!(report.submission_id, "ABCD1234");
        assert_eq!(report.recorded_at, "2025-03-04 10:15:00 UTC");
        assert_eq!(report.sections.len(), 7);
    }
}
