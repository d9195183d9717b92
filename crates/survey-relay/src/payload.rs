use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use survey_spec::{ReportError, ReportStamp, SurveyResponse, build_report, render_html};

/// Body POSTed to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub raw_data: SurveyResponse,
    pub formatted_html: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionPayload {
    /// Renders the report for `response` and pairs it with the raw answers.
    pub fn prepare(response: &SurveyResponse, stamp: &ReportStamp) -> Result<Self, ReportError> {
        let report = build_report(response, stamp);
        Ok(Self {
            raw_data: response.clone(),
            formatted_html: render_html(&report)?,
            submitted_at: stamp.recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_camel_case_keys() {
        let recorded_at = DateTime::parse_from_rfc3339("2025-02-01T09:30:00Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        let payload = SubmissionPayload::prepare(
            &SurveyResponse::default(),
            &ReportStamp::new("ABCDEFGH", recorded_at),
        )
        .expect("prepare");

        let json = serde_json::to_value(&payload).expect("encode");
        assert!(json["rawData"]["sectionA"].is_object());
        assert_eq!(json["submittedAt"], "2025-02-01T09:30:00Z");
        assert!(
            json["formattedHtml"]
                .as_str()
                .expect("html")
                .contains("Submission ID: ABCDEFGH")
        );
    }
}
