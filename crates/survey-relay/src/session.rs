//! One respondent's form: current answers, eager validation, and the
//! submission lifecycle `Idle -> Submitting -> {Succeeded, Failed}`.

use thiserror::Error;
use tracing::{info, warn};

use survey_spec::select::MultiSelectField;
use survey_spec::{
    ReportError, ReportStamp, Section, SurveyResponse, ValidationResult, default_response,
    validate,
};

use crate::error::RelayError;
use crate::notify::{NoticeLevel, Notifier};
use crate::payload::SubmissionPayload;
use crate::relay::SubmissionSink;
use crate::reply::RelayReply;

pub const INVALID_NOTICE: &str = "Please check the highlighted fields.";
pub const SUCCESS_NOTICE: &str = "Survey submitted successfully!";
pub const FAILURE_NOTICE: &str =
    "Failed to submit survey. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The endpoint answered but reported an error.
    Rejected(String),
    Relay(RelayError),
    Report(String),
    /// The attempt was dropped before the sink answered.
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded(RelayReply),
    Failed(FailureReason),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("response has {} invalid field(s)", .result.errors.len())]
    Invalid {
        first_section: Section,
        result: ValidationResult,
    },
    #[error("a submission is already in flight")]
    Busy,
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Relay(#[from] RelayError),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

pub struct SurveySession<N> {
    response: SurveyResponse,
    validation: ValidationResult,
    state: SubmissionState,
    notifier: N,
}

/// Holds the session in `Submitting` while a sink call is pending. Dropping
/// it unsettled marks the attempt abandoned so the form stays resubmittable.
struct InFlight<'a> {
    state: &'a mut SubmissionState,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("survey submission abandoned before the sink answered");
            *self.state = SubmissionState::Failed(FailureReason::Abandoned);
        }
    }
}

impl<N: Notifier> SurveySession<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_response(default_response(), notifier)
    }

    pub fn with_response(response: SurveyResponse, notifier: N) -> Self {
        let validation = validate(&response);
        Self {
            response,
            validation,
            state: SubmissionState::Idle,
            notifier,
        }
    }

    pub fn response(&self) -> &SurveyResponse {
        &self.response
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Applies an edit and re-validates.
    pub fn edit<F>(&mut self, apply: F) -> &ValidationResult
    where
        F: FnOnce(&mut SurveyResponse),
    {
        apply(&mut self.response);
        self.revalidate()
    }

    pub fn toggle(&mut self, field: MultiSelectField, tag: &str) -> bool {
        let selected = self.response.toggle(field, tag);
        self.revalidate();
        selected
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self.state, SubmissionState::Submitting)
    }

    /// Validates, renders and sends the current answers. Invalid answers
    /// never reach the sink; any failure leaves the session resubmittable.
    pub async fn submit<S: SubmissionSink>(
        &mut self,
        sink: &S,
    ) -> Result<RelayReply, SessionError> {
        if !self.can_submit() {
            return Err(SessionError::Busy);
        }

        self.revalidate();
        if let Some(first_section) = self.validation.first_section() {
            warn!(
                errors = self.validation.errors.len(),
                section = %first_section.letter(),
                "submission blocked by validation"
            );
            self.notifier.notify(NoticeLevel::Error, INVALID_NOTICE);
            return Err(SessionError::Invalid {
                first_section,
                result: self.validation.clone(),
            });
        }

        let stamp = ReportStamp::generate();
        let payload = match SubmissionPayload::prepare(&self.response, &stamp) {
            Ok(payload) => payload,
            Err(error) => {
                self.fail(FailureReason::Report(error.to_string()));
                return Err(error.into());
            }
        };

        info!(submission_id = %stamp.submission_id, "submitting survey");
        let outcome = {
            let in_flight = InFlight::start(&mut self.state);
            let outcome = sink.submit(&payload).await;
            in_flight.settle();
            outcome
        };

        match outcome {
            Ok(reply) if reply.is_success() => {
                self.state = SubmissionState::Succeeded(reply.clone());
                self.notifier.notify(NoticeLevel::Success, SUCCESS_NOTICE);
                Ok(reply)
            }
            Ok(reply) => {
                self.fail(FailureReason::Rejected(reply.message.clone()));
                Err(SessionError::Rejected(reply.message))
            }
            Err(error) => {
                self.fail(FailureReason::Relay(error.clone()));
                Err(error.into())
            }
        }
    }

    fn fail(&mut self, reason: FailureReason) {
        warn!(?reason, "survey submission failed");
        self.state = SubmissionState::Failed(reason);
        self.notifier.notify(NoticeLevel::Error, FAILURE_NOTICE);
    }

    fn revalidate(&mut self) -> &ValidationResult {
        self.validation = validate(&self.response);
        &self.validation
    }
}
