use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use survey_spec::{
    ReportStamp, SurveyResponse, build_report, default_response, parse_response, render_html,
    validate_value,
};

use crate::error::RelayError;
use crate::payload::SubmissionPayload;
use crate::relay::Relay;
use crate::reply::RelayReply;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    relay: Arc<Relay>,
}

/// HTTP surface: submission relay plus defaults, validation and report
/// previews for front ends.
pub fn router(relay: Arc<Relay>) -> Router {
    Router::new()
        .route("/api/submit-survey", post(submit_survey))
        .route("/api/survey/defaults", get(survey_defaults))
        .route("/api/survey/validate", post(validate_survey))
        .route("/api/survey/report", post(report_survey))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { relay })
}

pub async fn serve(addr: SocketAddr, relay: Arc<Relay>) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, configured = relay.endpoint().is_some(), "survey relay listening");
    axum::serve(listener, router(relay))
        .await
        .map_err(ServerError::Serve)
}

async fn submit_survey(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> (StatusCode, Json<RelayReply>) {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!(status = %rejection.status(), "unreadable submission body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayReply::error(rejection.body_text())),
            );
        }
    };
    match state.relay.forward(&payload).await {
        Ok(reply) => (StatusCode::OK, Json(reply)),
        Err(error) => relay_failure(error),
    }
}

fn relay_failure(error: RelayError) -> (StatusCode, Json<RelayReply>) {
    error!(%error, "submission relay failed");
    (error.status_code(), Json(RelayReply::error(error.to_string())))
}

async fn survey_defaults() -> Json<SurveyResponse> {
    Json(default_response())
}

async fn validate_survey(Json(answers): Json<Value>) -> Response {
    Json(validate_value(&answers)).into_response()
}

async fn report_survey(Json(answers): Json<Value>) -> Response {
    let response = match parse_response(&answers) {
        Ok(response) => response,
        Err(result) => return (StatusCode::UNPROCESSABLE_ENTITY, Json(result)).into_response(),
    };
    let report = build_report(&response, &ReportStamp::generate());
    match render_html(&report) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            error!(%error, "report rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayReply::error(error.to_string())),
            )
                .into_response()
        }
    }
}
