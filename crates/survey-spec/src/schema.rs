use serde_json::Value;

use crate::spec::response::SurveyResponse;

/// JSON Schema describing the wire shape of a [`SurveyResponse`].
pub fn response_schema() -> Value {
    schemars::schema_for!(SurveyResponse).to_value()
}
