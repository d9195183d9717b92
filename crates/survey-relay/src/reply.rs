use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
}

/// Normalized answer handed back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayReply {
    pub status: ReplyStatus,
    pub message: String,
}

impl RelayReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }

    /// Interprets a 2xx upstream body. JSON objects supply `status` and
    /// `message`; anything else is treated as a success carrying the body.
    pub fn normalize(body: &str) -> Self {
        let Ok(Value::Object(object)) = serde_json::from_str::<Value>(body) else {
            return Self::success(body);
        };

        let message = match object.get("message") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => body.to_string(),
            Some(other) => other.to_string(),
        };

        match object.get("status").and_then(Value::as_str) {
            Some("error") => Self::error(message),
            _ => Self::success(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_success() {
        assert_eq!(RelayReply::normalize("not json"), RelayReply::success("not json"));
    }

    #[test]
    fn non_object_json_is_success() {
        assert_eq!(RelayReply::normalize("[1,2]"), RelayReply::success("[1,2]"));
        assert_eq!(RelayReply::normalize("\"ok\""), RelayReply::success("\"ok\""));
    }

    #[test]
    fn object_fields_pass_through() {
        assert_eq!(
            RelayReply::normalize(r#"{"status":"success","message":"Row 12 added"}"#),
            RelayReply::success("Row 12 added")
        );
        assert_eq!(
            RelayReply::normalize(r#"{"status":"error","message":"Sheet locked"}"#),
            RelayReply::error("Sheet locked")
        );
    }

    #[test]
    fn missing_message_falls_back_to_body() {
        let body = r#"{"status":"error"}"#;
        assert_eq!(RelayReply::normalize(body), RelayReply::error(body));
        let body = r#"{"result":"ok"}"#;
        assert_eq!(RelayReply::normalize(body), RelayReply::success(body));
    }

    #[test]
    fn wire_form_uses_lowercase_status() {
        let json = serde_json::to_value(RelayReply::error("boom")).expect("encode");
        assert_eq!(json, serde_json::json!({"status": "error", "message": "boom"}));
    }
}
