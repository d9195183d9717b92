#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod notify;
pub mod payload;
pub mod relay;
pub mod reply;
pub mod server;
pub mod session;

pub use config::{ConfigError, DEFAULT_BIND, DEFAULT_TIMEOUT, RelayConfig};
pub use error::RelayError;
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use payload::SubmissionPayload;
pub use relay::{Relay, SubmissionSink};
pub use reply::{RelayReply, ReplyStatus};
pub use server::{ServerError, router, serve};
pub use session::{FailureReason, SessionError, SubmissionState, SurveySession};
