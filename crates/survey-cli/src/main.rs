use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use survey_relay::{
    NoticeLevel, Notifier, Relay, RelayConfig, SessionError, SurveySession, serve,
};
use survey_spec::{
    LocationPayload, ProductPayload, RecordError, ReportStamp, ValidationResult, build_report,
    default_response, parse_response, render_html, render_text, response_schema,
    validate_location, validate_product, validate_value,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "ESG telecom survey helper",
    long_about = "Validates survey responses, renders reports, and relays submissions to the configured spreadsheet endpoint"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ReportFormat {
    Html,
    Json,
    Text,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RecordKind {
    Location,
    Product,
}

#[derive(Subcommand)]
enum Command {
    /// Print the unanswered survey a respondent starts from.
    Defaults {
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the JSON Schema of a survey response.
    Schema,
    /// Validate a survey response.
    Validate {
        /// Path to the response JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
    },
    /// Render the report for a valid survey response.
    Report {
        /// Path to the response JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Output format of the report.
        #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
        format: ReportFormat,
    },
    /// Validate, render and forward a response to the submission endpoint.
    Submit {
        /// Path to the response JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Submission endpoint (defaults to SURVEY_ENDPOINT_URL).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Outbound timeout in seconds (defaults to SURVEY_RELAY_TIMEOUT_SECS or 30).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
    /// Run the HTTP relay.
    Serve {
        /// Listen address (defaults to SURVEY_RELAY_BIND or 127.0.0.1:8080).
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
        /// Submission endpoint (defaults to SURVEY_ENDPOINT_URL).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Outbound timeout in seconds (defaults to SURVEY_RELAY_TIMEOUT_SECS or 30).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
    /// Check a location or product payload before it is sent to the backend.
    CheckRecord {
        /// Kind of record held in the input file.
        #[arg(long, value_enum)]
        kind: RecordKind,
        /// Path to the record JSON file.
        #[arg(long, value_name = "INPUT")]
        input: PathBuf,
    },
}

/// Prints session notices for a terminal user.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => println!("{message}"),
            NoticeLevel::Error => eprintln!("{message}"),
        }
    }
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Defaults { out } => run_defaults(out),
        Command::Schema => print_json(&response_schema()),
        Command::Validate { answers } => run_validate(answers),
        Command::Report {
            answers,
            out,
            format,
        } => run_report(answers, out, format),
        Command::Submit {
            answers,
            endpoint,
            timeout,
        } => run_submit(answers, endpoint, timeout),
        Command::Serve {
            bind,
            endpoint,
            timeout,
        } => run_serve(bind, endpoint, timeout),
        Command::CheckRecord { kind, input } => run_check_record(kind, input),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_defaults(out: Option<PathBuf>) -> CliResult<()> {
    let json = serde_json::to_string_pretty(&default_response())?;
    emit(out.as_deref(), &json)
}

fn run_validate(answers_path: PathBuf) -> CliResult<()> {
    let answers = read_json(&answers_path)?;
    let result = validate_value(&answers);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn run_report(
    answers_path: PathBuf,
    out: Option<PathBuf>,
    format: ReportFormat,
) -> CliResult<()> {
    let answers = read_json(&answers_path)?;
    let response = match parse_response(&answers) {
        Ok(response) => response,
        Err(result) => {
            describe_validation(&result);
            return Err("validation failed".into());
        }
    };

    let report = build_report(&response, &ReportStamp::generate());
    let rendered = match format {
        ReportFormat::Html => render_html(&report)?,
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Text => render_text(&report),
    };
    emit(out.as_deref(), &rendered)
}

fn run_submit(
    answers_path: PathBuf,
    endpoint: Option<String>,
    timeout: Option<u64>,
) -> CliResult<()> {
    let answers = read_json(&answers_path)?;
    let response = match parse_response(&answers) {
        Ok(response) => response,
        Err(result) => {
            ConsoleNotifier.notify(NoticeLevel::Error, survey_relay::session::INVALID_NOTICE);
            describe_validation(&result);
            return Err("validation failed".into());
        }
    };

    let config = relay_config(endpoint, timeout)?;
    let relay = Relay::new(&config)?;
    let mut session = SurveySession::with_response(response, ConsoleNotifier);

    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(session.submit(&relay)) {
        Ok(reply) => {
            println!("Upstream reply: {}", reply.message);
            Ok(())
        }
        Err(error) => {
            if let SessionError::Invalid { result, .. } = &error {
                describe_validation(result);
            }
            println!("Submission failed: {error}");
            Err(error.into())
        }
    }
}

fn run_serve(
    bind: Option<SocketAddr>,
    endpoint: Option<String>,
    timeout: Option<u64>,
) -> CliResult<()> {
    let config = relay_config(endpoint, timeout)?;
    let addr = bind.unwrap_or(config.bind);
    let relay = Arc::new(Relay::new(&config)?);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(addr, relay))?;
    Ok(())
}

fn run_check_record(kind: RecordKind, input: PathBuf) -> CliResult<()> {
    let record = read_json(&input)?;
    let errors = match kind {
        RecordKind::Location => {
            validate_location(&serde_json::from_value::<LocationPayload>(record)?)
        }
        RecordKind::Product => validate_product(&serde_json::from_value::<ProductPayload>(record)?),
    };
    describe_record_errors(&errors);

    if errors.is_empty() {
        println!("Record is valid");
        Ok(())
    } else {
        Err("record check failed".into())
    }
}

fn relay_config(endpoint: Option<String>, timeout: Option<u64>) -> CliResult<RelayConfig> {
    let mut config = RelayConfig::from_env()?;
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    debug!(
        endpoint = config.endpoint.as_deref().unwrap_or("<unset>"),
        timeout_secs = config.timeout.as_secs(),
        "relay configuration"
    );
    Ok(config)
}

fn read_json(path: &Path) -> CliResult<Value> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit(out: Option<&Path>, contents: &str) -> CliResult<()> {
    match out {
        Some(path) => {
            fs::write(path, contents)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

fn describe_validation(result: &ValidationResult) {
    if result.errors.is_empty() {
        return;
    }
    println!("Errors:");
    for error in &result.errors {
        println!("  {} - {} ({})", error.path, error.message, error.code.as_str());
    }
    if let Some(section) = result.first_section() {
        println!("First section with errors: {}", section.title());
    }
}

fn describe_record_errors(errors: &[RecordError]) {
    if errors.is_empty() {
        return;
    }
    println!("Errors:");
    for error in errors {
        println!("  {} - {}", error.field, error.message);
    }
}
