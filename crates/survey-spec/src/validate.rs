use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::spec::field::{FIELDS, FieldKind, FieldSpec};
use crate::spec::options::OTHER;
use crate::spec::response::SurveyResponse;
use crate::spec::section::Section;

/// Machine-readable reason attached to a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    TypeMismatch,
    InvalidOption,
    DuplicateChoice,
    OtherRequired,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::TypeMismatch => "type_mismatch",
            ErrorCode::InvalidOption => "invalid_option",
            ErrorCode::DuplicateChoice => "duplicate_choice",
            ErrorCode::OtherRequired => "other_required",
        }
    }
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// JSON pointer from the response root to the offending leaf.
    pub path: String,
    pub section: Section,
    pub message: String,
    pub code: ErrorCode,
}

/// Outcome of validating a candidate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Earliest section (A..G) holding an error, for scroll-to-error.
    pub fn first_section(&self) -> Option<Section> {
        self.errors.iter().map(|error| error.section).min()
    }

    pub fn error_at(&self, path: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.path == path)
    }

    pub fn sections_with_errors(&self) -> BTreeSet<Section> {
        self.errors.iter().map(|error| error.section).collect()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.path.as_str()).collect()
    }
}

/// Validates a typed response: required-ness, duplicate tags and the
/// "other" coupling. Scale values are already guaranteed by the type.
pub fn validate(response: &SurveyResponse) -> ValidationResult {
    match serde_json::to_value(response) {
        Ok(value) => validate_value(&value),
        Err(error) => ValidationResult::from_errors(vec![ValidationError {
            path: String::new(),
            section: Section::A,
            message: format!("response could not be encoded: {error}"),
            code: ErrorCode::TypeMismatch,
        }]),
    }
}

/// Validates a candidate response in its JSON form. Missing sections and
/// fields are reported per leaf rather than failing the whole document.
pub fn validate_value(answers: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    for spec in FIELDS {
        match answers.pointer(spec.pointer) {
            None | Some(Value::Null) => {
                if spec.kind.is_required() {
                    errors.push(field_error(spec, spec.required_message, ErrorCode::Required));
                }
            }
            Some(value) => {
                if let Some(error) = validate_field(spec, value) {
                    errors.push(error);
                }
            }
        }
    }

    for (choice, other) in [
        ("/sectionA/role", "/sectionA/roleOther"),
        ("/sectionA/department", "/sectionA/departmentOther"),
    ] {
        if let Some(error) = check_other_coupling(answers, choice, other)
            && !errors.iter().any(|existing| existing.path == other)
        {
            errors.push(error);
        }
    }

    ValidationResult::from_errors(errors)
}

/// Validates then decodes a candidate response.
pub fn parse_response(answers: &Value) -> Result<SurveyResponse, ValidationResult> {
    let result = validate_value(answers);
    if !result.valid {
        return Err(result);
    }
    serde_json::from_value(answers.clone()).map_err(|error| {
        ValidationResult::from_errors(vec![ValidationError {
            path: String::new(),
            section: Section::A,
            message: format!("response does not match the survey shape: {error}"),
            code: ErrorCode::TypeMismatch,
        }])
    })
}

fn validate_field(spec: &FieldSpec, value: &Value) -> Option<ValidationError> {
    match spec.kind {
        FieldKind::Text => match value.as_str() {
            None => Some(type_mismatch(spec, "expected text")),
            Some(text) if text.trim().is_empty() => Some(field_error(
                spec,
                spec.required_message,
                ErrorCode::Required,
            )),
            Some(_) => None,
        },
        FieldKind::OptionalText => {
            if value.is_string() {
                None
            } else {
                Some(type_mismatch(spec, "expected text"))
            }
        }
        FieldKind::Scale(scale) => match value.as_str() {
            None => Some(type_mismatch(spec, "expected one of the scale values")),
            Some(text) if scale.contains(text) => None,
            Some(text) => Some(field_error(
                spec,
                &format!(
                    "'{}' is not one of: {}",
                    text,
                    scale.values().join(", ")
                ),
                ErrorCode::InvalidOption,
            )),
        },
        FieldKind::MultiSelect => validate_tags(spec, value),
    }
}

fn validate_tags(spec: &FieldSpec, value: &Value) -> Option<ValidationError> {
    let Some(items) = value.as_array() else {
        return Some(type_mismatch(spec, "expected a list of choices"));
    };
    if items.is_empty() {
        return Some(field_error(spec, spec.required_message, ErrorCode::Required));
    }

    let mut seen = BTreeSet::new();
    for item in items {
        let Some(tag) = item.as_str() else {
            return Some(type_mismatch(spec, "choices must be text"));
        };
        if !seen.insert(tag) {
            return Some(field_error(
                spec,
                &format!("'{}' is selected more than once", tag),
                ErrorCode::DuplicateChoice,
            ));
        }
    }
    None
}

fn check_other_coupling(answers: &Value, choice: &str, other: &str) -> Option<ValidationError> {
    if answers.pointer(choice).and_then(Value::as_str) != Some(OTHER) {
        return None;
    }
    let specified = answers
        .pointer(other)
        .and_then(Value::as_str)
        .is_some_and(|text| !text.trim().is_empty());
    if specified {
        return None;
    }
    let spec = FIELDS.iter().find(|spec| spec.pointer == other)?;
    Some(field_error(
        spec,
        "Please specify when selecting 'Other'",
        ErrorCode::OtherRequired,
    ))
}

fn type_mismatch(spec: &FieldSpec, message: &str) -> ValidationError {
    field_error(spec, message, ErrorCode::TypeMismatch)
}

fn field_error(spec: &FieldSpec, message: &str, code: ErrorCode) -> ValidationError {
    ValidationError {
        path: spec.pointer.to_string(),
        section: spec.section,
        message: message.into(),
        code,
    }
}
