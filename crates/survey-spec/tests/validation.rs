use serde_json::{Value, json};

use survey_spec::spec::options::OTHER;
use survey_spec::{
    ErrorCode, FIELDS, FieldKind, Section, SurveyResponse, default_response, parse_response,
    response_schema, validate, validate_value,
};

fn valid_answers() -> Value {
    serde_json::from_str(include_str!("../tests/fixtures/valid_response.json"))
        .expect("fixture parses")
}

fn set(answers: &mut Value, pointer: &str, value: Value) {
    *answers.pointer_mut(pointer).expect("pointer exists") = value;
}

#[test]
fn fixture_is_valid() {
    let result = validate_value(&valid_answers());
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert_eq!(result.first_section(), None);
}

#[test]
fn defaults_fail_only_on_unanswered_questions() {
    let result = validate(&default_response());
    assert!(!result.valid);
    assert_eq!(
        result.paths(),
        vec![
            "/sectionA/role",
            "/sectionA/department",
            "/sectionA/telecomExperience",
            "/sectionA/company",
            "/sectionB/sustainabilityPracticeLevel",
            "/sectionB/esgReporting",
            "/sectionD/esgImportance",
            "/sectionD/financialBenefits",
            "/sectionD/measurableLink",
            "/sectionE/strategicChallenges",
            "/sectionF/readiness",
            "/sectionF/dedicatedESGTeam",
            "/sectionF/trackedIndicators",
        ]
    );
    assert!(
        result
            .errors
            .iter()
            .all(|error| error.code == ErrorCode::Required)
    );
    assert_eq!(result.first_section(), Some(Section::A));
}

#[test]
fn clearing_any_required_field_reports_exactly_that_path() {
    for spec in FIELDS.iter().filter(|spec| spec.kind.is_required()) {
        let mut answers = valid_answers();
        let emptied = match spec.kind {
            FieldKind::MultiSelect => json!([]),
            _ => json!(""),
        };
        set(&mut answers, spec.pointer, emptied);

        let result = validate_value(&answers);
        assert_eq!(result.paths(), vec![spec.pointer], "field {}", spec.pointer);
        let expected = match spec.kind {
            FieldKind::Scale(_) => ErrorCode::InvalidOption,
            _ => ErrorCode::Required,
        };
        assert_eq!(result.errors[0].code, expected, "field {}", spec.pointer);
        assert_eq!(result.errors[0].section, spec.section);
    }
}

#[test]
fn whitespace_only_text_counts_as_empty() {
    let mut answers = valid_answers();
    set(&mut answers, "/sectionA/company", json!("   "));
    let result = validate_value(&answers);
    let error = result.error_at("/sectionA/company").expect("company error");
    assert_eq!(error.code, ErrorCode::Required);
    assert_eq!(error.message, "Company is required");
}

#[test]
fn out_of_set_scale_value_is_rejected() {
    let mut answers = valid_answers();
    set(
        &mut answers,
        "/sectionC/governance/riskManagement",
        json!("Sometimes"),
    );
    let result = validate_value(&answers);
    assert_eq!(result.paths(), vec!["/sectionC/governance/riskManagement"]);
    let error = &result.errors[0];
    assert_eq!(error.code, ErrorCode::InvalidOption);
    assert!(error.message.starts_with("'Sometimes' is not one of: Not at all"));
    assert_eq!(result.first_section(), Some(Section::C));
}

#[test]
fn wrong_types_are_reported_per_field() {
    let mut answers = valid_answers();
    set(&mut answers, "/sectionA/role", json!(3));
    set(&mut answers, "/sectionF/trackedIndicators", json!("Energy consumption"));
    let result = validate_value(&answers);
    assert_eq!(
        result.paths(),
        vec!["/sectionA/role", "/sectionF/trackedIndicators"]
    );
    assert!(
        result
            .errors
            .iter()
            .all(|error| error.code == ErrorCode::TypeMismatch)
    );
}

#[test]
fn duplicate_tags_are_rejected() {
    let mut answers = valid_answers();
    set(
        &mut answers,
        "/sectionD/financialBenefits",
        json!(["Reduced operational costs", "Reduced operational costs"]),
    );
    let result = validate_value(&answers);
    let error = result
        .error_at("/sectionD/financialBenefits")
        .expect("benefits error");
    assert_eq!(error.code, ErrorCode::DuplicateChoice);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn other_choice_requires_free_text() {
    let mut answers = valid_answers();
    set(&mut answers, "/sectionA/role", json!(OTHER));
    let result = validate_value(&answers);
    assert_eq!(result.paths(), vec!["/sectionA/roleOther"]);
    assert_eq!(result.errors[0].code, ErrorCode::OtherRequired);

    set(&mut answers, "/sectionA/roleOther", json!("Network planner"));
    assert!(validate_value(&answers).valid);
}

#[test]
fn missing_sections_report_every_leaf() {
    let mut answers = valid_answers();
    answers
        .as_object_mut()
        .expect("object")
        .remove("sectionE");
    let result = validate_value(&answers);
    assert_eq!(result.errors.len(), 6);
    assert!(
        result
            .errors
            .iter()
            .all(|error| error.section == Section::E && error.code == ErrorCode::Required)
    );
    assert_eq!(
        result.sections_with_errors().into_iter().collect::<Vec<_>>(),
        vec![Section::E]
    );
}

#[test]
fn optional_fields_may_be_absent() {
    let mut answers = valid_answers();
    let section_a = answers["sectionA"].as_object_mut().expect("section a");
    section_a.remove("roleOther");
    section_a.remove("departmentOther");
    answers["sectionG"]
        .as_object_mut()
        .expect("section g")
        .remove("recommendations");

    let response = parse_response(&answers).expect("still valid");
    assert_eq!(response.section_g.recommendations, "");
}

#[test]
fn unknown_keys_are_ignored() {
    let mut answers = valid_answers();
    answers["sectionB"]["comment"] = json!("extra");
    assert!(validate_value(&answers).valid);
}

#[test]
fn parse_response_returns_errors_for_invalid_input() {
    let result = parse_response(&json!({})).expect_err("empty document");
    assert_eq!(
        result.errors.len(),
        FIELDS.iter().filter(|spec| spec.kind.is_required()).count()
    );
}

#[test]
fn typed_and_raw_validation_agree() {
    let response: SurveyResponse =
        serde_json::from_value(valid_answers()).expect("typed fixture");
    assert!(validate(&response).valid);

    let mut response = response;
    response.section_d.financial_benefits.clear();
    let result = validate(&response);
    assert_eq!(result.paths(), vec!["/sectionD/financialBenefits"]);
    assert_eq!(result.errors[0].message, "Select at least one benefit");
}

#[test]
fn schema_marks_scale_values() {
    let schema = response_schema().to_string();
    assert!(schema.contains("To a large extent"));
    assert!(schema.contains("Neither agree nor disagree"));
}
