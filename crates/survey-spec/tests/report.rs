use chrono::{DateTime, Utc};

use survey_spec::report::ReportMatrix;
use survey_spec::{
    NO_RECOMMENDATIONS, ReportRenderer, ReportStamp, SurveyResponse, build_report,
    default_response, render_html, render_text,
};

fn fixture() -> SurveyResponse {
    serde_json::from_str(include_str!("../tests/fixtures/valid_response.json"))
        .expect("fixture parses")
}

fn stamp(id: &str, at: &str) -> ReportStamp {
    let recorded_at = DateTime::parse_from_rfc3339(at)
        .expect("timestamp")
        .with_timezone(&Utc);
    ReportStamp::new(id, recorded_at)
}

#[test]
fn html_is_deterministic_for_a_fixed_stamp() {
    let response = fixture();
    let stamp = stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z");
    let first = render_html(&build_report(&response, &stamp)).expect("render");
    let second = render_html(&build_report(&response, &stamp)).expect("render");
    assert_eq!(first, second);
}

#[test]
fn stamps_only_change_id_and_timestamp() {
    let response = fixture();
    let one = render_html(&build_report(
        &response,
        &stamp("AAAA1111", "2025-02-01T09:30:00Z"),
    ))
    .expect("render");
    let two = render_html(&build_report(
        &response,
        &stamp("BBBB2222", "2025-06-15T18:05:42Z"),
    ))
    .expect("render");
    assert_ne!(one, two);

    let normalize = |html: &str| {
        html.replace("AAAA1111", "ID")
            .replace("BBBB2222", "ID")
            .replace("2025-02-01 09:30:00 UTC", "TS")
            .replace("2025-06-15 18:05:42 UTC", "TS")
    };
    assert_eq!(normalize(&one), normalize(&two));
}

#[test]
fn html_contains_header_and_all_sections() {
    let html = render_html(&build_report(
        &fixture(),
        &stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z"),
    ))
    .expect("render");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>ESG Survey Response - Orange Cameroon</title>"));
    assert!(html.contains("Submission ID: K3X9Q2ZP"));
    assert!(html.contains("Recorded on: 2025-02-01 09:30:00 UTC"));
    for anchor in [
        "section-a", "section-b", "section-c", "section-d", "section-e", "section-f", "section-g",
    ] {
        assert!(html.contains(&format!("id=\"{anchor}\"")), "missing {anchor}");
    }
    assert!(html.contains("Publish a yearly ESG report."));
}

#[test]
fn every_matrix_row_has_exactly_one_selected_cell() {
    let report = build_report(&fixture(), &stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z"));
    let matrices: Vec<&ReportMatrix> = report.matrices().collect();
    assert_eq!(matrices.len(), 4);

    let rows: usize = matrices.iter().map(|matrix| matrix.rows.len()).sum();
    assert_eq!(rows, 21);
    for matrix in matrices {
        assert_eq!(matrix.columns.len(), 5);
        for index in 0..matrix.rows.len() {
            assert_eq!(matrix.selected_count(index), 1, "{} row {index}", matrix.title);
        }
    }

    let html = render_html(&report).expect("render");
    assert_eq!(html.matches("<span class=\"check-icon\">").count(), 21);
}

#[test]
fn tag_lists_keep_selection_order_and_markers() {
    let html = render_html(&build_report(
        &fixture(),
        &stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z"),
    ))
    .expect("render");
    let costs = html.find("✓ Reduced operational costs").expect("first benefit");
    let brand = html.find("✓ Enhanced brand reputation").expect("second benefit");
    assert!(costs < brand);
    assert!(html.contains("⚠ Limited financial resources"));
    assert!(html.contains("● CO₂ emissions"));
}

#[test]
fn user_text_is_escaped() {
    let mut response = fixture();
    response.section_g.recommendations = "<script>alert('x')</script>".into();
    response.section_a.company = "A & B <Telecom>".into();
    let html = render_html(&build_report(
        &response,
        &stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z"),
    ))
    .expect("render");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B &lt;Telecom&gt;"));
}

#[test]
fn empty_recommendations_render_the_marker() {
    let mut response = fixture();
    response.section_g.recommendations = "  ".into();
    let html = render_html(&build_report(
        &response,
        &stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z"),
    ))
    .expect("render");
    assert!(html.contains(NO_RECOMMENDATIONS));
    assert!(html.contains("value free-text missing"));
}

#[test]
fn defaults_still_render() {
    let renderer = ReportRenderer::new().expect("template registers");
    let html = renderer
        .render(&build_report(
            &default_response(),
            &stamp("00000000", "2025-01-01T00:00:00Z"),
        ))
        .expect("render");
    assert!(html.contains("Not at all familiar"));
}

#[test]
fn text_rendering_lists_ratings() {
    let text = render_text(&build_report(
        &fixture(),
        &stamp("K3X9Q2ZP", "2025-02-01T09:30:00Z"),
    ));
    assert!(text.starts_with("ESG Telecom Survey - Orange Cameroon"));
    assert!(text.contains("C. Practice Maturity Matrix"));
    assert!(text.contains(
        "    - Energy efficiency initiatives (solar sites, low energy equipment): To a large extent"
    ));
    assert!(text.contains("    ● Energy consumption"));
}
