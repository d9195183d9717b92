use handlebars::Handlebars;
use thiserror::Error;

use super::Report;

const TEMPLATE_NAME: &str = "survey_report";
const REPORT_TEMPLATE: &str = include_str!("report.hbs");

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report template is invalid: {0}")]
    Template(String),
    #[error("failed to render report: {0}")]
    Render(String),
}

/// Handlebars registry holding the HTML report template.
pub struct ReportRenderer {
    registry: Handlebars<'static>,
}

impl ReportRenderer {
    pub fn new() -> Result<Self, ReportError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_template_string(TEMPLATE_NAME, REPORT_TEMPLATE)
            .map_err(|error| ReportError::Template(error.to_string()))?;
        Ok(Self { registry })
    }

    /// Renders a full HTML document. Interpolated values are HTML-escaped.
    pub fn render(&self, report: &Report) -> Result<String, ReportError> {
        self.registry
            .render(TEMPLATE_NAME, report)
            .map_err(|error| ReportError::Render(error.to_string()))
    }
}

pub fn render_html(report: &Report) -> Result<String, ReportError> {
    ReportRenderer::new()?.render(report)
}
