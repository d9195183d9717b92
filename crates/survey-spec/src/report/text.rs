use super::{Report, ReportBlock};

/// Render the report as plain text for terminals and logs.
pub fn render_text(report: &Report) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} - {}", report.title, report.company));
    lines.push(format!("Submission ID: {}", report.submission_id));
    lines.push(format!("Recorded on: {}", report.recorded_at));

    for section in &report.sections {
        lines.push(String::new());
        lines.push(section.heading.clone());
        for block in &section.blocks {
            match block {
                ReportBlock::Fields { entries, .. } => {
                    for entry in entries {
                        lines.push(format!("  {}: {}", entry.label, entry.value));
                    }
                }
                ReportBlock::Matrix(matrix) => {
                    lines.push(format!("  {}:", matrix.title));
                    for row in &matrix.rows {
                        lines.push(format!("    - {}: {}", row.label, row.value));
                    }
                }
                ReportBlock::Tags { label, marker, tags } => {
                    lines.push(format!("  {}:", label));
                    for tag in tags {
                        lines.push(format!("    {} {}", marker, tag));
                    }
                }
                ReportBlock::Text { label, value, .. } => {
                    lines.push(format!("  {}:", label));
                    for line in value.lines() {
                        lines.push(format!("    {}", line));
                    }
                }
            }
        }
    }

    lines.join("\n")
}
