//! CSV export of resolution results.

use std::path::Path;

use crate::error::PipelineResult;
use crate::pipeline::ResolvedPaper;

/// Render accumulated results as CSV, one row per paper.
#[must_use]
pub fn to_csv(rows: &[ResolvedPaper]) -> String {
    let mut output = String::from(
        "title,authors,journal,year,date,doi,link,replication_package,replication_url\n",
    );

    for row in rows {
        let paper = &row.paper;
        let fields = [
            csv_escape(&paper.title),
            csv_escape(paper.authors.as_deref().unwrap_or("")),
            csv_escape(&paper.venue),
            paper.year.map(|y| y.to_string()).unwrap_or_default(),
            csv_escape(paper.published.as_deref().unwrap_or("")),
            csv_escape(paper.doi.as_deref().unwrap_or("")),
            csv_escape(paper.link().as_deref().unwrap_or("")),
            u8::from(row.outcome.is_found()).to_string(),
            csv_escape(row.outcome.url().unwrap_or("")),
        ];

        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

/// Write accumulated results to a CSV file.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_csv(path: &Path, rows: &[ResolvedPaper]) -> PipelineResult<()> {
    std::fs::write(path, to_csv(rows))?;
    Ok(())
}

/// Escape a string for CSV output.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
