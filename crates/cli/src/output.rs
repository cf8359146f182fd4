//! Rendering a [`Report`] for people and for tools.

use crate::search::Report;
use graphql_usage::UsagePath;
use serde::Serialize;
use std::fmt::Write;

/// One line naming the document, then one indented line per usage.
///
/// Documents without usages print nothing; skipped documents are reported on stderr instead.
#[must_use]
pub fn render_human(report: &Report) -> String {
    let mut out = String::new();
    for doc in &report.documents {
        if doc.usages().is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", doc.file.display());
        for usage in doc.usages() {
            let _ = writeln!(out, "  {usage}");
        }
    }
    out
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry<'a> {
    Usages { file: String, usages: Vec<&'a str> },
    Error { file: String, error: String },
}

/// A JSON array with an entry per document that has usages or was skipped.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    let entries: Vec<JsonEntry<'_>> = report
        .documents
        .iter()
        .filter_map(|doc| {
            let file = doc.file.display().to_string();
            match &doc.outcome {
                Ok(usages) if usages.is_empty() => None,
                Ok(usages) => Some(JsonEntry::Usages {
                    file,
                    usages: usages.iter().map(UsagePath::as_str).collect(),
                }),
                Err(error) => Some(JsonEntry::Error {
                    file,
                    error: format!("{error:#}"),
                }),
            }
        })
        .collect();

    serde_json::to_string_pretty(&entries)
}

/// Totals for the end of a human-readable run.
#[must_use]
pub fn summary(report: &Report) -> String {
    let usages = report.usage_count();
    let searched = report.documents.len();
    let mut line = format!(
        "Found {usages} {} of {} in {} of {searched} {}",
        plural(usages, "usage", "usages"),
        report.target,
        report.matched_count(),
        plural(searched, "document", "documents"),
    );
    let skipped = report.skipped_count();
    if skipped > 0 {
        let _ = write!(line, " ({skipped} skipped)");
    }
    line
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
