//! The search run: load the schema, check the target, expand the patterns, walk each document.

use crate::exit_code::{ExitCode, Fatal, OrExit};
use anyhow::{anyhow, Context};
use graphql_schema::{FieldSignature, SchemaBuilder, SchemaFormat, SchemaModel};
use graphql_usage::{find_usages_in_source, UsageLocator, UsagePath};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What to search for, and where.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub field_path: String,
    pub schema_paths: Vec<PathBuf>,
    pub patterns: Vec<String>,
    pub fragment_definitions: bool,
}

/// Results for every document matched by the patterns, in search order.
#[derive(Debug)]
pub struct Report {
    pub target: FieldSignature,
    pub documents: Vec<DocumentReport>,
}

#[derive(Debug)]
pub struct DocumentReport {
    pub file: PathBuf,
    pub outcome: anyhow::Result<Vec<UsagePath>>,
}

impl DocumentReport {
    /// Usages found, empty when the document was skipped.
    #[must_use]
    pub fn usages(&self) -> &[UsagePath] {
        self.outcome.as_deref().unwrap_or_default()
    }
}

impl Report {
    #[must_use]
    pub fn usage_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.usages().len()).sum()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|doc| !doc.usages().is_empty())
            .count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.documents.iter().filter(|doc| doc.outcome.is_err()).count()
    }

    /// The code to exit with once the report has been printed.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.skipped_count() > 0 {
            ExitCode::DocumentsSkipped
        } else {
            ExitCode::Success
        }
    }
}

#[tracing::instrument(skip(request), fields(field = %request.field_path))]
pub fn run(request: &SearchRequest) -> Result<Report, Fatal> {
    let target = FieldSignature::parse(&request.field_path).or_exit(ExitCode::UsageError)?;
    let schema = load_schema(&request.schema_paths)?;
    schema.check_target(&target).or_exit(ExitCode::UsageError)?;

    let files = expand_patterns(&request.patterns)?;
    tracing::debug!(files = files.len(), "Expanded document patterns");

    let locator =
        UsageLocator::new(&schema, &target).with_fragment_definitions(request.fragment_definitions);
    let documents = files
        .into_iter()
        .map(|file| {
            let outcome = search_document(&locator, &file);
            if let Err(error) = &outcome {
                tracing::warn!(file = %file.display(), error = %format!("{error:#}"), "Skipping document");
            }
            DocumentReport { file, outcome }
        })
        .collect();

    Ok(Report { target, documents })
}

/// Read every schema file and merge them into one model.
#[tracing::instrument(skip(paths), fields(files = paths.len()))]
pub fn load_schema(paths: &[PathBuf]) -> Result<SchemaModel, Fatal> {
    if paths.is_empty() {
        return Err(anyhow!("No schema given; pass --schema-path or set `schema` in the config"))
            .or_exit(ExitCode::UsageError);
    }

    let mut builder = SchemaBuilder::new();
    for path in paths {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file {}", path.display()))
            .or_exit(ExitCode::IoError)?;
        let format = SchemaFormat::detect(path, &source);
        tracing::debug!(path = %path.display(), %format, "Loading schema source");
        builder
            .add_source(&source, format)
            .with_context(|| format!("Invalid schema in {}", path.display()))
            .or_exit(ExitCode::SchemaError)?;
    }

    let schema = builder.build().or_exit(ExitCode::SchemaError)?;
    tracing::debug!(types = schema.type_count(), "Schema loaded");
    Ok(schema)
}

/// Expand glob patterns into files, keeping glob order and dropping repeats.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, Fatal> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let mut matched = 0_usize;
        for expanded in expand_braces(pattern) {
            let entries = glob::glob(&expanded)
                .with_context(|| format!("Invalid glob pattern: {expanded}"))
                .or_exit(ExitCode::UsageError)?;

            for entry in entries {
                let path = entry
                    .context("Failed to expand search path")
                    .or_exit(ExitCode::IoError)?;
                if !path.is_file() {
                    continue;
                }
                matched += 1;
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }
        if matched == 0 {
            tracing::warn!(pattern, "Pattern matched no files");
        }
    }

    Ok(files)
}

/// Expand a single `{a,b}` group into one pattern per option.
fn expand_braces(pattern: &str) -> Vec<String> {
    if let (Some(start), Some(end)) = (pattern.find('{'), pattern.find('}')) {
        if start < end {
            let before = &pattern[..start];
            let after = &pattern[end + 1..];
            return pattern[start + 1..end]
                .split(',')
                .map(|option| format!("{before}{}{after}", option.trim()))
                .collect();
        }
    }

    vec![pattern.to_string()]
}

#[tracing::instrument(skip(locator), fields(file = %path.display()))]
fn search_document(locator: &UsageLocator<'_>, path: &Path) -> anyhow::Result<Vec<UsagePath>> {
    let source = fs::read_to_string(path).context("Failed to read file")?;
    Ok(find_usages_in_source(locator, &source)?)
}
