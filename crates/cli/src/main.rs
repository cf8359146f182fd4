mod exit_code;
mod inputs;
mod output;
mod search;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use exit_code::{ExitCode, Fatal, OrExit};
use inputs::SearchInputs;
use search::{Report, SearchRequest};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphql-usages")]
#[command(about = "Find every place a GraphQL schema field is selected", long_about = None)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Schema file, as SDL or an introspection result (repeat to merge several)
    #[arg(short, long = "schema-path", value_name = "FILE")]
    schema_path: Vec<PathBuf>,

    /// Field to search for, as `TypeName.fieldName`
    #[arg(short, long = "field-path", value_name = "TYPE.FIELD")]
    field_path: String,

    /// Glob patterns of documents to search
    #[arg(value_name = "PATHS")]
    paths: Vec<String>,

    /// Path to GraphQL config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project name (for multi-project configs)
    #[arg(short, long)]
    project: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Also walk top-level fragment definitions, prefixed by the fragment name
    #[arg(long)]
    fragments: bool,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for tooling
    Json,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let format = cli.format;
    let quiet = cli.quiet;
    match run(cli) {
        Ok(report) => {
            print_report(&report, format, quiet).exit();
        }
        Err(fatal) => {
            report_fatal(&fatal, format);
            fatal.code.exit();
        }
    }
}

fn run(cli: Cli) -> Result<Report, Fatal> {
    let inputs = SearchInputs::resolve(
        cli.schema_path,
        cli.paths,
        cli.config.as_deref(),
        cli.project.as_deref(),
    )?;

    search::run(&SearchRequest {
        field_path: cli.field_path,
        schema_paths: inputs.schema_paths,
        patterns: inputs.patterns,
        fragment_definitions: cli.fragments,
    })
}

fn print_report(report: &Report, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Human {
        for doc in &report.documents {
            if let Err(error) = &doc.outcome {
                eprintln!(
                    "{} {}: {error:#}",
                    "✗".red().bold(),
                    doc.file.display().to_string().yellow()
                );
            }
        }
    }

    if let Err(fatal) = write_results(&mut std::io::stdout().lock(), report, format) {
        report_fatal(&fatal, format);
        return fatal.code;
    }

    if format == OutputFormat::Human && !quiet {
        eprintln!("{}", output::summary(report).dimmed());
    }
    report.exit_code()
}

/// Write the results and flush, so a closed or full stdout is an I/O error.
fn write_results(
    out: &mut impl Write,
    report: &Report,
    format: OutputFormat,
) -> Result<(), Fatal> {
    let rendered = match format {
        OutputFormat::Human => output::render_human(report),
        OutputFormat::Json => {
            let mut json = output::render_json(report).or_exit(ExitCode::IoError)?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write results to stdout")
        .or_exit(ExitCode::IoError)
}

fn report_fatal(fatal: &Fatal, format: OutputFormat) {
    match format {
        OutputFormat::Human => eprintln!("{} {}", "✗".red().bold(), fatal.to_string().red()),
        OutputFormat::Json => {
            eprintln!(
                "{}",
                serde_json::json!({ "error": fatal.to_string(), "code": fatal.code.code() })
            );
        }
    }
    tracing::debug!(code = %fatal.code, "Exiting");
}

/// Initialize tracing; `RUST_LOG` picks the filter and logs go to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stderr is a TTY (handled by `colored` crate)
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        control::set_override(false);
    }
}



#[cfg(test)]
mod color_tests {
    use super::configure_colors;
    use colored::control::{self, SHOULD_COLORIZE};
    use std::sync::Mutex;

    const COLOR_VARS: [&str; 3] = ["NO_COLOR", "CLICOLOR", "CLICOLOR_FORCE"];

    // Env vars and the color override are process-global
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `configure_colors` with exactly `env` set and report whether an override was applied.
    fn override_for(env: &[(&str, &str)], force_color: bool, no_color: bool) -> Option<bool> {
        let _lock = ENV_LOCK.lock().unwrap();
        let saved: Vec<_> = COLOR_VARS
            .iter()
            .map(|name| (*name, std::env::var_os(name)))
            .collect();
        for name in COLOR_VARS {
            std::env::remove_var(name);
        }
        for (name, value) in env {
            std::env::set_var(name, value);
        }

        // Force the opposite of both outcomes to see whether configure_colors touched it
        control::set_override(true);
        configure_colors(force_color, no_color);
        let after_true = SHOULD_COLORIZE.should_colorize();
        control::set_override(false);
        configure_colors(force_color, no_color);
        let after_false = SHOULD_COLORIZE.should_colorize();

        control::unset_override();
        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }

        (after_true == after_false).then_some(after_true)
    }

    #[test]
    fn flags_win_over_environment() {
        assert_eq!(override_for(&[("NO_COLOR", "1")], true, false), Some(true));
        assert_eq!(override_for(&[("CLICOLOR_FORCE", "1")], false, true), Some(false));
    }

    #[test]
    fn no_color_presence_disables() {
        assert_eq!(override_for(&[("NO_COLOR", "")], false, false), Some(false));
        assert_eq!(
            override_for(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")], false, false),
            Some(false)
        );
    }

    #[test]
    fn clicolor_force_needs_a_nonzero_value() {
        assert_eq!(override_for(&[("CLICOLOR_FORCE", "1")], false, false), Some(true));
        assert_eq!(override_for(&[("CLICOLOR_FORCE", "0")], false, false), None);
        assert_eq!(override_for(&[("CLICOLOR_FORCE", "")], false, false), None);
    }

    #[test]
    fn clicolor_zero_disables_and_one_defers_to_tty() {
        assert_eq!(override_for(&[("CLICOLOR", "0")], false, false), Some(false));
        assert_eq!(override_for(&[("CLICOLOR", "1")], false, false), None);
        assert_eq!(override_for(&[], false, false), None);
    }
}
