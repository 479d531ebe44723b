//! Non-interactive front end for the job posting builder.
//!
//! Exit codes:
//! - 0: Success
//! - 1: The draft failed validation
//! - 2: The draft could not be read or parsed

pub mod cli;
mod error;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use jobs_lib::model::{JobPostingDraft, Variant};
use jobs_lib::{Catalog, FieldErrors, render_snippet, validate};
use log::{debug, info};
use serde::Serialize;

pub use cli::{Cli, Commands, DraftArgs, DraftFormat, VariantArg};
pub use error::CliError;

/// Exit code for a draft that fails validation.
pub const INVALID_EXIT_CODE: i32 = 1;
/// Exit code for unreadable input and other errors.
pub const ERROR_EXIT_CODE: i32 = 2;

/// Pick the draft syntax from an explicit flag or the file extension.
pub fn detect_format(path: &Path, explicit: Option<DraftFormat>) -> DraftFormat {
    explicit.unwrap_or_else(|| match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => DraftFormat::Json,
        _ => DraftFormat::Toml,
    })
}

/// Parse draft text.
pub fn parse_draft(text: &str, format: DraftFormat) -> Result<JobPostingDraft, CliError> {
    Ok(match format {
        DraftFormat::Toml => toml::from_str(text)?,
        DraftFormat::Json => serde_json::from_str(text)?,
    })
}

/// Read a draft from a file (or `stdin` for `-`) and shape it to a variant.
pub fn load_draft(args: &DraftArgs, stdin: &mut dyn Read) -> Result<JobPostingDraft, CliError> {
    let text = if args.file.as_os_str() == "-" {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: args.file.clone(),
                source,
            })?;
        text
    } else {
        fs::read_to_string(&args.file).map_err(|source| CliError::Read {
            path: args.file.clone(),
            source,
        })?
    };

    let format = detect_format(&args.file, args.format);
    debug!("Parsing {} as {}", args.file.display(), format);
    let draft = parse_draft(&text, format)?;

    let variant = args.variant.map(Variant::from).unwrap_or_else(|| draft.variant());
    Ok(draft.conform_to(variant))
}

#[derive(Serialize)]
struct CheckReport<'a> {
    valid: bool,
    errors: BTreeMap<&'static str, &'a str>,
}

fn write_errors(out: &mut dyn Write, errors: &FieldErrors) -> io::Result<()> {
    for (field, message) in errors.iter() {
        writeln!(out, "{}: {}", field, message)?;
    }
    Ok(())
}

/// Run a parsed command line, writing results to `out` and diagnostics to `err`.
///
/// Drafts named `-` are read from `stdin`. Returns the process exit code.
pub fn run(
    cli: &Cli,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<i32, CliError> {
    let catalog = Catalog::for_locale(&cli.locale)?;

    match &cli.command {
        Commands::Check { draft, json } => {
            let draft = load_draft(draft, stdin)?;
            let errors = validate(&draft, &catalog);
            info!("Checked draft: {} error(s)", errors.len());

            if *json {
                let report = CheckReport {
                    valid: errors.is_empty(),
                    errors: errors.iter().map(|(f, m)| (f.name(), m)).collect(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else if errors.is_empty() {
                writeln!(out, "OK")?;
            } else {
                write_errors(out, &errors)?;
            }
            Ok(if errors.is_empty() { 0 } else { INVALID_EXIT_CODE })
        }
        Commands::Render { draft } => {
            let draft = load_draft(draft, stdin)?;
            let errors = validate(&draft, &catalog);
            if !errors.is_empty() {
                write_errors(err, &errors)?;
                return Ok(INVALID_EXIT_CODE);
            }
            write!(out, "{}", render_snippet(&draft))?;
            Ok(0)
        }
        Commands::Template { variant, format } => {
            let draft = JobPostingDraft::new((*variant).into());
            let text = match format {
                DraftFormat::Toml => toml::to_string(&draft)?,
                DraftFormat::Json => serde_json::to_string_pretty(&draft)? + "\n",
            };
            write!(out, "{}", text)?;
            Ok(0)
        }
    }
}

/// Map the outcome of [`run`] to an exit code, reporting failures on `err`.
pub fn exit_code(result: Result<i32, CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            ERROR_EXIT_CODE
        }
    }
}
