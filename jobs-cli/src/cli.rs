//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jobs_lib::model::Variant;

/// Which optional fields the form carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Position and reposting agreements, no company link
    Agreements,
    /// Optional company link, no agreements
    CompanyUrl,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Agreements => Variant::Agreements,
            VariantArg::CompanyUrl => Variant::CompanyUrl,
        }
    }
}

/// Draft file syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DraftFormat {
    Toml,
    Json,
}

impl std::fmt::Display for DraftFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftFormat::Toml => write!(f, "toml"),
            DraftFormat::Json => write!(f, "json"),
        }
    }
}

/// Job posting builder
///
/// Validates job posting drafts and renders the snippet for the jobs channel.
#[derive(Parser, Debug)]
#[command(name = "jobs")]
#[command(version)]
#[command(about = "Validate job posting drafts and render the channel snippet")]
pub struct Cli {
    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Locale of validation messages
    #[arg(short, long, global = true, default_value = "en")]
    pub locale: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by commands that read a draft.
#[derive(clap::Args, Debug, Clone)]
pub struct DraftArgs {
    /// Draft file, or `-` for stdin
    pub file: PathBuf,

    /// Form variant; inferred from the draft's fields when omitted
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// File syntax; inferred from the extension when omitted (default TOML)
    #[arg(long, value_enum)]
    pub format: Option<DraftFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a draft and list failing fields
    Check {
        #[command(flatten)]
        draft: DraftArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a draft and print the snippet
    Render {
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Print an empty draft to fill in
    Template {
        #[arg(long, value_enum, default_value_t = VariantArg::Agreements)]
        variant: VariantArg,

        #[arg(long, value_enum, default_value_t = DraftFormat::Toml)]
        format: DraftFormat,
    },
}
