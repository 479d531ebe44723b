//! `jobs` - validate job posting drafts and render the channel snippet.
//!
//! Commands:
//! - `jobs check <file>`: list failing fields
//! - `jobs render <file>`: print the snippet of a valid draft
//! - `jobs template`: print an empty draft

use std::io;

use clap::Parser;
use jobs_cli::{Cli, exit_code, run};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    let mut stderr = io::stderr().lock();
    let result = run(&cli, &mut io::stdin().lock(), &mut io::stdout().lock(), &mut stderr);
    std::process::exit(exit_code(result, &mut stderr));
}
