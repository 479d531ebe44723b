mod app;
mod error;
mod event_loop;
mod events;
mod paths;
mod render;
mod settings;
mod terminal;
mod widgets;

use std::fs::{self, File};

use jobs_lib::Catalog;
use log::{error, info};
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::error::TuiError;
use crate::settings::Settings;
use crate::terminal::TerminalGuard;

fn init_logging(settings: &Settings) -> Result<(), TuiError> {
    let Some(dir) = paths::log_dir() else { return Ok(()) };
    fs::create_dir_all(&dir)?;
    paths::rotate_logs(&dir);
    let log_file = File::create(dir.join(paths::LATEST_LOG))?;
    WriteLogger::init(settings.level_filter()?, Config::default(), log_file)?;
    Ok(())
}

async fn run() -> Result<Option<String>, TuiError> {
    let settings = match paths::settings_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    init_logging(&settings)?;
    info!(
        "Starting with locale '{}' and variant '{}'",
        settings.locale, settings.variant
    );

    let catalog = Catalog::for_locale(&settings.locale)?;
    let mut app = App::new(settings.variant, catalog);

    {
        let mut terminal = TerminalGuard::new()?;
        event_loop::run(&mut app, &mut terminal).await?;
    }

    Ok(app.into_output())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(Some(text)) => print!("{}", text),
        Ok(None) => {}
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
