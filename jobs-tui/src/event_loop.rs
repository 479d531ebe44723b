//! Main event loop.

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};

use crate::app::{App, Control};
use crate::error::TuiError;
use crate::events::{Event, convert_event};
use crate::render::build_frame;
use crate::terminal::TerminalGuard;

/// Run the page until the user quits or the input stream ends.
pub async fn run(app: &mut App, terminal: &mut TerminalGuard) -> Result<(), TuiError> {
    let mut events = EventStream::new();
    terminal.draw(&build_frame(app))?;
    info!("Event loop started");

    while let Some(event) = events.next().await {
        let Some(event) = convert_event(event?) else { continue };

        match event {
            Event::Key(combo) => {
                if app.handle_key(combo) == Control::Quit {
                    debug!("Quit requested");
                    break;
                }
            }
            Event::Resize { width, height } => debug!("Resized to {}x{}", width, height),
        }

        terminal.draw(&build_frame(app))?;
    }

    info!("Event loop stopped");
    Ok(())
}
