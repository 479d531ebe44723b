//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use unicode_width::UnicodeWidthChar;

use crate::render::{Frame, Tone};

/// A wrapper around stdout that restores the terminal on drop.
pub struct TerminalGuard {
    stdout: Stdout,
    scroll: usize,
}

impl TerminalGuard {
    /// Enter raw mode on the alternate screen.
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self { stdout, scroll: 0 })
    }

    /// Paint a frame, scrolling so the focused control stays visible.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let (width, height) = (width as usize, height as usize);
        self.scroll = scroll_for(self.scroll, frame.focus_line, frame.cursor.map(|(_, l)| l), height);

        queue!(self.stdout, cursor::Hide, Clear(ClearType::All))?;
        for (row, line) in frame.lines.iter().skip(self.scroll).take(height).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            let mut used = 0;
            for span in line {
                queue!(self.stdout, SetForegroundColor(tone_color(span.tone)))?;
                if matches!(span.tone, Tone::Title | Tone::Focused) {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                let text = clip(&span.text, width.saturating_sub(used));
                used += text.1;
                queue!(self.stdout, Print(text.0), SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }

        if let Some((col, line)) = frame.cursor
            && line >= self.scroll
            && line < self.scroll + height
        {
            queue!(
                self.stdout,
                cursor::MoveTo(col.min(width.saturating_sub(1)) as u16, (line - self.scroll) as u16),
                cursor::Show
            )?;
        }
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Reset,
        Tone::Title => Color::Cyan,
        Tone::Label => Color::White,
        Tone::Muted | Tone::Disabled => Color::DarkGrey,
        Tone::Error => Color::Red,
        Tone::Focused => Color::Yellow,
        Tone::Success => Color::Green,
    }
}

/// Cut `text` to at most `max` columns. Returns the slice and its width.
fn clip(text: &str, max: usize) -> (&str, usize) {
    let mut width = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            return (&text[..i], width);
        }
        width += w;
    }
    (text, width)
}

/// First visible line so that `focus` (and the cursor line) fit on screen.
fn scroll_for(current: usize, focus: usize, cursor: Option<usize>, height: usize) -> usize {
    if height == 0 {
        return current;
    }
    let bottom = cursor.unwrap_or(focus).max(focus);
    let mut scroll = current;
    if focus < scroll {
        scroll = focus;
    }
    if bottom >= scroll + height {
        scroll = bottom + 1 - height;
    }
    scroll
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_respects_wide_chars() {
        assert_eq!(clip("Kyiv", 10), ("Kyiv", 4));
        assert_eq!(clip("Kyiv", 2), ("Ky", 2));
        assert_eq!(clip("日本語", 5), ("日本", 4));
    }

    #[test]
    fn test_scroll_keeps_focus_visible() {
        assert_eq!(scroll_for(0, 5, Some(6), 20), 0);
        assert_eq!(scroll_for(0, 30, Some(31), 20), 12);
        assert_eq!(scroll_for(12, 3, None, 20), 3);
        assert_eq!(scroll_for(4, 4, Some(4), 0), 4);
    }
}
