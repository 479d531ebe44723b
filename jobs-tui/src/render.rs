//! Lay the page out as styled lines.
//!
//! Building the frame is pure; [`crate::terminal`] only paints it.

use jobs_lib::{DESCRIPTION_MAX_LENGTH, description_length};
use jobs_lib::model::{Field, FieldKind, Occupation, Workplace};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

const TITLE: &str = "Job Posting Builder";
const INTRO: &str = "Please fill in all fields of the form and send the generated job description to a moderator.";
const OUTPUT_HINT: &str = "Copy this snippet and send it to one of the moderators";
const KEY_HELP: &str = "Tab/Shift+Tab move  Space toggle  ←/→ choose  Ctrl+S generate  Esc quit";

/// Colour role of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Label,
    Muted,
    Error,
    Focused,
    Disabled,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub type Line = Vec<Span>;

/// A fully laid out page.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
    /// Terminal cursor for the focused text input: (column, line).
    pub cursor: Option<(usize, usize)>,
    /// First line of the focused control, kept on screen when scrolling.
    pub focus_line: usize,
}

impl Frame {
    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Lines without styling.
    #[cfg(test)]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }
}

/// Field caption as shown in the form.
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Title => "Vacancy",
        Field::Location => "Location",
        Field::Company => "Company",
        Field::CompanyUrl => "Company link",
        Field::Workplace => "Workplace",
        Field::Occupation => "Employment",
        Field::Salary => "Salary fork",
        Field::Contact => "Nickname in Telegram",
        Field::Description => "Description",
        Field::PositionAgreement => "I am posting a vacancy for the position of Kotlin developer",
        Field::FrequencyAgreement => {
            "I agree that the vacancy is reposted for free at most once a month"
        }
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Title => "Senior Backend Engineer",
        Field::Location => "Ukraine, Kyiv",
        Field::Company => "JetBrains",
        Field::CompanyUrl => "https://jetbrains.com",
        Field::Salary => "2000$-3000$",
        Field::Contact => "Kotliner",
        Field::Description => "Keep it short and informative. Max 1000 symbols.",
        _ => "",
    }
}

const INDENT: &str = "  ";
const INPUT_PREFIX: &str = "  > ";
const AREA_PREFIX: &str = "  │ ";

/// Build the frame for the current page state.
pub fn build_frame(app: &App) -> Frame {
    let mut frame = Frame::default();
    let focused = app.focused();

    frame.push(vec![Span::new(TITLE, Tone::Title)]);
    frame.push(vec![Span::new(INTRO, Tone::Muted)]);
    frame.blank();

    let draft = app.form().draft();
    for field in draft.fields() {
        let is_focused = focused == Focus::Field(field);
        if is_focused {
            frame.focus_line = frame.lines.len();
        }

        match field.kind() {
            FieldKind::Flag => {
                let checked = draft.flag(field).unwrap_or(false);
                let mark = if checked { "[x] " } else { "[ ] " };
                frame.push(vec![
                    Span::new(INDENT, Tone::Plain),
                    Span::new(mark, focus_tone(is_focused, Tone::Plain)),
                    Span::new(field_label(field), Tone::Plain),
                ]);
            }
            FieldKind::Occupation => {
                push_label(&mut frame, field, is_focused, None);
                let current = draft.occupation();
                push_choices(&mut frame, &Occupation::ALL.map(|o| (o.label(), o == current)), is_focused);
            }
            FieldKind::Workplace => {
                push_label(&mut frame, field, is_focused, None);
                let current = draft.workplace();
                push_choices(&mut frame, &Workplace::ALL.map(|w| (w.label(), w == current)), is_focused);
            }
            FieldKind::Text | FieldKind::LongText => {
                let counter = (field.kind() == FieldKind::LongText)
                    .then(|| app.input(field).map_or(0, |input| description_length(input.text())));
                push_label(&mut frame, field, is_focused, counter);
                push_text(&mut frame, app, field, is_focused);
            }
        }

        if let Some(message) = app.form().visible_error(field) {
            frame.push(vec![
                Span::new(INDENT, Tone::Plain),
                Span::new(message, Tone::Error),
            ]);
        }
        frame.blank();
    }

    let enabled = app.form().can_submit();
    if focused == Focus::Generate {
        frame.focus_line = frame.lines.len();
    }
    let button_tone = match (enabled, focused == Focus::Generate) {
        (false, _) => Tone::Disabled,
        (true, true) => Tone::Focused,
        (true, false) => Tone::Label,
    };
    let mut button = vec![
        Span::new(INDENT, Tone::Plain),
        Span::new("[ Generate ]", button_tone),
    ];
    if let Some(notice) = app.notice() {
        button.push(Span::new(format!("  {}", notice), Tone::Error));
    }
    frame.push(button);
    frame.push(vec![Span::new(KEY_HELP, Tone::Muted)]);

    if let Some(output) = app.output() {
        frame.blank();
        frame.push(vec![Span::new(OUTPUT_HINT, Tone::Success)]);
        for line in output.lines() {
            frame.push(vec![
                Span::new(AREA_PREFIX, Tone::Muted),
                Span::new(line, Tone::Plain),
            ]);
        }
    }

    frame
}

fn focus_tone(focused: bool, otherwise: Tone) -> Tone {
    if focused { Tone::Focused } else { otherwise }
}

fn push_label(frame: &mut Frame, field: Field, focused: bool, counter: Option<usize>) {
    let mut line = vec![Span::new(field_label(field), focus_tone(focused, Tone::Label))];
    if field.is_required() {
        line.push(Span::new(" *", Tone::Error));
    }
    if let Some(length) = counter {
        let tone = if length > DESCRIPTION_MAX_LENGTH { Tone::Error } else { Tone::Muted };
        line.push(Span::new(format!("  {}/{}", length, DESCRIPTION_MAX_LENGTH), tone));
    }
    frame.push(line);
}

fn push_choices(frame: &mut Frame, options: &[(&str, bool)], focused: bool) {
    let mut line = vec![Span::new(INPUT_PREFIX, Tone::Muted)];
    for (label, selected) in options {
        let tone = match (*selected, focused) {
            (true, true) => Tone::Focused,
            (true, false) => Tone::Label,
            (false, _) => Tone::Muted,
        };
        let text = if *selected { format!("({}) ", label) } else { format!(" {}  ", label) };
        line.push(Span::new(text, tone));
    }
    frame.push(line);
}

fn push_text(frame: &mut Frame, app: &App, field: Field, focused: bool) {
    let Some(input) = app.input(field) else { return };

    let prefix = if input.is_multiline() { AREA_PREFIX } else { INPUT_PREFIX };
    let first_line = frame.lines.len();

    if input.is_empty() {
        frame.push(vec![
            Span::new(prefix, Tone::Muted),
            Span::new(placeholder(field), Tone::Disabled),
        ]);
    } else {
        for text_line in input.text().split('\n') {
            frame.push(vec![
                Span::new(prefix, Tone::Muted),
                Span::new(text_line, Tone::Plain),
            ]);
        }
    }

    if focused {
        let (line, col) = input.cursor_line_col();
        let text_line = input.text().split('\n').nth(line).unwrap_or("");
        let before: String = text_line.chars().take(col).collect();
        frame.cursor = Some((prefix.width() + before.width(), first_line + line));
    }
}
