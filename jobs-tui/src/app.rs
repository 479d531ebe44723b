//! The page container: form state, focus, and the generated snippet.

use std::collections::HashMap;

use jobs_lib::model::{Field, FieldKind, FieldValue, Occupation, Variant, Workplace};
use jobs_lib::{Action, Catalog, FormState, FormStatus, render_snippet};
use log::{debug, info, warn};

use crate::events::{Key, KeyCombo};
use crate::widgets::{TextEditResult, TextInput, cycle};

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Generate,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The job posting page.
///
/// Owns the form state and the generated text. The text is written only by
/// [`submit`](Self::submit).
pub struct App {
    catalog: Catalog,
    form: FormState,
    focus: usize,
    inputs: HashMap<Field, TextInput>,
    output: Option<String>,
    notice: Option<String>,
}

impl App {
    pub fn new(variant: Variant, catalog: Catalog) -> Self {
        let form = FormState::new(variant, &catalog);
        let inputs = form
            .draft()
            .fields()
            .filter_map(|field| {
                let text = form.draft().text(field)?;
                let input = match field.kind() {
                    FieldKind::LongText => TextInput::multiline(text),
                    _ => TextInput::new(text),
                };
                Some((field, input))
            })
            .collect();

        Self {
            catalog,
            form,
            focus: 0,
            inputs,
            output: None,
            notice: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The last generated snippet.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn into_output(self) -> Option<String> {
        self.output
    }

    /// One-line status message, e.g. why Generate did nothing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn input(&self, field: Field) -> Option<&TextInput> {
        self.inputs.get(&field)
    }

    /// Controls in tab order: the draft's fields, then Generate.
    pub fn focus_order(&self) -> Vec<Focus> {
        self.form
            .draft()
            .fields()
            .map(Focus::Field)
            .chain(std::iter::once(Focus::Generate))
            .collect()
    }

    pub fn focused(&self) -> Focus {
        let order = self.focus_order();
        order[self.focus.min(order.len() - 1)]
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, combo: KeyCombo) -> Control {
        let KeyCombo { key, modifiers } = combo;

        match key {
            Key::Escape => return Control::Quit,
            Key::Char('c' | 'q') if modifiers.ctrl => return Control::Quit,
            Key::Char('s') if modifiers.ctrl => {
                self.submit();
                return Control::Continue;
            }
            Key::Tab | Key::Down => {
                self.move_focus(1);
                return Control::Continue;
            }
            Key::BackTab | Key::Up => {
                self.move_focus(-1);
                return Control::Continue;
            }
            _ => {}
        }

        match self.focused() {
            Focus::Generate => {
                if matches!(key, Key::Enter | Key::Char(' ')) {
                    self.submit();
                }
            }
            Focus::Field(field) => self.edit_field(field, combo),
        }
        Control::Continue
    }

    /// Validate, render the snippet and store it.
    pub fn submit(&mut self) {
        let Some(submitting) = self.dispatch(Action::Submit) else { return };
        if submitting.status() != FormStatus::Submitting {
            self.form = submitting;
            self.notice = Some(match self.form.status() {
                FormStatus::Pristine if self.form.is_dirty() => {
                    "Already generated; change a field to regenerate".to_string()
                }
                FormStatus::Pristine => "Fill in the form first".to_string(),
                _ => format!("{} field(s) need attention", self.form.errors().len()),
            });
            if let Some(first) = self.form.errors().first() {
                self.focus_field(first);
            }
            return;
        }

        let text = render_snippet(submitting.draft());
        info!("Generated snippet ({} bytes)", text.len());
        self.output = Some(text);
        self.notice = None;
        self.form = submitting;
        if let Some(finished) = self.dispatch(Action::SubmitFinished) {
            self.form = finished;
        }
    }

    fn edit_field(&mut self, field: Field, combo: KeyCombo) {
        let KeyCombo { key, modifiers } = combo;

        let value = match field.kind() {
            FieldKind::Text | FieldKind::LongText => {
                let Some(input) = self.inputs.get_mut(&field) else { return };
                if key == Key::Enter && !input.is_multiline() {
                    self.move_focus(1);
                    return;
                }
                match input.handle_key(key, modifiers) {
                    TextEditResult::Changed => FieldValue::Text(input.text().to_string()),
                    TextEditResult::Handled | TextEditResult::Ignored => return,
                }
            }
            FieldKind::Flag => {
                if !matches!(key, Key::Char(' ') | Key::Enter) {
                    return;
                }
                let checked = self.form.draft().flag(field).unwrap_or(false);
                FieldValue::Flag(!checked)
            }
            FieldKind::Occupation => {
                let Some(forward) = cycle_direction(key) else { return };
                let current = self.form.draft().occupation();
                FieldValue::Occupation(cycle(&Occupation::ALL, current, forward))
            }
            FieldKind::Workplace => {
                let Some(forward) = cycle_direction(key) else { return };
                let current = self.form.draft().workplace();
                FieldValue::Workplace(cycle(&Workplace::ALL, current, forward))
            }
        };

        if let Some(next) = self.dispatch(Action::Edit(field, value)) {
            self.form = next;
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let leaving = self.focused();
        let len = order.len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;

        if let Focus::Field(field) = leaving
            && let Some(next) = self.dispatch(Action::Touch(field))
        {
            self.form = next;
        }
        debug!("Focus {:?} -> {:?}", leaving, self.focused());
    }

    fn focus_field(&mut self, field: Field) {
        if let Some(index) = self.focus_order().iter().position(|f| *f == Focus::Field(field)) {
            self.focus = index;
        }
    }

    /// Run the reducer; a rejected action is logged and leaves the form as is.
    fn dispatch(&mut self, action: Action) -> Option<FormState> {
        match self.form.reduce(action, &self.catalog) {
            Ok(next) => Some(next),
            Err(e) => {
                warn!("Rejected form action: {}", e);
                self.notice = Some(e.to_string());
                None
            }
        }
    }
}

/// Left steps back through a select; Right and Space step forward.
fn cycle_direction(key: Key) -> Option<bool> {
    match key {
        Key::Left => Some(false),
        Key::Right | Key::Char(' ') => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(variant: Variant) -> App {
        App::new(variant, Catalog::english().unwrap())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCombo::plain(Key::Char(c)));
        }
    }

    fn tab(app: &mut App) {
        app.handle_key(KeyCombo::plain(Key::Tab));
    }

    /// Fill the agreements form top to bottom with the keyboard.
    fn fill(app: &mut App) {
        type_text(app, "Backend Engineer");
        tab(app);
        type_text(app, "Kyiv");
        tab(app);
        type_text(app, "Acme");
        tab(app);
        tab(app); // workplace
        tab(app); // occupation
        type_text(app, "2000$-3000$");
        tab(app);
        type_text(app, "kotliner");
        tab(app);
        type_text(app, "Great job");
        tab(app);
        app.handle_key(KeyCombo::plain(Key::Char(' ')));
        tab(app);
        app.handle_key(KeyCombo::plain(Key::Enter));
        tab(app);
    }

    #[test]
    fn test_focus_order_and_wrap() {
        let mut app = app(Variant::Agreements);
        assert_eq!(app.focused(), Focus::Field(Field::Title));
        assert_eq!(*app.focus_order().last().unwrap(), Focus::Generate);

        app.handle_key(KeyCombo::plain(Key::BackTab));
        assert_eq!(app.focused(), Focus::Generate);
        app.handle_key(KeyCombo::plain(Key::Down));
        assert_eq!(app.focused(), Focus::Field(Field::Title));
    }

    #[test]
    fn test_leaving_a_field_shows_its_error() {
        let mut app = app(Variant::Agreements);
        assert_eq!(app.form().visible_error(Field::Title), None);
        tab(&mut app);
        assert_eq!(app.form().visible_error(Field::Title), Some("Vacancy title is required"));
    }

    #[test]
    fn test_select_and_checkbox_keys() {
        let mut app = app(Variant::Agreements);
        app.focus_field(Field::Workplace);
        app.handle_key(KeyCombo::plain(Key::Left));
        assert_eq!(app.form().draft().workplace(), Workplace::Remote);

        app.focus_field(Field::Occupation);
        app.handle_key(KeyCombo::plain(Key::Right));
        assert_eq!(app.form().draft().occupation(), Occupation::PartTime);

        app.focus_field(Field::PositionAgreement);
        app.handle_key(KeyCombo::plain(Key::Char(' ')));
        assert_eq!(app.form().draft().flag(Field::PositionAgreement), Some(true));
        app.handle_key(KeyCombo::plain(Key::Char(' ')));
        assert_eq!(app.form().draft().flag(Field::PositionAgreement), Some(false));
    }

    #[test]
    fn test_generate_writes_output() {
        let mut app = app(Variant::Agreements);
        fill(&mut app);
        assert_eq!(app.focused(), Focus::Generate);
        assert!(app.form().can_submit());

        app.handle_key(KeyCombo::plain(Key::Enter));
        let output = app.output().unwrap();
        assert!(output.starts_with("Vacancy: Backend Engineer\n"));
        assert!(output.ends_with("Contact: @kotliner\n"));
        assert_eq!(app.form().status(), FormStatus::Pristine);
        assert!(!app.form().can_submit());
    }

    #[test]
    fn test_generate_again_without_changes() {
        let mut app = app(Variant::Agreements);
        fill(&mut app);
        app.handle_key(KeyCombo::plain(Key::Enter));
        let first = app.output().map(str::to_string);

        app.handle_key(KeyCombo::ctrl('s'));
        assert_eq!(app.notice(), Some("Already generated; change a field to regenerate"));
        assert_eq!(app.output().map(str::to_string), first);
    }

    #[test]
    fn test_generate_on_empty_form() {
        let mut app = app(Variant::Agreements);
        app.handle_key(KeyCombo::ctrl('s'));
        assert_eq!(app.notice(), Some("Fill in the form first"));
        assert!(app.output().is_none());
    }

    #[test]
    fn test_refused_submit_focuses_first_error() {
        let mut app = app(Variant::CompanyUrl);
        type_text(&mut app, "Backend Engineer");
        app.handle_key(KeyCombo::ctrl('s'));

        assert!(app.output().is_none());
        assert_eq!(app.focused(), Focus::Field(Field::Location));
        assert_eq!(app.notice(), Some("5 field(s) need attention"));
        assert!(app.form().visible_error(Field::Salary).is_some());
    }

    #[test]
    fn test_enter_in_description_breaks_line() {
        let mut app = app(Variant::Agreements);
        app.focus_field(Field::Description);
        type_text(&mut app, "one");
        app.handle_key(KeyCombo::plain(Key::Enter));
        type_text(&mut app, "two");

        assert_eq!(app.form().draft().description(), "one\ntwo");
        assert_eq!(app.focused(), Focus::Field(Field::Description));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(Variant::Agreements);
        assert_eq!(app.handle_key(KeyCombo::plain(Key::Escape)), Control::Quit);
        assert_eq!(app.handle_key(KeyCombo::ctrl('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCombo::plain(Key::Char('q'))), Control::Continue);
    }
}
