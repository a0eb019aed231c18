//! Application state for the signup form.
//!
//! This module owns the draft being edited, the errors from the last
//! submit attempt and the list of accepted submissions, along with the
//! controllers that mutate them in response to user input.

use crate::config::Config;
use crate::domain::{ErrorMap, Field, Record, RecordValidator, SubmissionExporter};
use crate::infrastructure::{Clipboard, DisabledClipboard, SystemClipboard};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The form and list are interactive
    Normal,
    /// Help screen is displayed
    Help,
}

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the three text inputs
    Field(Field),
    /// The submit control
    Submit,
    /// The list of accepted submissions
    List,
}

/// Where the form is in its submit cycle.
///
/// `Validating` only holds while the validator runs. `Accepted` and
/// `Rejected` report the last submit until the user edits the draft again,
/// which returns the form to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Accepted,
    Rejected,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Record),
    Rejected(ErrorMap),
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use signup_form::application::App;
/// use signup_form::domain::{Field, Record};
///
/// let mut app = App::default();
/// app.set_field(Field::Name, "Alice");
/// app.set_field(Field::Age, "30");
/// app.set_field(Field::Email, "alice@x.com");
/// app.submit();
///
/// assert_eq!(app.submissions, vec![Record::new("Alice", "30", "alice@x.com")]);
/// assert!(app.draft.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Heading shown above the form
    pub title: String,
    /// Record currently being edited
    pub draft: Record,
    /// Messages from the most recent submit attempt
    pub errors: ErrorMap,
    /// Accepted records in submission order
    pub submissions: Vec<Record>,
    /// Widget receiving keyboard input
    pub focus: Focus,
    /// Cursor position within the focused field, in characters
    pub cursor_position: usize,
    /// Submit cycle state
    pub phase: FormPhase,
    /// Current application mode
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Index of the highlighted entry when the list has focus
    pub selected_entry: usize,
    /// Set when the user asks to leave
    pub should_quit: bool,
    clipboard: Box<dyn Clipboard>,
    needs_redraw: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        let clipboard: Box<dyn Clipboard> = if config.clipboard {
            Box::new(SystemClipboard::default())
        } else {
            Box::new(DisabledClipboard)
        };
        Self::with_clipboard(config, clipboard)
    }

    pub fn with_clipboard(config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            title: config.title.clone(),
            draft: Record::default(),
            errors: ErrorMap::new(),
            submissions: Vec::new(),
            focus: Focus::Field(Field::Name),
            cursor_position: 0,
            phase: FormPhase::Editing,
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
            selected_entry: 0,
            should_quit: false,
            clipboard,
            needs_redraw: true,
        }
    }

    fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Forces a redraw on the next loop iteration, e.g. after a resize.
    pub fn request_redraw(&mut self) {
        self.mark_dirty();
    }

    /// Returns whether the state changed since the last call, and resets
    /// the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit | Focus::List => None,
        }
    }

    // --- focus -------------------------------------------------------------

    /// Moves focus to `field` and places the cursor at the end of its value.
    pub fn focus_field(&mut self, field: Field) {
        self.focus = Focus::Field(field);
        self.cursor_position = self.draft.get(field).chars().count();
        self.mark_dirty();
    }

    fn set_focus(&mut self, focus: Focus) {
        self.status_message = None;
        match focus {
            Focus::Field(field) => self.focus_field(field),
            Focus::Submit | Focus::List => {
                self.focus = focus;
                self.cursor_position = 0;
                self.clamp_selection();
                self.mark_dirty();
            }
        }
    }

    /// Cycles name → age → email → submit → list → name. The list is
    /// skipped while it is empty.
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Field(field) => field.next().map(Focus::Field).unwrap_or(Focus::Submit),
            Focus::Submit if !self.submissions.is_empty() => Focus::List,
            Focus::Submit | Focus::List => Focus::Field(Field::Name),
        };
        self.set_focus(next);
    }

    pub fn focus_previous(&mut self) {
        let previous = match self.focus {
            Focus::Field(Field::Name) if !self.submissions.is_empty() => Focus::List,
            Focus::Field(Field::Name) => Focus::Submit,
            Focus::Field(field) => field.previous().map(Focus::Field).unwrap_or(Focus::Submit),
            Focus::Submit => Focus::Field(Field::Email),
            Focus::List => Focus::Submit,
        };
        self.set_focus(previous);
    }

    // --- field editor ------------------------------------------------------

    fn edit_focused<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut String, &mut usize),
    {
        let Some(field) = self.focused_field() else {
            return;
        };
        edit(self.draft.get_mut(field), &mut self.cursor_position);
        self.phase = FormPhase::Editing;
        self.status_message = None;
        self.mark_dirty();
    }

    /// Replaces the value of one field. Other fields and the error map are
    /// left untouched; no validation happens here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        if self.focused_field() == Some(field) {
            self.cursor_position = self.draft.get(field).chars().count();
        }
        self.phase = FormPhase::Editing;
        self.mark_dirty();
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit_focused(|value, cursor| {
            let offset = byte_offset(value, *cursor);
            value.insert(offset, c);
            *cursor += 1;
        });
    }

    pub fn backspace(&mut self) {
        self.edit_focused(|value, cursor| {
            if *cursor > 0 {
                let offset = byte_offset(value, *cursor - 1);
                value.remove(offset);
                *cursor -= 1;
            }
        });
    }

    pub fn delete_char(&mut self) {
        self.edit_focused(|value, cursor| {
            if *cursor < value.chars().count() {
                let offset = byte_offset(value, *cursor);
                value.remove(offset);
            }
        });
    }

    pub fn move_cursor_left(&mut self) {
        if self.focused_field().is_some() && self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.mark_dirty();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(field) = self.focused_field() {
            if self.cursor_position < self.draft.get(field).chars().count() {
                self.cursor_position += 1;
                self.mark_dirty();
            }
        }
    }

    pub fn move_cursor_home(&mut self) {
        if self.focused_field().is_some() {
            self.cursor_position = 0;
            self.mark_dirty();
        }
    }

    pub fn move_cursor_end(&mut self) {
        if let Some(field) = self.focused_field() {
            self.cursor_position = self.draft.get(field).chars().count();
            self.mark_dirty();
        }
    }

    // --- submission controller ---------------------------------------------

    /// Validates the draft and either accepts it into the submission list or
    /// records the field errors.
    ///
    /// On acceptance the record is appended, the draft is reset to empty and
    /// the error map is cleared. On rejection the error map is replaced with
    /// the new one and nothing else changes in the form data.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.phase = FormPhase::Validating;

        let outcome = match RecordValidator::validate(&self.draft) {
            Ok(record) => {
                tracing::info!(email = %record.email, "Accepted submission");
                self.submissions.push(record.clone());
                self.draft = Record::default();
                self.errors.clear();
                self.phase = FormPhase::Accepted;
                self.status_message = Some(format!("Accepted {}", record.email));
                self.focus_field(Field::Name);
                SubmitOutcome::Accepted(record)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "Rejected submission");
                self.errors = errors.clone();
                self.phase = FormPhase::Rejected;
                let count = errors.len();
                self.status_message = Some(format!(
                    "Please fix {} field{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                if let Some(field) = errors.first_field() {
                    self.focus_field(field);
                }
                SubmitOutcome::Rejected(errors)
            }
        };

        self.mark_dirty();
        outcome
    }

    // --- removal controller ------------------------------------------------

    /// Removes every submission whose email equals `email` and returns how
    /// many were removed. The remaining entries keep their order.
    pub fn delete_by_email(&mut self, email: &str) -> usize {
        let before = self.submissions.len();
        self.submissions.retain(|record| record.email != email);
        let removed = before - self.submissions.len();

        if removed > 0 {
            tracing::info!(email = %email, removed, "Removed submissions");
            self.status_message = Some(format!(
                "Removed {} entr{} for {}",
                removed,
                if removed == 1 { "y" } else { "ies" },
                email
            ));
            self.clamp_selection();
            if self.submissions.is_empty() && self.focus == Focus::List {
                self.focus = Focus::Submit;
            }
            self.mark_dirty();
        }
        removed
    }

    /// Deletes by the email of the highlighted entry.
    pub fn delete_selected(&mut self) -> usize {
        match self.selected_record() {
            Some(record) => {
                let email = record.email.clone();
                self.delete_by_email(&email)
            }
            None => 0,
        }
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.submissions.get(self.selected_entry)
    }

    pub fn select_next_entry(&mut self) {
        if self.selected_entry + 1 < self.submissions.len() {
            self.selected_entry += 1;
            self.mark_dirty();
        }
    }

    pub fn select_previous_entry(&mut self) {
        if self.selected_entry > 0 {
            self.selected_entry -= 1;
            self.mark_dirty();
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_entry = self
            .selected_entry
            .min(self.submissions.len().saturating_sub(1));
    }

    // --- clipboard ---------------------------------------------------------

    /// Copies the highlighted entry as JSON. An entry is only highlighted
    /// while the list has focus.
    pub fn copy_selected_as_json(&mut self) {
        let selected = match self.focus {
            Focus::List => self.selected_record(),
            Focus::Field(_) | Focus::Submit => None,
        };
        let text = match selected {
            Some(record) => SubmissionExporter::record_to_json(record),
            None => {
                self.status_message = Some("No entry selected".to_string());
                self.mark_dirty();
                return;
            }
        };
        self.copy_text(text.map_err(|e| e.to_string()), "entry as JSON");
    }

    /// Copies the whole submission list as CSV.
    pub fn copy_submissions_as_csv(&mut self) {
        let text = SubmissionExporter::to_csv(&self.submissions).map_err(|e| e.to_string());
        self.copy_text(text, "submissions as CSV");
    }

    fn copy_text(&mut self, text: Result<String, String>, what: &str) {
        let result = text.and_then(|text| self.clipboard.set_text(text).map_err(|e| e.to_string()));
        self.status_message = Some(match result {
            Ok(()) => format!("Copied {}", what),
            Err(error) => {
                tracing::warn!(error = %error, "Copy failed");
                format!("Copy failed: {}", error)
            }
        });
        self.mark_dirty();
    }

    // --- help --------------------------------------------------------------

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
        self.mark_dirty();
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
        self.mark_dirty();
    }

    pub fn scroll_help(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta);
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Byte offset of the `index`-th character, or the string length past the end.
fn byte_offset(value: &str, index: usize) -> usize {
    value
        .char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(value.len())
}
