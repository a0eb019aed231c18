//! Rendering checks against Ratatui's TestBackend

use super::common::keys::{fill_and_submit, press, type_text};
use super::common::terminal::{buffer_contains, position_of, render, row_of};
use crossterm::event::KeyCode;
use ratatui::layout::Position;
use ratatui::style::Color;
use signup_form::application::App;
use signup_form::config::DEFAULT_TITLE;

#[test]
fn test_empty_form() {
    let app = App::default();
    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, DEFAULT_TITLE));
    assert!(buffer_contains(buffer, "Name:"));
    assert!(buffer_contains(buffer, "Age:"));
    assert!(buffer_contains(buffer, "Email:"));
    assert!(buffer_contains(buffer, "[ Submit ]"));
    assert!(buffer_contains(buffer, "Submissions (0)"));
    assert!(!buffer_contains(buffer, "is required"));
}

#[test]
fn test_errors_render_beneath_their_field() {
    let mut app = App::default();
    press(&mut app, KeyCode::Enter);
    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    let name_row = row_of(buffer, "Name:").unwrap();
    let age_row = row_of(buffer, "Age:").unwrap();
    let email_row = row_of(buffer, "Email:").unwrap();
    assert_eq!(row_of(buffer, "Name is required"), Some(name_row + 1));
    assert_eq!(row_of(buffer, "Age is required"), Some(age_row + 1));
    assert_eq!(row_of(buffer, "Email is required"), Some(email_row + 1));
    assert!(buffer_contains(buffer, "Please fix 3 fields"));
}

#[test]
fn test_errors_are_styled_red() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Al", "17", "al@x.com");
    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    let (x, y) = position_of(buffer, "You need to be at least 18 years old").unwrap();
    let message = "You need to be at least 18 years old".len() as u16;
    for column in x..x + message {
        assert_eq!(buffer.cell((column, y)).unwrap().fg, Color::Red);
    }

    let (x, y) = position_of(buffer, "Age:").unwrap();
    assert_ne!(buffer.cell((x, y)).unwrap().fg, Color::Red);
}

#[test]
fn test_only_failing_field_shows_error() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Al", "17", "al@x.com");
    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "You need to be at least 18 years old"));
    assert!(!buffer_contains(buffer, "Name needs"));
    assert!(!buffer_contains(buffer, "Invalid email"));
}

#[test]
fn test_accepted_entries_are_listed_in_order() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Alice", "30", "alice@x.com");
    fill_and_submit(&mut app, "Bob", "41", "bob@x.com");
    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    assert!(buffer_contains(buffer, "Submissions (2)"));
    let alice = row_of(buffer, "Name: Alice  Age: 30  Email: alice@x.com  [X]").unwrap();
    let bob = row_of(buffer, "Name: Bob  Age: 41  Email: bob@x.com  [X]").unwrap();
    assert!(alice < bob);
}

#[test]
fn test_cursor_follows_typing() {
    let mut app = App::default();
    type_text(&mut app, "Al");
    let mut terminal = render(&app);

    // Header row, form border, then the name input after its label.
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(10, 2));
}

#[test]
fn test_help_popup() {
    let mut app = App::default();
    press(&mut app, KeyCode::F(1));
    let terminal = render(&app);
    assert!(buffer_contains(terminal.backend().buffer(), "SIGNUP FORM"));
}
