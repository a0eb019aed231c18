//! End-to-end form flows driven through the input handler

use super::common::keys::{ctrl, fill_and_submit, press, type_text};
use crossterm::event::KeyCode;
use signup_form::application::{App, Focus, FormPhase};
use signup_form::domain::{ErrorMap, Field, Record};
use signup_form::infrastructure::MemoryClipboard;
use signup_form::Config;

fn app_with_clipboard() -> (App, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let app = App::with_clipboard(&Config::default(), Box::new(clipboard.clone()));
    (app, clipboard)
}

#[test]
fn test_underage_submission_is_rejected() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Al", "17", "al@x.com");

    let mut expected = ErrorMap::new();
    expected.insert(Field::Age, "You need to be at least 18 years old");
    assert_eq!(app.errors, expected);
    assert!(app.submissions.is_empty());
    assert_eq!(app.draft, Record::new("Al", "17", "al@x.com"));
    assert_eq!(app.phase, FormPhase::Rejected);
}

#[test]
fn test_valid_submission_is_accepted() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Alice", "30", "alice@x.com");

    assert_eq!(
        app.submissions.last(),
        Some(&Record::new("Alice", "30", "alice@x.com"))
    );
    assert_eq!(app.draft, Record::new("", "", ""));
    assert!(app.errors.is_empty());
    assert_eq!(app.focus, Focus::Field(Field::Name));
}

#[test]
fn test_correcting_a_rejected_draft() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Al", "17", "al@x.com");
    assert_eq!(app.focus, Focus::Field(Field::Age));

    // Replace "17" with "21" in place; the rest of the draft is kept.
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "21");
    assert_eq!(app.errors.len(), 1, "errors stay until the next submit");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.submissions, vec![Record::new("Al", "21", "al@x.com")]);
    assert!(app.errors.is_empty());
}

#[test]
fn test_deleting_duplicate_emails_keeps_order() {
    let mut app = App::default();
    fill_and_submit(&mut app, "First", "20", "first@x.com");
    fill_and_submit(&mut app, "Dup one", "21", "dup@x.com");
    fill_and_submit(&mut app, "Middle", "22", "middle@x.com");
    fill_and_submit(&mut app, "Dup two", "23", "dup@x.com");
    fill_and_submit(&mut app, "Last", "24", "last@x.com");
    assert_eq!(app.submissions.len(), 5);

    // name -> age -> email -> submit -> list
    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.focus, Focus::List);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('x'));

    let names: Vec<&str> = app.submissions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Middle", "Last"]);
    assert_eq!(app.status_message.as_deref(), Some("Removed 2 entries for dup@x.com"));
}

#[test]
fn test_removing_last_entry_returns_focus_to_form() {
    let mut app = App::default();
    fill_and_submit(&mut app, "Alice", "30", "alice@x.com");
    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Delete);

    assert!(app.submissions.is_empty());
    assert_eq!(app.focus, Focus::Submit);
}

#[test]
fn test_copy_list_as_csv() {
    let (mut app, clipboard) = app_with_clipboard();
    fill_and_submit(&mut app, "Alice", "30", "alice@x.com");
    fill_and_submit(&mut app, "Bob", "41", "bob@x.com");

    ctrl(&mut app, 'e');
    assert_eq!(
        clipboard.last().as_deref(),
        Some("name,age,email\nAlice,30,alice@x.com\nBob,41,bob@x.com\n")
    );
    assert_eq!(app.status_message.as_deref(), Some("Copied submissions as CSV"));
}

#[test]
fn test_copy_selected_entry_as_json() {
    let (mut app, clipboard) = app_with_clipboard();
    fill_and_submit(&mut app, "Alice", "30", "alice@x.com");
    fill_and_submit(&mut app, "Bob", "41", "bob@x.com");
    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Char('j'));
    ctrl(&mut app, 'y');

    let copied: Record = serde_json::from_str(&clipboard.last().unwrap()).unwrap();
    assert_eq!(copied, Record::new("Bob", "41", "bob@x.com"));
}
