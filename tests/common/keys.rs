//! Helpers that drive the app through the input handler

use crossterm::event::{KeyCode, KeyModifiers};
use signup_form::application::App;
use signup_form::presentation::InputHandler;

pub fn press(app: &mut App, key: KeyCode) {
    InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
}

pub fn ctrl(app: &mut App, c: char) {
    InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::CONTROL);
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
    }
}

/// Types all three fields starting from the name field and presses Enter
pub fn fill_and_submit(app: &mut App, name: &str, age: &str, email: &str) {
    type_text(app, name);
    press(app, KeyCode::Tab);
    type_text(app, age);
    press(app, KeyCode::Tab);
    type_text(app, email);
    press(app, KeyCode::Enter);
}
