use crate::application::{App, AppMode, Focus};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    app.quit();
                    return;
                }
                KeyCode::Char('e') => {
                    app.copy_submissions_as_csv();
                    return;
                }
                KeyCode::Char('y') => {
                    app.copy_selected_as_json();
                    return;
                }
                _ => {}
            }
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::F(1) => {
                app.open_help();
                return;
            }
            KeyCode::Tab => {
                app.focus_next();
                return;
            }
            KeyCode::BackTab => {
                app.focus_previous();
                return;
            }
            _ => {}
        }

        match app.focus {
            Focus::Field(_) => Self::handle_field(app, key, modifiers),
            Focus::Submit => Self::handle_submit(app, key),
            Focus::List => Self::handle_list(app, key),
        }
    }

    fn handle_field(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => {
                app.submit();
            }
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Delete => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_submit(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.submit();
            }
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            _ => {}
        }
    }

    fn handle_list(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if app.selected_entry == 0 {
                    app.focus_previous();
                } else {
                    app.select_previous_entry();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => app.select_next_entry(),
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('x') => {
                app.delete_selected();
            }
            KeyCode::Esc => app.focus_next(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help(1),
            KeyCode::PageUp => app.scroll_help(-5),
            KeyCode::PageDown => app.scroll_help(5),
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
