use crate::application::{App, AppMode, Focus, FormPhase};
use crate::domain::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 7;
// Three inputs with an error line each, the submit control, and borders.
const FORM_HEIGHT: u16 = Field::ALL.len() as u16 * 2 + 1 + 2;

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_form(f, app, chunks[1]);
    render_submissions(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str()).style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn field_row(index: usize) -> u16 {
    index as u16 * 2
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Form");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(Field::ALL.len() * 2 + 1);
    for field in Field::ALL {
        let focused = app.focus == Focus::Field(field);
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value_style = if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        let value = app.draft.get(field);

        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH), label_style),
            Span::styled(if value.is_empty() { " ".to_string() } else { value.to_string() }, value_style),
        ]));
        lines.push(match app.errors.get(field) {
            Some(message) => Line::from(Span::styled(
                format!("{:width$}{}", "", message, width = LABEL_WIDTH),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        });
    }

    let submit_style = if app.focus == Focus::Submit {
        Style::default().bg(Color::Green).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    lines.push(Line::from(vec![
        Span::raw(format!("{:width$}", "", width = LABEL_WIDTH)),
        Span::styled("[ Submit ]", submit_style),
    ]));

    f.render_widget(Paragraph::new(lines), inner);

    if app.mode == AppMode::Normal {
        if let Some(field) = app.focused_field() {
            let index = Field::ALL.iter().position(|&candidate| candidate == field).unwrap_or(0);
            let before: String = app.draft.get(field).chars().take(app.cursor_position).collect();
            let x = inner.x + LABEL_WIDTH as u16 + Span::raw(before).width() as u16;
            let y = inner.y + field_row(index);
            if x < inner.right() && y < inner.bottom() {
                f.set_cursor_position(Position::new(x, y));
            }
        }
    }
}

fn render_submissions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .submissions
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Color::Yellow)),
                Span::raw(record.name.clone()),
                Span::styled("  Age: ", Style::default().fg(Color::Yellow)),
                Span::raw(record.age.clone()),
                Span::styled("  Email: ", Style::default().fg(Color::Yellow)),
                Span::raw(record.email.clone()),
                Span::raw("  "),
                Span::styled("[X]", Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let list_focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Submissions ({})", app.submissions.len()))
        .border_style(if list_focused {
            Style::default().fg(Color::LightBlue)
        } else {
            Style::default()
        });

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::LightBlue).fg(Color::Black));

    let mut state = ListState::default();
    if list_focused && !app.submissions.is_empty() {
        state.select(Some(app.selected_entry));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                match app.focus {
                    Focus::Field(_) => "Tab/↑↓: move | Enter: submit | F1: help | Ctrl+Q: quit".to_string(),
                    Focus::Submit => "Enter/Space: submit | Tab: next | F1: help | Ctrl+Q: quit".to_string(),
                    Focus::List => "↑↓: select | Enter/Del/x: remove | Ctrl+Y: copy JSON | Ctrl+E: copy CSV".to_string(),
                }
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let style = match (app.mode, app.phase) {
        (AppMode::Help, _) => Style::default().fg(Color::Cyan),
        (AppMode::Normal, FormPhase::Accepted) => Style::default().fg(Color::Green),
        (AppMode::Normal, FormPhase::Rejected) => Style::default().fg(Color::Red),
        (AppMode::Normal, FormPhase::Editing | FormPhase::Validating) => Style::default(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = popup_area(f.area());
    let total = HELP_TEXT.lines().count();
    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll.min(total.saturating_sub(visible));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!("Help {}/{}", offset + 1, total));
    let help = Paragraph::new(HELP_TEXT)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

// Centered, leaving a tenth of the screen free on every side.
fn popup_area(area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .areas(middle);
    center
}

const HELP_TEXT: &str = r#"SIGNUP FORM

=== FIELDS ===
Name            At least 2 characters
Age             A whole number, 18 or older
Email           A valid email address, e.g. alice@example.com

Fields are checked when you submit. Every failing field shows
its message underneath; fix them and submit again.

=== MOVING AROUND ===
Tab / ↓         Next field, then Submit, then the list
Shift+Tab / ↑   Previous
←→ Home End     Move the cursor inside a field
Backspace/Del   Delete characters

=== SUBMITTING ===
Enter           Submit from any field or from [ Submit ]
Space           Submit when [ Submit ] is focused

Accepted entries are added to the end of the list and the
form is cleared.

=== SUBMISSION LIST ===
↑↓ or j/k       Select an entry
Enter/Del/x     Remove the entry. Every entry with the same
                email is removed too.
Ctrl+Y          Copy the selected entry as JSON
Ctrl+E          Copy all entries as CSV

Entries only live for this session.

=== OTHER ===
F1              Show this help
Esc/F1/q        Close this help window
Ctrl+Q/Ctrl+C   Quit"#;
