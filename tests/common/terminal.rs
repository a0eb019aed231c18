//! TUI testing utilities using Ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use signup_form::application::App;
use signup_form::presentation::render_ui;

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Render the whole UI once and return the terminal for inspection
pub fn render(app: &App) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal();
    terminal
        .draw(|f| render_ui(f, app))
        .expect("Failed to draw UI");
    terminal
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Check if the buffer contains a string anywhere
pub fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
    buffer_to_string(buffer).contains(text)
}

/// Row index of the first line containing `text`
pub fn row_of(buffer: &Buffer, text: &str) -> Option<usize> {
    buffer_to_string(buffer)
        .lines()
        .position(|line| line.contains(text))
}

/// Column and row of the first cell where `text` starts
pub fn position_of(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
    buffer_to_string(buffer)
        .lines()
        .enumerate()
        .find_map(|(y, line)| {
            let byte = line.find(text)?;
            // One symbol per cell, so count chars rather than bytes.
            let x = line[..byte].chars().count();
            Some((x as u16, y as u16))
        })
}
