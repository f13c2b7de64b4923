//! Blocking alert dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;

/// Width of the dialog, including borders.
const DIALOG_WIDTH: u16 = 44;

/// Height of the dialog, including borders.
const DIALOG_HEIGHT: u16 = 5;

/// Render `message` in a centered box over whatever is below.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let dialog = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    let text = vec![
        Line::styled(message, theme::bold()),
        Line::styled("press any key", theme::dimmed()),
    ];
    let block = Block::default()
        .title("Alert")
        .borders(Borders::ALL)
        .border_style(theme::alert());
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, dialog);
    frame.render_widget(paragraph, dialog);
}

/// A `width`x`height` rect centered in `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
