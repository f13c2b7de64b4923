//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::dragdrop::ListTarget;

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.alert.is_some() {
        "Any key: dismiss"
    } else if app.drag.is_active() {
        "←→/Tab: carry | Enter: drop | Esc: cancel"
    } else {
        match app.focus {
            PanelFocus::Form => "Enter: add project | ↑↓: field | Tab: switch panel | Esc: quit",
            PanelFocus::List(_) => "Space: pick up | ↑↓/jk: navigate | Tab: switch panel | Esc: quit",
        }
    };

    let active = app.list(ListTarget::Active).projects.len();
    let finished = app.list(ListTarget::Finished).projects.len();

    let status_line = Line::from(vec![
        Span::styled(concat!("ProjBoard v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(theme::ACTIVE_TITLE)),
        Span::raw(format!(" {active} active ")),
        Span::styled("●", theme::normal().fg(theme::FINISHED_TITLE)),
        Span::raw(format!(" {finished} finished")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
