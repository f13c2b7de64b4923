//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success color, used for the finished list.
pub const SUCCESS: Color = Color::Green;

/// Warning color.
pub const WARNING: Color = Color::Yellow;

/// Error color, used for the alert dialog.
pub const ERROR: Color = Color::Red;

/// Panel title color for the active list.
pub const ACTIVE_TITLE: Color = Color::Blue;

/// Panel title color for the finished list.
pub const FINISHED_TITLE: Color = SUCCESS;

/// Background of a list that will accept the current drag.
pub const DROPPABLE_BG: Color = Color::Rgb(40, 60, 40);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (people count, descriptions).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for the item being dragged.
#[must_use]
pub fn dragging() -> Style {
    Style::default()
        .fg(WARNING)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

/// Style for a list highlighted as a drop target.
#[must_use]
pub fn droppable() -> Style {
    Style::default()
        .fg(SUCCESS)
        .bg(DROPPABLE_BG)
        .add_modifier(Modifier::BOLD)
}

/// Warning text (bold yellow).
#[must_use]
pub fn warning() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Border and title style of the alert dialog.
#[must_use]
pub fn alert() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}
