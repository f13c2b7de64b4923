//! Terminal UI rendering.

pub mod alert;
pub mod form;
pub mod project_list;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::Line,
    widgets::Paragraph,
};
use thiserror::Error;

use crate::app::{App, FormField};
use crate::dragdrop::ListTarget;

/// Smallest terminal the board can be laid out in.
pub const MIN_WIDTH: u16 = 40;
/// Smallest terminal height the board can be laid out in.
pub const MIN_HEIGHT: u16 = 18;

/// Rows taken by one project in a list (title, people, description).
pub const ITEM_HEIGHT: u16 = 3;

/// Errors raised while placing the board on screen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    /// The terminal has no room for the form and both lists.
    #[error("terminal too small ({width}x{height}, need {}x{})", MIN_WIDTH, MIN_HEIGHT)]
    TerminalTooSmall {
        /// Available columns.
        width: u16,
        /// Available rows.
        height: u16,
    },
}

/// Screen areas of the board, also used for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// One input box per form field, top to bottom.
    pub fields: [Rect; 3],
    /// Active and finished lists, left to right.
    pub lists: [Rect; 2],
    /// Bottom status line.
    pub status: Rect,
}

impl BoardLayout {
    /// Area of one list panel.
    #[must_use]
    pub const fn list_area(&self, target: ListTarget) -> Rect {
        match target {
            ListTarget::Active => self.lists[0],
            ListTarget::Finished => self.lists[1],
        }
    }

    /// Area of one form field.
    #[must_use]
    pub const fn field_area(&self, field: FormField) -> Rect {
        match field {
            FormField::Title => self.fields[0],
            FormField::Description => self.fields[1],
            FormField::People => self.fields[2],
        }
    }

    /// List panel under a screen position.
    #[must_use]
    pub fn list_at(&self, column: u16, row: u16) -> Option<ListTarget> {
        let pos = Position::new(column, row);
        ListTarget::ALL
            .into_iter()
            .find(|target| self.list_area(*target).contains(pos))
    }

    /// Form field under a screen position.
    #[must_use]
    pub fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        let pos = Position::new(column, row);
        FormField::ALL
            .into_iter()
            .find(|field| self.field_area(*field).contains(pos))
    }

    /// Index of the project drawn at `row` in a list holding `len`
    /// projects with `selected` selected.
    #[must_use]
    pub fn item_at(&self, target: ListTarget, row: u16, selected: usize, len: usize) -> Option<usize> {
        let area = self.list_area(target);
        let top = area.y + 1;
        let bottom = area.bottom().saturating_sub(1);
        if row < top || row >= bottom {
            return None;
        }
        let offset = scroll_offset(selected, list_capacity(area));
        let idx = offset + usize::from((row - top) / ITEM_HEIGHT);
        (idx < len).then_some(idx)
    }
}

/// Number of whole projects that fit inside a bordered list area.
#[must_use]
pub const fn list_capacity(area: Rect) -> usize {
    (area.height.saturating_sub(2) / ITEM_HEIGHT) as usize
}

/// First visible row index so that `selected` stays on screen.
#[must_use]
pub const fn scroll_offset(selected: usize, capacity: usize) -> usize {
    if capacity == 0 || selected < capacity {
        0
    } else {
        selected + 1 - capacity
    }
}

/// Split the screen into form, lists and status bar.
///
/// # Errors
///
/// Returns [`UiError::TerminalTooSmall`] if `area` is below
/// [`MIN_WIDTH`]x[`MIN_HEIGHT`].
pub fn layout(area: Rect) -> Result<BoardLayout, UiError> {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return Err(UiError::TerminalTooSmall {
            width: area.width,
            height: area.height,
        });
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Form
            Constraint::Min(5),    // Lists
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let field_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(main_chunks[0]);

    let list_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    Ok(BoardLayout {
        fields: [field_chunks[0], field_chunks[1], field_chunks[2]],
        lists: [list_chunks[0], list_chunks[1]],
        status: main_chunks[2],
    })
}

/// Main draw function for the entire UI.
///
/// Returns the layout that was drawn so mouse events can be mapped back to
/// panels, or `None` if the terminal is too small.
pub fn draw(frame: &mut Frame, app: &App) -> Option<BoardLayout> {
    let board = match layout(frame.area()) {
        Ok(board) => board,
        Err(e) => {
            let message = Paragraph::new(Line::styled(e.to_string(), theme::warning()));
            frame.render_widget(message, frame.area());
            return None;
        }
    };

    form::render(frame, &board, app);
    for target in ListTarget::ALL {
        project_list::render(frame, board.list_area(target), app, target);
    }
    status_bar::render(frame, board.status, app);

    if let Some(message) = &app.alert {
        alert::render(frame, frame.area(), message);
    }

    Some(board)
}
