//! Project form rendering (title, description, people).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{BoardLayout, theme};
use crate::app::{App, FormField, PanelFocus};

/// Render the three form fields.
pub fn render(frame: &mut Frame, board: &BoardLayout, app: &App) {
    for field in FormField::ALL {
        render_field(frame, board.field_area(field), app, field);
    }
}

/// Placeholder shown in an empty, unfocused field.
const fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Title => "What is the project called?",
        FormField::Description => "What needs doing?",
        FormField::People => "How many people?",
    }
}

/// Render one input box.
fn render_field(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let is_focused = app.focus == PanelFocus::Form && app.form.field == field;
    let value = app.form.value(field);

    let input_line = if is_focused {
        // Split around the cursor and draw a block cursor between.
        let (before, after): (String, String) = {
            let mut chars = value.chars();
            let before = chars.by_ref().take(app.form.cursor).collect();
            (before, chars.collect())
        };
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled("█", theme::input_cursor()),
            Span::styled(after, theme::normal()),
        ])
    } else if value.is_empty() {
        Line::from(Span::styled(placeholder(field), theme::dimmed()))
    } else {
        Line::from(Span::styled(value, theme::normal()))
    };

    let block = Block::default()
        .title(field.label())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
