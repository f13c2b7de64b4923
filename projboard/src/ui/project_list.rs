//! Project list rendering (one panel per status).

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::{list_capacity, scroll_offset, theme};
use crate::app::{App, PanelFocus};
use crate::dragdrop::ListTarget;

/// Render the list for `target`.
///
/// Each project takes three rows: title, people line and description. A
/// list that would accept the current drag is drawn as droppable.
pub fn render(frame: &mut Frame, area: Rect, app: &App, target: ListTarget) {
    let is_focused = app.focus == PanelFocus::List(target);
    let is_droppable = app.drag.droppable() == Some(target);
    let dragged = app.drag.dragged_id();
    let view = app.list(target);

    let offset = scroll_offset(view.selected, list_capacity(area));
    let items: Vec<ListItem> = view
        .projects
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, project)| {
            let style = if Some(project.id) == dragged {
                theme::dragging()
            } else if idx == view.selected && is_focused {
                theme::selected()
            } else {
                Style::default()
            };

            ListItem::new(vec![
                Line::from(Span::styled(project.title.as_str(), theme::bold())),
                Line::from(Span::styled(project.people_label(), theme::dimmed())),
                Line::from(Span::styled(project.description.as_str(), theme::normal())),
            ])
            .style(style)
        })
        .collect();

    let title_color = match target {
        ListTarget::Active => theme::ACTIVE_TITLE,
        ListTarget::Finished => theme::FINISHED_TITLE,
    };
    let title = format!(" {} ({}) ", target.status().heading(), view.projects.len());

    let mut block = Block::default()
        .title(Span::styled(title, theme::panel_title(title_color)))
        .borders(Borders::ALL)
        .border_style(if is_droppable {
            theme::droppable()
        } else if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    if is_droppable {
        block = block.style(theme::droppable());
    }

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
