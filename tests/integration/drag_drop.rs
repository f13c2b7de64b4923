//! Integration tests for drag-and-drop: the drag session against the store,
//! and the app's keyboard and mouse gestures that drive it.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use projboard::app::{App, PanelFocus};
use projboard::dragdrop::{DragSession, ListTarget};
use projboard::state::{ProjectStore, shared_store};
use projboard::ui;
use projboard::validation::InputRules;
use projboard_proto::drag::{DragData, TEXT_PLAIN};
use projboard_proto::project::{ProjectId, ProjectStatus};
use ratatui::layout::Rect;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn counting_listener(store: &mut ProjectStore) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    store.add_listener(move |_| *sink.borrow_mut() += 1);
    count
}

// ---------------------------------------------------------------------------
// Session against the store
// ---------------------------------------------------------------------------

#[test]
fn drop_sequence_notifies_once() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Build shed", "Construct a garden shed", 3);
    let count = counting_listener(&mut store);

    let project = store.get(id).cloned().unwrap();
    let mut session = DragSession::new();
    session.drag_start(&project);
    session.drag_over(ListTarget::Active);
    session.drag_leave(ListTarget::Active);
    session.drag_over(ListTarget::Finished);
    assert!(session.drop(ListTarget::Finished, &mut store));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Finished);
}

#[test]
fn payload_round_trips_through_plain_text() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Build shed", "Construct a garden shed", 3);

    // A payload built by hand from the id string behaves like a real drag.
    let mut session = DragSession::new();
    session.start_with(DragData::new(TEXT_PLAIN, id.to_string()));
    assert!(session.drag_over(ListTarget::Finished));
    assert!(session.drop(ListTarget::Finished, &mut store));
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Finished);
}

#[test]
fn stale_payload_is_silent() {
    let mut store = ProjectStore::new();
    store.add_project("Build shed", "Construct a garden shed", 3);
    let count = counting_listener(&mut store);

    let mut session = DragSession::new();
    session.start_with(DragData::plain_text(ProjectId::new()));
    session.drag_over(ListTarget::Finished);
    assert!(!session.drop(ListTarget::Finished, &mut store));
    assert_eq!(*count.borrow(), 0);
}

// ---------------------------------------------------------------------------
// App gestures
// ---------------------------------------------------------------------------

#[test]
fn keyboard_round_trip_between_lists() {
    let store = shared_store();
    let id = store
        .borrow_mut()
        .add_project("Build shed", "Construct a garden shed", 3);
    let mut app = App::new(Rc::clone(&store), InputRules::default());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::List(ListTarget::Active));

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        store.borrow().get(id).unwrap().status,
        ProjectStatus::Finished
    );

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);
    assert_eq!(store.borrow().get(id).unwrap().status, ProjectStatus::Active);
    assert_eq!(app.list(ListTarget::Active).projects.len(), 1);
}

#[test]
fn tab_between_lists_keeps_drag_droppable() {
    let store = shared_store();
    let id = store
        .borrow_mut()
        .add_project("Build shed", "Construct a garden shed", 3);
    let mut app = App::new(Rc::clone(&store), InputRules::default());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        store.borrow().get(id).unwrap().status,
        ProjectStatus::Finished
    );
    assert_eq!(app.list(ListTarget::Finished).projects.len(), 1);
}

#[test]
fn dropping_back_on_origin_list_does_not_notify() {
    let store = shared_store();
    store
        .borrow_mut()
        .add_project("Build shed", "Construct a garden shed", 3);
    let mut app = App::new(Rc::clone(&store), InputRules::default());
    let count = counting_listener(&mut store.borrow_mut());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert!(!app.drag.is_active());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn mouse_drag_highlights_then_drops() {
    let store = shared_store();
    let id = store
        .borrow_mut()
        .add_project("Build shed", "Construct a garden shed", 3);
    let mut app = App::new(Rc::clone(&store), InputRules::default());
    let board = ui::layout(Rect::new(0, 0, 120, 40)).unwrap();
    let active = board.list_area(ListTarget::Active);
    let finished = board.list_area(ListTarget::Finished);

    app.handle_mouse_event(
        mouse(
            MouseEventKind::Down(MouseButton::Left),
            active.x + 3,
            active.y + 2,
        ),
        &board,
    );
    assert_eq!(app.drag.droppable(), Some(ListTarget::Active));

    // Out of every list: highlight goes away.
    app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1), &board);
    assert_eq!(app.drag.droppable(), None);

    app.handle_mouse_event(
        mouse(
            MouseEventKind::Drag(MouseButton::Left),
            finished.x + 3,
            finished.y + 1,
        ),
        &board,
    );
    assert_eq!(app.drag.droppable(), Some(ListTarget::Finished));

    app.handle_mouse_event(
        mouse(
            MouseEventKind::Up(MouseButton::Left),
            finished.x + 3,
            finished.y + 1,
        ),
        &board,
    );
    assert_eq!(
        store.borrow().get(id).unwrap().status,
        ProjectStatus::Finished
    );
    assert_eq!(app.list(ListTarget::Finished).projects.len(), 1);
}

#[test]
fn mouse_press_on_empty_space_starts_nothing() {
    let store = shared_store();
    let mut app = App::new(store, InputRules::default());
    let board = ui::layout(Rect::new(0, 0, 120, 40)).unwrap();
    let active = board.list_area(ListTarget::Active);

    app.handle_mouse_event(
        mouse(
            MouseEventKind::Down(MouseButton::Left),
            active.x + 3,
            active.y + 1,
        ),
        &board,
    );
    assert!(!app.drag.is_active());
    assert_eq!(app.focus, PanelFocus::List(ListTarget::Active));
}
