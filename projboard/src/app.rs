//! Application state and event handling.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use projboard_proto::project::{Project, ProjectId};

use crate::dragdrop::{DragSession, ListTarget};
use crate::state::SharedStore;
use crate::ui::BoardLayout;
use crate::validation::{INVALID_INPUT_MESSAGE, InputRules, gather_input};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// The project form (default).
    Form,
    /// One of the project lists.
    List(ListTarget),
}

/// Field of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Project title.
    Title,
    /// Project description.
    Description,
    /// Number of people.
    People,
}

impl FormField {
    /// All fields, top to bottom.
    pub const ALL: [Self; 3] = [Self::Title, Self::Description, Self::People];

    /// Field label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description | Self::People => Self::People,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Title | Self::Description => Self::Title,
            Self::People => Self::Description,
        }
    }
}

/// Text entered into the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// People input.
    pub people: String,
    /// Field receiving keystrokes.
    pub field: FormField,
    /// Cursor position in the active field (character index).
    pub cursor: usize,
}

impl FormState {
    fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            field: FormField::Title,
            cursor: 0,
        }
    }

    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    fn active_len(&self) -> usize {
        self.value(self.field).chars().count()
    }

    /// Switches to `field` and puts the cursor at its end.
    pub fn select(&mut self, field: FormField) {
        self.field = field;
        self.cursor = self.active_len();
    }

    /// Byte offset of the cursor inside the active field.
    fn byte_cursor(&self) -> usize {
        let text = self.value(self.field);
        text.char_indices()
            .nth(self.cursor)
            .map_or(text.len(), |(idx, _)| idx)
    }

    fn enter_char(&mut self, c: char) {
        let at = self.byte_cursor();
        self.active_mut().insert(at, c);
        self.cursor += 1;
    }

    fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_cursor();
        self.active_mut().remove(at);
    }

    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.field = FormField::Title;
        self.cursor = 0;
    }
}

/// Projects of one status, as last reported by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Which list this is.
    pub target: ListTarget,
    /// Projects with the list's status, in store order.
    pub projects: Vec<Project>,
    /// Selected row.
    pub selected: usize,
}

impl ListView {
    fn new(target: ListTarget) -> Self {
        Self {
            target,
            projects: Vec::new(),
            selected: 0,
        }
    }

    /// Replaces the contents with the matching projects of a store snapshot.
    pub fn refresh(&mut self, snapshot: Vec<Project>) {
        let status = self.target.status();
        self.projects = snapshot.into_iter().filter(|p| p.status == status).collect();
        self.selected = self.selected.min(self.projects.len().saturating_sub(1));
    }

    /// Currently selected project.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    fn select_id(&mut self, id: ProjectId) {
        if let Some(idx) = self.projects.iter().position(|p| p.id == id) {
            self.selected = idx;
        }
    }

    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    const fn select_next(&mut self) {
        if self.selected + 1 < self.projects.len() {
            self.selected += 1;
        }
    }
}

/// Main application state.
pub struct App {
    /// Handle to the board's store.
    store: SharedStore,
    /// Form validation limits.
    rules: InputRules,
    /// Project form contents.
    pub form: FormState,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Active list view, fed by a store listener.
    active: Rc<RefCell<ListView>>,
    /// Finished list view, fed by a store listener.
    finished: Rc<RefCell<ListView>>,
    /// In-flight drag, if any.
    pub drag: DragSession,
    /// List the mouse pointer is over during a mouse drag.
    pointer_over: Option<ListTarget>,
    /// Blocking alert message; any key dismisses it.
    pub alert: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app on top of an existing store.
    ///
    /// Each list registers its own listener that keeps only the projects
    /// with its status.
    #[must_use]
    pub fn new(store: SharedStore, rules: InputRules) -> Self {
        let active = Self::attach_list(&store, ListTarget::Active);
        let finished = Self::attach_list(&store, ListTarget::Finished);
        Self {
            store,
            rules,
            form: FormState::new(),
            focus: PanelFocus::Form,
            active,
            finished,
            drag: DragSession::new(),
            pointer_over: None,
            alert: None,
            should_quit: false,
        }
    }

    fn attach_list(store: &SharedStore, target: ListTarget) -> Rc<RefCell<ListView>> {
        let view = Rc::new(RefCell::new(ListView::new(target)));
        let mut store = store.borrow_mut();
        view.borrow_mut().refresh(store.snapshot());
        let sink = Rc::clone(&view);
        store.add_listener(move |projects| sink.borrow_mut().refresh(projects));
        view
    }

    /// The store this app renders.
    #[must_use]
    pub const fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Read access to one list view.
    #[must_use]
    pub fn list(&self, target: ListTarget) -> Ref<'_, ListView> {
        self.view(target).borrow()
    }

    const fn view(&self, target: ListTarget) -> &Rc<RefCell<ListView>> {
        match target {
            ListTarget::Active => &self.active,
            ListTarget::Finished => &self.finished,
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            self.alert = None;
            return;
        }

        match key.code {
            KeyCode::Esc if self.drag.is_active() => {
                self.drag.drag_end();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::BackTab => {
                self.cycle_focus_backward();
                return;
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return;
            }
            KeyCode::Tab => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Form => self.handle_form_key(key),
            PanelFocus::List(target) => self.handle_list_key(target, key),
        }
    }

    /// Handle key event when the form is focused.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.form.select(self.form.field.prev()),
            KeyCode::Down => self.form.select(self.form.field.next()),
            KeyCode::Char(c) => self.form.enter_char(c),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Left => self.form.cursor = self.form.cursor.saturating_sub(1),
            KeyCode::Right => self.form.cursor = (self.form.cursor + 1).min(self.form.active_len()),
            KeyCode::Home => self.form.cursor = 0,
            KeyCode::End => self.form.cursor = self.form.active_len(),
            _ => {}
        }
    }

    /// Handle key event when a list is focused.
    ///
    /// Space picks up the selected project, Left/Right carry it over the
    /// other list, Enter drops it.
    fn handle_list_key(&mut self, target: ListTarget, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.view(target).borrow_mut().select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.view(target).borrow_mut().select_next(),
            KeyCode::Char(' ') if !self.drag.is_active() => self.pick_up(target),
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(other) = target.left() {
                    self.carry_to(target, other);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(other) = target.right() {
                    self.carry_to(target, other);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.drag.is_active() => self.drop_on(target),
            _ => {}
        }
    }

    /// Handle a mouse event against the last drawn layout.
    pub fn handle_mouse_event(&mut self, event: MouseEvent, layout: &BoardLayout) {
        let (col, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.alert.is_some() {
                    self.alert = None;
                    return;
                }
                if let Some(field) = layout.field_at(col, row) {
                    self.set_focus(PanelFocus::Form);
                    self.form.select(field);
                    return;
                }
                let Some(target) = layout.list_at(col, row) else {
                    return;
                };
                self.set_focus(PanelFocus::List(target));
                let len = self.list(target).projects.len();
                let selected = self.list(target).selected;
                if let Some(idx) = layout.item_at(target, row, selected, len) {
                    self.view(target).borrow_mut().selected = idx;
                    self.pick_up(target);
                    self.pointer_over = Some(target);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.drag.is_active() => {
                let over = layout.list_at(col, row);
                if over != self.pointer_over {
                    if let Some(left) = self.pointer_over {
                        self.drag.drag_leave(left);
                    }
                    if let Some(entered) = over {
                        self.drag.drag_over(entered);
                    }
                    self.pointer_over = over;
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.drag.is_active() => {
                match layout.list_at(col, row) {
                    Some(target) => self.drop_on(target),
                    None => self.drag.drag_end(),
                }
                self.pointer_over = None;
            }
            _ => {}
        }
    }

    /// Starts dragging the selected project of `target`.
    fn pick_up(&mut self, target: ListTarget) {
        let Some(project) = self.list(target).selected_project().cloned() else {
            return;
        };
        self.drag.drag_start(&project);
        self.drag.drag_over(target);
    }

    /// Moves focus from one list to another, carrying any drag along.
    fn carry_to(&mut self, from: ListTarget, to: ListTarget) {
        if self.drag.is_active() {
            self.drag.drag_leave(from);
            self.drag.drag_over(to);
        }
        self.focus = PanelFocus::List(to);
    }

    /// Moves focus anywhere. A drag follows focus between the lists and
    /// is cancelled when focus goes to the form.
    fn set_focus(&mut self, focus: PanelFocus) {
        match (self.focus, focus) {
            (PanelFocus::List(from), PanelFocus::List(to)) => self.carry_to(from, to),
            (_, PanelFocus::Form) => {
                self.drag.drag_end();
                self.pointer_over = None;
                self.focus = focus;
            }
            (PanelFocus::Form, PanelFocus::List(_)) => self.focus = focus,
        }
    }

    /// Drops the current drag onto `target` and selects the moved project.
    fn drop_on(&mut self, target: ListTarget) {
        let id = self.drag.dragged_id();
        let moved = self.drag.drop(target, &mut self.store.borrow_mut());
        self.focus = PanelFocus::List(target);
        if moved && let Some(id) = id {
            self.view(target).borrow_mut().select_id(id);
        }
    }

    /// Validates the form and appends a project, or raises the alert.
    fn submit(&mut self) {
        let form = &self.form;
        match gather_input(&form.title, &form.description, &form.people, &self.rules) {
            Ok(input) => {
                let id = self.store.borrow_mut().add_project(
                    &input.title,
                    &input.description,
                    input.people,
                );
                tracing::info!(%id, title = %input.title, "project added");
                self.form.clear();
            }
            Err(e) => {
                tracing::info!(error = %e, "form input rejected");
                self.alert = Some(INVALID_INPUT_MESSAGE.to_string());
            }
        }
    }

    /// Cycle focus forward: Form -> Active -> Finished -> Form.
    fn cycle_focus_forward(&mut self) {
        let next = match self.focus {
            PanelFocus::Form => PanelFocus::List(ListTarget::Active),
            PanelFocus::List(ListTarget::Active) => PanelFocus::List(ListTarget::Finished),
            PanelFocus::List(ListTarget::Finished) => PanelFocus::Form,
        };
        self.set_focus(next);
    }

    /// Cycle focus backward: Form -> Finished -> Active -> Form.
    fn cycle_focus_backward(&mut self) {
        let next = match self.focus {
            PanelFocus::Form => PanelFocus::List(ListTarget::Finished),
            PanelFocus::List(ListTarget::Finished) => PanelFocus::List(ListTarget::Active),
            PanelFocus::List(ListTarget::Active) => PanelFocus::Form,
        };
        self.set_focus(next);
    }
}
