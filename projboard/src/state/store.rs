//! In-memory project state with snapshot notifications.
//!
//! `StateStore` is the single source of truth for the board. Every mutation
//! that changes something is followed by exactly one notification round in
//! which each listener, in registration order, receives its own copy of the
//! whole collection.

use projboard_proto::project::{Project, ProjectId, ProjectStatus};

/// Callback invoked with a snapshot of all items after each mutation.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Handle returned by [`StateStore::add_listener`], usable for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Items the store can hold: identified by a [`ProjectId`] and carrying a
/// mutable [`ProjectStatus`].
pub trait Trackable: Clone {
    /// Identifier used for status changes.
    fn id(&self) -> ProjectId;
    /// Current status.
    fn status(&self) -> ProjectStatus;
    /// Overwrites the status.
    fn set_status(&mut self, status: ProjectStatus);
}

impl Trackable for Project {
    fn id(&self) -> ProjectId {
        self.id
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }

    fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}

/// Ordered, append-only item collection plus its observers.
///
/// Listeners must not call back into the store they are registered with;
/// notification happens while the store is mutably borrowed.
pub struct StateStore<T> {
    /// Items in insertion order.
    items: Vec<T>,
    /// Registered listeners in registration order.
    listeners: Vec<(ListenerId, Listener<T>)>,
    /// Next listener handle value.
    next_listener_id: u64,
}

/// The store specialised to board projects.
pub type ProjectStore = StateStore<Project>;

impl<T: Trackable> StateStore<T> {
    /// Creates an empty store with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Registers a listener for every future mutation.
    ///
    /// Registering the same closure twice is allowed; each registration
    /// fires on its own. The returned id may be ignored.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Vec<T>) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(listener = id.0, total = self.listeners.len(), "listener added");
        id
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `false` if the id is unknown (already removed).
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        let removed = self.listeners.len() != before;
        tracing::debug!(listener = id.0, removed, "listener removal");
        removed
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Appends an item and notifies all listeners.
    pub fn add_item(&mut self, item: T) {
        tracing::debug!(id = %item.id(), "item appended");
        self.items.push(item);
        self.notify();
    }

    /// Moves an item to `new_status`.
    ///
    /// Unknown ids and moves to the current status are silent no-ops that
    /// notify nobody. Returns whether the status actually changed.
    pub fn move_item(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            tracing::trace!(%id, "move ignored: unknown id");
            return false;
        };
        if item.status() == new_status {
            tracing::trace!(%id, status = %new_status, "move ignored: status unchanged");
            return false;
        }
        item.set_status(new_status);
        tracing::debug!(%id, status = %new_status, "item moved");
        self.notify();
        true
    }

    /// Returns a copy of all items in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hands every listener its own copy of the collection.
    fn notify(&mut self) {
        tracing::debug!(
            listeners = self.listeners.len(),
            items = self.items.len(),
            "notifying listeners"
        );
        for (_, listener) in &mut self.listeners {
            listener(self.items.clone());
        }
    }
}

impl StateStore<Project> {
    /// Creates an active project from pre-validated input, appends it and
    /// notifies listeners. Returns the new project's id.
    pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.add_item(project);
        id
    }

    /// Changes a project's status. See [`move_item`](Self::move_item).
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        self.move_item(id, new_status)
    }
}

impl<T: Trackable> Default for StateStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
