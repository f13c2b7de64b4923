//! Project state for the board.
//!
//! The store is created once by the entry point and handed to whoever needs
//! it as a [`SharedStore`]. Everything runs on one thread, so a plain
//! `Rc<RefCell<_>>` handle is enough.

pub mod store;

use std::cell::RefCell;
use std::rc::Rc;

pub use store::{Listener, ListenerId, ProjectStore, StateStore, Trackable};

/// Shared handle to the board's single store instance.
pub type SharedStore = Rc<RefCell<ProjectStore>>;

/// Creates a fresh, empty shared store.
#[must_use]
pub fn shared_store() -> SharedStore {
    Rc::new(RefCell::new(ProjectStore::new()))
}
