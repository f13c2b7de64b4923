//! Drag-and-drop between the two project lists.
//!
//! A [`DragSession`] follows the browser event order:
//! `drag_start` → any number of `drag_over` / `drag_leave` → `drop` or
//! `drag_end`. Only a drop onto a target that accepted the payload during
//! `drag_over` reaches the store, as a status change.

use projboard_proto::drag::DragData;
use projboard_proto::project::{Project, ProjectId, ProjectStatus};

use crate::state::ProjectStore;

/// Something that can be picked up.
pub trait Draggable {
    /// Payload attached when the drag starts.
    fn drag_data(&self) -> DragData;
}

impl Draggable for Project {
    fn drag_data(&self) -> DragData {
        DragData::plain_text(self.id)
    }
}

/// Something that items can be dropped onto.
pub trait DragTarget {
    /// Whether a payload may be dropped here.
    fn accepts(&self, data: &DragData) -> bool;
    /// Status a dropped project is moved to.
    fn drop_status(&self) -> ProjectStatus;
}

/// One of the two project lists on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListTarget {
    /// The "active projects" list.
    Active,
    /// The "finished projects" list.
    Finished,
}

impl ListTarget {
    /// Both lists in board order (left to right).
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Status shown by this list.
    #[must_use]
    pub const fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    /// The list to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self {
            Self::Active => None,
            Self::Finished => Some(Self::Active),
        }
    }

    /// The list to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        match self {
            Self::Active => Some(Self::Finished),
            Self::Finished => None,
        }
    }
}

impl DragTarget for ListTarget {
    fn accepts(&self, data: &DragData) -> bool {
        data.is_plain_text()
    }

    fn drop_status(&self) -> ProjectStatus {
        self.status()
    }
}

/// State of an in-flight drag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Payload set on drag start; `None` when idle.
    data: Option<DragData>,
    /// Target currently highlighted as droppable.
    droppable: Option<ListTarget>,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts dragging `item`, replacing any previous drag.
    pub fn drag_start(&mut self, item: &impl Draggable) {
        self.start_with(item.drag_data());
    }

    /// Starts a drag carrying an arbitrary payload.
    pub fn start_with(&mut self, data: DragData) {
        tracing::debug!(mime = %data.mime, data = %data.data, "drag start");
        self.data = Some(data);
        self.droppable = None;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.data.is_some()
    }

    /// Payload of the current drag.
    #[must_use]
    pub const fn data(&self) -> Option<&DragData> {
        self.data.as_ref()
    }

    /// Id of the dragged project, if the payload carries one.
    #[must_use]
    pub fn dragged_id(&self) -> Option<ProjectId> {
        self.data.as_ref().and_then(DragData::project_id)
    }

    /// Target currently highlighted as droppable.
    #[must_use]
    pub const fn droppable(&self) -> Option<ListTarget> {
        self.droppable
    }

    /// The pointer moved over `target`.
    ///
    /// Highlights the target and returns `true` if it accepts the payload.
    pub fn drag_over(&mut self, target: ListTarget) -> bool {
        let accepted = self.data.as_ref().is_some_and(|data| target.accepts(data));
        if accepted {
            self.droppable = Some(target);
        }
        accepted
    }

    /// The pointer left `target`; removes its highlight.
    pub fn drag_leave(&mut self, target: ListTarget) {
        if self.droppable == Some(target) {
            self.droppable = None;
        }
    }

    /// Drops onto `target` and ends the session.
    ///
    /// The store is only touched when `target` is the accepted droppable
    /// target and the payload holds a project id. Returns whether the
    /// project's status changed.
    pub fn drop(&mut self, target: ListTarget, store: &mut ProjectStore) -> bool {
        let accepted = self.droppable == Some(target);
        let data = self.data.take();
        self.droppable = None;

        if !accepted {
            tracing::debug!(?target, "drop ignored: target did not accept drag");
            return false;
        }
        let Some(id) = data.as_ref().and_then(DragData::project_id) else {
            tracing::debug!(?target, "drop ignored: payload holds no project id");
            return false;
        };
        store.move_project(id, target.drop_status())
    }

    /// Cancels the drag without dropping.
    pub fn drag_end(&mut self) {
        if self.data.is_some() {
            tracing::debug!("drag end");
        }
        self.data = None;
        self.droppable = None;
    }
}
