//! Drag payload carried between a drag source and a drop target.
//!
//! Mirrors a browser `DataTransfer`: a MIME type plus a string body. The
//! board only ever sends and accepts [`TEXT_PLAIN`] payloads holding a
//! [`ProjectId`](crate::project::ProjectId) in its display form.

use crate::project::ProjectId;

/// MIME type of drag payloads that carry a project id.
pub const TEXT_PLAIN: &str = "text/plain";

/// Data attached to an in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragData {
    /// MIME type of `data`.
    pub mime: String,
    /// Payload body.
    pub data: String,
}

impl DragData {
    /// Creates an arbitrary payload.
    pub fn new(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Creates a `text/plain` payload carrying a project id.
    #[must_use]
    pub fn plain_text(id: ProjectId) -> Self {
        Self::new(TEXT_PLAIN, id.to_string())
    }

    /// Whether this payload is plain text (the only kind drop targets accept).
    #[must_use]
    pub fn is_plain_text(&self) -> bool {
        self.mime == TEXT_PLAIN
    }

    /// Reads the project id back out of a plain-text payload.
    ///
    /// Returns `None` for other MIME types or unparseable bodies.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        if !self.is_plain_text() {
            return None;
        }
        self.data.parse().ok()
    }
}
