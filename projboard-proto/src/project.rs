//! Project model for the `ProjBoard` board.
//!
//! A [`Project`] is created once with [`ProjectStatus::Active`] and only its
//! status changes afterwards. Identifiers are UUID v7 so that their string
//! form can travel as a plain-text drag payload and be parsed back on drop.

use std::str::FromStr;

use uuid::Uuid;

/// Unique identifier for a project, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a new time-ordered project identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Status of a project on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    /// Project is still being worked on.
    Active,
    /// Project is done.
    Finished,
}

impl ProjectStatus {
    /// Both statuses, in board order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Heading for the list holding projects of this status.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// A project tracked by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Display title, never empty once validated.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    /// Current status.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new active project with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human-readable assignment line, e.g. "1 person assigned".
    #[must_use]
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.people)
        }
    }
}
