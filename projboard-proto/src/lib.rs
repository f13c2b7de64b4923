//! Shared model definitions for the `ProjBoard` project board.

pub mod drag;
pub mod project;
