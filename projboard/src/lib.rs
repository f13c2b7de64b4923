//! `ProjBoard`: terminal project board library.

pub mod app;
pub mod config;
pub mod dragdrop;
pub mod state;
pub mod ui;
pub mod validation;
