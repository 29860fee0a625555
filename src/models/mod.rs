//! Data models for the finder TUI
//!
//! This module contains the core data structures:
//! - Catalog and program types for loading the data file
//! - Enums for input and focus state

pub mod catalog;
pub mod enums;
pub mod program;

// Re-exports for convenient access
pub use catalog::Catalog;
pub use enums::{Focus, InputMode};
pub use program::{FormatsField, GradesField, Program};
