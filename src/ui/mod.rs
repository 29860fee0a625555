//! UI module for finder-tui
//!
//! This module contains UI rendering functions for the TUI interface,
//! including filter chip rows, result cards, and the header/summary lines.

mod cards;
mod chips;
mod helpers;
mod summary;

pub use cards::{render_no_matches_card, render_program_card, CARD_HEIGHT};
pub use chips::{render_chip_row, CHIP_ROW_HEIGHT};
pub use helpers::{pluralize, truncate};
pub use summary::{render_header, render_summary};
