//! Theme module for finder-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the "low tide at dusk" aesthetic.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded corners for card and chip blocks
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors - Deep Water Palette
// ============================================================================

/// Primary background color - deep water (#0a1216)
pub const BG_PRIMARY: Color = Color::Rgb(10, 18, 22);

/// Secondary background color - slightly lighter (#101b20)
pub const BG_SECONDARY: Color = Color::Rgb(16, 27, 32);

/// Tertiary background color - for highlighted areas (#17262c)
pub const BG_TERTIARY: Color = Color::Rgb(23, 38, 44);

/// Subtle border color (#1d3038)
pub const BORDER_SUBTLE: Color = Color::Rgb(29, 48, 56);

// ============================================================================
// Accent Colors - Teal Primary
// ============================================================================

/// Primary teal accent color (#2dd4bf)
pub const TEAL_PRIMARY: Color = Color::Rgb(45, 212, 191);

/// Dimmed teal for secondary elements (#14837a)
pub const TEAL_DIM: Color = Color::Rgb(20, 131, 122);

// ============================================================================
// Status Colors
// ============================================================================

/// Kelp green - selected chips (#4ade80)
pub const GREEN_SELECTED: Color = Color::Rgb(74, 222, 128);

/// Sand amber - grade tags and warnings (#fbbf24)
pub const AMBER_TAG: Color = Color::Rgb(251, 191, 36);

/// Red error color - load failures (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
