//! Color definitions using 256-color palette
//!
//! All colors use the 256-color (indexed) mode for broad terminal compatibility.

use ratatui::style::Color;

/// Primary accent color
pub const PRIMARY: Color = Color::Indexed(73); // Steel blue

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243); // Gray

/// Background for selected items
pub const SELECTION_BG: Color = Color::Indexed(236); // Dark gray

/// Highlighted branch name
pub const HIGHLIGHT: Color = Color::Indexed(213); // Orchid

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236); // Dark gray

/// Border color for the list
pub const BORDER: Color = Color::Indexed(243); // Gray

/// Border color while filtering
pub const BORDER_FOCUS: Color = Color::Indexed(73); // Steel blue
