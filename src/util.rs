//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Color name mapping for config files and summaries
//! - The [`Rect`] type used for damage tracking

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and replay scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "white", "black", "transparent"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Returns `None` if the extent does not fit in an `i32`.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.checked_sub(min_x)?;
        let height = max_y.checked_sub(min_y)?;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("black").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42, 1.0)), "Custom");
    }

    #[test]
    fn rect_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 5).is_none());
        assert!(Rect::from_min_max(4, 4, 2, 8).is_none());
        assert_eq!(Rect::from_min_max(1, 2, 4, 6), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn rect_rejects_extent_wider_than_i32() {
        assert!(Rect::from_min_max(i32::MIN, 0, i32::MAX, 10).is_none());
        assert!(Rect::from_min_max(0, -10, 10, i32::MAX).is_none());
    }
}
