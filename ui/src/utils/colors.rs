//! Shared color constants for the UI.

use egui::Color32;

/// Brand purple used for the logo, primary buttons and active sort arrows.
pub const COLOR_BRAND: Color32 = Color32::from_rgb(109, 40, 217);

/// Red color for error notices.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Muted gray for secondary text.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(107, 114, 128);

/// Border color for the table frame (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(229, 231, 235);

/// Header background color for the table (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(249, 250, 251);

/// Gender badge palette for "male".
pub const MALE_BADGE_BG: Color32 = Color32::from_rgb(254, 226, 226);
pub const MALE_BADGE_FG: Color32 = Color32::from_rgb(185, 28, 28);

/// Gender badge palette for everything else.
pub const OTHER_BADGE_BG: Color32 = Color32::from_rgb(219, 234, 254);
pub const OTHER_BADGE_FG: Color32 = Color32::from_rgb(29, 78, 216);
