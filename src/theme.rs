//! Centralized theme configuration for the notice painter.
//!
//! All colors and styles are defined here. Use `theme::module::CONSTANT` in
//! render files; do NOT hardcode `Color::*` values directly in render files.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Notice list styles
pub mod notice {
    use super::*;

    pub const BG: Color = palette::BG_HIGHLIGHT;
    pub const BORDER: Color = palette::TEXT_MUTED;
    pub const ITEM: Style = Style::new().fg(palette::TEXT).bg(palette::BG_HIGHLIGHT);
}

/// Loader spinner styles
pub mod loader {
    use super::*;

    pub const BG: Color = palette::BG_DARK;
    pub const GLYPH_MODIFIER: Modifier = Modifier::BOLD;

    // Spinner animation colors (galaxy rainbow)
    pub const SPINNER_COLORS: &[Color] = &[
        palette::PINK,
        palette::ORANGE,
        palette::YELLOW,
        palette::GREEN,
        palette::CYAN,
        palette::PURPLE,
        palette::MAGENTA,
        palette::RED,
    ];
}
