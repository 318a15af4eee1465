//! Color palettes for the UI themes

use egui::Color32;

/// Colors one theme is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Deepest background (text fields, viewport frame)
    pub bg_base: Color32,
    /// Panel background
    pub bg_panel: Color32,
    /// Windows and popups
    pub bg_elevated: Color32,
    /// Widget background
    pub bg_input: Color32,
    /// Hovered widget background
    pub bg_hover: Color32,
    /// Subtle panel boundary
    pub border_subtle: Color32,
    /// Normal divider line
    pub border_normal: Color32,
    /// Primary text color
    pub text_primary: Color32,
    /// Secondary text (labels, hints)
    pub text_secondary: Color32,
    /// Selection and armed palette entries
    pub accent: Color32,
    /// Subtle accent for selection backgrounds
    pub accent_subtle: Color32,
    /// Text on top of the accent color
    pub on_accent: Color32,
}

/// Dark palette
pub const DARK: Palette = Palette {
    bg_base: Color32::from_rgb(24, 23, 22),
    bg_panel: Color32::from_rgb(32, 30, 29),
    bg_elevated: Color32::from_rgb(41, 39, 37),
    bg_input: Color32::from_rgb(48, 46, 44),
    bg_hover: Color32::from_rgb(60, 57, 54),
    border_subtle: Color32::from_rgb(54, 51, 48),
    border_normal: Color32::from_rgb(72, 68, 64),
    text_primary: Color32::from_rgb(232, 228, 224),
    text_secondary: Color32::from_rgb(164, 158, 152),
    accent: Color32::from_rgb(214, 140, 64),
    accent_subtle: Color32::from_rgba_premultiplied(64, 42, 19, 30),
    on_accent: Color32::from_rgb(24, 23, 22),
};

/// Light palette
pub const LIGHT: Palette = Palette {
    bg_base: Color32::from_rgb(246, 244, 241),
    bg_panel: Color32::from_rgb(251, 250, 248),
    bg_elevated: Color32::from_rgb(255, 255, 255),
    bg_input: Color32::from_rgb(238, 235, 231),
    bg_hover: Color32::from_rgb(228, 224, 219),
    border_subtle: Color32::from_rgb(222, 217, 211),
    border_normal: Color32::from_rgb(201, 195, 188),
    text_primary: Color32::from_rgb(36, 33, 30),
    text_secondary: Color32::from_rgb(96, 90, 84),
    accent: Color32::from_rgb(184, 104, 32),
    accent_subtle: Color32::from_rgba_premultiplied(74, 42, 13, 40),
    on_accent: Color32::WHITE,
};

/// Semi-transparent version of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
