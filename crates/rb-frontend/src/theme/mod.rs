//! Theme module for UI styling
//!
//! Both themes are built from a [`Palette`] on top of egui's stock visuals
//! and can be switched at runtime.

pub mod palette;

use egui::{Rounding, Stroke, Visuals};

use crate::config::{SharedConfig, UiTheme};
pub use palette::Palette;

/// Apply the configured theme to the egui context
pub fn apply_theme(ctx: &egui::Context, config: &SharedConfig) {
    let theme = config.read().config().ui.theme;
    ctx.set_visuals(visuals(theme));
}

/// Palette for a theme
pub fn palette_for(theme: UiTheme) -> &'static Palette {
    match theme {
        UiTheme::Dark => &palette::DARK,
        UiTheme::Light => &palette::LIGHT,
    }
}

/// Build the egui visuals for a theme
pub fn visuals(theme: UiTheme) -> Visuals {
    let p = palette_for(theme);
    let mut v = match theme {
        UiTheme::Dark => Visuals::dark(),
        UiTheme::Light => Visuals::light(),
    };

    // Background colors
    v.panel_fill = p.bg_panel;
    v.window_fill = p.bg_elevated;
    v.extreme_bg_color = p.bg_base;
    v.faint_bg_color = p.bg_input;

    // Selection
    v.selection.bg_fill = p.accent_subtle;
    v.selection.stroke = Stroke::new(1.0, p.accent);
    v.hyperlink_color = p.accent;
    v.override_text_color = Some(p.text_primary);

    // Widget colors
    let rounding = Rounding::same(4.0);
    let widgets = &mut v.widgets;

    widgets.noninteractive.bg_fill = p.bg_input;
    widgets.noninteractive.weak_bg_fill = p.bg_panel;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border_subtle);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text_secondary);

    widgets.inactive.bg_fill = p.bg_input;
    widgets.inactive.weak_bg_fill = p.bg_input;
    widgets.inactive.bg_stroke = Stroke::new(1.0, p.border_subtle);
    widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_primary);

    widgets.hovered.bg_fill = p.bg_hover;
    widgets.hovered.weak_bg_fill = p.bg_hover;
    widgets.hovered.bg_stroke = Stroke::new(1.0, p.border_normal);
    widgets.hovered.fg_stroke = Stroke::new(1.5, p.text_primary);

    widgets.active.bg_fill = p.accent;
    widgets.active.weak_bg_fill = p.bg_hover;
    widgets.active.bg_stroke = Stroke::new(1.0, p.accent);
    widgets.active.fg_stroke = Stroke::new(2.0, p.on_accent);

    widgets.open.bg_fill = p.bg_elevated;
    widgets.open.weak_bg_fill = p.bg_elevated;
    widgets.open.bg_stroke = Stroke::new(1.0, p.border_normal);
    widgets.open.fg_stroke = Stroke::new(1.0, p.text_primary);

    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        w.rounding = rounding;
    }

    // Window styling
    v.window_rounding = Rounding::same(6.0);
    v.window_stroke = Stroke::new(1.0, p.border_subtle);
    v.menu_rounding = rounding;

    v.slider_trailing_fill = true;
    v.text_cursor.stroke = Stroke::new(2.0, p.text_primary);

    v
}
