//! Dark showcase theme for the carousel viewer.

use egui::{Color32, Rounding, Stroke, Vec2};
use reel_core::Color;

/// Central theme for the viewer.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_SM: f32 = 13.0; // clip timecode, status line
    pub const FONT_CAPTION: f32 = 22.0; // slide captions
    pub const FONT_ICON: f32 = 18.0; // control glyph

    // ── Spacing (4px base) ─────────────────────────────────────
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;
    pub const SPACE_LG: f32 = 24.0;
    pub const SPACE_XL: f32 = 40.0;

    // ── Geometry ───────────────────────────────────────────────
    pub const SLIDE_RADIUS: f32 = 24.0;
    /// Horizontal gap between slides in the strip.
    pub const SLIDE_GAP: f32 = 40.0;
    /// Indicator dot height.
    pub const DOT_SIZE: f32 = 12.0;
    pub const CONTROL_SIZE: f32 = 56.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(0, 0, 0)
    }
    /// Slide surface behind the media.
    pub const fn slide_bg() -> Color32 {
        Color32::from_rgb(18, 18, 22)
    }
    /// Pill behind the indicator row.
    pub const fn indicator_tray() -> Color32 {
        Color32::from_rgb(66, 66, 69)
    }
    pub const fn control_bg() -> Color32 {
        Color32::from_rgb(66, 66, 69)
    }

    // ── Text ───────────────────────────────────────────────────
    pub const fn t1() -> Color32 {
        Color32::from_rgb(245, 245, 247)
    }
    pub const fn t2() -> Color32 {
        Color32::from_rgba_premultiplied(134, 134, 139, 255)
    }

    // ── Color helpers ──────────────────────────────────────────

    /// Convert an engine color to egui.
    pub fn color(c: Color) -> Color32 {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }

    /// Blend a color toward another by `t` (0..1).
    pub fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        Color32::from_rgba_premultiplied(
            (a.r() as f32 * inv + b.r() as f32 * t) as u8,
            (a.g() as f32 * inv + b.g() as f32 * t) as u8,
            (a.b() as f32 * inv + b.b() as f32 * t) as u8,
            (a.a() as f32 * inv + b.a() as f32 * t) as u8,
        )
    }

    // ── Theme application ──────────────────────────────────────

    /// Apply the viewer theme to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg();
        visuals.window_fill = Self::slide_bg();
        visuals.extreme_bg_color = Self::bg();

        visuals.widgets.inactive.bg_fill = Self::control_bg();
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::t1());
        visuals.widgets.inactive.rounding = Rounding::same(Self::CONTROL_SIZE / 2.0);

        visuals.window_shadow = egui::epaint::Shadow {
            offset: Vec2::new(0.0, 4.0),
            blur: 20.0,
            spread: 0.0,
            color: Color32::from_rgba_premultiplied(0, 0, 0, 80),
        };

        ctx.set_style(style);
    }
}
