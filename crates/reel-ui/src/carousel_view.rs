//! Carousel viewer: slide strip, indicator row and the playback control.
//!
//! The view only reads the engine. Clicks are reported back through
//! [`ViewResponse`] so the host decides when to dispatch.

use egui::{pos2, vec2, Align2, Color32, FontId, Id, Painter, Rect, Rounding, Sense, Ui};
use reel_core::{Color, Viewport};
use reel_playback::{Carousel, ControlAction, IndicatorVisual, MediaElement};

use crate::anim::AnimFloat;
use crate::theme::Theme;

/// What happened in the view this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewResponse {
    pub control_clicked: bool,
}

/// Glyph drawn inside the control button.
pub fn control_glyph(action: ControlAction) -> &'static str {
    match action {
        ControlAction::Replay => "🔄",
        ControlAction::Play => "▶",
        ControlAction::Pause => "⏸",
    }
}

/// Horizontal position of slide `index` relative to the strip origin.
///
/// `offset_percent` is the strip translation in percent of one slide
/// width, as produced by the transition controller.
pub fn slide_x(index: usize, offset_percent: f64, slide_width: f32, gap: f32) -> f32 {
    let slot = index as f32 + (offset_percent / 100.0) as f32;
    slot * (slide_width + gap)
}

/// Stateful viewer for one carousel.
pub struct CarouselView {
    /// Displayed indicator widths, eased toward the engine's targets.
    widths: Vec<AnimFloat>,
}

impl CarouselView {
    pub fn new(clip_count: usize) -> Self {
        Self {
            widths: (0..clip_count)
                .map(|_| AnimFloat::new(Theme::DOT_SIZE, 12.0))
                .collect(),
        }
    }

    pub fn show<M: MediaElement>(&mut self, ui: &mut Ui, carousel: &Carousel<M>) -> ViewResponse {
        let rect = ui.max_rect();
        ui.allocate_rect(rect, Sense::hover());
        let dt = ui.input(|i| i.stable_dt);
        let viewport = carousel.viewport();

        if self.widths.len() != carousel.clip_count() {
            *self = Self::new(carousel.clip_count());
        }

        let controls_height = Theme::CONTROL_SIZE + Theme::SPACE_LG * 2.0;
        let strip = Rect::from_min_max(
            rect.min,
            pos2(rect.right(), (rect.bottom() - controls_height).max(rect.top())),
        );
        self.paint_slides(&ui.painter().with_clip_rect(strip), strip, carousel);

        let row_center = pos2(rect.center().x, rect.bottom() - controls_height / 2.0);
        let tray = self.paint_indicators(ui.painter(), row_center, viewport, carousel, dt);

        let control_rect = Rect::from_center_size(
            pos2(tray.right() + Theme::SPACE_MD + Theme::CONTROL_SIZE / 2.0, row_center.y),
            vec2(Theme::CONTROL_SIZE, Theme::CONTROL_SIZE),
        );
        let action = carousel.control();
        let response = ui
            .interact(control_rect, Id::new("reel_control"), Sense::click())
            .on_hover_text(action.label());
        let fill = if response.hovered() {
            Theme::lerp(Theme::control_bg(), Theme::t1(), 0.15)
        } else {
            Theme::control_bg()
        };
        let painter = ui.painter();
        painter.circle_filled(control_rect.center(), Theme::CONTROL_SIZE / 2.0, fill);
        painter.text(
            control_rect.center(),
            Align2::CENTER_CENTER,
            control_glyph(action),
            FontId::proportional(Theme::FONT_ICON),
            Theme::t1(),
        );

        ViewResponse {
            control_clicked: response.clicked(),
        }
    }

    fn paint_slides<M: MediaElement>(&self, painter: &Painter, strip: Rect, carousel: &Carousel<M>) {
        let slide_width = (strip.width() - Theme::SPACE_XL * 2.0).max(1.0);
        let slide_height = (strip.height() - Theme::SPACE_XL).max(1.0);
        let origin = pos2(strip.left() + Theme::SPACE_XL, strip.top() + Theme::SPACE_LG);
        let offset = carousel.slide_offset_percent();

        for (index, clip) in carousel.catalog().iter().enumerate() {
            let x = origin.x + slide_x(index, offset, slide_width, Theme::SLIDE_GAP);
            let slide = Rect::from_min_size(pos2(x, origin.y), vec2(slide_width, slide_height));
            if !slide.intersects(strip) {
                continue;
            }
            painter.rect_filled(slide, Rounding::same(Theme::SLIDE_RADIUS), Theme::slide_bg());

            let mut y = slide.top() + Theme::SPACE_XL;
            for line in &clip.caption_lines {
                painter.text(
                    pos2(slide.left() + Theme::SPACE_XL, y),
                    Align2::LEFT_TOP,
                    line,
                    FontId::proportional(Theme::FONT_CAPTION),
                    Theme::t1(),
                );
                y += Theme::FONT_CAPTION * 1.3;
            }

            let position = carousel.media(index).map(|m| m.current_time()).unwrap_or(0.0);
            painter.text(
                pos2(slide.left() + Theme::SPACE_XL, slide.bottom() - Theme::SPACE_LG),
                Align2::LEFT_BOTTOM,
                format!("{}  {:.1}s / {:.1}s", clip.source_uri, position, clip.duration_seconds),
                FontId::monospace(Theme::FONT_SM),
                Theme::t2(),
            );
        }
    }

    /// Paint the indicator tray and return its rect.
    fn paint_indicators<M: MediaElement>(
        &mut self,
        painter: &Painter,
        center: egui::Pos2,
        viewport: Viewport,
        carousel: &Carousel<M>,
        dt: f32,
    ) -> Rect {
        let widths: Vec<f32> = self
            .widths
            .iter_mut()
            .enumerate()
            .map(|(index, anim)| {
                let target = carousel
                    .indicator(index)
                    .map(|v| v.container_width.to_px(viewport))
                    .unwrap_or(Theme::DOT_SIZE);
                anim.follow(target, dt)
            })
            .collect();

        let spacing = Theme::SPACE_SM + 2.0;
        let inner: f32 = widths.iter().sum::<f32>() + spacing * widths.len().saturating_sub(1) as f32;
        let tray = Rect::from_center_size(
            center,
            vec2(inner + Theme::SPACE_LG * 2.0, Theme::CONTROL_SIZE),
        );
        painter.rect_filled(tray, Rounding::same(Theme::CONTROL_SIZE / 2.0), Theme::indicator_tray());

        let mut x = tray.left() + Theme::SPACE_LG;
        for (index, width) in widths.into_iter().enumerate() {
            let pill = Rect::from_min_size(
                pos2(x, center.y - Theme::DOT_SIZE / 2.0),
                vec2(width, Theme::DOT_SIZE),
            );
            let rounding = Rounding::same(Theme::DOT_SIZE / 2.0);
            painter.rect_filled(pill, rounding, Theme::color(Color::TRACK));
            if let Some(visual) = carousel.indicator(index) {
                paint_fill(painter, pill, rounding, visual);
            }
            x += width + spacing;
        }
        tray
    }
}

fn paint_fill(painter: &Painter, pill: Rect, rounding: Rounding, visual: &IndicatorVisual) {
    if visual.fill_percent == 0 {
        return;
    }
    let fill_width = pill.width() * f32::from(visual.fill_percent) / 100.0;
    let fill = Rect::from_min_size(pill.min, vec2(fill_width, pill.height()));
    let color: Color32 = Theme::color(visual.fill_color);
    painter.rect_filled(fill, rounding, color);
}
