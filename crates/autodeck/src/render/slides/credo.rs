//! Dictionary slide: VOLUNTARY and SERVICE rise from behind masks, the
//! definition lines fade in, and the closing full stop swallows the screen.

use eframe::egui::{Align2, Painter, Pos2, Rect, Vec2};

use crate::render::fx::{ramp, SNAP, SOFT};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

const DEFINITION: [&str; 3] = [
    "the act of giving time and skill,",
    "freely and without compulsion,",
    "for the benefit of others.",
];

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);
    let heading = text::font(palette.heading_size * 1.6 * scale);
    let body = text::font(palette.body_size * scale);

    let left = rect.left() + rect.width() * 0.12;
    let top = rect.top() + rect.height() * 0.22;
    let line_h = palette.heading_size * 1.8 * scale;

    // Each headline rises out of a clip band, so it appears to emerge from
    // the baseline below it.
    for (i, (word, delay)) in [("VOLUNTARY", 0.3), ("SERVICE", 0.5)].iter().enumerate() {
        let rise = SNAP.run(t, *delay, 1.0);
        let band = Rect::from_min_size(
            Pos2::new(left, top + i as f32 * line_h),
            Vec2::new(rect.width(), line_h),
        );
        let masked = painter.with_clip_rect(band.intersect(rect));
        let y = band.bottom() - line_h * rise;
        let text_rect = text::draw(
            &masked,
            Pos2::new(left, y),
            Align2::LEFT_TOP,
            word,
            heading.clone(),
            with_opacity(palette.ink, opacity),
        );

        // Red colon dots drop in beside each headline.
        let dot_in = SNAP.run(t, 1.2 + i as f32 * 0.1, 0.4);
        if dot_in > 0.0 {
            let r = 6.0 * scale * dot_in;
            let x = text_rect.right() + 24.0 * scale;
            let cy = text_rect.center().y;
            painter.circle_filled(
                Pos2::new(x, cy - 10.0 * scale),
                r,
                with_opacity(palette.red, opacity),
            );
            painter.circle_filled(
                Pos2::new(x, cy + 10.0 * scale),
                r,
                with_opacity(palette.red, opacity),
            );
        }
    }

    let def_top = top + 2.0 * line_h + 40.0 * scale;
    for (i, line) in DEFINITION.iter().enumerate() {
        let alpha = SOFT.run(t, 2.0 + i as f32 * 0.3, 0.8);
        text::draw(
            painter,
            Pos2::new(left, def_top + i as f32 * palette.body_size * 1.6 * scale),
            Align2::LEFT_TOP,
            line,
            body.clone(),
            with_opacity(palette.faint_ink, alpha * opacity),
        );
    }

    // The period after the definition grows until it covers the viewport,
    // handing off to the dark slide that follows.
    let expand = SNAP.ease(ramp(t, 6.8, 1.5));
    let dot_center = Pos2::new(
        left + 300.0 * scale,
        def_top + 3.0 * palette.body_size * 1.6 * scale,
    );
    let cover_radius = (rect.width().hypot(rect.height())) * 0.75;
    let radius = 5.0 * scale + cover_radius * expand;
    if t >= 5.0 {
        painter.circle_filled(dot_center, radius, with_opacity(palette.ink, opacity));
    }
}
