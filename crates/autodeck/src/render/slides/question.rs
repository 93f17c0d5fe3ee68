//! The harness question, five staggered lines with the two key words in
//! red, closed by a black dot that grows to fill the screen.

use eframe::egui::{Align2, Painter, Pos2, Rect};

use crate::render::fx::{ramp, SNAP, SOFT};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);
    let font = text::font(palette.heading_size * 0.9 * scale);
    let line_h = palette.heading_size * 1.15 * scale;

    let lines: [&[(&str, bool)]; 5] = [
        &[("How might we use", false)],
        &[("recognition", true), (" to inspire", false)],
        &[("more people to give time,", false)],
        &[("and ", false), ("positioning", true), (" to keep", false)],
        &[("them coming back?", false)],
    ];

    let top = rect.center().y - line_h * lines.len() as f32 / 2.0;
    for (i, segments) in lines.iter().enumerate() {
        let delay = 0.2 + i as f32 * 0.15;
        let in_t = SOFT.run(t, delay, 0.9);
        if in_t <= 0.0 {
            continue;
        }
        let colored: Vec<(&str, _)> = segments
            .iter()
            .map(|(s, hot)| {
                let color = if *hot { palette.red } else { palette.ink };
                (*s, with_opacity(color, in_t * opacity))
            })
            .collect();
        let galley = text::segmented_line(painter, &colored, font.clone());
        // Lines rise a short distance as they fade in.
        let rise = (1.0 - in_t) * 30.0 * scale;
        let pos = Pos2::new(rect.center().x, top + i as f32 * line_h + rise);
        text::draw_galley(painter, pos, Align2::CENTER_TOP, galley);
    }

    // The closing dot covers the viewport on its way to the dark ticker.
    let expand = SNAP.ease(ramp(t, 6.6, 1.5));
    if expand > 0.0 {
        let cover = rect.width().hypot(rect.height()) * 0.75;
        painter.circle_filled(
            Pos2::new(rect.center().x, rect.center().y + line_h * 3.0),
            6.0 * scale + cover * expand,
            with_opacity(palette.ink, opacity),
        );
    }
}
