//! Hours-per-volunteer comparison: the 2025 bar lands first, the 2011 bar
//! follows, and the chart then holds while the narration carries on.

use eframe::egui::{Align2, Painter, Pos2, Rect, Vec2};

use crate::render::fx::{ramp, SNAP};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

struct Bar {
    year: &'static str,
    hours: &'static str,
    value: &'static str,
    fill: f32,
    grow_at: f32,
    label_at: f32,
}

const BARS: [Bar; 2] = [
    Bar {
        year: "2025",
        hours: "180 hrs / volunteer",
        value: "$13.5B",
        fill: 0.85,
        grow_at: 0.8,
        label_at: 2.1,
    },
    Bar {
        year: "2011",
        hours: "4 hrs / volunteer",
        value: "$300M",
        fill: 0.70,
        grow_at: 3.5,
        label_at: 5.1,
    },
];

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);

    let heading = text::font(palette.heading_size * 0.7 * scale);
    let body = text::font(palette.body_size * scale);
    let caption = text::font(palette.caption_size * scale);

    let left = rect.left() + rect.width() * 0.12;
    let usable = rect.width() * 0.76;

    text::draw(
        painter,
        Pos2::new(left, rect.top() + rect.height() * 0.16),
        Align2::LEFT_TOP,
        "The hours have multiplied.",
        heading,
        with_opacity(palette.ink, ramp(t, 0.3, 0.6) * opacity),
    );

    let bar_h = 72.0 * scale;
    let first_y = rect.top() + rect.height() * 0.34;
    for (i, bar) in BARS.iter().enumerate() {
        let y = first_y + i as f32 * bar_h * 2.0;
        let grow = SNAP.run(t, bar.grow_at, 1.3);
        if grow <= 0.0 {
            continue;
        }
        let color = if i == 0 { palette.red } else { palette.blue };
        let width = usable * bar.fill * grow;
        let pill = Rect::from_min_size(Pos2::new(left, y), Vec2::new(width, bar_h));
        painter.rect_filled(pill, bar_h / 2.0, with_opacity(color, opacity));

        text::draw(
            painter,
            Pos2::new(left, y - 10.0 * scale),
            Align2::LEFT_BOTTOM,
            bar.year,
            body.clone(),
            with_opacity(palette.faint_ink, grow * opacity),
        );

        let label_alpha = ramp(t, bar.label_at, 0.5) * opacity;
        text::draw(
            painter,
            Pos2::new(pill.left() + 28.0 * scale, pill.center().y),
            Align2::LEFT_CENTER,
            bar.hours,
            body.clone(),
            with_opacity(palette.parchment, label_alpha),
        );
        text::draw(
            painter,
            Pos2::new(pill.right() + 20.0 * scale, pill.center().y),
            Align2::LEFT_CENTER,
            bar.value,
            body.clone(),
            with_opacity(palette.ink, label_alpha),
        );
    }

    let note_y = first_y + 2.0 * bar_h * 2.0 + 20.0 * scale;
    text::draw(
        painter,
        Pos2::new(left, note_y),
        Align2::LEFT_TOP,
        "* 2025 figures are estimates",
        caption.clone(),
        with_opacity(palette.faint_ink, ramp(t, 5.8, 0.5) * opacity),
    );
    text::draw(
        painter,
        Pos2::new(left, note_y + palette.caption_size * 1.6 * scale),
        Align2::LEFT_TOP,
        "Source: national volunteering surveys, 2011 and 2025",
        caption,
        with_opacity(palette.faint_ink, ramp(t, 6.1, 0.5) * opacity),
    );
}
