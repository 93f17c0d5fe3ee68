//! Oversized question marquee over a slowly drifting band of emblems.

use eframe::egui::{Painter, Pos2, Rect};

use rand::Rng;

use crate::render::emblem::Emblem;
use crate::render::fx::{decorative_rng, ramp};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

const QUESTION: [(&str, bool); 4] = [
    ("How might we use ", false),
    ("recognition", true),
    (" and ", false),
    ("positioning", true),
];

const MARQUEE_PERIOD: f32 = 27.0;
const BAND_SHAPES: usize = 14;

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);
    let enter = ramp(t, 0.3, 0.8);

    // Drifting shape band along the lower half, each emblem with its own
    // size and lane, wrapping around the right edge.
    let mut rng = decorative_rng(8);
    for i in 0..BAND_SHAPES {
        let lane: f32 = rng.random_range(0.58..0.9);
        let size = (24.0 + (i % 5) as f32 * 10.0) * scale;
        let speed = rng.random_range(18.0..40.0) * scale;
        let start: f32 = rng.random_range(0.0..rect.width());
        let x = (start + t * speed).rem_euclid(rect.width() + size * 2.0) - size;
        let emblem = if i % 2 == 0 {
            Emblem::Cross
        } else {
            Emblem::Crescent
        };
        emblem.draw(
            painter,
            Pos2::new(rect.left() + x, rect.top() + rect.height() * lane),
            size,
            with_opacity(palette.faint_ink, 0.5 * enter * opacity),
            palette.background,
        );
    }

    // The question scrolls as one huge line, taller than it is readable,
    // crossing the screen once per loop.
    let font = text::font(palette.display_size * 1.8 * scale);
    let colored: Vec<(&str, _)> = QUESTION
        .iter()
        .map(|(s, hot)| {
            let color = if *hot { palette.red } else { palette.ink };
            (*s, with_opacity(color, enter * opacity))
        })
        .collect();
    let galley = text::segmented_line(painter, &colored, font);
    let span = galley.size().x + rect.width();
    let offset = ((t / MARQUEE_PERIOD).fract()) * span;
    painter.galley(
        Pos2::new(
            rect.right() - offset,
            rect.top() + rect.height() * 0.3 - galley.size().y / 2.0,
        ),
        galley,
        palette.ink,
    );
}
