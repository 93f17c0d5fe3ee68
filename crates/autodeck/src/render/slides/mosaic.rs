//! Symbol mosaic: an 8x8 field of crosses and crescents scales in cell by
//! cell, then a scattered handful flashes red under the captions.

use eframe::egui::{Align2, Painter, Pos2, Rect};

use rand::Rng;

use crate::render::emblem::Emblem;
use crate::render::fx::{decorative_rng, ramp, SNAP};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{mix, with_opacity, Palette};

pub const GRID: usize = 8;

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);

    let cell = (rect.height() * 0.7 / GRID as f32).min(rect.width() * 0.5 / GRID as f32);
    let grid_origin = Pos2::new(
        rect.center().x - cell * GRID as f32 / 2.0,
        rect.top() + rect.height() * 0.1,
    );

    let mut rng = decorative_rng(3);
    for row in 0..GRID {
        for col in 0..GRID {
            let idx = row * GRID + col;
            let grow = SNAP.run(t, 0.3 + idx as f32 * 0.012, 0.6);
            if grow <= 0.0 {
                continue;
            }
            let center = Pos2::new(
                grid_origin.x + (col as f32 + 0.5) * cell,
                grid_origin.y + (row as f32 + 0.5) * cell,
            );
            // Roughly one cell in seven flashes red once the field is up.
            let flash = if rng.random_range(0..7) == 0 {
                let w = ramp(t, 1.5 + idx as f32 * 0.05, 1.2);
                (w * std::f32::consts::PI).sin()
            } else {
                0.0
            };
            let color = mix(palette.ink, palette.red, flash);
            Emblem::for_cell(row, col).draw(
                painter,
                center,
                cell * 0.55 * grow,
                with_opacity(color, opacity),
                palette.background,
            );
        }
    }

    let captions_y = grid_origin.y + cell * GRID as f32 + 60.0 * scale;
    let heading = text::font(palette.heading_size * 0.8 * scale);
    let a1 = ramp(t, 2.3, 0.6);
    let a2 = ramp(t, 2.8, 0.6);
    text::draw(
        painter,
        Pos2::new(rect.center().x, captions_y),
        Align2::CENTER_TOP,
        "United by purpose,",
        heading.clone(),
        with_opacity(palette.ink, a1 * opacity),
    );
    text::draw(
        painter,
        Pos2::new(rect.center().x, captions_y + palette.heading_size * scale),
        Align2::CENTER_TOP,
        "not profit.",
        heading,
        with_opacity(palette.red, a2 * opacity),
    );
}
