//! Dark ticker: symbol strips frame the screen top and bottom, red flash
//! waves sweep across them, and the GDP line loops as a center marquee.

use eframe::egui::{Painter, Pos2, Rect};

use crate::render::emblem::Emblem;
use crate::render::fx::{ramp, SNAP};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{mix, with_opacity, Palette};

const STRIP_COLS: usize = 16;
const WAVES: [f32; 4] = [0.8, 2.0, 3.5, 5.0];
const MARQUEE_PERIOD: f32 = 10.0;

const MARQUEE: [(&str, bool); 5] = [
    ("Globally, volunteers contribute ", false),
    ("2.4% of GDP", true),
    ("\u{2014}a ", false),
    ("trillion-dollar", true),
    (" support system.", false),
];

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);

    let cell = rect.width() / STRIP_COLS as f32;
    for band in 0..2 {
        let y = if band == 0 {
            rect.top() + cell * 0.7
        } else {
            rect.bottom() - cell * 0.7
        };
        for col in 0..STRIP_COLS {
            let idx = band * STRIP_COLS + col;
            let grow = SNAP.run(t, 0.3 + band as f32 * 0.2 + col as f32 * 0.008, 0.5);
            if grow <= 0.0 {
                continue;
            }
            // Successive waves push a red highlight down each strip.
            let mut flash = 0.0_f32;
            for wave in WAVES {
                let w = ramp(t, wave + col as f32 * 0.02, 2.0);
                flash = flash.max((w * std::f32::consts::PI).sin());
            }
            let color = mix(palette.faint_ink, palette.red, flash);
            Emblem::for_cell(band, col).draw(
                painter,
                Pos2::new(rect.left() + (col as f32 + 0.5) * cell, y),
                cell * 0.45 * grow,
                with_opacity(color, opacity),
                palette.background,
            );
        }
    }

    let font = text::font(palette.heading_size * 1.1 * scale);
    let colored: Vec<(&str, _)> = MARQUEE
        .iter()
        .map(|(s, hot)| {
            let color = if *hot { palette.red } else { palette.ink };
            (*s, with_opacity(color, ramp(t, 1.3, 0.8) * opacity))
        })
        .collect();
    let galley = text::segmented_line(painter, &colored, font);
    let span = galley.size().x + rect.width();
    // Constant-speed loop, re-entering from the right edge each period.
    let offset = ((t / MARQUEE_PERIOD).fract()) * span;
    let pos = Pos2::new(
        rect.right() - offset,
        rect.center().y - galley.size().y / 2.0,
    );
    painter.galley(pos, galley, palette.ink);
}
