//! The mosaic returns, then its ring cells fly onto a 20-spoke circle that
//! becomes a ticking clock face while the remaining cells shrink away.

use eframe::egui::{Align2, Painter, Pos2, Rect, Stroke};

use crate::render::emblem::Emblem;
use crate::render::fx::{lerp, ramp, SNAP};
use crate::render::geometry::{polar_to_cartesian, ring_cells, spoke_target};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

use super::mosaic::GRID;

/// One full revolution of the hand.
const HAND_PERIOD: f32 = 20.0;

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);

    let cell = (rect.height() * 0.7 / GRID as f32).min(rect.width() * 0.5 / GRID as f32);
    let grid_origin = Pos2::new(
        rect.center().x - cell * GRID as f32 / 2.0,
        rect.top() + rect.height() * 0.1,
    );
    let face_center = Pos2::new(rect.center().x, rect.top() + rect.height() * 0.42);
    let face_radius = rect.height() * 0.28;

    let morph = SNAP.ease(ramp(t, 2.0, 1.5));
    let ring = ring_cells(GRID, GRID);

    for row in 0..GRID {
        for col in 0..GRID {
            let idx = row * GRID + col;
            let grow = SNAP.run(t, 0.2 + idx as f32 * 0.012, 0.6);
            if grow <= 0.0 {
                continue;
            }
            let home = Pos2::new(
                grid_origin.x + (col as f32 + 0.5) * cell,
                grid_origin.y + (row as f32 + 0.5) * cell,
            );
            let spoke = ring
                .iter()
                .find(|c| c.row == row && c.col == col)
                .map(|c| c.spoke);
            let (center, size) = match spoke {
                Some(spoke) => {
                    let target = spoke_target(face_center, face_radius, spoke);
                    (
                        home + (target - home) * morph,
                        cell * 0.55 * grow * lerp(1.0, 0.45, morph),
                    )
                }
                // Cells off the ring shrink to nothing as the face forms.
                None => (home, cell * 0.55 * grow * (1.0 - morph)),
            };
            if size <= 0.5 {
                continue;
            }
            Emblem::for_cell(row, col).draw(
                painter,
                center,
                size,
                with_opacity(palette.ink, opacity),
                palette.background,
            );
        }
    }

    if morph > 0.6 {
        let face_alpha = ramp(t, 3.0, 0.5) * opacity;
        painter.circle_stroke(
            face_center,
            face_radius,
            Stroke::new(2.0 * scale, with_opacity(palette.faint_ink, face_alpha)),
        );
        // The hand sweeps one revolution every HAND_PERIOD seconds.
        let angle = (t - 3.0).max(0.0) / HAND_PERIOD * 360.0;
        let tip = polar_to_cartesian(face_center, face_radius * 0.82, angle);
        painter.line_segment(
            [face_center, tip],
            Stroke::new(3.0 * scale, with_opacity(palette.red, face_alpha)),
        );
        painter.circle_filled(face_center, 5.0 * scale, with_opacity(palette.red, face_alpha));
    }

    let heading = text::font(palette.heading_size * 0.8 * scale);
    let captions_y = face_center.y + face_radius + 70.0 * scale;
    text::draw(
        painter,
        Pos2::new(rect.center().x, captions_y),
        Align2::CENTER_TOP,
        "Acts of service,",
        heading.clone(),
        with_opacity(palette.ink, ramp(t, 5.0, 0.6) * opacity),
    );
    text::draw(
        painter,
        Pos2::new(rect.center().x, captions_y + palette.heading_size * scale),
        Align2::CENTER_TOP,
        "rooted in our fundamental principles.",
        heading,
        with_opacity(palette.faint_ink, ramp(t, 5.5, 0.6) * opacity),
    );
}
