//! Terminal slide: a slanted split screen with the valuation pills on the
//! left and the hours-distribution pie spinning in on the right. The deck
//! holds here; only the narration fades.

use eframe::egui::{Align2, Color32, Painter, Pos2, Rect, Shape, Vec2};

use crate::render::fx::{lerp, ramp, SNAP};
use crate::render::geometry::{pie_slices, polar_to_cartesian, slice_points, PieSlice};
use crate::render::text;
use crate::sequencer::SlideClock;
use crate::theme::{with_opacity, Palette};

pub const HOURS_SPLIT: [f32; 4] = [53.0, 37.0, 5.0, 5.0];

const SLICE_LABELS: [&str; 4] = ["5 - 15 hours", "15 - 25 hours", "0 - 5 hours", "50+ hours"];

fn slice_color(i: usize, palette: &Palette) -> Color32 {
    match i {
        0 => palette.blue,
        1 => palette.navy,
        2 => palette.red,
        _ => palette.parchment,
    }
}

struct Pill {
    year: &'static str,
    hours: &'static str,
    value: &'static str,
    grow_at: f32,
    label_at: f32,
}

const PILLS: [Pill; 2] = [
    Pill {
        year: "2011",
        hours: "4 hrs",
        value: "$300M",
        grow_at: 0.8,
        label_at: 2.1,
    },
    Pill {
        year: "2025",
        hours: "180 hrs",
        value: "$13.5B",
        grow_at: 2.3,
        label_at: 3.6,
    },
];

pub fn draw(painter: &Painter, rect: Rect, clock: &SlideClock, palette: &Palette, opacity: f32) {
    let t = clock.since_start;
    let scale = (rect.width() / 1600.0).clamp(0.5, 1.2);

    // Slanted divider: the parchment panel takes 45% of the width at the
    // top and 55% at the bottom.
    let top_split = rect.left() + rect.width() * 0.45;
    let bottom_split = rect.left() + rect.width() * 0.55;
    painter.add(Shape::convex_polygon(
        vec![
            rect.left_top(),
            Pos2::new(top_split, rect.top()),
            Pos2::new(bottom_split, rect.bottom()),
            rect.left_bottom(),
        ],
        with_opacity(palette.parchment, opacity),
        eframe::egui::Stroke::NONE,
    ));

    draw_pills(painter, rect, t, palette, opacity, scale);
    draw_pie(painter, rect, t, palette, opacity, scale);
}

fn draw_pills(
    painter: &Painter,
    rect: Rect,
    t: f32,
    palette: &Palette,
    opacity: f32,
    scale: f32,
) {
    let body = text::font(palette.body_size * scale);
    let caption = text::font(palette.caption_size * scale);
    let left = rect.left() + rect.width() * 0.06;
    let usable = rect.width() * 0.3;

    text::draw(
        painter,
        Pos2::new(left, rect.top() + rect.height() * 0.14),
        Align2::LEFT_TOP,
        "What a volunteer gives",
        text::font(palette.heading_size * 0.6 * scale),
        with_opacity(palette.navy, ramp(t, 0.3, 0.6) * opacity),
    );

    let bar_h = 58.0 * scale;
    let first_y = rect.top() + rect.height() * 0.3;
    for (i, pill) in PILLS.iter().enumerate() {
        let y = first_y + i as f32 * bar_h * 2.2;
        let grow = SNAP.run(t, pill.grow_at, 1.1);
        if grow <= 0.0 {
            continue;
        }
        let color = if i == 0 { palette.blue } else { palette.red };
        let fill = if i == 0 { 0.35 } else { 0.95 };
        let pill_rect = Rect::from_min_size(
            Pos2::new(left, y),
            Vec2::new(usable * fill * grow, bar_h),
        );
        painter.rect_filled(pill_rect, bar_h / 2.0, with_opacity(color, opacity));

        text::draw(
            painter,
            Pos2::new(left, y - 8.0 * scale),
            Align2::LEFT_BOTTOM,
            pill.year,
            caption.clone(),
            with_opacity(palette.navy, grow * opacity),
        );
        let label_alpha = ramp(t, pill.label_at, 0.5) * opacity;
        text::draw(
            painter,
            Pos2::new(pill_rect.left() + 20.0 * scale, pill_rect.center().y),
            Align2::LEFT_CENTER,
            pill.hours,
            body.clone(),
            with_opacity(palette.parchment, label_alpha),
        );
        text::draw(
            painter,
            Pos2::new(pill_rect.right() + 16.0 * scale, pill_rect.center().y),
            Align2::LEFT_CENTER,
            pill.value,
            body.clone(),
            with_opacity(palette.navy, label_alpha),
        );
    }

    let note_y = first_y + 2.0 * bar_h * 2.2 + 14.0 * scale;
    text::draw(
        painter,
        Pos2::new(left, note_y),
        Align2::LEFT_TOP,
        "* annual hours and estimated economic value",
        caption.clone(),
        with_opacity(palette.navy, ramp(t, 4.1, 0.5) * 0.7 * opacity),
    );
    text::draw(
        painter,
        Pos2::new(left, note_y + palette.caption_size * 1.6 * scale),
        Align2::LEFT_TOP,
        "Source: volunteer hour audits, 2011 / 2025",
        caption,
        with_opacity(palette.navy, ramp(t, 4.5, 0.5) * 0.7 * opacity),
    );
}

fn draw_pie(painter: &Painter, rect: Rect, t: f32, palette: &Palette, opacity: f32, scale: f32) {
    let center = Pos2::new(
        rect.left() + rect.width() * 0.76,
        rect.top() + rect.height() * 0.46,
    );
    let radius = rect.height() * 0.24;

    text::draw(
        painter,
        Pos2::new(center.x, rect.top() + rect.height() * 0.12),
        Align2::CENTER_TOP,
        "Volunteers by monthly hours",
        text::font(palette.heading_size * 0.55 * scale),
        with_opacity(palette.ink, ramp(t, 4.8, 0.5) * opacity),
    );

    // The whole chart spins in: scale 0 to 1 while rotating a half turn.
    let spin = SNAP.ease(ramp(t, 5.1, 1.0));
    if spin <= 0.0 {
        return;
    }
    let rotation = lerp(-180.0, 0.0, spin);
    let slices = pie_slices(&HOURS_SPLIT);

    for (i, slice) in slices.iter().enumerate() {
        let reveal = ramp(t, 5.3 + i as f32 * 0.1, 0.4);
        if reveal <= 0.0 {
            continue;
        }
        let rotated = PieSlice {
            start_angle: slice.start_angle + rotation,
            end_angle: slice.end_angle + rotation,
            fraction: slice.fraction,
        };
        painter.add(Shape::convex_polygon(
            slice_points(center, radius * spin, &rotated),
            with_opacity(slice_color(i, palette), reveal * opacity),
            eframe::egui::Stroke::NONE,
        ));
    }

    let caption = text::font(palette.caption_size * scale);
    for (i, slice) in slices.iter().enumerate() {
        let alpha = ramp(t, 5.8 + i as f32 * 0.1, 0.4) * opacity;
        if alpha <= 0.0 {
            continue;
        }
        let pos = polar_to_cartesian(center, radius * 0.65, slice.mid_angle());
        let color = if i == 1 { palette.parchment } else { palette.navy };
        text::draw(
            painter,
            pos,
            Align2::CENTER_CENTER,
            &format!("{:.0}%", slice.fraction * 100.0),
            caption.clone(),
            with_opacity(color, alpha),
        );
    }

    let legend_alpha = ramp(t, 6.3, 0.5) * opacity;
    if legend_alpha > 0.0 {
        let mut y = center.y + radius + 40.0 * scale;
        for (i, label) in SLICE_LABELS.iter().enumerate() {
            let swatch = Rect::from_min_size(
                Pos2::new(center.x - radius, y),
                Vec2::splat(12.0 * scale),
            );
            painter.rect_filled(swatch, 2.0, with_opacity(slice_color(i, palette), legend_alpha));
            text::draw(
                painter,
                Pos2::new(swatch.right() + 10.0 * scale, swatch.center().y),
                Align2::LEFT_CENTER,
                label,
                caption.clone(),
                with_opacity(palette.ink, legend_alpha),
            );
            y += 20.0 * scale;
        }
    }
    text::draw(
        painter,
        Pos2::new(center.x, rect.bottom() - 30.0 * scale),
        Align2::CENTER_BOTTOM,
        "Source: volunteer engagement survey, 2025",
        caption,
        with_opacity(palette.faint_ink, ramp(t, 6.5, 0.5) * opacity),
    );
}
