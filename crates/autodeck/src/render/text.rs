use std::sync::Arc;

use eframe::egui::text::LayoutJob;
use eframe::egui::{Align2, Color32, FontId, Galley, Painter, Pos2, Rect, TextFormat, Vec2};

pub fn font(size: f32) -> FontId {
    FontId::proportional(size)
}

/// Width and height a single unwrapped line would occupy.
pub fn measure(painter: &Painter, text: &str, font_id: FontId) -> Vec2 {
    painter
        .layout_no_wrap(text.to_owned(), font_id, Color32::PLACEHOLDER)
        .size()
}

pub fn draw(
    painter: &Painter,
    pos: Pos2,
    anchor: Align2,
    text: &str,
    font_id: FontId,
    color: Color32,
) -> Rect {
    painter.text(pos, anchor, text, font_id, color)
}

/// A single line built from differently colored segments, e.g. a sentence
/// with highlighted words. Returns the laid-out galley for the caller to
/// place and measure.
pub fn segmented_line(
    painter: &Painter,
    segments: &[(&str, Color32)],
    font_id: FontId,
) -> Arc<Galley> {
    let mut job = LayoutJob::default();
    for (text, color) in segments {
        job.append(
            text,
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color: *color,
                ..Default::default()
            },
        );
    }
    painter.layout_job(job)
}

pub fn draw_galley(painter: &Painter, pos: Pos2, anchor: Align2, galley: Arc<Galley>) {
    let rect = anchor.anchor_size(pos, galley.size());
    painter.galley(rect.min, galley, Color32::PLACEHOLDER);
}
