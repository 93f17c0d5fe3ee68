pub mod emblem;
pub mod fx;
pub mod geometry;
pub mod text;

mod slides;

use eframe::egui::{Painter, Rect};

use crate::sequencer::SlideClock;
use crate::theme::Palette;

/// Paint one slide into `rect`. `opacity` scales every color the renderer
/// uses, which is how the cross-fade composites the outgoing slide.
pub fn slide(
    painter: &Painter,
    rect: Rect,
    number: usize,
    clock: &SlideClock,
    palette: &Palette,
    opacity: f32,
) {
    let painter = painter.with_clip_rect(rect);
    match number {
        1 => slides::title::draw(&painter, rect, clock, palette, opacity),
        2 => slides::credo::draw(&painter, rect, clock, palette, opacity),
        3 => slides::mosaic::draw(&painter, rect, clock, palette, opacity),
        4 => slides::clock::draw(&painter, rect, clock, palette, opacity),
        5 => slides::bars::draw(&painter, rect, clock, palette, opacity),
        6 => slides::question::draw(&painter, rect, clock, palette, opacity),
        7 => slides::ticker::draw(&painter, rect, clock, palette, opacity),
        8 => slides::marquee::draw(&painter, rect, clock, palette, opacity),
        _ => slides::valuation::draw(&painter, rect, clock, palette, opacity),
    }
}
