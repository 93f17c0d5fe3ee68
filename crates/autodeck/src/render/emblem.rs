//! The two movement symbols, drawn as vector shapes so the binary carries
//! no image assets.

use eframe::egui::{Color32, Painter, Pos2, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emblem {
    Cross,
    Crescent,
}

impl Emblem {
    /// Alternate symbols across a grid, checkerboard style.
    pub fn for_cell(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Emblem::Cross
        } else {
            Emblem::Crescent
        }
    }

    /// Paint the emblem centered at `center`, fitting a `size`-wide square.
    /// The crescent's bite is cut with `background`, so callers pass the
    /// color actually behind the symbol.
    pub fn draw(
        &self,
        painter: &Painter,
        center: Pos2,
        size: f32,
        color: Color32,
        background: Color32,
    ) {
        match self {
            Emblem::Cross => {
                let arm = size / 3.0;
                painter.rect_filled(
                    Rect::from_center_size(center, Vec2::new(size, arm)),
                    0.0,
                    color,
                );
                painter.rect_filled(
                    Rect::from_center_size(center, Vec2::new(arm, size)),
                    0.0,
                    color,
                );
            }
            Emblem::Crescent => {
                let radius = size * 0.5;
                painter.circle_filled(center, radius, color);
                // Offset cutout leaves a crescent opening to the right.
                let bite = center + Vec2::new(radius * 0.45, 0.0);
                painter.circle_filled(bite, radius * 0.78, background);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_alternates_symbols() {
        assert_eq!(Emblem::for_cell(0, 0), Emblem::Cross);
        assert_eq!(Emblem::for_cell(0, 1), Emblem::Crescent);
        assert_eq!(Emblem::for_cell(1, 0), Emblem::Crescent);
        assert_eq!(Emblem::for_cell(3, 5), Emblem::Cross);
    }
}
