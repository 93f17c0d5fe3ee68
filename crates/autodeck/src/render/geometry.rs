//! Shared geometry for the chart and clock slides.

use eframe::egui::{Pos2, Vec2};

/// One wedge of a pie chart, angles in degrees with 0° at twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start_angle: f32,
    pub end_angle: f32,
    pub fraction: f32,
}

impl PieSlice {
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) * 0.5
    }
}

/// Build slices from percentage weights. Boundaries come from the cumulative
/// fraction, not from summed sweeps, so the wedges tile the circle exactly:
/// the last slice always ends at 270° no matter how the rounding falls.
pub fn pie_slices(weights: &[f32]) -> Vec<PieSlice> {
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut slices = Vec::with_capacity(weights.len());
    let mut cumulative = 0.0;
    let mut start = -90.0;
    for &w in weights {
        cumulative += w;
        let end = -90.0 + 360.0 * (cumulative / total);
        slices.push(PieSlice {
            start_angle: start,
            end_angle: end,
            fraction: w / total,
        });
        start = end;
    }
    slices
}

/// Degrees to a point on a circle, with 0° at twelve o'clock and positive
/// angles running clockwise (screen coordinates, y down).
pub fn polar_to_cartesian(center: Pos2, radius: f32, angle_deg: f32) -> Pos2 {
    let rad = (angle_deg - 90.0).to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * radius
}

/// Fan of points covering one slice, for `Shape::convex_polygon`.
pub fn slice_points(center: Pos2, radius: f32, slice: &PieSlice) -> Vec<Pos2> {
    let steps = ((slice.sweep() / 4.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = slice.start_angle + slice.sweep() * (i as f32 / steps as f32);
        points.push(polar_to_cartesian(center, radius, angle));
    }
    points
}

/// A grid cell selected to morph onto the clock ring, with its target spoke.
#[derive(Debug, Clone, Copy)]
pub struct RingCell {
    pub row: usize,
    pub col: usize,
    /// 0..RING_SPOKES, counted clockwise from twelve o'clock.
    pub spoke: usize,
}

pub const RING_SPOKES: usize = 20;

/// Pick the grid cells that form the ring: cells whose center sits between
/// 2.5 and 4 half-cell units from the grid center, quantized onto evenly
/// spaced spokes by their own bearing.
pub fn ring_cells(rows: usize, cols: usize) -> Vec<RingCell> {
    let cy = (rows as f32 - 1.0) / 2.0;
    let cx = (cols as f32 - 1.0) / 2.0;
    let mut cells = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let dy = row as f32 - cy;
            let dx = col as f32 - cx;
            let dist = (dx * dx + dy * dy).sqrt();
            if !(2.5..=4.0).contains(&dist) {
                continue;
            }
            // atan2 with x first gives the clockwise bearing from north.
            let bearing = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
            let spoke =
                ((bearing / 360.0 * RING_SPOKES as f32).round() as usize) % RING_SPOKES;
            cells.push(RingCell { row, col, spoke });
        }
    }
    cells
}

/// Where a spoke's cell lands once the morph completes.
pub fn spoke_target(center: Pos2, radius: f32, spoke: usize) -> Pos2 {
    polar_to_cartesian(center, radius, 360.0 * spoke as f32 / RING_SPOKES as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURS_SPLIT: [f32; 4] = [53.0, 37.0, 5.0, 5.0];

    #[test]
    fn slices_tile_the_full_circle() {
        let slices = pie_slices(&HOURS_SPLIT);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start_angle, -90.0);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let last = slices.last().unwrap();
        assert!((last.end_angle - 270.0).abs() < 1e-4);
        let total_sweep: f32 = slices.iter().map(PieSlice::sweep).sum();
        assert!((total_sweep - 360.0).abs() < 1e-4);
    }

    #[test]
    fn slice_sweeps_match_their_weights() {
        let slices = pie_slices(&HOURS_SPLIT);
        assert!((slices[0].sweep() - 360.0 * 0.53).abs() < 1e-3);
        assert!((slices[1].sweep() - 360.0 * 0.37).abs() < 1e-3);
        assert!((slices[2].sweep() - 360.0 * 0.05).abs() < 1e-3);
        assert!((slices[3].sweep() - 360.0 * 0.05).abs() < 1e-3);
    }

    #[test]
    fn degenerate_weights_produce_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn polar_zero_is_straight_up() {
        let c = Pos2::new(100.0, 100.0);
        let top = polar_to_cartesian(c, 50.0, 0.0);
        assert!((top.x - 100.0).abs() < 1e-3);
        assert!((top.y - 50.0).abs() < 1e-3);
        let right = polar_to_cartesian(c, 50.0, 90.0);
        assert!((right.x - 150.0).abs() < 1e-3);
        assert!((right.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn ring_selection_is_symmetric_and_covers_spokes() {
        let cells = ring_cells(8, 8);
        assert!(!cells.is_empty());
        for cell in &cells {
            assert!(cell.spoke < RING_SPOKES);
            // The selection band is symmetric under 180 degree rotation.
            assert!(cells
                .iter()
                .any(|c| c.row == 7 - cell.row && c.col == 7 - cell.col));
        }
    }
}
