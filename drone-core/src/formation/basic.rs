//! Lines, grids and regular polygons.

use super::geometry::{grid, polygon_outline, ring};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::PI;

/// Grid spacing per unit of scale (1.2 units at the default scale of 8).
const GRID_SPACING: f32 = 0.15;

/// Evenly spaced along X, spanning `2 * scale`.
pub fn line(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let spacing = 2.0 * slot.scale / slot.count.max(1) as f32;
    let offset = slot.index as f32 - (slot.count as f32 - 1.0) / 2.0;
    Vec3::new(offset * spacing, 0.0, 0.0)
}

/// Drone `i` at angle `2 pi i / n`, radius `scale`.
pub fn circle(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    ring(slot.index, slot.count, slot.scale)
}

/// Filled square grid, `ceil(sqrt(n))` drones per side.
pub fn square(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let side = (slot.count as f32).sqrt().ceil() as usize;
    grid(slot.index, side, side, GRID_SPACING * slot.scale)
}

/// Filled grid roughly twice as wide as it is deep.
pub fn rectangle(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let cols = ((slot.count * 2) as f32).sqrt().ceil().max(1.0) as usize;
    let rows = (slot.count + cols - 1) / cols;
    grid(slot.index, cols, rows, GRID_SPACING * slot.scale)
}

pub fn triangle(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    polygon_outline(slot.progress(), 3, slot.scale, -PI / 2.0)
}

pub fn pentagon(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    polygon_outline(slot.progress(), 5, slot.scale, -PI / 2.0)
}

pub fn hexagon(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    polygon_outline(slot.progress(), 6, slot.scale, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn place(f: super::super::Placement, count: usize, scale: f32) -> Vec<Vec3> {
        let mut rng = StdRng::seed_from_u64(0);
        (0..count)
            .map(|i| f(&Slot::new(i, count, scale), &mut rng))
            .collect()
    }

    #[test]
    fn test_line_is_centered() {
        let points = place(line, 5, 5.0);
        assert_eq!(points[2], Vec3::ZERO);
        assert_eq!(points[0].x, -points[4].x);
        assert!((points[1].x - points[0].x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_drone_line_sits_at_origin() {
        assert_eq!(place(line, 1, 5.0)[0], Vec3::ZERO);
    }

    #[test]
    fn test_square_of_four_is_corners() {
        let scale = 1.0 / GRID_SPACING;
        let points = place(square, 4, scale);
        let h = 0.5;
        let expected = [
            Vec3::new(-h, 0.0, -h),
            Vec3::new(h, 0.0, -h),
            Vec3::new(-h, 0.0, h),
            Vec3::new(h, 0.0, h),
        ];
        for (got, want) in points.iter().zip(expected.iter()) {
            assert!(got.distance(*want) < 1e-5, "{:?} != {:?}", got, want);
        }
    }

    #[test]
    fn test_polygon_vertices_on_circumcircle() {
        for p in place(hexagon, 6, 3.0) {
            assert!((p.length() - 3.0).abs() < 1e-5);
        }
        for p in place(triangle, 3, 3.0) {
            assert!((p.length() - 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rectangle_wider_than_deep() {
        let points = place(rectangle, 50, 8.0);
        let width = points.iter().map(|p| p.x).fold(f32::MIN, f32::max)
            - points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let depth = points.iter().map(|p| p.z).fold(f32::MIN, f32::max)
            - points.iter().map(|p| p.z).fold(f32::MAX, f32::min);
        assert!(width > depth);
    }
}
