//! Shared placement primitives.
//!
//! Flat emblems are drawn in the ground (XZ) plane with "up" on the page mapped
//! to -Z, the same orientation the parametric heart uses. Everything here is
//! linear in its size arguments, so a zero scale collapses to the origin.

use glam::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::{PI, TAU};

/// Golden angle in radians, used for sunflower-style disk fills.
const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Fraction of the way through `count` items, in `[0, 1)`.
pub fn progress(index: usize, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    }
}

/// Fraction including both endpoints, in `[0, 1]`. A single item sits at 0.5.
pub fn inclusive(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.5
    } else {
        index as f32 / (count - 1) as f32
    }
}

/// Map a 2D drawing coordinate onto the ground plane.
pub fn flat(x: f32, up: f32) -> Vec3 {
    Vec3::new(x, 0.0, -up)
}

pub fn ring_point(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Point in the vertical XY plane on a circle around `center`.
pub fn upright_ring_point(center: Vec3, radius: f32, angle: f32) -> Vec3 {
    center + Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// `index` of `count` evenly around a horizontal ring.
pub fn ring(index: usize, count: usize, radius: f32) -> Vec3 {
    ring_point(radius, progress(index, count) * TAU)
}

/// Point `t` of the way around a drawn circle, starting at the top.
pub fn flat_circle(center: Vec3, radius: f32, t: f32) -> Vec3 {
    let angle = PI / 2.0 - t * TAU;
    center + flat(radius * angle.cos(), radius * angle.sin())
}

/// Evenly spaced point on the segment `a -> b`, endpoints included.
pub fn along(a: Vec3, b: Vec3, index: usize, count: usize) -> Vec3 {
    a.lerp(b, inclusive(index, count))
}

/// Point `t` of the way around a closed polyline, each edge taking an equal share.
pub fn closed_path(vertices: &[Vec3], t: f32) -> Vec3 {
    let n = vertices.len();
    if n == 0 {
        return Vec3::ZERO;
    }
    let u = t.rem_euclid(1.0) * n as f32;
    let edge = (u.floor() as usize).min(n - 1);
    vertices[edge].lerp(vertices[(edge + 1) % n], u - edge as f32)
}

/// Point `t` (in `[0, 1]`) along an open polyline, each edge taking an equal share.
pub fn open_path(vertices: &[Vec3], t: f32) -> Vec3 {
    match vertices.len() {
        0 => Vec3::ZERO,
        1 => vertices[0],
        n => {
            let u = t.clamp(0.0, 1.0) * (n - 1) as f32;
            let edge = (u.floor() as usize).min(n - 2);
            vertices[edge].lerp(vertices[edge + 1], u - edge as f32)
        }
    }
}

/// Point `t` of the way around the outline of a regular polygon in the XZ plane.
pub fn polygon_outline(t: f32, sides: usize, radius: f32, rotation: f32) -> Vec3 {
    let sides = sides.max(1);
    let u = t.rem_euclid(1.0) * sides as f32;
    let edge = (u.floor() as usize).min(sides - 1);
    let a0 = rotation + edge as f32 / sides as f32 * TAU;
    let a1 = rotation + (edge + 1) as f32 / sides as f32 * TAU;
    ring_point(radius, a0).lerp(ring_point(radius, a1), u - edge as f32)
}

/// Five-pointed star outline with the first point facing up.
pub fn star_outline(t: f32, outer: f32, inner: f32) -> Vec3 {
    let u = t.rem_euclid(1.0) * 10.0;
    let edge = (u.floor() as usize).min(9);
    let vertex = |k: usize| {
        let radius = if k % 2 == 0 { outer } else { inner };
        ring_point(radius, -PI / 2.0 + k as f32 * TAU / 10.0)
    };
    vertex(edge).lerp(vertex(edge + 1), u - edge as f32)
}

/// Golden-angle distribution on the unit sphere.
///
/// `phi = acos(1 - 2i/n)`, `theta = pi * (1 + sqrt 5) * i`. Points spread with
/// near-uniform density instead of bunching at the poles like a lat/long grid.
pub fn fibonacci_sphere(index: usize, count: usize) -> Vec3 {
    if count == 0 {
        return Vec3::ZERO;
    }
    let phi = (1.0 - 2.0 * index as f32 / count as f32).clamp(-1.0, 1.0).acos();
    let theta = PI * (1.0 + 5f32.sqrt()) * index as f32;
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

/// Upper half of the golden-angle sphere, with the pole pointing along +Y.
pub fn fibonacci_dome(index: usize, count: usize) -> Vec3 {
    let p = fibonacci_sphere(index, count * 2);
    Vec3::new(p.x, p.z, p.y)
}

/// Sunflower fill of a horizontal disk.
pub fn disk(index: usize, count: usize, radius: f32) -> Vec3 {
    if count == 0 {
        return Vec3::ZERO;
    }
    let r = radius * ((index as f32 + 0.5) / count as f32).sqrt();
    ring_point(r, index as f32 * GOLDEN_ANGLE)
}

/// Centered row-major grid in the XZ plane.
pub fn grid(index: usize, cols: usize, rows: usize, spacing: f32) -> Vec3 {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let row = index / cols;
    let col = index % cols;
    let cx = (cols - 1) as f32 * spacing / 2.0;
    let cz = (rows - 1) as f32 * spacing / 2.0;
    Vec3::new(col as f32 * spacing - cx, 0.0, row as f32 * spacing - cz)
}

/// Fill the rectangle spanned by `min` and `max` (drawing coordinates) with a
/// grid whose column count follows the rectangle's aspect ratio.
pub fn fill_rect(index: usize, count: usize, min: (f32, f32), max: (f32, f32)) -> Vec3 {
    let width = (max.0 - min.0).abs();
    let height = (max.1 - min.1).abs();
    let aspect = if height > 0.0 { width / height } else { 1.0 };
    let cols = ((count as f32 * aspect).sqrt().ceil() as usize).clamp(1, count.max(1));
    let rows = (count + cols - 1) / cols.max(1);
    let col = index % cols;
    let row = index / cols;
    let x = min.0 + (col as f32 + 0.5) / cols as f32 * (max.0 - min.0);
    let up = max.1 - (row as f32 + 0.5) / rows.max(1) as f32 * (max.1 - min.1);
    flat(x, up)
}

/// Point on a vertical column of `radius` spiralling from `bottom` to `top`.
pub fn column(base: Vec3, radius: f32, bottom: f32, top: f32, t: f32, turns: f32) -> Vec3 {
    let angle = t * turns * TAU;
    base + Vec3::new(radius * angle.cos(), bottom + (top - bottom) * t, radius * angle.sin())
}

/// Uniform jitter in `[-half, half)` on every axis.
pub fn jitter(rng: &mut dyn RngCore, half: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * 2.0 * half,
        (rng.gen::<f32>() - 0.5) * 2.0 * half,
        (rng.gen::<f32>() - 0.5) * 2.0 * half,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fibonacci_sphere_is_unit_length() {
        for i in 0..97 {
            let p = fibonacci_sphere(i, 97);
            assert!((p.length() - 1.0).abs() < 1e-5, "point {} has length {}", i, p.length());
        }
    }

    #[test]
    fn test_fibonacci_sphere_first_point_is_pole() {
        let p = fibonacci_sphere(0, 10);
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_closed_path_wraps_to_start() {
        let square = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        assert_eq!(closed_path(&square, 0.0), square[0]);
        assert_eq!(closed_path(&square, 0.25), square[1]);
        assert_eq!(closed_path(&square, 0.125), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(closed_path(&square, 1.0), square[0]);
    }

    #[test]
    fn test_open_path_hits_endpoints() {
        let path = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        assert_eq!(open_path(&path, 0.0), Vec3::ZERO);
        assert_eq!(open_path(&path, 1.0), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(open_path(&path, 0.5), Vec3::X);
    }

    #[test]
    fn test_grid_is_centered() {
        let corners: Vec<Vec3> = (0..4).map(|i| grid(i, 2, 2, 2.0)).collect();
        let sum: Vec3 = corners.iter().copied().sum();
        assert_eq!(sum, Vec3::ZERO);
        assert_eq!(corners[0], Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(corners[3], Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_disk_stays_inside_radius() {
        for i in 0..50 {
            assert!(disk(i, 50, 3.0).length() <= 3.0 + 1e-5);
        }
    }

    #[test]
    fn test_jitter_zero_half_is_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(jitter(&mut rng, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_jitter_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let j = jitter(&mut rng, 2.0);
            assert!(j.x.abs() <= 2.0 && j.y.abs() <= 2.0 && j.z.abs() <= 2.0);
        }
    }
}
