//! Vehicles, devices and buildings.
//!
//! Unlike the flat emblems these stand up in 3D: aircraft fly level in the XZ
//! plane, while cars, houses and screens are drawn in the vertical XY plane.

use super::geometry::{
    along, closed_path, column, fibonacci_sphere, flat, flat_circle, grid, open_path, ring,
    upright_ring_point,
};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Fuselage, main wings, wingtip winglets, horizontal stabilizer, rudder.
///
/// The split points are tuned for a recognizable silhouette; keep them as is.
pub const AIRPLANE: [f64; 5] = [0.35, 0.55, 0.70, 0.85, 1.0];
const ROCKET: [f64; 4] = [0.5, 0.7, 0.9, 1.0];
const GLOBE: [f64; 3] = [0.7, 0.85, 1.0];
const PHONE: [f64; 3] = [0.8, 0.9, 1.0];
const LAPTOP: [f64; 3] = [0.45, 0.9, 1.0];
const CAR: [f64; 4] = [0.5, 0.7, 0.85, 1.0];
const HOUSE: [f64; 3] = [0.5, 0.8, 1.0];

/// Airliner seen from above, nose toward -Z.
pub fn airplane(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&AIRPLANE);
    match part.segment {
        0 => along(flat(0.0, 1.2 * s), flat(0.0, -1.2 * s), part.local, part.len),
        1 => {
            let x = (part.inclusive() * 2.0 - 1.0) * 1.1 * s;
            // Swept back toward the tips.
            flat(x, 0.2 * s - 0.25 * x.abs())
        }
        2 => {
            let (side, t) = part.strand(2);
            let sign = if side == 0 { -1.0 } else { 1.0 };
            flat(sign * 1.1 * s, -0.075 * s) + Vec3::new(0.0, 0.25 * s * t, 0.0)
        }
        3 => {
            let x = (part.inclusive() * 2.0 - 1.0) * 0.45 * s;
            flat(x, -s - 0.1 * x.abs())
        }
        _ => {
            let t = part.inclusive();
            flat(0.0, -0.9 * s).lerp(flat(0.0, -1.2 * s) + Vec3::new(0.0, 0.5 * s, 0.0), t)
        }
    }
}

/// Standing rocket: tube, nose cone, four fins and an exhaust plume.
pub fn rocket(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let radius = 0.25 * s;
    let part = slot.split(&ROCKET);
    match part.segment {
        0 => column(Vec3::ZERO, radius, 0.0, 1.4 * s, part.inclusive(), 8.0),
        1 => {
            let t = part.inclusive();
            let angle = t * 5.0 * TAU;
            let r = radius * (1.0 - t);
            Vec3::new(r * angle.cos(), 1.4 * s + 0.6 * s * t, r * angle.sin())
        }
        2 => {
            let (fin, t) = part.strand(4);
            let angle = fin as f32 * FRAC_PI_2;
            let r = radius + 0.3 * s * t;
            Vec3::new(r * angle.cos(), 0.4 * s * (1.0 - t), r * angle.sin())
        }
        _ => {
            let t = part.inclusive();
            let angle = t * 3.0 * TAU;
            let r = 0.2 * s * (1.0 - 0.75 * t);
            Vec3::new(r * angle.cos(), -0.4 * s * t, r * angle.sin())
        }
    }
}

/// Sphere with an equator and a prime meridian drawn on its surface.
pub fn globe(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&GLOBE);
    match part.segment {
        0 => fibonacci_sphere(part.local, part.len) * s,
        1 => ring(part.local, part.len, s),
        _ => upright_ring_point(Vec3::ZERO, s, part.progress() * TAU),
    }
}

/// Handset outline, home button and speaker slot.
pub fn phone(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&PHONE);
    match part.segment {
        0 => closed_path(
            &[
                flat(-0.5 * s, s),
                flat(0.5 * s, s),
                flat(0.5 * s, -s),
                flat(-0.5 * s, -s),
            ],
            part.progress(),
        ),
        1 => flat_circle(flat(0.0, -0.82 * s), 0.08 * s, part.progress()),
        _ => along(flat(-0.15 * s, 0.88 * s), flat(0.15 * s, 0.88 * s), part.local, part.len),
    }
}

/// Open laptop: tilted screen frame, keyboard deck and hinge.
pub fn laptop(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&LAPTOP);
    match part.segment {
        0 => {
            let screen = |x: f32, y: f32| Vec3::new(x, y, -0.2 * y);
            closed_path(
                &[
                    screen(-0.8 * s, 0.0),
                    screen(-0.8 * s, s),
                    screen(0.8 * s, s),
                    screen(0.8 * s, 0.0),
                ],
                part.progress(),
            )
        }
        1 => {
            let cols = ((part.len as f32 * 1.6).sqrt().ceil() as usize).max(1);
            let rows = (part.len + cols - 1) / cols;
            let spacing = (1.6 * s / cols as f32).min(s / rows as f32);
            grid(part.local, cols, rows, spacing) + Vec3::new(0.0, 0.0, 0.5 * s)
        }
        _ => along(Vec3::new(-0.8 * s, 0.0, 0.0), Vec3::new(0.8 * s, 0.0, 0.0), part.local, part.len),
    }
}

/// Side view: body, cabin and two wheels.
pub fn car(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let side = |x: f32, y: f32| Vec3::new(x * s, y * s, 0.0);
    let part = slot.split(&CAR);
    match part.segment {
        0 => closed_path(
            &[side(-1.0, 0.2), side(1.0, 0.2), side(1.0, 0.55), side(-1.0, 0.55)],
            part.progress(),
        ),
        1 => open_path(
            &[side(-0.5, 0.55), side(-0.3, 0.95), side(0.35, 0.95), side(0.55, 0.55)],
            part.inclusive(),
        ),
        2 => upright_ring_point(side(-0.6, 0.2), 0.2 * s, part.progress() * TAU),
        _ => upright_ring_point(side(0.6, 0.2), 0.2 * s, part.progress() * TAU),
    }
}

/// Front elevation: walls, pitched roof and a door.
pub fn house(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let front = |x: f32, y: f32| Vec3::new(x * s, y * s, 0.0);
    let part = slot.split(&HOUSE);
    match part.segment {
        0 => closed_path(
            &[front(-0.7, 0.0), front(-0.7, 1.2), front(0.7, 1.2), front(0.7, 0.0)],
            part.progress(),
        ),
        1 => open_path(
            &[front(-0.85, 1.2), front(0.0, 1.9), front(0.85, 1.2)],
            part.inclusive(),
        ),
        _ => open_path(
            &[front(-0.2, 0.0), front(-0.2, 0.6), front(0.2, 0.6), front(0.2, 0.0)],
            part.inclusive(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::segments::split;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_airplane_split_points() {
        let segments: Vec<usize> = (0..20).map(|i| split(i, 20, &AIRPLANE).segment).collect();
        assert_eq!(
            segments,
            vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
        );
    }

    #[test]
    fn test_airplane_is_level_except_fins() {
        let mut rng = StdRng::seed_from_u64(0);
        for i in 0..110 {
            let p = airplane(&Slot::new(i, 200, 5.0), &mut rng);
            assert_eq!(p.y, 0.0, "fuselage and wings stay level");
        }
        for i in 170..200 {
            let p = airplane(&Slot::new(i, 200, 5.0), &mut rng);
            assert!(p.y >= 0.0 && p.z > 0.0, "rudder stands at the tail");
        }
    }

    #[test]
    fn test_globe_surface() {
        let mut rng = StdRng::seed_from_u64(0);
        for i in 0..100 {
            let p = globe(&Slot::new(i, 100, 7.0), &mut rng);
            assert!((p.length() - 7.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_house_stands_on_ground() {
        let mut rng = StdRng::seed_from_u64(0);
        let lowest = (0..60)
            .map(|i| house(&Slot::new(i, 60, 3.0), &mut rng).y)
            .fold(f32::MAX, f32::min);
        assert!(lowest.abs() < 1e-6);
    }
}
