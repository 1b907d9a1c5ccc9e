//! Hearts, stars and other flat emblems.

use super::geometry::{along, closed_path, flat, flat_circle, star_outline};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{FRAC_1_SQRT_2, PI, TAU};

const ARROW: [f64; 3] = [0.5, 0.75, 1.0];
const CROSS: [f64; 2] = [0.5, 1.0];
const SMILEY: [f64; 4] = [0.6, 0.7, 0.8, 1.0];
const PEACE: [f64; 4] = [0.6, 0.8, 0.9, 1.0];

/// Point on the classic parametric heart for curve parameter `t`.
///
/// `x = 0.5 s sin^3 t`, `z = -0.5 s (13 cos t - 5 cos 2t - 2 cos 3t - cos 4t) / 16`.
/// Z is negated so the lobes face away from a camera looking down -Z.
pub fn heart_point(t: f32, scale: f32) -> Vec3 {
    let x = 0.5 * scale * t.sin().powi(3);
    let z = 0.5
        * scale
        * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos())
        / 16.0;
    Vec3::new(x, 0.0, -z)
}

pub fn heart(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    heart_point(slot.progress() * TAU, slot.scale)
}

pub fn star(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    star_outline(slot.progress(), slot.scale, 0.4 * slot.scale)
}

/// Rhombus, taller than it is wide.
pub fn diamond(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    closed_path(
        &[flat(0.0, s), flat(0.6 * s, 0.0), flat(0.0, -s), flat(-0.6 * s, 0.0)],
        slot.progress(),
    )
}

pub fn arrow(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&ARROW);
    let tip = flat(0.0, s);
    match part.segment {
        0 => along(flat(0.0, -s), tip, part.local, part.len),
        1 => tip.lerp(flat(-0.5 * s, 0.4 * s), part.inclusive()),
        _ => tip.lerp(flat(0.5 * s, 0.4 * s), part.inclusive()),
    }
}

pub fn cross(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&CROSS);
    match part.segment {
        0 => along(flat(-s, 0.0), flat(s, 0.0), part.local, part.len),
        _ => along(flat(0.0, s), flat(0.0, -s), part.local, part.len),
    }
}

/// Face outline, two eyes and a smile.
pub fn smiley(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&SMILEY);
    match part.segment {
        0 => flat_circle(Vec3::ZERO, s, part.progress()),
        1 => flat_circle(flat(-0.35 * s, 0.3 * s), 0.12 * s, part.progress()),
        2 => flat_circle(flat(0.35 * s, 0.3 * s), 0.12 * s, part.progress()),
        _ => {
            let angle = PI * (1.15 + 0.7 * part.inclusive());
            flat(0.55 * s * angle.cos(), 0.55 * s * angle.sin())
        }
    }
}

/// Ring with a vertical diameter and two legs down to the lower rim.
pub fn peace(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&PEACE);
    let leg = s * FRAC_1_SQRT_2;
    match part.segment {
        0 => flat_circle(Vec3::ZERO, s, part.progress()),
        1 => along(flat(0.0, s), flat(0.0, -s), part.local, part.len),
        2 => Vec3::ZERO.lerp(flat(-leg, -leg), part.inclusive()),
        _ => Vec3::ZERO.lerp(flat(leg, -leg), part.inclusive()),
    }
}

/// Lemniscate of Bernoulli lying on the ground.
pub fn infinity(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress() * TAU;
    let denom = 1.0 + t.sin() * t.sin();
    Vec3::new(
        slot.scale * t.cos() / denom,
        0.0,
        slot.scale * t.sin() * t.cos() / denom,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_heart_first_point() {
        // t = 0: sin is zero, the cosine terms sum to 5.
        let p = heart_point(0.0, 8.0);
        assert_eq!(p.x, 0.0);
        assert!((p.z + 0.5 * 8.0 * 5.0 / 16.0).abs() < 1e-6);
    }

    #[test]
    fn test_heart_bottom_tip_faces_plus_z() {
        let p = heart_point(PI, 8.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.z - 0.5 * 8.0 * 17.0 / 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_star_points_alternate() {
        let mut rng = StdRng::seed_from_u64(0);
        let outer = star(&Slot::new(0, 10, 5.0), &mut rng).length();
        let inner = star(&Slot::new(1, 10, 5.0), &mut rng).length();
        assert!((outer - 5.0).abs() < 1e-4);
        assert!((inner - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_arrow_shaft_reaches_tip() {
        let mut rng = StdRng::seed_from_u64(0);
        // With 20 drones the shaft is indices 0..10; index 9 is the tip.
        let tip = arrow(&Slot::new(9, 20, 4.0), &mut rng);
        assert!(tip.distance(flat(0.0, 4.0)) < 1e-5);
    }

    #[test]
    fn test_infinity_lobes_mirror() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = infinity(&Slot::new(1, 8, 3.0), &mut rng);
        let b = infinity(&Slot::new(5, 8, 3.0), &mut rng);
        assert!((a.x + b.x).abs() < 1e-5);
        assert!((a.z - b.z).abs() < 1e-5);
        assert!(a.x > 0.0);
    }
}
