//! Digits and letters traced as stroke outlines.

use super::geometry::{along, flat, open_path};
use super::symbols::heart_point;
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{PI, TAU};

const NUMBER_1: [f64; 3] = [0.7, 0.85, 1.0];
const NUMBER_2: [f64; 3] = [0.45, 0.8, 1.0];
const LETTER_A: [f64; 3] = [0.4, 0.8, 1.0];
const LETTER_I: [f64; 3] = [0.2, 0.8, 1.0];
/// "I", heart, "U".
const LETTER_LOVE: [f64; 3] = [0.2, 0.75, 1.0];

/// Upright ellipse.
pub fn number_0(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let angle = slot.progress() * TAU;
    flat(0.6 * slot.scale * angle.cos(), slot.scale * angle.sin())
}

pub fn number_1(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&NUMBER_1);
    match part.segment {
        0 => along(flat(0.0, s), flat(0.0, -s), part.local, part.len),
        1 => along(flat(0.0, s), flat(-0.35 * s, 0.7 * s), part.local, part.len),
        _ => along(flat(-0.35 * s, -s), flat(0.35 * s, -s), part.local, part.len),
    }
}

/// Hooked top, diagonal, flat base.
pub fn number_2(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&NUMBER_2);
    let arc = |angle: f32| flat(0.5 * s * angle.cos(), 0.5 * s + 0.5 * s * angle.sin());
    let arc_end = arc(-PI / 6.0);
    match part.segment {
        0 => arc(PI * 0.9 - part.inclusive() * (PI * 0.9 + PI / 6.0)),
        1 => arc_end.lerp(flat(-0.5 * s, -s), part.inclusive()),
        _ => along(flat(-0.5 * s, -s), flat(0.5 * s, -s), part.local, part.len),
    }
}

pub fn letter_a(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&LETTER_A);
    let apex = flat(0.0, s);
    match part.segment {
        0 => along(flat(-0.6 * s, -s), apex, part.local, part.len),
        1 => along(apex, flat(0.6 * s, -s), part.local, part.len),
        _ => along(flat(-0.3 * s, 0.0), flat(0.3 * s, 0.0), part.local, part.len),
    }
}

pub fn letter_i(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&LETTER_I);
    match part.segment {
        0 => along(flat(-0.4 * s, s), flat(0.4 * s, s), part.local, part.len),
        1 => along(flat(0.0, s), flat(0.0, -s), part.local, part.len),
        _ => along(flat(-0.4 * s, -s), flat(0.4 * s, -s), part.local, part.len),
    }
}

/// "I <3 U" spelled across the ground.
pub fn letter_love(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&LETTER_LOVE);
    match part.segment {
        0 => along(flat(-1.3 * s, 0.6 * s), flat(-1.3 * s, -0.6 * s), part.local, part.len),
        1 => heart_point(part.progress() * TAU, 1.6 * s),
        _ => open_path(
            &[
                flat(1.0 * s, 0.6 * s),
                flat(1.0 * s, -0.3 * s),
                flat(1.3 * s, -0.6 * s),
                flat(1.6 * s, -0.3 * s),
                flat(1.6 * s, 0.6 * s),
            ],
            part.inclusive(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_letter_a_legs_meet_at_apex() {
        let mut rng = StdRng::seed_from_u64(0);
        // 50 drones: left leg 0..20, right leg 20..40.
        let left_top = letter_a(&Slot::new(19, 50, 2.0), &mut rng);
        let right_top = letter_a(&Slot::new(20, 50, 2.0), &mut rng);
        assert!(left_top.distance(right_top) < 1e-5);
    }

    #[test]
    fn test_number_2_diagonal_starts_at_hook() {
        let mut rng = StdRng::seed_from_u64(0);
        let count = 100;
        let hook_end = number_2(&Slot::new(44, count, 3.0), &mut rng);
        let diagonal_start = number_2(&Slot::new(45, count, 3.0), &mut rng);
        assert!(hook_end.distance(diagonal_start) < 1e-4);
    }

    #[test]
    fn test_love_reads_left_to_right() {
        let mut rng = StdRng::seed_from_u64(0);
        let i = letter_love(&Slot::new(0, 100, 2.0), &mut rng);
        let u = letter_love(&Slot::new(99, 100, 2.0), &mut rng);
        assert!(i.x < 0.0 && u.x > 0.0);
    }
}
