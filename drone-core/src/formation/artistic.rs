//! Random scatter, galaxies and decorative curves.

use super::geometry::{disk, flat, flat_circle, jitter, open_path, ring_point};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Half extent of the random cube per unit of scale (7.5 at the default 8).
const RANDOM_HALF_EXTENT: f32 = 0.9375;
const GALAXY_ARMS: usize = 3;
const MANDALA: [f64; 4] = [0.1, 0.3, 0.6, 1.0];
/// Radius and petal count of each mandala ring, innermost first.
const MANDALA_RINGS: [(f32, f32); 4] = [(0.2, 0.0), (0.45, 6.0), (0.7, 8.0), (1.0, 12.0)];
const YIN_YANG: [f64; 4] = [0.5, 0.75, 0.875, 1.0];
const MUSICAL_NOTE: [f64; 3] = [0.4, 0.8, 1.0];

/// Uniform scatter in a cube around the anchor.
pub fn random(slot: &Slot, rng: &mut dyn RngCore) -> Vec3 {
    jitter(rng, RANDOM_HALF_EXTENT * slot.scale)
}

/// Three trailing spiral arms with a thin, noisy disk.
pub fn galaxy(slot: &Slot, rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let arm = slot.index % GALAXY_ARMS;
    let members = (slot.count + GALAXY_ARMS - 1 - arm) / GALAXY_ARMS;
    let u = super::geometry::inclusive(slot.index / GALAXY_ARMS, members);
    let angle = arm as f32 / GALAXY_ARMS as f32 * TAU + u * 1.5 * PI;
    let spread = jitter(rng, 0.1 * s);
    ring_point(s * (0.1 + 0.9 * u), angle) + Vec3::new(spread.x, spread.y * 0.5, spread.z)
}

/// Concentric rings, the outer ones rippled into petals.
pub fn mandala(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let part = slot.split(&MANDALA);
    let (radius, petals) = MANDALA_RINGS[part.segment.min(MANDALA_RINGS.len() - 1)];
    let angle = part.progress() * TAU;
    ring_point(slot.scale * radius * (1.0 + 0.12 * (petals * angle).sin()), angle)
}

/// Outer circle, the S-shaped divide and the two eyes.
pub fn yin_yang(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&YIN_YANG);
    match part.segment {
        0 => flat_circle(Vec3::ZERO, s, part.progress()),
        1 => {
            let u = part.inclusive() * 2.0;
            if u <= 1.0 {
                // Upper half circle bulging left, top to center.
                let angle = FRAC_PI_2 + u * PI;
                flat(0.5 * s * angle.cos(), 0.5 * s + 0.5 * s * angle.sin())
            } else {
                // Lower half circle bulging right, center to bottom.
                let angle = FRAC_PI_2 - (u - 1.0) * PI;
                flat(0.5 * s * angle.cos(), -0.5 * s + 0.5 * s * angle.sin())
            }
        }
        2 => flat_circle(flat(0.0, 0.5 * s), 0.1 * s, part.progress()),
        _ => flat_circle(flat(0.0, -0.5 * s), 0.1 * s, part.progress()),
    }
}

/// Eight-petal rose curve, `r = scale * cos(4 theta)`.
pub fn rose(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let theta = slot.progress() * TAU;
    let r = slot.scale * (4.0 * theta).cos();
    flat(r * theta.cos(), r * theta.sin())
}

/// Eighth note: filled head, stem and flag.
pub fn musical_note(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&MUSICAL_NOTE);
    match part.segment {
        0 => {
            let p = disk(part.local, part.len, 1.0);
            flat(-0.25 * s, -0.7 * s) + Vec3::new(0.3 * s * p.x, 0.0, 0.22 * s * p.z)
        }
        1 => flat(0.05 * s, -0.7 * s).lerp(flat(0.05 * s, s), part.inclusive()),
        _ => open_path(
            &[
                flat(0.05 * s, s),
                flat(0.35 * s, 0.75 * s),
                flat(0.45 * s, 0.5 * s),
                flat(0.35 * s, 0.3 * s),
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
    fn test_random_within_cube() {
        let mut rng = StdRng::seed_from_u64(11);
        for i in 0..200 {
            let p = random(&Slot::new(i, 200, 8.0), &mut rng);
            assert!(p.x.abs() <= 7.5 && p.y.abs() <= 7.5 && p.z.abs() <= 7.5);
        }
    }

    #[test]
    fn test_yin_yang_divide_passes_center() {
        let mut rng = StdRng::seed_from_u64(0);
        // 101 drones: the divide holds indices 51..76 (25 drones), middle one at local 12.
        let count = 101;
        let mid = yin_yang(&Slot::new(51 + 12, count, 4.0), &mut rng);
        assert!(mid.length() < 1e-4, "{:?}", mid);
    }

    #[test]
    fn test_mandala_inner_ring_is_plain() {
        let mut rng = StdRng::seed_from_u64(0);
        for i in 0..10 {
            let p = mandala(&Slot::new(i, 100, 10.0), &mut rng);
            assert!((p.length() - 2.0).abs() < 1e-4);
        }
    }
}
