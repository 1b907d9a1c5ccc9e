//! The tricolor, the chakra wheel, peacock, lotus, elephant and Taj Mahal.

use super::geometry::{
    column, disk, fibonacci_dome, fibonacci_sphere, fill_rect, flat, polygon_outline, ring,
    ring_point,
};
use super::segments::THIRDS;
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2, TAU};

const CHAKRA: [f64; 3] = [0.5, 0.6, 1.0];
const CHAKRA_SPOKES: usize = 24;
const PEACOCK: [f64; 3] = [0.15, 0.25, 1.0];
const PEACOCK_FEATHERS: usize = 9;
const LOTUS: [f64; 2] = [0.2, 1.0];
const LOTUS_PETALS: usize = 8;
/// Body, head, trunk, then one part per leg.
const ELEPHANT: [f64; 7] = [0.4, 0.55, 0.7, 0.775, 0.85, 0.925, 1.0];
const TAJ_MAHAL: [f64; 3] = [0.3, 0.6, 1.0];

/// Three stacked horizontal bands in a 3:2 field, saffron band first.
pub fn indian_flag(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&THIRDS);
    let band = 4.0 * s / 9.0;
    let top = 1.5 * band - part.segment as f32 * band;
    fill_rect(part.local, part.len, (-s, top - band), (s, top))
}

/// Rim, hub and 24 spokes.
pub fn ashoka_chakra(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let hub = 0.15 * s;
    let part = slot.split(&CHAKRA);
    match part.segment {
        0 => ring(part.local, part.len, s),
        1 => ring(part.local, part.len, hub),
        _ => {
            let (spoke, t) = part.strand(CHAKRA_SPOKES);
            let angle = spoke as f32 / CHAKRA_SPOKES as f32 * TAU;
            ring_point(hub + (s - hub) * (0.1 + 0.8 * t), angle)
        }
    }
}

/// Body, raised neck and a fanned tail of feathers rising behind it.
pub fn peacock(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let body = flat(0.0, -0.4 * s);
    let part = slot.split(&PEACOCK);
    match part.segment {
        0 => body + disk(part.local, part.len, 0.18 * s),
        1 => {
            let base = body + flat(0.0, 0.1 * s);
            base.lerp(base + Vec3::new(0.0, 0.5 * s, 0.0), part.inclusive())
        }
        _ => {
            let (feather, t) = part.strand(PEACOCK_FEATHERS);
            let spread = (feather as f32 / (PEACOCK_FEATHERS - 1) as f32 - 0.5) * 0.78 * PI;
            let reach = 0.3 * s + 0.7 * s * t;
            // Feather tips bulge into "eyes".
            let eye = if t > 0.85 { 0.06 * s * ((t - 0.85) / 0.15 * TAU).sin() } else { 0.0 };
            let angle = spread + eye / reach.max(f32::EPSILON);
            body + flat(reach * angle.sin(), reach * angle.cos()) + Vec3::new(0.0, 0.35 * s * t, 0.0)
        }
    }
}

/// Center ring and eight cupped petals radiating from it.
pub fn lotus(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&LOTUS);
    match part.segment {
        0 => ring(part.local, part.len, 0.2 * s) + Vec3::new(0.0, 0.1 * s, 0.0),
        _ => {
            let (petal, u) = part.strand(LOTUS_PETALS);
            let heading = petal as f32 / LOTUS_PETALS as f32 * TAU;
            let half_width = PI / LOTUS_PETALS as f32 * 0.9;
            let bulge = (PI * u).sin();
            let angle = heading + half_width * (PI * u).cos();
            let radius = 0.25 * s + 0.75 * s * bulge;
            ring_point(radius, angle) + Vec3::new(0.0, 0.3 * s * bulge, 0.0)
        }
    }
}

/// Standing elephant: ellipsoid body, head, curled trunk and four legs.
pub fn elephant(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&ELEPHANT);
    match part.segment {
        0 => {
            let p = fibonacci_sphere(part.local, part.len);
            Vec3::new(0.0, 0.75 * s, 0.0) + p * Vec3::new(0.6 * s, 0.35 * s, 0.35 * s)
        }
        1 => Vec3::new(0.75 * s, 0.95 * s, 0.0) + fibonacci_sphere(part.local, part.len) * 0.25 * s,
        2 => {
            let u = part.inclusive();
            Vec3::new(
                0.95 * s + 0.12 * s * (PI * u).sin(),
                0.85 * s - 0.75 * s * u,
                0.0,
            )
        }
        leg => {
            let (x, z) = match leg {
                3 => (0.35, 0.2),
                4 => (0.35, -0.2),
                5 => (-0.35, 0.2),
                _ => (-0.35, -0.2),
            };
            let foot = Vec3::new(x * s, 0.0, z * s);
            column(foot, 0.06 * s, 0.0, 0.5 * s, part.inclusive(), 2.0)
        }
    }
}

/// Dome over a square plinth, with a minaret at each corner.
pub fn taj_mahal(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&TAJ_MAHAL);
    match part.segment {
        0 => Vec3::new(0.0, 0.5 * s, 0.0) + fibonacci_dome(part.local, part.len) * 0.45 * s,
        1 => polygon_outline(part.progress(), 4, s * SQRT_2, FRAC_PI_4),
        _ => {
            let (minaret, t) = part.strand(4);
            let corner = ring_point(0.85 * s * SQRT_2, FRAC_PI_4 + minaret as f32 * FRAC_PI_2);
            column(corner, 0.05 * s, 0.0, 1.2 * s, t, 3.0)
        }
    }
}
