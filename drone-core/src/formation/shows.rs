//! Set pieces for light shows.

use super::geometry::{
    column, fibonacci_sphere, flat, flat_circle, jitter, ring_point, star_outline,
};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

const CHRISTMAS_TREE: [f64; 3] = [0.8, 0.9, 1.0];
const SNOWFLAKE: [f64; 2] = [0.7, 1.0];
const SNOWFLAKE_ARMS: usize = 6;
const OLYMPIC_RINGS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
const CROWN: [f64; 2] = [0.4, 1.0];
const CROWN_PEAKS: usize = 8;
/// Cup, two handles, stem, base.
const TROPHY: [f64; 4] = [0.4, 0.6, 0.75, 1.0];

/// Burst centers in units of scale.
const BURSTS: [(f32, f32, f32); 5] = [
    (0.0, 1.2, 0.0),
    (-0.9, 0.8, -0.4),
    (0.9, 0.9, 0.3),
    (-0.4, 1.6, 0.6),
    (0.5, 1.5, -0.6),
];

/// Five spherical bursts with ragged edges.
pub fn fireworks(slot: &Slot, rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let burst = slot.index % BURSTS.len();
    let members = (slot.count + BURSTS.len() - 1 - burst) / BURSTS.len();
    let (x, y, z) = BURSTS[burst];
    let center = Vec3::new(x, y, z) * s;
    center
        + fibonacci_sphere(slot.index / BURSTS.len(), members) * 0.45 * s
        + jitter(rng, 0.06 * s)
}

/// Garland spiralling up a cone, a trunk and a star on top.
pub fn christmas_tree(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&CHRISTMAS_TREE);
    match part.segment {
        0 => {
            let t = part.progress();
            ring_point(0.7 * s * (1.0 - t), t * 7.0 * TAU) + Vec3::new(0.0, 0.3 * s + 1.5 * s * t, 0.0)
        }
        1 => column(Vec3::ZERO, 0.08 * s, 0.0, 0.3 * s, part.inclusive(), 3.0),
        _ => {
            // Upright star: rotate the flat outline into the XY plane.
            let p = star_outline(part.progress(), 0.15 * s, 0.06 * s);
            Vec3::new(p.x, 1.95 * s - p.z, 0.0)
        }
    }
}

/// Six arms, each with a pair of side branches.
pub fn snowflake(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&SNOWFLAKE);
    match part.segment {
        0 => {
            let (arm, t) = part.strand(SNOWFLAKE_ARMS);
            ring_point(s * t, arm as f32 / SNOWFLAKE_ARMS as f32 * TAU)
        }
        _ => {
            let (branch, t) = part.strand(SNOWFLAKE_ARMS * 2);
            let heading = (branch / 2) as f32 / SNOWFLAKE_ARMS as f32 * TAU;
            let side = if branch % 2 == 0 { 1.0 } else { -1.0 };
            let root = ring_point(0.6 * s, heading);
            root + ring_point(0.3 * s * t, heading + side * FRAC_PI_4)
        }
    }
}

/// Five interlocking rings, three over two.
pub fn olympic_rings(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&OLYMPIC_RINGS);
    let (x, up) = match part.segment {
        0 => (-1.1, 0.25),
        1 => (0.0, 0.25),
        2 => (1.1, 0.25),
        3 => (-0.55, -0.25),
        _ => (0.55, -0.25),
    };
    flat_circle(flat(x * s, up * s), 0.5 * s, part.progress())
}

/// Two-row base band with a ring of peaks that alternate tall and short.
pub fn crown(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&CROWN);
    match part.segment {
        0 => {
            let (row, t) = part.loop_strand(2);
            ring_point(s, t * TAU) + Vec3::new(0.0, 0.15 * s * row as f32, 0.0)
        }
        _ => {
            let t = part.progress();
            let vertices = CROWN_PEAKS * 2;
            let u = t * vertices as f32;
            let edge = (u.floor() as usize).min(vertices - 1);
            let height = |v: usize| match v % 4 {
                1 => 0.9 * s,
                3 => 0.6 * s,
                _ => 0.15 * s,
            };
            let y = height(edge) + (height(edge + 1) - height(edge)) * (u - edge as f32);
            ring_point(s, t * TAU) + Vec3::new(0.0, y, 0.0)
        }
    }
}

/// Flared cup with two handles on a stem and a stepped base.
pub fn trophy(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&TROPHY);
    match part.segment {
        0 => {
            let t = part.inclusive();
            let angle = t * 6.0 * TAU;
            ring_point(0.2 * s + 0.4 * s * t.sqrt(), angle) + Vec3::new(0.0, s + 0.8 * s * t, 0.0)
        }
        1 => {
            let (side, t) = part.strand(2);
            let sign = if side == 0 { -1.0 } else { 1.0 };
            let angle = FRAC_PI_2 - t * PI;
            Vec3::new(sign * (0.55 * s + 0.25 * s * angle.cos()), 1.45 * s + 0.25 * s * angle.sin(), 0.0)
        }
        2 => column(Vec3::ZERO, 0.06 * s, 0.3 * s, s, part.inclusive(), 3.0),
        _ => {
            let (step, t) = part.loop_strand(2);
            ring_point((0.45 - 0.1 * step as f32) * s, t * TAU)
                + Vec3::new(0.0, 0.15 * s * step as f32, 0.0)
        }
    }
}
