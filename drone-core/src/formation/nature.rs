//! Butterflies, birds, plants and the sky.

use super::geometry::{
    along, column, disk, fibonacci_sphere, flat, flat_circle, jitter, ring_point,
};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{PI, TAU};

const BIRD: [f64; 3] = [0.3, 0.65, 1.0];
const EAGLE: [f64; 4] = [0.2, 0.3, 0.8, 1.0];
const FLOWER: [f64; 2] = [0.2, 1.0];
const TREE: [f64; 2] = [0.25, 1.0];
const SUN: [f64; 2] = [0.5, 1.0];
const SUN_RAYS: usize = 12;
const MOON: [f64; 2] = [0.6, 1.0];
const CLOUD: [f64; 3] = [0.4, 0.7, 1.0];

/// Temple Fay's butterfly curve over one period.
pub fn butterfly(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress() * TAU;
    let r = t.sin().exp() - 2.0 * (4.0 * t).cos() + ((2.0 * t - PI) / 24.0).sin().powi(5);
    let k = slot.scale / 4.0;
    flat(k * r * t.sin(), k * r * t.cos())
}

/// Gull silhouette: a body with two raised, curved wings.
pub fn bird(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&BIRD);
    match part.segment {
        0 => along(flat(0.0, -0.3 * s), flat(0.0, 0.3 * s), part.local, part.len),
        side => {
            let sign = if side == 1 { -1.0 } else { 1.0 };
            let u = part.inclusive();
            Vec3::new(sign * s * u, 0.35 * s * (PI * u).sin(), 0.15 * s * u)
        }
    }
}

/// Spread eagle: body, head, broad wings and a fanned tail.
pub fn eagle(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&EAGLE);
    match part.segment {
        0 => along(flat(0.0, -0.3 * s), flat(0.0, 0.4 * s), part.local, part.len),
        1 => flat_circle(flat(0.0, 0.5 * s), 0.1 * s, part.progress()),
        2 => {
            let (side, u) = part.strand(2);
            let sign = if side == 0 { -1.0 } else { 1.0 };
            flat(sign * 1.4 * s * u, 0.15 * s * (PI * u).sin())
                + Vec3::new(0.0, 0.25 * s * (PI * u).sin(), 0.0)
        }
        _ => {
            let (feather, u) = part.strand(5);
            let angle = PI + (feather as f32 / 4.0 - 0.5) * 0.9;
            flat(0.0, -0.3 * s) + flat(0.4 * s * u * angle.sin(), -0.4 * s * u * angle.cos().abs())
        }
    }
}

/// Center disk with six rounded petals.
pub fn flower(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&FLOWER);
    match part.segment {
        0 => disk(part.local, part.len, 0.15 * s),
        _ => {
            let angle = part.progress() * TAU;
            ring_point(0.2 * s + 0.8 * s * (3.0 * angle).sin().abs(), angle)
        }
    }
}

/// Trunk topped by a round canopy.
pub fn tree(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&TREE);
    match part.segment {
        0 => column(Vec3::ZERO, 0.08 * s, 0.0, 0.7 * s, part.inclusive(), 4.0),
        _ => Vec3::new(0.0, 1.2 * s, 0.0) + fibonacci_sphere(part.local, part.len) * 0.6 * s,
    }
}

/// Filled core with twelve rays.
pub fn sun(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&SUN);
    match part.segment {
        0 => disk(part.local, part.len, 0.45 * s),
        _ => {
            let (ray, t) = part.strand(SUN_RAYS);
            ring_point(0.6 * s + 0.4 * s * t, ray as f32 / SUN_RAYS as f32 * TAU)
        }
    }
}

/// Crescent opening to the right: an outer arc and an offset inner arc.
pub fn moon(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&MOON);
    let u = part.inclusive();
    match part.segment {
        0 => {
            let angle = PI * (0.25 + 1.5 * u);
            flat(s * angle.cos(), s * angle.sin())
        }
        _ => {
            let angle = PI * (0.3 + 1.4 * u);
            flat(0.35 * s + 0.75 * s * angle.cos(), 0.75 * s * angle.sin())
        }
    }
}

/// Three overlapping puffs with random texture.
pub fn cloud(slot: &Slot, rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&CLOUD);
    let (center, radius) = match part.segment {
        0 => (Vec3::new(0.0, 0.2 * s, 0.0), 0.5 * s),
        1 => (Vec3::new(-0.55 * s, 0.0, 0.0), 0.38 * s),
        _ => (Vec3::new(0.55 * s, 0.0, 0.0), 0.38 * s),
    };
    center + fibonacci_sphere(part.local, part.len) * radius + jitter(rng, 0.08 * s)
}
