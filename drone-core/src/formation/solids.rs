//! Curves and solids that use all three axes.

use super::geometry::{fibonacci_sphere, polygon_outline, ring_point};
use super::Slot;
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{FRAC_PI_4, PI, SQRT_2, TAU};

const PYRAMID_LAYERS: usize = 5;
/// Layer shares proportional to each layer's perimeter (5:4:3:2:1).
const PYRAMID: [f64; PYRAMID_LAYERS] = [5.0 / 15.0, 9.0 / 15.0, 12.0 / 15.0, 14.0 / 15.0, 1.0];
const DNA: [f64; 2] = [0.8, 1.0];
const DNA_RUNGS: usize = 10;

/// Archimedean spiral of four turns on the ground.
pub fn spiral(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress();
    ring_point(slot.scale * t, t * 4.0 * TAU)
}

/// Three-turn helix of radius `scale / 2` rising from `-scale` to `scale`.
pub fn helix(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress();
    let angle = t * 3.0 * TAU;
    let r = 0.5 * slot.scale;
    Vec3::new(r * angle.cos(), slot.scale * (2.0 * t - 1.0), r * angle.sin())
}

/// Sine wave along X with three crests.
pub fn wave(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress();
    Vec3::new(
        slot.scale * (2.0 * t - 1.0),
        0.25 * slot.scale * (t * 3.0 * TAU).sin(),
        0.0,
    )
}

/// Golden-angle sphere of radius `scale`.
pub fn sphere(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    fibonacci_sphere(slot.index, slot.count) * slot.scale
}

/// Stacked horizontal rings, radius `scale / 2`, height `2 * scale`.
pub fn cylinder(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let rings = ((slot.count as f32 / 2.0).sqrt().round() as usize).max(1);
    let per_ring = (slot.count + rings - 1) / rings;
    let ring_index = slot.index / per_ring;
    let angle = (slot.index % per_ring) as f32 / per_ring as f32 * TAU;
    let height = if rings > 1 {
        ring_index as f32 / (rings - 1) as f32 * 2.0 - 1.0
    } else {
        0.0
    };
    ring_point(0.5 * slot.scale, angle) + Vec3::new(0.0, height * slot.scale, 0.0)
}

/// Spiral wound up a cone that narrows to a point.
pub fn cone(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress();
    ring_point(0.7 * slot.scale * (1.0 - t), t * 8.0 * TAU)
        + Vec3::new(0.0, slot.scale * (1.6 * t - 0.8), 0.0)
}

/// Upright figure eight (lemniscate of Gerono).
pub fn figure8(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let t = slot.progress() * TAU;
    Vec3::new(slot.scale * t.sin() * t.cos(), slot.scale * t.cos(), 0.0)
}

/// Square outlines shrinking toward the top.
///
/// The swarm is dealt out to layers by perimeter, so the index of each layer's
/// first drone depends on the total count.
pub fn pyramid(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let part = slot.split(&PYRAMID);
    let level = part.segment as f32 / PYRAMID_LAYERS as f32;
    let half = s * (1.0 - level);
    polygon_outline(part.progress(), 4, half * SQRT_2, FRAC_PI_4)
        + Vec3::new(0.0, 1.2 * s * level, 0.0)
}

/// Double helix with base-pair rungs between the strands.
pub fn dna(slot: &Slot, _rng: &mut dyn RngCore) -> Vec3 {
    let s = slot.scale;
    let strand = |which: usize, u: f32| {
        let angle = u * 3.0 * TAU + which as f32 * PI;
        ring_point(0.4 * s, angle) + Vec3::new(0.0, s * (2.0 * u - 1.0), 0.0)
    };
    let part = slot.split(&DNA);
    match part.segment {
        0 => {
            let (which, u) = part.strand(2);
            strand(which, u)
        }
        _ => {
            let (rung, t) = part.strand(DNA_RUNGS);
            let u = (rung as f32 + 0.5) / DNA_RUNGS as f32;
            strand(0, u).lerp(strand(1, u), t)
        }
    }
}
