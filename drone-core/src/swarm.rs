//! The swarm simulator.
//!
//! [`Swarm`] owns the drones and the last applied [`SwarmConfig`]. Configuration
//! changes rewrite every target before they return, and [`Swarm::tick`] takes
//! `&mut self`, so an integration step always sees a complete, consistent set of
//! drones and targets.

use crate::color::{drone_color, Color, ColorMode};
use crate::formation::{self, FormationId};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Below this distance a drone counts as arrived and is left alone.
pub const CONVERGENCE_THRESHOLD: f32 = 0.1;
/// Fraction of the remaining distance covered per tick at speed 1.
pub const EASE_RATE: f32 = 0.02;
/// Longest step a drone takes per tick at speed 1.
pub const MAX_STEP: f32 = 0.1;
/// New drones spawn uniformly inside a cube of this half extent.
pub const SPAWN_HALF_EXTENT: f32 = 10.0;
/// Speed multiplier used in place of a non-positive or non-finite one.
pub const MIN_SPEED: f32 = 0.1;

/// A single drone.
#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: u32,
    pub position: Vec3,
    pub target: Vec3,
    /// Displacement applied on the most recent moving tick.
    pub velocity: Vec3,
}

impl Drone {
    pub fn new(id: u32, position: Vec3) -> Self {
        Self {
            id,
            position,
            target: Vec3::ZERO,
            velocity: Vec3::ZERO,
        }
    }

    /// A drone somewhere inside the spawn cube, at rest, aimed at the origin.
    pub fn random<R: RngCore + ?Sized>(id: u32, rng: &mut R) -> Self {
        let mut coord = || (rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_HALF_EXTENT;
        let position = Vec3::new(coord(), coord(), coord());
        Self::new(id, position)
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn has_arrived(&self) -> bool {
        self.distance_to_target() <= CONVERGENCE_THRESHOLD
    }

    /// Ease toward the target.
    ///
    /// The step is proportional to the remaining distance, capped at
    /// `MAX_STEP * speed` and never longer than the distance itself, so drones
    /// slow down on approach and cannot overshoot. Far from the origin a step
    /// can be smaller than the spacing of `f32` coordinates; a step that would
    /// not bring the drone closer lands it on the target instead. Returns
    /// whether it moved.
    pub fn update(&mut self, speed: f32) -> bool {
        let direction = self.target - self.position;
        let distance = direction.length();
        if distance <= CONVERGENCE_THRESHOLD {
            return false;
        }

        let step = (distance * EASE_RATE * speed)
            .min(MAX_STEP * speed)
            .min(distance);
        let mut next = self.position + direction / distance * step;
        if next.distance(self.target) >= distance {
            next = self.target;
        }
        self.velocity = next - self.position;
        self.position = next;
        true
    }
}

/// Everything a host can change about the swarm.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmConfig {
    pub formation: FormationId,
    pub swarm_size: usize,
    pub scale: f32,
    pub anchor: Vec3,
    pub color_mode: ColorMode,
    pub animating: bool,
    pub speed: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            formation: FormationId::IndianFlag,
            swarm_size: 150,
            scale: 8.0,
            anchor: Vec3::ZERO,
            color_mode: ColorMode::IndianFlag,
            animating: false,
            speed: 1.0,
        }
    }
}

impl SwarmConfig {
    /// Clamp every field into its valid range.
    pub fn normalized(mut self) -> Self {
        self.swarm_size = normalize_size(self.swarm_size);
        self.scale = formation::sanitize_scale(self.scale);
        self.speed = normalize_speed(self.speed);
        if !self.anchor.is_finite() {
            log::warn!("Ignoring non-finite anchor {:?}", self.anchor);
            self.anchor = Vec3::ZERO;
        }
        self
    }
}

fn normalize_size(size: usize) -> usize {
    if size == 0 {
        log::warn!("Swarm size 0 raised to 1");
    }
    size.max(1)
}

fn normalize_speed(speed: f32) -> f32 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        log::warn!("Animation speed {} replaced by {}", speed, MIN_SPEED);
        MIN_SPEED
    }
}

/// What a renderer needs to draw one drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneView {
    pub id: u32,
    pub position: Vec3,
    pub color: Color,
}

/// A swarm of drones easing into formation.
pub struct Swarm<R: RngCore = StdRng> {
    drones: Vec<Drone>,
    config: SwarmConfig,
    rng: R,
    next_id: u32,
    elapsed: f32,
    ticks: u64,
}

impl Swarm<StdRng> {
    pub fn new(config: SwarmConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible swarm: spawn positions and stochastic formations follow `seed`.
    pub fn with_seed(config: SwarmConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Swarm<R> {
    pub fn with_rng(config: SwarmConfig, rng: R) -> Self {
        let mut swarm = Self {
            drones: Vec::new(),
            config: config.normalized(),
            rng,
            next_id: 0,
            elapsed: 0.0,
            ticks: 0,
        };
        swarm.respawn();
        swarm
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Simulation time accumulated by animated ticks, in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of animated ticks so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Where the renderer should draw the target marker.
    pub fn anchor_marker(&self) -> Vec3 {
        self.config.anchor
    }

    /// Whether every drone is within the convergence threshold of its target.
    pub fn is_settled(&self) -> bool {
        self.drones.iter().all(Drone::has_arrived)
    }

    pub fn set_formation(&mut self, formation: FormationId) {
        if self.config.formation == formation {
            return;
        }
        log::debug!("Formation {} -> {}", self.config.formation, formation);
        self.config.formation = formation;
        self.retarget();
    }

    /// Switch formation by name. Unknown names keep the current formation and
    /// targets and return `false`.
    pub fn set_formation_by_name(&mut self, name: &str) -> bool {
        match name.parse::<FormationId>() {
            Ok(formation) => {
                self.set_formation(formation);
                true
            }
            Err(e) => {
                log::warn!("{}; keeping {}", e, self.config.formation);
                false
            }
        }
    }

    /// Replace the whole swarm with `size` fresh drones (at least one).
    pub fn set_swarm_size(&mut self, size: usize) {
        let size = normalize_size(size);
        if self.config.swarm_size == size {
            return;
        }
        log::debug!("Swarm size {} -> {}", self.config.swarm_size, size);
        self.config.swarm_size = size;
        self.respawn();
    }

    pub fn set_scale(&mut self, scale: f32) {
        let scale = formation::sanitize_scale(scale);
        if self.config.scale == scale {
            return;
        }
        self.config.scale = scale;
        self.retarget();
    }

    pub fn set_anchor(&mut self, anchor: Vec3) {
        if !anchor.is_finite() {
            log::warn!("Ignoring non-finite anchor {:?}", anchor);
            return;
        }
        if self.config.anchor == anchor {
            return;
        }
        self.config.anchor = anchor;
        self.retarget();
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.config.color_mode = mode;
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.config.animating = animating;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = normalize_speed(speed);
    }

    /// Apply a full configuration, doing only the work the differences need:
    /// a size change respawns, a shape change retargets, the rest is stored.
    pub fn apply(&mut self, config: SwarmConfig) {
        let config = config.normalized();
        let respawn = config.swarm_size != self.config.swarm_size;
        let retarget = config.formation != self.config.formation
            || config.scale != self.config.scale
            || config.anchor != self.config.anchor;
        self.config = config;
        if respawn {
            self.respawn();
        } else if retarget {
            self.retarget();
        }
    }

    /// Regenerate targets even if nothing changed, e.g. to reshuffle a
    /// stochastic formation.
    pub fn regenerate(&mut self) {
        self.retarget();
    }

    /// Advance one frame. Does nothing while animation is off.
    ///
    /// Motion is per frame: `elapsed_seconds` only advances the clock that the
    /// time-driven color modes read.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        if !self.config.animating {
            return;
        }
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            self.elapsed += elapsed_seconds;
        }
        self.ticks += 1;

        let speed = self.config.speed;
        for drone in self.drones.iter_mut() {
            drone.update(speed);
        }
    }

    pub fn color_of(&self, index: usize) -> Option<Color> {
        self.drones.get(index).map(|drone| {
            drone_color(
                drone,
                index,
                self.drones.len(),
                self.config.color_mode,
                self.elapsed,
            )
        })
    }

    /// Id, position and color of every drone, in index order.
    pub fn snapshot(&self) -> Vec<DroneView> {
        let count = self.drones.len();
        self.drones
            .iter()
            .enumerate()
            .map(|(index, drone)| DroneView {
                id: drone.id,
                position: drone.position,
                color: drone_color(drone, index, count, self.config.color_mode, self.elapsed),
            })
            .collect()
    }

    fn respawn(&mut self) {
        let mut drones = Vec::with_capacity(self.config.swarm_size);
        for _ in 0..self.config.swarm_size {
            drones.push(Drone::random(self.next_id, &mut self.rng));
            self.next_id = self.next_id.wrapping_add(1);
        }
        self.drones = drones;
        self.retarget();
    }

    fn retarget(&mut self) {
        let targets = formation::generate_targets(
            self.config.formation,
            self.drones.len(),
            self.config.scale,
            self.config.anchor,
            &mut self.rng,
        );
        if targets.len() < self.drones.len() {
            log::warn!(
                "{} produced {} targets for {} drones; the rest keep their previous targets",
                self.config.formation,
                targets.len(),
                self.drones.len()
            );
        }
        for (drone, target) in self.drones.iter_mut().zip(targets) {
            drone.target = target;
        }
        log::debug!(
            "Retargeted {} drones to {} (scale {}, anchor {:?})",
            self.drones.len(),
            self.config.formation,
            self.config.scale,
            self.config.anchor
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(formation: FormationId, size: usize) -> SwarmConfig {
        SwarmConfig {
            formation,
            swarm_size: size,
            animating: true,
            ..SwarmConfig::default()
        }
    }

    #[test]
    fn test_drone_random_inside_spawn_cube() {
        let mut rng = StdRng::seed_from_u64(5);
        for id in 0..100 {
            let drone = Drone::random(id, &mut rng);
            assert!(drone.position.abs().max_element() <= SPAWN_HALF_EXTENT);
            assert_eq!(drone.velocity, Vec3::ZERO);
            assert_eq!(drone.target, Vec3::ZERO);
        }
    }

    #[test]
    fn test_update_step_is_clamped() {
        let mut drone = Drone::new(0, Vec3::ZERO);
        drone.target = Vec3::new(100.0, 0.0, 0.0);
        assert!(drone.update(1.0));
        assert!((drone.position.x - MAX_STEP).abs() < 1e-6);
        assert_eq!(drone.velocity, drone.position);
    }

    #[test]
    fn test_update_eases_near_target() {
        let mut drone = Drone::new(0, Vec3::ZERO);
        drone.target = Vec3::new(1.0, 0.0, 0.0);
        drone.update(1.0);
        assert!((drone.velocity.length() - EASE_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_update_never_overshoots_at_high_speed() {
        let mut drone = Drone::new(0, Vec3::ZERO);
        drone.target = Vec3::new(0.5, 0.0, 0.0);
        drone.update(1000.0);
        assert!(drone.position.x <= 0.5 + 1e-6);
    }

    #[test]
    fn test_far_from_origin_still_arrives() {
        for (anchor, speed) in [(1e5, 1.0), (1e4, MIN_SPEED), (3e6, 1.0)] {
            let mut drone = Drone::new(0, Vec3::new(anchor + 1.0, 0.0, 0.0));
            drone.target = Vec3::new(anchor, 0.0, 0.0);
            let mut ticks = 0;
            while !drone.has_arrived() {
                let before = drone.distance_to_target();
                assert!(drone.update(speed));
                assert!(drone.distance_to_target() < before);
                ticks += 1;
                assert!(ticks < 10_000, "stalled {} from target at x = {}", before, anchor);
            }
        }
    }

    #[test]
    fn test_arrived_drone_is_untouched() {
        let mut drone = Drone::new(0, Vec3::new(0.05, 0.0, 0.0));
        drone.velocity = Vec3::new(0.3, 0.0, 0.0);
        assert!(!drone.update(1.0));
        assert_eq!(drone.position, Vec3::new(0.05, 0.0, 0.0));
        assert_eq!(drone.velocity, Vec3::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn test_new_swarm_has_targets() {
        let swarm = Swarm::with_seed(config(FormationId::Circle, 12), 1);
        assert_eq!(swarm.drones().len(), 12);
        assert!(swarm.drones().iter().all(|d| (d.target.length() - 8.0).abs() < 1e-4));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut swarm = Swarm::with_seed(config(FormationId::Line, 5), 1);
        let first: Vec<u32> = swarm.drones().iter().map(|d| d.id).collect();
        swarm.set_swarm_size(3);
        let second: Vec<u32> = swarm.drones().iter().map(|d| d.id).collect();
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
        assert_eq!(second, vec![5, 6, 7]);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let mut swarm = Swarm::with_seed(config(FormationId::Line, 0), 1);
        assert_eq!(swarm.drones().len(), 1);
        swarm.set_swarm_size(0);
        assert_eq!(swarm.drones().len(), 1);
    }

    #[test]
    fn test_formation_change_keeps_positions() {
        let mut swarm = Swarm::with_seed(config(FormationId::Circle, 20), 2);
        let before: Vec<Vec3> = swarm.drones().iter().map(|d| d.position).collect();
        swarm.set_formation(FormationId::Sphere);
        let after: Vec<Vec3> = swarm.drones().iter().map(|d| d.position).collect();
        assert_eq!(before, after);
        assert!(swarm.drones().iter().all(|d| (d.target.length() - 8.0).abs() < 1e-4));
    }

    #[test]
    fn test_unknown_formation_keeps_targets() {
        let mut swarm = Swarm::with_seed(config(FormationId::Heart, 10), 3);
        let before: Vec<Vec3> = swarm.drones().iter().map(|d| d.target).collect();
        assert!(!swarm.set_formation_by_name("tesseract"));
        let after: Vec<Vec3> = swarm.drones().iter().map(|d| d.target).collect();
        assert_eq!(before, after);
        assert_eq!(swarm.config().formation, FormationId::Heart);
    }

    #[test]
    fn test_anchor_moves_targets() {
        let mut swarm = Swarm::with_seed(config(FormationId::Circle, 8), 3);
        let before: Vec<Vec3> = swarm.drones().iter().map(|d| d.target).collect();
        let anchor = Vec3::new(20.0, 0.0, 0.0);
        swarm.set_anchor(anchor);
        for (drone, old) in swarm.drones().iter().zip(before) {
            assert!(drone.target.distance(old + anchor) < 1e-4);
        }
        assert_eq!(swarm.anchor_marker(), anchor);
    }

    #[test]
    fn test_non_finite_inputs_are_normalized() {
        let mut swarm = Swarm::with_seed(config(FormationId::Circle, 8), 3);
        swarm.set_speed(f32::NAN);
        assert_eq!(swarm.config().speed, MIN_SPEED);
        swarm.set_speed(-2.0);
        assert_eq!(swarm.config().speed, MIN_SPEED);
        swarm.set_anchor(Vec3::new(f32::INFINITY, 0.0, 0.0));
        assert_eq!(swarm.anchor_marker(), Vec3::ZERO);
        swarm.set_scale(-1.0);
        assert_eq!(swarm.config().scale, 0.0);
        assert!(swarm.drones().iter().all(|d| d.target == Vec3::ZERO));
    }

    #[test]
    fn test_tick_advances_clock_only_when_animating() {
        let mut swarm = Swarm::with_seed(config(FormationId::Circle, 4), 3);
        swarm.tick(0.5);
        assert_eq!(swarm.elapsed(), 0.5);
        assert_eq!(swarm.tick_count(), 1);
        swarm.set_animating(false);
        swarm.tick(0.5);
        assert_eq!(swarm.elapsed(), 0.5);
        assert_eq!(swarm.tick_count(), 1);
    }

    #[test]
    fn test_apply_only_respawns_on_size_change() {
        let mut swarm = Swarm::with_seed(config(FormationId::Circle, 6), 4);
        let ids: Vec<u32> = swarm.drones().iter().map(|d| d.id).collect();
        let mut next = swarm.config().clone();
        next.formation = FormationId::Hexagon;
        next.color_mode = ColorMode::Fire;
        swarm.apply(next.clone());
        assert_eq!(ids, swarm.drones().iter().map(|d| d.id).collect::<Vec<_>>());
        assert_eq!(swarm.config().color_mode, ColorMode::Fire);

        next.swarm_size = 9;
        swarm.apply(next);
        assert_eq!(swarm.drones().len(), 9);
        assert_eq!(swarm.drones()[0].id, 6);
    }

    #[test]
    fn test_snapshot_matches_drones() {
        let swarm = Swarm::with_seed(config(FormationId::Star, 7), 5);
        let snapshot = swarm.snapshot();
        assert_eq!(snapshot.len(), 7);
        for (view, drone) in snapshot.iter().zip(swarm.drones()) {
            assert_eq!(view.id, drone.id);
            assert_eq!(view.position, drone.position);
        }
        assert_eq!(swarm.color_of(0), Some(snapshot[0].color));
        assert_eq!(swarm.color_of(7), None);
    }
}
