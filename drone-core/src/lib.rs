//! Formation generation and swarm motion for a visualised drone swarm.
//!
//! The crate has two layers:
//!
//! - [`formation`]: a stateless catalog mapping a [`FormationId`], a drone count,
//!   a scale and an anchor to one target position per drone.
//! - [`swarm`]: the [`Swarm`] simulator that owns the drones, regenerates their
//!   targets whenever the configuration changes and eases every drone toward its
//!   target once per tick.
//!
//! [`color`] derives a display color for each drone from the active [`ColorMode`].
//! Rendering, camera handling and UI widgets live in the hosts (`drone-cli`,
//! `drone-wasm`); they only push configuration in and read snapshots out.

pub mod color;
pub mod formation;
pub mod swarm;

pub use color::{drone_color, Color, ColorMode, ParseColorModeError};
pub use formation::{
    generate_targets, generate_targets_by_name, FormationId, FormationKind,
    ParseFormationError, Placement, Slot,
};
pub use glam::Vec3;
pub use swarm::{Drone, DroneView, Swarm, SwarmConfig};
