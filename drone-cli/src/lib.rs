//! Headless host for the drone swarm simulator.

pub mod cli;
pub mod runner;
pub mod settings;
