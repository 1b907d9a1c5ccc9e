//! Per-drone display colors.
//!
//! Coloring is a pure read of a drone's state; it never mutates the swarm.

use crate::formation::segments::{split, THIRDS};
use crate::swarm::{Drone, MAX_STEP};
use std::fmt;
use std::str::FromStr;

/// Distance from the origin that maps to the end of the distance gradient.
pub const DISTANCE_NORMALIZATION: f32 = 20.0;

const SAFFRON: Color = Color::from_hex(0xFF9933);
const WHITE: Color = Color::from_hex(0xFFFFFF);
const INDIA_GREEN: Color = Color::from_hex(0x138808);

const PEACOCK_PALETTE: [Color; 5] = [
    Color::from_hex(0x0F52BA),
    Color::from_hex(0x00A693),
    Color::from_hex(0x50C878),
    Color::from_hex(0xFFD700),
    Color::from_hex(0x4B0082),
];
const FIRE_PALETTE: [Color; 5] = [
    Color::from_hex(0xFF0000),
    Color::from_hex(0xFF4500),
    Color::from_hex(0xFF8C00),
    Color::from_hex(0xFFD700),
    Color::from_hex(0xFFA500),
];
const OCEAN_PALETTE: [Color; 5] = [
    Color::from_hex(0x000080),
    Color::from_hex(0x0077BE),
    Color::from_hex(0x00CED1),
    Color::from_hex(0x40E0D0),
    Color::from_hex(0xE0FFFF),
];
const GALAXY_PALETTE: [Color; 5] = [
    Color::from_hex(0x4B0082),
    Color::from_hex(0x8A2BE2),
    Color::from_hex(0x9400D3),
    Color::from_hex(0xFF00FF),
    Color::from_hex(0xFFFFFF),
];

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Hue in degrees (wrapped), saturation and lightness in percent.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = if hue.is_finite() { hue.rem_euclid(360.0) / 360.0 } else { 0.0 };
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::new(
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Linear `[r, g, b]` in `0.0..=1.0`, the layout GPU vertex colors expect.
    pub fn to_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How drones are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Hue sweep across the swarm by index.
    ByIndex,
    /// Blue near the origin, red far away.
    ByDistance,
    /// Blue when still, red at full step.
    ByVelocity,
    /// Index hue sweep rotating over time.
    Rainbow,
    /// Per-drone hue oscillating between blue and red.
    Temperature,
    /// Saffron, white and green thirds.
    #[default]
    IndianFlag,
    Peacock,
    Fire,
    Ocean,
    Galaxy,
}

impl ColorMode {
    pub const ALL: &'static [ColorMode] = &[
        ColorMode::ByIndex,
        ColorMode::ByDistance,
        ColorMode::ByVelocity,
        ColorMode::Rainbow,
        ColorMode::Temperature,
        ColorMode::IndianFlag,
        ColorMode::Peacock,
        ColorMode::Fire,
        ColorMode::Ocean,
        ColorMode::Galaxy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::ByIndex => "by_index",
            ColorMode::ByDistance => "by_distance",
            ColorMode::ByVelocity => "by_velocity",
            ColorMode::Rainbow => "rainbow",
            ColorMode::Temperature => "temperature",
            ColorMode::IndianFlag => "indian_flag",
            ColorMode::Peacock => "peacock",
            ColorMode::Fire => "fire",
            ColorMode::Ocean => "ocean",
            ColorMode::Galaxy => "galaxy",
        }
    }

    /// Whether colors in this mode change while the swarm is otherwise idle.
    pub fn is_time_driven(self) -> bool {
        matches!(self, ColorMode::Rainbow | ColorMode::Temperature)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError {
    pub name: String,
}

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color mode '{}'", self.name)
    }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseColorModeError {
                name: name.to_string(),
            })
    }
}

/// Color of the drone at `index` in a swarm of `count`.
///
/// `elapsed` is the simulation time in seconds, used by the animated modes.
pub fn drone_color(drone: &Drone, index: usize, count: usize, mode: ColorMode, elapsed: f32) -> Color {
    let count = count.max(1);
    let fraction = index as f32 / count as f32;
    match mode {
        ColorMode::ByIndex => Color::from_hsl(fraction * 360.0, 70.0, 60.0),
        ColorMode::ByDistance => {
            let normalized = (drone.position.length() / DISTANCE_NORMALIZATION).min(1.0);
            Color::from_hsl((1.0 - normalized) * 240.0, 80.0, 60.0)
        }
        ColorMode::ByVelocity => {
            let normalized = (drone.velocity.length() / MAX_STEP).min(1.0);
            Color::from_hsl((1.0 - normalized) * 240.0, 90.0, 55.0)
        }
        ColorMode::Rainbow => Color::from_hsl(fraction * 360.0 + elapsed * 60.0, 85.0, 60.0),
        ColorMode::Temperature => {
            let hue = 120.0 + 120.0 * (elapsed * 2.0 + index as f32 * 0.3).sin();
            Color::from_hsl(hue, 85.0, 55.0)
        }
        ColorMode::IndianFlag => match split(index, count, &THIRDS).segment {
            0 => SAFFRON,
            1 => WHITE,
            _ => INDIA_GREEN,
        },
        ColorMode::Peacock => PEACOCK_PALETTE[index % PEACOCK_PALETTE.len()],
        ColorMode::Fire => FIRE_PALETTE[index % FIRE_PALETTE.len()],
        ColorMode::Ocean => OCEAN_PALETTE[index % OCEAN_PALETTE.len()],
        ColorMode::Galaxy => GALAXY_PALETTE[index % GALAXY_PALETTE.len()],
    }
}
