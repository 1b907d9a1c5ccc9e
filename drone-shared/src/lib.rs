use drone_core::{
    ColorMode, FormationId, ParseColorModeError, ParseFormationError, Swarm, SwarmConfig, Vec3,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Swarm configuration as hosts store and exchange it.
///
/// Names are kept as strings so a settings file written against a newer
/// catalog still deserializes; [`SwarmSettings::to_config`] validates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwarmSettings {
    pub formation: String,
    pub swarm_size: usize,
    pub scale: f32,
    pub anchor: [f32; 3],
    pub color_mode: String,
    pub animating: bool,
    pub speed: f32,
}

impl Default for SwarmSettings {
    fn default() -> Self {
        Self::from(&SwarmConfig::default())
    }
}

impl From<&SwarmConfig> for SwarmSettings {
    fn from(config: &SwarmConfig) -> Self {
        Self {
            formation: config.formation.as_str().to_string(),
            swarm_size: config.swarm_size,
            scale: config.scale,
            anchor: config.anchor.to_array(),
            color_mode: config.color_mode.as_str().to_string(),
            animating: config.animating,
            speed: config.speed,
        }
    }
}

impl SwarmSettings {
    /// Resolve names and build a normalized simulator configuration.
    pub fn to_config(&self) -> Result<SwarmConfig, SettingsError> {
        let formation: FormationId = self.formation.parse()?;
        let color_mode: ColorMode = self.color_mode.parse()?;
        Ok(SwarmConfig {
            formation,
            swarm_size: self.swarm_size,
            scale: self.scale,
            anchor: Vec3::from_array(self.anchor),
            color_mode,
            animating: self.animating,
            speed: self.speed,
        }
        .normalized())
    }

    /// Like [`SwarmSettings::to_config`], but an unknown formation or color
    /// mode keeps the one from `current` and everything else still applies.
    pub fn to_config_or(&self, current: &SwarmConfig) -> SwarmConfig {
        let formation = self.formation.parse::<FormationId>().unwrap_or_else(|e| {
            log::warn!("{}; keeping {}", e, current.formation);
            current.formation
        });
        let color_mode = self.color_mode.parse::<ColorMode>().unwrap_or_else(|e| {
            log::warn!("{}; keeping {}", e, current.color_mode);
            current.color_mode
        });
        SwarmConfig {
            formation,
            swarm_size: self.swarm_size,
            scale: self.scale,
            anchor: Vec3::from_array(self.anchor),
            color_mode,
            animating: self.animating,
            speed: self.speed,
        }
        .normalized()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A settings document named something the catalog does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Formation(ParseFormationError),
    ColorMode(ParseColorModeError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Formation(e) => write!(f, "invalid settings: {}", e),
            SettingsError::ColorMode(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Formation(e) => Some(e),
            SettingsError::ColorMode(e) => Some(e),
        }
    }
}

impl From<ParseFormationError> for SettingsError {
    fn from(e: ParseFormationError) -> Self {
        SettingsError::Formation(e)
    }
}

impl From<ParseColorModeError> for SettingsError {
    fn from(e: ParseColorModeError) -> Self {
        SettingsError::ColorMode(e)
    }
}

/// One drone in a rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DroneSnapshot {
    pub id: u32,
    pub position: [f32; 3],
    /// `#rrggbb`
    pub color: String,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub elapsed: f32,
    pub anchor: [f32; 3],
    pub drones: Vec<DroneSnapshot>,
}

impl FrameSnapshot {
    pub fn capture<R: RngCore>(swarm: &Swarm<R>) -> Self {
        Self {
            tick: swarm.tick_count(),
            elapsed: swarm.elapsed(),
            anchor: swarm.anchor_marker().to_array(),
            drones: swarm
                .snapshot()
                .into_iter()
                .map(|view| DroneSnapshot {
                    id: view.id,
                    position: view.position.to_array(),
                    color: view.color.to_string(),
                })
                .collect(),
        }
    }
}

/// Summary of a running swarm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwarmStatus {
    pub drone_count: usize,
    pub formation: String,
    pub color_mode: String,
    pub tick: u64,
    pub settled: bool,
}

impl SwarmStatus {
    pub fn capture<R: RngCore>(swarm: &Swarm<R>) -> Self {
        Self {
            drone_count: swarm.drones().len(),
            formation: swarm.config().formation.to_string(),
            color_mode: swarm.config().color_mode.to_string(),
            tick: swarm.tick_count(),
            settled: swarm.is_settled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_config() {
        let settings = SwarmSettings::default();
        assert_eq!(settings.formation, "indian_flag");
        assert_eq!(settings.color_mode, "indian_flag");
        assert_eq!(settings.swarm_size, 150);
        assert!(!settings.animating);
        assert_eq!(settings.to_config(), Ok(SwarmConfig::default()));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = SwarmSettings::from_json(r#"{"formation": "heart", "scale": 4.0}"#).unwrap();
        let config = settings.to_config().unwrap();
        assert_eq!(config.formation, FormationId::Heart);
        assert_eq!(config.scale, 4.0);
        assert_eq!(config.swarm_size, 150);
        assert_eq!(config.speed, 1.0);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let settings = SwarmSettings {
            formation: "tesseract".to_string(),
            ..SwarmSettings::default()
        };
        let err = settings.to_config().unwrap_err();
        assert_eq!(err.to_string(), "invalid settings: unknown formation 'tesseract'");

        let settings = SwarmSettings {
            color_mode: "plaid".to_string(),
            ..SwarmSettings::default()
        };
        assert!(matches!(settings.to_config(), Err(SettingsError::ColorMode(_))));
    }

    #[test]
    fn test_unknown_names_keep_current_values() {
        let current = SwarmConfig {
            formation: FormationId::Heart,
            color_mode: ColorMode::Ocean,
            ..SwarmConfig::default()
        };
        let settings = SwarmSettings::from_json(
            r#"{"formation": "tesseract", "color_mode": "plaid", "swarm_size": 40, "scale": 3.0}"#,
        )
        .unwrap();
        let config = settings.to_config_or(&current);
        assert_eq!(config.formation, FormationId::Heart);
        assert_eq!(config.color_mode, ColorMode::Ocean);
        assert_eq!(config.swarm_size, 40);
        assert_eq!(config.scale, 3.0);
    }

    #[test]
    fn test_known_names_replace_current_values() {
        let settings = SwarmSettings::from_json(r#"{"formation": "dna", "color_mode": "fire"}"#).unwrap();
        let config = settings.to_config_or(&SwarmConfig::default());
        assert_eq!(Ok(config.clone()), settings.to_config());
        assert_eq!(config.formation, FormationId::Dna);
        assert_eq!(config.color_mode, ColorMode::Fire);
    }

    #[test]
    fn test_to_config_normalizes() {
        let settings = SwarmSettings {
            swarm_size: 0,
            scale: -3.0,
            speed: 0.0,
            ..SwarmSettings::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(config.swarm_size, 1);
        assert_eq!(config.scale, 0.0);
        assert!((config.speed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_frame_snapshot_serializes() {
        let config = SwarmConfig {
            formation: FormationId::Circle,
            swarm_size: 3,
            anchor: Vec3::new(1.0, 2.0, 3.0),
            ..SwarmConfig::default()
        };
        let swarm = Swarm::with_seed(config, 1);
        let frame = FrameSnapshot::capture(&swarm);
        assert_eq!(frame.drones.len(), 3);
        assert_eq!(frame.anchor, [1.0, 2.0, 3.0]);
        assert!(frame.drones.iter().all(|d| d.color.len() == 7 && d.color.starts_with('#')));

        let json = serde_json::to_string(&frame).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn test_status() {
        let swarm = Swarm::with_seed(SwarmConfig::default(), 2);
        let status = SwarmStatus::capture(&swarm);
        assert_eq!(status.drone_count, 150);
        assert_eq!(status.formation, "indian_flag");
        assert!(!status.settled);
        assert_eq!(status.tick, 0);
    }
}
