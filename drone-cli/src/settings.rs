use crate::cli::RunArgs;
use anyhow::{Context, Result};
use drone_core::SwarmConfig;
use drone_shared::SwarmSettings;
use std::fs;
use std::path::Path;

/// Read a JSON settings document. Missing fields take their defaults.
pub fn load_settings(path: &Path) -> Result<SwarmSettings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    SwarmSettings::from_json(&json)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))
}

/// Settings file (or defaults) overridden by whatever flags were given.
pub fn resolve_settings(args: &RunArgs) -> Result<SwarmSettings> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => SwarmSettings::default(),
    };

    if let Some(formation) = &args.formation {
        settings.formation = formation.clone();
    }
    if let Some(swarm_size) = args.swarm_size {
        settings.swarm_size = swarm_size;
    }
    if let Some(scale) = args.scale {
        settings.scale = scale;
    }
    if let Some(anchor) = args.anchor {
        settings.anchor = anchor;
    }
    if let Some(color_mode) = &args.color_mode {
        settings.color_mode = color_mode.clone();
    }
    if let Some(speed) = args.speed {
        settings.speed = speed;
    }
    // A headless run that never animates would only print the spawn frame.
    settings.animating = true;

    Ok(settings)
}

pub fn resolve_config(args: &RunArgs) -> Result<SwarmConfig> {
    let settings = resolve_settings(args)?;
    let config = settings.to_config().context("Invalid swarm settings")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drone_core::{ColorMode, FormationId, Vec3};

    #[test]
    fn test_flags_without_file() {
        let args = RunArgs {
            formation: Some("spiral".to_string()),
            color_mode: Some("rainbow".to_string()),
            anchor: Some([1.0, 0.0, -1.0]),
            ..RunArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.formation, FormationId::Spiral);
        assert_eq!(config.color_mode, ColorMode::Rainbow);
        assert_eq!(config.anchor, Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(config.swarm_size, 150);
        assert!(config.animating);
    }

    #[test]
    fn test_unknown_formation_flag() {
        let args = RunArgs {
            formation: Some("moebius".to_string()),
            ..RunArgs::default()
        };
        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown formation 'moebius'"));
    }

    #[test]
    fn test_missing_settings_file() {
        let args = RunArgs {
            settings: Some("/definitely/not/here.json".into()),
            ..RunArgs::default()
        };
        assert!(resolve_settings(&args).is_err());
    }
}
