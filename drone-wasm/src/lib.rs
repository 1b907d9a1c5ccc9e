use drone_core::{ColorMode, FormationId, Swarm, SwarmConfig, Vec3};
use drone_shared::{FrameSnapshot, SwarmSettings};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// The swarm as seen from a browser renderer.
///
/// Buffers are flat: `positions()` is `x, y, z` per drone and `colors()` is
/// `r, g, b` per drone, both in the same order as `ids()`.
#[wasm_bindgen]
pub struct DroneSimulation {
    swarm: Swarm,
}

#[wasm_bindgen]
impl DroneSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(swarm_size: usize) -> DroneSimulation {
        console_log!("Initializing drone swarm with {} drones", swarm_size);
        let config = SwarmConfig {
            swarm_size,
            ..SwarmConfig::default()
        };
        DroneSimulation {
            swarm: Swarm::new(config),
        }
    }

    /// Switch formation. Unknown names are ignored and return `false`.
    pub fn set_formation(&mut self, name: &str) -> bool {
        let known = self.swarm.set_formation_by_name(name);
        if !known {
            console_log!("Unknown formation '{}'", name);
        }
        known
    }

    pub fn set_swarm_size(&mut self, swarm_size: usize) {
        self.swarm.set_swarm_size(swarm_size);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.swarm.set_scale(scale);
    }

    pub fn set_anchor(&mut self, x: f32, y: f32, z: f32) {
        self.swarm.set_anchor(Vec3::new(x, y, z));
    }

    pub fn set_color_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode: ColorMode = name
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        self.swarm.set_color_mode(mode);
        Ok(())
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.swarm.set_animating(animating);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.swarm.set_speed(speed);
    }

    /// Replace the whole configuration from a `SwarmSettings` JSON document.
    ///
    /// Unknown formation or color mode names keep the current ones; only a
    /// document that is not valid JSON is an error.
    pub fn apply_settings(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = SwarmSettings::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("invalid settings JSON: {}", e)))?;
        if settings.formation.parse::<FormationId>().is_err() {
            console_log!("Unknown formation '{}'", settings.formation);
        }
        let config = settings.to_config_or(self.swarm.config());
        self.swarm.apply(config);
        Ok(())
    }

    pub fn settings(&self) -> Result<String, JsValue> {
        SwarmSettings::from(self.swarm.config())
            .to_json_pretty()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance one frame; `dt` is the frame time in seconds.
    pub fn tick(&mut self, dt: f32) {
        self.swarm.tick(dt);
    }

    pub fn positions(&self) -> Vec<f32> {
        self.swarm
            .drones()
            .iter()
            .flat_map(|drone| drone.position.to_array())
            .collect()
    }

    pub fn colors(&self) -> Vec<u8> {
        self.swarm
            .snapshot()
            .iter()
            .flat_map(|view| [view.color.r, view.color.g, view.color.b])
            .collect()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.swarm.drones().iter().map(|drone| drone.id).collect()
    }

    /// Where to draw the anchor marker, as `[x, y, z]`.
    pub fn anchor(&self) -> Vec<f32> {
        self.swarm.anchor_marker().to_array().to_vec()
    }

    pub fn drone_count(&self) -> usize {
        self.swarm.drones().len()
    }

    pub fn is_settled(&self) -> bool {
        self.swarm.is_settled()
    }

    pub fn elapsed(&self) -> f32 {
        self.swarm.elapsed()
    }

    /// The current frame as a `FrameSnapshot` JSON document.
    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&FrameSnapshot::capture(&self.swarm))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Every formation name, for building a picker.
    pub fn formations() -> js_sys::Array {
        FormationId::ALL
            .iter()
            .map(|id| JsValue::from_str(id.as_str()))
            .collect()
    }

    pub fn color_modes() -> js_sys::Array {
        ColorMode::ALL
            .iter()
            .map(|mode| JsValue::from_str(mode.as_str()))
            .collect()
    }
}
