//! Simulated (mouse-driven) backend payload
//!
//! Mirrors the Tobii schema minus the velocity-driven fields in the
//! animation block. Useful for developing experiments without hardware.

use super::{PayloadBuilder, PayloadContext};
use crate::alerts::AlertSink;
use crate::calibration::config::CalibrationConfig;
use serde_json::{json, Map, Value};

/// Seconds per target when the config leaves pacing unset
const DEFAULT_PACING_SPEED: f64 = 1.0;

pub struct MouseGazePayload;

impl PayloadBuilder for MouseGazePayload {
    fn build(
        &self,
        config: &CalibrationConfig,
        ctx: &PayloadContext<'_>,
        _alerts: &dyn AlertSink,
    ) -> Map<String, Value> {
        let mut target_attributes = ctx.target.attributes();
        target_attributes.insert(
            "animate".to_string(),
            json!({
                "enable": config.animation.enabled,
                "expansion_ratio": config.animation.expand_scale,
                "contract_only": config.animation.contract_only,
            }),
        );

        let mut payload = Map::new();
        payload.insert(
            "target_attributes".to_string(),
            Value::Object(target_attributes),
        );
        payload.insert("type".to_string(), json!(config.target_layout.as_str()));
        payload.insert("randomize".to_string(), json!(config.randomise_pos));
        payload.insert("auto_pace".to_string(), json!(config.auto_pace));
        payload.insert(
            "pacing_speed".to_string(),
            json!(config.pacing_speed.unwrap_or(DEFAULT_PACING_SPEED)),
        );
        payload.insert("unit_type".to_string(), json!(ctx.units.as_str()));
        payload.insert("color_type".to_string(), json!(ctx.color_space.as_str()));
        payload.insert(
            "screen_background_color".to_string(),
            ctx.background_color.clone(),
        );
        payload
    }
}
