//! GazePoint-class backend payload
//!
//! GazePoint paces itself; there is no auto-pace switch. The delay before
//! each target is driven by the animation velocity only while animation is
//! enabled, otherwise a fixed delay applies.

use super::{PayloadBuilder, PayloadContext};
use crate::alerts::{Advisory, AlertSink, AUTO_PACE_IGNORED};
use crate::calibration::config::CalibrationConfig;
use serde_json::{json, Map, Value};

/// Seconds each target stays on screen when the config leaves pacing unset
const DEFAULT_TARGET_DURATION: f64 = 1.5;

/// Delay before each target when animation is disabled
const FIXED_TARGET_DELAY: f64 = 0.5;

pub struct GazePointPayload;

impl PayloadBuilder for GazePointPayload {
    fn build(
        &self,
        config: &CalibrationConfig,
        ctx: &PayloadContext<'_>,
        alerts: &dyn AlertSink,
    ) -> Map<String, Value> {
        if !config.auto_pace {
            // GazePoint always paces itself; manual pacing has no effect
            alerts.notify(Advisory::new(AUTO_PACE_IGNORED).field("brand", "GazePoint"));
        }

        let mut target_attributes = ctx.target.attributes();
        target_attributes.insert(
            "animate".to_string(),
            json!({
                "enable": config.animation.enabled,
                "expansion_ratio": config.animation.expand_scale,
                "contract_only": config.animation.contract_only,
            }),
        );

        let target_delay = if config.animation.enabled {
            config.animation.velocity
        } else {
            FIXED_TARGET_DELAY
        };

        let mut payload = Map::new();
        payload.insert("use_builtin".to_string(), json!(false));
        payload.insert("target_delay".to_string(), json!(target_delay));
        payload.insert(
            "target_duration".to_string(),
            json!(config.pacing_speed.unwrap_or(DEFAULT_TARGET_DURATION)),
        );
        payload.insert(
            "target_attributes".to_string(),
            Value::Object(target_attributes),
        );
        payload.insert("type".to_string(), json!(config.target_layout.as_str()));
        payload.insert("randomize".to_string(), json!(config.randomise_pos));
        payload.insert("unit_type".to_string(), json!(ctx.units.as_str()));
        payload.insert("color_type".to_string(), json!(ctx.color_space.as_str()));
        payload.insert(
            "screen_background_color".to_string(),
            ctx.background_color.clone(),
        );
        payload
    }
}
