//! Tobii-class backend payload
//!
//! The fullest schema: randomized positions and a complete animation block
//! with velocity and expansion fields.

use super::{PayloadBuilder, PayloadContext};
use crate::alerts::AlertSink;
use crate::calibration::config::CalibrationConfig;
use serde_json::{json, Map, Value};

/// Seconds per target when the config leaves pacing unset
const DEFAULT_PACING_SPEED: f64 = 1.0;

pub struct TobiiPayload;

impl PayloadBuilder for TobiiPayload {
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
                "movement_velocity": config.animation.velocity,
                "expansion_ratio": config.animation.expand_scale,
                "expansion_speed": config.animation.expand_dur,
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

#[cfg(test)]
mod tests {
    use super::super::testing::{context, RecordingAlerts, StubTarget};
    use super::*;

    #[test]
    fn test_payload_shape_and_pacing_default() {
        let target = StubTarget::matching();
        let payload = TobiiPayload.build(
            &CalibrationConfig::default(),
            &context(&target),
            &RecordingAlerts::default(),
        );

        assert_eq!(payload.get("pacing_speed"), Some(&json!(1.0)));
        assert_eq!(payload.get("randomize"), Some(&json!(true)));
        assert_eq!(payload.get("auto_pace"), Some(&json!(true)));
        assert_eq!(payload.get("unit_type"), Some(&json!("height")));
        assert_eq!(payload.get("color_type"), Some(&json!("rgb")));
        assert_eq!(payload.get("type"), Some(&json!("NINE_POINTS")));
    }

    #[test]
    fn test_animation_block_carries_all_fields() {
        let target = StubTarget::matching();
        let mut config = CalibrationConfig::default();
        config.animation.enabled = true;
        config.animation.contract_only = true;
        let payload = TobiiPayload.build(&config, &context(&target), &RecordingAlerts::default());

        let animate = payload["target_attributes"]["animate"].as_object().unwrap();
        assert_eq!(animate.get("enable"), Some(&json!(true)));
        assert_eq!(animate.get("movement_velocity"), Some(&json!(0.5)));
        assert_eq!(animate.get("expansion_ratio"), Some(&json!(3.0)));
        assert_eq!(animate.get("expansion_speed"), Some(&json!(0.75)));
        assert_eq!(animate.get("contract_only"), Some(&json!(true)));
    }

    #[test]
    fn test_configured_pacing_overrides_default() {
        let target = StubTarget::matching();
        let config = CalibrationConfig {
            pacing_speed: Some(0.8),
            ..Default::default()
        };
        let payload = TobiiPayload.build(&config, &context(&target), &RecordingAlerts::default());
        assert_eq!(payload.get("pacing_speed"), Some(&json!(0.8)));
    }
}
