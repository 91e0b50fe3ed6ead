//! EyeLink-class backend payload
//!
//! The simplest schema: no position randomization and no per-target
//! animation block.

use super::{PayloadBuilder, PayloadContext};
use crate::alerts::{Advisory, AlertSink, ANIMATION_IGNORED};
use crate::calibration::config::CalibrationConfig;
use serde_json::{json, Map, Value};

/// Seconds per target when the config leaves pacing unset
const DEFAULT_PACING_SPEED: f64 = 1.5;

pub struct EyeLinkPayload;

impl PayloadBuilder for EyeLinkPayload {
    fn build(
        &self,
        config: &CalibrationConfig,
        ctx: &PayloadContext<'_>,
        alerts: &dyn AlertSink,
    ) -> Map<String, Value> {
        if config.animation.enabled {
            // EyeLink has no target animation; tell the experimenter their
            // animation params are ignored
            alerts.notify(Advisory::new(ANIMATION_IGNORED).field("brand", "EyeLink"));
        }
        let mut payload = Map::new();
        payload.insert(
            "target_attributes".to_string(),
            Value::Object(ctx.target.attributes()),
        );
        payload.insert("type".to_string(), json!(config.target_layout.as_str()));
        payload.insert("auto_pace".to_string(), json!(config.auto_pace));
        payload.insert(
            "pacing_speed".to_string(),
            json!(config.pacing_speed.unwrap_or(DEFAULT_PACING_SPEED)),
        );
        payload.insert(
            "screen_background_color".to_string(),
            ctx.background_color.clone(),
        );
        payload
    }
}
