//! Per-backend payload construction
//!
//! Each supported tracker backend defines its own parameter schema for the
//! interactive setup procedure. A builder per backend translates the unified
//! configuration into that schema; unknown backends get an empty payload and
//! apply their own defaults. Adding a backend means adding a builder here,
//! not editing a shared dispatch function.

mod eyelink;
mod gazepoint;
mod mouse;
mod tobii;

pub use eyelink::EyeLinkPayload;
pub use gazepoint::GazePointPayload;
pub use mouse::MouseGazePayload;
pub use tobii::TobiiPayload;

use crate::alerts::AlertSink;
use crate::calibration::config::CalibrationConfig;
use crate::calibration::target::CalibrationTarget;
use crate::display::{ColorSpace, Units};
use crate::tracker::BackendIdentity;
use serde_json::{Map, Value};

/// Everything a builder needs beyond the config itself: the resolved target,
/// the effective units and color space, and the display background color
pub struct PayloadContext<'a> {
    pub target: &'a dyn CalibrationTarget,
    pub units: Units,
    pub color_space: ColorSpace,
    pub background_color: Value,
}

/// Translates the unified calibration configuration into one backend's
/// parameter schema
///
/// Builders never fail: a requested feature the backend cannot honor raises
/// an advisory through the sink and is omitted or substituted.
pub trait PayloadBuilder {
    fn build(
        &self,
        config: &CalibrationConfig,
        ctx: &PayloadContext<'_>,
        alerts: &dyn AlertSink,
    ) -> Map<String, Value>;
}

/// Select the builder for a backend identity; `None` for unknown backends
pub fn builder_for(identity: &BackendIdentity) -> Option<&'static dyn PayloadBuilder> {
    match identity {
        BackendIdentity::EyeLink => Some(&EyeLinkPayload),
        BackendIdentity::Tobii => Some(&TobiiPayload),
        BackendIdentity::GazePoint => Some(&GazePointPayload),
        BackendIdentity::MouseGaze => Some(&MouseGazePayload),
        BackendIdentity::Unknown(_) => None,
    }
}
