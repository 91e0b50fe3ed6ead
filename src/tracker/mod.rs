//! Tracker device seams
//!
//! Traits over the vendor SDK surface this crate drives: the raw device that
//! starts and stops sample recording, the event host that buffers gaze
//! events, and the tracker handle that owns the interactive setup procedure.

use crate::error::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Identity of the active tracker backend
///
/// Queried fresh on every calibration run; the bound tracker can change
/// between runs, so identities are never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendIdentity {
    EyeLink,
    Tobii,
    GazePoint,
    /// Mouse-simulated tracker used for development without hardware
    MouseGaze,
    Unknown(String),
}

impl BackendIdentity {
    /// Map a host device-class path onto a backend identity
    pub fn from_device_class(class: &str) -> Self {
        match class {
            "eyetracker.hw.sr_research.eyelink.EyeTracker" => BackendIdentity::EyeLink,
            "eyetracker.hw.tobii.EyeTracker" => BackendIdentity::Tobii,
            "eyetracker.hw.gazepoint.gp3.EyeTracker" => BackendIdentity::GazePoint,
            "eyetracker.hw.mouse.EyeTracker" => BackendIdentity::MouseGaze,
            other => BackendIdentity::Unknown(other.to_string()),
        }
    }

    /// Vendor brand name used in experimenter-facing advisories
    pub fn brand(&self) -> &str {
        match self {
            BackendIdentity::EyeLink => "EyeLink",
            BackendIdentity::Tobii => "Tobii",
            BackendIdentity::GazePoint => "GazePoint",
            BackendIdentity::MouseGaze => "MouseGaze",
            BackendIdentity::Unknown(name) => name,
        }
    }
}

/// Opaque outcome returned by a backend's setup procedure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationResult(pub Value);

/// Raw recording control on the tracker hardware
pub trait TrackerDevice: Send {
    /// Start or stop sample recording; fails on hardware error
    fn set_recording_state(&mut self, recording: bool) -> Result<()>;
}

/// Host process buffering gaze events for the experiment session
pub trait EventHost: Send {
    /// Discard all buffered events
    fn clear_events(&mut self) -> Result<()>;

    /// Look up a registered device by name
    fn tracker_device(&self, name: &str) -> Option<Arc<Mutex<dyn TrackerDevice>>>;
}

/// Tracker handle owning the vendor's interactive setup procedure
pub trait Tracker: Send {
    fn backend_identity(&self) -> BackendIdentity;

    /// Run the backend's interactive setup with a backend-shaped payload
    ///
    /// Blocks until the experimenter finishes or the backend fails hard.
    fn run_setup_procedure(&mut self, payload: Map<String, Value>) -> Result<CalibrationResult>;
}
