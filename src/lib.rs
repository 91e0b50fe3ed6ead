//! Gazekit - eye-tracker control core for experiment sessions
//!
//! Two cooperating pieces sit behind this crate:
//! - [`RecordingController`] maps the coarse experiment lifecycle status onto
//!   idempotent start/stop commands for the tracker device
//! - [`CalibrationDispatcher`] normalizes a unified calibration configuration
//!   into the parameter schema of whichever tracker backend is active and
//!   hands control to that backend's interactive setup procedure
//!
//! The windowing system, the vendor tracker SDKs, and the target-stimulus
//! renderer all live outside this crate and are consumed through the trait
//! seams in [`display`], [`tracker`], and [`calibration::target`].

pub mod alerts;
pub mod calibration;
pub mod display;
pub mod error;
pub mod recorder;
pub mod tracker;

pub use alerts::{Advisory, AlertSink, LogAlerts, NullAlerts};
pub use calibration::{
    AnimationConfig, CalibrationConfig, CalibrationDispatcher, CalibrationTarget, TargetLayout,
    TargetSpec,
};
pub use display::{ColorSpace, DisplayControl, Units};
pub use error::{ControlError, Result};
pub use recorder::{RecordingController, RecordingStatus};
pub use tracker::{BackendIdentity, CalibrationResult, EventHost, Tracker, TrackerDevice};
