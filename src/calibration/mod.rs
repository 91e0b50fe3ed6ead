//! Calibration setup dispatch
//!
//! Normalizes a backend-agnostic calibration configuration into the parameter
//! schema of the active tracker backend and hands control to the backend's
//! interactive setup procedure:
//! - CalibrationConfig for the unified parameter set
//! - CalibrationTarget trait over the fixation stimulus
//! - PayloadBuilder implementations per supported backend
//! - CalibrationDispatcher to orchestrate a run

pub mod backends;
pub mod config;
pub mod dispatcher;
pub mod target;

pub use config::{AnimationConfig, CalibrationConfig, TargetLayout};
pub use dispatcher::CalibrationDispatcher;
pub use target::{CalibrationTarget, TargetSpec};
