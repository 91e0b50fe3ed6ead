//! Recording lifecycle control
//!
//! Maps the coarse experiment lifecycle status onto start/stop commands for
//! the tracker device:
//! - RecordingStatus enum for the lifecycle phases
//! - RecordingController to drive the device on each transition

pub mod controller;
pub mod state;

pub use controller::RecordingController;
pub use state::RecordingStatus;
