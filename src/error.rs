//! Error types for tracker control operations

use thiserror::Error;

/// Errors raised while driving the tracker hardware or its setup procedure
///
/// Hardware and setup failures are fatal to the calling operation and
/// propagate unmodified; there is no retry or local recovery.
#[derive(Error, Debug)]
pub enum ControlError {
    #[error("Tracker hardware command failed: {0}")]
    Hardware(String),

    #[error("Device not found on host: {0}")]
    DeviceNotFound(String),

    #[error("Calibration setup failed: {0}")]
    Setup(String),
}

pub type Result<T> = std::result::Result<T, ControlError>;
