//! Recording state controller
//!
//! Owns the lifecycle status and issues idempotent start/stop commands to the
//! tracker device on each transition.

use super::state::RecordingStatus;
use crate::error::{ControlError, Result};
use crate::tracker::{EventHost, TrackerDevice};
use parking_lot::Mutex;
use std::sync::Arc;

/// Name the host registers the tracker device under
const TRACKER_DEVICE_NAME: &str = "tracker";

/// Drives the tracker device from experiment lifecycle transitions
///
/// Holds non-owning handles to the device and the event host; their
/// lifecycles belong to the surrounding session.
pub struct RecordingController {
    device: Arc<Mutex<dyn TrackerDevice>>,
    host: Arc<Mutex<dyn EventHost>>,
    status: RecordingStatus,
}

impl RecordingController {
    /// Create a controller bound to the given host
    ///
    /// When no explicit device handle is supplied, the tracker device is
    /// resolved from the host's registry.
    pub fn new(
        host: Arc<Mutex<dyn EventHost>>,
        device: Option<Arc<Mutex<dyn TrackerDevice>>>,
    ) -> Result<Self> {
        let device = match device {
            Some(device) => device,
            None => host
                .lock()
                .tracker_device(TRACKER_DEVICE_NAME)
                .ok_or_else(|| ControlError::DeviceNotFound(TRACKER_DEVICE_NAME.to_string()))?,
        };
        Ok(Self {
            device,
            host,
            status: RecordingStatus::NotStarted,
        })
    }

    /// Current lifecycle status
    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    /// Apply a lifecycle transition, driving the device accordingly
    ///
    /// Re-asserting the current status is a no-op; upstream code may poll the
    /// same phase every frame. Hardware failures propagate to the caller
    /// unmodified; there is no retry.
    pub fn set_status(&mut self, new: RecordingStatus) -> Result<()> {
        let old = self.status;
        self.status = new;
        // Skip if there's no change
        if new == old {
            return Ok(());
        }
        tracing::debug!(?old, ?new, "recording status transition");
        if new == RecordingStatus::Started {
            if old.is_full_stop() {
                // Resuming from a full stop: drop stale buffered events
                // before the fresh session starts
                self.host.lock().clear_events()?;
            }
            tracing::info!("starting tracker recording");
            self.device.lock().set_recording_state(true)?;
        }
        // Evaluated independently of the start branch, in this order
        if new.is_stopped() {
            tracing::info!("stopping tracker recording");
            self.device.lock().set_recording_state(false)?;
        }
        Ok(())
    }
}
