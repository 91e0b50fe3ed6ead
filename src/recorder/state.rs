//! Experiment lifecycle status

use serde::{Deserialize, Serialize};

/// Coarse lifecycle status of the experiment routine driving the tracker
///
/// Transition-only semantics; no history is kept beyond previous vs. new
/// value inside the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingStatus {
    /// Routine has not begun yet
    NotStarted,
    /// Actively recording samples
    Started,
    /// Temporarily suspended; buffered events are kept
    Paused,
    /// Stopped; a later restart begins a fresh session
    Stopped,
    /// Routine finished for good
    Finished,
}

impl RecordingStatus {
    /// Statuses that imply the device must not be recording
    pub fn is_stopped(&self) -> bool {
        matches!(
            self,
            RecordingStatus::NotStarted
                | RecordingStatus::Paused
                | RecordingStatus::Stopped
                | RecordingStatus::Finished
        )
    }

    /// Statuses counting as a full stop; resuming from one of these discards
    /// stale buffered events before recording restarts
    pub fn is_full_stop(&self) -> bool {
        matches!(
            self,
            RecordingStatus::NotStarted | RecordingStatus::Stopped | RecordingStatus::Finished
        )
    }
}

impl Default for RecordingStatus {
    fn default() -> Self {
        RecordingStatus::NotStarted
    }
}
