//! Advisory notifications for the experimenter
//!
//! Non-fatal warnings raised when a requested calibration option has no
//! effect on the active backend. Advisories are fire-and-forget: they surface
//! to the experimenter (not the measured participant) and never interrupt the
//! calibration flow.

use std::collections::HashMap;

/// Animation parameters were requested on a backend that ignores them
pub const ANIMATION_IGNORED: u16 = 4520;

/// Automatic pacing was requested on a backend that paces itself
pub const AUTO_PACE_IGNORED: u16 = 4530;

/// A single advisory: a catalogue code plus free-form string fields
/// (typically the backend brand name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub code: u16,
    pub fields: HashMap<String, String>,
}

impl Advisory {
    pub fn new(code: u16) -> Self {
        Self {
            code,
            fields: HashMap::new(),
        }
    }

    /// Attach a string field to the advisory
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), value.to_string());
        self
    }
}

/// Where advisories go
pub trait AlertSink: Send + Sync {
    fn notify(&self, advisory: Advisory);
}

/// Discards every advisory
pub struct NullAlerts;

impl AlertSink for NullAlerts {
    fn notify(&self, _advisory: Advisory) {}
}

/// Surfaces advisories through the tracing subscriber as warnings
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn notify(&self, advisory: Advisory) {
        tracing::warn!(
            code = advisory.code,
            fields = ?advisory.fields,
            "calibration advisory"
        );
    }
}
