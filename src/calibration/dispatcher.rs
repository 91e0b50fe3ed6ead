//! Calibration dispatcher
//!
//! Queries the active backend, builds its payload, suspends the host display
//! around the backend's interactive setup procedure, and records the result.

use super::backends::{self, PayloadContext};
use super::config::CalibrationConfig;
use super::target::{CalibrationTarget, ResolvedTarget};
use crate::alerts::AlertSink;
use crate::display::{ColorSpace, DisplayControl, Units};
use crate::error::Result;
use crate::tracker::{CalibrationResult, Tracker};
use parking_lot::Mutex;
use serde_json::Map;
use std::sync::Arc;

/// Orchestrates one interactive calibration run against the active backend
///
/// Holds non-owning handles to the display, tracker, and target; one run may
/// be in flight per display at a time.
pub struct CalibrationDispatcher {
    display: Arc<Mutex<dyn DisplayControl>>,
    tracker: Arc<Mutex<dyn Tracker>>,
    target: Arc<Mutex<dyn CalibrationTarget>>,
    alerts: Arc<dyn AlertSink>,
    config: CalibrationConfig,
    units: Units,
    color_space: ColorSpace,
    last: Option<CalibrationResult>,
}

impl CalibrationDispatcher {
    /// Create a dispatcher
    ///
    /// Units and color space left unset in the config are resolved from the
    /// display once, here.
    pub fn new(
        display: Arc<Mutex<dyn DisplayControl>>,
        tracker: Arc<Mutex<dyn Tracker>>,
        target: Arc<Mutex<dyn CalibrationTarget>>,
        alerts: Arc<dyn AlertSink>,
        config: CalibrationConfig,
    ) -> Self {
        let (units, color_space) = {
            let display = display.lock();
            (
                config.units.unwrap_or_else(|| display.units()),
                config.color_space.unwrap_or_else(|| display.color_space()),
            )
        };
        Self {
            display,
            tracker,
            target,
            alerts,
            config,
            units,
            color_space,
            last: None,
        }
    }

    /// Outcome of the most recent setup run, if any
    pub fn last(&self) -> Option<&CalibrationResult> {
        self.last.as_ref()
    }

    /// Effective spatial units after display defaulting
    pub fn units(&self) -> Units {
        self.units
    }

    /// Effective color space after display defaulting
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Run the active backend's interactive setup procedure
    ///
    /// Blocks for the whole procedure, potentially many seconds of human
    /// interaction. On a hard backend failure the error propagates before the
    /// display is restored, leaving it minimized so the experimenter can
    /// inspect whatever the backend left on screen.
    pub fn run(&mut self) -> Result<()> {
        // Queried fresh every run; the bound tracker can change between runs
        let identity = self.tracker.lock().backend_identity();
        tracing::info!(backend = identity.brand(), "running calibration setup");

        let payload = {
            let target = self.target.lock();
            let resolved = ResolvedTarget::resolve(&*target, self.units, self.color_space);

            // Hand the screen over before the backend draws its own UI
            self.suspend_display();

            let ctx = PayloadContext {
                target: resolved.get(),
                units: self.units,
                color_space: self.color_space,
                background_color: self.display.lock().resolve_color(self.color_space),
            };
            match backends::builder_for(&identity) {
                Some(builder) => builder.build(&self.config, &ctx, self.alerts.as_ref()),
                None => {
                    // Unknown backends apply their own defaults
                    tracing::warn!(backend = identity.brand(), "unknown backend, empty payload");
                    Map::new()
                }
            }
        };

        let result = self.tracker.lock().run_setup_procedure(payload)?;
        self.last = Some(result);

        self.restore_display();
        Ok(())
    }

    fn suspend_display(&self) {
        let mut display = self.display.lock();
        display.set_fullscreen(false);
        display.minimize();
    }

    fn restore_display(&self) {
        let mut display = self.display.lock();
        display.set_fullscreen(true);
        display.maximize();
        display.activate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::NullAlerts;
    use crate::error::ControlError;
    use crate::tracker::BackendIdentity;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Fullscreen(bool),
        Minimize,
        Maximize,
        Activate,
        Setup,
    }

    struct FakeDisplay {
        log: Arc<Mutex<Vec<Event>>>,
    }

    impl DisplayControl for FakeDisplay {
        fn set_fullscreen(&mut self, fullscreen: bool) {
            self.log.lock().push(Event::Fullscreen(fullscreen));
        }

        fn minimize(&mut self) {
            self.log.lock().push(Event::Minimize);
        }

        fn maximize(&mut self) {
            self.log.lock().push(Event::Maximize);
        }

        fn activate(&mut self) {
            self.log.lock().push(Event::Activate);
        }

        fn units(&self) -> Units {
            Units::Height
        }

        fn color_space(&self) -> ColorSpace {
            ColorSpace::Rgb
        }

        fn resolve_color(&self, _space: ColorSpace) -> Value {
            json!([0.0, 0.0, 0.0])
        }
    }

    struct FakeTracker {
        log: Arc<Mutex<Vec<Event>>>,
        identity: BackendIdentity,
        captured: Arc<Mutex<Option<Map<String, Value>>>>,
        fail: bool,
        runs: usize,
    }

    impl Tracker for FakeTracker {
        fn backend_identity(&self) -> BackendIdentity {
            self.identity.clone()
        }

        fn run_setup_procedure(
            &mut self,
            payload: Map<String, Value>,
        ) -> Result<CalibrationResult> {
            self.log.lock().push(Event::Setup);
            *self.captured.lock() = Some(payload);
            if self.fail {
                return Err(ControlError::Setup("camera image lost".to_string()));
            }
            self.runs += 1;
            Ok(CalibrationResult(json!({ "run": self.runs })))
        }
    }

    struct FakeTarget {
        units: Units,
        color_space: ColorSpace,
        clones: Arc<AtomicUsize>,
        mutations: Arc<AtomicUsize>,
    }

    impl CalibrationTarget for FakeTarget {
        fn units(&self) -> Units {
            self.units
        }

        fn color_space(&self) -> ColorSpace {
            self.color_space
        }

        fn set_units(&mut self, units: Units) {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.units = units;
        }

        fn set_color_space(&mut self, color_space: ColorSpace) {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.color_space = color_space;
        }

        fn clone_target(&self) -> Box<dyn CalibrationTarget> {
            self.clones.fetch_add(1, Ordering::SeqCst);
            // The clone tracks its own mutations; only the original's counter
            // matters to the tests
            Box::new(FakeTarget {
                units: self.units,
                color_space: self.color_space,
                clones: Arc::new(AtomicUsize::new(0)),
                mutations: Arc::new(AtomicUsize::new(0)),
            })
        }

        fn attributes(&self) -> Map<String, Value> {
            let mut attrs = Map::new();
            attrs.insert("outer_diameter".to_string(), json!(0.05));
            attrs.insert("unit_type".to_string(), json!(self.units.as_str()));
            attrs
        }
    }

    struct Rig {
        dispatcher: CalibrationDispatcher,
        log: Arc<Mutex<Vec<Event>>>,
        captured: Arc<Mutex<Option<Map<String, Value>>>>,
        clones: Arc<AtomicUsize>,
        mutations: Arc<AtomicUsize>,
    }

    fn rig(identity: BackendIdentity, target_units: Units, fail: bool) -> Rig {
        let log = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::new(Mutex::new(None));
        let clones = Arc::new(AtomicUsize::new(0));
        let mutations = Arc::new(AtomicUsize::new(0));

        let display: Arc<Mutex<dyn DisplayControl>> =
            Arc::new(Mutex::new(FakeDisplay { log: log.clone() }));
        let tracker: Arc<Mutex<dyn Tracker>> = Arc::new(Mutex::new(FakeTracker {
            log: log.clone(),
            identity,
            captured: captured.clone(),
            fail,
            runs: 0,
        }));
        let target: Arc<Mutex<dyn CalibrationTarget>> = Arc::new(Mutex::new(FakeTarget {
            units: target_units,
            color_space: ColorSpace::Rgb,
            clones: clones.clone(),
            mutations: mutations.clone(),
        }));

        let dispatcher = CalibrationDispatcher::new(
            display,
            tracker,
            target,
            Arc::new(NullAlerts),
            CalibrationConfig::default(),
        );
        Rig {
            dispatcher,
            log,
            captured,
            clones,
            mutations,
        }
    }

    #[test]
    fn test_units_and_color_space_default_from_display() {
        let rig = rig(BackendIdentity::Tobii, Units::Height, false);
        assert_eq!(rig.dispatcher.units(), Units::Height);
        assert_eq!(rig.dispatcher.color_space(), ColorSpace::Rgb);
    }

    #[test]
    fn test_matching_target_is_used_without_clone_or_mutation() {
        let mut rig = rig(BackendIdentity::Tobii, Units::Height, false);
        rig.dispatcher.run().unwrap();
        assert_eq!(rig.clones.load(Ordering::SeqCst), 0);
        assert_eq!(rig.mutations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_mismatched_target_is_cloned_and_original_untouched() {
        let mut rig = rig(BackendIdentity::Tobii, Units::Pix, false);
        rig.dispatcher.run().unwrap();
        assert_eq!(rig.clones.load(Ordering::SeqCst), 1);
        assert_eq!(rig.mutations.load(Ordering::SeqCst), 0);

        // The payload reflects the adjusted clone, not the original
        let captured = rig.captured.lock();
        let attrs = captured.as_ref().unwrap()["target_attributes"]
            .as_object()
            .unwrap();
        assert_eq!(attrs.get("unit_type"), Some(&json!("height")));
    }

    #[test]
    fn test_display_suspended_and_restored_around_setup() {
        let mut rig = rig(BackendIdentity::MouseGaze, Units::Height, false);
        rig.dispatcher.run().unwrap();
        assert_eq!(
            *rig.log.lock(),
            vec![
                Event::Fullscreen(false),
                Event::Minimize,
                Event::Setup,
                Event::Fullscreen(true),
                Event::Maximize,
                Event::Activate,
            ]
        );
    }

    #[test]
    fn test_display_left_suspended_on_hard_failure() {
        let mut rig = rig(BackendIdentity::Tobii, Units::Height, true);
        let result = rig.dispatcher.run();
        assert!(matches!(result, Err(ControlError::Setup(_))));
        // No restoration after the failing setup call
        assert_eq!(
            *rig.log.lock(),
            vec![Event::Fullscreen(false), Event::Minimize, Event::Setup]
        );
        assert!(rig.dispatcher.last().is_none());
    }

    #[test]
    fn test_unknown_backend_gets_empty_payload() {
        let mut rig = rig(
            BackendIdentity::Unknown("eyetracker.hw.acme.EyeTracker".to_string()),
            Units::Height,
            false,
        );
        rig.dispatcher.run().unwrap();
        assert!(rig.captured.lock().as_ref().unwrap().is_empty());
        assert!(rig.dispatcher.last().is_some());
    }

    #[test]
    fn test_last_is_overwritten_on_each_run() {
        let mut rig = rig(BackendIdentity::GazePoint, Units::Height, false);
        assert!(rig.dispatcher.last().is_none());

        rig.dispatcher.run().unwrap();
        assert_eq!(rig.dispatcher.last().unwrap().0, json!({ "run": 1 }));

        rig.dispatcher.run().unwrap();
        assert_eq!(rig.dispatcher.last().unwrap().0, json!({ "run": 2 }));
    }
}
