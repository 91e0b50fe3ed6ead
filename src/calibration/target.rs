//! Calibration target stimulus seam

use crate::display::{ColorSpace, Units};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The fixation stimulus shown at each calibration point
///
/// Rendering lives outside this crate; the dispatcher only needs the target's
/// unit/color configuration and its attribute mapping for backend payloads.
pub trait CalibrationTarget: Send {
    fn units(&self) -> Units;
    fn color_space(&self) -> ColorSpace;
    fn set_units(&mut self, units: Units);
    fn set_color_space(&mut self, color_space: ColorSpace);

    /// Clone the target so units and color space can be overridden without
    /// touching the original
    fn clone_target(&self) -> Box<dyn CalibrationTarget>;

    /// Visual attributes (size, color, shape) as a backend payload fragment
    fn attributes(&self) -> Map<String, Value>;
}

/// Target resolved against the configured units and color space
///
/// Borrows the original when it already matches; otherwise holds an adjusted
/// clone, leaving the original untouched.
pub enum ResolvedTarget<'a> {
    Matching(&'a dyn CalibrationTarget),
    Adjusted(Box<dyn CalibrationTarget>),
}

impl<'a> ResolvedTarget<'a> {
    pub fn resolve(
        target: &'a dyn CalibrationTarget,
        units: Units,
        color_space: ColorSpace,
    ) -> Self {
        if target.color_space() == color_space && target.units() == units {
            ResolvedTarget::Matching(target)
        } else {
            let mut adjusted = target.clone_target();
            adjusted.set_color_space(color_space);
            adjusted.set_units(units);
            ResolvedTarget::Adjusted(adjusted)
        }
    }

    pub fn get(&self) -> &dyn CalibrationTarget {
        match self {
            ResolvedTarget::Matching(target) => *target,
            ResolvedTarget::Adjusted(target) => target.as_ref(),
        }
    }
}

/// Plain-value target for callers whose rendering layer supplies the visual
/// attributes up front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpec {
    pub units: Units,
    pub color_space: ColorSpace,
    /// Outer dot radius, in the target's units
    pub radius: f64,
    /// Inner dot radius, in the target's units
    pub inner_radius: f64,
    pub fill_color: Value,
    pub border_color: Value,
    pub inner_color: Value,
}

impl CalibrationTarget for TargetSpec {
    fn units(&self) -> Units {
        self.units
    }

    fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space = color_space;
    }

    fn clone_target(&self) -> Box<dyn CalibrationTarget> {
        Box::new(self.clone())
    }

    fn attributes(&self) -> Map<String, Value> {
        let mut attrs = Map::new();
        attrs.insert("outer_diameter".to_string(), json!(self.radius * 2.0));
        attrs.insert("inner_diameter".to_string(), json!(self.inner_radius * 2.0));
        attrs.insert("outer_fill_color".to_string(), self.fill_color.clone());
        attrs.insert("outer_line_color".to_string(), self.border_color.clone());
        attrs.insert("inner_color".to_string(), self.inner_color.clone());
        attrs
    }
}
