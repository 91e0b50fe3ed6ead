//! Backend-agnostic calibration configuration

use crate::display::{ColorSpace, Units};
use serde::{Deserialize, Serialize};

/// Layout of calibration target positions on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLayout {
    #[serde(rename = "THREE_POINTS")]
    ThreePoints,
    #[serde(rename = "FIVE_POINTS")]
    FivePoints,
    #[serde(rename = "NINE_POINTS")]
    NinePoints,
    #[serde(rename = "THIRTEEN_POINTS")]
    ThirteenPoints,
}

impl TargetLayout {
    /// Wire string sent to backends as `type`
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLayout::ThreePoints => "THREE_POINTS",
            TargetLayout::FivePoints => "FIVE_POINTS",
            TargetLayout::NinePoints => "NINE_POINTS",
            TargetLayout::ThirteenPoints => "THIRTEEN_POINTS",
        }
    }
}

impl Default for TargetLayout {
    fn default() -> Self {
        TargetLayout::NinePoints
    }
}

/// Animation of the calibration target between positions
///
/// Not every backend honors every field; backends without support raise an
/// advisory and ignore the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Contract the target without expanding it first
    pub contract_only: bool,
    /// Movement velocity between target positions
    pub velocity: f64,
    /// How far the target expands before contracting
    pub expand_scale: f64,
    /// Duration of one expansion, in seconds
    pub expand_dur: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            contract_only: false,
            velocity: 0.5,
            expand_scale: 3.0,
            expand_dur: 0.75,
        }
    }
}

/// Unified calibration parameters, normalized per backend at dispatch time
///
/// Immutable once handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalibrationConfig {
    /// Spatial units; defaults to the display's units when unset
    pub units: Option<Units>,
    /// Color space; defaults to the display's color space when unset
    pub color_space: Option<ColorSpace>,
    /// Seconds between automatic target advances; each backend supplies its
    /// own default when unset
    pub pacing_speed: Option<f64>,
    /// Advance targets automatically rather than on experimenter input
    pub auto_pace: bool,
    pub target_layout: TargetLayout,
    /// Present targets in a randomized order
    pub randomise_pos: bool,
    pub animation: AnimationConfig,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            units: None,
            color_space: None,
            pacing_speed: None,
            auto_pace: true,
            target_layout: TargetLayout::NinePoints,
            randomise_pos: true,
            animation: AnimationConfig::default(),
        }
    }
}
