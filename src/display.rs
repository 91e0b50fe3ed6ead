//! Display control seam
//!
//! The calibration dispatcher suspends and restores the host display around
//! the backend's interactive setup, and reads display defaults for units,
//! color space, and background color. The windowing system itself lives
//! outside this crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Spatial units used for stimulus layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Height,
    Norm,
    Pix,
    Deg,
    Cm,
}

impl Units {
    /// Wire string sent to backends as `unit_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Height => "height",
            Units::Norm => "norm",
            Units::Pix => "pix",
            Units::Deg => "deg",
            Units::Cm => "cm",
        }
    }
}

/// Color space for stimulus and background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Rgb,
    Rgb255,
    Hsv,
    Named,
}

impl ColorSpace {
    /// Wire string sent to backends as `color_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Rgb255 => "rgb255",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Named => "named",
        }
    }
}

/// Window-level control over the host display
///
/// Only one calibration run may be in flight per display; concurrent runs
/// would race on the minimize/maximize calls.
pub trait DisplayControl: Send {
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn minimize(&mut self);
    fn maximize(&mut self);
    fn activate(&mut self);

    /// Units the display is configured to draw in
    fn units(&self) -> Units;

    /// Color space the display is configured with
    fn color_space(&self) -> ColorSpace;

    /// The display's background color expressed in the given color space
    fn resolve_color(&self, space: ColorSpace) -> Value;
}
