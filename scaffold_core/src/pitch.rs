//! # Pitch Standards
//!
//! The two fixed tube-pitch presets, each pairing a horizontal post spacing
//! with a vertical layer height per regional scaffolding convention:
//!
//! | Standard | Post spacing | Layer height |
//! |----------|--------------|--------------|
//! | A        | 450 mm       | 1,800 mm     |
//! | B        | 475 mm       | 1,900 mm     |
//!
//! The chosen standard drives both the horizontal bay count along the
//! perimeter and the vertical layer grid the base jacks align to.

use serde::{Deserialize, Serialize};

use crate::units::Millimeters;

/// Tube pitch standard selected in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchStandard {
    /// 450 mm post spacing, 1,800 mm layer height
    A,
    /// 475 mm post spacing, 1,900 mm layer height
    B,
}

impl PitchStandard {
    /// Horizontal post spacing in meters
    pub fn post_spacing_m(self) -> f64 {
        match self {
            PitchStandard::A => 0.45,
            PitchStandard::B => 0.475,
        }
    }

    /// Vertical layer height in meters
    pub fn layer_height_m(self) -> f64 {
        match self {
            PitchStandard::A => 1.8,
            PitchStandard::B => 1.9,
        }
    }

    /// Vertical layer height in millimeters
    pub fn layer_height_mm(self) -> Millimeters {
        Millimeters(self.layer_height_m() * 1000.0)
    }

    /// Human-readable label (spacing/layer in mm)
    pub fn display_name(self) -> &'static str {
        match self {
            PitchStandard::A => "A (450/1,800)",
            PitchStandard::B => "B (475/1,900)",
        }
    }
}

impl Default for PitchStandard {
    fn default() -> Self {
        PitchStandard::A
    }
}
