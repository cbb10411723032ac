//! # Scaffold Configuration
//!
//! Input types for the estimation engine. A [`ScaffoldConfig`] is the sole
//! input to [`estimate`](crate::estimate::estimate): the scaffold row type,
//! the pitch standard, the handrail choices for both faces, the
//! fall-prevention bar count, and the raw per-side building dimensions.
//!
//! Dimension fields are kept as the free-form text the user typed. The
//! engine never rejects them: anything that fails to parse as a decimal is
//! treated as exactly 0 (see [`parse_dimension`]).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "scaffold_type": "DoubleRow",
//!   "pitch": "A",
//!   "outer_rail": { "kind": "Standard", "count": "Two" },
//!   "inner_rail": { "kind": "Standard", "count": "Two" },
//!   "fall_prevent": "One",
//!   "sides": {
//!     "south": { "width": "1000", "ground_level": "0", "eave_height": "2500" },
//!     "east":  { "width": "", "ground_level": "0", "eave_height": "" },
//!     "north": { "width": "", "ground_level": "0", "eave_height": "" },
//!     "west":  { "width": "", "ground_level": "0", "eave_height": "" }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::pitch::PitchStandard;
use crate::units::Millimeters;

/// Parse a raw dimension field as a number of millimeters.
///
/// Total function: surrounding whitespace is ignored, and any text that is
/// not a valid decimal yields `0.0`. Malformed input is a defined fallback,
/// never an error.
///
/// # Example
///
/// ```rust
/// use scaffold_core::config::parse_dimension;
///
/// assert_eq!(parse_dimension("2500"), 2500.0);
/// assert_eq!(parse_dimension(" 412.5 "), 412.5);
/// assert_eq!(parse_dimension("abc"), 0.0);
/// assert_eq!(parse_dimension(""), 0.0);
/// ```
pub fn parse_dimension(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Cardinal building side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    South,
    East,
    North,
    West,
}

impl Side {
    /// All four sides, in the order the original take-off sheet lists them.
    pub const ALL: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];

    /// Human-readable label
    pub fn display_name(self) -> &'static str {
        match self {
            Side::South => "South",
            Side::East => "East",
            Side::North => "North",
            Side::West => "West",
        }
    }
}

/// Raw measurements for one building side, as entered.
///
/// All three fields are free-form text that may be empty or malformed;
/// the accessor methods apply [`parse_dimension`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideDims {
    /// Facade width (mm)
    pub width: String,

    /// Ground level at the base of this side (mm)
    pub ground_level: String,

    /// Eave height above datum (mm)
    pub eave_height: String,
}

impl SideDims {
    /// Facade width in millimeters (unparsable text → 0)
    pub fn width_mm(&self) -> Millimeters {
        Millimeters(parse_dimension(&self.width))
    }

    /// Ground level in millimeters (unparsable text → 0)
    pub fn ground_level_mm(&self) -> Millimeters {
        Millimeters(parse_dimension(&self.ground_level))
    }

    /// Eave height in millimeters (unparsable text → 0)
    pub fn eave_height_mm(&self) -> Millimeters {
        Millimeters(parse_dimension(&self.eave_height))
    }

    /// Standing height of this side: `max(0, eave − ground level)`.
    ///
    /// An eave at or below ground level clamps to zero; a negative
    /// difference is never propagated into the quantity math.
    pub fn height_mm(&self) -> Millimeters {
        Millimeters((self.eave_height_mm().value() - self.ground_level_mm().value()).max(0.0))
    }
}

impl Default for SideDims {
    fn default() -> Self {
        SideDims {
            width: String::new(),
            ground_level: "0".to_string(),
            eave_height: String::new(),
        }
    }
}

/// The four per-side dimension records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides {
    pub south: SideDims,
    pub east: SideDims,
    pub north: SideDims,
    pub west: SideDims,
}

impl Sides {
    /// Dimensions for one side
    pub fn get(&self, side: Side) -> &SideDims {
        match side {
            Side::South => &self.south,
            Side::East => &self.east,
            Side::North => &self.north,
            Side::West => &self.west,
        }
    }

    /// Mutable dimensions for one side
    pub fn get_mut(&mut self, side: Side) -> &mut SideDims {
        match side {
            Side::South => &mut self.south,
            Side::East => &mut self.east,
            Side::North => &mut self.north,
            Side::West => &mut self.west,
        }
    }
}

/// Scaffold row type: one or two parallel rows of posts.
///
/// Only a double-row scaffold has an inner face, so the row type decides
/// both the post multiplier and whether inner rails exist at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaffoldType {
    /// One row of posts against the facade
    SingleRow,
    /// Two parallel rows of posts (full scaffold)
    DoubleRow,
}

impl ScaffoldType {
    /// Parallel post rows erected for this scaffold type
    pub fn row_count(self) -> u32 {
        match self {
            ScaffoldType::SingleRow => 1,
            ScaffoldType::DoubleRow => 2,
        }
    }

    /// Human-readable label
    pub fn display_name(self) -> &'static str {
        match self {
            ScaffoldType::SingleRow => "Single-row",
            ScaffoldType::DoubleRow => "Double-row",
        }
    }
}

impl Default for ScaffoldType {
    fn default() -> Self {
        ScaffoldType::DoubleRow
    }
}

/// Handrail style for one scaffold face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailKind {
    /// Discrete counted handrail segments (T-3.6)
    Standard,
    /// Single continuous pre-fitted leading rail
    Leading,
}

impl RailKind {
    /// Human-readable label
    pub fn display_name(self) -> &'static str {
        match self {
            RailKind::Standard => "Handrail (T-3.6)",
            RailKind::Leading => "Leading handrail",
        }
    }
}

impl Default for RailKind {
    fn default() -> Self {
        RailKind::Standard
    }
}

/// Handrails per bay per layer when the standard style is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailCount {
    One,
    Two,
}

impl RailCount {
    /// Numeric count
    pub fn value(self) -> u32 {
        match self {
            RailCount::One => 1,
            RailCount::Two => 2,
        }
    }
}

impl Default for RailCount {
    fn default() -> Self {
        RailCount::Two
    }
}

/// Handrail configuration for one face (outer or inner).
///
/// The count is retained even while the leading style is selected, so
/// switching back to the standard style restores the previous choice —
/// the same shape the driving form keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailSpec {
    pub kind: RailKind,
    pub count: RailCount,
}

impl RailSpec {
    /// Rail segments counted per bay per layer.
    ///
    /// A leading rail is one continuous pre-fitted component, so it always
    /// contributes a coefficient of 1 regardless of the stored count.
    pub fn coefficient(self) -> u32 {
        match self.kind {
            RailKind::Leading => 1,
            RailKind::Standard => self.count.value(),
        }
    }
}

/// Intermediate fall-prevention bars per bay per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallPreventBars {
    One,
    Two,
    Three,
}

impl FallPreventBars {
    /// Numeric count
    pub fn value(self) -> u32 {
        match self {
            FallPreventBars::One => 1,
            FallPreventBars::Two => 2,
            FallPreventBars::Three => 3,
        }
    }
}

impl Default for FallPreventBars {
    fn default() -> Self {
        FallPreventBars::One
    }
}

/// Complete input to the estimation engine.
///
/// Built transiently from user input and discarded after producing one
/// [`EstimationResult`](crate::estimate::EstimationResult). Callers always
/// pass a fresh, fully-specified value; the engine never assumes in-place
/// mutation is visible.
///
/// The default value matches a blank take-off form: double-row scaffold,
/// Standard A pitch, standard handrails with count two on both faces, one
/// fall-prevention bar, ground level `"0"` on every side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Single- or double-row scaffold
    pub scaffold_type: ScaffoldType,

    /// Tube pitch standard (spacing + layer height preset)
    pub pitch: PitchStandard,

    /// Outer-face handrail configuration
    pub outer_rail: RailSpec,

    /// Inner-face handrail configuration (only counted for double-row)
    pub inner_rail: RailSpec,

    /// Intermediate fall-prevention bars per bay per layer
    pub fall_prevent: FallPreventBars,

    /// Raw per-side building dimensions
    pub sides: Sides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("2500"), 2500.0);
        assert_eq!(parse_dimension("412.5"), 412.5);
        assert_eq!(parse_dimension(" 300 "), 300.0);
        assert_eq!(parse_dimension("-150"), -150.0);
        assert_eq!(parse_dimension(""), 0.0);
        assert_eq!(parse_dimension("abc"), 0.0);
        assert_eq!(parse_dimension("12abc"), 0.0);
    }

    #[test]
    fn test_default_form_state() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.scaffold_type, ScaffoldType::DoubleRow);
        assert_eq!(config.pitch, PitchStandard::A);
        assert_eq!(config.outer_rail.kind, RailKind::Standard);
        assert_eq!(config.outer_rail.count, RailCount::Two);
        assert_eq!(config.inner_rail.count, RailCount::Two);
        assert_eq!(config.fall_prevent, FallPreventBars::One);
        for side in Side::ALL {
            let dims = config.sides.get(side);
            assert_eq!(dims.width, "");
            assert_eq!(dims.ground_level, "0");
            assert_eq!(dims.eave_height, "");
        }
    }

    #[test]
    fn test_side_height_clamps_to_zero() {
        let dims = SideDims {
            width: "1000".to_string(),
            ground_level: "3000".to_string(),
            eave_height: "2500".to_string(),
        };
        assert_eq!(dims.height_mm().value(), 0.0);
    }

    #[test]
    fn test_side_height() {
        let dims = SideDims {
            width: String::new(),
            ground_level: "200".to_string(),
            eave_height: "2500".to_string(),
        };
        assert_eq!(dims.height_mm().value(), 2300.0);
    }

    #[test]
    fn test_malformed_dimension_reads_as_zero() {
        let dims = SideDims {
            width: "about 4m".to_string(),
            ground_level: "0".to_string(),
            eave_height: String::new(),
        };
        assert_eq!(dims.width_mm().value(), 0.0);
        assert_eq!(dims.eave_height_mm().value(), 0.0);
    }

    #[test]
    fn test_rail_coefficient() {
        let standard_two = RailSpec {
            kind: RailKind::Standard,
            count: RailCount::Two,
        };
        let standard_one = RailSpec {
            kind: RailKind::Standard,
            count: RailCount::One,
        };
        // A leading rail counts as one regardless of the stored count
        let leading = RailSpec {
            kind: RailKind::Leading,
            count: RailCount::Two,
        };
        assert_eq!(standard_two.coefficient(), 2);
        assert_eq!(standard_one.coefficient(), 1);
        assert_eq!(leading.coefficient(), 1);
    }

    #[test]
    fn test_row_count() {
        assert_eq!(ScaffoldType::SingleRow.row_count(), 1);
        assert_eq!(ScaffoldType::DoubleRow.row_count(), 2);
    }

    #[test]
    fn test_sides_get() {
        let mut config = ScaffoldConfig::default();
        config.sides.get_mut(Side::East).width = "1200".to_string();
        assert_eq!(config.sides.get(Side::East).width_mm().value(), 1200.0);
        assert_eq!(config.sides.get(Side::West).width_mm().value(), 0.0);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = ScaffoldConfig::default();
        config.scaffold_type = ScaffoldType::SingleRow;
        config.pitch = PitchStandard::B;
        config.outer_rail.kind = RailKind::Leading;
        config.sides.south.width = "9100".to_string();
        config.sides.south.eave_height = "6200".to_string();

        let json = serde_json::to_string_pretty(&config).unwrap();
        let roundtrip: ScaffoldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ScaffoldType::DoubleRow.display_name(), "Double-row");
        assert_eq!(RailKind::Leading.display_name(), "Leading handrail");
        assert_eq!(Side::North.display_name(), "North");
    }
}
