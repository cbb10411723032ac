//! # Scaffold Quantity Estimation
//!
//! Derives a bill of materials from a [`ScaffoldConfig`]: post count, rail
//! counts for both faces, fall-prevention bar count, the vertical layer
//! count, and a recommended base-jack extension per building side.
//!
//! ## Assumptions
//!
//! - The scaffold wraps the full perimeter (sum of the four facade widths)
//! - Post bays are spaced at the pitch standard's horizontal spacing
//! - One rail segment per bay per layer, scaled by the face's coefficient
//! - An end-closure pair of posts is added on both open ends regardless of
//!   perimeter length
//! - Base jacks are rated up to 500 mm of extension
//!
//! ## Example
//!
//! ```rust
//! use scaffold_core::config::ScaffoldConfig;
//! use scaffold_core::estimate::estimate;
//!
//! let mut config = ScaffoldConfig::default();
//! config.sides.south.width = "1000".to_string();
//! config.sides.south.eave_height = "2200".to_string();
//!
//! let result = estimate(&config);
//! assert_eq!(result.posts, 10);
//! assert_eq!(result.steps, 2);
//! assert_eq!(result.jack.south.value(), 400.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ScaffoldConfig, Side};
use crate::units::{Meters, Millimeters};

/// Maximum extension a single base jack absorbs (mm). A leftover beyond
/// this is treated as one additional full layer.
const JACK_MAX_EXTENSION_MM: f64 = 500.0;

/// Recommended base-jack extension per building side, in millimeters.
///
/// A value can be negative: when the leftover height within the last layer
/// exceeds the jack range, the policy adds one full layer and reports the
/// adjustment relative to it (see [`jack_extension_mm`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JackExtensions {
    pub south: Millimeters,
    pub east: Millimeters,
    pub north: Millimeters,
    pub west: Millimeters,
}

impl JackExtensions {
    /// Extension for one side
    pub fn get(&self, side: Side) -> Millimeters {
        match side {
            Side::South => self.south,
            Side::East => self.east,
            Side::North => self.north,
            Side::West => self.west,
        }
    }
}

/// Results from a scaffold material estimate.
///
/// Immutable once produced; embedded verbatim into saved project records.
///
/// ## JSON Example
///
/// ```json
/// {
///   "posts": 10,
///   "outer_rails": 12,
///   "inner_rails": 12,
///   "fall_bars": 6,
///   "jack": { "south": 400.0, "east": 0.0, "north": 0.0, "west": 0.0 },
///   "steps": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Vertical posts, both rows included
    pub posts: u32,

    /// Outer-face handrail segments across all layers
    pub outer_rails: u32,

    /// Inner-face handrail segments across all layers (0 for single-row)
    pub inner_rails: u32,

    /// Intermediate fall-prevention bars across all layers
    pub fall_bars: u32,

    /// Recommended base-jack extension per side (mm)
    pub jack: JackExtensions,

    /// Vertical layer count, always at least 1
    pub steps: u32,
}

/// Base-jack extension needed to align the layer grid with one side's eave.
///
/// Four-way branch over the ground-to-eave difference:
///
/// 1. Eave at or below ground level → `0` (no jack needed).
/// 2. The difference is an exact multiple of the layer height → `0`.
/// 3. The remainder within the last layer is at most 500 mm → the remainder
///    (a single jack extension absorbs it).
/// 4. Otherwise → `remainder − layer_height`: the leftover gets one
///    additional full layer, and the returned value is the adjustment
///    relative to that extra layer — negative whenever the remainder is
///    between 500 mm and a full layer.
pub fn jack_extension_mm(
    ground_level: Millimeters,
    eave_height: Millimeters,
    layer_height: Millimeters,
) -> Millimeters {
    if eave_height.value() <= ground_level.value() {
        return Millimeters(0.0);
    }
    let diff = eave_height.value() - ground_level.value();
    let remainder = diff % layer_height.value();
    if remainder == 0.0 {
        return Millimeters(0.0);
    }
    if remainder <= JACK_MAX_EXTENSION_MM {
        return Millimeters(remainder);
    }
    Millimeters(remainder - layer_height.value())
}

/// Estimate the scaffold bill of materials for one building.
///
/// Pure function of its input: deterministic, never fails, holds no state
/// across calls. Malformed dimension text reads as 0 rather than erroring,
/// so every configuration produces a result.
pub fn estimate(config: &ScaffoldConfig) -> EstimationResult {
    let spacing_m = config.pitch.post_spacing_m();
    let layer_m = config.pitch.layer_height_m();
    let layer_mm = config.pitch.layer_height_mm();

    // === Perimeter ===
    let perimeter_mm = Side::ALL
        .iter()
        .fold(Millimeters(0.0), |acc, &side| {
            acc + config.sides.get(side).width_mm()
        });
    let perimeter: Meters = perimeter_mm.into();

    // === Maximum clamped height across the four sides ===
    let max_height_mm = Side::ALL
        .iter()
        .map(|&side| config.sides.get(side).height_mm().value())
        .fold(0.0_f64, f64::max);
    let max_height: Meters = Millimeters(max_height_mm).into();

    // === Vertical layers ===
    let steps = ((max_height.value() / layer_m).ceil() as u32).max(1);

    // Row multiplier: a double-row scaffold doubles every post line
    let column = config.scaffold_type.row_count();

    // Post bays required to cover the perimeter at the standard's spacing
    let base_count = (perimeter.value() / spacing_m).ceil() as u32;

    // === Posts (end-closure pair added on both open ends) ===
    let posts = base_count * column + 2 * column;

    // === Rails: one segment per bay per layer, scaled per face ===
    let rails_per_layer = base_count;
    let outer_rails = rails_per_layer * steps * config.outer_rail.coefficient();
    // Only a double-row scaffold has an inner face to rail
    let inner_rails = if column == 2 {
        rails_per_layer * steps * config.inner_rail.coefficient()
    } else {
        0
    };

    // === Fall-prevention bars ===
    let fall_bars = rails_per_layer * steps * config.fall_prevent.value();

    // === Jack extension per side ===
    let jack = JackExtensions {
        south: side_jack(config, Side::South, layer_mm),
        east: side_jack(config, Side::East, layer_mm),
        north: side_jack(config, Side::North, layer_mm),
        west: side_jack(config, Side::West, layer_mm),
    };

    EstimationResult {
        posts,
        outer_rails,
        inner_rails,
        fall_bars,
        jack,
        steps,
    }
}

fn side_jack(config: &ScaffoldConfig, side: Side, layer_mm: Millimeters) -> Millimeters {
    let dims = config.sides.get(side);
    jack_extension_mm(dims.ground_level_mm(), dims.eave_height_mm(), layer_mm)
}
