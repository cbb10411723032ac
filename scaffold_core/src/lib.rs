//! # scaffold_core - Scaffolding Material Estimation Engine
//!
//! `scaffold_core` is the computational heart of Ashiba, estimating the bill
//! of materials for exterior construction scaffolding from per-side building
//! dimensions and a small set of configuration choices. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`estimate`](estimate::estimate) is a pure function of
//!   an immutable input record
//! - **Total**: the engine never fails — malformed dimension text reads as
//!   zero, heights clamp at zero, the layer count floors at one
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use scaffold_core::config::ScaffoldConfig;
//! use scaffold_core::estimate::estimate;
//!
//! let mut config = ScaffoldConfig::default();
//! config.sides.south.width = "1000".to_string();
//! config.sides.south.eave_height = "2500".to_string();
//!
//! let result = estimate(&config);
//! assert_eq!(result.posts, 10);
//! assert!(result.steps >= 1);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration input types and the dimension normalizer
//! - [`estimate`] - The quantity calculation engine
//! - [`pitch`] - Tube pitch standard presets
//! - [`project`] - Saved-estimate records and the in-memory store
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types (store/export boundary only)

pub mod config;
pub mod errors;
pub mod estimate;
pub mod pitch;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::{
    FallPreventBars, RailCount, RailKind, RailSpec, ScaffoldConfig, ScaffoldType, Side, SideDims,
    Sides,
};
pub use errors::{ScaffoldError, ScaffoldResult};
pub use estimate::{estimate, EstimationResult, JackExtensions};
pub use pitch::PitchStandard;
pub use project::{Project, ProjectStore};
