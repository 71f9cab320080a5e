//! # Config Crate
//!
//! Centralized configuration for the gift-wrap convex hull builder.
//! Every tolerance, limit and tie-breaking policy used by the geometry
//! code is defined here so the hull kernel never carries hidden constants.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HullConfig, EPSILON};
//!
//! // Thread an explicit configuration through hull construction
//! let cfg = HullConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Tolerance**: Geometry code receives its epsilon as a parameter
//! - **No Dependencies**: Usable from any crate in the workspace

pub mod constants;
