//! # Gift-Wrap
//!
//! Triangulated 3D convex hulls by incremental gift wrapping.
//!
//! ## Architecture
//!
//! ```text
//! points ─► seed face ─► wavefront + FIFO queue ─► pivot per open edge
//!                                                       │
//!        text / JSON ◄── canonical sorted faces ◄───────┘
//! ```
//!
//! - [`core`]: vector helpers over `glam::DVec3` and the oriented [`Face`]
//! - [`hull`]: the seed search, pivot, wavefront and BFS driver
//! - [`io`]: the whitespace-delimited text format
//! - [`batch`]: independent cases, optionally on the rayon pool
//!
//! Tolerances and the coplanar tie policy come from the workspace `config`
//! crate (`config::constants::HullConfig`).
//!
//! ## Example
//!
//! ```rust
//! use config::constants::HullConfig;
//! use gift_wrap::{build_hull, parse_point_set};
//!
//! let points = parse_point_set("4  0 0 0  1 0 0  0 1 0  0 0 1").unwrap();
//! let hull = build_hull(&points, &HullConfig::default()).unwrap();
//! assert_eq!(hull.to_string(), "4\n3 0 1 3\n3 0 2 1\n3 0 3 2\n3 1 2 3\n");
//! ```

pub mod batch;
pub mod core;
pub mod error;
pub mod hull;
pub mod io;

pub use batch::BatchSolver;
pub use crate::core::face::{canonicalize, DirectedEdge, EdgeSelector, Face};
pub use crate::core::vec3::{Point, Vec3};
pub use error::{HullError, HullResult};
pub use hull::{build_hull, check_closed, check_convex, Hull, HullBuilder, Phase, Topology, Wavefront};
pub use io::{parse_batch, parse_point_set, render_batch, write_hull};
