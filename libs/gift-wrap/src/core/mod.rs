//! Core value types for the hull builder.
//!
//! Includes the vector alias (`Vec3`) with its tolerance-aware helpers and
//! the oriented triangular `Face`.

pub mod face;
pub mod vec3;
