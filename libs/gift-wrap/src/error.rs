//! # Error Types
//!
//! Error types for hull construction. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - Degenerate input is rejected up front instead of producing a malformed hull
//! - Broken wavefront invariants are returned as errors, never swallowed
//! - Near-ties are not errors; they are resolved deterministically

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or exchanging convex hulls.
///
/// ## Example
///
/// ```rust
/// use gift_wrap::{build_hull, HullError, Point};
/// use config::constants::HullConfig;
///
/// let points = [Point::ZERO, Point::X, Point::Y];
/// match build_hull(&points, &HullConfig::default()) {
///     Ok(hull) => println!("{} faces", hull.face_count()),
///     Err(HullError::TooFewPoints { count, .. }) => assert_eq!(count, 3),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer points than a tetrahedron needs.
    #[error("Convex hull requires at least {required} points, got {count}")]
    TooFewPoints {
        /// Number of points supplied
        count: usize,
        /// Minimum number of points
        required: usize,
    },

    /// More points than the configured limit.
    #[error("Too many points: {count} (max: {max})")]
    TooManyPoints {
        /// Number of points supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("Point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point
        index: usize,
    },

    /// Two input points coincide within tolerance.
    #[error("Points {first} and {second} coincide within tolerance")]
    DuplicatePoints {
        /// Lower index of the pair
        first: usize,
        /// Higher index of the pair
        second: usize,
    },

    /// The points do not span a solid (all collinear or all coplanar).
    #[error("Degenerate input: {0}")]
    Degenerate(String),

    /// A pivot found no point to close the face across an edge.
    #[error("Pivot across edge ({from}, {to}) found no candidate point")]
    NoPivotCandidate {
        /// Edge start
        from: usize,
        /// Edge end
        to: usize,
    },

    /// A directed edge entered the wavefront while already open.
    #[error("Directed edge ({from}, {to}) is already open in the wavefront")]
    DuplicateEdge {
        /// Edge start
        from: usize,
        /// Edge end
        to: usize,
    },

    /// The queue drained while wavefront edges were still open.
    #[error("Wavefront still holds {open} open edges after wrapping")]
    OpenBorder {
        /// Number of edges left open
        open: usize,
    },

    /// The wrap emitted more faces than a convex polyhedron can have.
    #[error("Face limit exceeded: {faces} faces for {points} points")]
    FaceLimitExceeded {
        /// Faces emitted so far
        faces: usize,
        /// Number of input points
        points: usize,
    },

    /// The face list is not a closed, consistently oriented surface.
    #[error("Hull is not a closed surface: {0}")]
    NonManifold(String),

    /// Malformed text input.
    #[error("Parse error at token {position}: {message}")]
    Parse {
        /// Zero-based index of the offending token
        position: usize,
        /// What went wrong
        message: String,
    },

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HullError {
    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate(message.into())
    }

    /// Creates a non-manifold result error.
    pub fn non_manifold(message: impl Into<String>) -> Self {
        Self::NonManifold(message.into())
    }

    /// Creates a parse error at the given token position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Returns true for errors that signal a broken wavefront invariant
    /// rather than invalid input.
    ///
    /// ```rust
    /// use gift_wrap::HullError;
    /// assert!(HullError::OpenBorder { open: 2 }.is_invariant_violation());
    /// assert!(!HullError::degenerate("coplanar").is_invariant_violation());
    /// ```
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::NoPivotCandidate { .. }
                | Self::DuplicateEdge { .. }
                | Self::OpenBorder { .. }
                | Self::FaceLimitExceeded { .. }
                | Self::NonManifold(_)
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================
