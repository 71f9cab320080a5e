//! Centralized configuration values shared across the gift-wrap workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Two reals closer than this are treated as equal by every geometric
/// decision of the hull builder: extremal-point ordering, angle comparisons
/// and the degenerate-length guard of the vector helpers.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of points that can span a solid hull (a tetrahedron).
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Maximum number of points accepted for a single hull.
///
/// Gift wrapping scans every point for every discovered face, so the cost
/// grows with the product of point and face counts.
///
/// # Examples
/// ```
/// use config::constants::MAX_HULL_POINTS;
/// assert!(MAX_HULL_POINTS >= 1_000);
/// ```
pub const MAX_HULL_POINTS: usize = 200_000;

/// Multiplier bounding the number of faces the wrap may emit.
///
/// A triangulated convex polyhedron over `n` vertices has at most `2n - 4`
/// faces, so a budget of `2n` is only exceeded when the wavefront has been
/// corrupted by degenerate input.
///
/// # Examples
/// ```
/// use config::constants::FACE_BUDGET_FACTOR;
/// assert_eq!(FACE_BUDGET_FACTOR * 4, 8);
/// ```
pub const FACE_BUDGET_FACTOR: usize = 2;

// =============================================================================
// TIE-BREAKING POLICY
// =============================================================================

/// How the hull builder resolves candidates that score within tolerance of
/// each other, which happens exactly when several points are coplanar with a
/// hull facet.
///
/// # Examples
/// ```
/// use config::constants::CoplanarPolicy;
/// let policy: CoplanarPolicy = "encounter-order".parse().unwrap();
/// assert_eq!(policy, CoplanarPolicy::EncounterOrder);
/// assert_eq!(CoplanarPolicy::default(), CoplanarPolicy::Perturbed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoplanarPolicy {
    /// The first candidate in input order wins every tie. Points inside a
    /// hull edge can then produce faces with no area, which the builder
    /// reports as degenerate.
    EncounterOrder,
    /// Ties are resolved as if each point were pushed outward by an
    /// infinitesimal that shrinks with its index, giving one consistent
    /// triangulation per coplanar facet. A point inside a hull edge becomes
    /// a vertex only when its index is lower than both ends of the edge, so
    /// no face ever degenerates to a sliver.
    #[default]
    Perturbed,
}

impl CoplanarPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [CoplanarPolicy; 2] = [CoplanarPolicy::EncounterOrder, CoplanarPolicy::Perturbed];

    /// Stable textual name, accepted back by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            CoplanarPolicy::EncounterOrder => "encounter-order",
            CoplanarPolicy::Perturbed => "perturbed",
        }
    }
}

impl fmt::Display for CoplanarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoplanarPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoplanarPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPolicy(s.to_string()))
    }
}

// =============================================================================
// HULL CONFIGURATION
// =============================================================================

/// Immutable configuration threaded through one hull construction.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// let config = HullConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Numeric tolerance for every geometric comparison.
    pub tolerance: f64,
    /// Tie-breaking policy for coplanar candidates.
    pub coplanar: CoplanarPolicy,
    /// Largest accepted point count.
    pub max_points: usize,
}

impl HullConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// assert!(HullConfig::new(0.0).is_err());
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Returns a copy using the given tie-breaking policy.
    pub fn with_coplanar(self, coplanar: CoplanarPolicy) -> Self {
        Self { coplanar, ..self }
    }

    /// Returns a copy accepting at most `max_points` points.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::default().with_max_points(16).unwrap();
    /// assert_eq!(cfg.max_points, 16);
    /// assert!(HullConfig::default().with_max_points(3).is_err());
    /// ```
    pub fn with_max_points(self, max_points: usize) -> Result<Self, ConfigError> {
        if max_points < MIN_HULL_POINTS {
            return Err(ConfigError::InvalidPointLimit(max_points));
        }
        Ok(Self { max_points, ..self })
    }

    /// Scales the tolerance by the coordinate extent of the input so that
    /// large coordinate ranges keep the same relative precision. Extents
    /// below one leave the tolerance unchanged.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::new(1.0e-10).unwrap().scaled_to_extent(1.0e4);
    /// assert!((cfg.tolerance - 1.0e-6).abs() < 1.0e-18);
    /// ```
    pub fn scaled_to_extent(self, extent: f64) -> Self {
        let factor = if extent.is_finite() { extent.max(1.0) } else { 1.0 };
        Self {
            tolerance: self.tolerance * factor,
            ..self
        }
    }

    /// Maximum number of faces a wrap over `point_count` points may emit.
    pub fn face_budget(&self, point_count: usize) -> usize {
        FACE_BUDGET_FACTOR * point_count
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            coplanar: CoplanarPolicy::default(),
            max_points: MAX_HULL_POINTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the point limit cannot admit a tetrahedron.
    InvalidPointLimit(usize),
    /// Raised when a tie-breaking policy name is not recognised.
    UnknownPolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidPointLimit(value) => {
                write!(f, "max_points must be >= {MIN_HULL_POINTS}: {value}")
            }
            ConfigError::UnknownPolicy(name) => {
                write!(
                    f,
                    "unknown coplanar policy '{name}' (expected 'encounter-order' or 'perturbed')"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
