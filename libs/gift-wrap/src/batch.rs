//! # Batch Solving
//!
//! Hulls for many independent point sets. Cases share no state, so the
//! parallel path maps them over the rayon thread pool; results always come
//! back in input order.

use config::constants::HullConfig;
use rayon::prelude::*;

use crate::core::vec3::{extent, Point};
use crate::error::HullResult;
use crate::hull::{build_hull, Hull};

/// Solves batches of independent cases with one shared configuration.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// use gift_wrap::{BatchSolver, Point};
///
/// let tetrahedron = vec![Point::ZERO, Point::X, Point::Y, Point::Z];
/// let solver = BatchSolver::new(HullConfig::default()).parallel(true);
/// let results = solver.solve(&[tetrahedron.clone(), tetrahedron]);
/// assert!(results.iter().all(|r| r.as_ref().map_or(false, |h| h.face_count() == 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSolver {
    config: HullConfig,
    relative_tolerance: bool,
    parallel: bool,
}

impl BatchSolver {
    /// Creates a sequential solver with absolute tolerance.
    pub fn new(config: HullConfig) -> Self {
        Self {
            config,
            relative_tolerance: false,
            parallel: false,
        }
    }

    /// Scales the tolerance of each case by its coordinate extent.
    pub fn relative_tolerance(self, enabled: bool) -> Self {
        Self {
            relative_tolerance: enabled,
            ..self
        }
    }

    /// Solves cases on the rayon thread pool.
    pub fn parallel(self, enabled: bool) -> Self {
        Self {
            parallel: enabled,
            ..self
        }
    }

    /// Configuration used for `points`, after optional scaling.
    pub fn config_for(&self, points: &[Point]) -> HullConfig {
        if self.relative_tolerance {
            self.config.scaled_to_extent(extent(points))
        } else {
            self.config
        }
    }

    /// Solves one case.
    pub fn solve_case(&self, points: &[Point]) -> HullResult<Hull> {
        build_hull(points, &self.config_for(points))
    }

    /// Solves every case, in parallel when enabled.
    pub fn solve(&self, cases: &[Vec<Point>]) -> Vec<HullResult<Hull>> {
        if self.parallel {
            self.solve_batch_parallel(cases)
        } else {
            self.solve_batch(cases)
        }
    }

    /// Solves every case on the calling thread.
    pub fn solve_batch(&self, cases: &[Vec<Point>]) -> Vec<HullResult<Hull>> {
        cases.iter().map(|points| self.solve_case(points)).collect()
    }

    /// Solves every case on the rayon thread pool.
    pub fn solve_batch_parallel(&self, cases: &[Vec<Point>]) -> Vec<HullResult<Hull>> {
        log::debug!("solving {} cases in parallel", cases.len());
        cases.par_iter().map(|points| self.solve_case(points)).collect()
    }
}

impl Default for BatchSolver {
    fn default() -> Self {
        Self::new(HullConfig::default())
    }
}
