//! # Gift Wrapping
//!
//! Incremental gift-wrapping construction of a triangulated 3D convex hull.
//!
//! ## Algorithm Overview
//!
//! 1. Find a seed face on the hull from extremal points
//! 2. Keep the open boundary of the discovered faces as a wavefront of
//!    directed edges
//! 3. Pop faces breadth-first; across each edge still open, pivot to the
//!    neighbouring face and enqueue it
//! 4. Stop when the queue drains; the wavefront must then be empty
//!
//! The face list is finally canonicalized and checked for closure.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::HullConfig;
//! use gift_wrap::{build_hull, Face, Point};
//!
//! let points = [Point::ZERO, Point::X, Point::Y, Point::Z];
//! let hull = build_hull(&points, &HullConfig::default()).unwrap();
//! assert_eq!(hull.faces()[0], Face::new(0, 1, 3));
//! assert_eq!(hull.face_count(), 4);
//! ```

mod pivot;
mod seed;
mod ties;
mod validate;
mod wavefront;

#[cfg(test)]
mod tests;

pub use validate::{check_closed, check_convex, Topology};
pub use wavefront::Wavefront;

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use config::constants::{HullConfig, MIN_HULL_POINTS};
use serde::{Deserialize, Serialize};

use crate::core::face::{canonicalize, EdgeSelector, Face};
use crate::core::vec3::Point;
use crate::error::{HullError, HullResult};

// =============================================================================
// RESULT
// =============================================================================

/// A finished hull: canonical, sorted faces over the input point indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hull {
    point_count: usize,
    faces: Vec<Face>,
}

impl Hull {
    /// Faces in canonical sorted order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of input points the indices refer to.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Indices of the points that appear in at least one face.
    pub fn vertex_indices(&self) -> BTreeSet<usize> {
        self.faces.iter().flat_map(|f| f.vertices()).collect()
    }

}

/// Renders the face count followed by one `3 a b c` line per face.
impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.faces.len())?;
        for face in &self.faces {
            writeln!(f, "{face}")?;
        }
        Ok(())
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// Stage of a [`HullBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No face has been found yet.
    Seeding,
    /// Faces are being popped and expanded.
    Expanding,
    /// The queue is empty and the wavefront closed.
    Done,
}

/// Breadth-first gift-wrapping driver over a borrowed point set.
///
/// Most callers want [`build_hull`]; the builder exposes the individual
/// steps for inspection.
///
/// ```rust
/// use config::constants::HullConfig;
/// use gift_wrap::{HullBuilder, Phase, Point};
///
/// let points = [Point::ZERO, Point::X, Point::Y, Point::Z];
/// let mut builder = HullBuilder::new(&points, &HullConfig::default()).unwrap();
/// assert_eq!(builder.step().unwrap(), Phase::Expanding);
/// assert_eq!(builder.wavefront().len(), 3);
/// let hull = builder.run().unwrap();
/// assert_eq!(hull.face_count(), 4);
/// ```
#[derive(Debug)]
pub struct HullBuilder<'a> {
    points: &'a [Point],
    config: HullConfig,
    phase: Phase,
    seed: Option<Face>,
    wavefront: Wavefront,
    queue: VecDeque<Face>,
    faces: Vec<Face>,
}

impl<'a> HullBuilder<'a> {
    /// Validates the configuration and the point set.
    ///
    /// # Errors
    ///
    /// - [`HullError::Config`] for an invalid tolerance or point limit
    /// - [`HullError::TooFewPoints`] / [`HullError::TooManyPoints`]
    /// - [`HullError::NonFinitePoint`] for NaN or infinite coordinates
    /// - [`HullError::DuplicatePoints`] for two points within tolerance
    pub fn new(points: &'a [Point], config: &HullConfig) -> HullResult<Self> {
        let config = HullConfig::new(config.tolerance)?
            .with_coplanar(config.coplanar)
            .with_max_points(config.max_points)?;

        if points.len() < MIN_HULL_POINTS {
            return Err(HullError::TooFewPoints {
                count: points.len(),
                required: MIN_HULL_POINTS,
            });
        }
        if points.len() > config.max_points {
            return Err(HullError::TooManyPoints {
                count: points.len(),
                max: config.max_points,
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(HullError::NonFinitePoint { index });
        }
        if let Some((first, second)) = find_duplicate(points, config.tolerance) {
            return Err(HullError::DuplicatePoints { first, second });
        }

        Ok(Self {
            points,
            config,
            phase: Phase::Seeding,
            seed: None,
            wavefront: Wavefront::new(),
            queue: VecDeque::new(),
            faces: Vec::new(),
        })
    }

    /// Current stage.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Open edges of the faces discovered so far.
    pub fn wavefront(&self) -> &Wavefront {
        &self.wavefront
    }

    /// Faces already expanded, in discovery order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Finds the seed face, opens its edges and enqueues it. Calling it again
    /// returns the same face.
    pub fn seed(&mut self) -> HullResult<Face> {
        if let Some(face) = self.seed {
            return Ok(face);
        }
        let face = seed::seed_face(self.points, &self.config)?;
        self.wavefront.insert_face_edges(&face).map_err(report)?;
        self.queue.push_back(face);
        self.seed = Some(face);
        self.phase = Phase::Expanding;
        Ok(face)
    }

    /// Advances by one unit of work: seeding, expanding one face, or
    /// detecting completion. Returns the stage reached.
    pub fn step(&mut self) -> HullResult<Phase> {
        match self.phase {
            Phase::Seeding => {
                self.seed()?;
            }
            Phase::Expanding => match self.queue.pop_front() {
                Some(face) => self.expand(face).map_err(report)?,
                None => self.close().map_err(report)?,
            },
            Phase::Done => {}
        }
        Ok(self.phase)
    }

    /// Runs to completion and returns the canonical hull.
    ///
    /// # Errors
    ///
    /// Besides the invariant violations, returns [`HullError::Degenerate`]
    /// when a closed surface contains a face with no area. This happens under
    /// [`CoplanarPolicy::EncounterOrder`](config::constants::CoplanarPolicy)
    /// when a point lies inside a hull edge.
    pub fn run(mut self) -> HullResult<Hull> {
        while self.step()? != Phase::Done {}

        let mut faces = self.faces;
        canonicalize(&mut faces);
        let topology = check_closed(&faces).map_err(report)?;
        if topology.euler_characteristic() != 2 {
            return Err(report(HullError::non_manifold(format!(
                "Euler characteristic is {}, expected 2",
                topology.euler_characteristic()
            ))));
        }
        if let Some(face) = validate::flat_face(self.points, &faces, self.config.tolerance) {
            let [a, b, c] = face.vertices();
            return Err(HullError::degenerate(format!("face ({a}, {b}, {c}) has no area")));
        }

        log::debug!(
            "hull of {} points: {} faces over {} vertices",
            self.points.len(),
            topology.faces,
            topology.vertices
        );
        Ok(Hull {
            point_count: self.points.len(),
            faces,
        })
    }

    fn expand(&mut self, face: Face) -> HullResult<()> {
        for selector in EdgeSelector::ALL {
            let (from, to) = selector.edge(&face);
            if !self.wavefront.contains(from, to) {
                continue;
            }
            let next = pivot::pivot(self.points, &face, selector, &self.config)?;
            self.wavefront.insert_face_edges(&next)?;
            self.queue.push_back(next);
        }
        self.faces.push(face);

        let emitted = self.faces.len() + self.queue.len();
        if emitted > self.config.face_budget(self.points.len()) {
            return Err(HullError::FaceLimitExceeded {
                faces: emitted,
                points: self.points.len(),
            });
        }
        Ok(())
    }

    fn close(&mut self) -> HullResult<()> {
        if !self.wavefront.is_empty() {
            return Err(HullError::OpenBorder {
                open: self.wavefront.len(),
            });
        }
        self.phase = Phase::Done;
        Ok(())
    }
}

/// Logs invariant violations before handing the error back.
fn report(err: HullError) -> HullError {
    if err.is_invariant_violation() {
        log::error!("gift wrap invariant violated: {err}");
    }
    err
}

/// First pair of points closer than `tolerance`, found by a sweep over the
/// points sorted by x. The pair is returned as `(lower, higher)` index.
fn find_duplicate(points: &[Point], tolerance: f64) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].x.total_cmp(&points[b].x).then(a.cmp(&b)));

    for (k, &i) in order.iter().enumerate() {
        for &j in &order[k + 1..] {
            if points[j].x - points[i].x >= tolerance {
                break;
            }
            if points[i].distance(points[j]) < tolerance {
                return Some((i.min(j), i.max(j)));
            }
        }
    }
    None
}

/// Builds the convex hull of `points`.
///
/// # Errors
///
/// Returns the validation errors of [`HullBuilder::new`],
/// [`HullError::Degenerate`] when the points do not span a solid or a face
/// comes out with no area (see [`HullBuilder::run`]), and an
/// invariant violation (see [`HullError::is_invariant_violation`]) when the
/// wrap cannot close the surface at the configured tolerance.
pub fn build_hull(points: &[Point], config: &HullConfig) -> HullResult<Hull> {
    HullBuilder::new(points, config)?.run()
}
