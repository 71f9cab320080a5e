//! # Topology Validation
//!
//! Structural checks over a finished face list: every directed edge used
//! exactly once with its twin present, Euler characteristic of a sphere,
//! and every input point on the inner side of every face.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::face::{DirectedEdge, Face};
use crate::core::vec3::{direction, unit, Point};
use crate::error::{HullError, HullResult};

/// Vertex, edge and face counts of a closed triangulated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    /// Distinct point indices referenced by the faces.
    pub vertices: usize,
    /// Undirected edges (pairs of twin directed edges).
    pub edges: usize,
    /// Faces.
    pub faces: usize,
}

impl Topology {
    /// `V - E + F`, which is 2 for a closed surface of genus zero.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }
}

/// Checks that `faces` form a closed, consistently oriented surface and
/// returns its counts.
///
/// # Examples
/// ```
/// use gift_wrap::{check_closed, Face};
/// let faces = [
///     Face::new(0, 1, 3),
///     Face::new(0, 2, 1),
///     Face::new(0, 3, 2),
///     Face::new(1, 2, 3),
/// ];
/// let topology = check_closed(&faces).unwrap();
/// assert_eq!(topology.edges, 6);
/// assert_eq!(topology.euler_characteristic(), 2);
/// ```
pub fn check_closed(faces: &[Face]) -> HullResult<Topology> {
    if faces.is_empty() {
        return Err(HullError::non_manifold("no faces"));
    }

    let mut uses: BTreeMap<DirectedEdge, usize> = BTreeMap::new();
    let mut vertices = BTreeSet::new();
    for face in faces {
        vertices.extend(face.vertices());
        for edge in face.edges() {
            *uses.entry(edge).or_default() += 1;
        }
    }

    for (&(from, to), &count) in &uses {
        if count > 1 {
            return Err(HullError::non_manifold(format!(
                "directed edge ({from}, {to}) is used by {count} faces"
            )));
        }
        if !uses.contains_key(&(to, from)) {
            return Err(HullError::non_manifold(format!(
                "directed edge ({from}, {to}) has no reverse twin"
            )));
        }
    }

    Ok(Topology {
        vertices: vertices.len(),
        edges: uses.len() / 2,
        faces: faces.len(),
    })
}

/// First face whose vertices are collinear within `tolerance`.
pub(crate) fn flat_face(points: &[Point], faces: &[Face], tolerance: f64) -> Option<Face> {
    faces
        .iter()
        .copied()
        .find(|face| unit(face.normal(points), tolerance).is_none())
}

/// Checks that no point lies more than `slack` outside the plane of any
/// face, measured along the face's unit outward normal.
///
/// # Examples
/// ```
/// use gift_wrap::{check_convex, Face, Point};
/// let points = [Point::ZERO, Point::X, Point::Y, Point::Z];
/// let inward = [Face::new(0, 1, 2)];
/// assert!(check_convex(&points, &inward, 1e-9).is_err());
/// let outward = [Face::new(0, 2, 1)];
/// assert!(check_convex(&points, &outward, 1e-9).is_ok());
/// ```
pub fn check_convex(points: &[Point], faces: &[Face], slack: f64) -> HullResult<()> {
    for face in faces {
        let [a, b, c] = face.vertices();
        let normal = unit(face.normal(points), slack)
            .ok_or_else(|| HullError::non_manifold(format!("face ({a}, {b}, {c}) has no area")))?;
        let anchor = points[a];
        if let Some(i) = points
            .iter()
            .position(|p| normal.dot(direction(anchor, *p)) > slack)
        {
            return Err(HullError::non_manifold(format!(
                "point {i} lies outside face ({a}, {b}, {c})"
            )));
        }
    }
    Ok(())
}
