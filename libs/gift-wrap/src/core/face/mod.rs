//! # Hull Faces
//!
//! An oriented triangle over point indices, the selector naming one of its
//! three directed edges, and the canonical rotation + ordering used for
//! output.
//!
//! Orientation is encoded by vertex order: for face `(a, b, c)` the outward
//! normal is `cross(b - a, c - a)`. Only cyclic rotations are ever applied to
//! a face, so orientation is never lost.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::vec3::{cross, direction, Point, Vec3};

/// A directed edge `(from, to)` between two point indices.
pub type DirectedEdge = (usize, usize);

/// An oriented triangular hull face.
///
/// # Examples
/// ```
/// use gift_wrap::Face;
/// let face = Face::new(4, 1, 7);
/// assert_eq!(face.edges(), [(4, 1), (1, 7), (7, 4)]);
/// assert_eq!(face.canonical(), Face::new(1, 7, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face {
    vertices: [usize; 3],
}

impl Face {
    /// Creates a face from three point indices in winding order.
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// The three vertex indices in winding order.
    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    /// The three directed edges `(a,b)`, `(b,c)`, `(c,a)`.
    pub fn edges(&self) -> [DirectedEdge; 3] {
        EdgeSelector::ALL.map(|selector| selector.edge(self))
    }

    /// Returns true when `index` is one of the face's vertices.
    pub fn contains(&self, index: usize) -> bool {
        self.vertices.contains(&index)
    }

    /// Rotates the face cyclically so its smallest index comes first.
    pub fn canonical(&self) -> Self {
        let [a, b, c] = self.vertices;
        if b < a && b < c {
            Self::new(b, c, a)
        } else if c < a && c < b {
            Self::new(c, a, b)
        } else {
            *self
        }
    }

    /// Unnormalized outward normal `cross(b - a, c - a)`.
    pub fn normal(&self, points: &[Point]) -> Vec3 {
        let [a, b, c] = self.vertices.map(|i| points[i]);
        cross(direction(a, b), direction(a, c))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(f, "3 {a} {b} {c}")
    }
}

/// Names one of the three directed edges of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSelector {
    /// Edge from the first to the second vertex.
    AB,
    /// Edge from the second to the third vertex.
    BC,
    /// Edge from the third back to the first vertex.
    CA,
}

impl EdgeSelector {
    /// All selectors in the order the wrap expands them.
    pub const ALL: [EdgeSelector; 3] = [EdgeSelector::AB, EdgeSelector::BC, EdgeSelector::CA];

    /// The directed edge of `face` this selector names.
    pub fn edge(self, face: &Face) -> DirectedEdge {
        let (p0, p1, _) = self.relabel(face);
        (p0, p1)
    }

    /// Cyclic relabeling `(p0, p1, p2)` of `face` in which the selected edge
    /// is `(p0, p1)` and `p2` is the opposite vertex.
    ///
    /// # Examples
    /// ```
    /// use gift_wrap::{EdgeSelector, Face};
    /// let face = Face::new(0, 1, 2);
    /// assert_eq!(EdgeSelector::BC.relabel(&face), (1, 2, 0));
    /// assert_eq!(EdgeSelector::CA.relabel(&face), (2, 0, 1));
    /// ```
    pub fn relabel(self, face: &Face) -> (usize, usize, usize) {
        let [a, b, c] = face.vertices;
        match self {
            EdgeSelector::AB => (a, b, c),
            EdgeSelector::BC => (b, c, a),
            EdgeSelector::CA => (c, a, b),
        }
    }
}

/// Canonicalizes every face and sorts the list lexicographically, giving a
/// reproducible presentation of the hull. Idempotent.
pub fn canonicalize(faces: &mut [Face]) {
    for face in faces.iter_mut() {
        *face = face.canonical();
    }
    faces.sort_unstable();
}
