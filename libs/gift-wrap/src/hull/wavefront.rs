//! # Wavefront
//!
//! The set of directed edges bounding the part of the hull discovered so far.
//! An edge `(u, v)` is open while exactly one emitted face carries it and no
//! face carries `(v, u)`; inserting the twin closes it.

use std::collections::BTreeSet;

use crate::core::face::{DirectedEdge, Face};
use crate::error::{HullError, HullResult};

/// Open boundary edges of the partially wrapped hull.
///
/// # Examples
/// ```
/// use gift_wrap::{Face, Wavefront};
/// let mut front = Wavefront::new();
/// front.insert_face_edges(&Face::new(0, 1, 2)).unwrap();
/// assert!(front.contains(0, 1));
/// front.insert_face_edges(&Face::new(1, 0, 3)).unwrap();
/// assert!(!front.contains(0, 1));
/// assert_eq!(front.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wavefront {
    open: BTreeSet<DirectedEdge>,
}

impl Wavefront {
    /// Creates an empty wavefront.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the three directed edges of `face`. An edge whose reverse is
    /// open cancels it instead of being added.
    ///
    /// Fails with [`HullError::DuplicateEdge`] when an edge is already open
    /// in the same direction, which only happens after two faces have been
    /// wrapped across the same side of one edge.
    pub fn insert_face_edges(&mut self, face: &Face) -> HullResult<()> {
        for (from, to) in face.edges() {
            if self.open.remove(&(to, from)) {
                continue;
            }
            if !self.open.insert((from, to)) {
                return Err(HullError::DuplicateEdge { from, to });
            }
        }
        Ok(())
    }

    /// Returns true while the directed edge `(from, to)` is open.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.open.contains(&(from, to))
    }

    /// Number of open edges.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns true once every edge has been closed.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open edges in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.open.iter().copied()
    }
}
