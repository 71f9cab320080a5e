//! # Candidate Selection
//!
//! Picks the best-scoring candidate point for the seed search and the pivot.
//!
//! A candidate replaces the incumbent only when it scores more than the
//! tolerance higher, so among near-equal scores the first one encountered
//! wins. Near-equal scores across an edge mean the candidates are coplanar
//! with it; under [`CoplanarPolicy::Perturbed`] such ties are re-ranked by
//! symbolic perturbation so that every wrap step arriving at the same
//! coplanar facet agrees on its triangulation.
//!
//! ## Perturbation
//!
//! Point `i` is treated as pushed outward by `k * eps^(i + 1)` for an
//! infinitesimal `eps`, so lower indices are lifted more. A tied candidate
//! `q` beyond edge `(p0, p1)` then tilts the wrapping plane by
//!
//! ```text
//! slope(q) = (h[q] - (1 - t) * h[p0] - t * h[p1]) / d
//! ```
//!
//! where `d` is the in-plane distance from `q` to the edge line and `t` the
//! projection of `q` onto it. The steepest plane supports all other tied
//! points. Slopes are compared coefficient by coefficient in ascending point
//! index, since a lower index dominates every higher one.
//!
//! Candidates on the edge line span no plane and never take part. Under the
//! lifts a point strictly inside a hull edge `(a, b)` becomes a vertex
//! exactly when its index is lower than both `a` and `b`; the wrap reaches it
//! from the neighbouring facets, never across the edge itself.
//!
//! Along a single ray from `origin` the slope of `q` reduces to
//! `(h[q] - h[origin]) / |q - origin|`, which [`steepest_on_ray`] resolves in
//! closed form.

use config::constants::{CoplanarPolicy, HullConfig};

use crate::core::face::DirectedEdge;
use crate::core::vec3::{cross, direction, Point};

/// A candidate point and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub index: usize,
    pub score: f64,
}

/// First candidate attaining the maximum score up to `tolerance`.
pub(crate) fn leader(candidates: &[Candidate], tolerance: f64) -> Option<Candidate> {
    candidates.iter().fold(None, |best: Option<Candidate>, c| match best {
        Some(b) if c.score <= b.score + tolerance => Some(b),
        _ => Some(*c),
    })
}

/// Indices of all candidates scoring within `tolerance` of `top`.
pub(crate) fn tied_with(candidates: &[Candidate], top: Candidate, tolerance: f64) -> Vec<usize> {
    candidates
        .iter()
        .filter(|c| c.score > top.score - tolerance)
        .map(|c| c.index)
        .collect()
}

/// Selects the candidate that forms the next face across `edge`.
pub(crate) fn select_across(
    points: &[Point],
    edge: DirectedEdge,
    candidates: &[Candidate],
    config: &HullConfig,
) -> Option<usize> {
    let top = leader(candidates, config.tolerance)?;
    if config.coplanar == CoplanarPolicy::EncounterOrder {
        return Some(top.index);
    }
    let tied = tied_with(candidates, top, config.tolerance);
    if tied.len() < 2 {
        return Some(top.index);
    }
    let winner = steepest(points, edge, &tied, config.tolerance).unwrap_or(top.index);
    log::trace!(
        "{} coplanar candidates across ({}, {}), perturbation picked {} over {}",
        tied.len(),
        edge.0,
        edge.1,
        winner,
        top.index
    );
    Some(winner)
}

/// Perturbed slope of one candidate as coefficients of the lifts `h[i]`.
#[derive(Debug, Clone, Copy)]
struct Slope {
    index: usize,
    terms: [(usize, f64); 3],
}

impl Slope {
    fn new(points: &[Point], (p0, p1): DirectedEdge, q: usize, tolerance: f64) -> Option<Self> {
        let edge = direction(points[p0], points[p1]);
        let length_sq = edge.length_squared();
        if length_sq < tolerance * tolerance {
            return None;
        }
        let offset = direction(points[p0], points[q]);
        let distance = cross(edge, offset).length() / length_sq.sqrt();
        if distance < tolerance {
            return None;
        }
        let t = offset.dot(edge) / length_sq;
        Some(Self {
            index: q,
            terms: [
                (q, 1.0 / distance),
                (p0, -(1.0 - t) / distance),
                (p1, -t / distance),
            ],
        })
    }

    fn coefficient(&self, index: usize) -> f64 {
        self.terms
            .iter()
            .find(|(i, _)| *i == index)
            .map_or(0.0, |(_, c)| *c)
    }

    /// True when `self` is strictly steeper than `other` for every small
    /// enough perturbation.
    fn steeper_than(&self, other: &Slope, tolerance: f64) -> bool {
        let mut indices: Vec<usize> = self
            .terms
            .iter()
            .chain(other.terms.iter())
            .map(|(i, _)| *i)
            .collect();
        indices.sort_unstable();
        indices.dedup();
        for index in indices {
            let diff = self.coefficient(index) - other.coefficient(index);
            if diff.abs() > tolerance {
                return diff > 0.0;
            }
        }
        false
    }
}

/// Steepest tied candidate under the perturbation; candidates lying on the
/// edge line are ignored. `None` when no tied candidate is usable.
fn steepest(points: &[Point], edge: DirectedEdge, tied: &[usize], tolerance: f64) -> Option<usize> {
    tied.iter()
        .filter_map(|&q| Slope::new(points, edge, q, tolerance))
        .fold(None, |best: Option<Slope>, slope| match best {
            Some(b) if !slope.steeper_than(&b, tolerance) => Some(b),
            _ => Some(slope),
        })
        .map(|slope| slope.index)
}

/// Tied points lying on the ray from `origin` through `through`, including
/// `through` itself.
pub(crate) fn on_ray(points: &[Point], origin: usize, through: usize, tied: &[usize], tolerance: f64) -> Vec<usize> {
    let ray = direction(points[origin], points[through]);
    let reach = ray.length();
    tied.iter()
        .copied()
        .filter(|&r| {
            let offset = direction(points[origin], points[r]);
            cross(ray, offset).length() < tolerance * reach && ray.dot(offset) > 0.0
        })
        .collect()
}

/// Steepest of the points on one ray from `origin`: the lowest index when it
/// is below `origin`, whose lift then dominates, otherwise the farthest
/// point, whose negative `h[origin]` coefficient is smallest in magnitude.
pub(crate) fn steepest_on_ray(points: &[Point], origin: usize, ray: &[usize]) -> Option<usize> {
    let lowest = ray.iter().copied().min()?;
    if lowest < origin {
        return Some(lowest);
    }
    ray.iter().copied().max_by(|&a, &b| {
        points[origin]
            .distance_squared(points[a])
            .total_cmp(&points[origin].distance_squared(points[b]))
    })
}
