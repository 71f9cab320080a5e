//! # Face Pivot
//!
//! Unfolds a hull face around one of its edges to find the neighbouring face.

use config::constants::{CoplanarPolicy, HullConfig};

use super::ties::{select_across, Candidate};
use crate::core::face::{EdgeSelector, Face};
use crate::core::vec3::{cross, direction, normalized_dot, unit, Point};
use crate::error::{HullError, HullResult};

/// Returns the hull face sharing the selected edge of `face`.
///
/// With the edge relabelled `(p0, p1)` and opposite vertex `p2`, the face
/// normal is `cross(unit(p1 - p0), unit(p2 - p1))`. Each other point `q`
/// spans a candidate plane through the edge with normal
/// `cross(-(p1 - p0), q - p0)`; the plane with the smallest dihedral angle
/// to the face normal (largest cosine) wins. The new face is `(p1, p0, q)`,
/// so the shared edge runs the opposite way and orientation carries over.
///
/// Under [`CoplanarPolicy::Perturbed`] points on the edge line are not
/// candidates; joining one would give a face with no area.
pub(crate) fn pivot(
    points: &[Point],
    face: &Face,
    selector: EdgeSelector,
    config: &HullConfig,
) -> HullResult<Face> {
    let tolerance = config.tolerance;
    let (p0, p1, p2) = selector.relabel(face);
    let no_candidate = || HullError::NoPivotCandidate { from: p0, to: p1 };

    let first_edge = unit(direction(points[p0], points[p1]), tolerance).ok_or_else(no_candidate)?;
    let second_edge = unit(direction(points[p1], points[p2]), tolerance).ok_or_else(no_candidate)?;
    let normal = cross(first_edge, second_edge);

    let skip_edge_line = config.coplanar == CoplanarPolicy::Perturbed;
    let candidates: Vec<Candidate> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| !face.contains(*i))
        .filter_map(|(index, p)| {
            let plane = cross(-first_edge, direction(points[p0], *p));
            if skip_edge_line && plane.length() < tolerance {
                return None;
            }
            Some(Candidate {
                index,
                score: normalized_dot(plane, normal, tolerance),
            })
        })
        .collect();

    let third = select_across(points, (p0, p1), &candidates, config).ok_or_else(no_candidate)?;
    log::trace!("pivot {face} across ({p0}, {p1}) -> {third}");
    Ok(Face::new(p1, p0, third))
}
