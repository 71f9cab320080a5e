//! # Extremal Point Search
//!
//! Finds the seed face the wrap starts from: three points whose triangle is
//! guaranteed to lie on the hull boundary.
//!
//! 1. The lowest point by tolerance-guarded `(z, y, x)` order.
//! 2. The point whose direction from the first makes the largest angle with
//!    +z, giving the lowest tangent edge.
//! 3. The point whose plane through that edge best aligns with an upward
//!    reference normal, which is the plane with every point on one side.

use config::constants::{CoplanarPolicy, HullConfig};

use super::ties::{leader, on_ray, select_across, steepest_on_ray, tied_with, Candidate};
use crate::core::face::Face;
use crate::core::vec3::{cross, direction, lower_zyx, normalized_dot, unit, Point, Vec3, UNIT_Z};
use crate::error::{HullError, HullResult};

/// Runs the three-step search and returns the seed face.
pub(crate) fn seed_face(points: &[Point], config: &HullConfig) -> HullResult<Face> {
    let first = first_vertex(points, config.tolerance)?;
    let second = second_vertex(points, first, config)?;
    let third = third_vertex(points, first, second, config)?;
    let face = Face::new(first, second, third);
    ensure_solid(points, &face, config.tolerance)?;
    log::debug!("seed face {face} from {} points", points.len());
    Ok(face)
}

/// Lowest point in `(z, y, x)` order; the earliest index wins ties.
pub(crate) fn first_vertex(points: &[Point], tolerance: f64) -> HullResult<usize> {
    if points.is_empty() {
        return Err(HullError::degenerate("no points to seed from"));
    }
    let mut first = 0;
    for (i, p) in points.iter().enumerate() {
        if lower_zyx(*p, points[first], tolerance) {
            first = i;
        }
    }
    Ok(first)
}

/// Point whose direction from `first` has the smallest cosine with +z.
pub(crate) fn second_vertex(points: &[Point], first: usize, config: &HullConfig) -> HullResult<usize> {
    let tolerance = config.tolerance;
    let origin = points[first];
    // Negated so the shared maximum search applies.
    let candidates: Vec<Candidate> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != first)
        .map(|(index, p)| Candidate {
            index,
            score: -normalized_dot(direction(origin, *p), UNIT_Z, tolerance),
        })
        .collect();
    let top = leader(&candidates, tolerance)
        .ok_or_else(|| HullError::degenerate("no second point for the seed edge"))?;
    if config.coplanar == CoplanarPolicy::EncounterOrder {
        return Ok(top.index);
    }
    let tied = tied_with(&candidates, top, tolerance);
    let chosen = boundary_edge(points, first, &tied, tolerance).unwrap_or(top.index);
    let ray = on_ray(points, first, chosen, &tied, tolerance);
    Ok(steepest_on_ray(points, first, &ray).unwrap_or(chosen))
}

/// First tied point `q` such that every other tied point lies on one side of
/// `first -> q` seen from above. When several points share the lowest level
/// this keeps the seed edge on the boundary of that bottom facet rather than
/// across it. Points further along the same ray are settled afterwards by the
/// perturbation.
fn boundary_edge(points: &[Point], first: usize, tied: &[usize], tolerance: f64) -> Option<usize> {
    if tied.len() < 2 {
        return tied.first().copied();
    }
    let origin = points[first];
    tied.iter().copied().find(|&q| {
        let edge = direction(origin, points[q]);
        let sides: Vec<f64> = tied
            .iter()
            .filter(|&&r| r != q)
            .map(|&r| cross(edge, direction(origin, points[r])).z)
            .collect();
        sides.iter().all(|s| *s >= -tolerance) || sides.iter().all(|s| *s <= tolerance)
    })
}

/// Upward normal of the vertical-ish reference plane through the seed edge.
fn reference_normal(edge: Vec3, tolerance: f64) -> HullResult<Vec3> {
    let in_plane = Vec3::new(edge.y, -edge.x, 0.0);
    let normal = unit(cross(in_plane, edge), tolerance)
        .ok_or_else(|| HullError::degenerate("points are collinear along the vertical axis"))?;
    Ok(if normal.z < -tolerance { -normal } else { normal })
}

/// Point whose plane through the seed edge is best aligned with the
/// reference normal. Points on the edge line span no plane and are skipped.
pub(crate) fn third_vertex(
    points: &[Point],
    first: usize,
    second: usize,
    config: &HullConfig,
) -> HullResult<usize> {
    let tolerance = config.tolerance;
    let origin = points[first];
    let edge = direction(origin, points[second]);
    let reference = reference_normal(edge, tolerance)?;
    let candidates: Vec<Candidate> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != first && *i != second)
        .filter_map(|(index, p)| {
            let plane = unit(cross(direction(origin, *p), edge), tolerance)?;
            Some(Candidate {
                index,
                score: normalized_dot(reference, plane, tolerance),
            })
        })
        .collect();
    select_across(points, (first, second), &candidates, config)
        .ok_or_else(|| HullError::degenerate("all points are collinear"))
}

/// Rejects inputs whose points all lie in the seed plane.
fn ensure_solid(points: &[Point], seed: &Face, tolerance: f64) -> HullResult<()> {
    let normal = unit(seed.normal(points), tolerance)
        .ok_or_else(|| HullError::degenerate("seed face has no area; points are collinear"))?;
    let anchor = points[seed.vertices()[0]];
    if points
        .iter()
        .any(|p| normal.dot(direction(anchor, *p)).abs() > tolerance)
    {
        Ok(())
    } else {
        Err(HullError::degenerate("all points are coplanar"))
    }
}
