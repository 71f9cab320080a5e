//! # Gift Wrapping Tests
//!
//! Known hulls, degenerate inputs and the step-by-step driver.

use super::*;
use config::constants::CoplanarPolicy;

fn faces(list: &[(usize, usize, usize)]) -> Vec<Face> {
    list.iter().map(|&(a, b, c)| Face::new(a, b, c)).collect()
}

fn tetrahedron() -> Vec<Point> {
    vec![Point::ZERO, Point::X, Point::Y, Point::Z]
}

/// Cube corners listed around the bottom square, then around the top.
fn ring_cube() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
    ]
}

/// Cube corners in binary order: index bits are (x, y, z).
fn binary_cube() -> Vec<Point> {
    let mut points = Vec::new();
    for x in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for z in [0.0, 1.0] {
                points.push(Point::new(x, y, z));
            }
        }
    }
    points
}

fn encounter_order() -> HullConfig {
    HullConfig::default().with_coplanar(CoplanarPolicy::EncounterOrder)
}

// =============================================================================
// KNOWN HULLS
// =============================================================================

#[test]
fn test_tetrahedron() {
    let hull = build_hull(&tetrahedron(), &HullConfig::default()).unwrap();
    assert_eq!(hull.faces(), faces(&[(0, 1, 3), (0, 2, 1), (0, 3, 2), (1, 2, 3)]));
    assert_eq!(hull.point_count(), 4);
}

#[test]
fn test_tetrahedron_same_under_both_policies() {
    let a = build_hull(&tetrahedron(), &HullConfig::default()).unwrap();
    let b = build_hull(&tetrahedron(), &encounter_order()).unwrap();
    assert_eq!(a, b);
}

/// Every vertex of a tetrahedron touches three faces.
#[test]
fn test_tetrahedron_vertex_degrees() {
    let hull = build_hull(&tetrahedron(), &HullConfig::default()).unwrap();
    for v in 0..4 {
        assert_eq!(hull.faces().iter().filter(|f| f.contains(v)).count(), 3);
    }
}

#[test]
fn test_ring_cube() {
    let hull = build_hull(&ring_cube(), &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[
            (0, 1, 5),
            (0, 2, 1),
            (0, 3, 2),
            (0, 4, 7),
            (0, 5, 4),
            (0, 7, 3),
            (1, 2, 6),
            (1, 6, 5),
            (2, 3, 7),
            (2, 7, 6),
            (4, 5, 6),
            (4, 6, 7),
        ])
    );
}

/// Two triangles per square side, 36 face slots over 8 corners, and each
/// corner reaching all three sides it belongs to.
#[test]
fn test_cube_face_structure() {
    let points = ring_cube();
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(hull.face_count(), 12);

    let slots: usize = (0..8)
        .map(|v| hull.faces().iter().filter(|f| f.contains(v)).count())
        .inspect(|&degree| assert!(degree >= 3))
        .sum();
    assert_eq!(slots, 36);

    for face in hull.faces() {
        let normal = face.normal(&points).normalize();
        let axis_aligned = [normal.x, normal.y, normal.z]
            .iter()
            .filter(|c| c.abs() > 0.5)
            .count();
        assert_eq!(axis_aligned, 1);
    }
}

#[test]
fn test_binary_cube_perturbed() {
    let hull = build_hull(&binary_cube(), &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[
            (0, 1, 3),
            (0, 2, 6),
            (0, 3, 2),
            (0, 4, 5),
            (0, 5, 1),
            (0, 6, 4),
            (1, 5, 7),
            (1, 7, 3),
            (2, 3, 7),
            (2, 7, 6),
            (4, 6, 7),
            (4, 7, 5),
        ])
    );
}

#[test]
fn test_binary_cube_encounter_order() {
    let hull = build_hull(&binary_cube(), &encounter_order()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[
            (0, 1, 2),
            (0, 2, 4),
            (0, 4, 1),
            (1, 3, 2),
            (1, 4, 5),
            (1, 5, 3),
            (2, 3, 6),
            (2, 6, 4),
            (3, 5, 7),
            (3, 7, 6),
            (4, 6, 5),
            (5, 6, 7),
        ])
    );
}

/// Encounter-order ties triangulate the bottom square across one diagonal
/// from one side and across the other from the next, so the wrap cannot
/// close.
#[test]
fn test_ring_cube_encounter_order_fails_loudly() {
    let err = build_hull(&ring_cube(), &encounter_order()).unwrap_err();
    assert!(err.is_invariant_violation(), "unexpected error: {err}");
}

#[test]
fn test_octahedron() {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[
            (0, 2, 4),
            (0, 3, 5),
            (0, 4, 3),
            (0, 5, 2),
            (1, 2, 5),
            (1, 3, 4),
            (1, 4, 2),
            (1, 5, 3),
        ])
    );
}

#[test]
fn test_triangular_prism() {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(1.0, 2.0, 0.0),
        Point::new(0.0, 0.0, 3.0),
        Point::new(2.0, 0.0, 3.0),
        Point::new(1.0, 2.0, 3.0),
    ];
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[
            (0, 1, 4),
            (0, 2, 1),
            (0, 3, 5),
            (0, 4, 3),
            (0, 5, 2),
            (1, 2, 5),
            (1, 5, 4),
            (3, 4, 5),
        ])
    );
}

#[test]
fn test_interior_point_excluded() {
    let mut points = tetrahedron();
    points.push(Point::splat(0.1));
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(hull.faces(), faces(&[(0, 1, 3), (0, 2, 1), (0, 3, 2), (1, 2, 3)]));
    assert!(!hull.vertex_indices().contains(&4));
}

#[test]
fn test_cube_centre_excluded() {
    let mut points = ring_cube();
    points.push(Point::splat(0.5));
    let with_centre = build_hull(&points, &HullConfig::default()).unwrap();
    let without = build_hull(&ring_cube(), &HullConfig::default()).unwrap();
    assert_eq!(with_centre.faces(), without.faces());
    assert_eq!(with_centre.point_count(), 9);
}

/// Square pyramid base `0 2 3 4` with point 1 halfway along side (0, 2).
fn pyramid_with_edge_midpoint() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
        Point::new(2.0, 2.0, 0.0),
        Point::new(1.0, 1.0, 2.0),
    ]
}

/// The midpoint carries a higher index than both ends of its edge, so the
/// perturbation keeps it off the hull and no face degenerates.
#[test]
fn test_edge_midpoint_dropped() {
    let points = pyramid_with_edge_midpoint();
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[(0, 2, 5), (0, 3, 4), (0, 4, 2), (0, 5, 3), (2, 4, 5), (3, 5, 4)])
    );
    assert!(check_convex(&points, hull.faces(), 1e-9).is_ok());
}

/// Same square as the top facet, apex below, midpoint listed between the
/// ends of its edge.
#[test]
fn test_edge_midpoint_on_top_facet_dropped() {
    let points = vec![
        Point::new(0.0, 0.0, 2.0),
        Point::new(2.0, 0.0, 2.0),
        Point::new(1.0, 0.0, 2.0),
        Point::new(0.0, 2.0, 2.0),
        Point::new(2.0, 2.0, 2.0),
        Point::new(1.0, 1.0, 0.0),
    ];
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[(0, 1, 4), (0, 3, 5), (0, 4, 3), (0, 5, 1), (1, 5, 4), (3, 4, 5)])
    );
    assert!(check_convex(&points, hull.faces(), 1e-9).is_ok());
}

/// With the midpoint first it outranks both corners and becomes a vertex
/// splitting the side triangle and the base.
#[test]
fn test_edge_midpoint_with_lowest_index_kept() {
    let mut points = pyramid_with_edge_midpoint();
    points.swap(0, 1);
    let hull = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(
        hull.faces(),
        faces(&[
            (0, 1, 3),
            (0, 2, 5),
            (0, 3, 4),
            (0, 4, 2),
            (0, 5, 1),
            (1, 5, 3),
            (2, 4, 5),
            (3, 5, 4),
        ])
    );
    assert!(check_convex(&points, hull.faces(), 1e-9).is_ok());
}

/// Encounter order joins the midpoint to its own edge; the sliver is
/// reported instead of returned.
#[test]
fn test_edge_midpoint_sliver_under_encounter_order() {
    let err = build_hull(&pyramid_with_edge_midpoint(), &encounter_order()).unwrap_err();
    assert_eq!(err, HullError::degenerate("face (0, 2, 1) has no area"));
    assert!(!err.is_invariant_violation());
}

#[test]
fn test_hull_is_deterministic() {
    let points = ring_cube();
    let a = build_hull(&points, &HullConfig::default()).unwrap();
    let b = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hull_display() {
    let hull = build_hull(&tetrahedron(), &HullConfig::default()).unwrap();
    assert_eq!(hull.to_string(), "4\n3 0 1 3\n3 0 2 1\n3 0 3 2\n3 1 2 3\n");
}

#[test]
fn test_hull_serializes_faces_as_triples() {
    let hull = build_hull(&tetrahedron(), &HullConfig::default()).unwrap();
    let json = serde_json::to_string(&hull).unwrap();
    assert_eq!(
        json,
        r#"{"point_count":4,"faces":[[0,1,3],[0,2,1],[0,3,2],[1,2,3]]}"#
    );
}

// =============================================================================
// INVALID INPUT
// =============================================================================

#[test]
fn test_too_few_points() {
    let points = [Point::ZERO, Point::X, Point::Y];
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert_eq!(
        err,
        HullError::TooFewPoints {
            count: 3,
            required: 4
        }
    );
}

#[test]
fn test_too_many_points() {
    let config = HullConfig::default().with_max_points(4).unwrap();
    let mut points = tetrahedron();
    points.push(Point::splat(0.1));
    let err = build_hull(&points, &config).unwrap_err();
    assert_eq!(err, HullError::TooManyPoints { count: 5, max: 4 });
}

#[test]
fn test_non_finite_point() {
    let mut points = tetrahedron();
    points[2].y = f64::NAN;
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert_eq!(err, HullError::NonFinitePoint { index: 2 });
}

#[test]
fn test_duplicate_points() {
    let mut points = tetrahedron();
    points.push(Point::new(1.0, 0.0, 1e-12));
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert_eq!(err, HullError::DuplicatePoints { first: 1, second: 4 });
}

#[test]
fn test_coplanar_points() {
    let points = [
        Point::ZERO,
        Point::X,
        Point::Y,
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.5, 0.2, 0.0),
    ];
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert!(matches!(err, HullError::Degenerate(_)));
}

#[test]
fn test_collinear_points() {
    let points: Vec<Point> = (0..6).map(|i| Point::splat(f64::from(i))).collect();
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert!(matches!(err, HullError::Degenerate(_)));
}

#[test]
fn test_invalid_tolerance() {
    let config = HullConfig {
        tolerance: -1.0,
        ..HullConfig::default()
    };
    let err = build_hull(&tetrahedron(), &config).unwrap_err();
    assert!(matches!(err, HullError::Config(_)));
}

// =============================================================================
// DRIVER
// =============================================================================

#[test]
fn test_builder_phases() {
    let points = tetrahedron();
    let mut builder = HullBuilder::new(&points, &HullConfig::default()).unwrap();
    assert_eq!(builder.phase(), Phase::Seeding);

    assert_eq!(builder.step().unwrap(), Phase::Expanding);
    assert_eq!(builder.wavefront().len(), 3);
    assert!(builder.faces().is_empty());

    // Expanding the seed pivots across all three of its edges.
    assert_eq!(builder.step().unwrap(), Phase::Expanding);
    assert_eq!(builder.faces(), &[Face::new(0, 1, 3)]);
    assert!(builder.wavefront().is_empty());

    let mut steps = 0;
    while builder.step().unwrap() != Phase::Done {
        steps += 1;
    }
    assert_eq!(steps, 3);
    assert_eq!(builder.faces().len(), 4);
    assert_eq!(builder.step().unwrap(), Phase::Done);
}

#[test]
fn test_seed_is_idempotent() {
    let points = tetrahedron();
    let mut builder = HullBuilder::new(&points, &HullConfig::default()).unwrap();
    let first = builder.seed().unwrap();
    let again = builder.seed().unwrap();
    assert_eq!(first, Face::new(0, 1, 3));
    assert_eq!(first, again);
    assert_eq!(builder.wavefront().len(), 3);
}

#[test]
fn test_seed_face_of_octahedron() {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let mut builder = HullBuilder::new(&points, &HullConfig::default()).unwrap();
    assert_eq!(builder.seed().unwrap(), Face::new(5, 0, 3));
}
