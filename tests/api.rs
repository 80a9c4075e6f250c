//! Public API integration tests for grid_voronoi.

use std::collections::HashSet;

use grid_voronoi::config::{particle_radius, triad_edge_limit};
use grid_voronoi::scatter::{jittered_lattice, lattice_in_circle, uniform_points};
use grid_voronoi::{DiagramConfigBuilder, Triangle, Vec2, VoronoiDiagram, VoronoiError};

fn build(points: &[Vec2]) -> VoronoiDiagram {
    let mut diagram = VoronoiDiagram::with_capacity(points.len());
    for (i, &p) in points.iter().enumerate() {
        diagram.add_generator(p, i as i32).unwrap();
    }
    diagram
}

#[test]
fn test_three_generators_form_triangle() {
    let mut diagram = VoronoiDiagram::with_capacity(3);
    diagram.add_generator(Vec2::new(0.0, 0.0), 1).unwrap();
    diagram.add_generator(Vec2::new(4.0, 0.0), 2).unwrap();
    diagram.add_generator(Vec2::new(2.0, 4.0), 3).unwrap();
    diagram.generate(1.0).unwrap();

    let mut found = Vec::new();
    diagram.get_nodes(|a, b, c| found.push(Triangle::new(a, b, c)));

    assert!(
        found.iter().any(|t| t.sorted() == [1, 2, 3]),
        "expected a triangle with tags 1, 2, 3, got {:?}",
        found
    );
}

#[test]
fn test_capacity_enforced() {
    let mut diagram = VoronoiDiagram::with_capacity(2);
    diagram.add_generator(Vec2::new(0.0, 0.0), 1).unwrap();
    diagram.add_generator(Vec2::new(1.0, 0.0), 2).unwrap();

    let result = diagram.add_generator(Vec2::new(2.0, 0.0), 3);
    assert_eq!(result, Err(VoronoiError::CapacityExceeded { capacity: 2 }));
    assert_eq!(diagram.generator_count(), 2);

    // The diagram is still usable
    diagram.generate(0.5).unwrap();
    assert!(diagram.is_generated());
}

#[test]
fn test_single_generator_has_no_triangles() {
    let mut diagram = VoronoiDiagram::with_capacity(1);
    diagram.add_generator(Vec2::new(5.0, 5.0), 42).unwrap();
    diagram.generate(0.1).unwrap();

    let mut calls = 0;
    diagram.get_nodes(|_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_query_is_idempotent() {
    let points = jittered_lattice(8, 6, 1.0, 0.3, 11);
    let mut diagram = build(&points);
    diagram.generate(0.5).unwrap();

    let mut first = Vec::new();
    diagram.get_nodes(|a, b, c| first.push([a, b, c]));
    let mut second = Vec::new();
    diagram.get_nodes(|a, b, c| second.push([a, b, c]));

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_identical_input_is_deterministic() {
    let points = uniform_points(60, Vec2::ZERO, Vec2::new(10.0, 6.0), 2024);

    let mut a = build(&points);
    let mut b = build(&points);
    a.generate(0.25).unwrap();
    b.generate(0.25).unwrap();

    assert_eq!(a.stats(), b.stats());
    assert_eq!(a.triangles(), b.triangles());
}

#[test]
fn test_triangles_reference_distinct_generators() {
    let points = uniform_points(80, Vec2::ZERO, Vec2::new(12.0, 12.0), 7);
    let mut diagram = build(&points);
    diagram.generate(0.3).unwrap();

    let triangles = diagram.triangles();
    assert!(!triangles.is_empty());
    for t in &triangles {
        assert!(t.a != t.b && t.b != t.c && t.a != t.c, "degenerate {:?}", t);
        for tag in t.tags() {
            assert!((0..80).contains(&tag));
        }
    }
}

#[test]
fn test_lattice_group_is_fully_connected() {
    // A particle group laid out at the particle stride, generated at half stride
    let diameter = 1.0;
    let stride = 0.75 * diameter;
    let points = lattice_in_circle(Vec2::new(2.0, 3.0), 3.0, stride);
    let mut diagram = build(&points);
    diagram.generate(particle_radius(diameter)).unwrap();

    let stats = diagram.stats().unwrap();
    assert!(stats.converged);

    // Every particle takes part in at least one triad
    let mut seen = HashSet::new();
    diagram.get_nodes(|a, b, c| {
        seen.insert(a);
        seen.insert(b);
        seen.insert(c);
    });
    assert_eq!(seen.len(), points.len());
}

#[test]
fn test_edge_limit_filters_long_triangles() {
    let diameter = 0.5;
    let points = jittered_lattice(10, 10, 0.75 * diameter, 0.2, 3);
    let mut diagram = build(&points);
    diagram.generate(particle_radius(diameter)).unwrap();

    let limit = triad_edge_limit(diameter);
    let mut kept = Vec::new();
    diagram.get_nodes_within(limit, |a, b, c| kept.push([a, b, c]));

    assert!(!kept.is_empty());
    assert!(kept.len() <= diagram.triangles().len());
    for [a, b, c] in kept {
        let (pa, pb, pc) = (points[a as usize], points[b as usize], points[c as usize]);
        assert!(pa.distance(pb) < limit);
        assert!(pb.distance(pc) < limit);
        assert!(pc.distance(pa) < limit);
    }

    // A tiny limit drops everything
    let mut calls = 0;
    diagram.get_nodes_within(0.01, |_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_generate_errors() {
    let mut empty = VoronoiDiagram::with_capacity(4);
    assert_eq!(empty.generate(1.0), Err(VoronoiError::NoGenerators));

    let mut diagram = build(&[Vec2::ZERO, Vec2::ONE]);
    assert!(matches!(diagram.generate(0.0), Err(VoronoiError::InvalidConfig(_))));
    assert!(matches!(diagram.generate(-2.0), Err(VoronoiError::InvalidConfig(_))));
    assert!(matches!(diagram.generate(f32::NAN), Err(VoronoiError::InvalidConfig(_))));

    diagram.generate(0.5).unwrap();
    assert_eq!(diagram.generate(0.5), Err(VoronoiError::AlreadyGenerated));
}

#[test]
fn test_grid_size_limit() {
    let mut diagram = build(&[Vec2::ZERO, Vec2::new(100.0, 100.0)]);
    let config = DiagramConfigBuilder::new()
        .radius(0.01)
        .unwrap()
        .max_cells(10_000)
        .unwrap()
        .build()
        .unwrap();

    assert!(matches!(
        diagram.generate_with_config(&config),
        Err(VoronoiError::InvalidConfig(_))
    ));
    assert!(!diagram.is_generated());
}

#[test]
fn test_round_cap_is_honoured() {
    let points = uniform_points(40, Vec2::ZERO, Vec2::new(20.0, 20.0), 99);
    let mut diagram = build(&points);
    let config = DiagramConfigBuilder::new()
        .radius(0.25)
        .unwrap()
        .max_relaxation_rounds(1)
        .unwrap()
        .build()
        .unwrap();
    diagram.generate_with_config(&config).unwrap();

    assert_eq!(diagram.stats().unwrap().relaxation_rounds, 1);
}

#[test]
fn test_coincident_generators() {
    let mut diagram = VoronoiDiagram::with_capacity(3);
    diagram.add_generator(Vec2::new(1.0, 1.0), 1).unwrap();
    diagram.add_generator(Vec2::new(1.0, 1.0), 2).unwrap();
    diagram.add_generator(Vec2::new(3.0, 1.0), 3).unwrap();
    diagram.generate(0.5).unwrap();

    for t in diagram.triangles() {
        assert!(t.a != t.b && t.b != t.c && t.a != t.c);
    }
}

#[cfg(feature = "spatial-index")]
#[test]
fn test_separated_pair_is_exact() {
    let mut diagram = VoronoiDiagram::with_capacity(2);
    diagram.add_generator(Vec2::new(0.0, 0.0), 1).unwrap();
    diagram.add_generator(Vec2::new(20.0, 0.0), 2).unwrap();
    diagram.generate(1.0).unwrap();

    let report = diagram.validate_ownership().unwrap();
    assert_eq!(report.cells, 21);
    assert!(report.is_exact(), "{:?}", report);
}

#[cfg(feature = "spatial-index")]
#[test]
fn test_scattered_points_close_to_exact() {
    let points = uniform_points(30, Vec2::ZERO, Vec2::new(30.0, 30.0), 5);
    let mut diagram = build(&points);
    diagram.generate(0.5).unwrap();

    let report = diagram.validate_ownership().unwrap();
    assert_eq!(report.cells, diagram.stats().unwrap().cell_count());
    assert!(report.mismatch_ratio() < 0.1, "{:?}", report);
}

#[cfg(feature = "spatial-index")]
#[test]
fn test_validate_before_generate() {
    let diagram = build(&[Vec2::ZERO]);
    assert!(diagram.validate_ownership().is_none());
}
