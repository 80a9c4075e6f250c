//! Build triads for a circular particle group
//!
//! Mirrors what a particle system does when a group is created with
//! elastic particles: lay the particles out at the particle stride, partition
//! at half the stride and keep triangles whose edges are short enough.

use grid_voronoi::config::{particle_radius, triad_edge_limit, PARTICLE_STRIDE};
use grid_voronoi::scatter::lattice_in_circle;
use grid_voronoi::*;

fn main() -> Result<()> {
    let diameter = 0.2;
    let positions = lattice_in_circle(Vec2::new(0.0, 4.0), 1.5, PARTICLE_STRIDE * diameter);
    println!("Particle group with {} particles", positions.len());

    let mut diagram = VoronoiDiagram::with_capacity(positions.len());
    for (index, &position) in positions.iter().enumerate() {
        diagram.add_generator(position, index as i32)?;
    }

    let config = DiagramConfigBuilder::new()
        .particle_diameter(diameter)?
        .build()?;
    diagram.generate_with_config(&config)?;

    if let Some(stats) = diagram.stats() {
        println!(
            "Grid {}x{} ({} cells), {} relaxation rounds, {} reassignments, converged={}",
            stats.count_x,
            stats.count_y,
            stats.cell_count(),
            stats.relaxation_rounds,
            stats.reassignments,
            stats.converged
        );
    }

    let mut triads = Vec::new();
    diagram.get_nodes_within(triad_edge_limit(diameter), |a, b, c| triads.push([a, b, c]));
    println!(
        "{} triads (radius {}, {} raw triangles)",
        triads.len(),
        particle_radius(diameter),
        diagram.triangles().len()
    );

    for triad in triads.iter().take(5) {
        println!("  {:?}", triad);
    }

    Ok(())
}
