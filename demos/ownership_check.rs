//! Compare the grid partition against exact nearest-generator ownership
//! at several cell sizes

use grid_voronoi::scatter::jittered_lattice;
use grid_voronoi::*;

fn main() -> Result<()> {
    let points = jittered_lattice(12, 12, 1.0, 0.4, 7);

    println!("{:>8} {:>10} {:>8} {:>12} {:>10}", "radius", "cells", "rounds", "mismatched", "ratio");
    for radius in [1.0, 0.5, 0.25, 0.1] {
        let mut diagram = VoronoiDiagram::with_capacity(points.len());
        for (tag, &point) in points.iter().enumerate() {
            diagram.add_generator(point, tag as i32)?;
        }
        diagram.generate(radius)?;

        let (Some(stats), Some(report)) = (diagram.stats(), diagram.validate_ownership()) else {
            continue;
        };
        println!(
            "{:>8} {:>10} {:>8} {:>12} {:>9.2}%",
            radius,
            stats.cell_count(),
            stats.relaxation_rounds,
            report.mismatched,
            report.mismatch_ratio() * 100.0
        );
    }

    Ok(())
}
