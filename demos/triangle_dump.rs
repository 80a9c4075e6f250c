//! Print every triangle of a small scattered point set

use grid_voronoi::scatter::uniform_points;
use grid_voronoi::*;

fn main() -> Result<()> {
    let points = uniform_points(12, Vec2::ZERO, Vec2::new(10.0, 10.0), 42);

    let mut diagram = VoronoiDiagram::with_capacity(points.len());
    for (tag, &point) in points.iter().enumerate() {
        println!("generator {:2}: ({:.2}, {:.2})", tag, point.x, point.y);
        diagram.add_generator(point, tag as i32)?;
    }

    diagram.generate(0.25)?;

    let mut unique = std::collections::BTreeSet::new();
    diagram.get_nodes(|a, b, c| {
        unique.insert(Triangle::new(a, b, c).sorted());
    });

    println!("\n{} distinct triangles:", unique.len());
    for [a, b, c] in &unique {
        println!("  {} {} {}", a, b, c);
    }

    Ok(())
}
