//! SVG drawing of points and triangle edges.
//!
//! Coordinates are written as-is (SVG is y-down, like the capture surface):
//! points as 2×2 black squares, edges as thin blue lines.

use frontmesh::api::mesh_edges;
use frontmesh::{Mesh, Point2D};
use std::fmt::{self, Write};

const MARGIN: f64 = 10.0;

pub fn render_svg(points: &[Point2D], mesh: &Mesh) -> Result<String, fmt::Error> {
    let mut s = String::new();
    write_svg(&mut s, points, mesh)?;
    Ok(s)
}

fn write_svg(s: &mut impl Write, points: &[Point2D], mesh: &Mesh) -> fmt::Result {
    let (min, max) = bounds(points);
    let (w, h) = (max.x - min.x + 2.0 * MARGIN, max.y - min.y + 2.0 * MARGIN);
    writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        min.x - MARGIN,
        min.y - MARGIN,
        w,
        h,
        w.ceil(),
        h.ceil()
    )?;
    writeln!(
        s,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
        min.x - MARGIN,
        min.y - MARGIN,
        w,
        h
    )?;
    writeln!(s, r#"<g stroke="blue" stroke-width="1" fill="none">"#)?;
    for e in mesh_edges(mesh) {
        writeln!(
            s,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            e.start.x, e.start.y, e.end.x, e.end.y
        )?;
    }
    writeln!(s, "</g>")?;
    writeln!(s, r#"<g fill="black">"#)?;
    for p in points {
        writeln!(s, r#"<rect x="{}" y="{}" width="2" height="2"/>"#, p.x, p.y)?;
    }
    writeln!(s, "</g>")?;
    writeln!(s, "</svg>")
}

fn bounds(points: &[Point2D]) -> (Point2D, Point2D) {
    if points.is_empty() {
        return (Point2D::new(0.0, 0.0), Point2D::new(0.0, 0.0));
    }
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}
