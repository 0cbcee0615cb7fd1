//! Point capture (JSON / CSV) and mesh documents.

use anyhow::{bail, Context, Result};
use frontmesh::{Mesh, Point2D, Triangle};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A point as it may appear in an input file: `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<PointRepr> for Point2D {
    fn from(p: PointRepr) -> Self {
        match p {
            PointRepr::Pair([x, y]) => Point2D::new(x, y),
            PointRepr::Named { x, y } => Point2D::new(x, y),
        }
    }
}

/// A bare array of points, or an object with a `points` array (mesh documents qualify).
#[derive(Deserialize)]
#[serde(untagged)]
enum PointsDoc {
    Bare(Vec<PointRepr>),
    Wrapped { points: Vec<PointRepr> },
}

/// Per-run counters written next to the mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDoc {
    pub hull: usize,
    pub steps: usize,
    pub emitted: usize,
    pub discarded: usize,
}

/// Mesh file: input points in order plus triangles in emission order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDoc {
    pub points: Vec<[f64; 2]>,
    pub triangles: Vec<[[f64; 2]; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsDoc>,
}

impl MeshDoc {
    pub fn new(points: &[Point2D], mesh: &Mesh, stats: Option<StatsDoc>) -> Self {
        Self {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            triangles: mesh
                .iter()
                .map(|t| t.vertices().map(|v| [v.x, v.y]))
                .collect(),
            stats,
        }
    }

    pub fn points(&self) -> Vec<Point2D> {
        self.points.iter().map(|&[x, y]| Point2D::new(x, y)).collect()
    }

    pub fn mesh(&self) -> Mesh {
        let mut mesh = Mesh::new();
        for [a, b, c] in &self.triangles {
            mesh.push(Triangle::new(
                Point2D::new(a[0], a[1]),
                Point2D::new(b[0], b[1]),
                Point2D::new(c[0], c[1]),
            ));
        }
        mesh
    }
}

/// Read points from `.csv` (columns `x`, `y`) or JSON (anything else).
pub fn read_points(path: &Path) -> Result<Vec<Point2D>> {
    let is_csv = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_points_csv(path)
    } else {
        read_points_json(path)
    }
}

fn read_points_json(path: &Path) -> Result<Vec<Point2D>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PointsDoc = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    let raw = match doc {
        PointsDoc::Bare(v) | PointsDoc::Wrapped { points: v } => v,
    };
    Ok(raw.into_iter().map(Point2D::from).collect())
}

fn read_points_csv(path: &Path) -> Result<Vec<Point2D>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point2D::new(x, y)),
            _ => bail!("{}: row {row} is missing a coordinate", path.display()),
        }
    }
    Ok(out)
}

pub fn read_mesh(path: &Path) -> Result<MeshDoc> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing mesh {}", path.display()))
}

/// Create parent directories as needed and write `bytes`.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_bytes(path, &serde_json::to_vec_pretty(value)?)
}
