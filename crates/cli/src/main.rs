mod io;
mod provenance;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use frontmesh::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use crate::io::{MeshDoc, StatsDoc};
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "frontmesh-cli")]
#[command(about = "Advancing-front triangulation of 2D point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SampleKind {
    Uniform,
    Grid,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a point file (JSON or CSV) and write the mesh
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also draw the result as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Abort when the frontier has not closed after this many steps (0 = no cap)
        #[arg(long, default_value_t = 1_000_000)]
        max_steps: usize,
        /// Circumcenter degeneracy threshold
        #[arg(long, default_value_t = frontmesh::geom::EPS_CIRCUM)]
        eps: f64,
    },
    /// Write a reproducible point set
    Sample {
        #[arg(long, default_value_t = 50)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = SampleKind::Uniform)]
        kind: SampleKind,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw an existing mesh file as SVG
    Render {
        #[arg(long)]
        mesh: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Remove artifacts recorded by provenance sidecars in a directory
    Clear {
        #[arg(long)]
        dir: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate {
            input,
            out,
            svg,
            max_steps,
            eps,
        } => {
            let cfg = TriCfg {
                eps_circum: eps,
                max_steps: (max_steps > 0).then_some(max_steps),
            };
            triangulate_cmd(&input, &out, svg.as_deref(), cfg)
        }
        Action::Sample {
            count,
            seed,
            index,
            kind,
            out,
        } => sample_cmd(count, ReplayToken::new(seed, index), kind, &out),
        Action::Render { mesh, out } => render_cmd(&mesh, &out),
        Action::Clear { dir } => clear_cmd(&dir).map(|_| ()),
        Action::Report => report(),
    }
}

fn triangulate_cmd(input: &Path, out: &Path, svg: Option<&Path>, cfg: TriCfg) -> Result<()> {
    let points = io::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "triangulate");
    if points.len() < 3 {
        bail!("please add at least three points for triangulation");
    }

    let mut run = FrontRun::new(&points, cfg).context("could not initialize triangulation")?;
    let hull = run.hull().len();
    while run.step()? != Step::Done {}
    let s = run.stats();
    let mesh = run.run_to_end()?;
    let stats = StatsDoc {
        hull,
        steps: s.steps,
        emitted: s.emitted,
        discarded: s.discarded,
    };
    tracing::info!(triangles = mesh.len(), steps = s.steps, hull, "mesh ready");

    io::write_json(out, &MeshDoc::new(&points, &mesh, Some(stats)))?;
    let mut payload = Payload::new(serde_json::json!({
        "command": "triangulate",
        "input": input.to_string_lossy(),
        "points": points.len(),
        "eps_circum": cfg.eps_circum,
        "max_steps": cfg.max_steps,
        "stats": stats,
    }));
    if let Some(svg) = svg {
        io::write_bytes(svg, render::render_svg(&points, &mesh)?.as_bytes())?;
        payload = payload.with_output(svg);
    }
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn sample_cmd(count: usize, tok: ReplayToken, kind: SampleKind, out: &Path) -> Result<()> {
    tracing::info!(count, seed = tok.seed, index = tok.index, ?kind, "sample");
    let bounds = Bounds2::default();
    let points = match kind {
        SampleKind::Uniform => uniform_in_box(count, bounds, tok),
        SampleKind::Grid => {
            let side = (count as f64).sqrt().ceil().max(2.0) as usize;
            jittered_grid(side, side, bounds, 0.3, tok)
        }
    };
    let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    io::write_json(out, &pairs)?;
    provenance::write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "sample",
            "count": points.len(),
            "seed": tok.seed,
            "index": tok.index,
            "kind": format!("{kind:?}").to_lowercase(),
        })),
    )?;
    Ok(())
}

fn render_cmd(mesh_path: &Path, out: &Path) -> Result<()> {
    tracing::info!(mesh = %mesh_path.display(), out = %out.display(), "render");
    let doc = io::read_mesh(mesh_path)?;
    let svg = render::render_svg(&doc.points(), &doc.mesh())?;
    io::write_bytes(out, svg.as_bytes())?;
    provenance::write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "render",
            "mesh": mesh_path.to_string_lossy(),
        })),
    )?;
    Ok(())
}

/// Delete every artifact listed by a sidecar in `dir`, then the sidecar. Returns files removed.
///
/// A sidecar that lists an artifact which cannot be found is kept.
fn clear_cmd(dir: &Path) -> Result<usize> {
    let mut removed = 0usize;
    let entries = fs::read_dir(dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .map(|e| e.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    for path in entries {
        if !provenance::is_sidecar(&path) {
            continue;
        }
        let mut missing = 0usize;
        for artifact in provenance::read_outputs(&path)? {
            if artifact.exists() {
                fs::remove_file(&artifact)
                    .with_context(|| format!("removing {}", artifact.display()))?;
                removed += 1;
            } else {
                tracing::warn!(artifact = %artifact.display(), "listed artifact not found");
                missing += 1;
            }
        }
        if missing > 0 {
            tracing::warn!(sidecar = %path.display(), missing, "keeping sidecar");
            continue;
        }
        fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
        removed += 1;
    }
    tracing::info!(dir = %dir.display(), removed, "clear");
    Ok(removed)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": frontmesh::VERSION,
        "defaults": {
            "eps_circum": TriCfg::default().eps_circum,
            "max_steps": TriCfg::default().max_steps,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
