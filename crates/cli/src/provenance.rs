use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command wants recorded next to its primary artifact.
pub struct Payload {
    pub params: Value,
    /// Artifacts besides the primary one (e.g. an SVG beside a mesh).
    pub extra_outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            extra_outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.extra_outputs.push(path.into());
        self
    }
}

/// Write `<artifact name>.provenance.json` with code revision, callsite, params and outputs.
///
/// Outputs are recorded relative to the sidecar's directory when they live under it.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let base = absolute(provenance_path.parent().unwrap_or(Path::new(".")))?;
    let mut outputs = Vec::with_capacity(1 + payload.extra_outputs.len());
    let listed = std::iter::once(artifact).chain(payload.extra_outputs.iter().map(PathBuf::as_path));
    for out in listed {
        let out = absolute(out)?;
        let recorded = out.strip_prefix(&base).map(Path::to_path_buf).unwrap_or(out);
        outputs.push(recorded.to_string_lossy().into_owned());
    }
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "lib_version": frontmesh::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "outputs": outputs
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Artifacts listed in a sidecar's `outputs`, resolved against the sidecar's directory.
pub fn read_outputs(sidecar: &Path) -> Result<Vec<PathBuf>> {
    let base = sidecar.parent().unwrap_or(Path::new(""));
    let bytes = fs::read(sidecar).with_context(|| format!("reading {}", sidecar.display()))?;
    let doc: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", sidecar.display()))?;
    Ok(doc["outputs"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(|p| base.join(p)))
                .collect()
        })
        .unwrap_or_default())
}

pub fn is_sidecar(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".provenance.json"))
}

/// `<dir>/<file name>.provenance.json`; the full name keeps `mesh.json` and `mesh.svg` apart.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Canonical path if it exists, else joined onto the working directory.
fn absolute(path: &Path) -> Result<PathBuf> {
    if let Ok(canon) = fs::canonicalize(path) {
        return Ok(canon);
    }
    let cwd = std::env::current_dir().context("resolving working directory")?;
    Ok(cwd.join(path))
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
