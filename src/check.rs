//! Manifest checking for the `nanomind check` command

use nanomind_dsl::{LayerSummary, Manifest, Registry};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of checking one manifest file.
#[derive(Clone, Debug, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<LayerSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.layer, &self.error) {
            (_, Some(error)) => write!(f, "FAIL {}: {}", self.path.display(), error),
            (Some(layer), None) if !layer.complete => {
                write!(f, "ok   {}: {} (incomplete: no nanite template)", self.path.display(), layer)
            }
            (Some(layer), None) => write!(f, "ok   {}: {}", self.path.display(), layer),
            (None, None) => write!(f, "ok   {}", self.path.display()),
        }
    }
}

/// Load a manifest and declare its layer against `registry`.
pub fn check_manifest(path: &Path, registry: &Registry) -> nanomind_core::Result<LayerSummary> {
    let manifest = Manifest::load(path)?;
    let layer = manifest.declare(registry)?;
    Ok(layer.summary())
}

/// Check every manifest, collecting one report per path.
pub fn check_all(paths: &[PathBuf], registry: &Registry) -> Vec<CheckReport> {
    paths
        .iter()
        .map(|path| match check_manifest(path, registry) {
            Ok(summary) => {
                info!("{} declares layer '{}'", path.display(), summary.name);
                CheckReport {
                    path: path.clone(),
                    layer: Some(summary),
                    error: None,
                }
            }
            Err(e) => {
                warn!("{} rejected: {}", path.display(), e);
                CheckReport {
                    path: path.clone(),
                    layer: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}
