//! JSON configuration for the demo tool.
use crate::detector::HorizonParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration consumed by `horizon_demo`.
#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    /// An image file or a directory of images to scan.
    pub input: PathBuf,
    #[serde(default)]
    pub params: HorizonParams,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    /// Directory receiving one overlay PNG per processed image.
    pub overlay_dir: PathBuf,
    /// Path of the JSON summary report.
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
