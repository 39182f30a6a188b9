use horizon_detector::config::{load_config, DemoConfig};
use horizon_detector::image::io::{load_rgb_image, write_json_file};
use horizon_detector::image::render::draw_horizon;
use horizon_detector::types::DetectionReport;
use horizon_detector::HorizonDetector;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const OVERLAY_COLOR: [u8; 3] = [255, 0, 0];
const OVERLAY_THICKNESS: u32 = 2;
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "tiff"];

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let paths = collect_image_paths(&config.input)?;
    if paths.is_empty() {
        return Err(format!("No images found under {}", config.input.display()));
    }
    println!("Found {} image(s)", paths.len());

    let summaries = process_all(&paths, &config);

    let mut images = Vec::with_capacity(summaries.len());
    for (path, summary) in paths.iter().zip(summaries) {
        match summary {
            Ok(entry) => {
                println!(
                    "{}: {:?} ({} segments, {} candidates)",
                    path.display(),
                    entry.report.detection,
                    entry.report.segments,
                    entry.report.candidates
                );
                images.push(entry);
            }
            Err(err) => eprintln!("{}: {err}", path.display()),
        }
    }

    let summary = BatchSummary {
        processed: images.len(),
        found: images
            .iter()
            .filter(|s| s.report.detection.is_found())
            .count(),
        images,
    };
    write_json_file(&config.output.report_json, &summary)?;
    println!(
        "Saved report for {} image(s) ({} with a horizon) to {}",
        summary.processed,
        summary.found,
        config.output.report_json.display()
    );
    Ok(())
}

fn process_image(path: &Path, config: &DemoConfig) -> Result<ImageSummary, String> {
    let buffer = load_rgb_image(path)?;
    let detector = HorizonDetector::new(config.params.clone());
    let report = detector
        .detect_with_diagnostics(buffer.as_view())
        .map_err(|e| e.to_string())?;

    let overlay = match report.detection.horizon() {
        Some(line) => {
            let mut out = buffer.clone();
            draw_horizon(&mut out, line, OVERLAY_COLOR, OVERLAY_THICKNESS);
            let overlay_path = overlay_path_for(path, &config.output.overlay_dir);
            out.save_png(&overlay_path)?;
            Some(overlay_path.display().to_string())
        }
        None => None,
    };

    Ok(ImageSummary {
        path: path.display().to_string(),
        overlay,
        report,
    })
}

#[cfg(feature = "parallel")]
fn process_all(paths: &[PathBuf], config: &DemoConfig) -> Vec<Result<ImageSummary, String>> {
    use rayon::prelude::*;
    paths
        .par_iter()
        .map(|path| process_image(path, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn process_all(paths: &[PathBuf], config: &DemoConfig) -> Vec<Result<ImageSummary, String>> {
    paths.iter().map(|path| process_image(path, config)).collect()
}

fn collect_image_paths(input: &Path) -> Result<Vec<PathBuf>, String> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(format!("Input {} does not exist", input.display()));
    }
    let mut paths: Vec<PathBuf> = fs::read_dir(input)
        .map_err(|e| format!("Failed to read {}: {e}", input.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| has_image_extension(p))
        .collect();
    paths.sort();
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn overlay_path_for(input: &Path, overlay_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    overlay_dir.join(format!("{stem}_horizon.png"))
}

fn usage() -> String {
    "Usage: horizon_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSummary {
    path: String,
    /// Overlay PNG path, present only when a horizon was found.
    overlay: Option<String>,
    report: DetectionReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSummary {
    processed: usize,
    /// Number of images where a horizon was found.
    found: usize,
    images: Vec<ImageSummary>,
}
