//! Client for the remote defect-detection service. The upload runs on a
//! worker thread so the UI never blocks; the app polls the channel each frame.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{info, warn};
use thiserror::Error;

use crate::models::{DetectResponse, Detection};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const BASE_URL_ENV: &str = "PCB_PERFECT_API";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read image file: {0}")]
    File(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("detection service returned {0}")]
    Status(reqwest::StatusCode),
}

pub fn base_url() -> String {
    base_url_from(std::env::var(BASE_URL_ENV).ok())
}

fn base_url_from(var: Option<String>) -> String {
    var.unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn request_url(base: &str, confidence_threshold: f32) -> String {
    format!("{base}/detect-defects?confidence_threshold={confidence_threshold}")
}

/// Handle to an in-flight detection request. `generation` ties the response
/// back to the image it was issued for, so stale results can be dropped.
pub struct PendingDetection {
    pub generation: u64,
    receiver: Receiver<Result<Vec<Detection>, ApiError>>,
}

impl PendingDetection {
    pub(crate) fn new(
        generation: u64,
        receiver: Receiver<Result<Vec<Detection>, ApiError>>,
    ) -> Self {
        Self {
            generation,
            receiver,
        }
    }

    pub fn try_take(&self) -> Option<Result<Vec<Detection>, ApiError>> {
        self.receiver.try_recv().ok()
    }
}

/// Uploads the image and returns immediately. The `egui::Context` clone is
/// only used to request a repaint once the response lands.
pub fn detect_defects(
    path: PathBuf,
    confidence_threshold: f32,
    generation: u64,
    ctx: egui::Context,
) -> PendingDetection {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        info!(
            "uploading {} (confidence threshold {:.2})",
            path.display(),
            confidence_threshold
        );
        let result = run_request(&path, confidence_threshold);
        match &result {
            Ok(detections) => info!("service returned {} detections", detections.len()),
            Err(err) => warn!("detection request failed: {err}"),
        }
        let _ = sender.send(result);
        ctx.request_repaint();
    });

    PendingDetection::new(generation, receiver)
}

fn run_request(path: &Path, confidence_threshold: f32) -> Result<Vec<Detection>, ApiError> {
    let url = request_url(&base_url(), confidence_threshold);
    let form = reqwest::blocking::multipart::Form::new().file("file", path)?;

    let client = reqwest::blocking::Client::new();
    let response = client.post(&url).multipart(form).send()?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }

    let payload: DetectResponse = response.json()?;
    Ok(payload.results)
}
