use std::path::PathBuf;

use eframe::egui;
use image::DynamicImage;
use log::info;

use crate::api::{self, PendingDetection};
use crate::models::{AppTheme, Detection};
use crate::ui;

pub struct InspectionApp {
    pub image_path: Option<PathBuf>,
    pub current_image: Option<DynamicImage>,
    pub texture: Option<egui::TextureHandle>,
    pub detections: Vec<Detection>,
    pub confidence_threshold: f32,
    pub dark_mode: bool,
    pub magnifier_enabled: bool,
    /// Pointer offset relative to the displayed image's top-left corner,
    /// present only while the magnifier is enabled and the pointer hovers
    /// the image.
    pub pointer: Option<egui::Pos2>,
    pub pending: Option<PendingDetection>,
    pub request_generation: u64,
    pub sort_descending: bool,
    pub status_message: Option<String>,
}

impl Default for InspectionApp {
    fn default() -> Self {
        Self {
            image_path: None,
            current_image: None,
            texture: None,
            detections: Vec::new(),
            confidence_threshold: 0.5,
            dark_mode: false,
            magnifier_enabled: false,
            pointer: None,
            pending: None,
            request_generation: 0,
            sort_descending: true,
            status_message: None,
        }
    }
}

impl InspectionApp {
    pub fn theme(&self) -> AppTheme {
        if self.dark_mode {
            AppTheme::Dark
        } else {
            AppTheme::Light
        }
    }

    pub fn show_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn select_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
            .pick_file()
        {
            self.load_image(&path);
        }
    }

    pub fn load_image(&mut self, path: &PathBuf) {
        match image::open(path) {
            Ok(img) => {
                info!("loaded {} ({}x{})", path.display(), img.width(), img.height());
                self.set_image(img, path.clone());
            }
            Err(err) => {
                self.show_status(&format!("Failed to load image: {err}"));
            }
        }
    }

    /// Installs a freshly decoded image and invalidates everything derived
    /// from the previous one: the GPU texture (the old one is released once
    /// the handle drops), the detection list, the lens pointer, and any
    /// in-flight request via the generation bump.
    pub fn set_image(&mut self, image: DynamicImage, path: PathBuf) {
        self.current_image = Some(image);
        self.image_path = Some(path);
        self.texture = None;
        self.detections.clear();
        self.pointer = None;
        self.request_generation += 1;
        self.status_message = None;
    }

    pub fn submit_detection(&mut self, ctx: &egui::Context) {
        let Some(path) = self.image_path.clone() else {
            self.show_status("Select an image first");
            return;
        };

        self.request_generation += 1;
        self.detections.clear();
        self.status_message = None;
        self.pending = Some(api::detect_defects(
            path,
            self.confidence_threshold,
            self.request_generation,
            ctx.clone(),
        ));
    }

    pub fn poll_detection(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let Some(result) = pending.try_take() else {
            return;
        };
        let generation = pending.generation;
        self.pending = None;

        if generation != self.request_generation {
            info!("dropping detection response for a superseded request");
            return;
        }

        match result {
            Ok(results) => {
                self.show_status(&format!("{} defects detected", results.len()));
                self.detections = results;
            }
            Err(err) => {
                self.show_status(&format!("Detection failed: {err}"));
                self.detections.clear();
            }
        }
    }

    pub fn toggle_magnifier(&mut self) {
        self.magnifier_enabled = !self.magnifier_enabled;
        if !self.magnifier_enabled {
            self.pointer = None;
        }
    }

    /// Re-samples the pointer against the displayed image area. Anything
    /// other than "magnifier on and pointer over the image" clears the state.
    pub fn update_pointer(&mut self, hover: Option<egui::Pos2>, image_area: egui::Rect) {
        if !self.magnifier_enabled {
            self.pointer = None;
            return;
        }
        self.pointer = match hover {
            Some(pos) if image_area.contains(pos) => Some(pos - image_area.min.to_vec2()),
            _ => None,
        };
    }
}

impl eframe::App for InspectionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_detection();

        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        ui::top::top_panel(self, ctx);
        ui::results::results_panel(self, ctx);
        ui::central::central_panel(self, ctx);
    }
}
