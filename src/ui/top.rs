use eframe::egui;

use crate::app::InspectionApp;

pub fn top_panel(app: &mut InspectionApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("PCB Perfect");
            ui.separator();

            if ui.button("Open image…").clicked() {
                app.select_image();
            }

            let can_detect = app.image_path.is_some() && app.pending.is_none();
            if ui
                .add_enabled(can_detect, egui::Button::new("Detect defects"))
                .clicked()
            {
                app.submit_detection(ctx);
            }
            if app.pending.is_some() {
                ui.spinner();
            }

            ui.separator();
            ui.label("Filter:");
            ui.add(
                egui::Slider::new(&mut app.confidence_threshold, 0.0..=1.0).show_value(false),
            );
            ui.label(format!(
                "{}%",
                (app.confidence_threshold * 100.0).round() as i32
            ));

            ui.separator();
            ui.checkbox(&mut app.dark_mode, "Dark mode");

            let magnifier_text = if app.magnifier_enabled {
                "Disable magnifier"
            } else {
                "Enable magnifier"
            };
            if ui.button(magnifier_text).clicked() {
                app.toggle_magnifier();
            }

            if let Some(path) = &app.image_path {
                ui.separator();
                ui.label(format!("{}", path.display()));
            }
        });
    });
}
