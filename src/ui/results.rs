use eframe::egui;

use crate::app::InspectionApp;
use crate::utils::format_score;

pub fn results_panel(app: &mut InspectionApp, ctx: &egui::Context) {
    let mut toggle_sort = false;

    egui::TopBottomPanel::bottom("results_panel")
        .resizable(true)
        .default_height(180.0)
        .show(ctx, |ui| {
            if let Some(message) = &app.status_message {
                ui.label(message.clone());
                ui.separator();
            }

            ui.heading("Detected Defects");

            if app.detections.is_empty() {
                ui.label("No defects to show");
                return;
            }

            // Table rows are sorted by confidence; the overlay keeps the
            // service's original order.
            let mut rows: Vec<_> = app.detections.iter().collect();
            rows.sort_by(|a, b| a.score.total_cmp(&b.score));
            if app.sort_descending {
                rows.reverse();
            }
            let arrow = if app.sort_descending { "v" } else { "^" };

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    egui::Grid::new("defect_table")
                        .striped(true)
                        .num_columns(3)
                        .min_col_width(120.0)
                        .show(ui, |ui| {
                            ui.strong("Defect");
                            if ui.button(format!("Confidence {arrow}")).clicked() {
                                toggle_sort = true;
                            }
                            ui.strong("Solution");
                            ui.end_row();

                            for detection in rows {
                                ui.label(detection.class.label());
                                ui.label(format_score(detection.score));
                                ui.label(
                                    detection
                                        .class
                                        .solution()
                                        .unwrap_or("No suggestion available"),
                                );
                                ui.end_row();
                            }
                        });
                });
        });

    if toggle_sort {
        app.sort_descending = !app.sort_descending;
    }
}
