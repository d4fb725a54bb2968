use eframe::egui;

use crate::app::InspectionApp;
use crate::geometry::{ImageGeometry, LENS_DIAMETER, LENS_ZOOM, LensView, compute_lens_view};
use crate::overlay::build_overlay;

pub fn central_panel(app: &mut InspectionApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(image) = &app.current_image else {
            ui.centered_and_justified(|ui| {
                ui.label("Open a PCB image and run detection to see results");
            });
            return;
        };

        let available_size = ui.available_size();
        let natural_size = egui::vec2(image.width() as f32, image.height() as f32);

        let scale = (available_size.x / natural_size.x).min(available_size.y / natural_size.y);
        let displayed_size = natural_size * scale;

        let texture = app.texture.get_or_insert_with(|| {
            ui.ctx().load_texture(
                "pcb_image",
                egui::ColorImage::from_rgb(
                    [image.width() as _, image.height() as _],
                    image.to_rgb8().as_raw(),
                ),
                Default::default(),
            )
        });
        let texture_id = texture.id();

        let response = ui
            .with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| ui.image((texture_id, displayed_size)),
            )
            .inner;

        let image_rect = response.rect;
        let origin = egui::pos2(
            image_rect.min.x + (available_size.x - displayed_size.x) / 2.0,
            image_rect.min.y + (available_size.y - displayed_size.y) / 2.0,
        );
        let image_area = egui::Rect::from_min_size(origin, displayed_size);

        let geometry = ImageGeometry::new(
            natural_size.x,
            natural_size.y,
            displayed_size.x,
            displayed_size.y,
        );

        let theme = app.theme();
        for entry in build_overlay(&app.detections, &geometry, theme) {
            let rect = egui::Rect::from_min_size(
                origin + egui::vec2(entry.left, entry.top),
                egui::vec2(entry.width, entry.height),
            );
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(3.0, entry.color),
                egui::StrokeKind::Middle,
            );
            ui.painter().text(
                rect.min,
                egui::Align2::LEFT_BOTTOM,
                &entry.label,
                egui::FontId::default(),
                entry.color,
            );
        }

        let hover = ui.input(|i| i.pointer.hover_pos());
        app.update_pointer(hover, image_area);

        if let Some(pointer) = app.pointer {
            ctx.set_cursor_icon(egui::CursorIcon::ZoomIn);
            let view = compute_lens_view(
                (pointer.x, pointer.y),
                (displayed_size.x, displayed_size.y),
                LENS_ZOOM,
            );
            draw_lens(ui, texture_id, origin, &view);
        }
    });
}

/// Paints the zoomed window the lens descriptor describes. The lens is a
/// paint-only effect, it never participates in hit testing, so input keeps
/// flowing to the widgets underneath.
fn draw_lens(ui: &egui::Ui, texture_id: egui::TextureId, origin: egui::Pos2, view: &LensView) {
    // The patch and its source window shrink together near the image edges,
    // keeping the zoom factor and cursor centering intact there.
    let Some(window) = view.visible_window(LENS_DIAMETER) else {
        return;
    };

    let lens_origin = origin + egui::vec2(view.left, view.top);
    let patch = egui::Rect::from_min_max(
        lens_origin + egui::vec2(window.min.0, window.min.1),
        lens_origin + egui::vec2(window.max.0, window.max.1),
    );
    let uv = egui::Rect::from_min_max(
        egui::pos2(window.uv_min.0, window.uv_min.1),
        egui::pos2(window.uv_max.0, window.uv_max.1),
    );

    let radius = LENS_DIAMETER / 2.0;
    let center = lens_origin + egui::vec2(radius, radius);

    let painter = ui.painter();
    painter.image(texture_id, patch, uv, egui::Color32::WHITE);

    // Mask the square corners of the patch with a ring in the panel color so
    // only the circular viewport remains, then stroke the border on top.
    let mask_width = radius * (2f32.sqrt() - 1.0) + 2.0;
    painter.circle_stroke(
        center,
        radius + mask_width / 2.0,
        egui::Stroke::new(mask_width, ui.visuals().panel_fill),
    );
    painter.circle_stroke(center, radius, egui::Stroke::new(1.5, egui::Color32::GRAY));
}
