use egui::Color32;

use crate::geometry::{BBox, ImageGeometry, map_box};
use crate::models::{AppTheme, Detection};

/// Declarative annotation rectangle, positioned relative to the displayed
/// image's top-left corner. The view layer turns these into paint calls.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color32,
    pub label: String,
}

/// Builds one annotation rectangle per detection, in input order. Does not
/// touch the detection list itself.
pub fn build_overlay(
    detections: &[Detection],
    geometry: &ImageGeometry,
    theme: AppTheme,
) -> Vec<OverlayRect> {
    detections
        .iter()
        .map(|detection| {
            let mapped = map_box(BBox::from_array(detection.bbox), geometry);
            OverlayRect {
                left: mapped.x1,
                top: mapped.y1,
                width: mapped.width(),
                height: mapped.height(),
                color: detection.class.color(theme),
                label: detection.class.label(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DefectKind;

    fn detection(bbox: [f32; 4], class: &str, score: f32) -> Detection {
        Detection {
            bbox,
            class: DefectKind::from(class.to_string()),
            score,
        }
    }

    #[test]
    fn maps_detection_into_rendered_rectangle() {
        // Natural 1000x800 shown at 500x400, so everything halves.
        let geometry = ImageGeometry::new(1000.0, 800.0, 500.0, 400.0);
        let detections = vec![detection([100.0, 100.0, 200.0, 160.0], "short", 0.9)];

        let overlay = build_overlay(&detections, &geometry, AppTheme::Light);
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].left, 50.0);
        assert_eq!(overlay[0].top, 50.0);
        assert_eq!(overlay[0].width, 50.0);
        assert_eq!(overlay[0].height, 30.0);
        assert_eq!(overlay[0].label, "Short");
    }

    #[test]
    fn preserves_input_order() {
        let geometry = ImageGeometry::new(100.0, 100.0, 100.0, 100.0);
        let detections = vec![
            detection([0.0, 0.0, 10.0, 10.0], "spur", 0.8),
            detection([5.0, 5.0, 20.0, 20.0], "missing hole", 0.7),
            detection([1.0, 1.0, 2.0, 2.0], "short", 0.99),
        ];

        let overlay = build_overlay(&detections, &geometry, AppTheme::Dark);
        let labels: Vec<_> = overlay.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Spur", "Missing hole", "Short"]);
    }

    #[test]
    fn unknown_class_still_produces_a_labeled_rectangle() {
        let geometry = ImageGeometry::new(100.0, 100.0, 100.0, 100.0);
        let detections = vec![detection([10.0, 10.0, 40.0, 40.0], "pin hole", 0.6)];

        let overlay = build_overlay(&detections, &geometry, AppTheme::Light);
        assert_eq!(overlay[0].label, "Pin hole");
        assert_eq!(
            overlay[0].color,
            DefectKind::Unknown("pin hole".to_string()).color(AppTheme::Light)
        );
    }

    #[test]
    fn theme_selects_the_color_set() {
        let geometry = ImageGeometry::new(100.0, 100.0, 100.0, 100.0);
        let detections = vec![detection([0.0, 0.0, 10.0, 10.0], "short", 0.9)];

        let light = build_overlay(&detections, &geometry, AppTheme::Light);
        let dark = build_overlay(&detections, &geometry, AppTheme::Dark);
        assert_ne!(light[0].color, dark[0].color);
    }

    #[test]
    fn degenerate_box_has_zero_size_not_negative() {
        let geometry = ImageGeometry::new(100.0, 100.0, 50.0, 50.0);
        let detections = vec![detection([30.0, 30.0, 30.0, 30.0], "spur", 0.5)];

        let overlay = build_overlay(&detections, &geometry, AppTheme::Light);
        assert_eq!(overlay[0].width, 0.0);
        assert_eq!(overlay[0].height, 0.0);
    }
}
