//! Coordinate transforms between the original image's pixel space and the
//! space of the image as actually displayed, plus the magnifier lens math.

/// Axis-aligned bounding box, upper-left and lower-right corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BBox {
    pub fn from_array(bbox: [f32; 4]) -> Self {
        Self {
            x1: bbox[0],
            y1: bbox[1],
            x2: bbox[2],
            y2: bbox[3],
        }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

/// Natural (intrinsic) and rendered dimensions of the displayed image.
/// Natural dimensions are zero until the image has been decoded, in which
/// case the scale factors are unusable and `map_box` falls back to identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageGeometry {
    pub natural_width: f32,
    pub natural_height: f32,
    pub rendered_width: f32,
    pub rendered_height: f32,
}

impl ImageGeometry {
    pub fn new(
        natural_width: f32,
        natural_height: f32,
        rendered_width: f32,
        rendered_height: f32,
    ) -> Self {
        Self {
            natural_width,
            natural_height,
            rendered_width,
            rendered_height,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.natural_width > 0.0 && self.natural_height > 0.0
    }

    pub fn scale_x(&self) -> f32 {
        self.rendered_width / self.natural_width
    }

    pub fn scale_y(&self) -> f32 {
        self.rendered_height / self.natural_height
    }
}

/// Maps a box from natural-image pixel space into rendered space with an
/// independent linear scale per axis. Returns the box unchanged when the
/// geometry is not usable yet, never divides by zero.
pub fn map_box(bbox: BBox, geometry: &ImageGeometry) -> BBox {
    if !geometry.is_ready() {
        return bbox;
    }

    let scale_x = geometry.scale_x();
    let scale_y = geometry.scale_y();
    BBox {
        x1: bbox.x1 * scale_x,
        y1: bbox.y1 * scale_y,
        x2: bbox.x2 * scale_x,
        y2: bbox.y2 * scale_y,
    }
}

pub const LENS_DIAMETER: f32 = 150.0;
pub const LENS_ZOOM: f32 = 2.0;

/// Magnifier viewport descriptor: where the lens sits relative to the
/// displayed image's top-left corner, and how the zoomed copy of the image
/// must be sized and offset so the point under the cursor lands at the lens
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensView {
    pub left: f32,
    pub top: f32,
    pub background_size: (f32, f32),
    pub background_position: (f32, f32),
}

/// The part of the lens square that actually overlaps the image, in
/// lens-local pixels, paired with the matching normalized source window.
/// Near the image edges both shrink together, so the magnification factor
/// and the cursor-to-center alignment stay intact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensWindow {
    pub min: (f32, f32),
    pub max: (f32, f32),
    pub uv_min: (f32, f32),
    pub uv_max: (f32, f32),
}

impl LensView {
    pub fn visible_window(&self, diameter: f32) -> Option<LensWindow> {
        let (bg_width, bg_height) = self.background_size;
        if bg_width <= 0.0 || bg_height <= 0.0 {
            return None;
        }

        let (bg_x, bg_y) = self.background_position;
        let min = (bg_x.max(0.0), bg_y.max(0.0));
        let max = (
            (bg_width + bg_x).min(diameter),
            (bg_height + bg_y).min(diameter),
        );
        if max.0 <= min.0 || max.1 <= min.1 {
            return None;
        }

        Some(LensWindow {
            min,
            max,
            uv_min: ((min.0 - bg_x) / bg_width, (min.1 - bg_y) / bg_height),
            uv_max: ((max.0 - bg_x) / bg_width, (max.1 - bg_y) / bg_height),
        })
    }
}

pub fn compute_lens_view(pointer: (f32, f32), rendered: (f32, f32), zoom: f32) -> LensView {
    let radius = LENS_DIAMETER / 2.0;
    LensView {
        left: pointer.0 - radius,
        top: pointer.1 - radius,
        background_size: (rendered.0 * zoom, rendered.1 * zoom),
        background_position: (
            -(pointer.0 * zoom - radius),
            -(pointer.1 * zoom - radius),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_scale_returns_input_unchanged() {
        let geometry = ImageGeometry::new(800.0, 600.0, 800.0, 600.0);
        let bbox = BBox::from_array([12.5, 40.0, 80.0, 90.0]);
        assert_eq!(map_box(bbox, &geometry), bbox);
    }

    #[test]
    fn scales_each_axis_independently() {
        let geometry = ImageGeometry::new(1000.0, 800.0, 500.0, 400.0);
        let mapped = map_box(BBox::from_array([100.0, 100.0, 200.0, 160.0]), &geometry);
        assert_eq!(mapped, BBox::from_array([50.0, 50.0, 100.0, 80.0]));
        assert_eq!(mapped.width(), 50.0);
        assert_eq!(mapped.height(), 30.0);
    }

    #[test]
    fn linearity_holds_for_mixed_scales() {
        let geometry = ImageGeometry::new(640.0, 480.0, 1280.0, 240.0);
        let bbox = BBox::from_array([32.0, 48.0, 320.0, 96.0]);
        let mapped = map_box(bbox, &geometry);
        assert_eq!(mapped.x1, bbox.x1 * 2.0);
        assert_eq!(mapped.x2, bbox.x2 * 2.0);
        assert_eq!(mapped.y1, bbox.y1 * 0.5);
        assert_eq!(mapped.y2, bbox.y2 * 0.5);
    }

    #[test]
    fn unloaded_image_falls_back_to_identity() {
        let geometry = ImageGeometry::new(0.0, 0.0, 500.0, 400.0);
        let bbox = BBox::from_array([100.0, 100.0, 200.0, 160.0]);
        let mapped = map_box(bbox, &geometry);
        assert_eq!(mapped, bbox);
        assert!(!mapped.x1.is_nan() && !mapped.y2.is_nan());
    }

    #[test]
    fn negative_natural_dimensions_fall_back_to_identity() {
        let geometry = ImageGeometry::new(-640.0, 480.0, 500.0, 400.0);
        let bbox = BBox::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(map_box(bbox, &geometry), bbox);
    }

    #[test]
    fn lens_is_centered_on_pointer() {
        let view = compute_lens_view((100.0, 100.0), (500.0, 400.0), LENS_ZOOM);
        assert_eq!(view.left, 25.0);
        assert_eq!(view.top, 25.0);
    }

    #[test]
    fn lens_background_translates_zoomed_point_to_center() {
        let view = compute_lens_view((100.0, 100.0), (500.0, 400.0), 2.0);
        assert_eq!(view.background_size, (1000.0, 800.0));
        // Zoomed pointer position (200, 200) shifted so it sits at the lens
        // center (75, 75).
        assert_eq!(view.background_position, (-125.0, -125.0));
    }

    #[test]
    fn lens_overshoots_image_edges_rather_than_clamping() {
        let view = compute_lens_view((0.0, 0.0), (500.0, 400.0), 2.0);
        assert_eq!(view.left, -75.0);
        assert_eq!(view.top, -75.0);
        assert_eq!(view.background_position, (75.0, 75.0));
    }

    #[test]
    fn interior_pointer_fills_the_whole_lens() {
        let view = compute_lens_view((100.0, 100.0), (500.0, 400.0), 2.0);
        let window = view.visible_window(LENS_DIAMETER).unwrap();
        assert_eq!(window.min, (0.0, 0.0));
        assert_eq!(window.max, (150.0, 150.0));
        // The zoomed pointer position sits at the horizontal center of the
        // source window: 100 * 2 / 1000.
        let mid = (window.uv_min.0 + window.uv_max.0) / 2.0;
        assert!((mid - 0.2).abs() < 1e-6);
    }

    #[test]
    fn corner_pointer_shrinks_patch_and_source_window_together() {
        let view = compute_lens_view((0.0, 0.0), (500.0, 400.0), 2.0);
        let window = view.visible_window(LENS_DIAMETER).unwrap();
        // Only the lower-right quadrant of the lens overlaps the image.
        assert_eq!(window.min, (75.0, 75.0));
        assert_eq!(window.max, (150.0, 150.0));
        assert_eq!(window.uv_min, (0.0, 0.0));
        // Magnification is unchanged: the source span in zoomed pixels
        // equals the patch span in lens pixels.
        let (bg_width, bg_height) = view.background_size;
        assert!(((window.uv_max.0 - window.uv_min.0) * bg_width - 75.0).abs() < 1e-3);
        assert!(((window.uv_max.1 - window.uv_min.1) * bg_height - 75.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_geometry_yields_no_window() {
        let view = compute_lens_view((10.0, 10.0), (0.0, 0.0), 2.0);
        assert_eq!(view.visible_window(LENS_DIAMETER), None);
    }
}
