use crate::config::ZoomBounds;
use crate::geometry::Point;

/// Pan and zoom over the unbounded canvas.
///
/// Screen points are relative to the canvas element's top-left corner.
/// `screen = canvas * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::ORIGIN,
        }
    }
}

/// Drops float noise accumulated by repeated zoom steps.
fn tidy(scale: f64) -> f64 {
    (scale * 1e6).round() / 1e6
}

impl Viewport {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        (screen - self.offset) / self.scale
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        canvas * self.scale + self.offset
    }

    /// Moves the view. Node coordinates are unaffected.
    pub fn pan_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn pan_by(&mut self, delta: Point) {
        self.offset = self.offset + delta;
    }

    pub fn set_scale(&mut self, scale: f64, bounds: &ZoomBounds) {
        if scale.is_finite() {
            self.scale = bounds.clamp(tidy(scale));
        }
    }

    /// Scroll wheel zoom: scrolling down zooms out, up zooms in, one step per event.
    pub fn wheel_zoom(&mut self, delta_y: f64, bounds: &ZoomBounds) {
        let step = if delta_y > 0.0 { -bounds.step } else { bounds.step };
        self.set_scale(self.scale + step, bounds);
    }

    pub fn zoom_in(&mut self, bounds: &ZoomBounds) {
        self.set_scale(self.scale + bounds.step, bounds);
    }

    pub fn zoom_out(&mut self, bounds: &ZoomBounds) {
        self.set_scale(self.scale - bounds.step, bounds);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom level as shown by the zoom controls, e.g. `100` for a scale of 1.0.
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }
}
