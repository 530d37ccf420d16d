// Pan/zoom state of the map layer.
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
/// Step used by the zoom buttons and by each wheel notch.
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewTransform {
    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    // Translation is unbounded; the map may be dragged fully off screen.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// CSS value written to the map layer's `transform` property.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_stays_in_range_under_any_sequence() {
        let mut t = ViewTransform::default();
        for delta in [3.0, 10.0, -0.1, -20.0, 0.3, 100.0, -0.7, 0.05] {
            t.zoom_by(delta);
            assert!(t.scale >= MIN_SCALE && t.scale <= MAX_SCALE, "{}", t.scale);
        }
        t.zoom_by(50.0);
        assert_eq!(t.scale, MAX_SCALE);
        t.zoom_by(0.2);
        assert_eq!(t.scale, MAX_SCALE);
        t.zoom_by(-50.0);
        assert_eq!(t.scale, MIN_SCALE);
        t.zoom_by(-0.2);
        assert_eq!(t.scale, MIN_SCALE);
    }

    #[test]
    fn pan_is_unbounded() {
        let mut t = ViewTransform::default();
        t.pan_by(-100_000.0, 250_000.0);
        t.pan_by(-1.5, 0.5);
        assert_eq!(t.offset_x, -100_001.5);
        assert_eq!(t.offset_y, 250_000.5);
    }

    #[test]
    fn reset_restores_identity() {
        let mut t = ViewTransform {
            scale: 4.2,
            offset_x: 31.0,
            offset_y: -8.0,
        };
        t.reset();
        assert_eq!(t, ViewTransform::default());
        assert_eq!(t.scale, 1.0);
        assert_eq!((t.offset_x, t.offset_y), (0.0, 0.0));
    }

    #[test]
    fn css_string_format() {
        let mut t = ViewTransform::default();
        t.pan_by(12.5, -3.0);
        t.zoom_by(0.5);
        assert_eq!(t.css(), "translate(12.5px, -3px) scale(1.5)");
    }
}
