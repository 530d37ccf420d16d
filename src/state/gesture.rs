use super::transform::{ViewTransform, ZOOM_STEP};

/// Finger distance change (px) that amounts to one unit of scale.
pub const PINCH_DIVISOR: f64 = 2000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Transient input state for the map. Mouse and touch are tracked separately;
/// a touch gesture is classified as pan or pinch once, when it starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    pub mouse_panning: bool,
    pub mouse_anchor: Point,
    pub touch_panning: bool,
    pub touch_anchor: Point,
    pub pinching: bool,
    pub pinch_start_dist: f64,
    pub pinch_start_scale: f64,
}

impl GestureState {
    pub fn touch_active(&self) -> bool {
        self.touch_panning || self.pinching
    }

    pub fn mouse_down(&mut self, at: Point) {
        self.mouse_panning = true;
        self.mouse_anchor = at;
    }

    /// Returns true when the transform changed.
    pub fn mouse_move(&mut self, at: Point, view: &mut ViewTransform) -> bool {
        if !self.mouse_panning {
            return false;
        }
        view.pan_by(at.x - self.mouse_anchor.x, at.y - self.mouse_anchor.y);
        self.mouse_anchor = at;
        true
    }

    pub fn mouse_up(&mut self) {
        self.mouse_panning = false;
    }

    pub fn touch_start(&mut self, touches: &[Point], view: &ViewTransform) {
        if self.touch_active() {
            return;
        }
        match touches {
            [a, b, ..] => {
                self.pinching = true;
                self.pinch_start_dist = a.distance(b);
                self.pinch_start_scale = view.scale;
            }
            [a] => {
                self.touch_panning = true;
                self.touch_anchor = *a;
            }
            [] => {}
        }
    }

    /// Returns true when the transform changed. Moves whose finger count does not
    /// match the classification made at touch start are ignored.
    pub fn touch_move(&mut self, touches: &[Point], view: &mut ViewTransform) -> bool {
        match touches {
            [a, b] if self.pinching => {
                view.zoom_by(pinch_zoom_delta(self.pinch_start_dist, a.distance(b)));
                true
            }
            [a] if self.touch_panning => {
                view.pan_by(a.x - self.touch_anchor.x, a.y - self.touch_anchor.y);
                self.touch_anchor = *a;
                true
            }
            _ => false,
        }
    }

    pub fn touch_end(&mut self, remaining: usize) {
        if remaining == 0 {
            self.touch_panning = false;
            self.pinching = false;
        }
    }
}

pub fn pinch_zoom_delta(start_dist: f64, current_dist: f64) -> f64 {
    (current_dist - start_dist) / PINCH_DIVISOR
}

/// Fixed step per wheel event: scrolling up zooms in.
pub fn wheel_zoom_delta(delta_y: f64) -> f64 {
    if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP }
}
