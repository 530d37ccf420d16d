// Bottom-sheet sidebar used on narrow screens.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Height of the sheet that stays visible when collapsed.
pub const PEEK_HEIGHT_PX: f64 = 60.0;
pub const SNAP_THRESHOLD_PX: f64 = 100.0;
pub const DOUBLE_TAP_MS: f64 = 300.0;

pub const EXPANDED_CSS: &str = "translateY(0)";
pub const COLLAPSED_CSS: &str = "translateY(calc(100% - 60px))";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarDrag {
    pub expanded: bool,
    pub dragging: bool,
    pub start_y: f64,
    pub start_offset: f64,
    pub distance: f64,
    pub last_tap_ms: f64,
}

impl SidebarDrag {
    pub fn begin(&mut self, y: f64, current_offset: f64) {
        self.dragging = true;
        self.start_y = y;
        self.start_offset = current_offset;
        self.distance = 0.0;
    }

    /// Downward offset of the sheet when at rest: 0 when expanded, everything but
    /// the peek strip when collapsed.
    pub fn rest_offset(&self, sheet_height: f64) -> f64 {
        if self.expanded { 0.0 } else { collapsed_offset(sheet_height) }
    }

    /// New sheet offset in px, or None when no drag is in progress.
    pub fn drag_to(&mut self, y: f64, sheet_height: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.distance = y - self.start_y;
        Some((self.start_offset + self.distance).clamp(0.0, collapsed_offset(sheet_height)))
    }

    /// Finishes a drag and returns the state to snap to.
    pub fn release(&mut self) -> Option<bool> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        if self.distance < -SNAP_THRESHOLD_PX {
            self.expanded = true;
        } else if self.distance > SNAP_THRESHOLD_PX {
            self.expanded = false;
        }
        Some(self.expanded)
    }

    /// Registers a tap; a second tap inside the window toggles the sheet.
    pub fn tap(&mut self, now_ms: f64) -> bool {
        let gap = now_ms - self.last_tap_ms;
        self.last_tap_ms = now_ms;
        if gap > 0.0 && gap < DOUBLE_TAP_MS {
            self.expanded = !self.expanded;
            true
        } else {
            false
        }
    }

    pub fn css(&self) -> &'static str {
        if self.expanded { EXPANDED_CSS } else { COLLAPSED_CSS }
    }
}

fn collapsed_offset(sheet_height: f64) -> f64 {
    (sheet_height - PEEK_HEIGHT_PX).max(0.0)
}
