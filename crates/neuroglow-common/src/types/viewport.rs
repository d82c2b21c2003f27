/// Size of the host surface in CSS/logical pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Width / height; `1.0` for a degenerate zero-height viewport.
    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Pixel ratio limited to `max_ratio`.
    pub fn effective_pixel_ratio(&self, max_ratio: f64) -> f64 {
        self.pixel_ratio.min(max_ratio).max(f64::MIN_POSITIVE)
    }

    /// Drawing-buffer dimensions with the pixel ratio capped at `max_ratio`.
    /// Never smaller than 1×1.
    pub fn drawing_buffer_size(&self, max_ratio: f64) -> (u32, u32) {
        let ratio = self.effective_pixel_ratio(max_ratio);
        let w = (self.width * ratio).floor().max(1.0) as u32;
        let h = (self.height * ratio).floor().max(1.0) as u32;
        (w, h)
    }
}
