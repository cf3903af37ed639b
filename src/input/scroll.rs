/// One scroll event from the grid's scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// Total height of the scrolled content
    pub content_height: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
    /// Distance scrolled from the top
    pub offset: f64,
}

impl ScrollSample {
    pub fn new(content_height: f64, viewport_height: f64, offset: f64) -> Self {
        Self {
            content_height,
            viewport_height,
            offset,
        }
    }

    /// Offset at which the viewport shows the end of the content
    pub fn bottom_position(&self) -> f64 {
        self.content_height - self.viewport_height
    }
}

/// Turns scroll samples into a single "reached bottom" signal per visit
///
/// The detector fires on the transition into the bottom zone and stays quiet
/// while the samples keep reporting it; leaving the zone re-arms it.
#[derive(Debug, Clone)]
pub struct ScrollEdgeDetector {
    tolerance: f64,
    at_bottom: bool,
}

impl Default for ScrollEdgeDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}

impl ScrollEdgeDetector {
    /// Slack for layout rounding
    pub const DEFAULT_TOLERANCE: f64 = 1.0;

    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            at_bottom: false,
        }
    }

    /// Feed one sample; `true` means the bottom was just reached
    pub fn observe(&mut self, sample: ScrollSample) -> bool {
        let at_edge = sample.offset >= sample.bottom_position() - self.tolerance;

        if !at_edge {
            self.at_bottom = false;
            return false;
        }

        if self.at_bottom {
            return false;
        }

        self.at_bottom = true;
        true
    }

    pub fn is_at_bottom(&self) -> bool {
        self.at_bottom
    }
}
