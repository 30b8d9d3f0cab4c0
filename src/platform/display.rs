//=========================================================================
// Display Metrics
//=========================================================================
//
// Screen size / density snapshot and the tablet heuristic.
//
// winit reports density as a scale factor; mobile hosts think in DPI. A
// scale factor of 1.0 corresponds to the configured baseline (160 dpi,
// Android mdpi), so DPI = scale_factor × baseline.
//
//=========================================================================

//=== DisplayMetrics ======================================================

/// Physical screen size and density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Width in physical pixels.
    pub width: u32,

    /// Height in physical pixels.
    pub height: u32,

    /// Diagonal DPI.
    pub ddpi: f32,

    /// Horizontal DPI.
    pub hdpi: f32,

    /// Vertical DPI.
    pub vdpi: f32,
}

impl DisplayMetrics {
    /// Builds metrics from a pixel size and a winit scale factor.
    pub fn from_scale_factor(width: u32, height: u32, scale_factor: f64, baseline_dpi: f32) -> Self {
        let dpi = scale_factor as f32 * baseline_dpi;
        Self {
            width,
            height,
            ddpi: dpi,
            hdpi: dpi,
            vdpi: dpi,
        }
    }

    /// Metrics used when nothing is known about the display.
    pub fn fallback((width, height): (u32, u32), baseline_dpi: f32) -> Self {
        Self::from_scale_factor(width, height, 1.0, baseline_dpi)
    }

    /// Screen diagonal in inches.
    pub fn diagonal_inches(&self) -> f32 {
        let w = self.width as f32;
        let h = self.height as f32;
        (w * w + h * h).sqrt() / self.ddpi
    }

    /// Returns `true` if the diagonal reaches `threshold_inches`.
    pub fn is_tablet(&self, threshold_inches: f32) -> bool {
        self.ddpi > 0.0 && self.diagonal_inches() >= threshold_inches
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
