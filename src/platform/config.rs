//=========================================================================
// Platform Configuration
//=========================================================================
//
// Static settings for the platform shell.
//
//=========================================================================

use std::path::PathBuf;

//=== PlatformConfig ======================================================

/// Settings consumed by [`super::Platform`].
///
/// # Default Values
///
/// - **organization / application**: `"8bit-Games"` / `"Abused"`
/// - **window_title**: `"Abused"`
/// - **tablet_diagonal_inches**: 7.0
/// - **baseline_dpi**: 160.0 (Android mdpi)
/// - **fallback_screen_size**: 1920×1080
/// - **android storage**: none (the host must provide them)
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformConfig {
    pub(crate) organization: String,
    pub(crate) application: String,
    pub(crate) window_title: String,
    pub(crate) tablet_diagonal_inches: f32,
    pub(crate) baseline_dpi: f32,
    pub(crate) fallback_screen_size: (u32, u32),
    pub(crate) android_internal_storage: Option<PathBuf>,
    pub(crate) android_external_storage: Option<PathBuf>,
}

impl PlatformConfig {
    pub fn new() -> Self {
        Self {
            organization: "8bit-Games".to_owned(),
            application: "Abused".to_owned(),
            window_title: "Abused".to_owned(),
            tablet_diagonal_inches: 7.0,
            baseline_dpi: 160.0,
            fallback_screen_size: (1920, 1080),
            android_internal_storage: None,
            android_external_storage: None,
        }
    }

    /// Sets the organization/application pair used for desktop data paths.
    pub fn with_app_identity(
        mut self,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        self.organization = organization.into();
        self.application = application.into();
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Sets the screen diagonal (inches) from which a device is a tablet.
    ///
    /// # Panics
    ///
    /// Panics if `inches <= 0.0`.
    pub fn with_tablet_diagonal(mut self, inches: f32) -> Self {
        assert!(inches > 0.0, "Tablet diagonal must be positive, got {}", inches);
        self.tablet_diagonal_inches = inches;
        self
    }

    /// Sets the DPI corresponding to a scale factor of 1.0.
    ///
    /// # Panics
    ///
    /// Panics if `dpi <= 0.0`.
    pub fn with_baseline_dpi(mut self, dpi: f32) -> Self {
        assert!(dpi > 0.0, "Baseline DPI must be positive, got {}", dpi);
        self.baseline_dpi = dpi;
        self
    }

    /// Sets the screen size reported when neither window nor monitor is known.
    pub fn with_fallback_screen_size(mut self, width: u32, height: u32) -> Self {
        self.fallback_screen_size = (width, height);
        self
    }

    /// Sets the storage directories handed over by the Android host
    /// (`Context.getFilesDir()` / `getExternalFilesDir()`).
    pub fn with_android_storage(
        mut self,
        internal: impl Into<PathBuf>,
        external: Option<PathBuf>,
    ) -> Self {
        self.android_internal_storage = Some(internal.into());
        self.android_external_storage = external;
        self
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn tablet_diagonal_inches(&self) -> f32 {
        self.tablet_diagonal_inches
    }

    pub fn baseline_dpi(&self) -> f32 {
        self.baseline_dpi
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
