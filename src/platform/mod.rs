//=========================================================================
// Platform Shell
//
// Window, audio and app-lifecycle management for mobile hosts.
//
// Architecture:
// ```text
//  Host shell (JNI / UIKit)          winit event loop (desktop, iOS)
//          │                                   │
//          │ initialize / pause / resume       │ resumed / suspended /
//          │ lifecycle events                  │ memory_warning
//          ↓                                   ↓
//  ┌───────────────────────────────────────────────────────┐
//  │  Platform                                             │
//  │   ├─ window (lazy: realized inside the event loop)    │
//  │   ├─ AudioBackend (paused while backgrounded)         │
//  │   ├─ DisplayMetrics (screen size, DPI, tablet check)  │
//  │   └─ storage paths                                    │
//  └───────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Lazy window**: winit only creates windows from inside a running
//   event loop, and mobile surfaces may be destroyed and recreated across
//   suspend/resume. `create_window` records the request; the window is
//   realized on the next `resumed` callback.
// - **Queries never fail**: screen size and DPI fall back to configured
//   defaults (1920×1080, 160 dpi) and log a warning.
// - **Idempotent lifecycle**: repeated `initialize`/`shutdown` calls are
//   logged and ignored.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod audio;
pub mod config;
pub mod display;
pub mod storage;

#[cfg(not(target_os = "android"))]
pub(crate) mod input_processor;

//=== External Crates =====================================================

use std::ops::BitOr;
use std::path::PathBuf;

use log::*;
use winit::{
    error::{EventLoopError, OsError},
    window::Window,
};

#[cfg(not(target_os = "android"))]
use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::lifecycle::{LifecycleAction, LifecycleEvent};
use audio::{AudioBackend, SilentAudio};
use config::PlatformConfig;
use display::DisplayMetrics;

//=== InitFlags ===========================================================

/// Subsystems to bring up in [`Platform::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitFlags(u32);

impl InitFlags {
    pub const NONE: Self = Self(0);
    pub const VIDEO: Self = Self(0x01);
    pub const AUDIO: Self = Self(0x02);
    pub const GAMECONTROLLER: Self = Self(0x04);
    pub const ALL: Self = Self(0x01 | 0x02 | 0x04);

    /// Raw bit value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for InitFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Default for InitFlags {
    fn default() -> Self {
        Self::ALL
    }
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Operation requires [`Platform::initialize`] first.
    NotInitialized,

    /// Failed to create the event loop (rare, indicates an OS-level issue).
    EventLoopCreation(EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(EventLoopError),

    /// The OS refused to create the window.
    WindowCreation(OsError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Platform not initialized"),
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== WindowRequest =======================================================

/// Window parameters recorded by `create_window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowRequest {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) fullscreen: bool,
}

//=== Platform ============================================================

/// Window/audio owner and environment query surface for the host.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, audio)`
/// 2. **Initialization**: `initialize(flags)` opens audio if requested
/// 3. **Window**: `create_window(..)` records the request; the event loop
///    realizes it on `resumed`
/// 4. **Pause/Resume**: `on_pause` / `on_resume` stop and restart audio
/// 5. **Shutdown**: `shutdown()` drops the window and closes audio
pub struct Platform {
    config: PlatformConfig,
    flags: InitFlags,
    initialized: bool,
    paused: bool,

    /// OS window (None until realized inside the event loop).
    window: Option<Window>,

    /// Pending or last window request.
    window_request: Option<WindowRequest>,

    /// Primary monitor size, captured when the event loop is active.
    monitor_size: Option<(u32, u32)>,

    audio: Box<dyn AudioBackend>,
    audio_open: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(config: PlatformConfig, audio: Box<dyn AudioBackend>) -> Self {
        Self {
            config,
            flags: InitFlags::NONE,
            initialized: false,
            paused: false,
            window: None,
            window_request: None,
            monitor_size: None,
            audio,
            audio_open: false,
        }
    }

    /// Platform with default configuration and no audio.
    pub fn headless() -> Self {
        Self::new(PlatformConfig::default(), Box::new(SilentAudio))
    }

    //--- Initialization ---------------------------------------------------

    /// Brings up the requested subsystems. Safe to call more than once.
    ///
    /// Audio failures are logged and otherwise ignored; the game runs
    /// silently rather than not at all.
    pub fn initialize(&mut self, flags: InitFlags) {
        if self.initialized {
            info!(target: "platform", "Platform already initialized");
            return;
        }

        info!(target: "platform", "Initializing platform (flags: {:#04x})", flags.bits());

        if flags.contains(InitFlags::AUDIO) {
            match self.audio.open() {
                Ok(()) => {
                    self.audio_open = true;
                    info!(target: "platform", "Audio initialized");
                }
                Err(e) => error!(target: "platform", "Audio initialization failed: {}", e),
            }
        }

        self.flags = flags;
        self.initialized = true;
        info!(target: "platform", "Platform initialization complete");
    }

    /// Tears down the window and audio. No-op if not initialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }

        info!(target: "platform", "Shutting down platform");

        self.destroy_window();
        self.window_request = None;

        if self.audio_open {
            self.audio.close();
            self.audio_open = false;
        }

        self.flags = InitFlags::NONE;
        self.initialized = false;
        info!(target: "platform", "Platform shutdown complete");
    }

    //--- Window -----------------------------------------------------------

    /// Requests a window of the given size.
    ///
    /// Succeeds immediately if a window already exists. Otherwise the
    /// request is realized by the event loop on its next `resumed` call.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotInitialized`] before `initialize`.
    pub fn create_window(&mut self, width: u32, height: u32, fullscreen: bool) -> Result<(), PlatformError> {
        if !self.initialized {
            error!(target: "platform", "Window requested before initialization");
            return Err(PlatformError::NotInitialized);
        }

        if self.window.is_some() {
            info!(target: "platform", "Window already created");
            return Ok(());
        }

        info!(
            target: "platform",
            "Window requested: {}x{}, fullscreen={}",
            width,
            height,
            fullscreen
        );
        self.window_request = Some(WindowRequest { width, height, fullscreen });
        Ok(())
    }

    /// Drops the window. The request is kept so a later resume recreates it.
    pub fn destroy_window(&mut self) {
        if self.window.take().is_some() {
            debug!(target: "platform", "Window destroyed");
        }
    }

    //--- realize_window() -------------------------------------------------
    //
    // Called by the event loop on `resumed`. Creates the pending window
    // (defaulting to the fallback size if the host never asked) and
    // captures the primary monitor size for later queries.
    //
    #[cfg(not(target_os = "android"))]
    pub(crate) fn realize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        if let Some(monitor) = event_loop.primary_monitor() {
            let size = monitor.size();
            self.monitor_size = Some((size.width, size.height));
        }

        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return Ok(());
        }

        let request = *self.window_request.get_or_insert_with(|| {
            let (width, height) = self.config.fallback_screen_size;
            WindowRequest { width, height, fullscreen: true }
        });

        let window = event_loop
            .create_window(self.window_attributes(request))
            .map_err(PlatformError::WindowCreation)?;

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x scale",
            size.width,
            size.height,
            window.scale_factor()
        );
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    #[cfg(not(target_os = "android"))]
    fn window_attributes(&self, request: WindowRequest) -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window_title.clone())
            .with_inner_size(PhysicalSize::new(request.width, request.height));

        if request.fullscreen {
            attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
        } else {
            attrs
        }
    }

    /// Asks the window for another frame.
    #[cfg(not(target_os = "android"))]
    pub(crate) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    //--- Display Queries --------------------------------------------------

    /// Current display metrics, falling back to configured defaults.
    pub fn display_metrics(&self) -> DisplayMetrics {
        let baseline = self.config.baseline_dpi;

        if let Some(window) = &self.window {
            let size = window.inner_size();
            return DisplayMetrics::from_scale_factor(size.width, size.height, window.scale_factor(), baseline);
        }

        let size = match self.monitor_size {
            Some(size) => size,
            None => {
                warn!(target: "platform", "Display size unknown, using fallback");
                self.config.fallback_screen_size
            }
        };
        DisplayMetrics::fallback(size, baseline)
    }

    /// Screen size in physical pixels.
    pub fn screen_size(&self) -> (u32, u32) {
        let metrics = self.display_metrics();
        (metrics.width, metrics.height)
    }

    /// `(ddpi, hdpi, vdpi)`.
    pub fn display_dpi(&self) -> (f32, f32, f32) {
        let metrics = self.display_metrics();
        (metrics.ddpi, metrics.hdpi, metrics.vdpi)
    }

    //--- Lifecycle --------------------------------------------------------

    /// App is going to the background: stop audio.
    pub fn on_pause(&mut self) {
        info!(target: "platform", "Application paused");
        self.paused = true;
        self.audio.pause_all();
    }

    /// App is back in the foreground: restart audio.
    pub fn on_resume(&mut self) {
        info!(target: "platform", "Application resumed");
        self.paused = false;
        self.audio.resume_all();
    }

    /// OS memory pressure.
    pub fn on_low_memory(&mut self) {
        info!(target: "platform", "Low memory warning received");
        self.audio.trim_caches();
    }

    /// Dispatches a lifecycle notification to the matching hook.
    ///
    /// Returns the hook that ran, if any.
    pub fn handle_lifecycle(&mut self, event: LifecycleEvent) -> Option<LifecycleAction> {
        debug!(target: "platform", "Lifecycle event: {:?}", event);

        let action = event.action();
        match action {
            Some(LifecycleAction::Pause) => self.on_pause(),
            Some(LifecycleAction::Resume) => self.on_resume(),
            Some(LifecycleAction::LowMemory) => self.on_low_memory(),
            None => info!(target: "platform", "{:?}", event),
        }
        action
    }

    //--- Environment Queries ----------------------------------------------

    pub fn internal_storage_path(&self) -> Option<PathBuf> {
        storage::internal_storage_path(&self.config)
    }

    pub fn external_storage_path(&self) -> Option<PathBuf> {
        storage::external_storage_path(&self.config)
    }

    pub const fn is_android() -> bool {
        cfg!(target_os = "android")
    }

    pub const fn is_ios() -> bool {
        cfg!(target_os = "ios")
    }

    /// Diagonal-size heuristic; always `false` off mobile targets.
    pub fn is_tablet(&self) -> bool {
        if !(Self::is_android() || Self::is_ios()) {
            return false;
        }
        self.display_metrics().is_tablet(self.config.tablet_diagonal_inches)
    }

    //--- State Accessors --------------------------------------------------

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn flags(&self) -> InitFlags {
        self.flags
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
