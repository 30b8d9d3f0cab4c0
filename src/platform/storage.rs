//=========================================================================
// Storage Paths
//=========================================================================
//
// Per-platform locations for save games and settings.
//
// - Android: directories handed over by the host activity
// - iOS: the app sandbox's Documents directory
// - Desktop: <data dir>/<organization>/<application>
//
// iOS and desktop have no separate external storage; the internal path is
// reported for both.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use log::warn;

//=== Internal Dependencies ===============================================

use super::config::PlatformConfig;

//=== Public API ==========================================================

/// Private, app-owned writable directory.
pub fn internal_storage_path(config: &PlatformConfig) -> Option<PathBuf> {
    let path = internal_for_target(config);
    if path.is_none() {
        warn!(target: "platform", "Internal storage path unavailable");
    }
    path
}

/// Shared/external writable directory (falls back to internal storage).
pub fn external_storage_path(config: &PlatformConfig) -> Option<PathBuf> {
    if cfg!(target_os = "android") {
        let path = config.android_external_storage.clone();
        if path.is_none() {
            warn!(target: "platform", "External storage path unavailable");
        }
        path
    } else {
        internal_storage_path(config)
    }
}

//=== Target Resolution ===================================================

#[cfg(target_os = "android")]
fn internal_for_target(config: &PlatformConfig) -> Option<PathBuf> {
    config.android_internal_storage.clone()
}

#[cfg(target_os = "ios")]
fn internal_for_target(_config: &PlatformConfig) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Documents"))
}

#[cfg(not(any(target_os = "android", target_os = "ios")))]
fn internal_for_target(config: &PlatformConfig) -> Option<PathBuf> {
    desktop_data_path(dirs::data_dir(), config)
}

/// `<base>/<organization>/<application>`.
fn desktop_data_path(base: Option<PathBuf>, config: &PlatformConfig) -> Option<PathBuf> {
    base.map(|dir| dir.join(&config.organization).join(&config.application))
}

//=========================================================================
// Unit Tests
//=========================================================================
