//=========================================================================
// Logging Setup
//=========================================================================
//
// Installs a `log` backend for the host process.
//
// - Android: `android_logger`, visible in logcat under the `MobileBridge` tag
// - Everywhere else: `env_logger`, honoring `RUST_LOG` over `level`
//
// Library code only uses the `log` macros with these targets:
// `platform`, `platform::input`, `input`, `runtime`.
//
//=========================================================================

use log::LevelFilter;

/// Logcat tag on Android.
pub const ANDROID_TAG: &str = "MobileBridge";

/// Installs the platform logger. Later calls are ignored.
#[cfg(target_os = "android")]
pub fn init(level: LevelFilter) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(ANDROID_TAG),
    );
}

/// Installs the platform logger. Later calls are ignored.
#[cfg(not(target_os = "android"))]
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
