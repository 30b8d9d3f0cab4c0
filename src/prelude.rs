//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use mobile_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::runtime::{Runtime, RuntimeBuilder};

// Engine contracts
pub use crate::core::game::{Entity, Game, LocomotionState, MoveFlags, View};

// Input system
pub use crate::core::input::{HostInput, InputHandle, InputState, InputSystem, InputTuning};

// Lifecycle
pub use crate::core::lifecycle::{LifecycleAction, LifecycleEvent};

// Platform shell
pub use crate::platform::audio::{AudioBackend, SilentAudio};
pub use crate::platform::config::PlatformConfig;
pub use crate::platform::{InitFlags, Platform, PlatformError};
