//=========================================================================
// Host Input Events
//
// Portable representation of one input sample from the host shell.
//
// Every host-facing setter on the input system has a matching variant, so
// input arriving from another thread (React Native bridge, JNI callback,
// UIKit gesture recognizer) can be queued and replayed on the frame thread
// in arrival order.
//
// Event Flow:
// ```text
// Host UI thread
//         ↓
//    HostInput (this module) ──channel──┐
//                                       ↓
//                          InputSystem::update() (frame thread)
//                                       ↓
//                              InputState snapshot
// ```
//
//=========================================================================

//=== HostInput ===========================================================

/// One host input sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostInput {
    /// Virtual joystick deflection; clamped to `[-1, 1]` when applied.
    Movement { x: f32, y: f32 },

    /// Aim point in screen coordinates; stored verbatim.
    Aim { x: f32, y: f32 },

    /// Fire button latch.
    Fire(bool),

    /// Jump button latch.
    Jump(bool),

    /// Special ability latch (cleared by the translator after one use).
    Special(bool),

    /// Switch to the next weapon.
    NextWeapon,

    /// Switch to the previous weapon.
    PrevWeapon,

    /// Reset the snapshot to defaults.
    Clear,
}

impl HostInput {
    /// Returns `true` for samples that act on the entity rather than the
    /// snapshot.
    pub fn is_command(&self) -> bool {
        matches!(self, Self::NextWeapon | Self::PrevWeapon)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
