//=========================================================================
// Input State
//
// Snapshot of the host's touch controls for the current frame.
//
// Responsibilities:
// - Hold the virtual joystick deflection (clamped to [-1, 1])
// - Hold the raw screen-space aim point
// - Hold the fire / jump / special latches
//
// Notes:
// Setters are last-write-wins with no debouncing. The only value the
// translator ever writes back is the special latch, which it clears after
// a single activation.
//
//=========================================================================

//=== Internal Modules ====================================================
use super::event::HostInput;

//=== InputState ==========================================================

/// Per-frame snapshot of host input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub(super) joystick_x: f32,
    pub(super) joystick_y: f32,
    pub(super) aim_screen_x: f32,
    pub(super) aim_screen_y: f32,
    pub(super) fire_pressed: bool,
    pub(super) jump_pressed: bool,
    pub(super) special_pressed: bool,
}

impl InputState {
    //--- Constructor ------------------------------------------------------
    pub fn new() -> Self {
        Self::default()
    }

    //--- Setters ----------------------------------------------------------

    /// Stores joystick deflection, clamping both axes to `[-1, 1]`.
    pub(super) fn set_movement(&mut self, x: f32, y: f32) {
        self.joystick_x = clamp_axis(x);
        self.joystick_y = clamp_axis(y);
    }

    /// Stores the aim point verbatim (screen space, not normalized).
    pub(super) fn set_aim(&mut self, screen_x: f32, screen_y: f32) {
        self.aim_screen_x = screen_x;
        self.aim_screen_y = screen_y;
    }

    //--- apply() ----------------------------------------------------------
    //
    // Applies a host sample to the snapshot. Weapon switches carry no
    // state and are ignored here; the input system forwards them directly.
    //
    pub(super) fn apply(&mut self, input: HostInput) {
        match input {
            HostInput::Movement { x, y } => self.set_movement(x, y),
            HostInput::Aim { x, y } => self.set_aim(x, y),
            HostInput::Fire(pressed) => self.fire_pressed = pressed,
            HostInput::Jump(pressed) => self.jump_pressed = pressed,
            HostInput::Special(pressed) => self.special_pressed = pressed,
            HostInput::Clear => self.clear(),
            HostInput::NextWeapon | HostInput::PrevWeapon => {}
        }
    }

    //--- clear() ----------------------------------------------------------
    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }

    //--- Queries ----------------------------------------------------------

    /// Joystick deflection `(x, y)`, each in `[-1, 1]`.
    pub fn joystick(&self) -> (f32, f32) {
        (self.joystick_x, self.joystick_y)
    }

    /// Raw aim point in screen coordinates.
    pub fn aim_screen(&self) -> (f32, f32) {
        (self.aim_screen_x, self.aim_screen_y)
    }

    pub fn fire_pressed(&self) -> bool {
        self.fire_pressed
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn special_pressed(&self) -> bool {
        self.special_pressed
    }
}

//--- clamp_axis() --------------------------------------------------------
//
// NaN collapses to 0 so a bad sample from the host cannot poison later
// comparisons in the translator.
//
fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
