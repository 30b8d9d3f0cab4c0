//=========================================================================
// Input System
//
// Host-facing interface of the touch input translator.
// Owns the `InputState` snapshot, accepts setter calls from the host and
// reconciles the snapshot against the focused entity once per frame.
//
// Responsibilities:
// - Store host samples (joystick, aim point, button latches)
// - Replay samples queued from other threads through `InputHandle`
// - Translate the snapshot into entity commands in `update()`
// - Forward weapon switches straight to the focused entity
//
// Notes:
// Nothing here can fail. A missing view or focus turns every call into a
// no-op and leaves the snapshot untouched.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod event;
pub mod translator;
mod handle;
mod input_state;
mod tuning;

//=== Public Exports ======================================================
pub use event::HostInput;
pub use handle::InputHandle;
pub use input_state::InputState;
pub use translator::{FrameCommands, VerticalIntent};
pub use tuning::InputTuning;

//=== External Crates =====================================================
use log::{debug, trace};

//=== Internal Imports ====================================================
use crate::core::game::{Entity, View};
use handle::InputCollector;

//=== InputSystem =========================================================
//
// Single owner of the input snapshot. Direct setters take `&mut self`;
// threads that cannot borrow the system use an `InputHandle` instead.
//
pub struct InputSystem {
    state: InputState,
    tuning: InputTuning,
    collector: InputCollector,
}

impl InputSystem {
    /// Default capacity of the cross-thread input queue.
    pub const DEFAULT_QUEUE_CAPACITY: usize = 128;

    //--- Construction -----------------------------------------------------

    /// Creates an input system with a zeroed snapshot and default tuning.
    pub fn new() -> Self {
        Self::with_tuning(InputTuning::default(), Self::DEFAULT_QUEUE_CAPACITY)
    }

    /// Creates an input system with custom tuning and queue capacity.
    ///
    /// # Panics
    ///
    /// Panics if `queue_capacity == 0`.
    pub fn with_tuning(tuning: InputTuning, queue_capacity: usize) -> Self {
        assert!(queue_capacity > 0, "Input queue capacity must be positive");
        Self {
            state: InputState::new(),
            tuning,
            collector: InputCollector::new(queue_capacity),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Resets the snapshot and drops anything still queued.
    pub fn initialize(&mut self) {
        let dropped = self.collector.discard_pending();
        self.state.clear();
        debug!(target: "input", "Input initialized ({} queued samples dropped)", dropped);
    }

    /// Clears all input.
    pub fn shutdown(&mut self) {
        self.clear_input();
    }

    //--- Host Setters -----------------------------------------------------

    /// Stores joystick deflection, each axis clamped to `[-1, 1]`.
    pub fn set_movement_input(&mut self, x: f32, y: f32) {
        self.state.set_movement(x, y);
    }

    /// Stores the aim point in screen coordinates, unclamped.
    pub fn set_aim_position(&mut self, screen_x: f32, screen_y: f32) {
        self.state.set_aim(screen_x, screen_y);
    }

    pub fn set_fire_button(&mut self, pressed: bool) {
        self.state.fire_pressed = pressed;
    }

    pub fn set_jump_button(&mut self, pressed: bool) {
        self.state.jump_pressed = pressed;
    }

    pub fn set_special_button(&mut self, pressed: bool) {
        self.state.special_pressed = pressed;
    }

    /// Resets the snapshot to defaults (used on pause).
    ///
    /// Samples still queued on an [`InputHandle`] are dropped too, so a
    /// control held before the pause cannot come back on the next frame.
    pub fn clear_input(&mut self) {
        let dropped = self.collector.discard_pending();
        if dropped > 0 {
            debug!(target: "input", "Input cleared ({} queued samples dropped)", dropped);
        }
        self.state.clear();
    }

    //--- Weapon Switching -------------------------------------------------

    /// Forwards "next weapon" to the focused entity, if any.
    pub fn next_weapon<V: View>(&self, view: Option<&mut V>) {
        if let Some(entity) = view.and_then(|v| v.focus_mut()) {
            entity.next_weapon();
        }
    }

    /// Forwards "previous weapon" to the focused entity, if any.
    pub fn prev_weapon<V: View>(&self, view: Option<&mut V>) {
        if let Some(entity) = view.and_then(|v| v.focus_mut()) {
            entity.prev_weapon();
        }
    }

    //--- Cross-thread Input -----------------------------------------------

    /// Returns a sender for host threads that cannot borrow the system.
    pub fn handle(&self) -> InputHandle {
        self.collector.handle()
    }

    //--- update() ---------------------------------------------------------
    //
    // Per-frame reconciliation:
    //  1. Replay queued host samples (in order)
    //  2. Bail out if there is no view or no focused entity
    //  3. Translate the snapshot and apply it to the entity
    //  4. Clear the special latch once it has fired
    //
    // Queued samples count as setter calls made before the frame, so they
    // land in the snapshot even when there is no view to drive.
    //
    pub fn update<V: View>(&mut self, mut view: Option<&mut V>) {
        self.pump(view.as_deref_mut());

        let Some(view) = view else {
            return;
        };
        let offset = view.offset();
        let Some(entity) = view.focus_mut() else {
            return;
        };

        let commands = translator::translate(&self.state, &self.tuning, offset, entity.position());
        trace!(target: "input", "Frame commands: {:?}", commands);
        commands.apply_to(entity);

        if commands.special {
            self.state.special_pressed = false;
        }
    }

    //--- pump() -----------------------------------------------------------
    //
    // Applies queued samples. Weapon switches are forwarded against the
    // view of this frame (dropped if there is none).
    //
    fn pump<V: View>(&mut self, mut view: Option<&mut V>) {
        let state = &mut self.state;
        self.collector.drain(|input| {
            if !input.is_command() {
                state.apply(input);
                return;
            }

            let Some(entity) = view.as_deref_mut().and_then(|v| v.focus_mut()) else {
                return;
            };
            match input {
                HostInput::NextWeapon => entity.next_weapon(),
                HostInput::PrevWeapon => entity.prev_weapon(),
                _ => {}
            }
        });
    }

    //--- Query Methods ----------------------------------------------------

    /// Current snapshot (for debugging and host-side display).
    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn tuning(&self) -> &InputTuning {
        &self.tuning
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
