//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit touch, mouse and keyboard events into HostInput samples.
//
// Architecture:
//   winit events → InputProcessor → HostInput → InputHandle → InputSystem
//
// Touch layout mirrors the on-screen controls of the mobile hosts:
//
// ```text
//  ┌───────────────────────┬───────────────────────┐
//  │                       │                       │
//  │   virtual joystick    │     aim + fire        │
//  │  (centered on touch)  │  (touch point = aim)  │
//  │                       │                       │
//  └───────────────────────┴───────────────────────┘
// ```
//
// One finger drives each half; extra fingers on an occupied half are
// ignored until the owning finger lifts. Desktop builds get the same
// controls from mouse (aim/fire) and keyboard (move/jump/special/weapons).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton, TouchPhase},
    keyboard::{KeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::HostInput;

//=== VirtualJoystick =====================================================

/// On-screen stick: maps a drag offset to a normalized vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VirtualJoystick {
    max_distance: f32,
}

impl VirtualJoystick {
    /// Base diameter in pixels.
    pub(crate) const SIZE: f32 = 160.0;

    /// Knob radius; the knob stops at the base edge.
    const KNOB_RADIUS: f32 = 20.0;

    pub(crate) fn new(size: f32) -> Self {
        assert!(
            size > 2.0 * Self::KNOB_RADIUS,
            "Joystick size must exceed the knob diameter, got {}",
            size
        );
        Self {
            max_distance: size / 2.0 - Self::KNOB_RADIUS,
        }
    }

    /// Offset from the stick center to a value in the unit circle.
    pub(crate) fn normalize(&self, dx: f32, dy: f32) -> (f32, f32) {
        let distance = (dx * dx + dy * dy).sqrt();
        let (dx, dy) = if distance > self.max_distance {
            let scale = self.max_distance / distance;
            (dx * scale, dy * scale)
        } else {
            (dx, dy)
        };
        (dx / self.max_distance, dy / self.max_distance)
    }
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new(Self::SIZE)
    }
}

//=== DirectionKeys =======================================================

#[derive(Debug, Default, Clone, Copy)]
struct DirectionKeys {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl DirectionKeys {
    fn axis(negative: bool, positive: bool) -> f32 {
        (positive as i8 - negative as i8) as f32
    }

    fn movement(&self) -> HostInput {
        HostInput::Movement {
            x: Self::axis(self.left, self.right),
            y: Self::axis(self.up, self.down),
        }
    }
}

//=== InputProcessor ======================================================

/// Stateful converter from winit events to [`HostInput`].
///
/// Tracks which finger owns each screen half and which direction keys are
/// held, so releases can be reported correctly.
pub(crate) struct InputProcessor {
    screen_width: f32,
    joystick: VirtualJoystick,

    /// Finger driving the stick and where it first touched.
    stick_touch: Option<(u64, (f32, f32))>,

    /// Finger aiming/firing.
    aim_touch: Option<u64>,

    keys: DirectionKeys,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            joystick: VirtualJoystick::default(),
            stick_touch: None,
            aim_touch: None,
            keys: DirectionKeys::default(),
        }
    }

    /// Updates the split point after a resize.
    pub(crate) fn set_screen_width(&mut self, width: f32) {
        self.screen_width = width;
    }

    /// Forgets held fingers and keys (focus loss, suspend).
    pub(crate) fn reset(&mut self) {
        self.stick_touch = None;
        self.aim_touch = None;
        self.keys = DirectionKeys::default();
    }

    //--- Touch ------------------------------------------------------------

    /// Converts one touch update, emitting zero or more samples.
    pub(crate) fn process_touch<F>(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32, mut emit: F)
    where
        F: FnMut(HostInput),
    {
        match phase {
            TouchPhase::Started => {
                if x < self.screen_width / 2.0 {
                    if self.stick_touch.is_none() {
                        self.stick_touch = Some((id, (x, y)));
                        emit(HostInput::Movement { x: 0.0, y: 0.0 });
                    }
                } else if self.aim_touch.is_none() {
                    self.aim_touch = Some(id);
                    emit(HostInput::Aim { x, y });
                    emit(HostInput::Fire(true));
                }
            }

            TouchPhase::Moved => match self.stick_touch {
                Some((owner, (cx, cy))) if owner == id => {
                    let (nx, ny) = self.joystick.normalize(x - cx, y - cy);
                    emit(HostInput::Movement { x: nx, y: ny });
                }
                _ if self.aim_touch == Some(id) => emit(HostInput::Aim { x, y }),
                _ => {}
            },

            TouchPhase::Ended | TouchPhase::Cancelled => {
                if matches!(self.stick_touch, Some((owner, _)) if owner == id) {
                    self.stick_touch = None;
                    emit(HostInput::Movement { x: 0.0, y: 0.0 });
                } else if self.aim_touch == Some(id) {
                    self.aim_touch = None;
                    emit(HostInput::Fire(false));
                }
            }
        }
    }

    //--- Mouse ------------------------------------------------------------

    pub(crate) fn process_cursor_moved(&self, x: f32, y: f32) -> HostInput {
        HostInput::Aim { x, y }
    }

    /// Left button fires; other buttons are ignored.
    pub(crate) fn process_mouse_button(&self, button: MouseButton, state: ElementState) -> Option<HostInput> {
        match button {
            MouseButton::Left => Some(HostInput::Fire(state.is_pressed())),
            _ => None,
        }
    }

    //--- Keyboard ---------------------------------------------------------

    pub(crate) fn process_key_event(&mut self, event: &KeyEvent) -> Option<HostInput> {
        match event.physical_key {
            PhysicalKey::Code(code) => self.process_key(code, event.state, event.repeat),
            _ => None,
        }
    }

    /// Maps a physical key. Auto-repeat only matters for weapon switching,
    /// which fires once per press.
    fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> Option<HostInput> {
        let pressed = state.is_pressed();

        match code {
            KeyCode::ArrowLeft | KeyCode::KeyA => self.keys.left = pressed,
            KeyCode::ArrowRight | KeyCode::KeyD => self.keys.right = pressed,
            KeyCode::ArrowUp | KeyCode::KeyW => self.keys.up = pressed,
            KeyCode::ArrowDown | KeyCode::KeyS => self.keys.down = pressed,

            KeyCode::Space => return Some(HostInput::Jump(pressed)),
            KeyCode::KeyE => return Some(HostInput::Special(pressed)),

            KeyCode::KeyQ if pressed && !repeat => return Some(HostInput::PrevWeapon),
            KeyCode::KeyR if pressed && !repeat => return Some(HostInput::NextWeapon),

            _ => return None,
        }

        Some(self.keys.movement())
    }
}

//=========================================================================
// Tests
//=========================================================================
