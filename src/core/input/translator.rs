//=========================================================================
// Frame Translator
//=========================================================================
//
// Turns one input snapshot into the commands for one frame.
//
// Architecture:
//   InputState + view offset + entity position → translate() → FrameCommands
//   FrameCommands → apply_to(entity)
//
// Translation is pure; the only side effect of a frame (clearing the
// special latch) is performed by the input system after applying.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::PI;

//=== Internal Dependencies ===============================================

use super::input_state::InputState;
use super::tuning::InputTuning;
use crate::core::game::{Entity, LocomotionState, MoveFlags};

//=== VerticalIntent ======================================================

/// Vertical command for a frame. Jump and crouch are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalIntent {
    /// Jump (stick up or jump button).
    Jump,

    /// Crouch, or use the object below (stick down).
    Crouch,
}

impl VerticalIntent {
    /// Vertical delta passed to `try_move`.
    pub const fn delta(self) -> i32 {
        match self {
            Self::Jump => -1,
            Self::Crouch => 1,
        }
    }

    /// Flags passed to `try_move`.
    pub const fn flags(self) -> MoveFlags {
        match self {
            Self::Jump => MoveFlags::JUMP,
            Self::Crouch => MoveFlags::NONE,
        }
    }
}

//=== FrameCommands =======================================================

/// Commands produced for the focused entity in a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCommands {
    /// Always pushed, `Stopped` when there is no horizontal input.
    pub locomotion: LocomotionState,

    /// Signed horizontal move in speed units, if the stick is deflected.
    pub horizontal: Option<i32>,

    /// Jump or crouch, never both.
    pub vertical: Option<VerticalIntent>,

    /// Aim angle in degrees, `0..360`, if an aim point is set.
    pub angle: Option<i32>,

    /// Fire this frame.
    pub fire: bool,

    /// Trigger the special ability this frame.
    pub special: bool,
}

impl FrameCommands {
    //--- apply_to() -------------------------------------------------------
    //
    // Issues the commands in a fixed order: locomotion state, horizontal
    // move, vertical move, angle, fire, special.
    //
    pub fn apply_to<E: Entity + ?Sized>(&self, entity: &mut E) {
        entity.set_locomotion_state(self.locomotion);

        if let Some(dx) = self.horizontal {
            entity.try_move(dx, 0, MoveFlags::NONE);
        }

        if let Some(intent) = self.vertical {
            entity.try_move(0, intent.delta(), intent.flags());
        }

        if let Some(degrees) = self.angle {
            entity.set_angle(degrees);
        }

        if self.fire {
            entity.fire();
        }

        if self.special {
            entity.do_special();
        }
    }
}

//=== translate() =========================================================

/// Translates a snapshot into this frame's commands.
///
/// `view_offset` is the world position of the viewport origin and
/// `entity_position` the focused entity's 16.16 fixed-point position.
pub fn translate(
    state: &InputState,
    tuning: &InputTuning,
    view_offset: (i32, i32),
    entity_position: (i32, i32),
) -> FrameCommands {
    let joy_x = apply_deadzone(state.joystick_x, tuning.deadzone);
    let joy_y = apply_deadzone(state.joystick_y, tuning.deadzone);

    //--- Horizontal -------------------------------------------------------
    let (locomotion, horizontal) = if joy_x != 0.0 {
        let direction = if joy_x > 0.0 { 1 } else { -1 };
        let speed = (joy_x.abs() * tuning.speed_scale) as i32;
        let state = if direction > 0 {
            LocomotionState::RunningForward
        } else {
            LocomotionState::RunningBackward
        };
        (state, Some(direction * speed))
    } else {
        (LocomotionState::Stopped, None)
    };

    //--- Vertical ---------------------------------------------------------
    let vertical = if joy_y < tuning.jump_threshold || state.jump_pressed {
        Some(VerticalIntent::Jump)
    } else if joy_y > tuning.crouch_threshold {
        Some(VerticalIntent::Crouch)
    } else {
        None
    };

    //--- Aim --------------------------------------------------------------
    // (0, 0) means "no aim input"; an aim point exactly at the screen
    // origin is indistinguishable from it and is ignored.
    let angle = if state.aim_screen_x != 0.0 || state.aim_screen_y != 0.0 {
        let world_x = view_offset.0.saturating_add(state.aim_screen_x as i32);
        let world_y = view_offset.1.saturating_add(state.aim_screen_y as i32);
        let (player_x, player_y) = fixed_to_world(entity_position);

        Some(aim_angle(
            world_x.saturating_sub(player_x),
            world_y.saturating_sub(player_y),
        ))
    } else {
        None
    };

    FrameCommands {
        locomotion,
        horizontal,
        vertical,
        angle,
        fire: state.fire_pressed,
        special: state.special_pressed,
    }
}

//=== Helpers =============================================================

/// Zeroes an axis whose magnitude is below the deadzone.
#[inline]
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() < deadzone {
        0.0
    } else {
        value
    }
}

/// Converts a 16.16 fixed-point position to integer world units.
#[inline]
pub fn fixed_to_world((x, y): (i32, i32)) -> (i32, i32) {
    (x >> 16, y >> 16)
}

/// Angle of the vector `(dx, dy)` in whole degrees, normalized to `0..360`.
///
/// Degrees are truncated towards zero before negative values are shifted
/// by a full turn, so `(-1, -1)` yields 225.
pub fn aim_angle(dx: i32, dy: i32) -> i32 {
    let radians = (dy as f32).atan2(dx as f32);
    let degrees = (radians * 180.0 / PI) as i32;
    if degrees < 0 {
        degrees + 360
    } else {
        degrees
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn state_with_stick(x: f32, y: f32) -> InputState {
        let mut state = InputState::new();
        state.set_movement(x, y);
        state
    }

    fn frame(state: &InputState) -> FrameCommands {
        translate(state, &InputTuning::default(), (0, 0), (0, 0))
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        State(LocomotionState),
        Move(i32, i32, MoveFlags),
        Angle(i32),
        Fire,
        Special,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Entity for Recorder {
        fn set_locomotion_state(&mut self, state: LocomotionState) {
            self.calls.push(Call::State(state));
        }
        fn try_move(&mut self, dx: i32, dy: i32, flags: MoveFlags) {
            self.calls.push(Call::Move(dx, dy, flags));
        }
        fn set_angle(&mut self, degrees: i32) {
            self.calls.push(Call::Angle(degrees));
        }
        fn fire(&mut self) {
            self.calls.push(Call::Fire);
        }
        fn do_special(&mut self) {
            self.calls.push(Call::Special);
        }
        fn next_weapon(&mut self) {}
        fn prev_weapon(&mut self) {}
        fn position(&self) -> (i32, i32) {
            (0, 0)
        }
    }

    //=====================================================================
    // Deadzone
    //=====================================================================

    #[test]
    fn deadzone_zeroes_small_values() {
        assert_eq!(apply_deadzone(0.05, 0.1), 0.0);
        assert_eq!(apply_deadzone(-0.099, 0.1), 0.0);
        assert_eq!(apply_deadzone(0.1, 0.1), 0.1);
        assert_eq!(apply_deadzone(-0.7, 0.1), -0.7);
    }

    #[test]
    fn stick_inside_deadzone_behaves_like_zero() {
        let inside = frame(&state_with_stick(0.09, -0.09));
        let zero = frame(&state_with_stick(0.0, 0.0));
        assert_eq!(inside, zero);
    }

    //=====================================================================
    // Horizontal
    //=====================================================================

    #[test]
    fn half_deflection_moves_five_units_forward() {
        let commands = frame(&state_with_stick(0.5, 0.0));
        assert_eq!(commands.locomotion, LocomotionState::RunningForward);
        assert_eq!(commands.horizontal, Some(5));
    }

    #[test]
    fn negative_deflection_moves_backward() {
        let commands = frame(&state_with_stick(-0.75, 0.0));
        assert_eq!(commands.locomotion, LocomotionState::RunningBackward);
        assert_eq!(commands.horizontal, Some(-7));
    }

    #[test]
    fn full_deflection_moves_ten_units() {
        assert_eq!(frame(&state_with_stick(1.0, 0.0)).horizontal, Some(10));
        assert_eq!(frame(&state_with_stick(-1.0, 0.0)).horizontal, Some(-10));
    }

    #[test]
    fn no_horizontal_input_stops() {
        let commands = frame(&state_with_stick(0.0, 0.0));
        assert_eq!(commands.locomotion, LocomotionState::Stopped);
        assert_eq!(commands.horizontal, None);
    }

    #[test]
    fn speed_scale_is_configurable() {
        let tuning = InputTuning::new().with_speed_scale(4.0);
        let commands = translate(&state_with_stick(0.5, 0.0), &tuning, (0, 0), (0, 0));
        assert_eq!(commands.horizontal, Some(2));
    }

    //=====================================================================
    // Vertical
    //=====================================================================

    #[test]
    fn stick_up_jumps() {
        let commands = frame(&state_with_stick(0.0, -0.6));
        assert_eq!(commands.vertical, Some(VerticalIntent::Jump));
    }

    #[test]
    fn jump_button_jumps_even_with_stick_down() {
        let mut state = state_with_stick(0.0, 0.9);
        state.jump_pressed = true;
        assert_eq!(frame(&state).vertical, Some(VerticalIntent::Jump));
    }

    #[test]
    fn stick_down_crouches() {
        let commands = frame(&state_with_stick(0.0, 0.6));
        assert_eq!(commands.vertical, Some(VerticalIntent::Crouch));
    }

    #[test]
    fn stick_near_centre_issues_no_vertical() {
        assert_eq!(frame(&state_with_stick(0.0, 0.5)).vertical, None);
        assert_eq!(frame(&state_with_stick(0.0, -0.5)).vertical, None);
        assert_eq!(frame(&state_with_stick(0.0, 0.3)).vertical, None);
    }

    #[test]
    fn stopped_state_still_set_when_jumping() {
        let mut recorder = Recorder::default();
        frame(&state_with_stick(0.0, -1.0)).apply_to(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                Call::State(LocomotionState::Stopped),
                Call::Move(0, -1, MoveFlags::JUMP),
            ]
        );
    }

    #[test]
    fn jump_and_crouch_never_both_issued() {
        let samples = [-1.0, -0.6, -0.5, -0.2, 0.0, 0.2, 0.5, 0.6, 1.0];
        for &y in &samples {
            for &jump in &[false, true] {
                let mut state = state_with_stick(0.0, y);
                state.jump_pressed = jump;

                let mut recorder = Recorder::default();
                frame(&state).apply_to(&mut recorder);

                let vertical_moves = recorder
                    .calls
                    .iter()
                    .filter(|call| matches!(call, Call::Move(0, dy, _) if *dy != 0))
                    .count();
                assert!(vertical_moves <= 1, "y={} jump={}", y, jump);
            }
        }
    }

    //=====================================================================
    // Aim
    //=====================================================================

    #[test]
    fn aim_angle_quadrants() {
        assert_eq!(aim_angle(1, 0), 0);
        assert_eq!(aim_angle(0, 1), 90);
        assert_eq!(aim_angle(-1, 0), 180);
        assert_eq!(aim_angle(0, -1), 270);
        assert_eq!(aim_angle(1, -1), 315);
        assert_eq!(aim_angle(4, 3), 36);
    }

    #[test]
    fn aim_angle_negative_is_normalized() {
        assert_eq!(aim_angle(-1, -1), 225);
    }

    #[test]
    fn aim_angle_always_in_range() {
        for dx in -20..=20 {
            for dy in -20..=20 {
                let angle = aim_angle(dx, dy);
                assert!((0..360).contains(&angle), "({}, {}) -> {}", dx, dy, angle);
            }
        }
    }

    #[test]
    fn aim_at_origin_is_ignored() {
        let state = InputState::new();
        assert_eq!(frame(&state).angle, None);
    }

    #[test]
    fn aim_uses_view_offset_and_fixed_point_position() {
        let mut state = InputState::new();
        state.set_aim(50.0, 10.0);

        // Aim world point (150, 210); entity at world (150, 110).
        let commands = translate(
            &state,
            &InputTuning::default(),
            (100, 200),
            (150 << 16, 110 << 16),
        );

        assert_eq!(commands.angle, Some(90));
    }

    #[test]
    fn aim_entity_at_origin_towards_minus_one() {
        let mut state = InputState::new();
        state.set_aim(-1.0, -1.0);
        assert_eq!(frame(&state).angle, Some(225));
    }

    #[test]
    fn fixed_point_discards_fraction() {
        assert_eq!(fixed_to_world((0x0003_8000, -0x0001_0000)), (3, -1));
    }

    //=====================================================================
    // Buttons & Ordering
    //=====================================================================

    #[test]
    fn full_frame_applies_in_order() {
        let mut state = state_with_stick(0.5, -0.8);
        state.set_aim(-1.0, -1.0);
        state.fire_pressed = true;
        state.special_pressed = true;

        let mut recorder = Recorder::default();
        frame(&state).apply_to(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                Call::State(LocomotionState::RunningForward),
                Call::Move(5, 0, MoveFlags::NONE),
                Call::Move(0, -1, MoveFlags::JUMP),
                Call::Angle(225),
                Call::Fire,
                Call::Special,
            ]
        );
    }

    #[test]
    fn crouch_uses_plain_flags() {
        let mut recorder = Recorder::default();
        frame(&state_with_stick(0.0, 0.8)).apply_to(&mut recorder);
        assert_eq!(recorder.calls[1], Call::Move(0, 1, MoveFlags::NONE));
    }
}
