//=========================================================================
// Engine Collaborators
//=========================================================================
//
// Contract between the bridge and the host game engine.
//
// The engine owns the game, its views and every entity. The bridge only
// borrows them for the duration of a call and issues commands through the
// traits below; it never constructs, stores or destroys an entity.
//
// Architecture:
//   Game ──first_view_mut()──> View ──focus_mut()──> Entity (commands)
//
//=========================================================================

//=== LocomotionState =====================================================

/// Locomotion intent pushed to the focused entity each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionState {
    /// No horizontal input.
    #[default]
    Stopped,

    /// Running towards positive x.
    RunningForward,

    /// Running towards negative x.
    RunningBackward,
}

//=== MoveFlags ===========================================================

/// Flag set accompanying a `try_move` command.
///
/// Only the jump bit is defined. Flags compare by raw value so engines can
/// forward them untouched to their own movement code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u8);

impl MoveFlags {
    /// Plain move.
    pub const NONE: Self = Self(0);

    /// Move is a jump.
    pub const JUMP: Self = Self(1);

    /// Raw bit value as understood by the engine.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

//=== Entity ==============================================================

/// Command interface of a player-controlled game object.
pub trait Entity {
    /// Sets the entity's locomotion (AI) state.
    fn set_locomotion_state(&mut self, state: LocomotionState);

    /// Attempts a relative move; the engine resolves physics and collisions.
    fn try_move(&mut self, dx: i32, dy: i32, flags: MoveFlags);

    /// Sets the facing/aim angle in whole degrees, `0..360`.
    fn set_angle(&mut self, degrees: i32);

    /// Fires the current weapon.
    fn fire(&mut self);

    /// Triggers the special ability.
    fn do_special(&mut self);

    /// Switches to the next weapon.
    fn next_weapon(&mut self);

    /// Switches to the previous weapon.
    fn prev_weapon(&mut self);

    /// World position in 16.16 fixed point.
    fn position(&self) -> (i32, i32);
}

//=== View ================================================================

/// Viewport onto the game world.
pub trait View {
    /// Concrete entity type this view can focus.
    type Entity: Entity;

    /// World-space offset of the viewport's top-left corner.
    fn offset(&self) -> (i32, i32);

    /// The entity the view follows, if any.
    fn focus_mut(&mut self) -> Option<&mut Self::Entity>;
}

//=== Game ================================================================

/// The running game instance.
pub trait Game {
    /// Concrete view type.
    type View: View;

    /// The primary (first) view, if the game has created one yet.
    fn first_view_mut(&mut self) -> Option<&mut Self::View>;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locomotion_defaults_to_stopped() {
        assert_eq!(LocomotionState::default(), LocomotionState::Stopped);
    }

    #[test]
    fn move_flags_bits() {
        assert_eq!(MoveFlags::NONE.bits(), 0);
        assert_eq!(MoveFlags::JUMP.bits(), 1);
        assert_eq!(MoveFlags::default(), MoveFlags::NONE);
    }

    #[test]
    fn move_flags_contains() {
        assert!(MoveFlags::JUMP.contains(MoveFlags::JUMP));
        assert!(MoveFlags::JUMP.contains(MoveFlags::NONE));
        assert!(!MoveFlags::NONE.contains(MoveFlags::JUMP));
    }
}
