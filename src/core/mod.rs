//=========================================================================
// Core
//
// Platform-independent half of the bridge.
//
// Responsibilities:
// - Define the contract with the host game engine (`game`)
// - Translate touch input into entity commands (`input`)
// - Describe app lifecycle notifications (`lifecycle`)
//
// Notes:
// Nothing in `core` touches winit, the filesystem or the OS. Everything
// here is driven synchronously by the runtime or by the host shell.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod game;
pub mod input;
pub mod lifecycle;

//=== Re-exports ==========================================================
pub use game::{Entity, Game, LocomotionState, MoveFlags, View};
pub use input::{HostInput, InputHandle, InputState, InputSystem, InputTuning};
pub use lifecycle::{LifecycleAction, LifecycleEvent};
