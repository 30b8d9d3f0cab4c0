//=========================================================================
// Mobile Bridge — Library Root
//
// Glue between a mobile host shell (Android activity, iOS app delegate)
// and the game engine.
//
// Responsibilities:
// - Translate touch-control state (virtual joystick, aim pad, buttons)
//   into per-frame commands on the player-controlled entity
// - Own the window/audio shell and map app lifecycle to pause/resume
// - Offer a single `Runtime` the host drives frame by frame
//
// Typical usage:
// ```no_run
// use mobile_bridge::prelude::*;
//
// fn main() {
//     mobile_bridge::logging::init(log::LevelFilter::Info);
//     let mut runtime = RuntimeBuilder::new().build();
//     runtime.initialize(my_game());
//     runtime.run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine-facing contracts (`Game`, `View`, `Entity`),
// the input translator and lifecycle events. `platform` holds the window,
// audio and environment queries.
//
pub mod core;
pub mod platform;

//--- Entry Points --------------------------------------------------------
//
// `runtime` ties core and platform together; `logging` installs the
// per-target `log` backend.
//
pub mod logging;
pub mod prelude;
mod runtime;

//--- Public Exports ------------------------------------------------------

pub use runtime::{Runtime, RuntimeBuilder};
