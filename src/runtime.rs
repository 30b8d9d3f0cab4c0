//=========================================================================
// Host Runtime
//
// Entry point the mobile host talks to: owns the platform shell, the
// input system and the game, and mirrors the host bridge lifecycle.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  Runtime<G>
//         │                            │
//         ├─ with_tuning()             ├─ initialize(game) / shutdown()
//         ├─ with_channel_capacity()   ├─ pause() / resume()
//         ├─ with_config()             ├─ update(delta_ms)   (frame thread)
//         └─ with_audio()              └─ run()              (winit loop)
// ```
//
// Two driving modes:
// - **Host-driven** (Android): the host's render thread calls `update`
//   every frame and forwards lifecycle callbacks.
// - **Event loop** (desktop, iOS): `run` hands control to winit, which
//   maps its callbacks onto the same methods.
//
//=========================================================================

//=== Submodules ==========================================================

#[cfg(not(target_os = "android"))]
mod event_loop;

//=== External Dependencies ===============================================

use log::{debug, info, trace};

#[cfg(not(target_os = "android"))]
use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::game::Game;
use crate::core::input::{InputHandle, InputSystem, InputTuning};
use crate::core::lifecycle::{LifecycleAction, LifecycleEvent};
use crate::platform::audio::{AudioBackend, SilentAudio};
use crate::platform::config::PlatformConfig;
use crate::platform::{InitFlags, Platform};

#[cfg(not(target_os = "android"))]
use crate::platform::PlatformError;

//=== RuntimeBuilder ======================================================

/// Builder for configuring and constructing a [`Runtime`].
///
/// # Default Values
///
/// - **Tuning**: [`InputTuning::default`] (deadzone 0.1, thresholds ±0.5)
/// - **Channel capacity**: 128 queued host input samples
/// - **Config**: [`PlatformConfig::default`]
/// - **Audio**: [`SilentAudio`]
///
/// # Examples
///
/// ```no_run
/// use mobile_bridge::prelude::*;
/// # struct MyGame;
/// # impl Game for MyGame {
/// #     type View = NoView;
/// #     fn first_view_mut(&mut self) -> Option<&mut NoView> { None }
/// # }
/// # struct NoView;
/// # struct NoEntity;
/// # impl Entity for NoEntity {
/// #     fn set_locomotion_state(&mut self, _: LocomotionState) {}
/// #     fn try_move(&mut self, _: i32, _: i32, _: MoveFlags) {}
/// #     fn set_angle(&mut self, _: i32) {}
/// #     fn fire(&mut self) {}
/// #     fn do_special(&mut self) {}
/// #     fn next_weapon(&mut self) {}
/// #     fn prev_weapon(&mut self) {}
/// #     fn position(&self) -> (i32, i32) { (0, 0) }
/// # }
/// # impl View for NoView {
/// #     type Entity = NoEntity;
/// #     fn offset(&self) -> (i32, i32) { (0, 0) }
/// #     fn focus_mut(&mut self) -> Option<&mut NoEntity> { None }
/// # }
///
/// let mut runtime = RuntimeBuilder::new()
///     .with_tuning(InputTuning::new().with_deadzone(0.15))
///     .with_channel_capacity(256)
///     .build::<MyGame>();
///
/// runtime.initialize(MyGame);
/// runtime.update(16);
/// ```
pub struct RuntimeBuilder {
    tuning: InputTuning,
    channel_capacity: usize,
    config: PlatformConfig,
    audio: Option<Box<dyn AudioBackend>>,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tuning: InputTuning::default(),
            channel_capacity: InputSystem::DEFAULT_QUEUE_CAPACITY,
            config: PlatformConfig::default(),
            audio: None,
        }
    }

    /// Sets the thresholds used by the input translator.
    pub fn with_tuning(mut self, tuning: InputTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Sets how many host input samples may wait for the next frame.
    ///
    /// Samples sent while the queue is full are dropped with a warning.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: PlatformConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the audio mixer paused and resumed across lifecycle changes.
    pub fn with_audio(mut self, audio: impl AudioBackend + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    /// Builds an uninitialized runtime.
    pub fn build<G: Game>(self) -> Runtime<G> {
        info!(
            target: "runtime",
            "Building runtime (channel: {}, deadzone: {})",
            self.channel_capacity,
            self.tuning.deadzone()
        );

        let audio = self.audio.unwrap_or_else(|| Box::new(SilentAudio));

        Runtime {
            platform: Platform::new(self.config, audio),
            input: InputSystem::with_tuning(self.tuning, self.channel_capacity),
            game: None,
            paused: false,
            frames: 0,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// Game host runtime.
///
/// # Lifecycle
///
/// 1. **Build**: `RuntimeBuilder::new().build()`
/// 2. **Initialize**: `initialize(game)` brings up the platform and input
/// 3. **Frames**: `update(delta_ms)` once per rendered frame
/// 4. **Background**: `pause()` / `resume()` (or [`Runtime::handle_lifecycle`])
/// 5. **Shutdown**: `shutdown()` drops the game
///
/// Every call is safe in every state; calls that make no sense yet are
/// ignored.
pub struct Runtime<G: Game> {
    platform: Platform,
    input: InputSystem,
    game: Option<G>,
    paused: bool,
    frames: u64,
}

impl<G: Game> Runtime<G> {
    //--- Initialization ---------------------------------------------------

    /// Takes ownership of the game and starts accepting frames.
    ///
    /// A second call while initialized is ignored and drops `game`.
    pub fn initialize(&mut self, game: G) {
        if self.game.is_some() {
            info!(target: "runtime", "Runtime already initialized");
            return;
        }

        info!(target: "runtime", "Initializing runtime");

        self.platform.initialize(InitFlags::ALL);
        self.input.initialize();
        self.game = Some(game);
        self.paused = false;
        self.frames = 0;

        info!(target: "runtime", "Runtime initialization complete");
    }

    /// Drops the game and tears down the platform. No-op if not initialized.
    pub fn shutdown(&mut self) {
        if self.game.is_none() {
            return;
        }

        info!(target: "runtime", "Shutting down runtime after {} frames", self.frames);

        self.input.shutdown();
        self.game = None;
        self.platform.shutdown();
        self.paused = false;

        info!(target: "runtime", "Runtime shutdown complete");
    }

    //--- Lifecycle --------------------------------------------------------

    /// App going to the background: releases held controls and stops audio.
    pub fn pause(&mut self) {
        info!(target: "runtime", "Pausing");
        self.input.clear_input();
        self.platform.on_pause();
        self.paused = true;
    }

    pub fn resume(&mut self) {
        info!(target: "runtime", "Resuming");
        self.platform.on_resume();
        self.paused = false;
    }

    /// Routes an OS lifecycle notification to `pause`, `resume` or the
    /// low-memory hook.
    pub fn handle_lifecycle(&mut self, event: LifecycleEvent) {
        match event.action() {
            Some(LifecycleAction::Pause) => self.pause(),
            Some(LifecycleAction::Resume) => self.resume(),
            Some(LifecycleAction::LowMemory) => self.platform.on_low_memory(),
            None => debug!(target: "runtime", "Lifecycle event {:?} needs no action", event),
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame of input translation. No-op if not initialized.
    pub fn update(&mut self, delta_ms: u32) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        self.frames += 1;
        trace!(target: "runtime", "Frame {} ({} ms)", self.frames, delta_ms);

        self.input.update(game.first_view_mut());
    }

    //--- Host Commands ----------------------------------------------------

    pub fn next_weapon(&mut self) {
        let view = self.game.as_mut().and_then(Game::first_view_mut);
        self.input.next_weapon(view);
    }

    pub fn prev_weapon(&mut self) {
        let view = self.game.as_mut().and_then(Game::first_view_mut);
        self.input.prev_weapon(view);
    }

    /// Latches the special ability; it fires on the next frame.
    pub fn use_special_ability(&mut self) {
        self.input.set_special_button(true);
    }

    //--- Accessors --------------------------------------------------------

    /// Input setters for the frame thread.
    pub fn input(&mut self) -> &mut InputSystem {
        &mut self.input
    }

    /// Thread-safe input handle for host UI threads.
    pub fn input_handle(&self) -> InputHandle {
        self.input.handle()
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut Platform {
        &mut self.platform
    }

    pub fn game(&self) -> Option<&G> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut G> {
        self.game.as_mut()
    }

    pub fn is_initialized(&self) -> bool {
        self.game.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// Call [`Runtime::initialize`] first; frames are skipped until a game
    /// is present.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits with an error.
    #[cfg(not(target_os = "android"))]
    pub fn run(self) -> Result<(), PlatformError> {
        if !self.is_initialized() {
            warn!(target: "runtime", "Running without a game; frames will be skipped");
        }

        info!(target: "runtime", "Entering event loop");
        let result = event_loop::run(self);
        info!(target: "runtime", "Event loop exited");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::{Entity, LocomotionState, MoveFlags, View};
    use crate::core::input::HostInput;
    use std::sync::{Arc, Mutex};

    //--- Test Doubles -----------------------------------------------------

    #[derive(Debug, Default)]
    struct Hero {
        moves: Vec<(i32, i32, MoveFlags)>,
        locomotion: Vec<LocomotionState>,
        weapon: i32,
        specials: u32,
    }

    impl Entity for Hero {
        fn set_locomotion_state(&mut self, state: LocomotionState) {
            self.locomotion.push(state);
        }
        fn try_move(&mut self, dx: i32, dy: i32, flags: MoveFlags) {
            self.moves.push((dx, dy, flags));
        }
        fn set_angle(&mut self, _degrees: i32) {}
        fn fire(&mut self) {}
        fn do_special(&mut self) {
            self.specials += 1;
        }
        fn next_weapon(&mut self) {
            self.weapon += 1;
        }
        fn prev_weapon(&mut self) {
            self.weapon -= 1;
        }
        fn position(&self) -> (i32, i32) {
            (0, 0)
        }
    }

    #[derive(Debug, Default)]
    struct Camera {
        hero: Hero,
    }

    impl View for Camera {
        type Entity = Hero;

        fn offset(&self) -> (i32, i32) {
            (0, 0)
        }
        fn focus_mut(&mut self) -> Option<&mut Hero> {
            Some(&mut self.hero)
        }
    }

    #[derive(Debug, Default)]
    struct Level {
        camera: Camera,
    }

    impl Game for Level {
        type View = Camera;

        fn first_view_mut(&mut self) -> Option<&mut Camera> {
            Some(&mut self.camera)
        }
    }

    fn hero(runtime: &Runtime<Level>) -> &Hero {
        &runtime.game().unwrap().camera.hero
    }

    #[derive(Clone, Default)]
    struct CountingAudio {
        pauses: Arc<Mutex<u32>>,
    }

    impl AudioBackend for CountingAudio {
        fn pause_all(&mut self) {
            *self.pauses.lock().unwrap() += 1;
        }
        fn resume_all(&mut self) {}
    }

    //=====================================================================
    // RuntimeBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = RuntimeBuilder::new();
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.tuning, InputTuning::default());
        assert!(builder.audio.is_none());
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = RuntimeBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        RuntimeBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_passes_tuning_through() {
        let tuning = InputTuning::new().with_deadzone(0.3);
        let runtime = RuntimeBuilder::new().with_tuning(tuning).build::<Level>();
        assert_eq!(runtime.input.tuning(), &tuning);
    }

    #[test]
    fn builder_passes_config_through() {
        let runtime = RuntimeBuilder::new()
            .with_config(PlatformConfig::new().with_window_title("Test"))
            .build::<Level>();
        assert_eq!(runtime.platform().config().window_title(), "Test");
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn update_before_initialize_is_noop() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.input().set_movement_input(1.0, 0.0);

        runtime.update(16);

        assert_eq!(runtime.frame_count(), 0);
        assert!(!runtime.is_initialized());
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.initialize(Level::default());
        runtime.input().set_movement_input(1.0, 0.0);
        runtime.update(16);

        runtime.initialize(Level::default());

        assert_eq!(hero(&runtime).moves.len(), 1, "Second initialize must keep the first game");
        assert!(runtime.platform().is_initialized());
    }

    #[test]
    fn initialize_resets_input() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.input().set_fire_button(true);

        runtime.initialize(Level::default());

        assert!(!runtime.input().state().fire_pressed());
    }

    #[test]
    fn shutdown_drops_game() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.shutdown();

        runtime.initialize(Level::default());
        runtime.shutdown();
        runtime.shutdown();

        assert!(runtime.game().is_none());
        assert!(!runtime.platform().is_initialized());
    }

    #[test]
    fn pause_clears_held_input() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.initialize(Level::default());
        runtime.input().set_movement_input(1.0, 0.0);
        runtime.input().set_fire_button(true);

        runtime.pause();

        assert!(runtime.is_paused());
        assert_eq!(runtime.input().state().joystick(), (0.0, 0.0));
        assert!(!runtime.input().state().fire_pressed());

        runtime.resume();
        assert!(!runtime.is_paused());
    }

    #[test]
    fn lifecycle_events_drive_pause_and_audio() {
        let audio = CountingAudio::default();
        let pauses = Arc::clone(&audio.pauses);
        let mut runtime = RuntimeBuilder::new().with_audio(audio).build::<Level>();
        runtime.initialize(Level::default());

        runtime.handle_lifecycle(LifecycleEvent::WillEnterBackground);
        runtime.handle_lifecycle(LifecycleEvent::DidEnterBackground);
        assert!(runtime.is_paused());

        runtime.handle_lifecycle(LifecycleEvent::DidEnterForeground);
        assert!(!runtime.is_paused());
        assert_eq!(*pauses.lock().unwrap(), 1);
    }

    //=====================================================================
    // Frame Tests
    //=====================================================================

    #[test]
    fn update_drives_focused_entity() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.initialize(Level::default());
        runtime.input().set_movement_input(0.5, 0.0);

        runtime.update(16);

        assert_eq!(runtime.frame_count(), 1);
        assert_eq!(hero(&runtime).locomotion, vec![LocomotionState::RunningForward]);
        assert_eq!(hero(&runtime).moves, vec![(5, 0, MoveFlags::NONE)]);
    }

    #[test]
    fn weapon_commands_reach_focus() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.next_weapon();

        runtime.initialize(Level::default());
        runtime.next_weapon();
        runtime.next_weapon();
        runtime.prev_weapon();

        assert_eq!(hero(&runtime).weapon, 1);
    }

    #[test]
    fn special_ability_fires_once() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.initialize(Level::default());

        runtime.use_special_ability();
        runtime.update(16);
        runtime.update(16);

        assert_eq!(hero(&runtime).specials, 1);
    }

    #[test]
    fn pause_drops_input_queued_before_it() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.initialize(Level::default());
        let handle = runtime.input_handle();
        handle.set_movement_input(1.0, 0.0);
        handle.set_fire_button(true);

        runtime.pause();
        runtime.resume();
        runtime.update(16);

        assert_eq!(runtime.input().state().joystick(), (0.0, 0.0));
        assert!(!runtime.input().state().fire_pressed());
        assert!(hero(&runtime).moves.is_empty());
        assert_eq!(hero(&runtime).locomotion, vec![LocomotionState::Stopped]);
    }

    #[test]
    fn handle_input_lands_on_next_frame() {
        let mut runtime = RuntimeBuilder::new().build::<Level>();
        runtime.initialize(Level::default());
        let handle = runtime.input_handle();

        std::thread::spawn(move || handle.send(HostInput::Jump(true)))
            .join()
            .unwrap();
        runtime.update(16);

        assert_eq!(hero(&runtime).moves, vec![(0, -1, MoveFlags::JUMP)]);
    }
}
