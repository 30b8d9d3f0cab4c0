//=========================================================================
// Event Loop Driver
//=========================================================================
//
// Drives a Runtime from winit callbacks.
//
// Callback mapping:
//   resumed         → realize window, Runtime::resume
//   suspended       → Runtime::pause
//   memory_warning  → low-memory hook
//   RedrawRequested → Runtime::update, request next frame
//   CloseRequested  → Runtime::shutdown, exit
//
// Touch, mouse and keyboard events go through the InputProcessor and are
// queued on the runtime's InputHandle, so they reach the game through the
// same path as samples sent from host threads.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

//=== Internal Dependencies ===============================================

use super::Runtime;
use crate::core::game::Game;
use crate::core::input::{HostInput, InputHandle};
use crate::platform::input_processor::InputProcessor;
use crate::platform::PlatformError;

//=== run() ===============================================================

pub(super) fn run<G: Game>(runtime: Runtime<G>) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut driver = Driver::new(runtime);
    event_loop
        .run_app(&mut driver)
        .map_err(PlatformError::EventLoopExecution)
}

//=== Driver ==============================================================

struct Driver<G: Game> {
    runtime: Runtime<G>,
    processor: InputProcessor,
    handle: InputHandle,
    last_frame: Option<Instant>,
    suspended: bool,
}

impl<G: Game> Driver<G> {
    fn new(runtime: Runtime<G>) -> Self {
        let (width, _) = runtime.platform.screen_size();
        let handle = runtime.input_handle();

        Self {
            runtime,
            processor: InputProcessor::new(width as f32),
            handle,
            last_frame: None,
            suspended: false,
        }
    }

    //--- frame() ----------------------------------------------------------
    //
    // Elapsed time is measured between redraws; the first frame after a
    // resume reports 0 ms.
    //
    fn frame(&mut self) {
        let now = Instant::now();
        let delta_ms = self
            .last_frame
            .map(|last| now.duration_since(last).as_millis().min(u32::MAX as u128) as u32)
            .unwrap_or(0);
        self.last_frame = Some(now);

        self.runtime.update(delta_ms);
        self.runtime.platform.request_redraw();
    }

    fn send(&self, input: HostInput) {
        trace!(target: "platform::input", "{:?}", input);
        self.handle.send(input);
    }
}

//=== ApplicationHandler ==================================================

impl<G: Game> ApplicationHandler for Driver<G> {
    //--- resumed() --------------------------------------------------------
    //
    // First call creates the window; on mobile it is called again every
    // time the app returns to the foreground.
    //
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.runtime.platform.realize_window(event_loop) {
            error!(target: "platform", "{}", e);
            event_loop.exit();
            return;
        }

        let (width, _) = self.runtime.platform.screen_size();
        self.processor.set_screen_width(width as f32);

        if self.suspended {
            self.suspended = false;
            self.runtime.resume();
        }
        self.last_frame = None;
        self.runtime.platform.request_redraw();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.suspended = true;
        self.processor.reset();
        self.runtime.pause();
    }

    fn memory_warning(&mut self, _event_loop: &ActiveEventLoop) {
        self.runtime.platform.on_low_memory();
    }

    //--- window_event() ---------------------------------------------------

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Close requested, exiting");
                self.runtime.shutdown();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => self.frame(),

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized: {}x{}", size.width, size.height);
                self.processor.set_screen_width(size.width as f32);
            }

            WindowEvent::Focused(false) => {
                self.processor.reset();
                self.send(HostInput::Clear);
            }

            WindowEvent::Touch(touch) => {
                let mut inputs = Vec::with_capacity(2);
                self.processor.process_touch(
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                    touch.location.y as f32,
                    |input| inputs.push(input),
                );
                for input in inputs {
                    self.send(input);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let input = self.processor.process_cursor_moved(position.x as f32, position.y as f32);
                self.send(input);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(input) = self.processor.process_mouse_button(button, state) {
                    self.send(input);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = self.processor.process_key_event(&event) {
                    self.send(input);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.runtime.shutdown();
    }
}
