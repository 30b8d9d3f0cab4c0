//=========================================================================
// Input Handle & Collector
//=========================================================================
//
// Cross-thread path for host input.
//
// Architecture:
//   InputHandle (any thread) → Sender<HostInput> → InputCollector::drain()
//                                                   (frame thread)
//
// The host's setters may run on a UI thread while `update` runs on the
// game loop. Samples are queued and replayed in arrival order at the start
// of the next frame, so the snapshot is only ever touched by one thread.
// Draining is bounded per frame to avoid starving the frame on a flood.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::event::HostInput;

//=== InputHandle =========================================================

/// Cloneable, thread-safe sender for host input.
///
/// Mirrors the setters of [`super::InputSystem`]. Sending never blocks and
/// never fails from the host's point of view: a full queue drops the sample
/// with a warning, a disconnected queue (input system dropped) is ignored.
#[derive(Debug, Clone)]
pub struct InputHandle {
    sender: Sender<HostInput>,
}

impl InputHandle {
    pub fn set_movement_input(&self, x: f32, y: f32) {
        self.send(HostInput::Movement { x, y });
    }

    pub fn set_aim_position(&self, screen_x: f32, screen_y: f32) {
        self.send(HostInput::Aim { x: screen_x, y: screen_y });
    }

    pub fn set_fire_button(&self, pressed: bool) {
        self.send(HostInput::Fire(pressed));
    }

    pub fn set_jump_button(&self, pressed: bool) {
        self.send(HostInput::Jump(pressed));
    }

    pub fn set_special_button(&self, pressed: bool) {
        self.send(HostInput::Special(pressed));
    }

    /// Queues a weapon switch, applied against the view of the next update.
    pub fn next_weapon(&self) {
        self.send(HostInput::NextWeapon);
    }

    /// Queues a weapon switch, applied against the view of the next update.
    pub fn prev_weapon(&self) {
        self.send(HostInput::PrevWeapon);
    }

    pub fn clear_input(&self) {
        self.send(HostInput::Clear);
    }

    /// Queues an arbitrary sample.
    pub fn send(&self, input: HostInput) {
        match self.sender.try_send(input) {
            Ok(()) => trace!(target: "input", "Queued {:?}", input),
            Err(TrySendError::Full(input)) => {
                warn!(target: "input", "Input queue full, dropping {:?}", input);
            }
            Err(TrySendError::Disconnected(_)) => {
                trace!(target: "input", "Input system gone, sample ignored");
            }
        }
    }
}

//=== InputCollector ======================================================

/// Frame-thread side of the host input queue.
pub(crate) struct InputCollector {
    sender: Sender<HostInput>,
    receiver: Receiver<HostInput>,
}

impl InputCollector {
    /// Maximum samples replayed in a single frame.
    pub(crate) const MAX_SAMPLES_PER_FRAME: usize = 256;

    pub(crate) fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a new handle feeding this collector.
    pub(crate) fn handle(&self) -> InputHandle {
        InputHandle {
            sender: self.sender.clone(),
        }
    }

    /// Drains pending samples (bounded), passing each to `sink` in order.
    ///
    /// Returns the number of samples drained.
    pub(crate) fn drain<F>(&self, mut sink: F) -> usize
    where
        F: FnMut(HostInput),
    {
        let mut drained = 0;

        while drained < Self::MAX_SAMPLES_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(input) => {
                    sink(input);
                    drained += 1;
                }
                // The collector holds a sender itself, so the queue cannot
                // disconnect while it is alive.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if drained >= Self::MAX_SAMPLES_PER_FRAME {
            warn!(
                target: "input",
                "Input backlog: drained {} samples this frame, {} pending",
                drained,
                self.receiver.len()
            );
        }

        drained
    }

    /// Discards everything queued so far.
    pub(crate) fn discard_pending(&self) -> usize {
        self.receiver.try_iter().count()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn drain_empty_queue() {
        let collector = InputCollector::new(8);
        let mut seen = Vec::new();

        assert_eq!(collector.drain(|input| seen.push(input)), 0);
        assert!(seen.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let collector = InputCollector::new(8);
        let handle = collector.handle();

        handle.set_fire_button(true);
        handle.set_movement_input(0.5, 0.0);
        handle.set_fire_button(false);

        let mut seen = Vec::new();
        collector.drain(|input| seen.push(input));

        assert_eq!(
            seen,
            vec![
                HostInput::Fire(true),
                HostInput::Movement { x: 0.5, y: 0.0 },
                HostInput::Fire(false),
            ]
        );
    }

    #[test]
    fn full_queue_drops_without_panicking() {
        let collector = InputCollector::new(2);
        let handle = collector.handle();

        handle.set_jump_button(true);
        handle.set_jump_button(false);
        handle.set_jump_button(true); // dropped

        let mut seen = Vec::new();
        collector.drain(|input| seen.push(input));
        assert_eq!(seen, vec![HostInput::Jump(true), HostInput::Jump(false)]);
    }

    #[test]
    fn send_after_collector_dropped_is_ignored() {
        let collector = InputCollector::new(4);
        let handle = collector.handle();
        drop(collector);

        handle.next_weapon();
    }

    #[test]
    fn drain_is_bounded_per_frame() {
        let total = InputCollector::MAX_SAMPLES_PER_FRAME + 10;
        let collector = InputCollector::new(total);
        let handle = collector.handle();

        for _ in 0..total {
            handle.set_fire_button(true);
        }

        assert_eq!(collector.drain(|_| {}), InputCollector::MAX_SAMPLES_PER_FRAME);
        assert_eq!(collector.drain(|_| {}), 10);
    }

    #[test]
    fn handles_work_across_threads() {
        let collector = InputCollector::new(64);
        let handle = collector.handle();

        let worker = thread::spawn(move || {
            for i in 0..10 {
                handle.set_aim_position(i as f32, 0.0);
            }
        });
        worker.join().unwrap();

        let mut last = None;
        collector.drain(|input| last = Some(input));
        assert_eq!(last, Some(HostInput::Aim { x: 9.0, y: 0.0 }));
    }

    #[test]
    fn discard_pending_empties_queue() {
        let collector = InputCollector::new(8);
        let handle = collector.handle();
        handle.set_special_button(true);
        handle.clear_input();

        assert_eq!(collector.discard_pending(), 2);
        assert_eq!(collector.drain(|_| {}), 0);
    }
}
