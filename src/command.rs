//! Boundary command channel.
//!
//! The indicator itself is single-threaded; outside producers (an HTTP
//! handler, an encoder interrupt) enqueue [`IndicatorCommand`]s here and the
//! render loop drains the queue once per tick. Built on `critical-section`
//! and `heapless::Deque`, so it is safe from threads and interrupts alike.
//!
//! Commands apply in arrival order within one tick, so a burst of state
//! changes before a frame collapses to the last one.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::profile::Profile;
use crate::state::EngineState;

/// Commands accepted at the engine boundary.
#[derive(Debug, Clone)]
pub enum IndicatorCommand {
    SetState(EngineState),
    SetProfile(Profile),
    ClearProfile,
    /// Point the eye at a position given as a ratio of the ring in `[0, 1]`.
    SetBlameTarget(f32),
    /// Shift the eye fixpoint by whole pixels.
    Nudge(i32),
    SetMaxBrightness(u8),
}

/// Error returned when enqueueing into a full queue.
#[derive(Debug, Clone)]
pub struct QueueFull(pub IndicatorCommand);

/// A bounded, thread-safe command queue.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<IndicatorCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Try to enqueue a command.
    ///
    /// Returns `Err(QueueFull(command))` if the queue is full.
    pub fn try_send(&self, command: IndicatorCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    /// Dequeue the oldest pending command, if any.
    pub fn try_receive(&self) -> Option<IndicatorCommand> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }

    /// Drain every pending command into `apply`, oldest first.
    pub fn drain_into(&self, mut apply: impl FnMut(IndicatorCommand)) {
        while let Some(command) = self.try_receive() {
            apply(command);
        }
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandQueue`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to enqueue a command.
    ///
    /// Returns `Err(QueueFull(command))` if the queue is full.
    pub fn try_send(&self, command: IndicatorCommand) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }
}
