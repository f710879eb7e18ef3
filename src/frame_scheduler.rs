//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::color::Rgb;
use crate::command::CommandQueue;
use crate::indicator::StatusIndicator;

/// Default target frame rate (25 FPS).
pub const DEFAULT_FPS: u32 = 25;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Drains the command queue into the indicator
/// - Renders one frame and hands it to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let queue = CommandQueue::new();
/// let mut scheduler = FrameScheduler::new(indicator, &queue, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_PIXELS: usize,
    const MAX_TEMPLATE: usize,
    const COMMAND_QUEUE_SIZE: usize,
> {
    output: O,
    indicator: StatusIndicator<MAX_PIXELS, MAX_TEMPLATE>,
    commands: &'a CommandQueue<COMMAND_QUEUE_SIZE>,
    frame_buffer: [Rgb; MAX_PIXELS],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<
    'a,
    O: OutputDriver,
    const MAX_PIXELS: usize,
    const MAX_TEMPLATE: usize,
    const COMMAND_QUEUE_SIZE: usize,
> FrameScheduler<'a, O, MAX_PIXELS, MAX_TEMPLATE, COMMAND_QUEUE_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (25 FPS) for frame timing.
    pub fn new(
        indicator: StatusIndicator<MAX_PIXELS, MAX_TEMPLATE>,
        commands: &'a CommandQueue<COMMAND_QUEUE_SIZE>,
        driver: O,
    ) -> Self {
        Self::with_frame_duration(indicator, commands, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        indicator: StatusIndicator<MAX_PIXELS, MAX_TEMPLATE>,
        commands: &'a CommandQueue<COMMAND_QUEUE_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            indicator,
            commands,
            frame_buffer: [Rgb::default(); MAX_PIXELS],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Drains pending commands into the indicator, oldest first
    /// 3. Renders the current frame
    /// 4. Writes to the output driver
    /// 5. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now.
        // This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        // Invalid commands (e.g. an out-of-capacity brightness rebuild) are
        // dropped; the render loop must keep ticking.
        self.commands.drain_into(|command| {
            let _ = self.indicator.apply(command);
        });

        let frame = self.indicator.advance_frame();
        let count = frame.len();
        for (slot, color) in self.frame_buffer[..count].iter_mut().zip(frame) {
            *slot = color.to_rgb();
        }
        self.output.write(&self.frame_buffer[..count]);

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the indicator.
    pub fn indicator(&self) -> &StatusIndicator<MAX_PIXELS, MAX_TEMPLATE> {
        &self.indicator
    }

    /// Get a mutable reference to the indicator.
    pub fn indicator_mut(&mut self) -> &mut StatusIndicator<MAX_PIXELS, MAX_TEMPLATE> {
        &mut self.indicator
    }
}
