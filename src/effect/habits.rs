//! Randomized eye habits.
//!
//! Small frame-counter generators layered on top of the kinematics to make
//! the eye look organic: nervous dithering around the fixpoint, curious
//! moves to new fixpoints, and occasional blinking. Each habit owns its own
//! counter and its own random stream; nothing is shared between them.

use super::eye_movement::EyeMovement;
use crate::rng::SplitMix64;

/// Full intensity of the blink ramp, in percent.
pub const BLINK_MAX_INTENSITY: i32 = 100;

#[derive(Debug, Clone, Copy)]
pub struct NervousConfig {
    /// Frames between new dither draws.
    pub interval: u32,
    /// Maximum deviation from the fixpoint, in either direction.
    pub section: i32,
}

/// Dithers the gaze slightly around the current fixpoint.
#[derive(Debug, Clone)]
pub struct NervousEye {
    interval: u32,
    section: i32,
    countdown: u32,
    delta: i32,
    rng: SplitMix64,
}

impl NervousEye {
    pub const fn new(config: NervousConfig, seed: u64) -> Self {
        Self {
            interval: config.interval,
            section: config.section,
            countdown: 0,
            delta: 0,
            rng: SplitMix64::new(seed),
        }
    }

    /// Current deviation from the fixpoint; redrawn every `interval` frames
    /// and held in between.
    pub fn dither_step(&mut self) -> i32 {
        if self.countdown == 0 {
            self.countdown = self.interval;
            self.delta = self.rng.next_inclusive(-self.section, self.section);
        }
        self.countdown -= 1;
        self.delta
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CuriousConfig {
    /// Frames between random fixpoint changes.
    pub interval: u32,
    /// Maximum random move magnitude, centered on zero.
    pub section: i32,
    /// Default frames a move takes to complete.
    pub duration: i32,
}

/// Moves the eye between fixpoints, either on command or randomly.
#[derive(Debug, Clone)]
pub struct CuriousEye {
    interval: u32,
    section: i32,
    duration: i32,
    countdown: u32,
    movement: EyeMovement,
    rng: SplitMix64,
}

impl CuriousEye {
    pub const fn new(config: CuriousConfig, seed: u64) -> Self {
        Self {
            interval: config.interval,
            section: config.section,
            duration: config.duration,
            countdown: config.interval,
            movement: EyeMovement::new(),
            rng: SplitMix64::new(seed),
        }
    }

    /// Start a commanded move. A `duration` of zero falls back to the
    /// configured default.
    pub fn start_move(&mut self, delta: i32, duration: i32) {
        let frames = if duration > 0 { duration } else { self.duration };
        self.movement.init_new_move(delta, frames);
    }

    /// Advance the current move by one frame.
    pub fn move_step(&mut self) -> i32 {
        self.movement.step()
    }

    /// Roaming mode: every `interval` frames a new random move starts.
    pub fn roam_step(&mut self) -> i32 {
        if self.countdown == 0 {
            self.countdown = self.interval;
            let delta = self.rng.next_below(u32::try_from(self.section).unwrap_or(1));
            #[allow(clippy::cast_possible_wrap)]
            self.movement
                .init_new_move(delta as i32 - self.section / 2, self.duration);
        }
        self.countdown -= 1;
        self.movement.step()
    }

    pub const fn is_finished(&self) -> bool {
        self.movement.is_finished()
    }

    pub fn acknowledge_finished(&mut self) -> i32 {
        self.movement.acknowledge_finished()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlinkConfig {
    /// Frames between blink decisions.
    pub interval: u32,
    /// Frames each ramp half of a blink takes.
    pub duration: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlinkPhase {
    Closing,
    Opening,
    Open,
}

/// Blinks the eye occasionally by ramping intensity down and back up.
#[derive(Debug, Clone)]
pub struct BlinkyEye {
    interval: u32,
    countdown: u32,
    delta: i32,
    phase: BlinkPhase,
    intensity: i32,
    rng: SplitMix64,
}

impl BlinkyEye {
    pub const fn new(config: BlinkConfig, seed: u64) -> Self {
        Self {
            interval: config.interval,
            countdown: 0,
            delta: BLINK_MAX_INTENSITY / 2 / config.duration,
            phase: BlinkPhase::Open,
            intensity: BLINK_MAX_INTENSITY,
            rng: SplitMix64::new(seed),
        }
    }

    /// Current intensity in `[0, BLINK_MAX_INTENSITY]`. Every `interval`
    /// frames a coin flip decides whether a new blink starts.
    pub fn blink_step(&mut self) -> i32 {
        if self.countdown == 0 {
            self.countdown = self.interval;
            if self.phase == BlinkPhase::Open && self.rng.next_below(2) == 1 {
                self.phase = BlinkPhase::Closing;
            }
        }
        self.countdown -= 1;

        match self.phase {
            BlinkPhase::Closing => {
                self.intensity -= self.delta;
                if self.intensity <= 0 {
                    self.intensity = 0;
                    self.phase = BlinkPhase::Opening;
                }
            }
            BlinkPhase::Opening => {
                self.intensity += self.delta;
                if self.intensity >= BLINK_MAX_INTENSITY {
                    self.intensity = BLINK_MAX_INTENSITY;
                    self.phase = BlinkPhase::Open;
                }
            }
            BlinkPhase::Open => {}
        }

        self.intensity
    }
}
