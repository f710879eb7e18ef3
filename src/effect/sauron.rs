//! The watching-eye effect.
//!
//! A state machine rendering an ember-colored eye onto the ring: it appears,
//! idles, glances around nervously, moves to new fixpoints, gets mad (flames
//! ramp up, hold, and die down) and disappears. Mode changes are driven
//! externally by profiles or commands; only the appear/disappear ramps and
//! the mad flame phases advance on their own.

use super::habits::{
    BLINK_MAX_INTENSITY, BlinkConfig, BlinkyEye, CuriousConfig, CuriousEye, NervousConfig,
    NervousEye,
};
use super::{step_delta, wrap_index};
use crate::bounds::BoundedInt;
use crate::color::Argb;
use crate::rng::SplitMix64;

// Habit timing, tuned for a 25 Hz tick.
const DITHER_INTERVAL: u32 = 12;
const DITHER_SWING: i32 = 1;
const EYE_MOVE_INTERVAL: u32 = 100;
const EYE_MOVE_DURATION: i32 = 12;
const BLINK_INTERVAL: u32 = 250;
const BLINK_DURATION: i32 = 8;

/// Full eye intensity, in percent.
pub const MAX_INTENSITY: i32 = 100;
const DELTA_INTENSITY: i32 = 5;

// Mad flame tuning. The shape (exponential ramp, hold, exponential decay)
// is the contract; the exact rates are a styling choice.
const FIRE_CAP: i32 = 255;
const MAD_HOLD_FRAMES: u32 = 50;
const FLICKER_MIN_PERCENT: i32 = 70;
const FLICKER_MAX_PERCENT: i32 = 100;

/// Eye behavior modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SauronMode {
    /// Fade the eye in with a fixed intensity ramp.
    Appear,
    /// Hold the gaze at the current fixpoint.
    Idle,
    /// Dither around the fixpoint and blink occasionally.
    Nervous,
    /// Approach a new fixpoint with the parabolic move profile.
    Move,
    /// Flames: ramp up, hold, die down.
    Mad,
    /// Fade the eye out.
    Disappear,
    /// Reserved; renders as a no-op frame.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FirePhase {
    Ramp,
    Hold,
    Decay,
}

#[derive(Debug, Clone)]
struct FireState {
    phase: FirePhase,
    level: i32,
    held: u32,
}

impl FireState {
    const fn cold() -> Self {
        Self {
            phase: FirePhase::Ramp,
            level: 0,
            held: 0,
        }
    }

    fn step(&mut self) {
        match self.phase {
            FirePhase::Ramp => {
                self.level += self.level / 4 + 8;
                if self.level >= FIRE_CAP {
                    self.level = FIRE_CAP;
                    self.phase = FirePhase::Hold;
                    self.held = 0;
                }
            }
            FirePhase::Hold => {
                self.held += 1;
                if self.held >= MAD_HOLD_FRAMES {
                    self.phase = FirePhase::Decay;
                }
            }
            FirePhase::Decay => {
                self.level -= self.level / 8 + 1;
                if self.level < 0 {
                    self.level = 0;
                }
            }
        }
    }
}

pub struct SauronEffect {
    mode: SauronMode,
    intensity: i32,
    template_len: usize,
    delta: usize,
    fixpoint: BoundedInt,
    nervous: NervousEye,
    curious: CuriousEye,
    blinky: BlinkyEye,
    fire: FireState,
    rng: SplitMix64,
}

impl SauronEffect {
    /// `template_len` is the eye template length (pixels times smoothing),
    /// `output_len` the physical pixel count. `seed` feeds every random
    /// stream the eye uses, so a fixed seed replays identically.
    #[allow(clippy::cast_possible_wrap)]
    pub fn new(template_len: usize, output_len: usize, seed: u64) -> Self {
        Self {
            mode: SauronMode::Appear,
            intensity: 0,
            template_len,
            delta: step_delta(template_len, output_len),
            fixpoint: BoundedInt::new(0, template_len as i32),
            nervous: NervousEye::new(
                NervousConfig {
                    interval: DITHER_INTERVAL,
                    section: DITHER_SWING,
                },
                seed ^ 0x6e65_7276,
            ),
            curious: CuriousEye::new(
                CuriousConfig {
                    interval: EYE_MOVE_INTERVAL,
                    section: template_len as i32,
                    duration: EYE_MOVE_DURATION,
                },
                seed ^ 0x6375_7269,
            ),
            blinky: BlinkyEye::new(
                BlinkConfig {
                    interval: BLINK_INTERVAL,
                    duration: BLINK_DURATION,
                },
                seed ^ 0x626c_6e6b,
            ),
            fire: FireState::cold(),
            rng: SplitMix64::new(seed),
        }
    }

    /// Switch the behavior mode. Entering `Mad` restarts the flame cycle.
    pub fn set_mode(&mut self, mode: SauronMode) {
        if mode == SauronMode::Mad && self.mode != SauronMode::Mad {
            self.fire = FireState::cold();
        }
        self.mode = mode;
    }

    pub const fn mode(&self) -> SauronMode {
        self.mode
    }

    /// Current eye intensity in `[0, MAX_INTENSITY]`.
    pub const fn intensity(&self) -> i32 {
        self.intensity
    }

    /// Current flame level of the mad cycle, in `[0, 255]`.
    pub const fn flame_level(&self) -> i32 {
        self.fire.level
    }

    /// Begin a move of `delta` template samples; a `duration` of zero uses
    /// the default move time.
    pub fn start_move(&mut self, delta: i32, duration: i32) {
        self.curious.start_move(delta, duration);
        self.mode = SauronMode::Move;
    }

    /// Shift the persistent fixpoint directly (encoder input).
    pub fn nudge(&mut self, delta: i32) {
        self.fixpoint.add(delta);
    }

    pub const fn fixpoint(&self) -> i32 {
        self.fixpoint.value()
    }

    /// Restart the eye: dark, about to appear. The fixpoint is persistent
    /// and survives restarts.
    pub fn reset(&mut self) {
        self.mode = SauronMode::Appear;
        self.intensity = 0;
        self.fire = FireState::cold();
    }

    /// Advance one frame. `iris` is the dimmed eye base, `blaze` the jitter
    /// envelope, `fire` the burn-noise envelope; all three are one ring long.
    pub fn step(
        &mut self,
        iris: &[Argb],
        blaze: &[Argb],
        fire: &[Argb],
        frame: &mut [Argb],
    ) {
        match self.mode {
            SauronMode::Appear => {
                self.intensity = (self.intensity + DELTA_INTENSITY).min(MAX_INTENSITY);
                if self.intensity == MAX_INTENSITY {
                    self.mode = SauronMode::Idle;
                }
                let at = self.fixpoint.value();
                self.render_spot(iris, blaze, at, self.intensity, frame);
            }
            SauronMode::Idle => {
                let at = self.fixpoint.value();
                self.render_spot(iris, blaze, at, self.intensity, frame);
            }
            SauronMode::Nervous => {
                let dither = self.nervous.dither_step();
                let at = self.fixpoint.relative_to(dither);
                let blink = self.blinky.blink_step();
                let effective = self.intensity * blink / BLINK_MAX_INTENSITY;
                self.render_spot(iris, blaze, at, effective, frame);
            }
            SauronMode::Move => {
                let displacement = self.curious.move_step();
                let at = if self.curious.is_finished() {
                    // Commit the completed move into the persistent fixpoint
                    // exactly once; afterwards the step reports zero offset.
                    let terminal = self.curious.acknowledge_finished();
                    self.fixpoint.add(terminal)
                } else {
                    self.fixpoint.relative_to(displacement)
                };
                self.render_spot(iris, blaze, at, self.intensity, frame);
            }
            SauronMode::Mad => {
                self.fire.step();
                let at = self.fixpoint.value();
                self.render_mad(iris, fire, at, frame);
            }
            SauronMode::Disappear => {
                self.intensity = (self.intensity - DELTA_INTENSITY).max(0);
                if self.intensity == 0 {
                    self.mode = SauronMode::Idle;
                }
                let at = self.fixpoint.value();
                self.render_spot(iris, blaze, at, self.intensity, frame);
            }
            // Reserved mode: leave the frame untouched.
            SauronMode::Random => {}
        }
    }

    /// Blazing-spot primitive shared by all non-mad modes: sample the iris
    /// base at a ring-advancing index, add per-channel jitter bounded by the
    /// blaze envelope, then scale by the current intensity.
    ///
    /// Iris base plus maximum jitter stays within a byte because the base is
    /// dimmed by the blaze margin at template build time.
    fn render_spot(
        &mut self,
        iris: &[Argb],
        blaze: &[Argb],
        at: i32,
        intensity: i32,
        frame: &mut [Argb],
    ) {
        #[allow(clippy::cast_sign_loss)]
        let mut idx = at as usize;
        for pixel in frame.iter_mut() {
            let base = iris[idx];
            let bound = blaze[idx];
            *pixel = Argb::new(
                base.a,
                jitter_channel(&mut self.rng, base.r, bound.r, intensity),
                jitter_channel(&mut self.rng, base.g, bound.g, intensity),
                jitter_channel(&mut self.rng, base.b, bound.b, intensity),
            );
            idx = wrap_index(idx + self.delta, self.template_len);
        }
    }

    /// Mad rendering: the iris flickers between 70 and 100 percent while
    /// random burn noise from the fire envelope is added on top, scaled by
    /// the current flame level.
    fn render_mad(&mut self, iris: &[Argb], fire: &[Argb], at: i32, frame: &mut [Argb]) {
        let flicker = self
            .rng
            .next_inclusive(FLICKER_MIN_PERCENT, FLICKER_MAX_PERCENT);

        #[allow(clippy::cast_sign_loss)]
        let mut idx = at as usize;
        for pixel in frame.iter_mut() {
            let base = iris[idx];
            let envelope = fire[idx];
            *pixel = Argb::new(
                base.a,
                burn_channel(&mut self.rng, base.r, envelope.r, flicker, self.fire.level, self.intensity),
                burn_channel(&mut self.rng, base.g, envelope.g, flicker, self.fire.level, self.intensity),
                burn_channel(&mut self.rng, base.b, envelope.b, flicker, self.fire.level, self.intensity),
            );
            idx = wrap_index(idx + self.delta, self.template_len);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn jitter_channel(rng: &mut SplitMix64, base: u8, bound: u8, intensity: i32) -> u8 {
    let lit = u32::from(base) + rng.next_below(u32::from(bound) + 1);
    (lit * intensity as u32 / MAX_INTENSITY as u32) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn burn_channel(
    rng: &mut SplitMix64,
    base: u8,
    envelope: u8,
    flicker: i32,
    fire_level: i32,
    intensity: i32,
) -> u8 {
    let flickered = u32::from(base) * flicker as u32 / 100;
    let burn =
        rng.next_below(u32::from(envelope) + 1) * fire_level as u32 / FIRE_CAP as u32;
    let lit = (flickered + burn).min(255);
    (lit * intensity as u32 / MAX_INTENSITY as u32) as u8
}
