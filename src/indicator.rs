//! Status Indicator - the engine facade.
//!
//! Owns every template and sub-effect, tracks the current engine state and
//! an optional scripted profile, cross-fades between consecutive states and
//! exposes the single per-frame rendering entry point.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Argb, blend_counted};
use crate::command::IndicatorCommand;
use crate::effect::{PulseEffect, RotateEffect, SauronEffect, SauronMode};
use crate::error::ConfigError;
use crate::profile::{self, DURATION_FOREVER, Profile, ProfileElement};
use crate::state::EngineState;
use crate::template::TemplateSet;

/// Frames a cross-fade between two states takes.
pub const FADING_CYCLES: u8 = 10;

// Shortest usable pulse template: four segments of at least two samples.
const MIN_PULSE_LEN: usize = 8;

/// Construction-time configuration.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorConfig {
    /// Physical pixels on the ring.
    pub pixel_count: usize,
    /// Intermediate ring-template samples per physical pixel.
    pub smoothing: usize,
    /// Length of the pulse templates (stable/unstable/bad).
    pub pulse_len: usize,
    /// Brightness ceiling applied to every template.
    pub max_brightness: u8,
    /// Seed for the eye's random streams.
    pub seed: u64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            pixel_count: 12,
            smoothing: 3,
            pulse_len: 72,
            max_brightness: 255,
            seed: 0x0DDB_1A5E_5BAD_5EED,
        }
    }
}

/// Per-state sub-effects, grouped so rendering can borrow them apart from
/// the output buffers.
struct EffectBank {
    rotate: RotateEffect,
    stable: PulseEffect,
    unstable: PulseEffect,
    bad: PulseEffect,
    sauron: SauronEffect,
}

pub struct StatusIndicator<const MAX_PIXELS: usize, const MAX_TEMPLATE: usize> {
    pixel_count: usize,
    smoothing: usize,
    pulse_len: usize,
    ring_len: usize,

    templates: TemplateSet<MAX_TEMPLATE>,
    effects: EffectBank,

    state: EngineState,
    fade_source: EngineState,
    fade_remaining: u8,

    active_profile: Option<Profile>,
    profile_index: usize,
    profile_elapsed: u32,
    element_entered: bool,

    // Reused across frames; callers must copy if they retain a frame.
    out: [Argb; MAX_PIXELS],
    incoming: [Argb; MAX_PIXELS],
    outgoing: [Argb; MAX_PIXELS],
}

impl<const MAX_PIXELS: usize, const MAX_TEMPLATE: usize>
    StatusIndicator<MAX_PIXELS, MAX_TEMPLATE>
{
    /// Build an indicator, validating the configuration eagerly so sizing
    /// mistakes never surface as a panic on the first render.
    pub fn new(config: &IndicatorConfig) -> Result<Self, ConfigError> {
        if config.pixel_count == 0 {
            return Err(ConfigError::ZeroPixelCount);
        }
        if config.smoothing == 0 {
            return Err(ConfigError::ZeroSmoothing);
        }
        let ring_len = config.pixel_count * config.smoothing;
        if ring_len < 2 {
            return Err(ConfigError::RingTooShort);
        }
        if config.pulse_len < config.pixel_count || config.pulse_len < MIN_PULSE_LEN {
            return Err(ConfigError::PulseTooShort);
        }
        if config.pixel_count > MAX_PIXELS
            || ring_len > MAX_TEMPLATE
            || config.pulse_len > MAX_TEMPLATE
        {
            return Err(ConfigError::CapacityExceeded);
        }

        let templates =
            TemplateSet::build(ring_len, config.pulse_len, config.max_brightness)?;

        Ok(Self {
            pixel_count: config.pixel_count,
            smoothing: config.smoothing,
            pulse_len: config.pulse_len,
            ring_len,
            templates,
            effects: EffectBank {
                rotate: RotateEffect::new(ring_len, config.pixel_count),
                stable: PulseEffect::new(config.pulse_len, config.pixel_count),
                unstable: PulseEffect::new(config.pulse_len, config.pixel_count),
                bad: PulseEffect::new(config.pulse_len, config.pixel_count),
                sauron: SauronEffect::new(ring_len, config.pixel_count, config.seed),
            },
            state: EngineState::Blank,
            fade_source: EngineState::Blank,
            fade_remaining: 0,
            active_profile: None,
            profile_index: 0,
            profile_elapsed: 0,
            element_entered: false,
            out: [Argb::BLACK; MAX_PIXELS],
            incoming: [Argb::BLACK; MAX_PIXELS],
            outgoing: [Argb::BLACK; MAX_PIXELS],
        })
    }

    pub const fn state(&self) -> EngineState {
        self.state
    }

    pub const fn has_profile(&self) -> bool {
        self.active_profile.is_some()
    }

    /// Switch to a new state, starting a cross-fade from the old one and
    /// resetting the incoming state's sub-effect so its animation restarts
    /// at a known phase. Setting the current state again is a no-op.
    pub fn set_state(&mut self, state: EngineState) {
        if state == self.state {
            return;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[StatusIndicator.set_state] {} -> {}",
            self.state.as_str(),
            state.as_str()
        );

        self.fade_source = self.state;
        self.fade_remaining = FADING_CYCLES;
        self.state = state;

        match state {
            EngineState::Progress => self.effects.rotate.reset(),
            EngineState::Stable => self.effects.stable.reset(),
            EngineState::Unstable => self.effects.unstable.reset(),
            EngineState::Bad => self.effects.bad.reset(),
            EngineState::Sauron => self.effects.sauron.reset(),
            EngineState::Blank | EngineState::Idle => {}
        }
    }

    /// Replace the active script; `None` cancels playback and returns to
    /// plain single-state rendering.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.active_profile = profile;
        self.profile_index = 0;
        self.profile_elapsed = 0;
        self.element_entered = false;
    }

    /// Build and start a blame profile pointing the eye at `ratio` of the
    /// ring (clamped into `[0, 1]`), taking the shortest wrap direction from
    /// the current fixpoint.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn set_blame_target(&mut self, ratio: f32) {
        let ratio = ratio.clamp(0.0, 1.0);
        let span = self.ring_len as i32;
        let target = (ratio * self.ring_len as f32) as i32 % span;
        let half = span / 2;
        let delta = (target - self.effects.sauron.fixpoint() + half).rem_euclid(span) - half;
        self.set_profile(Some(profile::blame(delta)));
    }

    /// Current eye fixpoint as a ratio of the ring, in `[0, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn fix_point_position(&self) -> f32 {
        self.effects.sauron.fixpoint() as f32 / self.ring_len as f32
    }

    /// Shift the eye fixpoint by whole pixels (encoder increments).
    #[allow(clippy::cast_possible_wrap)]
    pub fn nudge_fixpoint(&mut self, delta: i32) {
        self.effects.sauron.nudge(delta * self.smoothing as i32);
    }

    /// Change the brightness ceiling. Regenerates every template; the
    /// sub-effect cursors keep their phase.
    pub fn set_max_brightness(&mut self, brightness: u8) -> Result<(), ConfigError> {
        self.templates = TemplateSet::build(self.ring_len, self.pulse_len, brightness)?;
        Ok(())
    }

    /// Apply one boundary command.
    pub fn apply(&mut self, command: IndicatorCommand) -> Result<(), ConfigError> {
        match command {
            IndicatorCommand::SetState(state) => self.set_state(state),
            IndicatorCommand::SetProfile(profile) => self.set_profile(Some(profile)),
            IndicatorCommand::ClearProfile => self.set_profile(None),
            IndicatorCommand::SetBlameTarget(ratio) => self.set_blame_target(ratio),
            IndicatorCommand::Nudge(delta) => self.nudge_fixpoint(delta),
            IndicatorCommand::SetMaxBrightness(brightness) => {
                self.set_max_brightness(brightness)?;
            }
        }
        Ok(())
    }

    /// The per-tick entry point: plays back the profile, renders the current
    /// state, blends in the outgoing state while a fade is running and
    /// returns one frame of pixels.
    ///
    /// The returned slice aliases an internal buffer reused every frame.
    pub fn advance_frame(&mut self) -> &[Argb] {
        self.enter_profile_element();

        let count = self.pixel_count;
        Self::generate_image(
            &mut self.effects,
            &self.templates,
            self.state,
            &mut self.incoming[..count],
        );

        if self.fade_remaining > 0 {
            Self::generate_image(
                &mut self.effects,
                &self.templates,
                self.fade_source,
                &mut self.outgoing[..count],
            );
            let elapsed = FADING_CYCLES - self.fade_remaining + 1;
            let remaining = self.fade_remaining - 1;
            for idx in 0..count {
                self.out[idx] = blend_counted(
                    self.incoming[idx],
                    self.outgoing[idx],
                    elapsed,
                    remaining,
                    FADING_CYCLES,
                );
            }
            self.fade_remaining -= 1;
        } else {
            self.out[..count].copy_from_slice(&self.incoming[..count]);
        }

        self.count_profile_frame();

        &self.out[..count]
    }

    /// Current rotate cursor, exposed for deterministic phase checks.
    pub const fn progress_phase(&self) -> usize {
        self.effects.rotate.cursor()
    }

    /// Apply the current profile element before rendering, so the frame about
    /// to be drawn always shows the element's state.
    fn enter_profile_element(&mut self) {
        let Some(profile) = &self.active_profile else {
            return;
        };
        let Some(element) = profile.get(self.profile_index).copied() else {
            // Empty profile, nothing to play.
            self.active_profile = None;
            return;
        };

        if !self.element_entered {
            self.element_entered = true;
            self.enter_element(&element);
        }
    }

    /// Account one rendered frame against the current profile element, after
    /// rendering. Every element gets exactly `duration` frames on the ring;
    /// the element reached by an advance takes effect for the next frame.
    /// Exhausting the list clears the profile and leaves the last state in
    /// effect under direct-state rules.
    fn count_profile_frame(&mut self) {
        let Some(profile) = &self.active_profile else {
            return;
        };
        let Some(element) = profile.get(self.profile_index).copied() else {
            return;
        };
        if element.duration == DURATION_FOREVER {
            return;
        }

        self.profile_elapsed += 1;
        if self.profile_elapsed < element.duration {
            return;
        }

        self.profile_index += 1;
        self.profile_elapsed = 0;
        let next = self
            .active_profile
            .as_ref()
            .and_then(|p| p.get(self.profile_index).copied());
        match next {
            Some(element) => self.enter_element(&element),
            None => {
                self.active_profile = None;
                self.element_entered = false;
            }
        }
    }

    /// Apply one profile element. Eye tags on a non-Sauron element are
    /// ignored; the element's state always governs dispatch.
    fn enter_element(&mut self, element: &ProfileElement) {
        self.set_state(element.state);
        if element.state != EngineState::Sauron {
            return;
        }
        match element.sauron_mode {
            Some(SauronMode::Move) => {
                let duration = if element.duration == DURATION_FOREVER {
                    0
                } else {
                    i32::try_from(element.duration).unwrap_or(0)
                };
                self.effects.sauron.start_move(element.move_delta, duration);
            }
            Some(mode) => self.effects.sauron.set_mode(mode),
            None => {}
        }
    }

    /// Render one state into `frame`, advancing that state's sub-effect.
    fn generate_image(
        effects: &mut EffectBank,
        templates: &TemplateSet<MAX_TEMPLATE>,
        state: EngineState,
        frame: &mut [Argb],
    ) {
        match state {
            EngineState::Blank => frame.fill(Argb::BLACK),
            EngineState::Idle => frame.fill(templates.idle),
            EngineState::Progress => effects.rotate.step(&templates.progress, frame),
            EngineState::Stable => effects.stable.step(&templates.stable, frame),
            EngineState::Unstable => effects.unstable.step(&templates.unstable, frame),
            EngineState::Bad => effects.bad.step(&templates.bad, frame),
            EngineState::Sauron => effects.sauron.step(
                &templates.iris,
                &templates.blaze,
                &templates.fire,
                frame,
            ),
        }
    }
}
