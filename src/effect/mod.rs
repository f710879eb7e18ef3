//! Frame-stepped sub-effects.
//!
//! Each effect is a small value struct owning nothing but its own cursor or
//! phase state; templates are passed in per call so the indicator keeps sole
//! ownership of the precomputed waveforms.

mod eye_movement;
mod habits;
mod pulse;
mod rotate;
mod sauron;

pub use eye_movement::EyeMovement;
pub use habits::{
    BLINK_MAX_INTENSITY, BlinkConfig, BlinkyEye, CuriousConfig, CuriousEye, NervousConfig,
    NervousEye,
};
pub use pulse::PulseEffect;
pub use rotate::RotateEffect;
pub use sauron::{MAX_INTENSITY, SauronEffect, SauronMode};

/// Cursor advance per frame for a template of `template_len` samples driving
/// `output_len` pixels.
///
/// Integer truncation is intentional: unevenly divisible lengths make the
/// animation drift slightly across cycles, which reads as analog on hardware.
pub const fn step_delta(template_len: usize, output_len: usize) -> usize {
    template_len / output_len
}

/// Wrap a ring index into `[0, max)` after a single forward step.
///
/// Callers never advance by more than one template span at a time, so one
/// conditional subtraction is enough.
pub(crate) const fn wrap_index(index: usize, max: usize) -> usize {
    if index >= max { index - max } else { index }
}
