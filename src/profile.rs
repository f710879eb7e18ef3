//! Scripted state sequences.
//!
//! A profile is a short list of timed steps the indicator plays back frame
//! by frame: each element names a state (and, for the eye, a behavior mode
//! and move distance) plus how many frames it holds before the next element
//! takes over. The last element may hold forever.

use heapless::Vec;

use crate::effect::SauronMode;
use crate::state::EngineState;

/// Hold the element until the profile is replaced.
pub const DURATION_FOREVER: u32 = u32::MAX;

/// Maximum elements per profile.
pub const PROFILE_CAP: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct ProfileElement {
    pub state: EngineState,
    pub sauron_mode: Option<SauronMode>,
    pub move_delta: i32,
    pub duration: u32,
}

impl ProfileElement {
    /// A plain state held for `duration` frames.
    pub const fn state(state: EngineState, duration: u32) -> Self {
        Self {
            state,
            sauron_mode: None,
            move_delta: 0,
            duration,
        }
    }

    /// The eye in a given behavior mode.
    pub const fn eye(mode: SauronMode, duration: u32) -> Self {
        Self {
            state: EngineState::Sauron,
            sauron_mode: Some(mode),
            move_delta: 0,
            duration,
        }
    }

    /// The eye moving by `delta` template samples.
    pub const fn eye_move(delta: i32, duration: u32) -> Self {
        Self {
            state: EngineState::Sauron,
            sauron_mode: Some(SauronMode::Move),
            move_delta: delta,
            duration,
        }
    }
}

pub type Profile = Vec<ProfileElement, PROFILE_CAP>;

/// Fade to black, then let the eye appear and hold the gaze.
pub fn summon_sauron() -> Profile {
    let mut profile = Profile::new();
    let _ = profile.push(ProfileElement::state(EngineState::Blank, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Appear, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Idle, DURATION_FOREVER));
    profile
}

/// Fade the eye out and return to the idle ring.
pub fn dismiss_sauron() -> Profile {
    let mut profile = Profile::new();
    let _ = profile.push(ProfileElement::eye(SauronMode::Disappear, 20));
    let _ = profile.push(ProfileElement::state(EngineState::Idle, DURATION_FOREVER));
    profile
}

/// A short cameo: the eye appears, looks around, and leaves.
pub fn appear_and_disappear() -> Profile {
    let mut profile = Profile::new();
    let _ = profile.push(ProfileElement::state(EngineState::Blank, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Appear, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Nervous, 100));
    let _ = profile.push(ProfileElement::eye(SauronMode::Disappear, 20));
    let _ = profile.push(ProfileElement::state(EngineState::Idle, DURATION_FOREVER));
    profile
}

/// Glide the gaze by `delta` samples, then idle at the new fixpoint.
pub fn move_eye_by(delta: i32) -> Profile {
    let mut profile = Profile::new();
    let _ = profile.push(ProfileElement::eye_move(delta, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Idle, DURATION_FOREVER));
    profile
}

/// Point the eye at a culprit: appear, fidget, turn to the target, burn,
/// and leave.
pub fn blame(delta: i32) -> Profile {
    let mut profile = Profile::new();
    let _ = profile.push(ProfileElement::state(EngineState::Blank, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Appear, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Nervous, 20));
    let _ = profile.push(ProfileElement::eye_move(delta, 20));
    let _ = profile.push(ProfileElement::eye(SauronMode::Mad, 100));
    let _ = profile.push(ProfileElement::eye(SauronMode::Disappear, 20));
    profile
}
