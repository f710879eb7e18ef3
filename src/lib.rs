#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod indicator;
pub mod profile;
pub mod rng;
pub mod state;
pub mod template;
pub mod waveform;

pub use command::{CommandQueue, CommandSender, IndicatorCommand, QueueFull};
pub use error::ConfigError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use indicator::{FADING_CYCLES, IndicatorConfig, StatusIndicator};
pub use profile::{DURATION_FOREVER, Profile, ProfileElement};
pub use state::EngineState;

pub use color::{Argb, Rgb};
pub use effect::SauronMode;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
