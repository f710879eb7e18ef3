//! Configuration validation errors.

/// Errors rejected eagerly at indicator construction.
///
/// Sizing problems surface here instead of panicking on the first render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Pixel count of zero.
    ZeroPixelCount,

    /// Smoothing factor of zero.
    ZeroSmoothing,

    /// Ring template too short to shape a pulse (needs at least two samples).
    RingTooShort,

    /// Pulse template shorter than the output ring or too short to carry
    /// its pulse segments.
    PulseTooShort,

    /// Requested sizes exceed the compile-time capacities.
    CapacityExceeded,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPixelCount => write!(f, "pixel count must be at least 1"),
            ConfigError::ZeroSmoothing => {
                write!(f, "smoothing factor must be at least 1")
            }
            ConfigError::RingTooShort => {
                write!(f, "ring template needs at least two samples")
            }
            ConfigError::PulseTooShort => {
                write!(
                    f,
                    "pulse template must cover the output ring and at least eight samples"
                )
            }
            ConfigError::CapacityExceeded => {
                write!(f, "requested sizes exceed compile-time capacities")
            }
        }
    }
}
