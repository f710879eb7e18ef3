//! Precomputed waveform templates.
//!
//! Each engine state renders from a static template built once at indicator
//! construction (and rebuilt when the maximum brightness changes). Templates
//! are never mutated in place afterwards; the step effects only read them.

use heapless::Vec;

use crate::color::Argb;
use crate::error::ConfigError;
use crate::waveform::fill_gaussian_pulse;

/// Background brightness under the status pulses (a quarter of full scale).
pub const OFFSET_BRIGHTNESS: u8 = 63;

/// Share of full scale reserved for the eye's flame jitter. The iris base is
/// dimmed by this margin so base plus maximum jitter never overflows a byte.
pub const BLAZE_MARGIN: u8 = 50;

/// Dim white glow level for the idle state, before brightness scaling.
const IDLE_GRAY: u8 = 0x20;

// Pulse shapes: higher peak values concentrate the pulse around its center.
const PROGRESS_PEAK: u32 = 10;
const STATUS_PEAK: u32 = 3;
const IRIS_PEAK: u32 = 4;
const FIRE_PEAK: u32 = 2;
const FIRE_FLOOR: u8 = 10;

/// All templates owned by one indicator.
pub struct TemplateSet<const MAX_TEMPLATE: usize> {
    /// Rotating yellow pulse, one ring long.
    pub progress: Vec<Argb, MAX_TEMPLATE>,
    /// Single green pulse over the first half, background after.
    pub stable: Vec<Argb, MAX_TEMPLATE>,
    /// Two yellow-green pulses. Deliberately distinct from `stable`.
    pub unstable: Vec<Argb, MAX_TEMPLATE>,
    /// Three red pulses.
    pub bad: Vec<Argb, MAX_TEMPLATE>,
    /// Dimmed ember eye base, one ring long.
    pub iris: Vec<Argb, MAX_TEMPLATE>,
    /// Per-sample jitter envelope for the blazing flames.
    pub blaze: Vec<Argb, MAX_TEMPLATE>,
    /// Burn-noise envelope for the mad phase.
    pub fire: Vec<Argb, MAX_TEMPLATE>,
    /// Flat idle fill color.
    pub idle: Argb,
}

impl<const MAX_TEMPLATE: usize> TemplateSet<MAX_TEMPLATE> {
    /// Build the full set. `ring_len` is pixels times smoothing factor,
    /// `pulse_len` the configured pulse template length. Lengths are
    /// validated by the indicator before this is called; capacity overflow
    /// still reports as an error rather than truncating silently.
    pub(crate) fn build(
        ring_len: usize,
        pulse_len: usize,
        brightness: u8,
    ) -> Result<Self, ConfigError> {
        let progress_gray = pulsed_series::<MAX_TEMPLATE>(
            ring_len,
            ring_len,
            1,
            PROGRESS_PEAK,
            OFFSET_BRIGHTNESS,
        )?;
        let progress = paint(&progress_gray, brightness, |v| Argb::new(0xFF, v, v, 0))?;

        let stable_gray = pulsed_series::<MAX_TEMPLATE>(
            pulse_len,
            pulse_len / 2,
            1,
            STATUS_PEAK,
            OFFSET_BRIGHTNESS,
        )?;
        let stable = paint(&stable_gray, brightness, |v| Argb::new(0xFF, 0, v, 0))?;

        let unstable_gray = pulsed_series::<MAX_TEMPLATE>(
            pulse_len,
            pulse_len / 3,
            2,
            STATUS_PEAK,
            OFFSET_BRIGHTNESS,
        )?;
        // Hue ratio 2:3 between red and green reads as an uneasy yellow-green.
        #[allow(clippy::cast_possible_truncation)]
        let unstable = paint(&unstable_gray, brightness, |v| {
            Argb::new(0xFF, (u16::from(v) * 2 / 3) as u8, v, 0)
        })?;

        let bad_gray = pulsed_series::<MAX_TEMPLATE>(
            pulse_len,
            pulse_len / 4,
            3,
            STATUS_PEAK,
            OFFSET_BRIGHTNESS,
        )?;
        let bad = paint(&bad_gray, brightness, |v| Argb::new(0xFF, v, 0, 0))?;

        let eye_gray = pulsed_series::<MAX_TEMPLATE>(ring_len, ring_len, 1, IRIS_PEAK, 0)?;
        let iris = paint(&eye_gray, brightness, |v| {
            ember(v).scaled(u32::from(255 - BLAZE_MARGIN), 255)
        })?;
        let blaze = paint(&eye_gray, brightness, |v| {
            ember(v).scaled(u32::from(BLAZE_MARGIN), 255)
        })?;

        let fire_gray =
            pulsed_series::<MAX_TEMPLATE>(ring_len, ring_len, 1, FIRE_PEAK, FIRE_FLOOR)?;
        let fire = paint(&fire_gray, brightness, |v| Argb::new(0xFF, v, v / 4, 0))?;

        Ok(Self {
            progress,
            stable,
            unstable,
            bad,
            iris,
            blaze,
            fire,
            idle: Argb::gray(IDLE_GRAY).scaled(u32::from(brightness), 255),
        })
    }
}

/// Full-scale ember hue of the eye.
const fn ember(level: u8) -> Argb {
    Argb::new(0xFF, level, level / 16, 0)
}

/// Grayscale series of `total` samples: `count` Gaussian pulses of `segment`
/// samples each, packed from the start, background filled with `offset`.
fn pulsed_series<const M: usize>(
    total: usize,
    segment: usize,
    count: usize,
    peak: u32,
    offset: u8,
) -> Result<Vec<u8, M>, ConfigError> {
    debug_assert!(segment * count <= total);

    let mut series: Vec<u8, M> = Vec::new();
    series
        .resize(total, offset)
        .map_err(|()| ConfigError::CapacityExceeded)?;

    let mut pulse: Vec<u8, M> = Vec::new();
    pulse
        .resize(segment, 0)
        .map_err(|()| ConfigError::CapacityExceeded)?;
    fill_gaussian_pulse(&mut pulse, peak, offset);

    for repeat in 0..count {
        let start = repeat * segment;
        series[start..start + segment].copy_from_slice(&pulse);
    }

    Ok(series)
}

/// Map a grayscale series into colors, then scale to the maximum brightness.
fn paint<const M: usize>(
    gray: &[u8],
    brightness: u8,
    mut color_of: impl FnMut(u8) -> Argb,
) -> Result<Vec<Argb, M>, ConfigError> {
    let mut out: Vec<Argb, M> = Vec::new();
    for &level in gray {
        let color = color_of(level).scaled(u32::from(brightness), 255);
        out.push(color).map_err(|_| ConfigError::CapacityExceeded)?;
    }
    Ok(out)
}
