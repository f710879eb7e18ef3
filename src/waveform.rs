//! Gaussian pulse waveform generator.
//!
//! Produces the grayscale sample series the color templates are built from.
//! The API fills caller-provided slices so no allocation happens here.

use libm::expf;

/// Fill `samples` with a Gaussian pulse centered at the midpoint.
///
/// The sample at the midpoint is exactly 255; the tails are bounded below by
/// `offset`, so the output range is `[offset, 255]`. `peak_sharpness` narrows
/// the pulse: higher values concentrate the energy around the center.
///
/// Deterministic for a given input. Slices shorter than two samples are a
/// precondition violation.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn fill_gaussian_pulse(samples: &mut [u8], peak_sharpness: u32, offset: u8) {
    debug_assert!(samples.len() >= 2, "a pulse needs at least two samples");

    let half = (samples.len() / 2) as i32;
    let span = f32::from(255 - offset);

    for (idx, sample) in samples.iter_mut().enumerate() {
        let i = idx as i32 - half;
        let x = (peak_sharpness as f32 * i as f32) / half as f32;
        let raw = expf(-(x * x));
        *sample = offset + (raw * span) as u8;
    }
}
