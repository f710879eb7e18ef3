//! Rotating pulse effect.
//!
//! Emits a sliding window over a smoothed template: every output pixel
//! samples the template `delta` samples apart, and the whole window advances
//! by `delta` each frame, wrapping at the template end.

use super::{step_delta, wrap_index};
use crate::color::Argb;

#[derive(Debug, Clone)]
pub struct RotateEffect {
    cursor: usize,
    delta: usize,
    template_len: usize,
}

impl RotateEffect {
    pub fn new(template_len: usize, output_len: usize) -> Self {
        let delta = step_delta(template_len, output_len);
        debug_assert!(delta >= 1, "template must cover the output");
        Self {
            cursor: 0,
            delta,
            template_len,
        }
    }

    /// Emit one frame and advance the cursor.
    pub fn step(&mut self, template: &[Argb], frame: &mut [Argb]) {
        debug_assert_eq!(template.len(), self.template_len);

        let mut sample_idx = self.cursor;
        for pixel in frame.iter_mut() {
            *pixel = template[sample_idx];
            sample_idx = wrap_index(sample_idx + self.delta, self.template_len);
        }

        self.cursor = wrap_index(self.cursor + self.delta, self.template_len);
    }

    /// Restart the rotation at a known phase. Called whenever the owning
    /// state becomes active again.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn delta(&self) -> usize {
        self.delta
    }
}
