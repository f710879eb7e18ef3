//! Breathing pulse effect.
//!
//! All pixels show the same single template sample each frame, so the ring
//! flashes as a whole while the cursor walks the template. A spatial pattern
//! is exactly what this effect is not.

use super::{step_delta, wrap_index};
use crate::color::Argb;

#[derive(Debug, Clone)]
pub struct PulseEffect {
    cursor: usize,
    delta: usize,
    template_len: usize,
}

impl PulseEffect {
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

        frame.fill(template[self.cursor]);
        self.cursor = wrap_index(self.cursor + self.delta, self.template_len);
    }

    /// Restart the pulse at a known phase.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}
