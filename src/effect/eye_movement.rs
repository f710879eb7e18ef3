//! Parabolic eye kinematics.
//!
//! Moves the eye between fixpoints with a symmetric bang-bang acceleration
//! profile: accelerate from rest for half the duration, decelerate for the
//! other half, arriving with zero velocity exactly on schedule.
//!
//! `phi(t) = alpha / 2 * t^2` with `alpha = (delta / 2) * 8 / duration^2`,
//! the minimum acceleration that completes `delta` within `duration` frames.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MovePhase {
    Accelerate,
    Decelerate,
    Settled,
}

#[derive(Debug, Clone)]
pub struct EyeMovement {
    phase: MovePhase,
    t: i32,
    half_duration: i32,
    alpha: f32,
    phi: f32,
    phi_half: f32,
    omega_half: f32,
    finished: bool,
}

impl Default for EyeMovement {
    fn default() -> Self {
        Self::new()
    }
}

impl EyeMovement {
    pub const fn new() -> Self {
        Self {
            phase: MovePhase::Settled,
            t: 0,
            half_duration: 0,
            alpha: 0.0,
            phi: 0.0,
            phi_half: 0.0,
            omega_half: 0.0,
            finished: false,
        }
    }

    /// Start a new move of `delta` samples over `duration` frames.
    ///
    /// The duration splits into two equal ramps, so odd durations round down:
    /// a move over `duration` frames finishes on step `2 * (duration / 2)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn init_new_move(&mut self, delta: i32, duration: i32) {
        let half = (duration / 2).max(1);
        self.half_duration = half;
        self.alpha = delta as f32 / (half * half) as f32;
        self.t = 0;
        self.phi = 0.0;
        self.phi_half = 0.0;
        self.omega_half = 0.0;
        self.phase = MovePhase::Accelerate;
        self.finished = false;
    }

    /// Advance one frame and return the displacement gained by the current
    /// move so far. Once settled, keeps returning the terminal displacement
    /// until the finish is acknowledged or a new move starts.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn step(&mut self) -> i32 {
        self.t += 1;
        match self.phase {
            MovePhase::Accelerate => {
                self.phi = self.alpha * (self.t * self.t) as f32 / 2.0;
                if self.t >= self.half_duration {
                    // Carry the gained velocity into the deceleration ramp.
                    self.omega_half = self.alpha * self.t as f32;
                    self.phi_half = self.phi;
                    self.t = 0;
                    self.phase = MovePhase::Decelerate;
                }
            }
            MovePhase::Decelerate => {
                self.phi = self.phi_half + self.omega_half * self.t as f32
                    - self.alpha * (self.t * self.t) as f32 / 2.0;
                if self.t >= self.half_duration {
                    self.phase = MovePhase::Settled;
                    self.finished = true;
                }
            }
            MovePhase::Settled => {}
        }

        self.phi as i32
    }

    /// True from the frame the move completes until it is acknowledged.
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consume the finished edge: returns the terminal displacement and
    /// resets the internal displacement to zero, so subsequent steps report
    /// no further offset. Callers commit the returned value into their
    /// persistent fixpoint exactly once.
    #[allow(clippy::cast_possible_truncation)]
    pub fn acknowledge_finished(&mut self) -> i32 {
        let terminal = self.phi as i32;
        self.finished = false;
        self.phi = 0.0;
        terminal
    }
}
