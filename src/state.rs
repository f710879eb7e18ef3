//! Engine states that can be displayed.

const STATE_NAME_BLANK: &str = "blank";
const STATE_NAME_IDLE: &str = "idle";
const STATE_NAME_PROGRESS: &str = "progress";
const STATE_NAME_BAD: &str = "bad";
const STATE_NAME_UNSTABLE: &str = "unstable";
const STATE_NAME_STABLE: &str = "stable";
const STATE_NAME_SAURON: &str = "sauron";

/// Operational status the ring communicates. Exactly one is current at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Playing dead: all LEDs blanked out.
    Blank,
    /// Alive: dim white glow, nothing going on.
    Idle,
    /// Working on it: yellow rotating pulse.
    Progress,
    /// Fix it please: insistent red pulses.
    Bad,
    /// Almost there, but issues appeared: mixed-hue pulses.
    Unstable,
    /// Operation successful: calm green pulse.
    Stable,
    /// The watching eye.
    Sauron,
}

impl EngineState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => STATE_NAME_BLANK,
            Self::Idle => STATE_NAME_IDLE,
            Self::Progress => STATE_NAME_PROGRESS,
            Self::Bad => STATE_NAME_BAD,
            Self::Unstable => STATE_NAME_UNSTABLE,
            Self::Stable => STATE_NAME_STABLE,
            Self::Sauron => STATE_NAME_SAURON,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STATE_NAME_BLANK => Some(Self::Blank),
            STATE_NAME_IDLE => Some(Self::Idle),
            STATE_NAME_PROGRESS => Some(Self::Progress),
            STATE_NAME_BAD => Some(Self::Bad),
            STATE_NAME_UNSTABLE => Some(Self::Unstable),
            STATE_NAME_STABLE => Some(Self::Stable),
            STATE_NAME_SAURON => Some(Self::Sauron),
            _ => None,
        }
    }
}
