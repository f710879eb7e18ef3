//! Color types for the engine core and the hardware boundary.
//!
//! The engine works on [`Argb`] values: four independent 8-bit channels where
//! the alpha channel carries a per-pixel intensity. LED drivers consume plain
//! [`Rgb`] values, produced by [`Argb::to_rgb`].

use smart_leds::RGB8;

/// Hardware-boundary color type consumed by output drivers.
pub type Rgb = RGB8;

/// A color sample with an alpha/intensity channel.
///
/// Immutable value type; all arithmetic helpers return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    /// Fully opaque black.
    pub const BLACK: Self = Self::new(0xFF, 0, 0, 0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque gray of the given level.
    pub const fn gray(level: u8) -> Self {
        Self::new(0xFF, level, level, level)
    }

    /// Scale the color channels by `num / den` with integer truncation.
    ///
    /// The alpha channel is left untouched. `num` must not exceed `den`.
    pub const fn scaled(self, num: u32, den: u32) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        Self {
            a: self.a,
            r: (self.r as u32 * num / den) as u8,
            g: (self.g as u32 * num / den) as u8,
            b: (self.b as u32 * num / den) as u8,
        }
    }

    /// Convert for an LED driver. Alpha premultiplies the color channels.
    pub const fn to_rgb(self) -> Rgb {
        #[allow(clippy::cast_possible_truncation)]
        Rgb {
            r: (self.r as u16 * self.a as u16 / 255) as u8,
            g: (self.g as u16 * self.a as u16 / 255) as u8,
            b: (self.b as u16 * self.a as u16 / 255) as u8,
        }
    }
}

/// Counted cross-fade blend between two frames of a fade window:
/// `(incoming * elapsed + outgoing * remaining) / cycles` per channel.
///
/// Integer division truncates toward zero. The 8-bit LED target expects
/// exactly this arithmetic, not a floating-point blend.
pub fn blend_counted(
    incoming: Argb,
    outgoing: Argb,
    elapsed: u8,
    remaining: u8,
    cycles: u8,
) -> Argb {
    debug_assert!(cycles > 0);
    debug_assert!(elapsed + remaining == cycles);

    let mix = |new: u8, old: u8| -> u8 {
        let sum =
            u16::from(new) * u16::from(elapsed) + u16::from(old) * u16::from(remaining);
        #[allow(clippy::cast_possible_truncation)]
        {
            (sum / u16::from(cycles)) as u8
        }
    };

    Argb {
        a: mix(incoming.a, outgoing.a),
        r: mix(incoming.r, outgoing.r),
        g: mix(incoming.g, outgoing.g),
        b: mix(incoming.b, outgoing.b),
    }
}
