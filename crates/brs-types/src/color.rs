use std::fmt;

use serde::Serialize;

/// An RGBA color with 8 bits per channel.
///
/// The save format stores colors in B, G, R, A byte order. Use
/// [`Color::from_bgra`] when reading wire bytes; fields are always in
/// canonical R, G, B, A order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from wire order `[b, g, r, a]`.
    #[must_use]
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        let [b, g, r, a] = bytes;
        Self { r, g, b, a }
    }

    /// Wire order `[b, g, r, a]`.
    #[must_use]
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

/// Formats as `#rrggbbaa`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// The color of a single brick.
///
/// A brick either carries its own color or points into the document's
/// color palette. The two cases share one field on the wire, distinguished
/// by a preceding flag bit; here they are separate variants so consumers
/// never have to guess which one they hold.
///
/// ```text
/// ┌──────────┬─────────────────────────────────────────────┐
/// │ Variant  │ Meaning                                     │
/// ├──────────┼─────────────────────────────────────────────┤
/// │ Literal  │ color stored inline in the brick record     │
/// │ Palette  │ index into `Document::colors`               │
/// └──────────┴─────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrickColor {
    Literal(Color),
    Palette(u32),
}

impl BrickColor {
    /// Resolve to a concrete color against `palette`.
    ///
    /// Returns `None` when a palette index is out of range; the decoder
    /// does not validate indices.
    #[must_use]
    pub fn resolve(&self, palette: &[Color]) -> Option<Color> {
        match *self {
            Self::Literal(color) => Some(color),
            Self::Palette(index) => palette.get(index as usize).copied(),
        }
    }
}
