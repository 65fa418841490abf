use serde::Serialize;

use crate::color::BrickColor;

/// The axis a brick faces. Wire values 0–5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    XPositive = 0,
    XNegative = 1,
    YPositive = 2,
    YNegative = 3,
    #[default]
    ZPositive = 4,
    ZNegative = 5,
}

impl Direction {
    /// Map a raw index to a direction, wrapping modulo 6.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        match index % 6 {
            0 => Self::XPositive,
            1 => Self::XNegative,
            2 => Self::YPositive,
            3 => Self::YNegative,
            4 => Self::ZPositive,
            _ => Self::ZNegative,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Quarter turns about the facing axis. Wire values 0–3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

impl Rotation {
    /// Map the low two bits of `index` to a rotation.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        match index & 3 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Split a packed orientation field into direction and rotation.
///
/// ```text
///   orientation = direction << 2 | rotation
///   direction   = (orientation >> 2) % 6
///   rotation    = orientation & 3
/// ```
#[must_use]
pub fn split_orientation(orientation: u32) -> (Direction, Rotation) {
    (
        Direction::from_index(orientation >> 2),
        Rotation::from_index(orientation),
    )
}

/// Inverse of [`split_orientation`].
#[must_use]
pub fn join_orientation(direction: Direction, rotation: Rotation) -> u32 {
    (u32::from(direction.index()) << 2) | u32::from(rotation.index())
}

/// One placed brick.
///
/// Indices (`asset_name_index`, `material_index`, `owner_index`, and a
/// palette [`BrickColor`]) refer into the owning document's lists and are
/// not range-checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Brick {
    /// Index into `Document::brick_assets`.
    pub asset_name_index: u32,
    /// Explicit size, or `[0, 0, 0]` for the asset's default size.
    pub size: [u32; 3],
    pub position: [i32; 3],
    pub direction: Direction,
    pub rotation: Rotation,
    pub collision: bool,
    pub visibility: bool,
    /// Index into `Document::materials`.
    pub material_index: u32,
    pub color: BrickColor,
    /// Index into `Document::brick_owners`.
    pub owner_index: u32,
}

impl Default for Brick {
    fn default() -> Self {
        Self {
            asset_name_index: 0,
            size: [0; 3],
            position: [0; 3],
            direction: Direction::default(),
            rotation: Rotation::default(),
            collision: true,
            visibility: true,
            material_index: 1,
            color: BrickColor::Palette(0),
            owner_index: 0,
        }
    }
}

impl Brick {
    /// True when the brick uses its asset's default size.
    #[must_use]
    pub fn has_default_size(&self) -> bool {
        self.size == [0; 3]
    }
}
