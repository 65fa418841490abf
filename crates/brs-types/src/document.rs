use serde::Serialize;

use crate::brick::Brick;
use crate::color::Color;
use crate::identity::User;

/// A decoded save.
///
/// ```text
/// ┌──────────────┬────────────────────────────────────────────────┐
/// │ Field        │ Source                                         │
/// ├──────────────┼────────────────────────────────────────────────┤
/// │ map          │ header 1                                       │
/// │ author       │ header 1 (name, then id after description)     │
/// │ description  │ header 1                                       │
/// │ brick_count  │ header 1, as declared by the writer            │
/// │ mods         │ header 2                                       │
/// │ brick_assets │ header 2, indexed by Brick::asset_name_index   │
/// │ colors       │ header 2, indexed by BrickColor::Palette       │
/// │ materials    │ header 2, indexed by Brick::material_index     │
/// │ brick_owners │ header 2, indexed by Brick::owner_index        │
/// │ bricks       │ brick segment, only when requested             │
/// └──────────────┴────────────────────────────────────────────────┘
/// ```
///
/// `bricks.len()` can be smaller than `brick_count` when the brick stream
/// ends early.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub version: u16,
    pub map: String,
    pub author: User,
    pub description: String,
    pub mods: Vec<String>,
    pub brick_assets: Vec<String>,
    pub colors: Vec<Color>,
    pub materials: Vec<String>,
    pub brick_owners: Vec<User>,
    pub brick_count: i32,
    pub bricks: Vec<Brick>,
}

impl Document {
    /// Number of declared bricks the brick stream did not contain.
    ///
    /// Only meaningful when bricks were decoded.
    #[must_use]
    pub fn missing_bricks(&self) -> usize {
        usize::try_from(self.brick_count)
            .unwrap_or(0)
            .saturating_sub(self.bricks.len())
    }
}
