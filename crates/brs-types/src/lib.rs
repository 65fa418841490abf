#![warn(clippy::pedantic)]

pub mod brick;
pub mod color;
pub mod document;
pub mod identity;

pub use brick::{Brick, Direction, Rotation};
pub use color::{BrickColor, Color};
pub use document::Document;
pub use identity::{User, Uuid};
