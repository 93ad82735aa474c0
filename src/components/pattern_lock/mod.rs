//! Pattern lock diagram: sequence model, painter and the keypad component.

mod component;
mod layout;
mod model;
mod palette;
mod render;
mod scale;
mod sequence;
mod types;

pub use component::PatternLockCanvas;
pub use layout::KeyLayout;
pub use model::build_model;
pub use render::{Surface, paint};
pub use sequence::InputSequence;
pub use types::{Circle, Color, LineSegment, PatternModel, PatternNode, Point, Token};
