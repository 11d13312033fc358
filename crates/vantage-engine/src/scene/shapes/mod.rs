mod circle;
mod rect;

pub use circle::CircleCmd;
pub use rect::RectCmd;
