/// Scene layer a draw item belongs to.
///
/// Higher layers are painted over lower ones regardless of insertion order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Layer(pub i32);

impl Layer {
    /// Reserved for the frame background fill.
    pub const BACKGROUND: Layer = Layer(i32::MIN);
}
