use super::Layer;

/// Stable sort key for draw items.
///
/// Ordering is lexicographic over the fields, as declared:
/// 1) `layer`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order within a layer)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub layer: Layer,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(layer: Layer, order: u32) -> Self {
        Self { layer, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_insertion_order() {
        assert!(SortKey::new(Layer(0), 9) < SortKey::new(Layer(1), 0));
        assert!(SortKey::new(Layer::BACKGROUND, 100) < SortKey::new(Layer(i32::MIN + 1), 0));
    }

    #[test]
    fn insertion_order_breaks_layer_ties() {
        assert!(SortKey::new(Layer(3), 1) < SortKey::new(Layer(3), 2));
    }
}
