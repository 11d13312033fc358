use crate::composite::{Composite, ShapeKind};
use crate::paint::Color;

use super::{DrawCmd, Layer, SortKey};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Batches
///
/// A compositor batch is already in paint order, so [`push_composite`](Self::push_composite)
/// appends its primitives to one layer and insertion order keeps them intact.
///
/// ```
/// use vantage_engine::scene::{DrawList, Layer};
/// use vantage_engine::coords::Viewport;
/// use vantage_engine::paint::Color;
///
/// let mut draw_list = DrawList::new();
/// draw_list.push_solid_rect(Layer::BACKGROUND, Viewport::unit().view, Color::white());
/// assert_eq!(draw_list.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command onto `layer`.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(layer, order), cmd });

        self.sorted_dirty = true;
    }

    /// Appends every primitive of `batch` onto `layer`, preserving its paint order.
    ///
    /// Circles keep `size` as their radius; squares become rectangles with side `2 * size`.
    pub fn push_composite(&mut self, layer: Layer, batch: &Composite<Color>) {
        for primitive in batch {
            match batch.shape {
                ShapeKind::Circle => {
                    self.push_solid_circle(layer, primitive.center, primitive.size, primitive.color)
                }
                ShapeKind::Square => self.push_solid_rect(layer, primitive.bounds(), primitive.color),
            }
        }
        log::debug!("draw list: {} primitives on layer {}", batch.len(), layer.0);
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Keys are unique (insertion order is part of the key), so an unstable sort is enough.
        let items = &self.items;
        self.sorted_indices.sort_unstable_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}
