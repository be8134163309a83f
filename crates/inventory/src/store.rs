use crate::record::{InventoryRecord, SortKey};

/// The single current view of the inventory.
///
/// Owns the ordered sequence exclusively: callers read through
/// [`records`](Self::records) and mutate only through
/// [`load`](Self::load) and [`sort_by`](Self::sort_by). The sequence is
/// replaced wholesale on load and reordered in place by sorts; record
/// contents are never edited.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<InventoryRecord>,
    order: SortKey,
}

impl InventoryStore {
    /// Empty store, ordered by id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire stored sequence with `data` and apply the
    /// default ordering (by id).
    ///
    /// Input is assumed well-formed; records are not validated.
    pub fn load(&mut self, data: Vec<InventoryRecord>) {
        self.items = data;
        self.sort_by(SortKey::Id);
    }

    /// Reorder the stored sequence in place by `key`.
    ///
    /// `slice::sort_by` is stable, so records with equal keys keep their
    /// relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        self.items.sort_by(|a, b| key.compare(a, b));
        self.order = key;
    }

    /// The current ordered sequence.
    pub fn records(&self) -> &[InventoryRecord] {
        &self.items
    }

    /// The last-applied sort key.
    pub fn order(&self) -> SortKey {
        self.order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
