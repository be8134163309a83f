use shelfview_inventory::{InventoryRecord, InventoryStore, SortKey};

use crate::table::{DisplayTarget, render_rows};

/// Store plus display target: the single current view of the inventory.
///
/// State lives in the panel, not in a module-level global; the web layer
/// owns exactly one panel behind its state lock. Every mutation re-renders
/// the whole view into the target.
#[derive(Debug, Default)]
pub struct InventoryPanel<T: DisplayTarget> {
    store: InventoryStore,
    target: T,
}

impl<T: DisplayTarget> InventoryPanel<T> {
    pub fn new(target: T) -> Self {
        Self {
            store: InventoryStore::new(),
            target,
        }
    }

    /// Replace the stored inventory with `data`, apply the default id
    /// ordering, and render.
    pub fn load(&mut self, data: Vec<InventoryRecord>) {
        self.store.load(data);
        self.render_store();
    }

    /// Reorder the stored inventory by `key` and re-render.
    pub fn sort_by(&mut self, key: SortKey) {
        self.store.sort_by(key);
        self.render_store();
    }

    pub fn sort_by_id(&mut self) {
        self.sort_by(SortKey::Id);
    }

    pub fn sort_by_name(&mut self) {
        self.sort_by(SortKey::Name);
    }

    pub fn sort_by_category(&mut self) {
        self.sort_by(SortKey::Category);
    }

    pub fn sort_by_qty(&mut self) {
        self.sort_by(SortKey::Qty);
    }

    /// Render an externally produced result sequence, id-ordered, without
    /// touching the stored inventory. The next sort entry point renders
    /// the store's own records again.
    pub fn render_search_results(&mut self, mut results: Vec<InventoryRecord>) {
        results.sort_by(|a, b| SortKey::Id.compare(a, b));
        self.target.replace_rows(&render_rows(&results));
    }

    /// The store's current ordered sequence.
    pub fn records(&self) -> &[InventoryRecord] {
        self.store.records()
    }

    pub fn order(&self) -> SortKey {
        self.store.order()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn render_store(&mut self) {
        self.target.replace_rows(&render_rows(self.store.records()));
    }
}
