//! Presentation layer: record-to-markup mapping and the inventory panel.
//!
//! No IO here; the web crate decides where the rendered rows go. The panel
//! pairs the store with a display target so every mutation re-renders the
//! full view (no diffing), which is fine at inventory scale.

pub mod escape;
pub mod panel;
pub mod table;

pub use escape::escape_text;
pub use panel::InventoryPanel;
pub use table::{DisplayTarget, HtmlBuffer, render_rows};
