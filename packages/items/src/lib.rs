// ABOUTME: Todo item management with dense rank maintenance
// ABOUTME: Provides item types, rank shift rules and the SQLite-backed item store

pub mod ordering;
pub mod storage;
pub mod types;

pub use ordering::Shift;
pub use storage::ItemStorage;
pub use types::{Item, ItemCreateInput, ItemUpdateInput};
