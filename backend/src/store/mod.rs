use crate::error::{AppError, AppResult};
use crate::models::{Item, NewItem, UpdateItem};
use crate::seed;

/// Ordered in-memory item collection.
///
/// The store itself is not synchronised; callers share it behind
/// `Arc<RwLock<ItemStore>>` and hold the write guard for the whole of
/// `insert`, `update` or `remove` so each one is a single atomic step.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn seeded() -> Self {
        Self::from_items(seed::seed_items())
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u64) -> AppResult<Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(AppError::item_not_found)
    }

    /// One past the highest id in use, so ids freed by deletes are never reissued
    /// while a higher id is still live.
    pub fn next_id(&self) -> u64 {
        self.items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }

    pub fn insert(&mut self, new: NewItem) -> Item {
        let item = Item {
            id: self.next_id(),
            name: new.name,
            description: new.description,
        };
        self.items.push(item.clone());
        item
    }

    pub fn update(&mut self, id: u64, changes: &UpdateItem) -> AppResult<Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(AppError::item_not_found)?;
        changes.apply_to(item);
        Ok(item.clone())
    }

    pub fn remove(&mut self, id: u64) -> AppResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(AppError::item_not_found)?;
        Ok(self.items.remove(index))
    }
}
