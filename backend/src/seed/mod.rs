use crate::models::Item;

/// The fixed records every fresh process starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Item 1", "First sample item"),
        Item::new(2, "Item 2", "Second sample item"),
    ]
}
