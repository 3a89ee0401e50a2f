use crate::migration::domain::{BuildItem, ItemType};

/// BuildDocument port for the project document being migrated
///
/// The document is shared with other migration rules run by the caller.
/// Implementations assume a single writer for the duration of a run;
/// exclusive access is expressed by the `&mut self` receiver.
pub trait BuildDocument {
    /// Appends an item (type, include, ordered metadata, optional condition)
    fn append_item(&mut self, item: BuildItem);

    /// All items in insertion order
    fn items(&self) -> &[BuildItem];

    /// Items of `item_type` whose `Include` equals `include`
    fn find_items(&self, item_type: ItemType, include: &str) -> Vec<&BuildItem> {
        self.items()
            .iter()
            .filter(|item| item.item_type == item_type && item.include == include)
            .collect()
    }
}
