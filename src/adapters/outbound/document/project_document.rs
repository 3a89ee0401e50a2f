use crate::migration::domain::BuildItem;
use crate::ports::outbound::BuildDocument;

/// ProjectDocument adapter holding migrated items in memory
///
/// This adapter implements the BuildDocument port. Items keep insertion
/// order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDocument {
    items: Vec<BuildItem>,
}

impl ProjectDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<BuildItem> {
        self.items
    }
}

impl BuildDocument for ProjectDocument {
    fn append_item(&mut self, item: BuildItem) {
        self.items.push(item);
    }

    fn items(&self) -> &[BuildItem] {
        &self.items
    }
}
