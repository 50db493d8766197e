use crate::env::Equipment;
use crate::types::ItemId;

/// An item about to be given to the player, possibly empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Treasure {
    item: Option<ItemId>,
    variant: u32,
}

impl Treasure {
    pub fn new(item: ItemId, variant: u32) -> Self {
        Self {
            item: Some(item),
            variant,
        }
    }

    pub fn empty() -> Self {
        Self {
            item: None,
            variant: 0,
        }
    }

    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    pub fn variant(&self) -> u32 {
        self.variant
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Replaces the treasure with an empty one if the equipment does not
    /// allow obtaining its item.
    pub fn ensure_obtainable(&mut self, equipment: &dyn Equipment) {
        let Some(item) = self.item else {
            return;
        };
        if !equipment.is_item_obtainable(item) {
            tracing::debug!(?item, "treasure is not obtainable, replacing it with nothing");
            *self = Self::empty();
        }
    }
}
