use crate::types::{ItemId, ItemSlot};

/// Equipment-derived abilities consulted by the hero states.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    /// Divides the damage taken when hurt.
    Defense,
    /// Maximum weight the hero can lift.
    Lift,
    /// Whether the hero can grab obstacles.
    Grab,
}

/// Equipment, life and inventory of the player.
pub trait Equipment {
    fn ability_level(&self, ability: Ability) -> u32;

    fn has_ability(&self, ability: Ability) -> bool {
        self.ability_level(ability) > 0
    }

    fn notify_ability_used(&mut self, ability: Ability);

    fn life(&self) -> u32;

    fn remove_life(&mut self, points: u32);

    fn item_assigned(&self, slot: ItemSlot) -> Option<ItemId>;

    /// Whether the item may be used at all (owned, assignable).
    fn can_start_item(&self, item: ItemId) -> bool;

    fn start_item(&mut self, item: ItemId);

    fn update_item(&mut self, _item: ItemId) {}

    fn is_item_finished(&self, item: ItemId) -> bool;

    fn is_item_obtainable(&self, _item: ItemId) -> bool {
        true
    }
}
