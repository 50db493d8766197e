use crate::hero::HeroContext;
use crate::types::ItemId;

use super::{Free, HeroState, StateCore};

/// Progress of one use of an equipment item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUsage {
    item: ItemId,
    intercepted: bool,
    started: bool,
}

impl ItemUsage {
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            intercepted: false,
            started: false,
        }
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Whether the facing entity handled the item instead of the equipment.
    pub fn is_intercepted(&self) -> bool {
        self.intercepted
    }

    /// Offers the item to the facing entity first, then starts it normally.
    pub fn start(&mut self, hero: &mut HeroContext) {
        if let Some(entity) = hero.facing_entity() {
            if hero.map_mut().interaction_with_item(entity, self.item) {
                tracing::debug!(%entity, item = self.item.0, "item use intercepted");
                self.intercepted = true;
                return;
            }
        }

        hero.equipment_mut().start_item(self.item);
        self.started = true;
    }

    pub fn update(&mut self, hero: &mut HeroContext) {
        if self.started {
            hero.equipment_mut().update_item(self.item);
        }
    }

    pub fn is_finished(&self, hero: &HeroContext) -> bool {
        self.intercepted || (self.started && hero.equipment().is_item_finished(self.item))
    }
}

/// Using an equipment item.
#[derive(Debug)]
pub struct UsingItem {
    core: StateCore,
    usage: ItemUsage,
}

impl UsingItem {
    pub const NAME: &'static str = "using_item";

    pub fn new(item: ItemId) -> Self {
        Self {
            core: StateCore::new(Self::NAME),
            usage: ItemUsage::new(item),
        }
    }
}

impl HeroState for UsingItem {
    fn core(&self) -> &StateCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut StateCore {
        &mut self.core
    }

    fn start(&mut self, hero: &mut HeroContext, _previous: Option<&mut dyn HeroState>) {
        hero.clear_movement();
        self.usage.start(hero);
    }

    fn stop(&mut self, hero: &mut HeroContext, _next: &dyn HeroState) {
        hero.clear_movement();
    }

    fn update(&mut self, hero: &mut HeroContext) {
        if self.core.is_suspended() {
            return;
        }

        self.usage.update(hero);
        if self.usage.is_finished(hero) && hero.is_current(&self.core) {
            hero.change_state(Box::new(Free::new()));
        }
    }

    fn is_using_item(&self) -> bool {
        true
    }

    fn item_usage(&self) -> Option<&ItemUsage> {
        Some(&self.usage)
    }
}
