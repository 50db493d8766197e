use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use hero_core::{Ability, Equipment, ItemId, ItemSlot};
use tracing::debug;

use crate::room::{EquipmentSpec, ItemSpec};

#[derive(Debug)]
struct EquipmentState {
    life: u32,
    abilities: HashMap<Ability, u32>,
    items: Vec<ItemSpec>,
    /// Updates left for each item in use, never zero.
    in_use: HashMap<ItemId, u32>,
    abilities_used: Vec<Ability>,
}

/// Equipment with fixed abilities and items lasting a number of updates.
#[derive(Clone, Debug)]
pub struct SimpleEquipment(Rc<RefCell<EquipmentState>>);

impl SimpleEquipment {
    pub fn from_spec(spec: &EquipmentSpec) -> Self {
        Self(Rc::new(RefCell::new(EquipmentState {
            life: spec.life,
            abilities: spec.abilities.iter().copied().collect(),
            items: spec.items.clone(),
            in_use: HashMap::new(),
            abilities_used: Vec::new(),
        })))
    }

    pub fn abilities_used(&self) -> Vec<Ability> {
        self.0.borrow().abilities_used.clone()
    }

    fn item(&self, item: ItemId) -> Option<ItemSpec> {
        self.0
            .borrow()
            .items
            .iter()
            .find(|spec| spec.item == item)
            .copied()
    }
}

impl Default for SimpleEquipment {
    fn default() -> Self {
        Self::from_spec(&EquipmentSpec::default())
    }
}

impl Equipment for SimpleEquipment {
    fn ability_level(&self, ability: Ability) -> u32 {
        self.0
            .borrow()
            .abilities
            .get(&ability)
            .copied()
            .unwrap_or(0)
    }

    fn notify_ability_used(&mut self, ability: Ability) {
        self.0.borrow_mut().abilities_used.push(ability);
    }

    fn life(&self) -> u32 {
        self.0.borrow().life
    }

    fn remove_life(&mut self, points: u32) {
        let mut state = self.0.borrow_mut();
        state.life = state.life.saturating_sub(points);
        debug!(points, life = state.life, "hero lost life");
    }

    fn item_assigned(&self, slot: ItemSlot) -> Option<ItemId> {
        self.0
            .borrow()
            .items
            .iter()
            .find(|spec| spec.slot == slot)
            .map(|spec| spec.item)
    }

    fn can_start_item(&self, item: ItemId) -> bool {
        self.item(item).is_some() && !self.0.borrow().in_use.contains_key(&item)
    }

    fn start_item(&mut self, item: ItemId) {
        let duration = self.item(item).map_or(0, |spec| spec.duration);
        debug!(?item, duration, "item started");
        if duration > 0 {
            self.0.borrow_mut().in_use.insert(item, duration);
        }
    }

    fn update_item(&mut self, item: ItemId) {
        let mut state = self.0.borrow_mut();
        let Some(left) = state.in_use.get_mut(&item) else {
            return;
        };
        *left -= 1;
        if *left == 0 {
            state.in_use.remove(&item);
        }
    }

    fn is_item_finished(&self, item: ItemId) -> bool {
        !self.0.borrow().in_use.contains_key(&item)
    }

    fn is_item_obtainable(&self, item: ItemId) -> bool {
        self.item(item).is_some()
    }
}
