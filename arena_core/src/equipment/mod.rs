//! Equipment - Slot bookkeeping and gear stat aggregation

mod item;

pub use item::Item;

use crate::error::{CombatError, Result};
use crate::source::{GearSource, StatSource};
use crate::stat_block::{StatAccumulator, StatBag};
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Items equipped on a combatant
///
/// Each item is stored once under its primary slot. A two-handed weapon is
/// stored under the main hand and also reserves the off hand. Serialized as
/// a list of items; deserializing replays [`Equipment::equip`] for each one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item occupying a slot, including an off hand reserved by a two-hander
    pub fn occupant(&self, slot: EquipmentSlot) -> Option<&Item> {
        if let Some(item) = self.slots.get(&slot) {
            return Some(item);
        }
        if slot == EquipmentSlot::OffHand {
            return self
                .slots
                .get(&EquipmentSlot::MainHand)
                .filter(|item| item.is_two_hand());
        }
        None
    }

    pub fn is_occupied(&self, slot: EquipmentSlot) -> bool {
        self.occupant(slot).is_some()
    }

    /// Equip an item
    ///
    /// Fails with [`CombatError::SlotConflict`] if any slot the item claims
    /// is taken. The equipment is unchanged on failure.
    pub fn equip(&mut self, item: Item) -> Result<()> {
        for slot in item.claimed_slots() {
            if let Some(occupant) = self.occupant(slot) {
                return Err(CombatError::SlotConflict {
                    slot,
                    item: item.name().to_string(),
                    occupant: occupant.name().to_string(),
                });
            }
        }

        debug!(item = item.name(), slot = %item.primary_slot(), "equipped");
        self.slots.insert(item.primary_slot(), item);
        Ok(())
    }

    /// Remove whatever occupies a slot, returning it if present
    ///
    /// Unequipping either hand of a two-hander removes the whole weapon.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        let removed = match self.slots.remove(&slot) {
            Some(item) => Some(item),
            None if slot == EquipmentSlot::OffHand && self.is_two_hand_equipped() => {
                self.slots.remove(&EquipmentSlot::MainHand)
            }
            None => None,
        };

        if let Some(ref item) = removed {
            debug!(item = item.name(), slot = %slot, "unequipped");
        }
        removed
    }

    fn is_two_hand_equipped(&self) -> bool {
        self.slots
            .get(&EquipmentSlot::MainHand)
            .is_some_and(|item| item.is_two_hand())
    }

    /// All equipped items by primary slot
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    /// Number of equipped items (a two-hander counts once)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// One stat source per equipped item
    pub fn gear_sources(&self) -> Vec<GearSource<'_>> {
        self.iter().map(|(slot, item)| GearSource::new(slot, item)).collect()
    }

    /// Sum of all equipped items' stat modifiers
    pub fn stat_total(&self) -> StatBag {
        let mut accumulator = StatAccumulator::new();
        for source in self.gear_sources() {
            source.apply(&mut accumulator);
        }
        accumulator.finish()
    }
}

impl TryFrom<Vec<Item>> for Equipment {
    type Error = CombatError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        let mut equipment = Equipment::new();
        for item in items {
            equipment.equip(item)?;
        }
        Ok(equipment)
    }
}

impl From<Equipment> for Vec<Item> {
    fn from(equipment: Equipment) -> Self {
        equipment.slots.into_values().collect()
    }
}
