//! Item - Immutable piece of gear

use crate::stat_block::StatBag;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};

/// A piece of equipment
///
/// Items are plain value data: equipping clones or moves them into a
/// combatant's [`Equipment`](super::Equipment) and unequipping hands them
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    slot: EquipmentSlot,
    #[serde(default)]
    two_hand: bool,
    #[serde(default)]
    stat_mods: StatBag,
}

impl Item {
    /// Create a one-slot item
    pub fn new(name: impl Into<String>, slot: EquipmentSlot, stat_mods: StatBag) -> Self {
        Item {
            name: name.into(),
            slot,
            two_hand: false,
            stat_mods,
        }
    }

    /// Create a two-handed weapon (claims main hand and off hand)
    pub fn two_handed(name: impl Into<String>, stat_mods: StatBag) -> Self {
        Item {
            name: name.into(),
            slot: EquipmentSlot::MainHand,
            two_hand: true,
            stat_mods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared slot
    pub fn slot(&self) -> EquipmentSlot {
        self.slot
    }

    pub fn is_two_hand(&self) -> bool {
        self.two_hand
    }

    pub fn stat_mods(&self) -> &StatBag {
        &self.stat_mods
    }

    /// Slot the item is stored under once equipped
    pub fn primary_slot(&self) -> EquipmentSlot {
        if self.two_hand {
            EquipmentSlot::MainHand
        } else {
            self.slot
        }
    }

    /// Every slot this item occupies
    pub fn claimed_slots(&self) -> Vec<EquipmentSlot> {
        if self.two_hand {
            vec![EquipmentSlot::MainHand, EquipmentSlot::OffHand]
        } else {
            vec![self.slot]
        }
    }
}
