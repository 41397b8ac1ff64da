//! GearSource - Stats from equipped items

use crate::equipment::Item;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::EquipmentSlot;

/// Stats from an equipped item
pub struct GearSource<'a> {
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    /// The equipped item
    pub item: &'a Item,
}

impl<'a> GearSource<'a> {
    /// Create a new gear source
    pub fn new(slot: EquipmentSlot, item: &'a Item) -> Self {
        GearSource { slot, item }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        self.item.name()
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_bag(self.item.stat_mods());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatBag;
    use crate::types::Attribute;

    #[test]
    fn test_gear_source_id() {
        let item = Item::new("Test Sword", EquipmentSlot::MainHand, StatBag::new());
        let source = GearSource::new(EquipmentSlot::MainHand, &item);
        assert_eq!(source.id(), "Test Sword");
    }

    #[test]
    fn test_gear_source_adds_mods() {
        let item = Item::new(
            "Iron Helm",
            EquipmentSlot::Head,
            StatBag::new().with(Attribute::Armor, 4).with(Attribute::Con, 1),
        );
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Head, &item).apply(&mut acc);

        let bag = acc.finish();
        assert_eq!(bag.get(Attribute::Armor), 4);
        assert_eq!(bag.get(Attribute::Con), 1);
    }
}
