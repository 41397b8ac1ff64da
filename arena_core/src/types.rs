//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
    Head,
    Chest,
    Legs,
    Ring1,
    Ring2,
    Amulet,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::MainHand,
            EquipmentSlot::OffHand,
            EquipmentSlot::Head,
            EquipmentSlot::Chest,
            EquipmentSlot::Legs,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
            EquipmentSlot::Amulet,
        ]
    }

    /// Snake-case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentSlot::MainHand => "main_hand",
            EquipmentSlot::OffHand => "off_hand",
            EquipmentSlot::Head => "head",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Legs => "legs",
            EquipmentSlot::Ring1 => "ring1",
            EquipmentSlot::Ring2 => "ring2",
            EquipmentSlot::Amulet => "amulet",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Damage affiliation of a combatant
///
/// Selects the offense stat (STR or INT) and the defense stat the target
/// mitigates with (armor or resist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    #[default]
    Physical,
    Magical,
    /// Ignores all mitigation (damage over time)
    True,
}

impl DamageKind {
    /// Attribute that scales outgoing damage
    pub fn offense_stat(&self) -> Option<Attribute> {
        match self {
            DamageKind::Physical => Some(Attribute::Str),
            DamageKind::Magical => Some(Attribute::Int),
            DamageKind::True => None,
        }
    }

    /// Attribute that mitigates incoming damage
    pub fn defense_stat(&self) -> Option<Attribute> {
        match self {
            DamageKind::Physical => Some(Attribute::Armor),
            DamageKind::Magical => Some(Attribute::Resist),
            DamageKind::True => None,
        }
    }
}

impl fmt::Display for DamageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageKind::Physical => f.write_str("physical"),
            DamageKind::Magical => f.write_str("magical"),
            DamageKind::True => f.write_str("true"),
        }
    }
}

/// A stat key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "CON")]
    Con,
    #[serde(rename = "DEX")]
    Dex,
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "WIS")]
    Wis,
    #[serde(rename = "AGI")]
    Agi,
    #[serde(rename = "armor")]
    Armor,
    #[serde(rename = "resist")]
    Resist,
    #[serde(rename = "weapon_damage")]
    WeaponDamage,
    /// Flat bonus to the accuracy rating
    #[serde(rename = "accuracy")]
    Accuracy,
}

impl Attribute {
    /// Number of distinct attributes
    pub const COUNT: usize = 10;

    /// Get all attributes in display order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Str,
            Attribute::Con,
            Attribute::Dex,
            Attribute::Int,
            Attribute::Wis,
            Attribute::Agi,
            Attribute::Armor,
            Attribute::Resist,
            Attribute::WeaponDamage,
            Attribute::Accuracy,
        ]
    }

    /// The six primary attributes
    pub fn primary() -> &'static [Attribute] {
        &Self::all()[..6]
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Canonical key ("STR", "armor", ...)
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Str => "STR",
            Attribute::Con => "CON",
            Attribute::Dex => "DEX",
            Attribute::Int => "INT",
            Attribute::Wis => "WIS",
            Attribute::Agi => "AGI",
            Attribute::Armor => "armor",
            Attribute::Resist => "resist",
            Attribute::WeaponDamage => "weapon_damage",
            Attribute::Accuracy => "accuracy",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
