//! Status effects - Timed buffs, debuffs and damage over time

mod active;
mod status;

pub use active::ActiveEffects;
pub use status::StatusEffect;

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens when an effect is applied while one with the same tag is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackRule {
    /// Reset the duration, keeping the stronger magnitude
    Refresh,
    /// Add an independent instance
    StackAdd,
    /// Add a stack to the existing instance (up to `max_stacks`)
    StackMerge,
    /// Ignore the new application
    Reject,
}

/// Built-in effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// +50% STR
    Rage,
    /// Flat armor scaled from the caster's INT
    Shield,
    /// True damage each turn scaled from the caster's INT
    Poison,
}

impl EffectKind {
    pub fn tag(&self) -> &'static str {
        match self {
            EffectKind::Rage => "rage",
            EffectKind::Shield => "shield",
            EffectKind::Poison => "poison",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
