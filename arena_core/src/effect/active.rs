//! ActiveEffects - Effects currently applied to one combatant

use super::{StackRule, StatusEffect};
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The set of effects on a combatant, in application order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vec<StatusEffect>,
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect following its stack rule
    ///
    /// Returns false if the application was rejected.
    pub fn apply(&mut self, effect: StatusEffect) -> bool {
        let existing = self.effects.iter().position(|e| e.tag == effect.tag);

        match (existing, effect.stack_rule) {
            (None, _) | (Some(_), StackRule::StackAdd) => {
                trace!(tag = %effect.tag, duration = effect.duration, "effect added");
                self.effects.push(effect);
                true
            }
            (Some(_), StackRule::Reject) => {
                trace!(tag = %effect.tag, "effect rejected");
                false
            }
            (Some(index), StackRule::Refresh | StackRule::StackMerge) => {
                let current = &mut self.effects[index];
                current.absorb(effect);
                trace!(
                    tag = %current.tag,
                    stacks = current.stacks,
                    duration = current.duration,
                    "effect stacked"
                );
                true
            }
        }
    }

    /// Advance every effect by one turn
    ///
    /// Expired effects are dropped first, then each remaining effect deals
    /// its tick damage and loses one turn of duration. Returns the total
    /// damage dealt by the ticks.
    pub fn tick(&mut self) -> u32 {
        self.effects.retain(|e| !e.is_expired());

        let mut damage = 0u32;
        for effect in &mut self.effects {
            damage = damage.saturating_add(effect.tick_damage());
            effect.duration = effect.duration.saturating_sub(1);
        }
        damage
    }

    /// First effect with the given tag
    pub fn get(&self, tag: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Feed every effect's modifiers into an accumulator
    pub fn apply_to(&self, stats: &mut StatAccumulator) {
        for effect in &self.effects {
            effect.apply(stats);
        }
    }
}
