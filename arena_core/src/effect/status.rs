//! StatusEffect - One active effect instance

use super::{EffectKind, StackRule};
use crate::defense::accuracy_rating;
use crate::source::StatSource;
use crate::stat_block::{StatAccumulator, StatBag};
use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Rage: fraction of STR added
const RAGE_STR_BONUS: f64 = 0.5;
/// Rage: fraction of the accuracy rating lost
const RAGE_ACCURACY_PENALTY: f64 = 0.1;
const RAGE_DURATION: u32 = 1;

/// Shield: armor granted per point of caster INT
const SHIELD_INT_RATIO: f64 = 0.4;
const SHIELD_DURATION: u32 = 2;
const SHIELD_MAX_STACKS: u32 = 3;

/// Poison: damage per tick per point of caster INT
const POISON_INT_RATIO: f64 = 0.15;
const POISON_DURATION: u32 = 2;

/// An effect applied to a combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Identifier used for stacking (effects with the same tag interact)
    pub tag: String,
    pub kind: EffectKind,
    /// Turns remaining
    pub duration: u32,
    pub stack_rule: StackRule,
    pub stacks: u32,
    pub max_stacks: u32,
    /// Strength used to compare instances on refresh (and per-tick damage)
    pub magnitude: f64,
    /// Flat modifiers per stack
    #[serde(default)]
    pub flat_mods: StatBag,
    /// "More" multipliers per stack
    #[serde(default)]
    pub mult_mods: Vec<(Attribute, f64)>,
    /// Name of whoever applied the effect
    #[serde(default)]
    pub source: String,
}

impl StatusEffect {
    /// +50% STR and -10% of the caster's accuracy rating for one turn;
    /// reapplying refreshes
    pub fn rage(source: impl Into<String>, caster_accuracy: f64) -> Self {
        let penalty = -(caster_accuracy.max(0.0) * RAGE_ACCURACY_PENALTY) as i32;
        StatusEffect {
            tag: EffectKind::Rage.tag().to_string(),
            kind: EffectKind::Rage,
            duration: RAGE_DURATION,
            stack_rule: StackRule::Refresh,
            stacks: 1,
            max_stacks: 1,
            magnitude: RAGE_STR_BONUS,
            flat_mods: StatBag::new().with(Attribute::Accuracy, penalty),
            mult_mods: vec![(Attribute::Str, RAGE_STR_BONUS)],
            source: source.into(),
        }
    }

    /// Armor equal to 40% of the caster's INT; reapplying merges stacks
    pub fn shield(source: impl Into<String>, caster_int: i32) -> Self {
        let armor = (caster_int.max(0) as f64 * SHIELD_INT_RATIO) as i32;
        StatusEffect {
            tag: EffectKind::Shield.tag().to_string(),
            kind: EffectKind::Shield,
            duration: SHIELD_DURATION,
            stack_rule: StackRule::StackMerge,
            stacks: 1,
            max_stacks: SHIELD_MAX_STACKS,
            magnitude: armor as f64,
            flat_mods: StatBag::new().with(Attribute::Armor, armor),
            mult_mods: Vec::new(),
            source: source.into(),
        }
    }

    /// True damage each turn of max(1, 15% caster INT); reapplying refreshes
    pub fn poison(source: impl Into<String>, caster_int: i32) -> Self {
        let per_tick = (caster_int.max(0) as f64 * POISON_INT_RATIO).floor().max(1.0);
        StatusEffect {
            tag: EffectKind::Poison.tag().to_string(),
            kind: EffectKind::Poison,
            duration: POISON_DURATION,
            stack_rule: StackRule::Refresh,
            stacks: 1,
            max_stacks: 1,
            magnitude: per_tick,
            flat_mods: StatBag::new(),
            mult_mods: Vec::new(),
            source: source.into(),
        }
    }

    /// Build the preset for `kind` from the caster's stats
    pub fn from_kind(kind: EffectKind, source: impl Into<String>, caster: &StatBag) -> Self {
        match kind {
            EffectKind::Rage => Self::rage(source, accuracy_rating(caster)),
            EffectKind::Shield => Self::shield(source, caster.get(Attribute::Int)),
            EffectKind::Poison => Self::poison(source, caster.get(Attribute::Int)),
        }
    }

    /// Override the stack rule
    pub fn with_stack_rule(mut self, rule: StackRule) -> Self {
        self.stack_rule = rule;
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.duration == 0
    }

    /// True damage dealt each turn
    pub fn tick_damage(&self) -> u32 {
        match self.kind {
            EffectKind::Poison => self.magnitude.max(0.0) as u32 * self.stacks,
            EffectKind::Rage | EffectKind::Shield => 0,
        }
    }

    /// Fold a same-tag application into this instance using the incoming rule
    ///
    /// Only meaningful for `Refresh` and `StackMerge`; the other rules are
    /// handled by [`ActiveEffects`](super::ActiveEffects).
    pub(crate) fn absorb(&mut self, incoming: StatusEffect) {
        match incoming.stack_rule {
            StackRule::Refresh => {
                self.duration = incoming.duration;
                if incoming.magnitude > self.magnitude {
                    self.magnitude = incoming.magnitude;
                    self.flat_mods = incoming.flat_mods;
                    self.mult_mods = incoming.mult_mods;
                    self.source = incoming.source;
                }
            }
            StackRule::StackMerge => {
                self.stacks = (self.stacks + incoming.stacks).min(self.max_stacks.max(1));
                self.duration = self.duration.max(incoming.duration);
            }
            StackRule::StackAdd | StackRule::Reject => {}
        }
    }
}

impl StatSource for StatusEffect {
    fn id(&self) -> &str {
        &self.tag
    }

    fn priority(&self) -> i32 {
        200
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let stacks = self.stacks as i32;
        for (attr, value) in self.flat_mods.iter() {
            stats.add_flat(attr, value.saturating_mul(stacks));
        }
        for &(attr, more) in &self.mult_mods {
            stats.add_more(attr, more * self.stacks as f64);
        }
    }
}
