//! Combatant - A fighter with stats, gear, skills, HP and active effects

use crate::combat::{self, ActionResult};
use crate::config::HP_PER_CON;
use crate::effect::{ActiveEffects, StatusEffect};
use crate::encounter::Encounter;
use crate::equipment::{Equipment, Item};
use crate::error::{CombatError, Result};
use crate::skill::{Skill, SkillBook};
use crate::source::{BaseStatsSource, StatSource};
use crate::stat_block::{StatAccumulator, StatBag};
use crate::types::{Attribute, DamageKind, EquipmentSlot};
use std::sync::Arc;
use tracing::{debug, trace};

/// A participant in combat
///
/// Invariants:
/// - `0 <= hp <= max_hp()`
/// - effective stats are base stats plus every equipped item's modifiers
/// - no two equipped items claim the same slot
#[derive(Debug, Clone)]
pub struct Combatant {
    name: String,
    damage_kind: DamageKind,
    base_stats: StatBag,
    equipment: Equipment,
    skills: SkillBook,
    hp: u32,
    effects: ActiveEffects,
}

impl Combatant {
    /// Create a combatant at full HP with no gear or skills
    pub fn new(name: impl Into<String>, damage_kind: DamageKind, base_stats: StatBag) -> Self {
        let mut combatant = Combatant {
            name: name.into(),
            damage_kind,
            base_stats,
            equipment: Equipment::new(),
            skills: SkillBook::new(),
            hp: 0,
            effects: ActiveEffects::new(),
        };
        combatant.hp = combatant.max_hp();
        combatant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_kind(&self) -> DamageKind {
        self.damage_kind
    }

    pub fn base_stats(&self) -> &StatBag {
        &self.base_stats
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn skills(&self) -> &SkillBook {
        &self.skills
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Maximum HP from effective CON, never below 1
    pub fn max_hp(&self) -> u32 {
        let con = self.effective_stats().get(Attribute::Con);
        con.saturating_mul(HP_PER_CON).max(1) as u32
    }

    fn gear_accumulator(&self) -> StatAccumulator {
        let mut accumulator = StatAccumulator::new();
        BaseStatsSource::new(&self.base_stats).apply(&mut accumulator);
        for source in self.equipment.gear_sources() {
            source.apply(&mut accumulator);
        }
        accumulator
    }

    /// Base stats plus equipment
    pub fn effective_stats(&self) -> StatBag {
        self.gear_accumulator().finish()
    }

    /// Effective stats with active effects layered on top
    ///
    /// Flat effect modifiers are added first, then multipliers apply to the
    /// total. Equal to [`effective_stats`](Self::effective_stats) when no
    /// effects are active.
    pub fn combat_stats(&self) -> StatBag {
        let mut accumulator = self.gear_accumulator();
        self.effects.apply_to(&mut accumulator);
        accumulator.finish()
    }

    /// Equip an item, keeping HP consistent with the new maximum
    pub fn equip_item(&mut self, item: Item) -> Result<()> {
        let was_full = self.hp == self.max_hp();
        self.equipment.equip(item)?;
        self.sync_hp(was_full);
        Ok(())
    }

    /// Unequip whatever occupies `slot`
    pub fn unequip_item(&mut self, slot: EquipmentSlot) -> Option<Item> {
        let was_full = self.hp == self.max_hp();
        let removed = self.equipment.unequip(slot)?;
        self.sync_hp(was_full);
        Some(removed)
    }

    fn sync_hp(&mut self, was_full: bool) {
        if self.hp == 0 {
            return;
        }
        let max = self.max_hp();
        self.hp = if was_full { max } else { self.hp.min(max) };
    }

    /// Register a skill
    pub fn add_skill(&mut self, skill: impl Skill + 'static) {
        self.skills.add(Arc::new(skill));
    }

    /// Register a shared skill definition
    pub fn add_skill_arc(&mut self, skill: Arc<dyn Skill>) {
        self.skills.add(skill);
    }

    /// Lose HP, never dropping below zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Regain HP up to the maximum. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.min(self.max_hp().saturating_sub(self.hp));
        self.hp += restored;
        restored
    }

    /// Apply a status effect following its stack rule
    ///
    /// Effects feed [`combat_stats`](Self::combat_stats) only; max HP is
    /// derived from effective stats and is unaffected.
    pub fn apply_effect(&mut self, effect: StatusEffect) -> bool {
        self.effects.apply(effect)
    }

    /// Start-of-turn effect processing
    ///
    /// Drops expired effects, applies tick damage and counts every
    /// remaining effect down by one turn. Returns the damage taken.
    pub fn tick_effects(&mut self) -> u32 {
        let damage = self.effects.tick();
        let lost = self.take_damage(damage);
        if lost > 0 {
            trace!(combatant = %self.name, damage = lost, hp = self.hp, "effect tick");
        }
        lost
    }

    /// Standard attack against `target`
    pub fn basic_attack(
        &self,
        target: &mut Combatant,
        encounter: &mut Encounter,
        round: u32,
    ) -> Result<ActionResult> {
        combat::basic_attack(self, target, encounter, round)
    }

    /// Take one turn against `target`
    ///
    /// Picks the best ready skill (or the basic attack), executes it,
    /// advances cooldowns and records the result in the encounter log.
    /// Cooldowns only advance if the action succeeds.
    pub fn act(
        &mut self,
        target: &mut Combatant,
        encounter: &mut Encounter,
        round: u32,
    ) -> Result<ActionResult> {
        if !self.is_alive() {
            return Err(CombatError::ActorDefeated {
                actor: self.name.clone(),
            });
        }
        if !target.is_alive() {
            return Err(CombatError::InvalidTarget {
                target: target.name.clone(),
            });
        }

        let selected = self.skills.select();
        let skill = selected
            .and_then(|index| self.skills.get(index))
            .map(|entry| Arc::clone(entry.skill()));

        let result = match skill {
            Some(skill) => {
                debug!(actor = %self.name, skill = skill.name(), round, "skill selected");
                skill.execute(self, target, encounter, round)?
            }
            None => {
                debug!(actor = %self.name, round, "no skill ready, basic attack");
                combat::basic_attack(self, target, encounter, round)?
            }
        };

        self.skills.commit(selected);
        encounter.record(result.clone());
        Ok(result)
    }

    /// Restore full HP, clear effects and cooldowns
    pub fn reset(&mut self) {
        self.effects.clear();
        self.skills.reset();
        self.hp = self.max_hp();
    }
}
