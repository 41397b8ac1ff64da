//! arena_core - Turn-based combat engine
//!
//! This library provides:
//! - StatBag: Per-attribute stat modifiers that compose by addition
//! - Equipment: Slot bookkeeping (including two-handed weapons) and gear totals
//! - SkillBook: Skill registration, priority selection and cooldowns
//! - Action resolution: Hit, crit and mitigation against a seeded RNG
//! - Status effects: Timed buffs and damage over time with stacking rules
//! - Encounter: Round ordering, battle log and a duel driver

pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod defense;
pub mod effect;
pub mod encounter;
pub mod equipment;
pub mod error;
pub mod prelude;
pub mod skill;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use combat::{basic_attack, resolve_attack, ActionReason, ActionResult, AttackProfile, BASIC_ATTACK_NAME};
pub use combatant::Combatant;
pub use config::{ConfigError, GameConstants, HP_PER_CON};
pub use effect::{ActiveEffects, EffectKind, StackRule, StatusEffect};
pub use encounter::{BattleLog, DuelOutcome, Encounter, RoundLog, DEFAULT_MAX_ROUNDS};
pub use equipment::{Equipment, Item};
pub use error::{CombatError, Result};
pub use skill::{BasicAttack, Mend, Skill, SkillBook, SkillEntry, Strike};
pub use source::{BaseStatsSource, GearSource, StatSource};
pub use stat_block::{StatAccumulator, StatBag};
pub use types::{Attribute, DamageKind, EquipmentSlot};
