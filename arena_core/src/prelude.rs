//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::StatBag;
pub use crate::types::{Attribute, DamageKind, EquipmentSlot};

// Gear and combatants
pub use crate::combatant::Combatant;
pub use crate::equipment::{Equipment, Item};

// Skills and effects
pub use crate::effect::{EffectKind, StackRule, StatusEffect};
pub use crate::skill::{BasicAttack, Mend, Skill, Strike};

// Combat
pub use crate::combat::{ActionReason, ActionResult, AttackProfile};
pub use crate::encounter::{DuelOutcome, Encounter};
pub use crate::error::CombatError;

// Config
pub use crate::config::GameConstants;
