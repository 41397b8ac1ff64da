//! Combat errors
//!
//! Structurally invalid requests are surfaced to the caller. Gameplay
//! outcomes such as a dodge or a resisted hit are never errors; they are
//! reported through [`ActionReason`](crate::combat::ActionReason).

use crate::types::EquipmentSlot;
use thiserror::Error;

/// Error raised by equipment, scheduling, or action resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("slot {slot} is already occupied by {occupant} (while equipping {item})")]
    SlotConflict {
        slot: EquipmentSlot,
        item: String,
        occupant: String,
    },
    #[error("{target} is defeated and cannot be targeted")]
    InvalidTarget { target: String },
    #[error("{actor} is defeated and cannot act")]
    ActorDefeated { actor: String },
    #[error("round {round} is earlier than the last resolved round {last}")]
    RoundOrder { round: u32, last: u32 },
}

pub type Result<T> = std::result::Result<T, CombatError>;
