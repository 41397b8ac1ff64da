//! Damage system - Raw damage, crits, and the final damage number

mod calculation;

pub use calculation::{crit_chance, final_damage, offense_bonus, raw_damage};
