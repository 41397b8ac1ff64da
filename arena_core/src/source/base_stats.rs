//! BaseStatsSource - Stats a combatant is created with

use crate::source::StatSource;
use crate::stat_block::{StatAccumulator, StatBag};

/// Stats from the combatant's archetype
pub struct BaseStatsSource<'a> {
    pub stats: &'a StatBag,
}

impl<'a> BaseStatsSource<'a> {
    /// Create a new base stats source
    pub fn new(stats: &'a StatBag) -> Self {
        BaseStatsSource { stats }
    }
}

impl StatSource for BaseStatsSource<'_> {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_bag(self.stats);
    }
}
