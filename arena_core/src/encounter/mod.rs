//! Encounter - Shared state for one fight
//!
//! An encounter owns everything the combatants share: the seeded RNG that
//! drives every roll, the tunable constants, the last accepted round and
//! the battle log. Two encounters built from the same seed and fed the
//! same actions produce identical results.

mod log;

pub use log::{BattleLog, RoundLog};

use crate::combat::ActionResult;
use crate::combatant::Combatant;
use crate::config::GameConstants;
use crate::error::{CombatError, Result};
use crate::types::Attribute;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Round cap used when a duel has no explicit limit
pub const DEFAULT_MAX_ROUNDS: u32 = 99;

/// How a duel ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DuelOutcome {
    Victory { winner: String, rounds: u32 },
    /// Both combatants were still standing when the round cap was reached
    Draw { rounds: u32 },
}

impl DuelOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            DuelOutcome::Victory { winner, .. } => Some(winner.as_str()),
            DuelOutcome::Draw { .. } => None,
        }
    }

    pub fn rounds(&self) -> u32 {
        match self {
            DuelOutcome::Victory { rounds, .. } | DuelOutcome::Draw { rounds } => *rounds,
        }
    }
}

/// State shared by every action in one fight
#[derive(Debug, Clone)]
pub struct Encounter {
    seed: u64,
    rng: ChaCha8Rng,
    constants: GameConstants,
    last_round: Option<u32>,
    log: BattleLog,
}

impl Encounter {
    /// New encounter with default constants
    pub fn new(seed: u64) -> Self {
        Self::with_constants(seed, GameConstants::default())
    }

    pub fn with_constants(seed: u64, constants: GameConstants) -> Self {
        Encounter {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            constants,
            last_round: None,
            log: BattleLog::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Last round an action was accepted for
    pub fn last_round(&self) -> Option<u32> {
        self.last_round
    }

    /// Accept an action for `round`
    ///
    /// Rounds never go backwards within an encounter; repeating the
    /// current round is allowed.
    pub fn begin_action(&mut self, round: u32) -> Result<()> {
        if let Some(last) = self.last_round {
            if round < last {
                return Err(CombatError::RoundOrder { round, last });
            }
        }
        self.last_round = Some(round);
        Ok(())
    }

    /// Append a resolved action to the log
    pub fn record(&mut self, result: ActionResult) {
        self.log.push(result);
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn into_log(self) -> BattleLog {
        self.log
    }

    /// Whether `a` acts before `b`: higher DEX first, ties broken by a coin flip
    pub fn initiative(&mut self, a: &Combatant, b: &Combatant) -> bool {
        let a_dex = a.combat_stats().get(Attribute::Dex);
        let b_dex = b.combat_stats().get(Attribute::Dex);
        if a_dex != b_dex {
            a_dex > b_dex
        } else {
            self.rng.gen_bool(0.5)
        }
    }

    /// Fight until one side falls or `max_rounds` rounds have passed
    ///
    /// Each turn starts by ticking the acting combatant's effects; a
    /// combatant killed by a tick loses before acting. Rounds continue
    /// from the encounter's last accepted round.
    pub fn run_duel(
        &mut self,
        a: &mut Combatant,
        b: &mut Combatant,
        max_rounds: u32,
    ) -> Result<DuelOutcome> {
        if !a.is_alive() {
            return Err(CombatError::ActorDefeated {
                actor: a.name().to_string(),
            });
        }
        if !b.is_alive() {
            return Err(CombatError::InvalidTarget {
                target: b.name().to_string(),
            });
        }

        let a_first = self.initiative(a, b);
        let (first, second) = if a_first { (a, b) } else { (b, a) };
        let start = self.last_round.map_or(1, |r| r + 1);
        debug!(first = first.name(), second = second.name(), seed = self.seed, "duel start");

        for fought in 1..=max_rounds {
            let round = start + fought - 1;
            if let Some(winner) = self.take_turn(first, second, round)? {
                return Ok(self.finish(winner, fought));
            }
            if let Some(winner) = self.take_turn(second, first, round)? {
                return Ok(self.finish(winner, fought));
            }
        }

        debug!(rounds = max_rounds, "duel drawn");
        Ok(DuelOutcome::Draw { rounds: max_rounds })
    }

    /// One combatant's turn; returns the winner's name if the duel ended
    fn take_turn(
        &mut self,
        actor: &mut Combatant,
        target: &mut Combatant,
        round: u32,
    ) -> Result<Option<String>> {
        actor.tick_effects();
        if !actor.is_alive() {
            return Ok(Some(target.name().to_string()));
        }

        actor.act(target, self, round)?;
        if !target.is_alive() {
            return Ok(Some(actor.name().to_string()));
        }
        Ok(None)
    }

    fn finish(&self, winner: String, rounds: u32) -> DuelOutcome {
        debug!(winner = %winner, rounds, "duel over");
        DuelOutcome::Victory { winner, rounds }
    }
}
