//! Turn-level action selection.
//!
//! RNG draw order for one [`Policy::choose_ai_action`] call:
//!
//! 1. Singles with proactive switching on: damage rolls for the usable moves
//!    in slot order, each move's scoring draws in slot order, the switch coin
//!    flip, then the switch-in tie-break. Early exits skip the later draws.
//! 2. Move pass: damage rolls in slot order, scoring draws in slot order, the
//!    final tie-break among the top-scoring moves.

use super::damaging::score_move;
use super::snapshot::build_damage_snapshot;
use super::switch::{choose_switch_in, should_consider_switch};
use super::{replay_rng, Duel, PolicyParams};
use crate::model::{BattleState, GameType, MonId, Side};
use crate::oracle::DamageOracle;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    Move { slot: usize, target: MonId },
    Switch { target: MonId },
    Struggle { target: MonId },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { slot, target } => {
                write!(f, "move {slot} -> {:?}{}", target.side, target.slot)
            }
            Action::Switch { target } => write!(f, "switch {:?}{}", target.side, target.slot),
            Action::Struggle { target } => {
                write!(f, "struggle -> {:?}{}", target.side, target.slot)
            }
        }
    }
}

pub fn choose_move<O, R>(duel: &Duel<'_, O>, legal: &[usize], rng: &mut R) -> Option<usize>
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let snapshot = build_damage_snapshot(duel, Some(legal), rng);
    let mut best_score = i32::MIN;
    let mut best: Vec<usize> = Vec::new();
    for &slot in legal {
        let score = score_move(duel, slot, &snapshot, rng);
        log::trace!("slot {slot} scores {score}");
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(slot);
        } else if score == best_score {
            best.push(slot);
        }
    }
    best.choose(rng).copied()
}

#[derive(Clone, Debug, Default)]
pub struct Policy<O> {
    pub oracle: O,
    pub params: PolicyParams,
}

impl<O: DamageOracle> Policy<O> {
    pub fn new(oracle: O, params: PolicyParams) -> Self {
        Policy { oracle, params }
    }

    pub fn choose_ai_action<R: Rng>(
        &self,
        ai_side: Side,
        opp_side: Side,
        state: &BattleState,
        rng: &mut R,
    ) -> Action {
        let target = state
            .lead(opp_side)
            .unwrap_or_else(|| MonId::new(opp_side, 0));
        if let Err(err) = state.validate() {
            log::warn!("unusable snapshot, struggling: {err:#}");
            return Action::Struggle { target };
        }
        let Some(active) = state.lead(ai_side) else {
            return Action::Struggle { target };
        };

        if state.field.game_type == GameType::Singles && self.params.proactive_switching {
            if let Some(incoming) =
                should_consider_switch(state, &self.oracle, active, target, &self.params, rng)
            {
                log::debug!(
                    "{} switches out for {}",
                    state.mon(active).species,
                    state.mon(incoming).species
                );
                return Action::Switch { target: incoming };
            }
        }

        let duel = Duel::new(state, &self.oracle, active, target);
        let legal: Vec<usize> = duel
            .att()
            .moves
            .iter()
            .enumerate()
            .filter(|(_, mv)| mv.pp > 0)
            .map(|(slot, _)| slot)
            .collect();
        let action = match choose_move(&duel, &legal, rng) {
            Some(slot) => Action::Move { slot, target },
            None => Action::Struggle { target },
        };
        log::debug!("{} chooses {action}", duel.att().species);
        action
    }

    pub fn choose_replacement<R: Rng>(
        &self,
        state: &BattleState,
        side: Side,
        rng: &mut R,
    ) -> Option<MonId> {
        if let Err(err) = state.validate() {
            log::warn!("unusable snapshot, no replacement: {err:#}");
            return None;
        }
        let opponent = state.lead(side.opponent())?;
        let bench = state.bench_ids(side);
        choose_switch_in(state, &self.oracle, &bench, opponent, rng)
    }
}

pub trait BattleAi {
    fn choose_action(&mut self, state: &BattleState, side: Side) -> Action;
}

pub struct RunAndBunAi<O> {
    policy: Policy<O>,
    rng: SmallRng,
}

impl<O: DamageOracle> RunAndBunAi<O> {
    pub fn new(policy: Policy<O>, seed: u64) -> Self {
        Self {
            policy,
            rng: replay_rng(seed),
        }
    }

    pub fn policy(&self) -> &Policy<O> {
        &self.policy
    }

    pub fn choose_replacement(&mut self, state: &BattleState, side: Side) -> Option<MonId> {
        self.policy.choose_replacement(state, side, &mut self.rng)
    }
}

impl<O: DamageOracle> BattleAi for RunAndBunAi<O> {
    fn choose_action(&mut self, state: &BattleState, side: Side) -> Action {
        self.policy
            .choose_ai_action(side, side.opponent(), state, &mut self.rng)
    }
}
