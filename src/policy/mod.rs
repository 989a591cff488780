pub mod damaging;
pub mod select;
pub mod snapshot;
pub mod status;
pub mod switch;

use crate::model::{BattleState, FieldState, MonId, MoveData, PokemonState, Side};
use crate::oracle::DamageOracle;
use crate::stats::effective_speed;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Hard veto: the move is never picked while anything else scores higher.
pub const NEVER: i32 = -20;
pub const NO_EFFECT: i32 = -10;
pub const NON_DAMAGE_MOVE_BASE: i32 = 6;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyParams {
    pub proactive_switching: bool,
    pub weak_move_threshold: i32,
    pub switch_chance: f64,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            proactive_switching: true,
            weak_move_threshold: -5,
            switch_chance: 0.5,
        }
    }
}

pub fn replay_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub(crate) fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

pub(crate) fn pick<R: Rng>(rng: &mut R, p: f64, hit: i32, miss: i32) -> i32 {
    if chance(rng, p) {
        hit
    } else {
        miss
    }
}

/// Bonus for the turn's hardest-hitting move: 8 one time in five, else 6.
pub(crate) fn high_roll_bonus<R: Rng>(rng: &mut R) -> i32 {
    pick(rng, 0.2, 8, 6)
}

pub fn best_damage<O: DamageOracle + ?Sized>(
    state: &BattleState,
    oracle: &O,
    from: MonId,
    to: MonId,
) -> (i32, i32) {
    let attacker = state.mon(from);
    let defender = state.mon(to);
    let mut best = (0, 0);
    for mv in attacker.moves.iter().filter(|mv| mv.pp > 0) {
        let (min, max) =
            oracle.damage_bounds(attacker, defender, mv, &state.field, (from.side, to.side));
        if max > best.1 {
            best = (min, max);
        }
    }
    best
}

pub struct Duel<'a, O: ?Sized> {
    pub state: &'a BattleState,
    pub oracle: &'a O,
    pub attacker: MonId,
    pub defender: MonId,
}

impl<'a, O: DamageOracle + ?Sized> Duel<'a, O> {
    pub fn new(state: &'a BattleState, oracle: &'a O, attacker: MonId, defender: MonId) -> Self {
        Duel {
            state,
            oracle,
            attacker,
            defender,
        }
    }

    pub fn att(&self) -> &'a PokemonState {
        self.state.mon(self.attacker)
    }

    pub fn def(&self) -> &'a PokemonState {
        self.state.mon(self.defender)
    }

    pub fn field(&self) -> &'a FieldState {
        &self.state.field
    }

    pub fn attacker_side(&self) -> Side {
        self.attacker.side
    }

    pub fn defender_side(&self) -> Side {
        self.defender.side
    }

    pub fn speed(&self, id: MonId) -> u32 {
        effective_speed(self.state.mon(id), &self.state.field, id.side)
    }

    pub fn attacker_faster(&self) -> bool {
        self.speed(self.attacker) > self.speed(self.defender)
    }

    pub fn attacker_slower(&self) -> bool {
        self.speed(self.attacker) < self.speed(self.defender)
    }

    pub fn bounds(&self, mv: &MoveData) -> (i32, i32) {
        self.oracle.damage_bounds(
            self.att(),
            self.def(),
            mv,
            self.field(),
            (self.attacker.side, self.defender.side),
        )
    }

    pub fn type_effectiveness(&self, mv: &MoveData) -> f32 {
        self.oracle
            .type_effectiveness(mv.move_type, &self.def().types, self.field())
    }

    pub fn threat(&self) -> i32 {
        best_damage(self.state, self.oracle, self.defender, self.attacker).1
    }

    pub fn threat_kos(&self) -> bool {
        self.threat() >= self.att().current_hp
    }

    pub fn threat_two_hkos(&self) -> bool {
        self.threat().saturating_mul(2) >= self.att().current_hp
    }
}
