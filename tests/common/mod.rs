#![allow(dead_code)]

use pokemon_battle_policy::effects::to_id;
use pokemon_battle_policy::model::{
    BattleState, FieldState, MoveCategory, MoveData, PokemonState, Side, SideState, StatStages,
    Stats, Volatiles,
};
use pokemon_battle_policy::oracle::DamageOracle;
use pokemon_battle_policy::types::PokeType;
use std::collections::HashMap;

/// Oracle returning fixed bounds per (attacker species, move id); (0, 0) otherwise.
#[derive(Clone, Default)]
pub struct FixedOracle {
    table: HashMap<(String, String), (i32, i32)>,
}

impl FixedOracle {
    pub fn with(mut self, attacker: &str, move_name: &str, min: i32, max: i32) -> Self {
        self.table
            .insert((attacker.to_string(), to_id(move_name)), (min, max));
        self
    }
}

impl DamageOracle for FixedOracle {
    fn damage_bounds(
        &self,
        attacker: &PokemonState,
        _defender: &PokemonState,
        mv: &MoveData,
        _field: &FieldState,
        _sides: (Side, Side),
    ) -> (i32, i32) {
        self.table
            .get(&(attacker.species.clone(), mv.id.clone()))
            .copied()
            .unwrap_or((0, 0))
    }
}

pub fn make_move(name: &str, move_type: PokeType, category: MoveCategory, power: u32) -> MoveData {
    MoveData::new(name, move_type, category, power, 100.0, 0, 10)
}

pub fn status_move(name: &str) -> MoveData {
    make_move(name, PokeType::Normal, MoveCategory::Status, 0)
}

pub fn physical(name: &str, power: u32) -> MoveData {
    make_move(name, PokeType::Normal, MoveCategory::Physical, power)
}

pub fn make_mon(species: &str, types: &[PokeType], speed: u32, moves: Vec<MoveData>) -> PokemonState {
    PokemonState {
        species: species.to_string(),
        types: types.to_vec(),
        ability: None,
        item: None,
        stats: Stats {
            hp: 200,
            atk: 100,
            def: 100,
            spa: 100,
            spd: 100,
            spe: speed,
        },
        stages: StatStages::default(),
        current_hp: 200,
        max_hp: 200,
        status: None,
        volatiles: Volatiles::default(),
        moves,
        // Not on its first turn unless a test says so.
        last_move: Some("tackle".to_string()),
        toxic_turns: 0,
    }
}

pub fn singles(ours: Vec<PokemonState>, theirs: Vec<PokemonState>) -> BattleState {
    BattleState {
        sides: [
            SideState {
                party: ours,
                active: vec![0],
            },
            SideState {
                party: theirs,
                active: vec![0],
            },
        ],
        field: FieldState::default(),
    }
}
