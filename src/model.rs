use crate::effects::{to_id, MoveEffect, MoveTraits};
use crate::types::PokeType;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
pub struct MonId {
    pub side: Side,
    pub slot: usize,
}

impl MonId {
    pub fn new(side: Side, slot: usize) -> Self {
        MonId { side, slot }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    #[serde(alias = "Physical")]
    Physical,
    #[serde(alias = "Special")]
    Special,
    #[serde(alias = "Status")]
    Status,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCondition {
    Burn,
    Paralysis,
    Sleep,
    Poison,
    Toxic,
    Freeze,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Singles,
    Doubles,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatStages {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
}

impl StatStages {
    pub fn get(&self, stat: Stat) -> i8 {
        let raw = match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        };
        raw.clamp(-6, 6)
    }

    pub fn any_positive(&self) -> bool {
        [Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe]
            .into_iter()
            .any(|stat| self.get(stat) > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl Stats {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Volatiles {
    pub leech_seed: Option<MonId>,
    pub infatuated_with: Option<MonId>,
    pub perish_song: u8,
    pub yawn: u8,
    pub partial_trap: bool,
    pub salt_cure: bool,
    pub protect_streak: u8,
    pub substitute_hp: Option<u32>,
    pub recharge: bool,
    pub truant: bool,
    pub encore: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct MoveRecord {
    name: String,
    #[serde(rename = "type")]
    move_type: PokeType,
    category: MoveCategory,
    #[serde(default)]
    power: u32,
    #[serde(default = "default_accuracy")]
    accuracy: f32,
    #[serde(default)]
    priority: i8,
    #[serde(default = "default_pp")]
    pp: u8,
}

fn default_accuracy() -> f32 {
    100.0
}

fn default_pp() -> u8 {
    10
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "MoveRecord")]
pub struct MoveData {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub move_type: PokeType,
    pub category: MoveCategory,
    pub power: u32,
    pub accuracy: f32,
    pub priority: i8,
    pub pp: u8,
    #[serde(skip)]
    pub effect: MoveEffect,
    #[serde(skip)]
    pub traits: MoveTraits,
}

impl From<MoveRecord> for MoveData {
    fn from(record: MoveRecord) -> Self {
        MoveData::new(
            &record.name,
            record.move_type,
            record.category,
            record.power,
            record.accuracy,
            record.priority,
            record.pp,
        )
    }
}

impl MoveData {
    pub fn new(
        name: &str,
        move_type: PokeType,
        category: MoveCategory,
        power: u32,
        accuracy: f32,
        priority: i8,
        pp: u8,
    ) -> Self {
        let id = to_id(name);
        MoveData {
            name: name.to_string(),
            effect: MoveEffect::of(&id),
            traits: MoveTraits::of(&id),
            id,
            move_type,
            category,
            power,
            accuracy,
            priority,
            pp,
        }
    }

    pub fn is_damaging(&self) -> bool {
        matches!(self.category, MoveCategory::Physical | MoveCategory::Special) && self.power > 0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PokemonState {
    pub species: String,
    pub types: Vec<PokeType>,
    #[serde(default)]
    pub ability: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
    pub stats: Stats,
    #[serde(default)]
    pub stages: StatStages,
    pub current_hp: i32,
    pub max_hp: i32,
    #[serde(default)]
    pub status: Option<StatusCondition>,
    #[serde(default)]
    pub volatiles: Volatiles,
    #[serde(default)]
    pub moves: Vec<MoveData>,
    #[serde(default)]
    pub last_move: Option<String>,
    #[serde(default)]
    pub toxic_turns: u8,
}

impl PokemonState {
    pub fn is_fainted(&self) -> bool {
        self.current_hp <= 0
    }

    pub fn has_type(&self, t: PokeType) -> bool {
        self.types.contains(&t)
    }

    pub fn ability_is(&self, name: &str) -> bool {
        self.ability.as_deref() == Some(name)
    }

    pub fn item_is(&self, name: &str) -> bool {
        self.item.as_deref() == Some(name)
    }

    pub fn ability_in(&self, set: &phf::Set<&'static str>) -> bool {
        self.ability.as_deref().is_some_and(|a| set.contains(a))
    }

    pub fn item_in(&self, set: &phf::Set<&'static str>) -> bool {
        self.item.as_deref().is_some_and(|i| set.contains(i))
    }

    pub fn hp_percent(&self) -> i32 {
        self.current_hp.saturating_mul(100) / self.max_hp.max(1)
    }

    pub fn knows(&self, id: &str) -> bool {
        self.moves.iter().any(|mv| mv.id == id)
    }

    pub fn knows_any(&self, ids: &[&str]) -> bool {
        self.moves.iter().any(|mv| ids.contains(&mv.id.as_str()))
    }

    pub fn has_attack_of(&self, category: MoveCategory) -> bool {
        self.moves
            .iter()
            .any(|mv| mv.category == category && mv.is_damaging())
    }

    pub fn has_damaging_move(&self) -> bool {
        self.moves.iter().any(MoveData::is_damaging)
    }

    pub fn first_turn_out(&self) -> bool {
        self.last_move.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SideState {
    pub party: Vec<PokemonState>,
    pub active: Vec<usize>,
}

impl SideState {
    pub fn is_active(&self, slot: usize) -> bool {
        self.active.contains(&slot)
    }

    pub fn bench(&self) -> impl Iterator<Item = usize> + '_ {
        self.party
            .iter()
            .enumerate()
            .filter(move |(slot, mon)| !mon.is_fainted() && !self.is_active(*slot))
            .map(|(slot, _)| slot)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SideHazards {
    pub stealth_rock: bool,
    pub spikes: u8,
    pub toxic_spikes: u8,
    pub sticky_web: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Screens {
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldState {
    pub weather: Option<Weather>,
    pub weather_permanent: bool,
    pub terrain: Option<Terrain>,
    pub hazards: [SideHazards; 2],
    pub screens: [Screens; 2],
    pub tailwind: [bool; 2],
    pub trick_room: bool,
    pub trick_room_turns: u8,
    pub game_type: GameType,
}

impl FieldState {
    pub fn has_weather(&self, weather: Weather) -> bool {
        self.weather == Some(weather)
    }

    pub fn has_terrain(&self, terrain: Terrain) -> bool {
        self.terrain == Some(terrain)
    }

    pub fn trick_room_active(&self) -> bool {
        self.trick_room
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BattleState {
    pub sides: [SideState; 2],
    #[serde(default)]
    pub field: FieldState,
}

impl BattleState {
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    /// Panics on an id that does not belong to this snapshot; see [`BattleState::validate`].
    pub fn mon(&self, id: MonId) -> &PokemonState {
        &self.side(id.side).party[id.slot]
    }

    pub fn get(&self, id: MonId) -> Option<&PokemonState> {
        self.side(id.side).party.get(id.slot)
    }

    pub fn active_ids(&self, side: Side) -> impl Iterator<Item = MonId> + '_ {
        self.side(side)
            .active
            .iter()
            .map(move |&slot| MonId::new(side, slot))
    }

    pub fn lead(&self, side: Side) -> Option<MonId> {
        self.active_ids(side).next()
    }

    pub fn bench_ids(&self, side: Side) -> Vec<MonId> {
        self.side(side)
            .bench()
            .map(|slot| MonId::new(side, slot))
            .collect()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let expected_active = match self.field.game_type {
            GameType::Singles => 1,
            GameType::Doubles => 2,
        };
        for side in [Side::A, Side::B] {
            let state = self.side(side);
            if state.active.is_empty() || state.active.len() > expected_active {
                anyhow::bail!(
                    "side {side:?} has {} active slots, expected 1..={expected_active}",
                    state.active.len()
                );
            }
            for (pos, &slot) in state.active.iter().enumerate() {
                if slot >= state.party.len() {
                    anyhow::bail!(
                        "side {side:?} active slot {slot} is outside a party of {}",
                        state.party.len()
                    );
                }
                if state.active[..pos].contains(&slot) {
                    anyhow::bail!("side {side:?} lists party slot {slot} as active twice");
                }
            }
            for (slot, mon) in state.party.iter().enumerate() {
                if mon.max_hp <= 0 || mon.current_hp < 0 || mon.current_hp > mon.max_hp {
                    anyhow::bail!(
                        "side {side:?} slot {slot} ({}) has HP {}/{}",
                        mon.species,
                        mon.current_hp,
                        mon.max_hp
                    );
                }
            }
        }
        Ok(())
    }
}
