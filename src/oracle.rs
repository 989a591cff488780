use crate::model::{FieldState, MoveCategory, MoveData, PokemonState, Side, Stat, StatusCondition, Weather};
use crate::stats::boosted_stat;
use crate::types::{self, PokeType};

pub trait DamageOracle {
    /// Lowest and highest HP damage `mv` can deal, with `sides` giving the
    /// attacker's and defender's side.
    fn damage_bounds(
        &self,
        attacker: &PokemonState,
        defender: &PokemonState,
        mv: &MoveData,
        field: &FieldState,
        sides: (Side, Side),
    ) -> (i32, i32);

    fn type_effectiveness(
        &self,
        move_type: PokeType,
        defender_types: &[PokeType],
        _field: &FieldState,
    ) -> f32 {
        types::type_effectiveness(move_type, defender_types)
    }
}

impl<O: DamageOracle + ?Sized> DamageOracle for &O {
    fn damage_bounds(
        &self,
        attacker: &PokemonState,
        defender: &PokemonState,
        mv: &MoveData,
        field: &FieldState,
        sides: (Side, Side),
    ) -> (i32, i32) {
        (**self).damage_bounds(attacker, defender, mv, field, sides)
    }

    fn type_effectiveness(
        &self,
        move_type: PokeType,
        defender_types: &[PokeType],
        field: &FieldState,
    ) -> f32 {
        (**self).type_effectiveness(move_type, defender_types, field)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ReferenceOracle {
    pub level: u32,
}

impl Default for ReferenceOracle {
    fn default() -> Self {
        ReferenceOracle { level: 50 }
    }
}

impl DamageOracle for ReferenceOracle {
    fn damage_bounds(
        &self,
        attacker: &PokemonState,
        defender: &PokemonState,
        mv: &MoveData,
        field: &FieldState,
        sides: (Side, Side),
    ) -> (i32, i32) {
        // 参考: pokemon-showdown/sim/damage.ts: getDamage をレベル補正 + STAB/相性/天候/壁に簡略化。
        let (atk_stat, def_stat) = match mv.category {
            MoveCategory::Physical => (Stat::Atk, Stat::Def),
            MoveCategory::Special => (Stat::Spa, Stat::Spd),
            MoveCategory::Status => return (0, 0),
        };
        if mv.power == 0 {
            return (0, 0);
        }
        let atk = boosted_stat(attacker, atk_stat) as f32;
        let def = boosted_stat(defender, def_stat).max(1) as f32;
        let type_mod = self.type_effectiveness(mv.move_type, &defender.types, field);
        if type_mod == 0.0 {
            return (0, 0);
        }
        let level = self.level as f32;
        let base = (((2.0 * level / 5.0 + 2.0) * mv.power as f32 * atk / def) / 50.0) + 2.0;

        let mut modifier = type_mod;
        if attacker.has_type(mv.move_type) {
            modifier *= if attacker.ability_is("Adaptability") { 2.0 } else { 1.5 };
        }
        if mv.category == MoveCategory::Physical
            && attacker.status == Some(StatusCondition::Burn)
            && !attacker.ability_is("Guts")
        {
            modifier *= 0.5;
        }
        modifier *= match (field.weather, mv.move_type) {
            (Some(Weather::Rain), PokeType::Water) | (Some(Weather::Sun), PokeType::Fire) => 1.5,
            (Some(Weather::Rain), PokeType::Fire) | (Some(Weather::Sun), PokeType::Water) => 0.5,
            _ => 1.0,
        };
        let screens = field.screens[sides.1.index()];
        let screened = screens.aurora_veil
            || match mv.category {
                MoveCategory::Physical => screens.reflect,
                MoveCategory::Special => screens.light_screen,
                MoveCategory::Status => false,
            };
        if screened {
            modifier *= 0.5;
        }
        modifier *= match (attacker.item.as_deref(), mv.category) {
            (Some("Choice Band"), MoveCategory::Physical) => 1.5,
            (Some("Choice Specs"), MoveCategory::Special) => 1.5,
            (Some("Life Orb"), _) => 1.3,
            _ => 1.0,
        };

        let max = (base * modifier).floor().max(1.0);
        let min = (base * modifier * 0.85).floor().max(1.0); // PS の randomDamage 下限。
        (min as i32, max as i32)
    }
}
