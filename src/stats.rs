use crate::model::{FieldState, PokemonState, Side, Stat, StatusCondition, Weather};
use crate::types::PokeType;

pub fn stage_multiplier(stage: i8) -> f32 {
    let stage = stage.clamp(-6, 6);
    if stage >= 0 {
        (2 + stage as i32) as f32 / 2.0
    } else {
        2.0 / (2 - stage as i32) as f32
    }
}

pub fn boosted_stat(mon: &PokemonState, stat: Stat) -> u32 {
    let base = mon.stats.get(stat) as f32;
    (base * stage_multiplier(mon.stages.get(stat))).floor() as u32
}

/// Speed stat with stages only; the figure compared when picking switch-ins.
pub fn raw_speed(mon: &PokemonState) -> u32 {
    boosted_stat(mon, Stat::Spe)
}

pub fn effective_speed(mon: &PokemonState, field: &FieldState, side: Side) -> u32 {
    let mut spe = raw_speed(mon) as f32;
    if mon.status == Some(StatusCondition::Paralysis) && !mon.ability_is("Quick Feet") {
        spe = (spe * 0.5).floor();
    }
    spe *= ability_speed_multiplier(mon, field);
    if mon.item_is("Choice Scarf") {
        spe *= 1.5;
    } else if mon.item_is("Iron Ball") || mon.item_is("Macho Brace") {
        spe *= 0.5;
    }
    if field.tailwind[side.index()] {
        spe *= 2.0;
    }
    spe.floor() as u32
}

fn ability_speed_multiplier(mon: &PokemonState, field: &FieldState) -> f32 {
    let Some(ability) = mon.ability.as_deref() else {
        return 1.0;
    };
    match (ability, field.weather) {
        ("Slow Start", _) => 0.5,
        ("Quick Feet", _) if mon.status.is_some() => 1.5,
        ("Swift Swim", Some(Weather::Rain)) => 2.0,
        ("Chlorophyll", Some(Weather::Sun)) => 2.0,
        ("Sand Rush", Some(Weather::Sand)) => 2.0,
        ("Slush Rush", Some(Weather::Hail | Weather::Snow)) => 2.0,
        _ => 1.0,
    }
}

pub fn is_grounded(mon: &PokemonState) -> bool {
    if mon.item_is("Iron Ball") {
        return true;
    }
    !(mon.has_type(PokeType::Flying) || mon.ability_is("Levitate") || mon.item_is("Air Balloon"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StatStages, Stats, Volatiles};

    fn mon(spe: u32) -> PokemonState {
        PokemonState {
            species: "Jolteon".to_string(),
            types: vec![PokeType::Electric],
            ability: None,
            item: None,
            stats: Stats {
                hp: 140,
                atk: 85,
                def: 80,
                spa: 130,
                spd: 115,
                spe,
            },
            stages: StatStages::default(),
            current_hp: 140,
            max_hp: 140,
            status: None,
            volatiles: Volatiles::default(),
            moves: Vec::new(),
            last_move: None,
            toxic_turns: 0,
        }
    }

    #[test]
    fn stages_scale_speed() {
        let mut m = mon(100);
        m.stages.spe = 2;
        assert_eq!(raw_speed(&m), 200);
        m.stages.spe = -1;
        assert_eq!(raw_speed(&m), 66);
        m.stages.spe = 9;
        assert_eq!(raw_speed(&m), 400);
    }

    #[test]
    fn paralysis_and_tailwind_modify_effective_speed() {
        let mut m = mon(100);
        m.status = Some(StatusCondition::Paralysis);
        let mut field = FieldState::default();
        assert_eq!(effective_speed(&m, &field, Side::A), 50);
        field.tailwind[0] = true;
        assert_eq!(effective_speed(&m, &field, Side::A), 100);
        assert_eq!(effective_speed(&m, &field, Side::B), 50);
    }

    #[test]
    fn weather_abilities_double_speed() {
        let mut m = mon(90);
        m.ability = Some("Swift Swim".to_string());
        let field = FieldState {
            weather: Some(Weather::Rain),
            ..FieldState::default()
        };
        assert_eq!(effective_speed(&m, &field, Side::A), 180);
        assert_eq!(effective_speed(&m, &FieldState::default(), Side::A), 90);
    }

    #[test]
    fn flying_and_levitate_are_not_grounded() {
        let mut m = mon(90);
        assert!(is_grounded(&m));
        m.ability = Some("Levitate".to_string());
        assert!(!is_grounded(&m));
        m.item = Some("Iron Ball".to_string());
        assert!(is_grounded(&m));
    }
}
