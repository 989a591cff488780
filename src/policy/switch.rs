use super::damaging::score_move;
use super::snapshot::build_damage_snapshot;
use super::{best_damage, chance, Duel, PolicyParams};
use crate::model::{BattleState, MonId};
use crate::oracle::DamageOracle;
use crate::stats::raw_speed;
use rand::seq::SliceRandom;
use rand::Rng;

/// Matchup rank of `candidate` coming in against `opponent`, from -1 (outsped
/// and knocked out) to 5 (outspeeds and knocks out).
pub fn post_ko_switch_score<O: DamageOracle + ?Sized>(
    state: &BattleState,
    oracle: &O,
    candidate: MonId,
    opponent: MonId,
) -> i32 {
    let cand = state.mon(candidate);
    let opp = state.mon(opponent);
    let cand_hp = cand.current_hp.max(1);
    let opp_hp = opp.current_hp.max(1);

    let (_, dealt) = best_damage(state, oracle, candidate, opponent);
    let (_, taken) = best_damage(state, oracle, opponent, candidate);

    let cand_spe = raw_speed(cand);
    let opp_spe = raw_speed(opp);
    let faster = cand_spe > opp_spe;
    let slower = cand_spe < opp_spe;

    let ohko = dealt >= opp_hp;
    let ohko_taken = taken >= cand_hp;
    let dealt_pct = dealt.saturating_mul(100) / opp_hp;
    let taken_pct = taken.saturating_mul(100) / cand_hp;

    let doomed = slower && ohko_taken;
    let mut score = if doomed {
        -1
    } else if faster && ohko {
        5
    } else if slower && ohko && !ohko_taken {
        4
    } else if faster && dealt_pct > taken_pct {
        3
    } else if slower && dealt_pct > taken_pct {
        2
    } else if faster {
        1
    } else {
        0
    };

    match cand.species.as_str() {
        "Ditto" => score = score.max(2),
        "Wynaut" | "Wobbuffet" if !doomed => score = score.max(2),
        _ => {}
    }
    score
}

pub fn choose_switch_in<O, R>(
    state: &BattleState,
    oracle: &O,
    candidates: &[MonId],
    opponent: MonId,
    rng: &mut R,
) -> Option<MonId>
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let mut best_score = i32::MIN;
    let mut best: Vec<MonId> = Vec::new();
    for &candidate in candidates {
        let score = post_ko_switch_score(state, oracle, candidate, opponent);
        log::trace!("switch-in {} ranks {score}", state.mon(candidate).species);
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(candidate);
        } else if score == best_score {
            best.push(candidate);
        }
    }
    best.choose(rng).copied()
}

pub fn should_consider_switch<O, R>(
    state: &BattleState,
    oracle: &O,
    active: MonId,
    opponent: MonId,
    params: &PolicyParams,
    rng: &mut R,
) -> Option<MonId>
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let bench = state.bench_ids(active.side);
    if bench.is_empty() {
        return None;
    }

    let duel = Duel::new(state, oracle, active, opponent);
    let usable: Vec<usize> = duel
        .att()
        .moves
        .iter()
        .enumerate()
        .filter(|(_, mv)| mv.pp > 0)
        .map(|(slot, _)| slot)
        .collect();
    let snapshot = build_damage_snapshot(&duel, Some(&usable), rng);
    let best_move = usable
        .iter()
        .map(|&slot| score_move(&duel, slot, &snapshot, rng))
        .max();
    if best_move.is_some_and(|score| score > params.weak_move_threshold) {
        return None;
    }

    let mon = duel.att();
    if mon.current_hp.saturating_mul(2) < mon.max_hp {
        return None;
    }

    let opp_spe = raw_speed(duel.def());
    let mut found_faster = false;
    let viable: Vec<MonId> = bench
        .into_iter()
        .filter(|&candidate| {
            let cand = state.mon(candidate);
            if raw_speed(cand) > opp_spe {
                found_faster = true;
            }
            let (_, taken) = best_damage(state, oracle, opponent, candidate);
            let hp = cand.current_hp.max(1);
            if found_faster {
                taken < hp
            } else {
                taken.saturating_mul(2) < hp
            }
        })
        .collect();
    if viable.is_empty() || !chance(rng, params.switch_chance) {
        return None;
    }
    choose_switch_in(state, oracle, &viable, opponent, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        FieldState, MoveCategory, MoveData, PokemonState, Side, SideState, StatStages, Stats,
        Volatiles,
    };
    use crate::oracle::ReferenceOracle;
    use crate::types::PokeType;
    use rand::rngs::mock::StepRng;

    fn mon(species: &str, spe: u32, moves: Vec<MoveData>) -> PokemonState {
        PokemonState {
            species: species.to_string(),
            types: vec![PokeType::Normal],
            ability: None,
            item: None,
            stats: Stats {
                hp: 150,
                atk: 100,
                def: 100,
                spa: 100,
                spd: 100,
                spe,
            },
            stages: StatStages::default(),
            current_hp: 150,
            max_hp: 150,
            status: None,
            volatiles: Volatiles::default(),
            moves,
            last_move: None,
            toxic_turns: 0,
        }
    }

    fn splash() -> MoveData {
        MoveData::new("Splash", PokeType::Normal, MoveCategory::Status, 0, 100.0, 0, 40)
    }

    fn state(ours: Vec<PokemonState>, theirs: Vec<PokemonState>) -> BattleState {
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

    #[test]
    fn harmless_matchup_ranks_on_speed_alone() {
        let s = state(
            vec![mon("Lead", 50, vec![splash()]), mon("Fast", 120, vec![splash()]), mon("Slow", 40, vec![splash()])],
            vec![mon("Foe", 80, vec![splash()])],
        );
        let oracle = ReferenceOracle::default();
        let foe = MonId::new(Side::B, 0);
        assert_eq!(post_ko_switch_score(&s, &oracle, MonId::new(Side::A, 1), foe), 1);
        assert_eq!(post_ko_switch_score(&s, &oracle, MonId::new(Side::A, 2), foe), 0);
        let pick = choose_switch_in(
            &s,
            &oracle,
            &[MonId::new(Side::A, 1), MonId::new(Side::A, 2)],
            foe,
            &mut StepRng::new(0, 0),
        );
        assert_eq!(pick, Some(MonId::new(Side::A, 1)));
    }

    #[test]
    fn ditto_floor_applies_even_when_slow() {
        let s = state(
            vec![mon("Lead", 50, vec![splash()]), mon("Ditto", 40, vec![splash()])],
            vec![mon("Foe", 80, vec![splash()])],
        );
        let score = post_ko_switch_score(&s, &ReferenceOracle::default(), MonId::new(Side::A, 1), MonId::new(Side::B, 0));
        assert_eq!(score, 2);
    }

    #[test]
    fn no_switch_without_bench() {
        let s = state(vec![mon("Lead", 50, vec![splash()])], vec![mon("Foe", 80, vec![splash()])]);
        let pick = should_consider_switch(
            &s,
            &ReferenceOracle::default(),
            MonId::new(Side::A, 0),
            MonId::new(Side::B, 0),
            &PolicyParams::default(),
            &mut StepRng::new(0, 0),
        );
        assert_eq!(pick, None);
    }
}
