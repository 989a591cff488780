use super::snapshot::{DamageSnapshot, MoveDamage};
use super::status::{explosion, fake_out, final_gambit, memento, score_status_move};
use super::{chance, high_roll_bonus, pick, Duel, NEVER, NO_EFFECT, NON_DAMAGE_MOVE_BASE};
use crate::effects::{to_id, MoveEffect, KILL_BOOST_ABILITIES, STAT_DROP_BLOCKING_ABILITIES};
use crate::model::{MoveCategory, MoveData, Stat};
use crate::oracle::DamageOracle;
use rand::Rng;

pub fn score_move<O, R>(
    duel: &Duel<'_, O>,
    slot: usize,
    snapshot: &DamageSnapshot,
    rng: &mut R,
) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let Some(mv) = duel.att().moves.get(slot) else {
        return NEVER;
    };
    if mv.category == MoveCategory::Status || mv.power == 0 {
        return score_status_move(duel, mv, rng);
    }
    score_damaging_move(duel, mv, snapshot.info(slot), rng)
}

fn score_damaging_move<O, R>(duel: &Duel<'_, O>, mv: &MoveData, info: MoveDamage, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let mut score = family_score(duel, mv, &info, rng).unwrap_or(0);

    if info.is_highest && mv.effect != MoveEffect::Trapping {
        score += high_roll_bonus(rng);
    }
    if info.kills {
        score += kill_bonus(duel, mv);
    }
    if mv.traits.high_crit && duel.type_effectiveness(mv) > 1.0 && chance(rng, 0.5) {
        score += 1;
    }
    if mv.priority > 0 && duel.attacker_slower() && duel.threat_kos() {
        score += 11;
    }
    score
}

fn family_score<O, R>(
    duel: &Duel<'_, O>,
    mv: &MoveData,
    info: &MoveDamage,
    rng: &mut R,
) -> Option<i32>
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let att = duel.att();
    let def = duel.def();
    let score = match mv.effect {
        MoveEffect::Trapping => high_roll_bonus(rng),
        MoveEffect::SpeedDrop if !info.is_highest => {
            if def.ability_in(&STAT_DROP_BLOCKING_ABILITIES) {
                NO_EFFECT
            } else if duel.attacker_slower() {
                6
            } else {
                5
            }
        }
        MoveEffect::AttackDrop(category) if !info.is_highest => {
            if def.ability_in(&STAT_DROP_BLOCKING_ABILITIES) {
                NO_EFFECT
            } else if def.has_attack_of(category) {
                6
            } else {
                5
            }
        }
        MoveEffect::SpDefDrop => {
            let bonus = if info.is_highest { high_roll_bonus(rng) } else { 0 };
            bonus + NON_DAMAGE_MOVE_BASE
        }
        MoveEffect::FutureSight => {
            if duel.attacker_faster() && duel.threat_kos() {
                8
            } else {
                6
            }
        }
        MoveEffect::RelicSong => {
            if att.species.contains("Pirouette") {
                NEVER
            } else {
                10
            }
        }
        MoveEffect::SuckerPunch if att.last_move.as_deref().is_some_and(|last| to_id(last) == mv.id) => {
            return chance(rng, 0.5).then_some(NEVER);
        }
        MoveEffect::Pursuit => {
            let pct = def.hp_percent();
            let mut score = 0;
            if info.kills || pct <= 20 {
                score += 10;
            } else if pct <= 40 {
                score += pick(rng, 0.5, 8, 0);
            }
            if duel.attacker_faster() {
                score += 3;
            }
            score
        }
        MoveEffect::FellStinger if att.stages.get(Stat::Atk) < 6 && info.kills => {
            if duel.speed(duel.attacker) >= duel.speed(duel.defender) {
                pick(rng, 0.2, 23, 21)
            } else {
                pick(rng, 0.2, 17, 15)
            }
        }
        MoveEffect::Rollout => 7,
        MoveEffect::Explosion => explosion(att, def, rng),
        MoveEffect::Memento => memento(att, rng),
        MoveEffect::FinalGambit => final_gambit(duel),
        MoveEffect::FakeOut => fake_out(att, def),
        _ => return None,
    };
    Some(score)
}

fn kill_bonus<O: DamageOracle + ?Sized>(duel: &Duel<'_, O>, mv: &MoveData) -> i32 {
    let att_speed = duel.speed(duel.attacker);
    let def_speed = duel.speed(duel.defender);
    let mut bonus = if att_speed >= def_speed || mv.priority > 0 {
        6
    } else {
        3
    };
    if duel.att().ability_in(&KILL_BOOST_ABILITIES) {
        bonus += 1;
    }
    bonus
}
