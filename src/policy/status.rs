use super::{chance, pick, Duel, NEVER, NON_DAMAGE_MOVE_BASE, NO_EFFECT};
use crate::effects::{
    MoveEffect, Setup, SetupRole, CRIT_BOOST_ABILITIES, CRIT_BOOST_ITEMS,
    POISON_IMMUNE_ABILITIES, SLEEP_CURE_ABILITIES, SLEEP_CURE_ITEMS, SLEEP_IMMUNE_ABILITIES,
};
use crate::model::{
    FieldState, MoveCategory, MoveData, PokemonState, Stat, StatusCondition, Terrain, Weather,
};
use crate::oracle::DamageOracle;
use crate::stats::is_grounded;
use crate::types::PokeType;
use rand::Rng;

const HEX: &str = "hex";

pub fn score_status_move<O, R>(duel: &Duel<'_, O>, mv: &MoveData, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let att = duel.att();
    let def = duel.def();
    match mv.effect {
        MoveEffect::Recovery | MoveEffect::SunRecovery | MoveEffect::Rest => {
            score_recovery(duel, mv.effect, rng)
        }
        MoveEffect::Sleep => {
            if !can_sleep(def, duel.field()) {
                return NO_EFFECT;
            }
            let mut score = NON_DAMAGE_MOVE_BASE;
            if chance(rng, 0.25) {
                if att.knows_any(&["dreameater", "nightmare"])
                    && !def.knows_any(&["snore", "sleeptalk"])
                {
                    score += 1;
                }
                if att.knows(HEX) {
                    score += 1;
                }
                score += 1;
            }
            score
        }
        MoveEffect::Paralysis => score_paralysis(duel, rng),
        MoveEffect::Burn => {
            if def.status.is_some() || def.has_type(PokeType::Fire) || def.ability_is("Flash Fire")
            {
                return NO_EFFECT;
            }
            let mut score = NON_DAMAGE_MOVE_BASE;
            if chance(rng, 0.37) {
                if def.has_attack_of(MoveCategory::Physical) {
                    score += 1;
                }
                if att.knows(HEX) {
                    score += 1;
                }
            }
            score
        }
        MoveEffect::Poison => {
            if !can_poison(def) {
                return NO_EFFECT;
            }
            let mut score = NON_DAMAGE_MOVE_BASE;
            if chance(rng, 0.38)
                && !duel.threat_kos()
                && def.hp_percent() > 20
                && !def.has_damaging_move()
                && (att.ability_is("Merciless") || att.knows_any(&[HEX, "venoshock", "venomdrench"]))
            {
                score += 2;
            }
            score
        }
        MoveEffect::Protect => score_protect(duel, rng),
        MoveEffect::StealthRock
        | MoveEffect::Spikes
        | MoveEffect::ToxicSpikes
        | MoveEffect::StickyWeb => score_hazard(duel, mv.effect, rng),
        MoveEffect::Substitute => {
            if att.current_hp.saturating_mul(2) <= att.max_hp || def.ability_is("Infiltrator") {
                return NEVER;
            }
            let mut score = NON_DAMAGE_MOVE_BASE;
            if def.status == Some(StatusCondition::Sleep) {
                score += 2;
            }
            if def.volatiles.leech_seed.is_some() && duel.attacker_faster() {
                score += 2;
            }
            if chance(rng, 0.5) {
                score -= 1;
            }
            if def.moves.iter().any(|m| m.traits.sound) {
                score -= 8;
            }
            score
        }
        MoveEffect::Tailwind => {
            if duel.attacker_slower() {
                9
            } else {
                5
            }
        }
        MoveEffect::TrickRoom => {
            if duel.field().trick_room_active() {
                NEVER
            } else if duel.attacker_slower() {
                10
            } else {
                5
            }
        }
        MoveEffect::SpeedBoost => {
            if duel.speed(duel.attacker) >= duel.speed(duel.defender) {
                NEVER
            } else {
                7
            }
        }
        MoveEffect::FakeOut => fake_out(att, def),
        MoveEffect::Terrain => {
            if att.item_is("Terrain Extender") {
                9
            } else {
                8
            }
        }
        MoveEffect::Screen(category) => {
            let mut score = NON_DAMAGE_MOVE_BASE;
            if def.has_attack_of(category) {
                score += 1;
            }
            if att.item_is("Light Clay") {
                score += 1;
            }
            if chance(rng, 0.5) {
                score += 1;
            }
            score
        }
        MoveEffect::Support => NON_DAMAGE_MOVE_BASE,
        MoveEffect::ItemSwap => match att.item.as_deref() {
            Some("Toxic Orb" | "Flame Orb" | "Black Sludge") => pick(rng, 0.5, 7, 6),
            Some("Iron Ball" | "Lagging Tail" | "Sticky Barb") => 7,
            _ => 5,
        },
        MoveEffect::Imprison => {
            if att.moves.iter().any(|m| def.knows(&m.id)) {
                9
            } else {
                NEVER
            }
        }
        MoveEffect::BatonPass => {
            if duel.state.side(duel.attacker_side()).bench().next().is_none() {
                NEVER
            } else if att.stages.any_positive() || att.volatiles.substitute_hp.is_some() {
                14
            } else {
                0
            }
        }
        MoveEffect::Coaching => score_coaching(duel, rng),
        MoveEffect::FocusEnergy => {
            if att.ability_in(&CRIT_BOOST_ABILITIES)
                || att.item_in(&CRIT_BOOST_ITEMS)
                || att.moves.iter().any(|m| m.traits.high_crit)
            {
                7
            } else {
                6
            }
        }
        MoveEffect::DestinyBond => {
            if duel.attacker_faster() {
                if duel.threat_kos() {
                    pick(rng, 0.81, 7, 6)
                } else {
                    6
                }
            } else {
                pick(rng, 0.5, 5, 6)
            }
        }
        MoveEffect::Memento => memento(att, rng),
        MoveEffect::FinalGambit => final_gambit(duel),
        MoveEffect::Counter(category) => score_counter(duel, category, rng),
        MoveEffect::SpecialBoost => {
            let two_hko = duel.threat_two_hkos();
            let mut score = NON_DAMAGE_MOVE_BASE;
            if incapacitated(def) {
                score += 3;
            } else if !two_hko {
                score += 1;
            }
            if duel.attacker_faster() {
                score += 1;
            }
            if two_hko {
                score -= 5;
            }
            if att.stages.get(Stat::Spa) >= 2 {
                score -= 1;
            }
            score
        }
        MoveEffect::ShellSmash => {
            if att.stages.get(Stat::Atk) >= 1 || att.stages.get(Stat::Spa) >= 6 {
                return NEVER;
            }
            let mut score = NON_DAMAGE_MOVE_BASE;
            if incapacitated(def) {
                score += 3;
            }
            score + if duel.threat_kos() { -2 } else { 2 }
        }
        MoveEffect::BellyDrum => {
            if incapacitated(def) {
                9
            } else if !duel.threat_kos() {
                8
            } else {
                4
            }
        }
        MoveEffect::Taunt => {
            let field = duel.field();
            if def.knows("trickroom") && !field.trick_room_active() {
                9
            } else if def.knows("defog")
                && field.screens[duel.attacker_side().index()].aurora_veil
                && duel.attacker_faster()
            {
                9
            } else {
                5
            }
        }
        MoveEffect::Encore => {
            if def.volatiles.encore || def.first_turn_out() {
                NEVER
            } else if duel.attacker_faster() {
                7
            } else {
                pick(rng, 0.5, 6, 5)
            }
        }
        MoveEffect::Setup(setup) => score_setup(duel, setup, rng),
        _ => NON_DAMAGE_MOVE_BASE,
    }
}

fn score_recovery<O, R>(duel: &Duel<'_, O>, effect: MoveEffect, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let att = duel.att();
    if att.current_hp >= att.max_hp {
        return NEVER;
    }
    if att.hp_percent() >= 85 {
        return -6;
    }
    match effect {
        MoveEffect::SunRecovery if duel.field().has_weather(Weather::Sun) => {
            if should_recover(duel, 67, rng) || should_recover(duel, 50, rng) {
                7
            } else {
                5
            }
        }
        MoveEffect::Rest => {
            if !should_recover(duel, 100, rng) {
                5
            } else if att.item_in(&SLEEP_CURE_ITEMS)
                || att.ability_in(&SLEEP_CURE_ABILITIES)
                || att.knows_any(&["sleeptalk", "snore"])
            {
                8
            } else {
                7
            }
        }
        _ => {
            if should_recover(duel, 50, rng) {
                7
            } else {
                5
            }
        }
    }
}

pub(crate) fn should_recover<O, R>(duel: &Duel<'_, O>, heal_percent: i32, rng: &mut R) -> bool
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let att = duel.att();
    if att.status == Some(StatusCondition::Toxic) {
        return false;
    }
    let heal = (att.max_hp.saturating_mul(heal_percent) / 100).max(1);
    let threat = duel.threat();
    if threat >= heal {
        return false;
    }
    let pct = att.hp_percent();
    if duel.attacker_faster() {
        let healed = att.max_hp.min(att.current_hp.saturating_add(heal));
        if threat >= att.current_hp && threat < healed {
            return true;
        }
        if threat < att.current_hp {
            if pct < 40 {
                return true;
            }
            if pct < 66 {
                return chance(rng, 0.5);
            }
        }
        false
    } else if pct < 50 {
        true
    } else if pct < 70 {
        chance(rng, 0.75)
    } else {
        false
    }
}

fn score_paralysis<O, R>(duel: &Duel<'_, O>, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let def = duel.def();
    if !can_paralyze(def, duel.field()) {
        return NO_EFFECT;
    }
    let att_speed = duel.speed(duel.attacker);
    let def_speed = duel.speed(duel.defender);
    let slower_after_para = def_speed > att_speed && def_speed / 4 <= att_speed;
    let mut score = 8;
    if !slower_after_para && !has_hex_option(duel) && !duel.att().moves.iter().any(|m| m.traits.flinch)
    {
        score = 7;
    }
    if chance(rng, 0.5) {
        score -= 1;
    }
    score
}

fn has_hex_option<O: DamageOracle + ?Sized>(duel: &Duel<'_, O>) -> bool {
    duel.att().knows(HEX)
        || partner(duel).is_some_and(|mate| mate.knows(HEX))
}

fn partner<'a, O: DamageOracle + ?Sized>(duel: &Duel<'a, O>) -> Option<&'a PokemonState> {
    duel.state
        .active_ids(duel.attacker_side())
        .find(|id| *id != duel.attacker)
        .map(|id| duel.state.mon(id))
}

fn score_protect<O, R>(duel: &Duel<'_, O>, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let att = duel.att();
    let mut score = NON_DAMAGE_MOVE_BASE;
    if burdened(att) {
        score -= 2;
    }
    if burdened(duel.def()) || is_para_or_asleep(duel.def()) {
        score += 1;
    }
    if att.first_turn_out() {
        score -= 1;
    }
    if residual_damage(att, duel.field()) >= att.current_hp {
        return NEVER;
    }
    match att.volatiles.protect_streak {
        0 => score,
        1 => {
            if chance(rng, 0.5) {
                NEVER
            } else {
                score
            }
        }
        _ => NEVER,
    }
}

fn score_hazard<O, R>(duel: &Duel<'_, O>, effect: MoveEffect, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let first = duel.att().first_turn_out();
    let hazards = duel.field().hazards[duel.defender_side().index()];
    match effect {
        MoveEffect::StickyWeb => {
            let score = pick(rng, 0.75, if first { 9 } else { 6 }, if first { 12 } else { 9 });
            score - i32::from(hazards.sticky_web)
        }
        _ => {
            let score = pick(rng, 0.25, if first { 8 } else { 6 }, if first { 9 } else { 7 });
            let (layers, max_layers) = match effect {
                MoveEffect::Spikes => (hazards.spikes, 3),
                MoveEffect::ToxicSpikes => (hazards.toxic_spikes, 2),
                _ => return score - i32::from(hazards.stealth_rock),
            };
            if layers >= max_layers {
                NO_EFFECT
            } else if layers > 0 {
                score - 1
            } else {
                score
            }
        }
    }
}

fn score_coaching<O, R>(duel: &Duel<'_, O>, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let Some(mate) = partner(duel) else {
        return NEVER;
    };
    if mate.ability_is("Contrary") {
        return NEVER;
    }
    let mut score = NON_DAMAGE_MOVE_BASE;
    for stat in [Stat::Atk, Stat::Def] {
        let stage = i32::from(mate.stages.get(stat));
        if stage < 2 {
            score += 1 - stage;
        }
    }
    if chance(rng, 0.8) {
        score += 1;
    }
    score
}

fn score_counter<O, R>(duel: &Duel<'_, O>, reflected: MoveCategory, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let def = duel.def();
    if duel.threat_kos() && !sturdy_or_sash(duel.att()) {
        return NEVER;
    }
    let mut score = NON_DAMAGE_MOVE_BASE;
    if !def.has_attack_of(reflected) {
        score += pick(rng, 0.8, 2, 0);
    }
    if duel.attacker_faster() && chance(rng, 0.25) {
        score -= 1;
    }
    if def.moves.iter().any(|m| m.category == MoveCategory::Status) && chance(rng, 0.25) {
        score -= 1;
    }
    score
}

fn score_setup<O, R>(duel: &Duel<'_, O>, setup: Setup, rng: &mut R) -> i32
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let att = duel.att();
    let def = duel.def();
    if setup.vetoable {
        if def.ability_is("Unaware") && !setup.ignores_unaware {
            return NEVER;
        }
        if duel.threat_kos() && !sturdy_or_sash(att) {
            return NEVER;
        }
    }

    let mut score = NON_DAMAGE_MOVE_BASE;
    let slower_and_pressed = duel.attacker_slower() && duel.threat_two_hkos();
    let offensive = match setup.role {
        SetupRole::Defensive { both_defenses } => {
            if slower_and_pressed {
                score -= 5;
            }
            if chance(rng, 0.95) {
                if incapacitated(def) {
                    score += 2;
                }
                if both_defenses && (att.stages.get(Stat::Def) < 2 || att.stages.get(Stat::Spd) < 2)
                {
                    score += 2;
                }
            }
            return score;
        }
        SetupRole::Offensive => true,
        SetupRole::Mixed { guards } => {
            let other = match guards {
                MoveCategory::Physical => MoveCategory::Special,
                _ => MoveCategory::Physical,
            };
            !(def.has_attack_of(guards) && !def.has_attack_of(other))
        }
    };
    if offensive {
        if incapacitated(def) {
            score += 3;
        }
        if slower_and_pressed {
            score -= 5;
        }
    }
    score
}

pub(crate) fn fake_out(att: &PokemonState, def: &PokemonState) -> i32 {
    if !att.first_turn_out() || def.ability_is("Shield Dust") || def.ability_is("Inner Focus") {
        NO_EFFECT
    } else {
        9
    }
}

pub(crate) fn memento<R: Rng>(att: &PokemonState, rng: &mut R) -> i32 {
    match att.hp_percent() {
        pct if pct < 10 => 16,
        pct if pct < 33 => pick(rng, 0.7, 14, 6),
        pct if pct < 66 => pick(rng, 0.5, 13, 6),
        _ => pick(rng, 0.05, 13, 6),
    }
}

pub(crate) fn final_gambit<O: DamageOracle + ?Sized>(duel: &Duel<'_, O>) -> i32 {
    if !duel.attacker_faster() {
        6
    } else if duel.att().current_hp > duel.def().current_hp {
        8
    } else if duel.threat_kos() {
        7
    } else {
        6
    }
}

pub(crate) fn explosion<R: Rng>(att: &PokemonState, def: &PokemonState, rng: &mut R) -> i32 {
    if def.has_type(PokeType::Ghost) {
        return NEVER;
    }
    match att.hp_percent() {
        pct if pct < 10 => 10,
        pct if pct < 33 => pick(rng, 0.7, 8, 0),
        pct if pct < 66 => pick(rng, 0.5, 7, 0),
        _ => {
            let score = pick(rng, 0.05, 7, 0);
            if att.current_hp == 1 && def.current_hp == 1 {
                score - 1
            } else {
                score
            }
        }
    }
}

fn can_sleep(target: &PokemonState, field: &FieldState) -> bool {
    target.status.is_none()
        && !target.ability_in(&SLEEP_IMMUNE_ABILITIES)
        && !((field.has_terrain(Terrain::Electric) || field.has_terrain(Terrain::Misty))
            && is_grounded(target))
}

fn can_paralyze(target: &PokemonState, field: &FieldState) -> bool {
    target.status.is_none()
        && !target.has_type(PokeType::Ground)
        && !target.ability_is("Limber")
        && !(field.has_terrain(Terrain::Misty) && is_grounded(target))
}

fn can_poison(target: &PokemonState) -> bool {
    target.status.is_none()
        && !target.has_type(PokeType::Steel)
        && !target.has_type(PokeType::Poison)
        && !target.ability_in(&POISON_IMMUNE_ABILITIES)
}

/// Asleep, frozen, recharging or loafing this turn.
pub(crate) fn incapacitated(mon: &PokemonState) -> bool {
    matches!(mon.status, Some(StatusCondition::Sleep | StatusCondition::Freeze))
        || mon.volatiles.recharge
        || mon.volatiles.truant
}

fn burdened(mon: &PokemonState) -> bool {
    matches!(
        mon.status,
        Some(StatusCondition::Burn | StatusCondition::Poison | StatusCondition::Toxic)
    ) || mon.volatiles.leech_seed.is_some()
        || mon.volatiles.infatuated_with.is_some()
        || mon.volatiles.perish_song > 0
        || mon.volatiles.yawn > 0
}

fn is_para_or_asleep(mon: &PokemonState) -> bool {
    matches!(
        mon.status,
        Some(StatusCondition::Paralysis | StatusCondition::Sleep)
    )
}

pub(crate) fn sturdy_or_sash(mon: &PokemonState) -> bool {
    mon.current_hp >= mon.max_hp && (mon.ability_is("Sturdy") || mon.item_is("Focus Sash"))
}

pub fn residual_damage(mon: &PokemonState, field: &FieldState) -> i32 {
    if mon.is_fainted() || mon.ability_is("Magic Guard") {
        return 0;
    }
    let max_hp = mon.max_hp.max(1);
    let chip = |divisor: i32| (max_hp / divisor).max(1);
    let mut damage = match mon.status {
        Some(StatusCondition::Burn) => chip(16),
        Some(StatusCondition::Poison) => chip(8),
        Some(StatusCondition::Toxic) => {
            ((max_hp / 16).saturating_mul(i32::from(mon.toxic_turns.max(1)))).max(1)
        }
        _ => 0,
    };
    if mon.volatiles.leech_seed.is_some() {
        damage += chip(8);
    }
    if mon.volatiles.partial_trap {
        damage += chip(8);
    }
    if mon.volatiles.salt_cure {
        damage += chip(8);
    }
    match field.weather {
        Some(Weather::Sand) => {
            let immune = [PokeType::Rock, PokeType::Ground, PokeType::Steel]
                .into_iter()
                .any(|t| mon.has_type(t))
                || mon.ability_is("Sand Force")
                || mon.ability_is("Sand Rush")
                || mon.ability_is("Overcoat")
                || mon.item_is("Safety Goggles");
            if !immune {
                damage += chip(16);
            }
        }
        Some(Weather::Hail | Weather::Snow) => {
            let immune = mon.has_type(PokeType::Ice)
                || mon.ability_is("Ice Body")
                || mon.ability_is("Snow Cloak")
                || mon.ability_is("Overcoat")
                || mon.item_is("Safety Goggles");
            if !immune {
                damage += chip(16);
            }
        }
        _ => {}
    }
    damage
}
