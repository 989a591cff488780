mod common;

use common::{make_mon, make_move, physical, singles, FixedOracle};
use pokemon_battle_policy::model::{BattleState, GameType, MonId, MoveCategory, PokemonState, Side};
use pokemon_battle_policy::policy::replay_rng;
use pokemon_battle_policy::policy::switch::post_ko_switch_score;
use pokemon_battle_policy::types::PokeType;
use pokemon_battle_policy::{Action, BattleAi, Policy, PolicyParams, RunAndBunAi};
use rand::rngs::mock::StepRng;

const FOE: MonId = MonId { side: Side::B, slot: 0 };

fn bench(slot: usize) -> MonId {
    MonId::new(Side::A, slot)
}

fn thunder_wave_lead() -> PokemonState {
    make_mon(
        "Pikachu",
        &[PokeType::Electric],
        90,
        vec![make_move("Thunder Wave", PokeType::Electric, MoveCategory::Status, 0)],
    )
}

fn ground_foe() -> PokemonState {
    make_mon(
        "Foe",
        &[PokeType::Ground],
        100,
        vec![make_move("Earthquake", PokeType::Ground, MoveCategory::Physical, 100)],
    )
}

fn post_ko(state: &BattleState, oracle: &FixedOracle, slot: usize) -> i32 {
    post_ko_switch_score(state, oracle, bench(slot), FOE)
}

#[test]
fn rank_ladder_follows_speed_and_knockouts() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Sweeper", &[PokeType::Normal], 150, vec![physical("Slam", 80)]),
            make_mon("Tank", &[PokeType::Normal], 40, vec![physical("Crush", 80)]),
            make_mon("Scout", &[PokeType::Normal], 150, vec![physical("Jab", 40)]),
        ],
        vec![ground_foe()],
    );
    let oracle = FixedOracle::default()
        .with("Sweeper", "Slam", 210, 250)
        .with("Tank", "Crush", 210, 250)
        .with("Scout", "Jab", 30, 40)
        .with("Foe", "Earthquake", 20, 30);

    assert_eq!(post_ko(&state, &oracle, 1), 5);
    assert_eq!(post_ko(&state, &oracle, 2), 4);
    assert_eq!(post_ko(&state, &oracle, 3), 3);
}

#[test]
fn outsped_and_knocked_out_ranks_lowest() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Slowpoke", &[PokeType::Water], 15, vec![physical("Crush", 80)]),
        ],
        vec![ground_foe()],
    );
    let oracle = FixedOracle::default()
        .with("Slowpoke", "Crush", 210, 250)
        .with("Foe", "Earthquake", 250, 300);
    assert_eq!(post_ko(&state, &oracle, 1), -1);
}

#[test]
fn wynaut_floor_except_when_doomed() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Wynaut", &[PokeType::Psychic], 23, vec![]),
            make_mon("Ditto", &[PokeType::Normal], 48, vec![]),
        ],
        vec![ground_foe()],
    );
    let harmless = FixedOracle::default();
    assert_eq!(post_ko(&state, &harmless, 1), 2);
    assert_eq!(post_ko(&state, &harmless, 2), 2);

    let lethal = FixedOracle::default().with("Foe", "Earthquake", 250, 300);
    assert_eq!(post_ko(&state, &lethal, 1), -1);
    assert_eq!(post_ko(&state, &lethal, 2), 2);
}

#[test]
fn forced_replacement_picks_the_best_rank() {
    let mut fainted = thunder_wave_lead();
    fainted.current_hp = 0;
    let state = singles(
        vec![
            fainted,
            make_mon("Slowbro", &[PokeType::Water], 30, vec![]),
            make_mon("Sweeper", &[PokeType::Normal], 150, vec![physical("Slam", 80)]),
        ],
        vec![ground_foe()],
    );
    let oracle = FixedOracle::default().with("Sweeper", "Slam", 210, 250);
    let policy = Policy::new(oracle, PolicyParams::default());
    for seed in 0..10 {
        assert_eq!(
            policy.choose_replacement(&state, Side::A, &mut replay_rng(seed)),
            Some(bench(2))
        );
    }
}

#[test]
fn useless_moves_trigger_a_proactive_switch() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Chansey", &[PokeType::Normal], 50, vec![]),
        ],
        vec![ground_foe()],
    );
    let policy = Policy::new(FixedOracle::default(), PolicyParams::default());
    assert_eq!(
        policy.choose_ai_action(Side::A, Side::B, &state, &mut StepRng::new(0, 0)),
        Action::Switch { target: bench(1) }
    );

    let stay = Policy::new(
        FixedOracle::default(),
        PolicyParams {
            switch_chance: 0.0,
            ..PolicyParams::default()
        },
    );
    assert_eq!(
        stay.choose_ai_action(Side::A, Side::B, &state, &mut StepRng::new(0, 0)),
        Action::Move { slot: 0, target: FOE }
    );
}

#[test]
fn no_proactive_switch_below_half_hp_or_with_a_good_move() {
    let mut hurt = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Chansey", &[PokeType::Normal], 50, vec![]),
        ],
        vec![ground_foe()],
    );
    hurt.sides[0].party[0].current_hp = 99;
    let policy = Policy::new(FixedOracle::default(), PolicyParams::default());
    assert_eq!(
        policy.choose_ai_action(Side::A, Side::B, &hurt, &mut StepRng::new(0, 0)),
        Action::Move { slot: 0, target: FOE }
    );

    let mut armed = hurt.clone();
    armed.sides[0].party[0].current_hp = 200;
    armed.sides[0].party[0].moves.push(physical("Slam", 80));
    let oracle = FixedOracle::default().with("Pikachu", "Slam", 30, 40);
    let policy = Policy::new(oracle, PolicyParams::default());
    assert_eq!(
        policy.choose_ai_action(Side::A, Side::B, &armed, &mut StepRng::new(0, 0)),
        Action::Move { slot: 1, target: FOE }
    );
}

#[test]
fn frail_bench_is_not_a_switch_target() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Chansey", &[PokeType::Normal], 50, vec![]),
        ],
        vec![ground_foe()],
    );
    // 2HKOs the slower bench mon, so nothing is viable.
    let oracle = FixedOracle::default().with("Foe", "Earthquake", 100, 120);
    let policy = Policy::new(oracle, PolicyParams::default());
    assert_eq!(
        policy.choose_ai_action(Side::A, Side::B, &state, &mut StepRng::new(0, 0)),
        Action::Move { slot: 0, target: FOE }
    );
}

#[test]
fn one_fast_bench_mon_makes_later_ones_count_as_fast() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Scout", &[PokeType::Normal], 150, vec![]),
            make_mon("Tank", &[PokeType::Normal], 40, vec![physical("Crush", 80)]),
        ],
        vec![ground_foe()],
    );
    // Tank survives one hit but not two; it only qualifies as "fast".
    let oracle = FixedOracle::default()
        .with("Foe", "Earthquake", 100, 120)
        .with("Tank", "Crush", 210, 250);
    let policy = Policy::new(oracle, PolicyParams::default());
    assert_eq!(
        policy.choose_ai_action(Side::A, Side::B, &state, &mut StepRng::new(0, 0)),
        Action::Switch { target: bench(2) }
    );
}

#[test]
fn doubles_never_switch_proactively() {
    let mut state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Partner", &[PokeType::Normal], 60, vec![]),
            make_mon("Chansey", &[PokeType::Normal], 50, vec![]),
        ],
        vec![ground_foe(), make_mon("Foe2", &[PokeType::Normal], 60, vec![])],
    );
    state.sides[0].active = vec![0, 1];
    state.sides[1].active = vec![0, 1];
    state.field.game_type = GameType::Doubles;
    let policy = Policy::new(FixedOracle::default(), PolicyParams::default());
    assert_eq!(
        policy.choose_ai_action(Side::A, Side::B, &state, &mut StepRng::new(0, 0)),
        Action::Move { slot: 0, target: FOE }
    );
}

#[test]
fn seeded_ai_replays_its_choices() {
    let state = singles(
        vec![
            make_mon(
                "Mew",
                &[PokeType::Psychic],
                100,
                vec![physical("Slam", 80), physical("Jab", 40), physical("Crush", 80)],
            ),
            make_mon("Chansey", &[PokeType::Normal], 50, vec![]),
        ],
        vec![ground_foe()],
    );
    let oracle = || {
        FixedOracle::default()
            .with("Mew", "Slam", 40, 60)
            .with("Mew", "Jab", 40, 60)
            .with("Mew", "Crush", 40, 60)
    };
    let mut first = RunAndBunAi::new(Policy::new(oracle(), PolicyParams::default()), 42);
    let mut second = RunAndBunAi::new(Policy::new(oracle(), PolicyParams::default()), 42);
    let a: Vec<Action> = (0..16).map(|_| first.choose_action(&state, Side::A)).collect();
    let b: Vec<Action> = (0..16).map(|_| second.choose_action(&state, Side::A)).collect();
    assert_eq!(a, b);
    assert!(a.iter().all(|action| matches!(action, Action::Move { .. })));
}

#[test]
fn huge_damage_figures_do_not_overflow_the_ladder() {
    let state = singles(
        vec![
            thunder_wave_lead(),
            make_mon("Sweeper", &[PokeType::Normal], 150, vec![physical("Slam", 80)]),
        ],
        vec![ground_foe()],
    );
    let oracle = FixedOracle::default()
        .with("Sweeper", "Slam", i32::MAX, i32::MAX)
        .with("Foe", "Earthquake", 20, i32::MAX - 1);
    assert_eq!(post_ko(&state, &oracle, 1), 5);
}
