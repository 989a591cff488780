use pokemon_battle_policy::effects::MoveEffect;
use pokemon_battle_policy::model::{MoveCategory, Side, StatusCondition};
use pokemon_battle_policy::types::PokeType;
use pokemon_battle_policy::{load_params, load_snapshot, validate_params, PolicyParams};
use std::path::PathBuf;

const SNAPSHOT: &str = r#"{
  "sides": [
    {
      "party": [
        {
          "species": "Rotom-Wash",
          "types": ["Electric", "water"],
          "ability": "Levitate",
          "stats": {"hp": 157, "atk": 85, "def": 127, "spa": 125, "spd": 127, "spe": 106},
          "current_hp": 120,
          "max_hp": 157,
          "moves": [
            {"name": "Will-O-Wisp", "type": "fire", "category": "Status"},
            {"name": "Hydro Pump", "type": "water", "category": "special", "power": 110, "accuracy": 80, "pp": 5}
          ]
        }
      ],
      "active": [0]
    },
    {
      "party": [
        {
          "species": "Garchomp",
          "types": ["dragon", "ground"],
          "stats": {"hp": 183, "atk": 182, "def": 115, "spa": 100, "spd": 105, "spe": 169},
          "current_hp": 183,
          "max_hp": 183,
          "status": "paralysis",
          "stages": {"atk": 2},
          "volatiles": {"protect_streak": 1, "leech_seed": {"side": "a", "slot": 0}},
          "moves": [{"name": "Earthquake", "type": "ground", "category": "physical", "power": 100}]
        }
      ],
      "active": [0]
    }
  ],
  "field": {"weather": "rain", "trick_room": true}
}"#;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("battle-ai-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn snapshot_loads_and_tags_moves() {
    let path = temp_file("snapshot.json", SNAPSHOT);
    let state = load_snapshot(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let rotom = &state.sides[0].party[0];
    assert_eq!(rotom.types, vec![PokeType::Electric, PokeType::Water]);
    assert_eq!(rotom.moves[0].id, "willowisp");
    assert_eq!(rotom.moves[0].effect, MoveEffect::Burn);
    assert_eq!(rotom.moves[0].accuracy, 100.0);
    assert_eq!(rotom.moves[1].category, MoveCategory::Special);
    assert_eq!(rotom.moves[1].pp, 5);

    let chomp = &state.sides[1].party[0];
    assert_eq!(chomp.status, Some(StatusCondition::Paralysis));
    assert_eq!(chomp.stages.atk, 2);
    assert_eq!(chomp.volatiles.protect_streak, 1);
    assert_eq!(chomp.volatiles.leech_seed.map(|id| id.side), Some(Side::A));
    assert!(state.field.trick_room_active());
}

#[test]
fn snapshot_with_bad_active_slot_is_rejected() {
    let broken = SNAPSHOT.replacen("\"active\": [0]", "\"active\": [3]", 1);
    let path = temp_file("broken.json", &broken);
    let err = load_snapshot(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(format!("{err:#}").contains("outside a party"), "{err:#}");
}

#[test]
fn missing_snapshot_reports_the_path() {
    let err = load_snapshot(std::path::Path::new("/nonexistent/state.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/state.json"));
}

#[test]
fn params_fill_in_defaults() {
    let path = temp_file("params.json", r#"{"switch_chance": 0.25}"#);
    let params = load_params(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(params.switch_chance, 0.25);
    assert_eq!(params.weak_move_threshold, -5);
    assert!(params.proactive_switching);
}

#[test]
fn out_of_range_switch_chance_is_rejected() {
    let params = PolicyParams {
        switch_chance: 1.5,
        ..PolicyParams::default()
    };
    assert!(validate_params(&params).is_err());
}
