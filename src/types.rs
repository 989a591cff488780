use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PokeType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokeType {
    pub const ALL: [PokeType; 18] = [
        PokeType::Normal,
        PokeType::Fire,
        PokeType::Water,
        PokeType::Electric,
        PokeType::Grass,
        PokeType::Ice,
        PokeType::Fighting,
        PokeType::Poison,
        PokeType::Ground,
        PokeType::Flying,
        PokeType::Psychic,
        PokeType::Bug,
        PokeType::Rock,
        PokeType::Ghost,
        PokeType::Dragon,
        PokeType::Dark,
        PokeType::Steel,
        PokeType::Fairy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PokeType::Normal => "normal",
            PokeType::Fire => "fire",
            PokeType::Water => "water",
            PokeType::Electric => "electric",
            PokeType::Grass => "grass",
            PokeType::Ice => "ice",
            PokeType::Fighting => "fighting",
            PokeType::Poison => "poison",
            PokeType::Ground => "ground",
            PokeType::Flying => "flying",
            PokeType::Psychic => "psychic",
            PokeType::Bug => "bug",
            PokeType::Rock => "rock",
            PokeType::Ghost => "ghost",
            PokeType::Dragon => "dragon",
            PokeType::Dark => "dark",
            PokeType::Steel => "steel",
            PokeType::Fairy => "fairy",
        }
    }

    pub fn from_name(name: &str) -> Option<PokeType> {
        PokeType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl TryFrom<String> for PokeType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PokeType::from_name(&value).ok_or_else(|| format!("unknown type {value:?}"))
    }
}

impl fmt::Display for PokeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Ref: pokemon-showdown/sim/dex-data.ts: type chart multipliers (trimmed to multipliers only).
pub fn type_effectiveness(move_type: PokeType, target_types: &[PokeType]) -> f32 {
    target_types
        .iter()
        .map(|&t| single_type_effectiveness(move_type, t))
        .product()
}

fn single_type_effectiveness(attacking: PokeType, defending: PokeType) -> f32 {
    use PokeType::*;
    match attacking {
        Normal => match defending {
            Rock | Steel => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => 0.5,
            Grass | Ice | Bug | Steel => 2.0,
            _ => 1.0,
        },
        Water => match defending {
            Water | Grass | Dragon => 0.5,
            Fire | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Electric => match defending {
            Electric | Grass | Dragon => 0.5,
            Water | Flying => 2.0,
            Ground => 0.0,
            _ => 1.0,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => 0.5,
            Water | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Ice => match defending {
            Fire | Water | Ice | Steel => 0.5,
            Grass | Ground | Flying | Dragon => 2.0,
            _ => 1.0,
        },
        Fighting => match defending {
            Normal | Ice | Rock | Dark | Steel => 2.0,
            Poison | Flying | Psychic | Bug | Fairy => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Poison => match defending {
            Grass | Fairy => 2.0,
            Poison | Ground | Rock | Ghost => 0.5,
            Steel => 0.0,
            _ => 1.0,
        },
        Ground => match defending {
            Fire | Electric | Poison | Rock | Steel => 2.0,
            Grass | Bug => 0.5,
            Flying => 0.0,
            _ => 1.0,
        },
        Flying => match defending {
            Grass | Fighting | Bug => 2.0,
            Electric | Rock | Steel => 0.5,
            _ => 1.0,
        },
        Psychic => match defending {
            Fighting | Poison => 2.0,
            Psychic | Steel => 0.5,
            Dark => 0.0,
            _ => 1.0,
        },
        Bug => match defending {
            Grass | Psychic | Dark => 2.0,
            Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy => 0.5,
            _ => 1.0,
        },
        Rock => match defending {
            Fire | Ice | Flying | Bug => 2.0,
            Fighting | Ground | Steel => 0.5,
            _ => 1.0,
        },
        Ghost => match defending {
            Ghost | Psychic => 2.0,
            Dark => 0.5,
            Normal => 0.0,
            _ => 1.0,
        },
        Dragon => match defending {
            Dragon => 2.0,
            Steel => 0.5,
            Fairy => 0.0,
            _ => 1.0,
        },
        Dark => match defending {
            Psychic | Ghost => 2.0,
            Fighting | Dark | Fairy => 0.5,
            _ => 1.0,
        },
        Steel => match defending {
            Rock | Ice | Fairy => 2.0,
            Fire | Water | Electric | Steel => 0.5,
            _ => 1.0,
        },
        Fairy => match defending {
            Fighting | Dragon | Dark => 2.0,
            Fire | Poison | Steel => 0.5,
            _ => 1.0,
        },
    }
}
