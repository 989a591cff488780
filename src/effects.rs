use crate::model::MoveCategory;
use phf::{phf_map, phf_set};

pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetupRole {
    Offensive,
    Defensive { both_defenses: bool },
    /// Boosts offense and the defense against `guards`-category attacks.
    Mixed { guards: MoveCategory },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Setup {
    pub role: SetupRole,
    pub vetoable: bool,
    pub ignores_unaware: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MoveEffect {
    // Status families.
    Recovery,
    SunRecovery,
    Rest,
    Sleep,
    Paralysis,
    Burn,
    Poison,
    Protect,
    StealthRock,
    Spikes,
    ToxicSpikes,
    StickyWeb,
    Substitute,
    Tailwind,
    TrickRoom,
    SpeedBoost,
    FakeOut,
    Terrain,
    Screen(MoveCategory),
    Support,
    ItemSwap,
    Imprison,
    BatonPass,
    Coaching,
    FocusEnergy,
    DestinyBond,
    Memento,
    FinalGambit,
    Counter(MoveCategory),
    SpecialBoost,
    ShellSmash,
    BellyDrum,
    Taunt,
    Encore,
    Setup(Setup),
    // Damaging families.
    Trapping,
    SpeedDrop,
    AttackDrop(MoveCategory),
    SpDefDrop,
    FutureSight,
    RelicSong,
    SuckerPunch,
    Pursuit,
    FellStinger,
    Rollout,
    TwoTurn,
    Explosion,
    #[default]
    None,
}

impl MoveEffect {
    pub fn of(id: &str) -> MoveEffect {
        MOVE_EFFECTS.get(id).copied().unwrap_or(MoveEffect::None)
    }

    pub fn excluded_from_high_roll(self) -> bool {
        matches!(
            self,
            MoveEffect::Explosion
                | MoveEffect::FinalGambit
                | MoveEffect::RelicSong
                | MoveEffect::Rollout
                | MoveEffect::TwoTurn
                | MoveEffect::FutureSight
                | MoveEffect::Trapping
        )
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MoveTraits {
    pub high_crit: bool,
    pub sound: bool,
    pub flinch: bool,
}

impl MoveTraits {
    pub fn of(id: &str) -> MoveTraits {
        MoveTraits {
            high_crit: HIGH_CRIT_MOVES.contains(id),
            sound: SOUND_MOVES.contains(id),
            flinch: FLINCH_MOVES.contains(id),
        }
    }
}

const fn offensive(vetoable: bool, ignores_unaware: bool) -> MoveEffect {
    MoveEffect::Setup(Setup {
        role: SetupRole::Offensive,
        vetoable,
        ignores_unaware,
    })
}

const fn defensive(vetoable: bool, both_defenses: bool) -> MoveEffect {
    MoveEffect::Setup(Setup {
        role: SetupRole::Defensive { both_defenses },
        vetoable,
        ignores_unaware: false,
    })
}

const fn mixed(guards: MoveCategory) -> MoveEffect {
    MoveEffect::Setup(Setup {
        role: SetupRole::Mixed { guards },
        vetoable: true,
        ignores_unaware: false,
    })
}

static MOVE_EFFECTS: phf::Map<&'static str, MoveEffect> = phf_map! {
    "recover" => MoveEffect::Recovery,
    "slackoff" => MoveEffect::Recovery,
    "healorder" => MoveEffect::Recovery,
    "softboiled" => MoveEffect::Recovery,
    "roost" => MoveEffect::Recovery,
    "milkdrink" => MoveEffect::Recovery,
    "shoreup" => MoveEffect::Recovery,
    "morningsun" => MoveEffect::SunRecovery,
    "synthesis" => MoveEffect::SunRecovery,
    "moonlight" => MoveEffect::SunRecovery,
    "rest" => MoveEffect::Rest,

    "yawn" => MoveEffect::Sleep,
    "darkvoid" => MoveEffect::Sleep,
    "grasswhistle" => MoveEffect::Sleep,
    "sing" => MoveEffect::Sleep,
    "sleeppowder" => MoveEffect::Sleep,
    "spore" => MoveEffect::Sleep,
    "hypnosis" => MoveEffect::Sleep,
    "thunderwave" => MoveEffect::Paralysis,
    "stunspore" => MoveEffect::Paralysis,
    "glare" => MoveEffect::Paralysis,
    "nuzzle" => MoveEffect::Paralysis,
    "zapcannon" => MoveEffect::Paralysis,
    "willowisp" => MoveEffect::Burn,
    "toxic" => MoveEffect::Poison,
    "poisonpowder" => MoveEffect::Poison,
    "poisongas" => MoveEffect::Poison,
    "toxicthread" => MoveEffect::Poison,

    "protect" => MoveEffect::Protect,
    "detect" => MoveEffect::Protect,
    "kingsshield" => MoveEffect::Protect,

    "stealthrock" => MoveEffect::StealthRock,
    "spikes" => MoveEffect::Spikes,
    "toxicspikes" => MoveEffect::ToxicSpikes,
    "stickyweb" => MoveEffect::StickyWeb,

    "substitute" => MoveEffect::Substitute,
    "tailwind" => MoveEffect::Tailwind,
    "trickroom" => MoveEffect::TrickRoom,
    "agility" => MoveEffect::SpeedBoost,
    "rockpolish" => MoveEffect::SpeedBoost,
    "autotomize" => MoveEffect::SpeedBoost,
    "fakeout" => MoveEffect::FakeOut,

    "electricterrain" => MoveEffect::Terrain,
    "psychicterrain" => MoveEffect::Terrain,
    "grassyterrain" => MoveEffect::Terrain,
    "mistyterrain" => MoveEffect::Terrain,
    "reflect" => MoveEffect::Screen(MoveCategory::Physical),
    "lightscreen" => MoveEffect::Screen(MoveCategory::Special),
    "helpinghand" => MoveEffect::Support,
    "followme" => MoveEffect::Support,
    "trick" => MoveEffect::ItemSwap,
    "switcheroo" => MoveEffect::ItemSwap,
    "imprison" => MoveEffect::Imprison,
    "batonpass" => MoveEffect::BatonPass,
    "coaching" => MoveEffect::Coaching,
    "focusenergy" => MoveEffect::FocusEnergy,
    "laserfocus" => MoveEffect::FocusEnergy,
    "destinybond" => MoveEffect::DestinyBond,
    "memento" => MoveEffect::Memento,
    "finalgambit" => MoveEffect::FinalGambit,
    "counter" => MoveEffect::Counter(MoveCategory::Physical),
    "mirrorcoat" => MoveEffect::Counter(MoveCategory::Special),
    "taunt" => MoveEffect::Taunt,
    "encore" => MoveEffect::Encore,

    "tailglow" => MoveEffect::SpecialBoost,
    "nastyplot" => MoveEffect::SpecialBoost,
    "workup" => MoveEffect::SpecialBoost,
    "shellsmash" => MoveEffect::ShellSmash,
    "bellydrum" => MoveEffect::BellyDrum,
    "swordsdance" => offensive(true, true),
    "howl" => offensive(true, true),
    "poweruppunch" => offensive(true, true),
    "dragondance" => offensive(true, false),
    "shiftgear" => offensive(true, false),
    "honeclaws" => offensive(true, false),
    "growth" => offensive(true, false),
    "curse" => offensive(true, false),
    "chargebeam" => offensive(true, false),
    "sharpen" => offensive(false, false),
    "meditate" => offensive(false, false),
    "stuffcheeks" => defensive(true, false),
    "barrier" => defensive(true, false),
    "acidarmor" => defensive(true, false),
    "irondefense" => defensive(true, false),
    "cottonguard" => defensive(true, false),
    "cosmicpower" => defensive(true, true),
    "harden" => defensive(false, false),
    "stockpile" => defensive(false, true),
    "bulkup" => mixed(MoveCategory::Physical),
    "coil" => mixed(MoveCategory::Physical),
    "noretreat" => mixed(MoveCategory::Physical),
    "calmmind" => mixed(MoveCategory::Special),
    "quiverdance" => mixed(MoveCategory::Special),

    "firespin" => MoveEffect::Trapping,
    "clamp" => MoveEffect::Trapping,
    "whirlpool" => MoveEffect::Trapping,
    "bind" => MoveEffect::Trapping,
    "wrap" => MoveEffect::Trapping,
    "sandtomb" => MoveEffect::Trapping,
    "magmastorm" => MoveEffect::Trapping,
    "infestation" => MoveEffect::Trapping,
    "snaptrap" => MoveEffect::Trapping,
    "thundercage" => MoveEffect::Trapping,
    "icywind" => MoveEffect::SpeedDrop,
    "electroweb" => MoveEffect::SpeedDrop,
    "rocktomb" => MoveEffect::SpeedDrop,
    "mudshot" => MoveEffect::SpeedDrop,
    "lowsweep" => MoveEffect::SpeedDrop,
    "tropkick" => MoveEffect::AttackDrop(MoveCategory::Physical),
    "lunge" => MoveEffect::AttackDrop(MoveCategory::Physical),
    "breakingswipe" => MoveEffect::AttackDrop(MoveCategory::Physical),
    "chillingwater" => MoveEffect::AttackDrop(MoveCategory::Special),
    "spiritbreak" => MoveEffect::AttackDrop(MoveCategory::Special),
    "skittersmack" => MoveEffect::AttackDrop(MoveCategory::Special),
    "appleacid" => MoveEffect::AttackDrop(MoveCategory::Special),
    "acidspray" => MoveEffect::SpDefDrop,
    "futuresight" => MoveEffect::FutureSight,
    "relicsong" => MoveEffect::RelicSong,
    "suckerpunch" => MoveEffect::SuckerPunch,
    "pursuit" => MoveEffect::Pursuit,
    "fellstinger" => MoveEffect::FellStinger,
    "rollout" => MoveEffect::Rollout,
    "meteorbeam" => MoveEffect::TwoTurn,
    "explosion" => MoveEffect::Explosion,
    "selfdestruct" => MoveEffect::Explosion,
    "mistyexplosion" => MoveEffect::Explosion,
};

static HIGH_CRIT_MOVES: phf::Set<&'static str> = phf_set! {
    "slash", "nightslash", "shadowclaw", "crosschop", "poisontail", "leafblade",
    "drillrun", "stoneedge", "psychocut", "karatechop", "razorleaf", "crabhammer",
    "blazekick", "aircutter", "skyattack", "snipershot",
};

static FLINCH_MOVES: phf::Set<&'static str> = phf_set! {
    "airslash", "bite", "crunch", "darkpulse", "fakeout", "ironhead", "rockslide",
    "waterfall", "zenheadbutt", "iciclecrash", "stomp", "headbutt",
};

static SOUND_MOVES: phf::Set<&'static str> = phf_set! {
    "boomburst", "bugbuzz", "chatter", "clangingscales", "clangoroussoul",
    "disarmingvoice", "echoedvoice", "hypervoice", "metalsound", "overdrive",
    "relicsong", "round", "snarl", "sparklingaria", "uproar",
};

// Ability and item groupings, keyed by display name.

pub static KILL_BOOST_ABILITIES: phf::Set<&'static str> =
    phf_set! { "Moxie", "Beast Boost", "Chilling Neigh", "Grim Neigh" };

pub static SLEEP_IMMUNE_ABILITIES: phf::Set<&'static str> = phf_set! {
    "Insomnia", "Vital Spirit", "Comatose", "Sweet Veil", "Purifying Salt",
};

pub static POISON_IMMUNE_ABILITIES: phf::Set<&'static str> =
    phf_set! { "Immunity", "Leaf Guard", "Pastel Veil", "Purifying Salt" };

pub static STAT_DROP_BLOCKING_ABILITIES: phf::Set<&'static str> =
    phf_set! { "Contrary", "Clear Body", "White Smoke" };

pub static SLEEP_CURE_ABILITIES: phf::Set<&'static str> =
    phf_set! { "Shed Skin", "Early Bird", "Hydration" };

pub static SLEEP_CURE_ITEMS: phf::Set<&'static str> = phf_set! { "Lum Berry", "Chesto Berry" };

pub static CRIT_BOOST_ITEMS: phf::Set<&'static str> = phf_set! { "Scope Lens", "Razor Claw" };

pub static CRIT_BOOST_ABILITIES: phf::Set<&'static str> = phf_set! { "Super Luck", "Sniper" };
