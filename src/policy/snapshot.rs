use super::Duel;
use crate::oracle::DamageOracle;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveDamage {
    pub min: i32,
    pub max: i32,
    pub roll: i32,
    pub kills: bool,
    pub is_highest: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageSnapshot {
    entries: Vec<Option<MoveDamage>>,
}

impl DamageSnapshot {
    pub fn get(&self, slot: usize) -> Option<&MoveDamage> {
        self.entries.get(slot).and_then(Option::as_ref)
    }

    pub fn info(&self, slot: usize) -> MoveDamage {
        self.get(slot).copied().unwrap_or_default()
    }

    pub fn highest_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.filter(|e| e.is_highest).map(|_| slot))
    }

    fn insert(&mut self, slot: usize, info: MoveDamage) {
        if self.entries.len() <= slot {
            self.entries.resize(slot + 1, None);
        }
        self.entries[slot] = Some(info);
    }
}

pub fn build_damage_snapshot<O, R>(
    duel: &Duel<'_, O>,
    slots: Option<&[usize]>,
    rng: &mut R,
) -> DamageSnapshot
where
    O: DamageOracle + ?Sized,
    R: Rng,
{
    let moves = &duel.att().moves;
    let all: Vec<usize> = (0..moves.len()).collect();
    let slots = slots.unwrap_or(&all);
    let defender_hp = duel.def().current_hp;

    let mut snapshot = DamageSnapshot::default();
    let mut highest_roll = -1;
    let mut highest: Vec<usize> = Vec::new();

    for &slot in slots {
        let Some(mv) = moves.get(slot) else {
            continue;
        };
        if !mv.is_damaging() {
            continue;
        }
        let (min, max) = duel.bounds(mv);
        let roll = if max <= 0 {
            0
        } else {
            rng.gen_range(min.max(1).min(max)..=max)
        };
        snapshot.insert(
            slot,
            MoveDamage {
                min: min.max(0),
                max: max.max(0),
                roll,
                kills: max >= defender_hp,
                is_highest: false,
            },
        );
        log::trace!("{} rolls {roll} ({min}-{max})", mv.name);

        if mv.effect.excluded_from_high_roll() {
            continue;
        }
        if roll > highest_roll {
            highest_roll = roll;
            highest.clear();
            highest.push(slot);
        } else if roll == highest_roll {
            highest.push(slot);
        }
    }

    for slot in highest {
        if let Some(Some(entry)) = snapshot.entries.get_mut(slot) {
            entry.is_highest = true;
        }
    }
    snapshot
}
