use crate::model::{BattleState, Side};
use crate::oracle::DamageOracle;
use crate::policy::replay_rng;
use crate::policy::select::{Action, Policy};
use rayon::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub trials: usize,
    pub counts: BTreeMap<Action, u64>,
}

impl Tally {
    pub fn share(&self, action: &Action) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.counts.get(action).copied().unwrap_or(0) as f64 / self.trials as f64
    }
}

pub fn tally_decisions<O>(
    policy: &Policy<O>,
    state: &BattleState,
    side: Side,
    trials: usize,
    seed: u64,
) -> Tally
where
    O: DamageOracle + Sync,
{
    let actions: Vec<Action> = (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = replay_rng(mix_seed(seed, trial as u64));
            policy.choose_ai_action(side, side.opponent(), state, &mut rng)
        })
        .collect();

    let mut counts = BTreeMap::new();
    for action in actions {
        *counts.entry(action).or_insert(0u64) += 1;
    }
    Tally { trials, counts }
}

fn mix_seed(base: u64, trial: u64) -> u64 {
    let mut x = base ^ trial.wrapping_mul(0x9E3779B97F4A7C15);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ceb9fe1a85ec53);
    x ^ (x >> 33)
}

pub fn write_csv(tally: &Tally, path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::from("action,count,share");
    for (action, count) in &tally.counts {
        out.push('\n');
        out.push_str(&format!("{action},{count},{:.4}", tally.share(action)));
    }
    std::fs::write(path, out)?;
    Ok(())
}
