pub mod effects;
pub mod model;
pub mod oracle;
pub mod policy;
pub mod stats;
pub mod tally;
pub mod types;

use crate::model::{BattleState, Side};
use crate::oracle::ReferenceOracle;
pub use crate::policy::select::{Action, BattleAi, Policy, RunAndBunAi};
pub use crate::policy::PolicyParams;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub snapshot_path: PathBuf,
    pub params_path: Option<PathBuf>,
    pub side: Side,
    pub seed: u64,
    pub trials: Option<usize>,
    pub output_path: Option<PathBuf>,
    pub weak_move_threshold: Option<i32>,
    pub switch_chance: Option<f64>,
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<BattleState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file at {}", path.display()))?;
    let parsed: BattleState = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    parsed
        .validate()
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;
    Ok(parsed)
}

pub fn load_params(path: &Path) -> anyhow::Result<PolicyParams> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read params file at {}", path.display()))?;
    let params: PolicyParams = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    validate_params(&params)?;
    Ok(params)
}

pub fn validate_params(params: &PolicyParams) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&params.switch_chance) {
        anyhow::bail!(
            "switch_chance must be within 0..=1, got {}",
            params.switch_chance
        );
    }
    Ok(())
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let state = load_snapshot(&opts.snapshot_path)?;
    let mut params = match &opts.params_path {
        Some(path) => load_params(path)?,
        None => PolicyParams::default(),
    };
    if let Some(threshold) = opts.weak_move_threshold {
        params.weak_move_threshold = threshold;
    }
    if let Some(p) = opts.switch_chance {
        params.switch_chance = p;
    }
    validate_params(&params)?;
    let policy = Policy::new(ReferenceOracle::default(), params);

    match opts.trials {
        Some(0) => anyhow::bail!("--trials must be > 0"),
        Some(trials) => {
            let tally = tally::tally_decisions(&policy, &state, opts.side, trials, opts.seed);
            match &opts.output_path {
                Some(path) => {
                    tally::write_csv(&tally, path)?;
                    println!(
                        "Wrote {} actions over {trials} trials to {}",
                        tally.counts.len(),
                        path.display()
                    );
                }
                None => {
                    for (action, count) in &tally.counts {
                        println!("{action}\t{count}\t{:.4}", tally.share(action));
                    }
                }
            }
        }
        None => {
            let mut ai = RunAndBunAi::new(policy, opts.seed);
            let action = ai.choose_action(&state, opts.side);
            println!("{}", serde_json::to_string(&action)?);
        }
    }
    Ok(())
}
