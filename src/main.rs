use pokemon_battle_policy::model::Side;
use pokemon_battle_policy::{run, CliOptions};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: battle-ai --snapshot state.json [--side a|b] [--seed SEED] [--trials N] [--output tally.csv] \
[--params params.json] [--weak-threshold N] [--switch-chance P]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut snapshot_path = None;
    let mut params_path = None;
    let mut side = Side::A;
    let mut seed = 0u64;
    let mut trials = None;
    let mut output_path = None;
    let mut weak_move_threshold = None;
    let mut switch_chance = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--snapshot" => {
                snapshot_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--snapshot requires a path (e.g. --snapshot state.json)")
                })?);
            }
            "--params" => {
                params_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--params requires a path (e.g. --params params.json)")
                })?);
            }
            "--side" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--side requires a or b"))?;
                side = match val.to_ascii_lowercase().as_str() {
                    "a" => Side::A,
                    "b" => Side::B,
                    other => anyhow::bail!("Unknown side {other} (use a or b)"),
                };
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--trials" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--trials requires a number"))?;
                trials = Some(val.parse()?);
            }
            "--output" => {
                output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output tally.csv)")
                })?);
            }
            "--weak-threshold" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--weak-threshold requires an integer"))?;
                weak_move_threshold = Some(val.parse()?);
            }
            "--switch-chance" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--switch-chance requires a probability"))?;
                switch_chance = Some(val.parse()?);
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    let snapshot_path = snapshot_path.ok_or_else(|| anyhow::anyhow!("--snapshot is required"))?;
    if output_path.is_some() && trials.is_none() {
        anyhow::bail!("--output only applies together with --trials");
    }

    Ok(CliOptions {
        snapshot_path,
        params_path,
        side,
        seed,
        trials,
        output_path,
        weak_move_threshold,
        switch_chance,
    })
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;
    let opts = parse_args()?;
    run(opts)
}
