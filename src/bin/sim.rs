use battleship_advisor::{init_logging, play_out, AdvisorConfig, Referee, TargetingEngine};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SimReport {
    seed: u64,
    games: usize,
    mean_turns: f64,
    min_turns: usize,
    max_turns: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    if games == 0 {
        anyhow::bail!("at least one game is required");
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = AdvisorConfig::default();
    let mut turns = Vec::with_capacity(games);
    for _ in 0..games {
        let mut referee = Referee::random(&config, &mut rng)?;
        let mut engine = TargetingEngine::new(config.clone())?;
        turns.push(play_out(&mut engine, &mut referee, &mut rng)?);
    }

    let report = SimReport {
        seed,
        games,
        mean_turns: turns.iter().sum::<usize>() as f64 / games as f64,
        min_turns: turns.iter().copied().min().unwrap_or(0),
        max_turns: turns.iter().copied().max().unwrap_or(0),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
