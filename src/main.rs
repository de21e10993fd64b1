use battleship_advisor::{
    init_logging, play_out,
    shell::{run_session, ShellOptions},
    AdjacencyRule, AdvisorConfig, Referee, TargetingEngine, BOARD_SIZE, DEFAULT_FLEET,
};

use clap::{Args, Parser};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct BoardArgs {
    #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of the square board")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Ship lengths, comma separated (default 1,1,1,1,2,2,2,3,3,4)"
    )]
    fleet: Vec<usize>,
    #[arg(long, help = "Ships may touch each other")]
    allow_touching: bool,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl BoardArgs {
    fn config(&self) -> AdvisorConfig {
        let fleet = if self.fleet.is_empty() {
            DEFAULT_FLEET.to_vec()
        } else {
            self.fleet.clone()
        };
        let adjacency = if self.allow_touching {
            AdjacencyRule::Touching
        } else {
            AdjacencyRule::NoTouch
        };
        AdvisorConfig::new(self.size, fleet).with_adjacency(adjacency)
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Get a recommendation each turn and type back what happened.
    Play {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, help = "Print the probability field before each recommendation")]
        show_field: bool,
    },
    /// Watch the advisor play against a randomly placed hidden fleet.
    Demo {
        #[command(flatten)]
        board: BoardArgs,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { board, show_field } => {
            let mut rng = board.rng();
            let mut engine = TargetingEngine::new(board.config())?;
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_session(
                &mut engine,
                &mut input,
                &mut output,
                &mut rng,
                ShellOptions { show_field },
            )?;
        }
        Commands::Demo { board } => {
            let mut rng = board.rng();
            let config = board.config();
            let mut referee = Referee::random(&config, &mut rng)?;
            let mut engine = TargetingEngine::new(config)?;
            let turns = play_out(&mut engine, &mut referee, &mut rng)?;
            println!("{}", engine.grid());
            println!("Game over!");
            println!("{} turns played.", turns);
        }
    }
    Ok(())
}
