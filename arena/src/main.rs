mod arena_config;
mod match_runner;

use clap::{Parser, ValueEnum};
use tictactoe_engine::tictactoe::BotType;
use tictactoe_engine::{SessionRng, log, logger};

use arena_config::{ArenaOverrides, get_config_manager};
use match_runner::{MatchSettings, run_tournament};

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Minimax,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Random => BotType::Random,
            BotArg::Minimax => BotType::Minimax,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_arena")]
struct Args {
    /// YAML config file; defaults to tictactoe_arena_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    cross: Option<BotArg>,
    #[arg(long, value_enum)]
    circle: Option<BotArg>,
    #[arg(long)]
    workers: Option<usize>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref())
        .get_config()?
        .with_overrides(ArenaOverrides {
            games: args.games,
            cross: args.cross.map(BotType::from),
            circle: args.circle.map(BotType::from),
            workers: args.workers,
            seed: args.seed,
        })?;

    let settings = MatchSettings {
        cross: config.cross,
        circle: config.circle,
    };
    let games = config.games;
    let workers = config.workers;
    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Playing {} games, cross: {}, circle: {}, {} workers, seed {}",
        games,
        settings.cross,
        settings.circle,
        workers,
        rng.seed()
    );

    let tally = run_tournament(settings, games, workers, &rng).await?;

    log!(
        "Finished {} games: cross won {}, circle won {}, {} draws",
        tally.games(),
        tally.cross_wins,
        tally.circle_wins,
        tally.draws
    );

    Ok(())
}
