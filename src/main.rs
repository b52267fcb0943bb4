//! Tâb self-play runner
//!
//! Plays AI-vs-AI games and reports the tally.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use tab::config::MatchConfig;
use tab::selfplay::play_match;
use tab::{Difficulty, Side, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstSide {
    A,
    B,
}

impl From<FirstSide> for Side {
    fn from(side: FirstSide) -> Self {
        match side {
            FirstSide::A => Side::SideA,
            FirstSide::B => Side::SideB,
        }
    }
}

/// Play Tâb games between two AI players.
#[derive(Parser)]
#[command(name = "tab", about = "Play Tâb games between two AI players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tab.toml")]
    config: PathBuf,

    /// Override columns per lane
    #[arg(long)]
    columns: Option<usize>,

    /// Override number of games
    #[arg(long)]
    games: Option<u32>,

    /// Override the side that throws first
    #[arg(long, value_enum)]
    first: Option<FirstSide>,

    /// Override side A's difficulty
    #[arg(long, value_enum)]
    side_a: Option<Difficulty>,

    /// Override side B's difficulty
    #[arg(long, value_enum)]
    side_b: Option<Difficulty>,

    /// Override side A's strategy
    #[arg(long, value_enum)]
    strategy_a: Option<Strategy>,

    /// Override side B's strategy
    #[arg(long, value_enum)]
    strategy_b: Option<Strategy>,

    /// Override side A's search depth
    #[arg(long)]
    depth_a: Option<u8>,

    /// Override side B's search depth
    #[arg(long)]
    depth_b: Option<u8>,

    /// Override the throw cap per game
    #[arg(long)]
    max_throws: Option<u32>,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every move
    #[arg(long)]
    show: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut MatchConfig) {
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(first) = self.first {
            config.first = first.into();
        }
        if let Some(max_throws) = self.max_throws {
            config.max_throws = max_throws;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        let overrides = [
            (&mut config.side_a, self.side_a, self.strategy_a, self.depth_a),
            (&mut config.side_b, self.side_b, self.strategy_b, self.depth_b),
        ];
        for (player, difficulty, strategy, depth) in overrides {
            if difficulty.is_some() {
                *player = tab::PlayerConfig {
                    difficulty,
                    ..Default::default()
                };
            }
            if strategy.is_some() {
                player.strategy = strategy;
            }
            if depth.is_some() {
                player.depth = depth;
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.print_config {
        print!("{}", MatchConfig::default_toml()?);
        return Ok(());
    }

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid match settings")?;

    tracing::info!(
        columns = config.columns,
        games = config.games,
        side_a = ?config.side_a.ai(),
        side_b = ?config.side_b.ai(),
        "starting match"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let show = cli.show;
    let report = play_match(&config, &mut rng, |game, played| {
        if show {
            println!("{} ({})", played.mov.piece, played.mov.to);
            println!("{}", game.board());
        }
    })?;

    println!("Games:       {}", report.games.len());
    println!("Side A wins: {}", report.side_a_wins);
    println!("Side B wins: {}", report.side_b_wins);
    println!("Draws:       {}", report.draws);
    Ok(())
}
