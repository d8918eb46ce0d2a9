//! Play Connect Four against the minimax engine.
//!
//! Reads columns from stdin, prints the board after every move. Logging goes
//! to stderr and is controlled by `RUST_LOG` (default `info`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use connect4_cli::{
    Command, Config, FirstMove, GameSession, GameStatus, SessionError, parse_command,
};
use connect4_core::Piece;
use minimax_engine::MinimaxEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "connect4")]
#[command(about = "Play Connect Four against a minimax engine", long_about = None)]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(short, long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Search depth in plies, overrides the config file
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
    depth: Option<u8>,

    /// Who moves first, overrides the config file
    #[arg(short, long, value_enum)]
    first: Option<FirstMove>,

    /// Seed for the first-move coin flip and the engine's tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;
        if let Some(depth) = self.depth {
            config.difficulty = depth;
        }
        if let Some(first) = self.first {
            config.first_move = first;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", Config::default_toml()?);
        return Ok(());
    }

    let config = cli.config()?;
    let (mut rng, mut engine) = match config.seed {
        Some(seed) => (StdRng::seed_from_u64(seed), MinimaxEngine::with_seed(seed)),
        None => (StdRng::from_entropy(), MinimaxEngine::new()),
    };

    let first = config.first_move.resolve(&mut rng);
    tracing::info!(?first, difficulty = config.difficulty, "new game");
    play(GameSession::new(first), &mut engine, config.difficulty)
}

fn play(mut session: GameSession, engine: &mut MinimaxEngine, depth: u8) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    println!("{}", session.board());

    while let Some(to_move) = session.to_move() {
        match to_move {
            Piece::Ai => {
                println!("Thinking...");
                let col = session.play_ai(engine, depth)?;
                println!("AI plays column {col}\n");
                println!("{}", session.board());
            }
            Piece::Player => {
                print!("Your move (0-6, q to quit): ");
                out.flush()?;

                let Some(line) = lines.next() else {
                    tracing::info!("input closed, leaving game");
                    return Ok(());
                };
                match parse_command(&line?) {
                    Ok(Command::Quit) => {
                        println!("Bye.");
                        return Ok(());
                    }
                    Ok(Command::Column(col)) => match session.play_human(col) {
                        Ok(_) => println!("\n{}", session.board()),
                        Err(SessionError::Move(err)) => println!("Can't play there: {err}"),
                        Err(err) => return Err(err.into()),
                    },
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    match session.status() {
        GameStatus::Won(Piece::Player) => println!("You win! Congratulations."),
        GameStatus::Won(Piece::Ai) => println!("The AI wins. Better luck next time."),
        GameStatus::Draw => println!("The board is full. It's a draw."),
        GameStatus::InProgress { .. } => {}
    }
    Ok(())
}
