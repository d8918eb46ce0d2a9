//! Tournament CLI
//!
//! Run matches between Connect Four engines and report the results.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tournament::{ENGINE_NAMES, TournamentConfig, TournamentResults, create_engine, quick_match};
use tracing_subscriber::EnvFilter;

/// Connect Four tournament runner
#[derive(Parser, Debug)]
#[command(name = "tournament")]
#[command(about = "Play Connect Four engines against each other", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play two engines against each other (minimax, greedy, random)
    Match {
        engine1: String,
        engine2: String,
        #[command(flatten)]
        opts: MatchOpts,
    },

    /// Play one engine against every other engine
    Gauntlet {
        challenger: String,
        #[command(flatten)]
        opts: MatchOpts,
    },
}

#[derive(Args, Debug)]
struct MatchOpts {
    /// Games per match
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Search depth in plies
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    depth: u8,

    /// Seed for reproducible tie-breaks and random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Write the results as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl MatchOpts {
    fn tournament_config(&self) -> TournamentConfig {
        TournamentConfig {
            games_per_match: self.games,
            search_depth: self.depth,
            seed: self.seed,
        }
    }
}

fn play(
    results: &mut TournamentResults,
    opts: &MatchOpts,
    name1: &str,
    name2: &str,
) -> anyhow::Result<()> {
    let mut engine1 = create_engine(name1, opts.seed)?;
    // Offset the second seed so mirrored engines do not make identical choices
    let mut engine2 = create_engine(name2, opts.seed.map(|s| s.wrapping_add(1)))?;

    tracing::info!(
        engine1 = name1,
        engine2 = name2,
        games = opts.games,
        depth = opts.depth,
        "match started"
    );
    let result = quick_match(engine1.as_mut(), engine2.as_mut(), opts.games, opts.depth);
    tracing::info!(
        wins = result.wins,
        losses = result.losses,
        draws = result.draws,
        "match finished"
    );

    results.add_match(name1, name2, result);
    Ok(())
}

fn finish(results: &TournamentResults, output: Option<&PathBuf>) -> anyhow::Result<()> {
    results.print_report();
    if let Some(path) = output {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "results written");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Match {
            engine1,
            engine2,
            opts,
        } => {
            let mut results = TournamentResults::new(
                &format!("Match: {engine1} vs {engine2}"),
                vec![engine1.clone(), engine2.clone()],
                opts.tournament_config(),
            );
            play(&mut results, &opts, &engine1, &engine2)?;
            finish(&results, opts.output.as_ref())
        }
        Command::Gauntlet { challenger, opts } => {
            let opponents: Vec<&str> = ENGINE_NAMES
                .iter()
                .copied()
                .filter(|name| !name.eq_ignore_ascii_case(&challenger))
                .collect();

            let mut results = TournamentResults::new(
                &format!("Gauntlet: {challenger}"),
                std::iter::once(challenger.clone())
                    .chain(opponents.iter().map(|s| s.to_string()))
                    .collect(),
                opts.tournament_config(),
            );
            for opponent in opponents {
                play(&mut results, &opts, &challenger, opponent)?;
            }
            finish(&results, opts.output.as_ref())
        }
    }
}
