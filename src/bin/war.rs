//! Command-line War simulator.
//!
//! Plays one complete game and narrates it on standard output.

use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use warsim::{EventSink, Game, GameEvent, GameOptions, Outcome, Termination};

/// Simulate a game of War to the end.
#[derive(Debug, Parser)]
#[command(name = "war", version, about)]
struct Args {
    /// Seed for the shuffle. Defaults to the current time; the seed used is
    /// always printed first.
    #[arg(long)]
    seed: Option<u64>,
    /// Rounds to play before hand sizes decide the game.
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
    round_limit: u32,
    /// Only print the seed and the final outcome.
    #[arg(short, long)]
    quiet: bool,
    /// Raise the log level (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Prints each event as a line of narration.
struct Narrator<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> Narrator<W> {
    fn line(&mut self, event: GameEvent) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            GameEvent::Dealt { player1, player2 } => writeln!(
                out,
                "Cards dealt: Player 1 has {player1} cards, Player 2 has {player2} cards."
            ),
            GameEvent::GameStarted => writeln!(out, "Starting game of War!"),
            GameEvent::RoundStarted { round } => writeln!(out, "\nRound {round}:"),
            GameEvent::CardPlayed { player, card } => writeln!(out, "{player} plays {card}"),
            GameEvent::RoundWon {
                player,
                player1,
                player2,
                ..
            } => {
                writeln!(out, "{player} wins the round!")?;
                writeln!(
                    out,
                    "Player 1 now has {player1} cards, Player 2 has {player2} cards."
                )
            }
            GameEvent::WarDeclared => writeln!(out, "WAR!"),
            GameEvent::NotEnoughCardsForWar { player } => {
                writeln!(out, "{player} doesn't have enough cards for war!")
            }
            GameEvent::CardsFaceDown { player, count } => {
                writeln!(out, "{player} puts down {count} cards face down")
            }
            GameEvent::OutOfCardsDuringWar { player: Some(player) } => {
                writeln!(out, "{player} ran out of cards during war!")
            }
            GameEvent::OutOfCardsDuringWar { player: None } => {
                writeln!(out, "Both players ran out of cards during war. It's a tie!")
            }
            GameEvent::WarCardPlayed { player, card } => {
                writeln!(out, "{player} plays {card} for war")
            }
            GameEvent::RoundLimitReached { limit } => writeln!(
                out,
                "Game terminated after {limit} rounds to prevent infinite loop."
            ),
            GameEvent::GameOver { outcome, rounds } => {
                writeln!(out, "\nGame over after {rounds} rounds!")?;
                match outcome {
                    Outcome::Winner(player) => writeln!(out, "{player} is the winner!"),
                    Outcome::Tie => writeln!(out, "The game ended in a tie!"),
                }
            }
        }
    }
}

impl<W: Write> EventSink for Narrator<W> {
    fn emit(&mut self, event: GameEvent) {
        if self.quiet && !matches!(event, GameEvent::GameOver { .. }) {
            return;
        }
        if let Err(err) = self.line(event) {
            log::warn!("failed to write event: {err}");
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let options = GameOptions::default().with_round_limit(args.round_limit);
    let mut narrator = Narrator {
        out: BufWriter::new(io::stdout().lock()),
        quiet: args.quiet,
    };
    // Printed even when quiet so any run can be replayed with --seed.
    if let Err(err) = writeln!(narrator.out, "Shuffling with seed {seed}.") {
        log::warn!("failed to write seed: {err}");
    }

    let mut game = Game::new(options, seed, narrator);
    let result = game.play_game();
    if result.termination == Termination::RoundLimit {
        log::info!(
            "round limit decided the game: {} vs {} cards",
            result.player1_cards,
            result.player2_cards
        );
    }

    if let Err(err) = game.sink_mut().out.flush() {
        log::warn!("failed to flush output: {err}");
    }
}
