// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
//!
//! Classifies a cards pool or compares two pools that share board cards:
//!
//! ```bash
//! $ showdown eval "AS KS QS JS TS 2D 3C"
//! Royal Flush [TS, JS, QS, KS, AS]
//! $ showdown compare "AS AD" "KH KD" --board "KS 7C 2H 9D 4S"
//! Second wins: Three of a Kind [7C, 9D, KD, KH, KS]
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, error};
use std::cmp::Ordering;

use showdown_eval::{Card, EvalError, Hand, compare::compare_hands, parse_cards};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of tasks used to search the best hand.
    #[clap(long, short, global = true, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16))]
    tasks: u8,
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classifies the best five cards hand in a cards pool.
    Eval {
        /// The pool cards, i.e. "AS KD 10C 9h".
        cards: String,
    },
    /// Compares two hands.
    Compare {
        /// The first hand cards.
        first: String,
        /// The second hand cards.
        second: String,
        /// Board cards shared by both hands.
        #[clap(long, short)]
        board: Option<String>,
    },
}

/// Evaluation configuration.
#[derive(Debug, Clone, Copy)]
struct Config {
    /// Number of best hand search tasks.
    tasks: usize,
}

impl Config {
    fn hand(&self, cards: Vec<Card>) -> Result<Hand> {
        let hand = if self.tasks > 1 {
            Hand::par_new(cards, self.tasks)?
        } else {
            Hand::new(cards)?
        };

        debug!("Evaluated {:?} as {hand}", hand.cards());
        Ok(hand)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        tasks: cli.tasks as usize,
    };

    match cli.command {
        Command::Eval { cards } => {
            let hand = config.hand(parse_cards(&cards)?)?;
            if !hand.is_classified() {
                return Err(EvalError::IncompleteHand(hand.len()).into());
            }

            println!("{hand}");
        }
        Command::Compare {
            first,
            second,
            board,
        } => {
            let board = match board {
                Some(board) => parse_cards(&board)?,
                None => Vec::new(),
            };

            let first = config.hand([parse_cards(&first)?, board.clone()].concat())?;
            let second = config.hand([parse_cards(&second)?, board].concat())?;

            match compare_hands(&first, &second)? {
                Ordering::Greater => println!("First wins: {first}"),
                Ordering::Less => println!("Second wins: {second}"),
                Ordering::Equal => println!("Tie: {first} | {second}"),
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = Cli::try_parse_from(["showdown", "-t", "4", "eval", "AS KS QS JS TS"]).unwrap();
        assert_eq!(cli.tasks, 4);
        assert!(matches!(cli.command, Command::Eval { .. }));

        let cli = Cli::try_parse_from([
            "showdown", "compare", "AS AD", "KH KD", "--board", "KS 7C 2H", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Compare { board: Some(_), .. }));

        assert!(Cli::try_parse_from(["showdown", "-t", "0", "eval", "AS"]).is_err());
    }

    #[test]
    fn config_hand() {
        let cards = parse_cards("AS KS QS JS TS 2D 3C").unwrap();
        let seq = Config { tasks: 1 }.hand(cards.clone()).unwrap();
        let par = Config { tasks: 4 }.hand(cards).unwrap();
        assert_eq!(seq.to_string(), "Royal Flush [TS, JS, QS, KS, AS]");
        assert_eq!(par.to_string(), seq.to_string());
    }

    #[test]
    fn run_errors() {
        let cli = Cli::try_parse_from(["showdown", "eval", "AS KS"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvalError>(),
            Some(&EvalError::IncompleteHand(2))
        );
        assert_eq!(err.to_string(), "hand has 2 cards, at least 5 are needed");

        let cli = Cli::try_parse_from(["showdown", "compare", "AS", "KS"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvalError>(),
            Some(&EvalError::IncomparableOperands)
        );

        let cli = Cli::try_parse_from(["showdown", "eval", "AS AS KD QC JH"]).unwrap();
        assert!(run(cli).is_err());
    }
}
