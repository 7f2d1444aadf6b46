// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_best_hand -- --pool-size 9
// ```
use clap::{Parser, value_parser};
use log::info;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Number of cards in each pool.
    #[clap(long, short, default_value_t = 7, value_parser = value_parser!(u8).range(5..=20))]
    pool_size: u8,
    /// Number of random pools.
    #[clap(long, short, default_value_t = 10_000)]
    num_pools: usize,
}

fn main() -> Result<(), EvalError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    info!(
        "Evaluating {} pools of {} cards with {} tasks",
        cli.num_pools, cli.pool_size, cli.tasks
    );

    let mut rng = rand::rng();
    let mut counts = [0usize; 11];
    let now = Instant::now();

    for _ in 0..cli.num_pools {
        let cards = Deck::new_and_shuffled(&mut rng).deal_many(cli.pool_size as usize);
        if let Some(best) = select::par_best_hand(&cards, cli.tasks as usize)? {
            counts[best.value().rank().code() as usize] += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Pools/sec:       {:.0}\n", cli.num_pools as f64 / elapsed);

    for rank in HandRank::ranks().rev() {
        let freq = counts[rank.code() as usize] as f64 / cli.num_pools as f64;
        let name = format!("{}:", rank.name());
        println!("{name:<17}{:.4}%", freq * 100.0);
    }

    Ok(())
}
