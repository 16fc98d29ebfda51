// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Generates hands for a complexity level and prints the categories
// distribution:
//
// ```bash
// $ cargo r --example generate -- --level 1 --hands 10000
// ```
use anyhow::Result;
use clap::{Parser, value_parser};

use handdrill_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The complexity level.
    #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(1..=4))]
    level: u8,
    /// The number of hands to generate.
    #[clap(long, default_value_t = 10_000)]
    hands: usize,
    /// Print the first hands.
    #[clap(long, default_value_t = 0)]
    show: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = rand::rng();
    let mut generator = HandGenerator::new(WeightTable::for_complexity(cli.level)?);

    for idx in 0..cli.hands {
        let hand = generator.generate(&mut rng)?;
        if idx < cli.show {
            println!("{hand}  {}", hand.value());
        }
    }

    println!("Level {} hands {}\n", cli.level, generator.stats().total());
    for (category, count, pct) in generator.stats().distribution() {
        let label = format!("{}:", category.name());
        println!("{label:<17}{count:>8} {pct:>6.2}%");
    }

    Ok(())
}
