// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all_hands
// ...
// Total hands      2598960
//
// Royal Flush:     4
// Straight Flush:  36
// Four of a Kind:  624
// Full House:      3744
// Flush:           5108
// Straight:        10200
// Three of a Kind: 54912
// Two Pair:        123552
// One Pair:        1098240
// High Card:       1302540
// ```

use std::time::Instant;

use handdrill_eval::*;

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().for_each(5, |hand| {
        if let Ok(value) = classify(hand) {
            counts[value.category() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories().rev() {
        let label = format!("{}:", category.name());
        println!("{label:<17}{}", counts[category as usize]);
    }
}
