// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all
// ...
// Total rolls      7776
//
// Highest value:   480
// One pair:        3600
// Two pair:        1800
// Three of a kind: 1200
// Straight:        240
// Full house:      300
// Four of a kind:  150
// Five of a kind:  6
// ```

use ahash::AHashMap;

use pokerdice_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 6^5 rolls.
    let mut counts = AHashMap::<&'static str, usize>::default();

    Hand::for_each(|faces| {
        let rank = HandRank::eval(faces);
        *counts.entry(rank.name()).or_default() += 1;
    });

    let total = counts.values().sum::<usize>();
    println!("Total rolls      {total}\n");

    let count = |name: &str| counts.get(name).copied().unwrap_or_default();
    println!("Highest value:   {}", count("Highest value"));
    println!("One pair:        {}", count("One pair"));
    println!("Two pair:        {}", count("Two pair"));
    println!("Three of a kind: {}", count("Three of a kind"));
    println!("Straight:        {}", count("Straight"));
    println!("Full house:      {}", count("Full house"));
    println!("Four of a kind:  {}", count("Four of a kind"));
    println!("Five of a kind:  {}", count("Five of a kind"));
}
