// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io::{self, BufRead, Write};

use handdrill_eval::{Card, HandCategory, Suit};
use handdrill_game::{Config, Session};

/// Runs a training round on stdin and stdout.
pub fn run(config: Config) -> Result<()> {
    let mut session = Session::new(config)?;
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    print_intro(&mut stdout, &session)?;

    'round: while !session.is_over() {
        let hand = session.deal()?;
        print_hand(&mut stdout, hand.cards())?;

        // Ask until we get a category or the user quits.
        let guess = loop {
            print_prompt(&mut stdout, &session)?;

            let Some(line) = lines.next() else {
                break 'round;
            };

            let line = line?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                break 'round;
            }

            match input.parse::<HandCategory>() {
                Ok(category) => break category,
                Err(e) => println!("{e}"),
            }
        };

        if session.is_over() {
            println!("Time is up!");
            break;
        }

        let outcome = session.guess(guess)?;
        let msg = session.message(&outcome);
        if outcome.correct {
            queue!(stdout, style::PrintStyledContent(msg.as_str().green()))?;
        } else {
            queue!(stdout, style::PrintStyledContent(msg.as_str().red()))?;
        }

        writeln!(stdout)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    let stats = session.stats().clone();
    let high_score = session.scores().high_score();
    let score = session.finish()?;

    writeln!(stdout, "Final score: {score}  High score: {high_score}")?;
    for (category, count, pct) in stats.distribution() {
        writeln!(stdout, "  {:<16}{count:>4} {pct:>5.1}%", category.name())?;
    }

    Ok(())
}

/// Formats cards with suit symbols.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank(), c.suit().symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_intro(w: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(w, "Mode: {}", session.mode())?;
    match session.time_left() {
        Some(t) => writeln!(w, "You have {} seconds.", t.as_secs())?,
        None => writeln!(w, "No time limit, enter q to quit.")?,
    }

    writeln!(w, "Name each hand, by name or number:")?;
    for category in HandCategory::categories().rev() {
        writeln!(w, "  {:>2} {}", category.position(), category.id())?;
    }

    writeln!(w)?;
    Ok(())
}

fn print_hand(w: &mut impl Write, cards: &[Card]) -> Result<()> {
    for card in cards {
        let text = format!("{}{} ", card.rank(), card.suit().symbol());
        let styled = match card.suit() {
            Suit::Hearts | Suit::Diamonds => text.as_str().red().bold(),
            Suit::Clubs | Suit::Spades => text.as_str().bold(),
        };

        queue!(w, style::PrintStyledContent(styled))?;
    }

    writeln!(w)?;
    w.flush()?;
    Ok(())
}

fn print_prompt(w: &mut impl Write, session: &Session) -> Result<()> {
    let scores = session.scores();
    match session.time_left() {
        Some(t) => write!(
            w,
            "[{:>3}s score {} streak {}] > ",
            t.as_secs(),
            scores.score(),
            scores.streak()
        )?,
        None => write!(w, "[score {} streak {}] > ", scores.score(), scores.streak())?,
    }

    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use handdrill_eval::{Rank, Suit};

    #[test]
    fn cards_symbols() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Hearts),
        ];
        assert_eq!(format_cards(&cards), "A♠ T♥");
    }
}
