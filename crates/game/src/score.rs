// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Score keeping.
use log::info;

use handdrill_eval::{HandCategory, PointsTable};

/// The maximum streak bonus multiplier.
const MAX_STREAK_BONUS: f64 = 3.0;

/// The streak bonus increment for each correct guess in a row.
const STREAK_BONUS_STEP: f64 = 0.1;

/// The result of a guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    /// Whether the guess was right.
    pub correct: bool,
    /// The points awarded, streak bonus included.
    pub points: u32,
    /// The streak bonus multiplier applied.
    pub bonus: f64,
    /// The category the user picked.
    pub guess: HandCategory,
    /// The hand actual category.
    pub actual: HandCategory,
    /// Whether the guess raised the high score.
    pub new_high_score: bool,
}

impl GuessOutcome {
    /// A feedback message for the user.
    pub fn message(&self, points: &PointsTable) -> String {
        if self.correct {
            let mut msg = format!("Correct! {}", self.actual);
            if self.bonus > 1.0 {
                let base = points.points_for(self.actual) as f64;
                let bonus_points = base * (self.bonus - 1.0);
                msg.push_str(&format!(
                    "\nStreak Bonus: {bonus_points:.0} ({:.1}x)",
                    self.bonus
                ));
            }

            msg
        } else {
            format!(
                "Incorrect! You guessed {}, but it was {}",
                self.guess, self.actual
            )
        }
    }
}

/// Keeps the score, the streak of correct guesses, and the high score.
#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper {
    score: u32,
    streak: u32,
    high_score: u32,
}

impl ScoreKeeper {
    /// Creates a score keeper starting from a previous high score.
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            streak: 0,
            high_score,
        }
    }

    /// Scores a guess against the hand actual category.
    ///
    /// A correct guess extends the streak and awards the category points
    /// multiplied by the streak bonus, a wrong guess resets the streak.
    pub fn evaluate_guess(
        &mut self,
        guess: HandCategory,
        actual: HandCategory,
        points: &PointsTable,
    ) -> GuessOutcome {
        if guess == actual {
            self.streak += 1;
            let bonus = self.streak_bonus();
            let awarded = (points.points_for(actual) as f64 * bonus).round() as u32;
            let new_high_score = self.add_points(awarded);

            GuessOutcome {
                correct: true,
                points: awarded,
                bonus,
                guess,
                actual,
                new_high_score,
            }
        } else {
            self.streak = 0;

            GuessOutcome {
                correct: false,
                points: 0,
                bonus: 1.0,
                guess,
                actual,
                new_high_score: false,
            }
        }
    }

    /// The current streak bonus multiplier.
    pub fn streak_bonus(&self) -> f64 {
        (1.0 + self.streak as f64 * STREAK_BONUS_STEP).min(MAX_STREAK_BONUS)
    }

    /// Adds points to the score, returns true if the high score went up.
    fn add_points(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score <= self.high_score {
            return false;
        }

        if self.high_score > 0 {
            info!("New high score {}", self.score);
        }

        self.high_score = self.score;
        true
    }

    /// The current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The current streak of correct guesses.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// The high score.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Resets score and streak, the high score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.streak = 0;
    }
}
