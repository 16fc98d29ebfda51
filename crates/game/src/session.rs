// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A timed training round.
use anyhow::{Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::SmallRng};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use handdrill_eval::{GenerationStats, Hand, HandCategory, HandGenerator, PointsTable};

use crate::{GameMode, GuessOutcome, HighScoreStore, ScoreKeeper};

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The game mode.
    pub mode: GameMode,
    /// The points awarded for each category.
    pub points: PointsTable,
    /// Seed for reproducible deals, random if not set.
    pub seed: Option<u64>,
    /// The high score database, the score is not persisted if not set.
    pub db_path: Option<PathBuf>,
}

/// A training round: deals hands, scores guesses, and tracks the clock.
#[derive(Debug)]
pub struct Session {
    mode: GameMode,
    points: PointsTable,
    rng: SmallRng,
    generator: HandGenerator,
    scores: ScoreKeeper,
    store: Option<HighScoreStore>,
    hand: Option<Hand>,
    started: Instant,
    deadline: Option<Instant>,
}

impl Session {
    /// Starts a new round.
    pub fn new(config: Config) -> Result<Self> {
        let store = config.db_path.map(HighScoreStore::open).transpose()?;
        Self::with_store(config.mode, config.points, config.seed, store)
    }

    /// Starts a new round using the given store.
    pub fn with_store(
        mode: GameMode,
        points: PointsTable,
        seed: Option<u64>,
        store: Option<HighScoreStore>,
    ) -> Result<Self> {
        let high_score = match &store {
            Some(store) => store.load()?,
            None => 0,
        };

        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let started = Instant::now();
        info!("Starting {mode} round, high score {high_score}");

        Ok(Self {
            mode,
            points,
            rng,
            generator: HandGenerator::new(mode.weights()),
            scores: ScoreKeeper::new(high_score),
            store,
            hand: None,
            started,
            deadline: mode.duration().map(|d| started + d),
        })
    }

    /// Deals a new hand, replacing the current one.
    pub fn deal(&mut self) -> Result<Hand> {
        if self.is_over() {
            bail!("The round is over");
        }

        let hand = self.generator.generate(&mut self.rng)?;
        debug!("Dealt {hand} {}", hand.value());

        self.hand = Some(hand);
        Ok(hand)
    }

    /// The current hand.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Scores a guess for the current hand, the hand is consumed so that the
    /// next guess needs a new deal.
    ///
    /// A new high score is saved right away.
    pub fn guess(&mut self, guess: HandCategory) -> Result<GuessOutcome> {
        let Some(hand) = self.hand.take() else {
            bail!("No hand has been dealt");
        };

        let actual = hand.value().category();
        let outcome = self.scores.evaluate_guess(guess, actual, &self.points);
        debug!(
            "Guess {} for {hand} ({actual}) correct: {}",
            guess.id(),
            outcome.correct
        );

        if outcome.new_high_score {
            if let Some(store) = &self.store {
                store.save(self.scores.high_score())?;
            }
        }

        Ok(outcome)
    }

    /// Feedback message for a guess outcome.
    pub fn message(&self, outcome: &GuessOutcome) -> String {
        outcome.message(&self.points)
    }

    /// Time left in the round, `None` for endless rounds.
    pub fn time_left(&self) -> Option<Duration> {
        self.time_left_at(Instant::now())
    }

    fn time_left_at(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Time since the round started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Checks if the round time is up.
    pub fn is_over(&self) -> bool {
        self.is_over_at(Instant::now())
    }

    fn is_over_at(&self, now: Instant) -> bool {
        self.time_left_at(now).is_some_and(|t| t.is_zero())
    }

    /// Ends the round saving the high score, returns the final score.
    pub fn finish(self) -> Result<u32> {
        let score = self.scores.score();
        if let Some(store) = &self.store {
            let high_score = store.save(score)?;
            debug!("Stored high score {high_score}");
        }

        info!(
            "Round {} over, score {score} high score {}",
            self.mode,
            self.scores.high_score()
        );

        Ok(score)
    }

    /// The game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The round scores.
    pub fn scores(&self) -> &ScoreKeeper {
        &self.scores
    }

    /// The dealt hands stats.
    pub fn stats(&self) -> &GenerationStats {
        self.generator.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: GameMode) -> Session {
        let store = HighScoreStore::open_in_memory().unwrap();
        Session::with_store(mode, PointsTable::default(), Some(17), Some(store)).unwrap()
    }

    #[test]
    fn deal_and_guess() {
        let mut s = session(GameMode::Gauntlet);

        for _ in 0..50 {
            let hand = s.deal().unwrap();
            let actual = hand.value().category();
            let outcome = s.guess(actual).unwrap();
            assert!(outcome.correct);
            assert!(s.hand().is_none());
        }

        assert_eq!(s.scores().streak(), 50);
        assert_eq!(s.stats().total(), 50);
        assert!(s.scores().score() > 0);
    }

    #[test]
    fn guess_without_hand() {
        let mut s = session(GameMode::Easy);
        assert!(s.guess(HandCategory::Flush).is_err());

        let hand = s.deal().unwrap();
        let wrong = HandCategory::categories()
            .find(|&c| c != hand.value().category())
            .unwrap();

        let outcome = s.guess(wrong).unwrap();
        assert!(!outcome.correct);
        assert!(s.message(&outcome).starts_with("Incorrect!"));

        // The hand is consumed by the guess.
        assert!(s.guess(wrong).is_err());
    }

    #[test]
    fn round_clock() {
        let s = session(GameMode::Easy);
        let now = Instant::now();
        assert!(!s.is_over_at(now));
        assert!(s.time_left_at(now).unwrap() <= Duration::from_secs(60));
        assert!(s.is_over_at(now + Duration::from_secs(61)));
        assert_eq!(
            s.time_left_at(now + Duration::from_secs(61)),
            Some(Duration::ZERO)
        );

        let s = session(GameMode::Gauntlet);
        assert_eq!(s.time_left(), None);
        assert!(!s.is_over_at(now + Duration::from_secs(86_400)));
    }

    #[test]
    fn seeded_sessions_deal_same_hands() {
        let mut s1 = session(GameMode::Hard);
        let mut s2 = session(GameMode::Hard);

        for _ in 0..20 {
            assert_eq!(s1.deal().unwrap(), s2.deal().unwrap());
        }
    }

    #[test]
    fn finish_saves_high_score() {
        let mut s = session(GameMode::Medium);
        for _ in 0..10 {
            let hand = s.deal().unwrap();
            s.guess(hand.value().category()).unwrap();
        }

        let score = s.scores().score();
        assert_eq!(s.finish().unwrap(), score);
    }

    #[test]
    fn high_score_saved_on_guess() {
        let path = std::env::temp_dir()
            .join(format!("handdrill-session-{}", std::process::id()))
            .join("scores.db");

        let high_score = {
            let store = HighScoreStore::open(&path).unwrap();
            let mut s =
                Session::with_store(GameMode::Gauntlet, PointsTable::default(), Some(5), Some(store))
                    .unwrap();

            while s.scores().score() == 0 {
                let hand = s.deal().unwrap();
                s.guess(hand.value().category()).unwrap();
            }

            for _ in 0..5 {
                let hand = s.deal().unwrap();
                s.guess(hand.value().category()).unwrap();
            }

            // Dropped without finish.
            s.scores().high_score()
        };

        assert!(high_score > 0);
        let store = HighScoreStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap(), high_score);

        drop(store);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
