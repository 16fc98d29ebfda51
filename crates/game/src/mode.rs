// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game modes.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;

use handdrill_eval::WeightTable;

/// A game mode, sets the round duration and which hands show up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One minute round.
    #[default]
    Easy,
    /// Two and a half minutes round.
    Medium,
    /// Five minutes round.
    Hard,
    /// Endless round, every category equally likely.
    Gauntlet,
}

impl GameMode {
    /// All game modes.
    pub const ALL: [GameMode; 4] = [
        GameMode::Easy,
        GameMode::Medium,
        GameMode::Hard,
        GameMode::Gauntlet,
    ];

    /// The round duration, `None` for endless rounds.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            GameMode::Easy => Some(Duration::from_secs(60)),
            GameMode::Medium => Some(Duration::from_secs(150)),
            GameMode::Hard => Some(Duration::from_secs(300)),
            GameMode::Gauntlet => None,
        }
    }

    /// The hand generator complexity level.
    pub fn complexity(&self) -> u8 {
        match self {
            GameMode::Easy => 1,
            GameMode::Medium => 2,
            GameMode::Hard => 3,
            GameMode::Gauntlet => 4,
        }
    }

    /// The categories weights for this mode.
    pub fn weights(&self) -> WeightTable {
        match WeightTable::for_complexity(self.complexity()) {
            Ok(weights) => weights,
            Err(_) => WeightTable::uniform(),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            GameMode::Easy => "easy",
            GameMode::Medium => "medium",
            GameMode::Hard => "hard",
            GameMode::Gauntlet => "gauntlet",
        };

        f.write_str(mode)
    }
}

/// Error returned when parsing an unknown game mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode '{0}', expected easy, medium, hard, or gauntlet")]
pub struct ParseModeError(String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handdrill_eval::HandCategory;

    #[test]
    fn mode_durations() {
        assert_eq!(GameMode::Easy.duration(), Some(Duration::from_secs(60)));
        assert_eq!(GameMode::Medium.duration(), Some(Duration::from_secs(150)));
        assert_eq!(GameMode::Hard.duration(), Some(Duration::from_secs(300)));
        assert_eq!(GameMode::Gauntlet.duration(), None);
    }

    #[test]
    fn mode_weights() {
        let easy = GameMode::Easy.weights();
        assert_eq!(easy.weight(HandCategory::Straight), 30);

        let gauntlet = GameMode::Gauntlet.weights();
        assert!(HandCategory::categories().all(|c| gauntlet.weight(c) == 1));
    }

    #[test]
    fn mode_from_str() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }

        assert_eq!("HARD".parse::<GameMode>(), Ok(GameMode::Hard));
        assert!("expert".parse::<GameMode>().is_err());
    }
}
