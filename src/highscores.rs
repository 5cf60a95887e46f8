//! Best score per game
//!
//! Persisted as one JSON integer per game under the game's storage key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::arcade::GameId;
use crate::platform::KeyValueStore;

/// Best score for each game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    best: BTreeMap<GameId, u64>,
}

impl HighScores {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            best: BTreeMap::new(),
        }
    }

    /// Best score for a game (0 if none recorded)
    pub fn best(&self, game: GameId) -> u64 {
        self.best.get(&game).copied().unwrap_or(0)
    }

    /// Check if a score beats the current record
    pub fn qualifies(&self, game: GameId, score: u64) -> bool {
        score > self.best(game)
    }

    /// Record a score if it beats the current best
    /// Returns true if the record changed
    pub fn record(&mut self, game: GameId, score: u64) -> bool {
        if !self.qualifies(game, score) {
            return false;
        }
        self.best.insert(game, score);
        true
    }

    /// Load every game's best score. Missing or unreadable entries count as 0.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut scores = Self::new();
        for game in GameId::ALL {
            let Some(raw) = store.get_item(game.storage_key()) else {
                continue;
            };
            match serde_json::from_str::<u64>(&raw) {
                Ok(score) => {
                    scores.best.insert(game, score);
                }
                Err(e) => log::warn!("Ignoring bad {} entry {:?}: {}", game.storage_key(), raw, e),
            }
        }
        log::info!("Loaded high scores: {:?}", scores.best);
        scores
    }

    /// Write one game's best score
    pub fn save(&self, store: &mut dyn KeyValueStore, game: GameId) {
        let value = self.best(game);
        match serde_json::to_string(&value) {
            Ok(json) => {
                if store.set_item(game.storage_key(), &json) {
                    log::debug!("{} high score saved ({})", game.as_str(), value);
                } else {
                    log::warn!("Failed to save {} high score", game.as_str());
                }
            }
            Err(e) => log::warn!("Failed to encode high score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_record_only_when_greater() {
        let mut scores = HighScores::new();
        assert!(!scores.record(GameId::Snake, 0));
        assert!(scores.record(GameId::Snake, 50));
        assert!(!scores.record(GameId::Snake, 50));
        assert!(!scores.record(GameId::Snake, 20));
        assert!(scores.record(GameId::Snake, 60));
        assert_eq!(scores.best(GameId::Snake), 60);
        assert_eq!(scores.best(GameId::Merge1024), 0);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let mut scores = HighScores::new();
        scores.record(GameId::Merge1024, 2048);
        scores.record(GameId::BrickRush, 340);
        scores.save(&mut store, GameId::Merge1024);
        scores.save(&mut store, GameId::BrickRush);

        assert_eq!(store.get_item("1024-highscore").as_deref(), Some("2048"));
        assert_eq!(HighScores::load(&store), scores);
    }

    #[test]
    fn test_load_skips_bad_values() {
        let mut store = MemoryStore::new();
        store.set_item("snake-highscore", "not a number");
        store.set_item("1024-highscore", "16");
        let scores = HighScores::load(&store);
        assert_eq!(scores.best(GameId::Snake), 0);
        assert_eq!(scores.best(GameId::Merge1024), 16);
    }
}
