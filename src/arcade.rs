//! Arcade shell: game selection and the single active engine
//!
//! Exactly one engine is alive at a time. Selecting a game tears down the
//! previous one and builds a fresh engine primed with the stored best score.
//! After every update or move the engine's best score is written back to
//! storage when it sets a new record.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::highscores::HighScores;
use crate::platform::KeyValueStore;
use crate::sim::{BrickState, Direction, MergeSession, SnakeState, brick, snake};

/// The games on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameId {
    #[serde(rename = "brickrush")]
    BrickRush,
    #[serde(rename = "1024")]
    Merge1024,
    #[serde(rename = "snake")]
    Snake,
}

impl GameId {
    pub const ALL: [GameId; 3] = [GameId::BrickRush, GameId::Merge1024, GameId::Snake];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::BrickRush => "brickrush",
            GameId::Merge1024 => "1024",
            GameId::Snake => "snake",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "brickrush" => Some(GameId::BrickRush),
            "1024" => Some(GameId::Merge1024),
            "snake" => Some(GameId::Snake),
            _ => None,
        }
    }

    /// Storage key of the persisted best score
    pub fn storage_key(&self) -> &'static str {
        match self {
            GameId::BrickRush => "brickrush-highscore",
            GameId::Merge1024 => "1024-highscore",
            GameId::Snake => "snake-highscore",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameId::BrickRush => "Brick Rush",
            GameId::Merge1024 => "1024",
            GameId::Snake => "Snake",
        }
    }
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "game", rename_all = "lowercase")]
pub enum Screen {
    Loading,
    Menu,
    Playing(GameId),
}

/// The engine for the game on screen
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "game", content = "state")]
pub enum ActiveGame {
    #[serde(rename = "brickrush")]
    BrickRush(BrickState),
    #[serde(rename = "1024")]
    Merge1024(MergeSession),
    #[serde(rename = "snake")]
    Snake(SnakeState),
}

impl ActiveGame {
    fn new(game: GameId, seed: u64, best_score: u64) -> Self {
        match game {
            GameId::BrickRush => ActiveGame::BrickRush(BrickState::new(seed, best_score)),
            GameId::Merge1024 => ActiveGame::Merge1024(MergeSession::new(seed, best_score)),
            GameId::Snake => ActiveGame::Snake(SnakeState::new(seed, best_score)),
        }
    }

    pub fn id(&self) -> GameId {
        match self {
            ActiveGame::BrickRush(_) => GameId::BrickRush,
            ActiveGame::Merge1024(_) => GameId::Merge1024,
            ActiveGame::Snake(_) => GameId::Snake,
        }
    }

    pub fn score(&self) -> u64 {
        match self {
            ActiveGame::BrickRush(s) => s.score,
            ActiveGame::Merge1024(s) => s.score,
            ActiveGame::Snake(s) => s.score,
        }
    }

    pub fn best_score(&self) -> u64 {
        match self {
            ActiveGame::BrickRush(s) => s.best_score,
            ActiveGame::Merge1024(s) => s.best_score,
            ActiveGame::Snake(s) => s.best_score,
        }
    }

    /// Advance the per-frame games. 1024 only changes on moves.
    pub fn update(&mut self, dt_ms: f32) {
        match self {
            ActiveGame::BrickRush(s) => brick::update(s, dt_ms),
            ActiveGame::Merge1024(_) => {}
            ActiveGame::Snake(s) => snake::update(s, dt_ms),
        }
    }
}

/// Borrowed view handed to the renderer
#[derive(Debug, Serialize)]
pub struct ArcadeSnapshot<'a> {
    #[serde(flatten)]
    pub screen: Screen,
    pub active: Option<&'a ActiveGame>,
    pub high_scores: &'a HighScores,
}

/// Menu, active game and persisted best scores
pub struct Arcade {
    screen: Screen,
    active: Option<ActiveGame>,
    scores: HighScores,
    store: Box<dyn KeyValueStore>,
    /// Seeds each new engine
    rng: Pcg32,
}

impl Arcade {
    pub fn new(store: Box<dyn KeyValueStore>, seed: u64) -> Self {
        let scores = HighScores::load(store.as_ref());
        Self {
            screen: Screen::Loading,
            active: None,
            scores,
            store,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveGame> {
        self.active.as_mut()
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn snapshot(&self) -> ArcadeSnapshot<'_> {
        ArcadeSnapshot {
            screen: self.screen,
            active: self.active.as_ref(),
            high_scores: &self.scores,
        }
    }

    /// Loading screen finished
    pub fn finish_loading(&mut self) {
        if self.screen == Screen::Loading {
            self.screen = Screen::Menu;
        }
    }

    /// Switch to a game, discarding whatever was running
    pub fn select(&mut self, game: GameId) {
        self.sync_best_score();
        let seed = self.rng.random::<u64>();
        self.active = Some(ActiveGame::new(game, seed, self.scores.best(game)));
        self.screen = Screen::Playing(game);
        log::info!("Selected {}", game.title());
    }

    pub fn back_to_menu(&mut self) {
        self.sync_best_score();
        self.active = None;
        self.screen = Screen::Menu;
    }

    /// Per-frame entry point
    pub fn update(&mut self, dt_ms: f32) {
        if let Some(active) = self.active.as_mut() {
            active.update(dt_ms);
        }
        self.sync_best_score();
    }

    /// Start (or restart) the active game
    pub fn start(&mut self) {
        match self.active.as_mut() {
            Some(ActiveGame::BrickRush(s)) => s.start(),
            Some(ActiveGame::Merge1024(s)) => s.restart(),
            Some(ActiveGame::Snake(s)) => s.start(),
            None => {}
        }
    }

    pub fn pause(&mut self) {
        match self.active.as_mut() {
            Some(ActiveGame::BrickRush(s)) => s.pause(),
            Some(ActiveGame::Snake(s)) => s.pause(),
            _ => {}
        }
    }

    pub fn resume(&mut self) {
        match self.active.as_mut() {
            Some(ActiveGame::BrickRush(s)) => s.resume(),
            Some(ActiveGame::Snake(s)) => s.resume(),
            _ => {}
        }
    }

    /// Directional input: an immediate move in 1024, a queued turn in Snake
    ///
    /// Returns true if the input was used.
    pub fn press(&mut self, direction: Direction) -> bool {
        let used = match self.active.as_mut() {
            Some(ActiveGame::Merge1024(s)) => s.apply_move(direction),
            Some(ActiveGame::Snake(s)) => {
                s.change_direction(direction);
                true
            }
            _ => false,
        };
        self.sync_best_score();
        used
    }

    /// Pointer x position for the Brick Rush paddle
    pub fn move_paddle(&mut self, pointer_x: f32) {
        if let Some(ActiveGame::BrickRush(s)) = self.active.as_mut() {
            brick::move_paddle(s, pointer_x);
        }
    }

    /// Keep playing 1024 after reaching the winning tile
    pub fn continue_playing(&mut self) {
        if let Some(ActiveGame::Merge1024(s)) = self.active.as_mut() {
            s.continue_playing();
        }
    }

    /// Persist the active engine's best score when it beats the stored one
    fn sync_best_score(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let game = active.id();
        if self.scores.record(game, active.best_score()) {
            log::info!("New {} high score: {}", game.title(), self.scores.best(game));
            self.scores.save(self.store.as_mut(), game);
        }
    }
}
