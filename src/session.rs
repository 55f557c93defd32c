use rand::prelude::*;

use crate::{Game, GameConfig, RandomMinefieldGenerator};

/// Owns the current game and replaces it wholesale on "new game".
///
/// This is the object a front end holds on to: short-press routes to
/// [`Game::reveal`], long-press to [`Game::toggle_flag`], and the face
/// button to [`GameSession::new_game`].
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    seeds: SmallRng,
    game: Game,
}

impl GameSession {
    /// Starts a session with its first game already generated. The seed
    /// makes the whole sequence of games reproducible.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let game = Game::generate(config, RandomMinefieldGenerator::new(seeds.random()));
        Self {
            config,
            seeds,
            game,
        }
    }

    /// Discards the current game and starts a fresh one: new minefield,
    /// all-hidden board, full flag budget, status back to ongoing.
    pub fn new_game(&mut self) {
        let seed: u64 = self.seeds.random();
        log::debug!("starting new game (seed {})", seed);
        self.game = Game::generate(self.config, RandomMinefieldGenerator::new(seed));
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT, rand::random())
    }
}
