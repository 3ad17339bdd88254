use crate::{
    board::{Board, MoveResult, SpawnOutcome},
    direction::Direction,
    error::GameError,
    settings::GameSettings,
};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// The grid engine: one board, its score and the random source used for
/// spawning tiles.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    score: u64,
    settings: GameSettings,
    rng: R,
}

impl Game<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::initialized(GameSettings::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn new(settings: GameSettings, rng: R) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self::initialized(settings, rng))
    }

    /// Resumes from an existing position without spawning anything.
    pub fn from_parts(
        board: Board,
        score: u64,
        settings: GameSettings,
        rng: R,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self {
            board,
            score,
            settings,
            rng,
        })
    }

    fn initialized(settings: GameSettings, rng: R) -> Self {
        let mut game = Self {
            board: Board::empty(),
            score: 0,
            settings,
            rng,
        };
        game.initialize();
        game
    }

    /// Clears the board and score, then places the opening tiles.
    pub fn initialize(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        for _ in 0..self.settings.initial_tiles {
            self.spawn();
        }
        debug!("new board:{:?}", self.board);
    }

    /// Applies one move. Never spawns; call [`Game::spawn`] when
    /// `changed` is set.
    pub fn slide(&mut self, direction: Direction) -> MoveResult {
        let result = self.board.slide(direction);
        self.score += result.score_delta;
        debug!(
            "slide {}: changed={} delta={} score={}",
            direction, result.changed, result.score_delta, self.score
        );
        result
    }

    pub fn spawn(&mut self) -> SpawnOutcome {
        self.board
            .spawn_with(&mut self.rng, self.settings.four_probability)
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }
}
