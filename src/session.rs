use crate::{
    board::{Position, SpawnOutcome},
    direction::Direction,
    error::GameError,
    game::Game,
    settings::GameSettings,
};
use log::{info, warn};
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// Things a presentation layer may want to animate or play a sound for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved { direction: Direction, score_delta: u64 },
    Merged { position: Position, value: u32 },
    Spawned { position: Position, value: u32 },
    NewBest { score: u64 },
    GameOver { score: u64 },
}

/// Turn loop around a [`Game`]: move, spawn when the board changed, then
/// check for the end of the game. Keeps the best score across restarts.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    game: Game<R>,
    best_score: u64,
    turns: u64,
    over: bool,
}

impl<R: Rng> Session<R> {
    pub fn new(settings: GameSettings, rng: R) -> Result<Self, GameError> {
        let game = Game::new(settings, rng)?;
        info!("game started");
        Ok(Self::from_game(game))
    }

    pub fn from_game(game: Game<R>) -> Self {
        let over = game.is_terminal();
        Self {
            best_score: game.score(),
            game,
            turns: 0,
            over,
        }
    }

    /// Seeds the best score from storage the host owns.
    pub fn with_best_score(mut self, best_score: u64) -> Self {
        self.best_score = self.best_score.max(best_score);
        self
    }

    pub fn play(&mut self, direction: Direction) -> Result<Vec<GameEvent>, GameError> {
        if self.over {
            warn!("move {} rejected, game is over", direction);
            return Err(GameError::GameOver {
                score: self.game.score(),
            });
        }

        let result = self.game.slide(direction);
        if !result.changed {
            return Ok(Vec::new());
        }
        self.turns += 1;

        let mut events = vec![GameEvent::Moved {
            direction,
            score_delta: result.score_delta,
        }];
        events.extend(result.merges.iter().map(|merge| GameEvent::Merged {
            position: merge.position,
            value: merge.value,
        }));

        if let SpawnOutcome::Placed { position, value } = self.game.spawn() {
            events.push(GameEvent::Spawned { position, value });
        }

        let score = self.game.score();
        if score > self.best_score {
            self.best_score = score;
            events.push(GameEvent::NewBest { score });
        }

        if self.game.is_terminal() {
            self.over = true;
            info!(
                "game over after {} turns, score {}, max tile {}",
                self.turns,
                score,
                self.game.board().max_tile()
            );
            events.push(GameEvent::GameOver { score });
        }

        Ok(events)
    }

    /// Starts a fresh game, keeping the best score.
    pub fn restart(&mut self) {
        self.game.initialize();
        self.turns = 0;
        self.over = false;
        info!("game restarted, best score {}", self.best_score);
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}
