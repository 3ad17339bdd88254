use board::Board;
use direction::Direction;
use serde::{Deserialize, Serialize};
use session::GameEvent;

pub mod ai;
pub mod board;
pub mod direction;
pub mod error;
pub mod game;
pub mod session;
pub mod settings;

pub use error::GameError;
pub use game::Game;
pub use session::Session;
pub use settings::GameSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCommand {
    Input { direction: Direction },
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameUpdate {
    Played {
        board: Board,
        score: u64,
        best_score: u64,
        events: Vec<GameEvent>,
    },
    Rejected {
        reason: String,
    },
}
