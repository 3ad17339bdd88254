use crate::board::Position;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("invalid tile {value} at {position:?}")]
    InvalidTile { position: Position, value: u32 },

    #[error("game is over with score {score}")]
    GameOver { score: u64 },

    #[error("no move changes the board")]
    NoLegalMove,

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),
}
