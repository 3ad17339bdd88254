use crate::{board::Board, direction::Direction, error::GameError};
use rand::prelude::SliceRandom;

pub trait TileAI {
    fn choose_move(&self, board: &Board) -> Result<Direction, GameError>;
}

pub struct RandomWalk;

impl TileAI for RandomWalk {
    fn choose_move(&self, board: &Board) -> Result<Direction, GameError> {
        let mut dir = Direction::ALL;
        dir.shuffle(&mut rand::rng());

        dir.into_iter()
            .find(|&dir| board.can_slide(dir))
            .ok_or(GameError::NoLegalMove)
    }
}

/// One move of lookahead: most merge points, then most empty cells.
pub struct Greedy;

impl TileAI for Greedy {
    fn choose_move(&self, board: &Board) -> Result<Direction, GameError> {
        let mut best: Option<(Direction, (u64, usize))> = None;

        for dir in Direction::ALL {
            let (next, result) = board.slid(dir);
            if !result.changed {
                continue;
            }

            let eval = (result.score_delta, next.empty_cells().len());
            if best.map_or(true, |(_, best_eval)| eval > best_eval) {
                best = Some((dir, eval));
            }
        }

        best.map(|(dir, _)| dir).ok_or(GameError::NoLegalMove)
    }
}
