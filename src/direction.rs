use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Rows slide for Left/Right, columns for Up/Down.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "arrowup" => Ok(Direction::Up),
            "down" | "s" | "arrowdown" => Ok(Direction::Down),
            "left" | "a" | "arrowleft" => Ok(Direction::Left),
            "right" | "d" | "arrowright" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidDirection(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_key_aliases() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(" W ".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("ArrowDown".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Right);
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert!(matches!(err, GameError::InvalidDirection(ref s) if s == "north"));
    }

    #[test]
    fn converts_from_index() {
        assert_eq!(Direction::try_from(0).unwrap(), Direction::Up);
        assert_eq!(Direction::try_from(3).unwrap(), Direction::Right);
        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }
}
