use crate::{board::SIZE, error::GameError};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Chance that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,
    /// Tiles placed when a game starts.
    pub initial_tiles: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            four_probability: 0.1,
            initial_tiles: 2,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), GameError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidSettings(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if self.initial_tiles > SIZE * SIZE {
            return Err(GameError::InvalidSettings(format!(
                "initial_tiles must be at most {}, got {}",
                SIZE * SIZE,
                self.initial_tiles
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = GameSettings::from_json(r#"{"initial_tiles": 4}"#).unwrap();
        assert_eq!(settings.initial_tiles, 4);
        assert_eq!(settings.four_probability, 0.1);

        assert_eq!(GameSettings::from_json("{}").unwrap(), GameSettings::default());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let err = GameSettings::from_json(r#"{"four_probability": 1.5}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidSettings(_)));

        let nan = GameSettings {
            four_probability: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_too_many_initial_tiles() {
        let settings = GameSettings {
            initial_tiles: 17,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            GameSettings::from_json("{four_probability"),
            Err(GameError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            GameSettings::load("/nonexistent/twenty48.json"),
            Err(GameError::Io(_))
        ));
    }
}
