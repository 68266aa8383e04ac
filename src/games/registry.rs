//! Name-to-constructor lookup for the bundled games.
//!
//! The engine accepts any [`Game`] implementation; this registry is the
//! closed set of games the crate ships with, so construction-time validation
//! stays in one place.

use crate::error::ConfigError;

use super::{Game, StagHuntGame, TreasureGame};

/// Identifiers accepted by [`build_game`].
pub const GAME_NAMES: &[&str] = &["treasure", "staghunt"];

/// Construct a bundled game by identifier.
pub fn build_game(name: &str) -> Result<Box<dyn Game>, ConfigError> {
    match name {
        "treasure" => Ok(Box::new(TreasureGame::new())),
        "staghunt" => Ok(Box::new(StagHuntGame::new())),
        other => Err(ConfigError::UnknownGame(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_games_resolve() {
        for name in GAME_NAMES {
            let game = build_game(name).unwrap();
            assert_eq!(game.name(), *name);
        }
    }

    #[test]
    fn test_unknown_game_is_rejected() {
        let err = build_game("chess").unwrap_err();
        assert_eq!(err, ConfigError::UnknownGame("chess".to_string()));
    }
}
