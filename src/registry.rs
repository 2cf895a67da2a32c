//! Game registry: explicit catalog populated at program initialization.
//!
//! Definitions are looked up by short name rather than discovered through
//! static constructor side effects. Registration failures that a
//! misconfigured host can produce at startup (unknown name, unexpected
//! parameters) are typed errors; registering the same name twice is a
//! programmer error and panics.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::state::GameState;
use crate::game::{GameType, HsrGame, GAME_TYPE};

/// Host-supplied construction parameters. Every registered game here is
/// parameterless, so any entry is a configuration error.
pub type GameParameters = FxHashMap<String, String>;

/// Registration-time configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no game registered under name '{0}'")]
    UnknownGame(String),

    #[error("game '{name}' takes no parameters, got {count}")]
    UnexpectedParameters { name: String, count: usize },
}

/// One catalog entry: the static facts plus a state factory.
#[derive(Clone, Copy)]
struct RegisteredGame {
    game_type: &'static GameType,
    factory: fn() -> GameState,
}

/// Registry of game definitions, keyed by short name.
#[derive(Default)]
pub struct GameRegistry {
    games: FxHashMap<String, RegisteredGame>,
}

impl GameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in game registered.
    #[must_use]
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        registry.register(&GAME_TYPE, || HsrGame::new().new_initial_state());
        registry
    }

    /// Register a game under its short name.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, game_type: &'static GameType, factory: fn() -> GameState) {
        let name = game_type.short_name.to_string();
        if self.games.contains_key(&name) {
            panic!("game '{name}' already registered");
        }
        self.games.insert(name, RegisteredGame { game_type, factory });
    }

    /// Look up a game's static facts.
    #[must_use]
    pub fn game_type(&self, name: &str) -> Option<&'static GameType> {
        self.games.get(name).map(|g| g.game_type)
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.games.contains_key(name)
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over the registered short names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }

    /// Construct a fresh initial state for a registered game.
    ///
    /// Parameters must be empty: none of the registered games is
    /// configurable, and a non-empty set means the host is misconfigured.
    pub fn new_game(
        &self,
        name: &str,
        params: &GameParameters,
    ) -> Result<GameState, RegistryError> {
        let game = self
            .games
            .get(name)
            .ok_or_else(|| RegistryError::UnknownGame(name.to_string()))?;

        if !params.is_empty() {
            return Err(RegistryError::UnexpectedParameters {
                name: name.to_string(),
                count: params.len(),
            });
        }

        Ok((game.factory)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::GUESSER;

    #[test]
    fn test_builtin_registration() {
        let registry = GameRegistry::with_builtin_games();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("hsr"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["hsr"]);

        let ty = registry.game_type("hsr").unwrap();
        assert_eq!(ty.long_name, "Highest Safe Rung");
    }

    #[test]
    fn test_new_game() {
        let registry = GameRegistry::with_builtin_games();
        let state = registry.new_game("hsr", &GameParameters::default()).unwrap();

        assert_eq!(state.current_player(), Some(GUESSER));
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_unknown_game() {
        let registry = GameRegistry::with_builtin_games();
        let err = registry
            .new_game("chess", &GameParameters::default())
            .unwrap_err();

        assert_eq!(err, RegistryError::UnknownGame("chess".to_string()));
        assert_eq!(
            err.to_string(),
            "no game registered under name 'chess'"
        );
    }

    #[test]
    fn test_unexpected_parameters() {
        let registry = GameRegistry::with_builtin_games();
        let mut params = GameParameters::default();
        params.insert("board_size".to_string(), "13".to_string());

        let err = registry.new_game("hsr", &params).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnexpectedParameters {
                name: "hsr".to_string(),
                count: 1,
            }
        );
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut registry = GameRegistry::with_builtin_games();
        registry.register(&GAME_TYPE, GameState::new);
    }
}
