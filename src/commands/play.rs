//! Single game command
//!
//! Plays one game against a secret given on the command line or picked at random.

use crate::core::{Code, CodeError};
use crate::solver::{Game, GameConfig, GameObserver, GameResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a single game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Secret to solve; random when absent
    pub secret: Option<String>,
    /// Seed for the random secret
    pub seed: Option<u64>,
    pub game: GameConfig,
}

/// Result of a single game
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub secret: Code,
    pub game: GameResult,
}

/// Choose the secret for a game
///
/// # Errors
///
/// Returns an error if an explicit secret is not a valid code.
pub fn choose_secret(config: &PlayConfig) -> Result<Code, CodeError> {
    match (&config.secret, config.seed) {
        (Some(text), _) => Code::parse(text),
        (None, Some(seed)) => Ok(Code::random(&mut StdRng::seed_from_u64(seed))),
        (None, None) => Ok(Code::random(&mut rand::rng())),
    }
}

/// Play one game
///
/// # Errors
///
/// Returns an error if an explicit secret is not a valid code.
pub fn run_play<O: GameObserver + ?Sized>(
    config: &PlayConfig,
    observer: &mut O,
) -> Result<PlayResult, CodeError> {
    let secret = choose_secret(config)?;

    observer.on_game_start(1, &secret);
    let game = Game::new(secret, config.game).run(observer);

    Ok(PlayResult { secret, game })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SilentObserver;

    #[test]
    fn explicit_secret_is_solved() {
        let config = PlayConfig {
            secret: Some("pink, cyan, red, white".to_string()),
            ..PlayConfig::default()
        };
        let result = run_play(&config, &mut SilentObserver).unwrap();

        assert_eq!(result.secret, Code::parse("PCRW").unwrap());
        assert_eq!(result.game.solution(), Some(result.secret));
    }

    #[test]
    fn invalid_secret_is_rejected() {
        let config = PlayConfig {
            secret: Some("RRGB".to_string()),
            ..PlayConfig::default()
        };
        assert!(matches!(
            run_play(&config, &mut SilentObserver),
            Err(CodeError::DuplicateColor(_))
        ));
    }

    #[test]
    fn seeded_secret_is_reproducible() {
        let config = PlayConfig {
            seed: Some(2024),
            ..PlayConfig::default()
        };
        assert_eq!(choose_secret(&config), choose_secret(&config));
    }

    #[test]
    fn explicit_secret_wins_over_seed() {
        let config = PlayConfig {
            secret: Some("CPAW".to_string()),
            seed: Some(1),
            ..PlayConfig::default()
        };
        assert_eq!(choose_secret(&config), Code::parse("CPAW"));
    }

    #[test]
    fn random_game_is_solved() {
        let result = run_play(&PlayConfig::default(), &mut SilentObserver).unwrap();
        assert!(result.game.is_solved());
    }
}
