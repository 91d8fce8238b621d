//! Integration-layer error types.
//!
//! The simulation core is total and never fails; these cover the edges where
//! the game touches the filesystem: the config file and the ship bitmap.
//!
//! ## Usage
//!
//! ```rust
//! use polyroids::error::{GameError, GameResult};
//!
//! fn check(loaded: bool) -> GameResult<()> {
//!     if !loaded {
//!         return Err(GameError::AssetLoad {
//!             path: "spaceship1.png".into(),
//!             reason: "file not found".into(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Top-level error enum for the game shell.
#[derive(Debug)]
pub enum GameError {
    /// The config file exists but could not be read.
    ConfigRead {
        /// Path that was read.
        path: String,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has a value of the wrong type.
    ConfigParse {
        /// Where the document came from (path or a label for inline text).
        path: String,
        /// Parser message, including line and column.
        message: String,
    },

    /// The config parsed but a value is outside the range the game can run
    /// with (e.g. a non-positive fire rate).
    ConfigInvalid {
        path: String,
        /// Offending key and the accepted range.
        message: String,
    },

    /// A required image failed to load.  Fatal at startup.
    AssetLoad {
        /// Asset path relative to the `assets/` directory.
        path: String,
        reason: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path, source)
            }
            GameError::ConfigParse { path, message } => {
                write!(f, "failed to parse config '{}': {}", path, message)
            }
            GameError::ConfigInvalid { path, message } => {
                write!(f, "invalid config '{}': {}", path, message)
            }
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load asset '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_error_names_the_path() {
        let err = GameError::AssetLoad {
            path: "spaceship1.png".into(),
            reason: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load asset 'spaceship1.png': not found"
        );
    }

    #[test]
    fn invalid_config_names_path_and_key() {
        let err = GameError::ConfigInvalid {
            path: "assets/game.toml".into(),
            message: "laser_fire_rate must be > 0, got -1".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config 'assets/game.toml': laser_fire_rate must be > 0, got -1"
        );
    }

    #[test]
    fn read_error_exposes_io_source() {
        let err = GameError::ConfigRead {
            path: "assets/game.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
