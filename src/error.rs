//! Crate-level error type

use crate::core::DrawError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid draw: {0}")]
    Draw(#[from] DrawError),

    #[error("Failed to read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list {} contains no usable words", .0.display())]
    EmptyWordList(PathBuf),
}

pub type GameResult<T> = Result<T, GameError>;
