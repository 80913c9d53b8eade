use std::path::PathBuf;

/// Errors from submitting or persisting scores.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("The game is still going!")]
    GameInProgress,

    #[error("Please enter a valid player name!")]
    BlankName,

    #[error("failed to access score file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse score file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Rejections the player can fix, as opposed to storage failures
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ScoreError::GameInProgress | ScoreError::BlankName)
    }
}
