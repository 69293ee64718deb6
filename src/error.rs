use std::path::PathBuf;

/// Why a move was refused by a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} does not exist (the board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
