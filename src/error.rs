//! Error types for map loading and configuration

use thiserror::Error;

/// Rejected map input. The grid is validated once at load time so the
/// simulation never runs against a missing player or a ragged layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("map rows are empty")]
    NoColumns,
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
    #[error("map has no player spawn")]
    MissingPlayerSpawn,
    #[error("second player spawn at row {row}, column {col}")]
    DuplicatePlayerSpawn { row: usize, col: usize },
}

/// Failure to load or validate a [`GameConfig`](crate::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
