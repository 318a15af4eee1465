//! Error types for conversions at the command boundary

use thiserror::Error;

/// Errors produced when parsing user or configuration input into core types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid room size: {0} (expected 8, 10 or 15)")]
    InvalidRoomSize(u32),

    #[error("Unknown item kind: {0}")]
    UnknownItemKind(String),

    #[error("Invalid color: {0} (expected #rrggbb)")]
    InvalidColor(String),
}

/// Result alias for rb-core conversions
pub type Result<T> = std::result::Result<T, Error>;
