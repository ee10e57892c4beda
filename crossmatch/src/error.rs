//! Error types for the matching engine

use thiserror::Error;

/// Errors surfaced by order construction and session setup.
///
/// Matching itself never fails: removing an absent order is a no-op and
/// crossing an empty or non-crossing book yields no trades.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid order side: {0:?}")]
    InvalidSide(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
