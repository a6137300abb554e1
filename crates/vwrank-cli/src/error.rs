use thiserror::Error;

use crate::selection::SelectionError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Validation(#[from] vwrank_core::ValidationError),

    #[error(transparent)]
    Load(#[from] vwrank_core::LoadError),

    #[error(transparent)]
    Aggregate(#[from] vwrank_core::AggregateError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Selection(_) => 2,
            Self::Validation(_) => 2,
            Self::Load(_) => 3,
            Self::Aggregate(_) => 4,
            Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}
