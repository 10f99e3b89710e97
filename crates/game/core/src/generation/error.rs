use crate::config::ConfigError;
use crate::error::{ErrorSeverity, GameError};

/// A single chain pass that could not extend the chain.
///
/// The pass is discarded as a whole; the caller retries with the next seed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("chain step {step} found no free neighbour in {attempts} attempts")]
    Blocked { step: u32, attempts: u32 },
}

impl GameError for ChainError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Blocked { .. } => "CHAIN_BLOCKED",
        }
    }
}

/// Dungeon construction failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no seed in {first_seed}..+{attempts} produced a complete chain")]
    AttemptsExhausted { first_seed: u64, attempts: u32 },
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig(_) => ErrorSeverity::Validation,
            Self::AttemptsExhausted { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "GENERATION_INVALID_CONFIG",
            Self::AttemptsExhausted { .. } => "GENERATION_ATTEMPTS_EXHAUSTED",
        }
    }
}
