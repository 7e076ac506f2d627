use thiserror::Error;

use super::config::ConfigError;
use crate::core::scoring::scheme::ScoringError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },

    #[error("Invalid alignment configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
