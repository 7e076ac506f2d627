use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Run options for one alignment call.
///
/// `max_alignments` caps how many distinct optimal alignments the backtrace
/// enumerates. `None` (the default) keeps the enumeration exhaustive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentConfig {
    pub max_alignments: Option<usize>,
}

#[derive(Default)]
pub struct AlignmentConfigBuilder {
    max_alignments: Option<usize>,
}

impl AlignmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_alignments(mut self, limit: Option<usize>) -> Self {
        self.max_alignments = limit;
        self
    }

    pub fn build(self) -> Result<AlignmentConfig, ConfigError> {
        if self.max_alignments == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_alignments",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(AlignmentConfig {
            max_alignments: self.max_alignments,
        })
    }
}
