use thiserror::Error;

/// Bounds for free-text search queries.
///
/// Passed explicitly to [`crate::fields::validate_query`] so call sites and
/// tests can substitute their own limits instead of relying on a hidden
/// global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub min_len: usize,
    pub max_len: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum query length must be at least 1")]
    ZeroMinimum,
    #[error("minimum query length {min} exceeds maximum {max}")]
    InvertedBounds { min: usize, max: usize },
}

impl QueryLimits {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, ConfigError> {
        if min_len < 1 {
            return Err(ConfigError::ZeroMinimum);
        }
        if min_len > max_len {
            return Err(ConfigError::InvertedBounds {
                min: min_len,
                max: max_len,
            });
        }
        Ok(Self { min_len, max_len })
    }
}

impl Default for QueryLimits {
    /// Limits used by the search inputs across the application.
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 500,
        }
    }
}
