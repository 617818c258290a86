//! Error types for Gati.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extrapolation errors.
///
/// Every variant is a caller error. Nothing here is retried or recovered
/// inside the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Forward time step is zero, negative or not finite
    #[error("Invalid time step: {0} (must be positive and finite)")]
    InvalidTimeStep(f64),

    /// Requested zero candidate samples
    #[error("Sample count must be at least 1")]
    ZeroSamples,

    /// Noise standard deviation is negative or not finite
    #[error("Invalid {name} noise: {value} (must be non-negative and finite)")]
    InvalidNoise {
        /// Which noise term ("speed" or "heading")
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Anchor timestamps do not strictly increase
    #[error("Anchor timestamps must strictly increase: last t={last}, current t={current}")]
    NonIncreasingTime {
        /// Timestamp of the older anchor
        last: f64,
        /// Timestamp of the newer anchor
        current: f64,
    },

    /// Advance requested before any observation seeded the driver
    #[error("Cannot advance: driver has not been seeded with an observation")]
    NotSeeded,
}

impl Error {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTimeStep(_) => "INVALID_TIME_STEP",
            Self::ZeroSamples => "ZERO_SAMPLES",
            Self::InvalidNoise { .. } => "INVALID_NOISE",
            Self::NonIncreasingTime { .. } => "NON_INCREASING_TIME",
            Self::NotSeeded => "NOT_SEEDED",
        }
    }

    /// True for malformed arguments, false for invalid state transitions.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::NotSeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NonIncreasingTime {
            last: 0.3,
            current: 0.3,
        };
        assert_eq!(
            err.to_string(),
            "Anchor timestamps must strictly increase: last t=0.3, current t=0.3"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::ZeroSamples.is_invalid_input());
        assert!(Error::InvalidTimeStep(0.0).is_invalid_input());
        assert!(!Error::NotSeeded.is_invalid_input());
        assert_eq!(Error::NotSeeded.code(), "NOT_SEEDED");
    }
}
