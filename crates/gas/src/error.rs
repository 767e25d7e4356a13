//! Error types for the nitrox-gas crate.

/// Broad category of a [`GasError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value was rejected before any computation ran.
    InvalidArgument,
    /// A result could not be rendered to JSON.
    Serialization,
}

/// Error type for all fallible operations in the nitrox-gas crate.
///
/// Both input failures share the [`ErrorKind::InvalidArgument`] kind; the
/// variant only records which value was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GasError {
    /// Returned when the oxygen fraction is above 1 or below 0.
    #[error("FO2 can not be out of range 0 - 1")]
    Fo2OutOfRange {
        /// The rejected oxygen fraction.
        fo2: f64,
    },

    /// Returned when a distance unit name is neither `meters` nor `feet`.
    #[error("Distance unit not specified or invalid")]
    InvalidUnit {
        /// The rejected unit name.
        unit: String,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying serde_json message.
        reason: String,
    },
}

impl GasError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fo2OutOfRange { .. } | Self::InvalidUnit { .. } => ErrorKind::InvalidArgument,
            Self::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_fo2_out_of_range() {
        let err = GasError::Fo2OutOfRange { fo2: 1.5 };
        assert_eq!(err.to_string(), "FO2 can not be out of range 0 - 1");
    }

    #[test]
    fn error_invalid_unit() {
        let err = GasError::InvalidUnit {
            unit: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Distance unit not specified or invalid");
    }

    #[test]
    fn error_serialization() {
        let err = GasError::Serialization {
            reason: "key must be a string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("key must be a string"));
    }

    #[test]
    fn input_errors_are_invalid_argument() {
        assert_eq!(
            GasError::Fo2OutOfRange { fo2: -0.1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            GasError::InvalidUnit {
                unit: String::new()
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            GasError::Serialization {
                reason: String::new()
            }
            .kind(),
            ErrorKind::Serialization
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<GasError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + 'static>() {}
        assert_impl::<GasError>();
    }
}
