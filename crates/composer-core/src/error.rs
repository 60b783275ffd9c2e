//! Error types for skill document composition.
//!
//! The synthesis engine itself is total and never fails; these errors cover
//! the edges around it: loading catalogs and documents, editing sessions,
//! and validating configuration.
//!
//! # Examples
//!
//! ```
//! use composer_core::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Agent name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_name("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for skill document composition.
///
/// All fallible operations in the workspace use this type, providing
/// consistent error handling across crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found error.
    ///
    /// Occurs when looking up a section, component, or archetype
    /// that does not exist.
    #[error("Resource not found: {resource}")]
    ResourceNotFound {
        /// Identifier of the missing resource
        resource: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or contains contradictory settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when catalog or document JSON cannot be converted.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error for catalog and document data.
    ///
    /// Raised when data violates a structural requirement, such as
    /// duplicate component ids in a registry.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Returns `true` if this is a resource not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer_core::Error;
    ///
    /// let err = Error::ResourceNotFound {
    ///     resource: "section:abc".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid target".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use composer_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "components".to_string(),
    ///     reason: "duplicate id 'role'".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for composition operations.
///
/// # Examples
///
/// ```
/// use composer_core::{Result, Error};
///
/// fn validate_index(value: i32) -> Result<i32> {
///     if value < 0 {
///         return Err(Error::InvalidArgument("index must be non-negative".to_string()));
///     }
///     Ok(value)
/// }
///
/// assert!(validate_index(5).is_ok());
/// assert!(validate_index(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
