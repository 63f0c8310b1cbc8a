//! Result and Error types for the element data module

/// Type alias for `Result<T, elements::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ptools-elements`
pub enum Error {
    /// Lookup key matched no element
    #[error("no element found for \"{key}\"")]
    NotFound { key: String },

    /// Requested data field is absent for an otherwise valid element
    #[error("no {field} data for {element}")]
    MissingData {
        field: &'static str,
        element: &'static str,
    },

    /// Embedded dataset failed a construction-time validation check
    #[error("invalid element data: {0}")]
    InvalidData(String),

    /// Failure to infer a state of matter from a string
    #[error("failed to infer state from \"{0}\"")]
    FailedToInferState(String),

    /// Failure to infer a temperature unit from a string
    #[error("failed to infer temperature unit from \"{0}\"")]
    FailedToInferTemperature(String),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),
}
