use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentTypeError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Error in `{field}`: {message}")]
    ConfigError { field: String, message: String },

    #[error("Failed to read config file, reason: {0}")]
    ReadError(#[from] std::io::Error),
}

impl ContentTypeError {
    /// The error returned when no filename was supplied at all
    pub(crate) fn missing_filename() -> Self {
        ContentTypeError::InvalidArgument {
            message: "filename cannot be None".to_string(),
        }
    }
}
