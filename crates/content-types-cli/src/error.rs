use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("{0}")]
    ContentTypes(#[from] content_types::ContentTypeError),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
