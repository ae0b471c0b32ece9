use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input, raised before any
    /// filesystem mutation.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Wraps a directory or file write failure with the offending path.
    /// Files written before the failure point are left in place.
    #[error("Cannot write '{path}'. Original error: {source}")]
    GenerationError { path: String, source: std::io::Error },

    /// When the dependency install subprocess finished with a non-zero status.
    #[error("Dependency installation failed with status: {status}")]
    InstallError { status: ExitStatus },
}

/// Convenience type alias for Results with themeshot's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
