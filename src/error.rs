use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed: {0}.")]
    PromptError(dialoguer::Error),

    /// The operator aborted the session (Ctrl-C) while a prompt was active.
    #[error("Interrupted, no configuration was written.")]
    Interrupted,

    #[error("Failed to parse JSON answers. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML answers. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Unsupported answers file '{path}'. Expected one of: {extensions}.")]
    AnswersFileTypeError { path: String, extensions: String },

    #[error("Invalid indentation '{0}'. Use 'tab' or a number of spaces.")]
    IndentParseError(String),

    #[error("Cannot proceed: no output path was given and prompting is disabled.")]
    MissingOutputPath,

    #[error("Cannot proceed: no answers were given and prompting is disabled.")]
    MissingAnswers,

    #[error("Cannot proceed: output file '{output_file}' already exists. Use --force to overwrite it.")]
    OutputFileExistsError { output_file: String },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Interrupted
            }
            other => Error::PromptError(other),
        }
    }
}

/// Convenience type alias for Results with nscgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
