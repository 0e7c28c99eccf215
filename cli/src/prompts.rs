use crate::errors::CliError;
use inquire::InquireError;
use std::io;

/// maps an [`InquireError`] to a [`CliError`], `None` if the user dismissed the prompt
pub fn handle_inquire_error(error: InquireError) -> Option<CliError> {
    match error {
        InquireError::NotTTY => Some(CliError::PromptNotTTY),
        InquireError::IO(error) => Some(CliError::PromptIoError(error)),
        InquireError::OperationCanceled | InquireError::OperationInterrupted => None,
        InquireError::InvalidConfiguration(message) => Some(CliError::PromptIoError(io::Error::other(message))),
        InquireError::Custom(error) => Some(CliError::PromptIoError(io::Error::other(error))),
    }
}
