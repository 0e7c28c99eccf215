use backend::api::errors::ApiError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// wraps an error originating in the backend crate api module
    #[error(transparent)]
    BackendApiError(ApiError),
    /// returned if an interactive prompt fails due to the input device not being a TTY
    #[error("could not show an interactive prompt due to the input device not being a TTY")]
    PromptNotTTY,
    /// returned if an IO error is encountered when trying to display an interactive prompt
    #[error("encountered an IO error while showing an interactive prompt\nCaused by: {0}")]
    PromptIoError(io::Error),
    /// returned if the async runtime could not be started
    #[error("could not start the async runtime\nCaused by: {0}")]
    Runtime(io::Error),
    /// returned if a prop link could not be handed to the browser
    #[error("could not open {0} in a browser\nCaused by: {1}")]
    OpenBrowser(String, io::Error),
    /// returned if the rendered props could not be written as JSON
    #[error("could not serialize the props\nCaused by: {0}")]
    Serialize(serde_json::Error),
}

impl CliError {
    /// returns the appropriate hint for a [`CliError`]
    pub fn to_hint(&self) -> Option<String> {
        match self {
            Self::BackendApiError(ApiError::ConnectionError) => {
                Some("this may be caused by connection issues, check your network and the --api-url value".to_owned())
            }
            Self::BackendApiError(ApiError::ClientSetup(_)) => {
                Some("this is likely caused by the system TLS configuration, e.g. missing root certificates".to_owned())
            }
            Self::BackendApiError(ApiError::InvalidJson(_) | ApiError::UnexpectedResponse(_)) => {
                Some("the endpoint may not be a Prop House GraphQL API, check the --api-url value".to_owned())
            }
            Self::BackendApiError(ApiError::GraphQl(_)) => Some("this is likely temporary, try again later".to_owned()),
            Self::PromptNotTTY => Some("try 'hot-props list' for non-interactive output".to_owned()),
            Self::OpenBrowser(url, _) => Some(format!("the prop can be opened manually at {url}")),
            _ => None,
        }
    }
}
