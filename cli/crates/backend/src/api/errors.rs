use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// returned if the HTTP client cannot be built (TLS backend initialisation)
    #[error("could not set up the HTTP client for the Prop House API\nCaused by: {0}")]
    ClientSetup(String),

    /// returned if a request could not be completed (due to connection issues)
    #[error("could not connect to the Prop House API")]
    ConnectionError,

    /// returned if a request could not be completed
    #[error("could not complete a request: {0}")]
    RequestError(String),

    /// returned if the response body is not JSON
    #[error("the Prop House API returned a body that is not valid JSON\nCaused by: {0}")]
    InvalidJson(String),

    /// returned if the response body does not match the expected schema
    #[error("the Prop House API returned an unexpected payload\nCaused by: {0}")]
    UnexpectedResponse(String),

    /// returned if the response only carries GraphQL errors
    #[error("the Prop House API returned errors:\n{}", .0.join("\n"))]
    GraphQl(Vec<String>),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            ApiError::ConnectionError
        } else {
            ApiError::RequestError(error.to_string())
        }
    }
}
