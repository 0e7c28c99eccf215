use super::GraphQlError;
use crate::api::{
    errors::ApiError,
    types::{Auction, AuctionStatus},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuctionsByStatusResponse {
    pub data: Option<AuctionsByStatus>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionsByStatus {
    pub auctions_by_status: Vec<Auction>,
}

/// The status is written as a bare enum value rather than passed as a
/// variable. Only the two [`AuctionStatus`] variants can end up here.
pub fn build(status: AuctionStatus) -> String {
    indoc::formatdoc! {r"
        {{
          auctionsByStatus(status: {status}) {{
            title
            id
            status
            community {{
              name
            }}
            proposals {{
              id
              title
              tldr
              address
              voteCount
            }}
          }}
        }}
    "}
}

/// Checks a raw response body against the query's schema
pub fn extract(body: serde_json::Value) -> Result<Vec<Auction>, ApiError> {
    let AuctionsByStatusResponse { data, errors } =
        serde_json::from_value(body).map_err(|error| ApiError::UnexpectedResponse(error.to_string()))?;

    let messages = errors
        .unwrap_or_default()
        .into_iter()
        .map(|error| error.message)
        .collect::<Vec<_>>();

    match data {
        Some(data) => {
            if !messages.is_empty() {
                tracing::warn!(errors = ?messages, "auctionsByStatus returned data alongside errors");
            }
            Ok(data.auctions_by_status)
        }
        None if messages.is_empty() => Err(ApiError::UnexpectedResponse(
            "the response carries neither data nor errors".to_owned(),
        )),
        None => Err(ApiError::GraphQl(messages)),
    }
}
