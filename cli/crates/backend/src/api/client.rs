use super::{
    consts::USER_AGENT,
    errors::ApiError,
    graphql::queries::auctions_by_status,
    types::{Auction, AuctionStatus},
};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

#[derive(Debug, Serialize)]
struct Request<'a> {
    query: &'a str,
}

/// A GraphQL client bound to a single endpoint. No retries, no caching.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    pub fn new(endpoint: Url) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| ApiError::ClientSetup(error.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts `{"query": query}` and returns the parsed body, whatever the HTTP status
    pub async fn execute(&self, query: &str) -> Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&Request { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, endpoint = %self.endpoint, "GraphQL endpoint answered with a non-success status");
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|error| ApiError::InvalidJson(error.to_string()))
    }

    pub async fn auctions_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>, ApiError> {
        let query = auctions_by_status::build(status);

        tracing::debug!(%status, "querying auctions");
        let body = self.execute(&query).await?;

        let auctions = auctions_by_status::extract(body)?;
        tracing::debug!(%status, count = auctions.len(), "received auctions");

        Ok(auctions)
    }
}
