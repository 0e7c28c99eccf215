pub mod auctions_by_status;

use serde::Deserialize;

/// An entry of the `errors` array of a GraphQL response
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}
