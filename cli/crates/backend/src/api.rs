pub mod client;
pub mod consts;
pub mod errors;
pub mod graphql;
pub mod types;

pub use client::GraphQlClient;
