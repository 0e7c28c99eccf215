use super::update::Effect;
use crate::api::{
    errors::ApiError,
    types::{Auction, AuctionStatus},
};
use std::fmt;

/// Identifies one fetch. Only the most recently issued token may store data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filters {
    /// show the first three props of each auction and nothing else
    pub top_three: bool,
    pub hide_zero_votes: bool,
    /// kept as typed, see [`super::vote_threshold`]
    pub min_votes: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            top_three: true,
            hide_zero_votes: false,
            min_votes: "0".to_owned(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub(super) status: AuctionStatus,
    pub(super) filters: Filters,
    pub(super) auctions: Option<Vec<Auction>>,
    pub(super) loading: bool,
    pub(super) pending: Option<RequestToken>,
    pub(super) error: Option<ApiError>,
    next_token: u64,
}

impl ViewState {
    pub fn new(status: AuctionStatus, filters: Filters) -> Self {
        Self {
            status,
            filters,
            ..Self::default()
        }
    }

    /// The fetch to run when the front-end first shows up
    pub fn mount(&mut self) -> Effect {
        self.begin_fetch()
    }

    pub(super) fn begin_fetch(&mut self) -> Effect {
        let token = RequestToken(self.next_token);
        self.next_token += 1;

        self.pending = Some(token);
        self.loading = true;

        Effect::Fetch {
            token,
            status: self.status,
        }
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// `None` until the first fetch completes
    pub fn auctions(&self) -> Option<&[Auction]> {
        self.auctions.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending(&self) -> Option<RequestToken> {
        self.pending
    }

    /// The error of the last fetch, if it failed
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}
