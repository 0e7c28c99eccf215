use super::{
    sort::sort_auctions,
    state::{RequestToken, ViewState},
};
use crate::api::{
    errors::ApiError,
    types::{Auction, AuctionStatus},
};

#[derive(Debug)]
pub enum Action {
    SelectStatus(AuctionStatus),
    SetTopThree(bool),
    SetHideZeroVotes(bool),
    SetMinVotes(String),
    Loaded {
        token: RequestToken,
        auctions: Vec<Auction>,
    },
    Failed {
        token: RequestToken,
        error: ApiError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Fetch {
        token: RequestToken,
        status: AuctionStatus,
    },
}

pub fn update(state: &mut ViewState, action: Action) -> Option<Effect> {
    match action {
        // selecting the current status again still refetches
        Action::SelectStatus(status) => {
            state.status = status;
            Some(state.begin_fetch())
        }
        Action::SetTopThree(top_three) => {
            state.filters.top_three = top_three;
            None
        }
        Action::SetHideZeroVotes(hide_zero_votes) => {
            state.filters.hide_zero_votes = hide_zero_votes;
            None
        }
        Action::SetMinVotes(min_votes) => {
            state.filters.min_votes = min_votes;
            None
        }
        Action::Loaded { token, mut auctions } => {
            if state.pending != Some(token) {
                tracing::debug!(%token, "discarding auctions of a superseded request");
                return None;
            }

            sort_auctions(&mut auctions);

            state.auctions = Some(auctions);
            state.loading = false;
            state.pending = None;
            state.error = None;

            None
        }
        Action::Failed { token, error } => {
            if state.pending != Some(token) {
                tracing::debug!(%token, "discarding the failure of a superseded request");
                return None;
            }

            tracing::debug!(%token, %error, "could not fetch auctions");

            state.loading = false;
            state.pending = None;
            state.error = Some(error);

            None
        }
    }
}
