use super::{filter::visible_proposals, state::ViewState};
use crate::{
    api::types::{Auction, AuctionStatus, Proposal},
    link::LinkBuilder,
};
use serde::Serialize;

/// What a front-end shows for a [`ViewState`]
#[derive(Debug, PartialEq, Serialize)]
pub struct View {
    pub status: AuctionStatus,
    pub hint: &'static str,
    pub loading: bool,
    pub auctions: Vec<AuctionView>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AuctionView {
    pub id: u64,
    pub community: String,
    pub title: String,
    /// absent when the props section is hidden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposals: Option<Vec<ProposalLink>>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ProposalLink {
    pub id: u64,
    pub title: String,
    pub vote_count: f64,
    pub url: String,
}

impl ProposalLink {
    fn new(auction: &Auction, proposal: &Proposal, links: &LinkBuilder) -> Self {
        Self {
            id: proposal.id,
            title: proposal.title.clone(),
            vote_count: proposal.vote_count,
            url: links.build(&auction.community.name, &auction.title, proposal.id),
        }
    }

    /// link text, `#<id> <title>`
    pub fn label(&self) -> String {
        format!("#{} {}", self.id, self.title)
    }
}

pub fn status_hint(status: AuctionStatus) -> &'static str {
    match status {
        AuctionStatus::Open => "Select Voting to view props.",
        AuctionStatus::Voting => "Select Open to view open rounds.",
    }
}

pub fn render(state: &ViewState, links: &LinkBuilder) -> View {
    let status = state.status();
    let filters = state.filters();

    let auctions = state
        .auctions()
        .unwrap_or_default()
        .iter()
        .map(|auction| AuctionView {
            id: auction.id,
            community: auction.community.name.clone(),
            title: auction.title.clone(),
            proposals: visible_proposals(auction, status, filters).map(|proposals| {
                proposals
                    .into_iter()
                    .map(|proposal| ProposalLink::new(auction, proposal, links))
                    .collect()
            }),
        })
        .collect();

    View {
        status,
        hint: status_hint(status),
        loading: state.is_loading(),
        auctions,
    }
}
