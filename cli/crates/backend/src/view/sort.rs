use crate::api::types::{Auction, Proposal};
use std::cmp::Ordering;

/// Sorts auctions by proposal count and the proposals of each auction by
/// vote count, both descending. Both sorts are stable: ties keep the order
/// the API returned them in.
pub fn sort_auctions(auctions: &mut [Auction]) {
    auctions.sort_by(|a, b| b.proposals.len().cmp(&a.proposals.len()));

    for auction in auctions.iter_mut() {
        sort_proposals(&mut auction.proposals);
    }
}

pub fn sort_proposals(proposals: &mut [Proposal]) {
    proposals.sort_by(|a, b| descending_votes(a.vote_count, b.vote_count));
}

// NaN goes last
fn descending_votes(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
