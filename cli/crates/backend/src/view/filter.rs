use super::state::Filters;
use crate::api::types::{Auction, AuctionStatus, Proposal};

pub const TOP_PROPOSALS: usize = 3;

/// Reads the minimum vote count the way a number input would: surrounding
/// whitespace is ignored and an empty field counts as zero. Anything that is
/// not a finite decimal number (`inf`, `NaN`, `abc`, hex literals like `0x10`)
/// sets no threshold.
pub fn vote_threshold(min_votes: &str) -> Option<f64> {
    let min_votes = min_votes.trim();

    if min_votes.is_empty() {
        return Some(0.0);
    }

    min_votes.parse::<f64>().ok().filter(|threshold| threshold.is_finite())
}

/// Visibility of a prop outside of the top three view. A positive threshold
/// overrides the zero vote toggle and is strict.
pub fn is_visible(proposal: &Proposal, filters: &Filters) -> bool {
    match vote_threshold(&filters.min_votes) {
        Some(threshold) if threshold > 0.0 => proposal.vote_count > threshold,
        _ if filters.hide_zero_votes => proposal.vote_count > 0.0,
        _ => true,
    }
}

/// The props to list under an auction, `None` when the props section is not
/// shown at all.
pub fn visible_proposals<'a>(
    auction: &'a Auction,
    status: AuctionStatus,
    filters: &Filters,
) -> Option<Vec<&'a Proposal>> {
    if status != AuctionStatus::Voting || auction.proposals.is_empty() {
        return None;
    }

    let proposals = if filters.top_three {
        auction.proposals.iter().take(TOP_PROPOSALS).collect()
    } else {
        auction
            .proposals
            .iter()
            .filter(|proposal| is_visible(proposal, filters))
            .collect()
    };

    Some(proposals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Community;
    use rstest::rstest;

    fn proposal(id: u64, vote_count: f64) -> Proposal {
        Proposal {
            id,
            title: format!("Prop {id}"),
            tldr: String::new(),
            address: String::new(),
            vote_count,
        }
    }

    fn auction(votes: &[f64]) -> Auction {
        Auction {
            id: 1,
            title: "Round 5".to_owned(),
            status: "Voting".to_owned(),
            community: Community {
                name: "Nouns DAO".to_owned(),
            },
            proposals: votes
                .iter()
                .enumerate()
                .map(|(index, votes)| proposal(index as u64, *votes))
                .collect(),
        }
    }

    fn filters(top_three: bool, hide_zero_votes: bool, min_votes: &str) -> Filters {
        Filters {
            top_three,
            hide_zero_votes,
            min_votes: min_votes.to_owned(),
        }
    }

    fn visible_votes(auction: &Auction, filters: &Filters) -> Vec<f64> {
        visible_proposals(auction, AuctionStatus::Voting, filters)
            .unwrap()
            .into_iter()
            .map(|proposal| proposal.vote_count)
            .collect()
    }

    #[rstest]
    #[case("0", Some(0.0))]
    #[case("", Some(0.0))]
    #[case("  ", Some(0.0))]
    #[case(" 5 ", Some(5.0))]
    #[case("2.5", Some(2.5))]
    #[case("-3", Some(-3.0))]
    #[case("abc", None)]
    #[case("NaN", None)]
    #[case("inf", None)]
    #[case("infinity", None)]
    #[case("-Infinity", None)]
    #[case("0x10", None)]
    fn thresholds(#[case] min_votes: &str, #[case] expected: Option<f64>) {
        assert_eq!(vote_threshold(min_votes), expected);
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[4.0], 1)]
    #[case(&[9.0, 0.0, 0.0], 3)]
    #[case(&[9.0, 8.0, 7.0, 6.0, 5.0], 3)]
    fn top_three_shows_at_most_three(#[case] votes: &[f64], #[case] expected: usize) {
        let auction = auction(votes);
        // the other filters are ignored in this mode
        let filters = filters(true, true, "100");

        let shown = visible_proposals(&auction, AuctionStatus::Voting, &filters).map_or(0, |shown| shown.len());

        assert_eq!(shown, expected);
    }

    #[test]
    fn top_three_keeps_sorted_order() {
        let auction = auction(&[9.0, 8.0, 0.0, 0.0]);

        assert_eq!(visible_votes(&auction, &filters(true, true, "0")), [9.0, 8.0, 0.0]);
    }

    #[test]
    fn hide_zero_votes() {
        let auction = auction(&[1.0, 0.0]);

        assert_eq!(visible_votes(&auction, &filters(false, true, "0")), [1.0]);
        assert_eq!(visible_votes(&auction, &filters(false, false, "0")), [1.0, 0.0]);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn threshold_is_strict_and_overrides_zero_toggle(#[case] hide_zero_votes: bool) {
        let auction = auction(&[6.0, 5.0, 0.0]);

        assert_eq!(visible_votes(&auction, &filters(false, hide_zero_votes, "5")), [6.0]);
    }

    #[test]
    fn unparsable_threshold_falls_back_to_zero_toggle() {
        let auction = auction(&[2.0, 0.0]);

        assert_eq!(visible_votes(&auction, &filters(false, true, "abc")), [2.0]);
        assert_eq!(visible_votes(&auction, &filters(false, false, "abc")), [2.0, 0.0]);
    }

    #[test]
    fn infinite_threshold_hides_nothing() {
        let auction = auction(&[2.0, 0.0]);

        assert_eq!(visible_votes(&auction, &filters(false, false, "inf")), [2.0, 0.0]);
    }

    #[test]
    fn negative_threshold_is_ignored() {
        let auction = auction(&[2.0, 0.0]);

        assert_eq!(visible_votes(&auction, &filters(false, false, "-1")), [2.0, 0.0]);
    }

    #[test]
    fn open_status_hides_the_props_section() {
        let auction = auction(&[3.0, 2.0]);

        assert_eq!(visible_proposals(&auction, AuctionStatus::Open, &Filters::default()), None);
        assert_eq!(
            visible_proposals(&auction, AuctionStatus::Open, &filters(false, false, "0")),
            None
        );
    }

    #[test]
    fn empty_auction_has_no_props_section() {
        assert_eq!(visible_proposals(&auction(&[]), AuctionStatus::Voting, &Filters::default()), None);
    }

    #[test]
    fn section_stays_when_every_prop_is_filtered_out() {
        let auction = auction(&[1.0, 0.0]);

        assert_eq!(
            visible_proposals(&auction, AuctionStatus::Voting, &filters(false, false, "10")),
            Some(Vec::new())
        );
    }
}
