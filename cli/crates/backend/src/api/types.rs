use serde::{Deserialize, Serialize};

/// Lifecycle stage used to query auctions. Written as a bare enum value in
/// the query text, hence the exact casing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum AuctionStatus {
    /// accepting submissions
    Open,
    /// under community voting
    #[default]
    Voting,
}

impl AuctionStatus {
    /// the other status, used by front-ends offering a single toggle
    pub fn toggled(self) -> Self {
        match self {
            AuctionStatus::Open => AuctionStatus::Voting,
            AuctionStatus::Voting => AuctionStatus::Open,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: u64,
    pub title: String,
    /// kept as text, the API knows more stages than the two we query by
    pub status: String,
    pub community: Community,
    pub proposals: Vec<Proposal>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub tldr: String,
    pub address: String,
    pub vote_count: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_its_bare_word() {
        assert_eq!(AuctionStatus::Open.to_string(), "Open");
        assert_eq!("Voting".parse::<AuctionStatus>().unwrap(), AuctionStatus::Voting);
        assert!("voting".parse::<AuctionStatus>().is_err());
    }

    #[test]
    fn voting_is_the_initial_status() {
        assert_eq!(AuctionStatus::default(), AuctionStatus::Voting);
        assert_eq!(AuctionStatus::default().toggled(), AuctionStatus::Open);
    }
}
