use backend::{api::types::AuctionStatus, view::Filters};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArgument {
    /// Auctions accepting submissions
    Open,
    /// Auctions under community voting
    Voting,
}

impl From<StatusArgument> for AuctionStatus {
    fn from(status: StatusArgument) -> Self {
        match status {
            StatusArgument::Open => AuctionStatus::Open,
            StatusArgument::Voting => AuctionStatus::Voting,
        }
    }
}

/// The page controls, as flags
#[derive(Debug, clap::Args)]
pub struct FilterArguments {
    /// The status of the auctions to show
    #[arg(short, long, value_enum, default_value_t = StatusArgument::Voting)]
    pub status: StatusArgument,
    /// Show every prop instead of the top 3 voted ones
    #[arg(short, long)]
    pub all: bool,
    /// Hide props when the vote count is 0
    #[arg(long)]
    pub hide_zero_votes: bool,
    /// Hide props when the vote count is not greater than this
    #[arg(long, value_name = "VOTES", default_value = "0")]
    pub min_votes: String,
}

impl FilterArguments {
    pub fn status(&self) -> AuctionStatus {
        self.status.into()
    }

    pub fn filters(&self) -> Filters {
        Filters {
            top_three: !self.all,
            hide_zero_votes: self.hide_zero_votes,
            min_votes: self.min_votes.clone(),
        }
    }
}
