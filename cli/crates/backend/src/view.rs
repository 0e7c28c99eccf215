//! State of the hot props page and the passes deriving what is shown from it.
//!
//! [`ViewState`] is only changed through [`update`], which returns the
//! [`Effect`] a driver has to run. [`Controller`] is that driver: it runs
//! fetches as tokio tasks and feeds their outcome back as actions.

mod controller;
mod filter;
mod render;
mod sort;
mod state;
mod update;

pub use controller::{AuctionSource, Controller};
pub use filter::{is_visible, vote_threshold, visible_proposals, TOP_PROPOSALS};
pub use render::{render, status_hint, AuctionView, ProposalLink, View};
pub use sort::{sort_auctions, sort_proposals};
pub use state::{Filters, RequestToken, ViewState};
pub use update::{update, Action, Effect};
