#![cfg_attr(test, allow(unused_crate_dependencies))]
#![forbid(unsafe_code)]

//! Client side of hot-props: fetches auctions from Prop House, builds the
//! links to their props and holds the state the front-end renders from.

pub mod api;
pub mod link;
pub mod view;
