use crate::{
    cli_input::FilterArguments, errors::CliError, list::spinner, output::report, prompts::handle_inquire_error,
};
use backend::{
    api::{types::AuctionStatus, GraphQlClient},
    link::LinkBuilder,
    view::{Action, Controller, View, ViewState},
};
use inquire::{Select, Text};
use std::{fmt, sync::Arc};
use tokio::runtime::Runtime;
use url::Url;

const MENU_PAGE_SIZE: usize = 12;

enum MenuItem {
    OpenProp { label: String, url: String },
    SwitchStatus(AuctionStatus),
    TopThree(bool),
    HideZeroVotes(bool),
    MinVotes(String),
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checkbox = |checked: bool| if checked { "[x]" } else { "[ ]" };

        match self {
            Self::OpenProp { label, .. } => write!(f, "Open {label}"),
            Self::SwitchStatus(status) => write!(f, "Show {status} auctions"),
            Self::TopThree(checked) => write!(f, "{} Top 3 voted props", checkbox(*checked)),
            Self::HideZeroVotes(checked) => write!(f, "{} Hide props with 0 votes", checkbox(*checked)),
            Self::MinVotes(min_votes) => write!(f, "Hide props when vote count is not greater than: {min_votes}"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

fn menu(controller: &Controller, view: &View) -> Vec<MenuItem> {
    let state = controller.state();
    let filters = state.filters();

    let props = view
        .auctions
        .iter()
        .flat_map(|auction| auction.proposals.iter().flatten())
        .map(|proposal| MenuItem::OpenProp {
            label: proposal.label(),
            url: proposal.url.clone(),
        });

    let mut items = vec![MenuItem::SwitchStatus(state.status().toggled())];

    // the filters only shape the props section
    if state.status() == AuctionStatus::Voting {
        items.push(MenuItem::TopThree(filters.top_three));
        if !filters.top_three {
            items.push(MenuItem::HideZeroVotes(filters.hide_zero_votes));
            items.push(MenuItem::MinVotes(filters.min_votes.clone()));
        }
    }

    items.extend(props);
    items.push(MenuItem::Quit);
    items
}

pub fn browse(api_url: Url, links: &LinkBuilder, filters: &FilterArguments) -> Result<(), CliError> {
    let runtime = Runtime::new().map_err(CliError::Runtime)?;
    // fetch tasks are spawned from the synchronous prompt loop
    let _guard = runtime.enter();

    let client = GraphQlClient::new(api_url).map_err(CliError::BackendApiError)?;
    let mut controller = Controller::with_state(Arc::new(client), ViewState::new(filters.status(), filters.filters()));

    controller.mount();

    loop {
        if controller.state().is_loading() {
            let spinner = spinner("fetching auctions");
            runtime.block_on(controller.wait_until_loaded());
            spinner.finish_and_clear();

            if let Some(error) = controller.state().error() {
                report::error(&CliError::BackendApiError(error.clone()));
            }
        }

        let view = controller.render(links);
        println!();
        report::view(&view);
        println!();

        let selected = Select::new("What next?", menu(&controller, &view))
            .with_page_size(MENU_PAGE_SIZE)
            .prompt();

        let item = match selected {
            Ok(item) => item,
            Err(error) => match handle_inquire_error(error) {
                Some(error) => return Err(error),
                None => break,
            },
        };

        match item {
            MenuItem::OpenProp { url, .. } => match webbrowser::open(&url) {
                Ok(()) => report::opened(&url),
                Err(error) => report::error(&CliError::OpenBrowser(url, error)),
            },
            MenuItem::SwitchStatus(status) => controller.dispatch(Action::SelectStatus(status)),
            MenuItem::TopThree(checked) => controller.dispatch(Action::SetTopThree(!checked)),
            MenuItem::HideZeroVotes(checked) => controller.dispatch(Action::SetHideZeroVotes(!checked)),
            MenuItem::MinVotes(current) => {
                let entered = Text::new("Minimum votes")
                    .with_initial_value(&current)
                    .with_help_message("props need more votes than this, leave empty for no minimum")
                    .prompt();

                match entered {
                    Ok(min_votes) => controller.dispatch(Action::SetMinVotes(min_votes)),
                    Err(error) => {
                        if let Some(error) = handle_inquire_error(error) {
                            return Err(error);
                        }
                    }
                }
            }
            MenuItem::Quit => break,
        }
    }

    report::goodbye();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use backend::{
        api::{errors::ApiError, types::Auction},
        view::{AuctionSource, AuctionView, Filters, ProposalLink},
    };

    struct NoAuctions;

    #[async_trait]
    impl AuctionSource for NoAuctions {
        async fn auctions_by_status(&self, _status: AuctionStatus) -> Result<Vec<Auction>, ApiError> {
            Ok(Vec::new())
        }
    }

    fn labels(controller: &Controller, view: &View) -> Vec<String> {
        menu(controller, view).iter().map(ToString::to_string).collect()
    }

    fn view(status: AuctionStatus, proposals: Option<Vec<ProposalLink>>) -> View {
        View {
            status,
            hint: "",
            loading: false,
            auctions: vec![AuctionView {
                id: 1,
                community: "Nouns DAO".to_owned(),
                title: "Round 5".to_owned(),
                proposals,
            }],
        }
    }

    #[test]
    fn top_three_menu() {
        let controller = Controller::new(Arc::new(NoAuctions));
        let proposals = vec![ProposalLink {
            id: 14,
            title: "Chairs".to_owned(),
            vote_count: 9.0,
            url: "https://prop.house/nouns-dao/round-5/14".to_owned(),
        }];

        let labels = labels(&controller, &view(AuctionStatus::Voting, Some(proposals)));

        assert_eq!(
            labels,
            ["Show Open auctions", "[x] Top 3 voted props", "Open #14 Chairs", "Quit"]
        );
    }

    #[test]
    fn every_filter_once_top_three_is_off() {
        let state = ViewState::new(
            AuctionStatus::Voting,
            Filters {
                top_three: false,
                hide_zero_votes: true,
                min_votes: "5".to_owned(),
            },
        );
        let controller = Controller::with_state(Arc::new(NoAuctions), state);

        let labels = labels(&controller, &view(AuctionStatus::Voting, Some(Vec::new())));

        assert_eq!(
            labels,
            [
                "Show Open auctions",
                "[ ] Top 3 voted props",
                "[x] Hide props with 0 votes",
                "Hide props when vote count is not greater than: 5",
                "Quit"
            ]
        );
    }

    #[test]
    fn open_auctions_only_switch_status() {
        let controller = Controller::with_state(
            Arc::new(NoAuctions),
            ViewState::new(AuctionStatus::Open, Filters::default()),
        );

        let labels = labels(&controller, &view(AuctionStatus::Open, None));

        assert_eq!(labels, ["Show Voting auctions", "Quit"]);
    }
}
