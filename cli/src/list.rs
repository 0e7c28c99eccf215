use crate::{
    cli_input::{FilterArguments, OutputFormat},
    errors::CliError,
    output::report,
};
use backend::{
    api::GraphQlClient,
    link::LinkBuilder,
    view::{Controller, ViewState},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::{io::IsTerminal as _, sync::Arc, time::Duration};
use url::Url;

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message).with_style(
        ProgressStyle::with_template("{spinner} {wide_msg:.dim}")
            .expect("must parse")
            .tick_chars("🕛🕐🕑🕒🕓🕔🕕🕖🕗🕘🕙🕚✨"),
    );

    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[tokio::main]
pub async fn list(
    api_url: Url,
    links: &LinkBuilder,
    filters: &FilterArguments,
    format: OutputFormat,
) -> Result<(), CliError> {
    let client = GraphQlClient::new(api_url).map_err(CliError::BackendApiError)?;
    let mut controller = Controller::with_state(Arc::new(client), ViewState::new(filters.status(), filters.filters()));

    // keep piped output clean
    let spinner = std::io::stderr()
        .is_terminal()
        .then(|| spinner("fetching auctions"));

    controller.mount();
    controller.wait_until_loaded().await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if let Some(error) = controller.state().error() {
        return Err(CliError::BackendApiError(error.clone()));
    }

    let view = controller.render(links);

    match format {
        OutputFormat::Text => report::view(&view),
        OutputFormat::Json => report::view_json(&view)?,
    }

    Ok(())
}
