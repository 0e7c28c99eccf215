use super::FilterArguments;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct BrowseCommand {
    /// Initial values of the controls
    #[command(flatten)]
    pub filters: FilterArguments,
}
