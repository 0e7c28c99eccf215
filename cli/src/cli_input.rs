mod browse;
mod completions;
mod filters;
mod list;

pub(crate) use browse::BrowseCommand;
pub(crate) use completions::CompletionsCommand;
pub(crate) use filters::FilterArguments;
pub(crate) use list::{ListCommand, OutputFormat};

use crate::common::{
    consts::{DEBUG_LOG_FILTER, TRACE_LOG_FILTER},
    log::LogStyle,
};
use backend::{
    api::consts::{API_URL, LINK_BASE_URL},
    link::LinkBuilder,
};
use clap::{ArgAction, Parser, Subcommand};
use url::Url;

#[derive(Debug, Subcommand, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SubCommand {
    /// Print the props of every auction with the given status
    List(ListCommand),
    /// Browse auctions and props interactively
    Browse(BrowseCommand),
    /// Output completions for the chosen shell to use, write the output to the
    /// appropriate location for your shell
    Completions(CompletionsCommand),
}

#[derive(Debug, Parser)]
#[command(name = "hot-props", version)]
/// Picks up and displays the exciting props at each Prop House community
pub struct Args {
    /// Set the tracing level, repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub trace: u8,
    /// How log lines are formatted
    #[arg(long, value_enum, default_value_t, global = true)]
    pub log_style: LogStyle,
    /// The Prop House GraphQL endpoint
    #[arg(long, env = "HOT_PROPS_API_URL", default_value = API_URL, global = true)]
    pub api_url: Url,
    /// The base URL of the generated prop links
    #[arg(long, env = "HOT_PROPS_LINK_BASE", default_value = LINK_BASE_URL, global = true)]
    pub link_base: String,
    #[command(subcommand)]
    pub command: SubCommand,
}

impl Args {
    pub fn log_filter(&self) -> Option<&'static str> {
        match self.trace {
            0 => None,
            1 => Some(DEBUG_LOG_FILTER),
            _ => Some(TRACE_LOG_FILTER),
        }
    }

    pub fn links(&self) -> LinkBuilder {
        LinkBuilder::new(self.link_base.as_str())
    }

    /// `false` when stdout carries something meant for another program
    pub fn shows_header(&self) -> bool {
        match &self.command {
            SubCommand::List(command) => command.format == OutputFormat::Text,
            SubCommand::Browse(_) => true,
            SubCommand::Completions(_) => false,
        }
    }
}
