use super::FilterArguments;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Headings and links for a terminal
    Text,
    /// The rendered view as JSON
    Json,
}

#[derive(Debug, Parser)]
pub struct ListCommand {
    #[command(flatten)]
    pub filters: FilterArguments,
    /// How the props are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
