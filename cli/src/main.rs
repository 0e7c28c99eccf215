#![cfg_attr(test, allow(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod browse;
mod cli_input;
mod common;
mod errors;
mod list;
mod output;
mod prompts;
mod watercolor;

#[macro_use]
extern crate log;

use crate::{
    browse::browse,
    cli_input::{Args, SubCommand},
    common::consts::DEFAULT_LOG_FILTER,
    list::list,
};
use clap::Parser;
use errors::CliError;
use output::report;
use std::{io::IsTerminal as _, process};
use tracing_subscriber::{prelude::*, EnvFilter};
use watercolor::ShouldColorize;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    // another provider being installed first is fine
    let _ = rustls::crypto::ring::default_provider().install_default();

    let args = Args::parse();
    ShouldColorize::from_env();

    let exit_code = match try_main(args) {
        Ok(()) => 0,
        Err(error) => {
            report::error(&error);
            1
        }
    };

    process::exit(exit_code);
}

fn try_main(args: Args) -> Result<(), CliError> {
    let filter = {
        let builder = EnvFilter::builder();
        match args.log_filter() {
            Some(argument_filter) => builder.parse_lossy(argument_filter),
            None if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() => builder.from_env_lossy(),
            None => builder.parse_lossy(DEFAULT_LOG_FILTER),
        }
    };

    tracing_subscriber::registry()
        .with(args.log_style.layer())
        .with(filter)
        .init();

    trace!("subcommand: {}", args.command);

    // do not display header if we're in a pipe
    if std::io::stdout().is_terminal() && args.shows_header() {
        report::cli_header();
    }

    let links = args.links();

    match args.command {
        SubCommand::Completions(cmd) => {
            cmd.print();

            Ok(())
        }
        SubCommand::List(cmd) => list(args.api_url, &links, &cmd.filters, cmd.format),
        SubCommand::Browse(cmd) => browse(args.api_url, &links, &cmd.filters),
    }
}
