use crate::{
    errors::CliError,
    watercolor::{self, watercolor},
};
use backend::view::View;
use colored::Colorize;
use std::fmt::Write as _;

/// reports the CLI name and version to stdout
pub fn cli_header() {
    let version = env!("CARGO_PKG_VERSION");
    println!("{}", format!("hot-props {version}\n").dimmed());
}

/// formats the auctions of a [`View`] as headings and numbered prop links
pub fn format_view(view: &View) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", watercolor!("{} auctions", view.status, @BrightBlue).bold());
    let _ = writeln!(output, "{}", view.hint.dimmed());

    if view.auctions.is_empty() {
        let _ = writeln!(output, "\nno {} auctions right now", view.status.to_string().to_lowercase());
    }

    for auction in &view.auctions {
        let _ = writeln!(output, "\n{}", auction.community.bold());
        let _ = writeln!(output, "{}", auction.title);

        let Some(proposals) = &auction.proposals else {
            continue;
        };

        let _ = writeln!(output, "{}", watercolor!("Props", @BrightMagenta));

        if proposals.is_empty() {
            let _ = writeln!(output, "  {}", "no props match the filters".dimmed());
        }

        for (index, proposal) in proposals.iter().enumerate() {
            let _ = writeln!(
                output,
                "  {}. {} {}",
                index + 1,
                proposal.label(),
                format!("({} votes)", proposal.vote_count).dimmed()
            );
            let _ = writeln!(output, "     {}", watercolor!("{}", proposal.url, @BrightBlue));
        }
    }

    output
}

pub fn view(view: &View) {
    print!("{}", format_view(view));
}

pub fn view_json(view: &View) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(view).map_err(CliError::Serialize)?;
    println!("{json}");
    Ok(())
}

/// reports an error to stderr
pub fn error(error: &CliError) {
    watercolor::output_error!("Error: {error}", @BrightRed);
    if let Some(hint) = error.to_hint() {
        watercolor::output_error!("Hint: {hint}", @BrightBlue);
    }
}

pub fn opened(url: &str) {
    watercolor::output!("🔗 opened {url}", @BrightBlue);
}

pub fn goodbye() {
    watercolor::output!("\n👋 See you next time!", @BrightBlue);
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::{
        api::types::AuctionStatus,
        view::{AuctionView, ProposalLink},
    };

    fn proposal(id: u64, title: &str, vote_count: f64) -> ProposalLink {
        ProposalLink {
            id,
            title: title.to_owned(),
            vote_count,
            url: format!("https://prop.house/nouns-dao/round-5/{id}"),
        }
    }

    #[test]
    fn text_output() {
        colored::control::set_override(false);

        let view = View {
            status: AuctionStatus::Voting,
            hint: "Select Open to view open rounds.",
            loading: false,
            auctions: vec![
                AuctionView {
                    id: 1,
                    community: "Nouns DAO".to_owned(),
                    title: "Round 5".to_owned(),
                    proposals: Some(vec![proposal(14, "Chairs", 9.5), proposal(12, "Lamps", 2.0)]),
                },
                AuctionView {
                    id: 2,
                    community: "Lil Nouns".to_owned(),
                    title: "Small Grants".to_owned(),
                    proposals: Some(Vec::new()),
                },
                AuctionView {
                    id: 3,
                    community: "Gnars".to_owned(),
                    title: "Empty Round".to_owned(),
                    proposals: None,
                },
            ],
        };

        insta::assert_snapshot!(format_view(&view), @r###"
        Voting auctions
        Select Open to view open rounds.

        Nouns DAO
        Round 5
        Props
          1. #14 Chairs (9.5 votes)
             https://prop.house/nouns-dao/round-5/14
          2. #12 Lamps (2 votes)
             https://prop.house/nouns-dao/round-5/12

        Lil Nouns
        Small Grants
        Props
          no props match the filters

        Gnars
        Empty Round
        "###);
    }

    #[test]
    fn text_output_without_auctions() {
        colored::control::set_override(false);

        let view = View {
            status: AuctionStatus::Open,
            hint: "Select Voting to view props.",
            loading: false,
            auctions: Vec::new(),
        };

        insta::assert_snapshot!(format_view(&view), @r###"
        Open auctions
        Select Voting to view props.

        no open auctions right now
        "###);
    }
}
