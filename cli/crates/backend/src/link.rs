//! Canonical Prop House URLs for props.
//!
//! Every whitespace character of the community name and of the auction title
//! becomes a hyphen and the result is lowercased. No other character is
//! escaped, so names with slashes, `?` or `#` produce links that Prop House
//! may not resolve.

use crate::api::consts::LINK_BASE_URL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();

        if base.ends_with('/') {
            base.pop();
        }

        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn build(&self, community_name: &str, auction_title: &str, proposal_id: u64) -> String {
        format!(
            "{}/{}/{}/{proposal_id}",
            self.base,
            slug(community_name),
            slug(auction_title)
        )
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(LINK_BASE_URL)
    }
}

/// Builds a link on `https://prop.house`
pub fn build_url(community_name: &str, auction_title: &str, proposal_id: u64) -> String {
    LinkBuilder::default().build(community_name, auction_title, proposal_id)
}

/// The whitespace class of browser regular expressions (`\s`): Unicode
/// `White_Space` without NEL (U+0085), plus the byte order mark (U+FEFF).
fn is_link_whitespace(character: char) -> bool {
    match character {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        character => character.is_whitespace(),
    }
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|character| if is_link_whitespace(character) { '-' } else { character })
        .collect::<String>()
        .to_lowercase()
}
