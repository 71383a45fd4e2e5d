mod download;
mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use resolve_path::PathResolveExt;

use crate::{
    card_host::UrlTemplate,
    card_name::CardName,
    deck::{default_cards, standard_deck},
};

pub use download::*;
pub use list::*;

pub const DEFAULT_OUTPUT_DIR: &str = "public/images/cards";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download card images and store them in the output directory. Prints
    /// one line per card saying whether it was downloaded.
    Download(DownloadOptions),

    /// Print where each card would be fetched from and saved to, without
    /// touching the network.
    List(ListOptions),
}

/// Which cards to work on and where they come from and go to. Shared by
/// every subcommand.
#[derive(Debug, Args)]
pub struct CardSelection {
    /// Names of the cards to fetch, like `king_of_spades`. Defaults to the
    /// king of spades and the king of hearts. A name given more than once is
    /// only downloaded once.
    pub cards: Vec<CardName>,

    /// Include every card of a standard 52-card deck.
    #[clap(long)]
    pub full_deck: bool,

    /// Directory to write the images into. Created if it does not exist.
    #[clap(long, env("CARDFETCH_OUTPUT_DIR"), default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// URL to fetch each card from, with `{card_name}` standing in for the
    /// card's name.
    #[clap(
        long,
        env("CARDFETCH_URL_TEMPLATE"),
        default_value = crate::card_host::DEFAULT_URL_TEMPLATE
    )]
    pub url_template: UrlTemplate,
}

impl CardSelection {
    /// The cards to process, in order, with repeats dropped.
    pub fn cards(&self) -> Vec<CardName> {
        let mut requested = self.cards.clone();

        if self.full_deck {
            requested.extend(standard_deck());
        }

        if requested.is_empty() {
            requested = default_cards();
        }

        let mut cards: Vec<CardName> = Vec::with_capacity(requested.len());
        for card in requested {
            if !cards.contains(&card) {
                cards.push(card);
            }
        }

        cards
    }

    pub fn resolved_output_dir(&self) -> std::io::Result<PathBuf> {
        resolve(&self.output_dir)
    }
}

fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    Ok(path.try_resolve()?.into_owned())
}
