//! Turns card names into image files on disk.

use std::{
    io::{self, Cursor, Write},
    path::PathBuf,
};

use fs_err as fs;
use image::{DynamicImage, ImageError, ImageOutputFormat};
use log::{debug, info, warn};
use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    card_host::{CardHost, FetchError, FetchResponse},
    card_name::CardName,
};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("card '{card}' was not a readable image")]
    Decode {
        card: CardName,
        #[source]
        source: ImageError,
    },

    #[error("card '{card}' could not be re-encoded")]
    Encode {
        card: CardName,
        #[source]
        source: ImageError,
    },

    #[error("card '{card}' could not be written to disk")]
    Write {
        card: CardName,
        #[source]
        source: io::Error,
    },

    #[error("could not create output directory")]
    OutputDir(#[source] io::Error),

    #[error("could not report progress")]
    Report(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    Saved(PathBuf),
    Rejected(StatusCode),
}

#[derive(Debug, Default)]
pub struct Summary {
    pub saved: Vec<PathBuf>,
    pub rejected: Vec<(CardName, StatusCode)>,
}

pub struct Downloader<H> {
    host: H,
    output_dir: PathBuf,
}

impl<H: CardHost + Sync> Downloader<H> {
    pub fn new(host: H, output_dir: PathBuf) -> Self {
        Self { host, output_dir }
    }

    pub fn path_for(&self, card: &CardName) -> PathBuf {
        self.output_dir.join(card.file_name())
    }

    /// Creates the output directory along with any missing parents. Calling
    /// this when the directory already exists is fine.
    pub fn prepare_output_dir(&self) -> Result<(), DownloadError> {
        fs::create_dir_all(&self.output_dir).map_err(DownloadError::OutputDir)
    }

    /// Fetches one card and, if the host had it, writes it out. A non-200
    /// answer is not an error; anything else going wrong is.
    pub async fn download_card(&self, card: &CardName) -> Result<CardOutcome, DownloadError> {
        let body = match self.host.fetch(card).await? {
            FetchResponse::Ok(body) => body,
            FetchResponse::Rejected(status) => {
                warn!("host answered {} for card {}", status, card);
                return Ok(CardOutcome::Rejected(status));
            }
        };

        let encoded = reencode(card, &body)?;

        let path = self.path_for(card);
        fs::write(&path, encoded).map_err(|source| DownloadError::Write {
            card: card.clone(),
            source,
        })?;

        debug!("wrote {}", path.display());

        Ok(CardOutcome::Saved(path))
    }

    /// Downloads every card in order, writing one line per card to `report`.
    /// Stops at the first card that fails with an error; cards after it are
    /// never requested.
    pub async fn download_all<W: Write>(
        &self,
        cards: &[CardName],
        report: &mut W,
    ) -> Result<Summary, DownloadError> {
        self.prepare_output_dir()?;

        let mut summary = Summary::default();

        for card in cards {
            match self.download_card(card).await? {
                CardOutcome::Saved(path) => {
                    writeln!(report, "Downloaded {}", card).map_err(DownloadError::Report)?;
                    summary.saved.push(path);
                }
                CardOutcome::Rejected(status) => {
                    writeln!(report, "Failed to download {}", card)
                        .map_err(DownloadError::Report)?;
                    summary.rejected.push((card.clone(), status));
                }
            }
        }

        info!(
            "{} card(s) saved to {}, {} failed",
            summary.saved.len(),
            self.output_dir.display(),
            summary.rejected.len()
        );

        Ok(summary)
    }
}

/// Decodes the body, whatever format it is in, and encodes it as PNG to
/// match the `.png` name it is stored under.
fn reencode(card: &CardName, body: &[u8]) -> Result<Vec<u8>, DownloadError> {
    let image = image::load_from_memory(body).map_err(|source| DownloadError::Decode {
        card: card.clone(),
        source,
    })?;
    debug!("decoded {} as {:?}", card, image.color());

    // PNG has no float pixel types, so HDR and EXR bodies get tone-clamped to 8 bits.
    let image = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba8(image.to_rgba8())
        }
        other => other,
    };

    let mut encoded = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Png)
        .map_err(|source| DownloadError::Encode {
            card: card.clone(),
            source,
        })?;

    Ok(encoded)
}
