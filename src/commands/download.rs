use std::io;

use clap::Args;
use log::debug;

use crate::{
    card_host::HttpCardHost,
    commands::CardSelection,
    downloader::{Downloader, Summary},
    options::Global,
};

#[derive(Debug, Args)]
pub struct DownloadOptions {
    #[command(flatten)]
    pub selection: CardSelection,
}

pub async fn download(_: Global, options: DownloadOptions) -> anyhow::Result<Summary> {
    let cards = options.selection.cards();
    let output_dir = options.selection.resolved_output_dir()?;
    debug!(
        "downloading {} card(s) into {}",
        cards.len(),
        output_dir.display()
    );

    let host = HttpCardHost::new(options.selection.url_template);
    let downloader = Downloader::new(host, output_dir);

    let summary = downloader.download_all(&cards, &mut io::stdout()).await?;

    Ok(summary)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;
    use crate::{card_host::UrlTemplate, card_name::CardName};

    fn tiny_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(1, 1))
            .write_to(
                &mut io::Cursor::new(&mut bytes),
                image::ImageOutputFormat::Png,
            )
            .unwrap();
        bytes
    }

    fn options(
        server: &mockito::ServerGuard,
        output_dir: PathBuf,
        cards: &[&str],
    ) -> DownloadOptions {
        DownloadOptions {
            selection: CardSelection {
                cards: cards.iter().map(|name| CardName::new(*name)).collect(),
                full_deck: false,
                output_dir,
                url_template: UrlTemplate::new(format!(
                    "{}/sites/default/files/styles/medium/public/cards-{{card_name}}.png",
                    server.url()
                ))
                .unwrap(),
            },
        }
    }

    #[tokio::test]
    async fn downloads_over_http_and_continues_past_404() {
        let mut server = mockito::Server::new_async().await;
        let spades = server
            .mock(
                "GET",
                "/sites/default/files/styles/medium/public/cards-king_of_spades.png",
            )
            .with_status(200)
            .with_body(tiny_png())
            .create_async()
            .await;
        let hearts = server
            .mock(
                "GET",
                "/sites/default/files/styles/medium/public/cards-king_of_hearts.png",
            )
            .with_status(404)
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("cards");

        let summary = download(
            Global { verbosity: 0 },
            options(&server, output_dir.clone(), &[]),
        )
        .await
        .unwrap();

        spades.assert_async().await;
        hearts.assert_async().await;

        assert_eq!(summary.saved, vec![output_dir.join("king_of_spades.png")]);
        assert_eq!(summary.rejected.len(), 1);
        assert!(image::open(output_dir.join("king_of_spades.png")).is_ok());
        assert!(!output_dir.join("king_of_hearts.png").exists());
    }
}
