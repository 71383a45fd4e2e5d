use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{card_name::CardName, commands::CardSelection, options::Global};

#[derive(Debug, Args)]
pub struct ListOptions {
    #[command(flatten)]
    pub selection: CardSelection,

    /// Print the listing as a JSON array instead of tab-separated lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PlannedCard {
    pub name: CardName,
    pub url: String,
    pub path: PathBuf,
}

pub fn plan(selection: &CardSelection) -> Result<Vec<PlannedCard>> {
    let output_dir = selection.resolved_output_dir()?;

    Ok(selection
        .cards()
        .into_iter()
        .map(|name| PlannedCard {
            url: selection.url_template.url_for(&name),
            path: output_dir.join(name.file_name()),
            name,
        })
        .collect())
}

pub async fn list(_: Global, options: ListOptions) -> Result<()> {
    let planned = plan(&options.selection)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_listing(&planned, options.json, &mut out)?;
    out.flush()?;

    Ok(())
}

fn write_listing<W: Write>(planned: &[PlannedCard], json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, planned)?;
        writeln!(out)?;
    } else {
        for card in planned {
            writeln!(out, "{}\t{}\t{}", card.name, card.url, card.path.display())?;
        }
    }

    Ok(())
}
