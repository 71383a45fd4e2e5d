mod card_host;
mod card_name;
mod commands;
mod deck;
mod downloader;
mod options;

use std::{env, panic, process};

use anyhow::Result;
use backtrace::Backtrace;
use clap::Parser;
use tokio::signal;

use crate::commands::Command;
use crate::options::Options;

async fn run(options: Options) -> Result<(), anyhow::Error> {
    match options.command {
        Command::Download(sub_options) => {
            let summary = commands::download(options.global, sub_options).await?;
            log::debug!(
                "saved {} card(s), {} rejected",
                summary.saved.len(),
                summary.rejected.len()
            );
        }
        Command::List(sub_options) => commands::list(options.global, sub_options).await?,
    }

    Ok(())
}

fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "info,cardfetch=debug",
        2 => "info,cardfetch=trace",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() {
    panic::set_hook(Box::new(|panic_info| {
        // PanicInfo's payload is usually a &'static str or String.
        // See: https://doc.rust-lang.org/beta/std/panic/struct.PanicInfo.html#method.payload
        let message = match panic_info.payload().downcast_ref::<&str>() {
            Some(&message) => message.to_string(),
            None => match panic_info.payload().downcast_ref::<String>() {
                Some(message) => message.clone(),
                None => "<no message>".to_string(),
            },
        };

        eprintln!("cardfetch crashed!");
        eprintln!("This is probably a cardfetch bug.");
        eprintln!();
        eprintln!(
            "Please consider filing an issue: {}/issues",
            env!("CARGO_PKG_REPOSITORY")
        );
        eprintln!();
        eprintln!("If you can reproduce this crash, try adding the -v, -vv, or -vvv flags.");
        eprintln!();
        eprintln!("Details: {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!("in file {} on line {}", location.file(), location.line());
        }

        // The backtrace crate does not look at RUST_BACKTRACE on its own.
        let should_backtrace = env::var("RUST_BACKTRACE")
            .map(|var| var == "1")
            .unwrap_or(false);

        if should_backtrace {
            eprintln!("{:?}", Backtrace::new());
        } else {
            eprintln!(
                "note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace."
            );
        }

        process::exit(1);
    }));

    let options = Options::parse();

    let log_env =
        env_logger::Env::default().default_filter_or(log_filter(options.global.verbosity));

    env_logger::Builder::from_env(log_env)
        .format_module_path(false)
        .format_timestamp(None)
        // Indent following lines equal to the log level label, like `[ERROR] `
        .format_indent(Some(8))
        .init();

    tokio::select! {
        result = run(options) => {
            if let Err(err) = result {
                log::error!("command exited with error {err:?}");
                process::exit(1);
            }
        },
        _ = signal::ctrl_c() => {
            log::info!("caught ctrl-c, exiting now");
            process::exit(0);
        }
    }
}
