use crate::commands::Command;
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Options {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub struct Global {
    /// Sets verbosity level. Can be specified multiple times to increase the verbosity
    /// of this program.
    #[clap(long = "verbose", short, global(true), action(clap::ArgAction::Count))]
    pub verbosity: u8,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_counts_flags() {
        let options = Options::parse_from(["cardfetch", "-vv", "list"]);
        assert_eq!(options.global.verbosity, 2);
        assert!(matches!(options.command, Command::List(_)));
    }
}
