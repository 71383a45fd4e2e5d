use std::{convert::Infallible, fmt, str::FromStr};

use serde::Serialize;

/// Identifier for a single card image, like `king_of_spades`. The same string
/// is spliced into the remote URL and used as the base of the output file
/// name, so it is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name this card is stored under inside the output directory.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for CardName {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_name_appends_png() {
        let name = CardName::new("king_of_spades");
        assert_eq!(name.file_name(), "king_of_spades.png");
    }

    #[test]
    fn parse_keeps_name_verbatim() {
        let name: CardName = "Weird Name/../x".parse().unwrap();
        assert_eq!(name.as_str(), "Weird Name/../x");
        assert_eq!(name.to_string(), "Weird Name/../x");
    }
}
