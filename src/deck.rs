//! Names of the cards in a standard 52-card deck, in the `<rank>_of_<suit>`
//! form the card art is published under.

use crate::card_name::CardName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Number(u8),
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn all() -> impl Iterator<Item = Rank> {
        (2..=10)
            .map(Rank::Number)
            .chain([Rank::Jack, Rank::Queen, Rank::King, Rank::Ace])
    }

    fn label(self) -> String {
        match self {
            Rank::Number(value) => value.to_string(),
            Rank::Jack => "jack".to_owned(),
            Rank::Queen => "queen".to_owned(),
            Rank::King => "king".to_owned(),
            Rank::Ace => "ace".to_owned(),
        }
    }
}

pub fn card_name(rank: Rank, suit: Suit) -> CardName {
    CardName::new(format!("{}_of_{}", rank.label(), suit.as_str()))
}

/// Every card in the deck, grouped by suit.
pub fn standard_deck() -> Vec<CardName> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| card_name(rank, suit)))
        .collect()
}

/// The cards fetched when nothing else is asked for.
pub fn default_cards() -> Vec<CardName> {
    vec![
        card_name(Rank::King, Suit::Spades),
        card_name(Rank::King, Suit::Hearts),
    ]
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn defaults_are_the_two_kings() {
        let names: Vec<String> = default_cards().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["king_of_spades", "king_of_hearts"]);
    }

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), 52);

        assert_eq!(deck[0].as_str(), "2_of_spades");
        assert_eq!(deck[8].as_str(), "10_of_spades");
        assert_eq!(deck[12].as_str(), "ace_of_spades");
        assert_eq!(deck[51].as_str(), "ace_of_diamonds");
    }
}
