//! Card deck model
//!
//! A deck is an ordered, immutable list of cards. The carousel never
//! inserts or removes cards; the deck is fixed for the lifetime of the
//! viewer. Decks load from a JSON file (an array of `{title, body}`
//! objects) or fall back to a built-in sample so the viewer runs without
//! arguments.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::DeckError;

/// One card in the deck.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
}

/// Ordered collection of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Load a deck from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path)?;
        let cards: Vec<Card> =
            serde_json::from_str(&contents).map_err(|e| DeckError::InvalidDeck(e.to_string()))?;
        Ok(Self { cards })
    }

    /// Built-in deck shown when no file is given.
    pub fn sample() -> Self {
        let cards = [
            ("Welcome", vec!["A horizontal carousel", "of fixed-width cards."]),
            ("Navigate", vec!["Left/Right or h/l", "move one card at a time."]),
            ("Click", vec!["Click the arrows", "or a dot below."]),
            ("Scroll", vec!["Wheel over the track", "scrolls freely; the", "dots follow along."]),
            ("Resize", vec!["Shrink the terminal:", "the next arrow greys", "out when no page is", "left."]),
            ("Decks", vec!["Pass a JSON file:", "deckview cards.json"]),
        ];
        Self {
            cards: cards
                .into_iter()
                .map(|(title, body)| Card {
                    title: title.to_string(),
                    body: body.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}
