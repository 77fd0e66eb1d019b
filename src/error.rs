use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Invalid deck file: {0}")]
    InvalidDeck(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
