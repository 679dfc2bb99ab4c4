use thiserror;

/// The Result type for core48.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("board size must be at least 2, got {size}")]
    InvalidConfiguration { size: usize },
}
