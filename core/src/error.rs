use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Bounds corners are not in south-west/north-east order")]
    InvalidBounds,
    #[error("Cannot pick a location from an empty pool")]
    EmptyPool,
}

pub type Result<T> = core::result::Result<T, GameError>;
