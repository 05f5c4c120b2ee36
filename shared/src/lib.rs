pub mod dto {
    pub mod common;
    pub mod filters;
    pub mod player;
    pub mod stats;
}

pub mod error;

// Re-export commonly used items
pub use error::ApiError;

pub use dto::{
    common::ErrorResponse,
    filters::{GameType, Position, StatCategory},
    player::{PlayerDto, PlayerListResponse},
    stats::{StatRowDto, StatSearchRequest, StatSearchResponse},
};
