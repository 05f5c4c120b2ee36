use serde::{Deserialize, Serialize};

/// One entry of the player directory. The listing endpoint returns
/// richer objects, but only the name feeds the autocomplete, so
/// everything else is left to serde's unknown-field handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub player_name: String,
}

/// Response envelope of `GET /players`: the full, unpaginated
/// directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerListResponse {
    pub data: Vec<PlayerDto>,
}
