use serde::{Deserialize, Serialize};

/// One player-game record as the backend returns it. Field casing
/// mirrors the backend JSON, including the `*_TDs` spellings.
///
/// `position` and `game_type` stay raw wire strings rather than the
/// dropdown enums: a row carrying a value the dropdowns do not list
/// must still parse and render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRowDto {
    pub id: u64,
    pub player_name: String,
    pub position: String,
    pub opponent: String,
    /// ISO date of the game, rendered client-side.
    pub date: String,
    pub game_type: String,
    pub passing_yards: u32,
    #[serde(rename = "passing_TDs")]
    pub passing_tds: u32,
    pub rushing_yards: u32,
    #[serde(rename = "rushing_TDs")]
    pub rushing_tds: u32,
    pub receptions: u32,
    pub receiving_yards: u32,
    #[serde(rename = "receiving_TDs")]
    pub receiving_tds: u32,
    pub tackles: u32,
    /// Half-sacks are credited as 0.5.
    pub sacks: f64,
    pub interceptions: u32,
}

/// Body of `POST /search`. Empty string means "no constraint"; that is
/// the backend's convention, so unset dropdowns serialize as `""`
/// rather than being omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSearchRequest {
    pub player_name: String,
    pub position: String,
    pub season: String,
    pub opponent: String,
    pub game_type: String,
}

/// One page of search results plus the total match count across all
/// pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSearchResponse {
    pub data: Vec<StatRowDto>,
    pub total: u64,
}
