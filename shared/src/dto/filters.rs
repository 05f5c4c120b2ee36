use serde::{Deserialize, Serialize};

/// Roster position, as the backend spells it (`"QB"`, `"RB"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    CB,
    S,
    K,
    P,
}

impl Position {
    pub fn variants() -> &'static [Position] {
        &[
            Position::QB,
            Position::RB,
            Position::WR,
            Position::TE,
            Position::OL,
            Position::DL,
            Position::LB,
            Position::CB,
            Position::S,
            Position::K,
            Position::P,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
            Position::K => "K",
            Position::P => "P",
        }
    }

    /// Human-readable option text for the position dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Position::QB => "Quarterback (QB)",
            Position::RB => "Running Back (RB)",
            Position::WR => "Wide Receiver (WR)",
            Position::TE => "Tight End (TE)",
            Position::OL => "Offensive Line (OL)",
            Position::DL => "Defensive Line (DL)",
            Position::LB => "Linebacker (LB)",
            Position::CB => "Cornerback (CB)",
            Position::S => "Safety (S)",
            Position::K => "Kicker (K)",
            Position::P => "Punter (P)",
        }
    }

    /// Parses a dropdown value; the empty string means "no constraint".
    pub fn from_value(value: &str) -> Option<Position> {
        Position::variants()
            .iter()
            .copied()
            .find(|p| p.as_str() == value)
    }
}

/// Game classification on the wire (`"regular"`, `"bowl"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Regular,
    Bowl,
    Playoff,
    Conference,
    NonConference,
}

impl GameType {
    pub fn variants() -> &'static [GameType] {
        &[
            GameType::Regular,
            GameType::Bowl,
            GameType::Playoff,
            GameType::Conference,
            GameType::NonConference,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Regular => "regular",
            GameType::Bowl => "bowl",
            GameType::Playoff => "playoff",
            GameType::Conference => "conference",
            GameType::NonConference => "non-conference",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameType::Regular => "Regular Season",
            GameType::Bowl => "Bowl Game",
            GameType::Playoff => "Playoff",
            GameType::Conference => "Conference Game",
            GameType::NonConference => "Non-Conference",
        }
    }

    pub fn from_value(value: &str) -> Option<GameType> {
        GameType::variants()
            .iter()
            .copied()
            .find(|g| g.as_str() == value)
    }
}

/// Stat category filter. Collected by the form but not part of the
/// search wire contract; the backend never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Defense,
    SpecialTeams,
}

impl StatCategory {
    pub fn variants() -> &'static [StatCategory] {
        &[
            StatCategory::Passing,
            StatCategory::Rushing,
            StatCategory::Receiving,
            StatCategory::Defense,
            StatCategory::SpecialTeams,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::Passing => "passing",
            StatCategory::Rushing => "rushing",
            StatCategory::Receiving => "receiving",
            StatCategory::Defense => "defense",
            StatCategory::SpecialTeams => "special-teams",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Passing => "Passing",
            StatCategory::Rushing => "Rushing",
            StatCategory::Receiving => "Receiving",
            StatCategory::Defense => "Defense",
            StatCategory::SpecialTeams => "Special Teams",
        }
    }

    pub fn from_value(value: &str) -> Option<StatCategory> {
        StatCategory::variants()
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
    }
}
