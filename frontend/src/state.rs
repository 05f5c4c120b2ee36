use std::rc::Rc;

use yew::prelude::*;

use shared::{GameType, Position, StatCategory, StatRowDto, StatSearchRequest, StatSearchResponse};

/// Results per page. Matches the backend's `limit` default.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// The six search constraints. Empty string / `None` means
/// unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub player_name: String,
    pub position: Option<Position>,
    pub season: String,
    pub opponent: String,
    pub game_type: Option<GameType>,
    pub stat_category: Option<StatCategory>,
}

impl FilterCriteria {
    /// Builds the `POST /search` body. The stat category filter stays
    /// client-side; the wire contract has no field for it.
    pub fn to_request(&self) -> StatSearchRequest {
        StatSearchRequest {
            player_name: self.player_name.clone(),
            position: self.position.map(|p| p.as_str()).unwrap_or("").to_string(),
            season: self.season.clone(),
            opponent: self.opponent.clone(),
            game_type: self.game_type.map(|g| g.as_str()).unwrap_or("").to_string(),
        }
    }
}

/// Zero-based page index plus page size. On the wire the index travels
/// as the `offset` query parameter; see `api::stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything the dashboard renders from, updated only through
/// [`DashboardAction`] dispatches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub criteria: FilterCriteria,
    pub cursor: PageCursor,
    pub rows: Vec<StatRowDto>,
    pub total: u64,
    pub loading: bool,
    pub suggestions: Vec<String>,
    /// Id of the most recently issued search. Responses carrying an
    /// older id are dropped so that overlapping requests cannot let an
    /// earlier response overwrite a later one.
    pub last_issued: u64,
}

impl DashboardState {
    pub fn total_pages(&self) -> u64 {
        (self.total + self.cursor.page_size as u64 - 1) / self.cursor.page_size as u64
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.cursor.page + 1, self.total_pages())
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.page > 0
    }

    pub fn has_next(&self) -> bool {
        ((self.cursor.page + 1) * self.cursor.page_size) < self.total as usize
    }
}

/// State transitions of the dashboard. Filter setters carry no side
/// effects; fetch lifecycle actions are dispatched from the async
/// handlers in `pages::dashboard`.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetPlayerName(String),
    SetPosition(Option<Position>),
    SetSeason(String),
    SetOpponent(String),
    SetGameType(Option<GameType>),
    SetStatCategory(Option<StatCategory>),
    ResetFilters,
    GoToPreviousPage,
    GoToNextPage,
    SearchStarted { request_id: u64 },
    SearchLoaded { request_id: u64, response: StatSearchResponse },
    SearchFailed { request_id: u64 },
    SuggestionsComputed(Vec<String>),
    ClearSuggestions,
    SelectSuggestion(String),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::SetPlayerName(value) => next.criteria.player_name = value,
            DashboardAction::SetPosition(value) => next.criteria.position = value,
            DashboardAction::SetSeason(value) => next.criteria.season = value,
            DashboardAction::SetOpponent(value) => next.criteria.opponent = value,
            DashboardAction::SetGameType(value) => next.criteria.game_type = value,
            DashboardAction::SetStatCategory(value) => next.criteria.stat_category = value,
            DashboardAction::ResetFilters => next.criteria = FilterCriteria::default(),
            DashboardAction::GoToPreviousPage => {
                next.cursor.page = next.cursor.page.saturating_sub(1);
            }
            DashboardAction::GoToNextPage => {
                if next.has_next() {
                    next.cursor.page += 1;
                }
            }
            DashboardAction::SearchStarted { request_id } => {
                next.loading = true;
                next.last_issued = next.last_issued.max(request_id);
            }
            DashboardAction::SearchLoaded { request_id, response } => {
                if request_id == next.last_issued {
                    // Replace wholesale; rows come back in server order
                    // and are never re-sorted or re-filtered here.
                    next.rows = response.data;
                    next.total = response.total;
                    next.loading = false;
                }
            }
            DashboardAction::SearchFailed { request_id } => {
                // Prior rows stay; the view keeps its last known-good
                // page.
                if request_id == next.last_issued {
                    next.loading = false;
                }
            }
            DashboardAction::SuggestionsComputed(names) => next.suggestions = names,
            DashboardAction::ClearSuggestions => next.suggestions.clear(),
            DashboardAction::SelectSuggestion(name) => {
                next.criteria.player_name = name;
                next.suggestions.clear();
            }
        }
        next.into()
    }
}

/// Case-insensitive substring match over the directory, preserving
/// server order.
pub fn filter_suggestions(names: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dispatch(state: DashboardState, action: DashboardAction) -> DashboardState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn loaded_state(page: usize, page_size: usize, total: u64) -> DashboardState {
        DashboardState {
            cursor: PageCursor { page, page_size },
            total,
            ..Default::default()
        }
    }

    #[test]
    fn initial_state_points_at_the_first_page() {
        let state = DashboardState::default();
        assert_eq!(state.cursor.page, 0);
        assert_eq!(state.cursor.page_size, DEFAULT_PAGE_SIZE);
        assert!(!state.loading);
        assert!(state.rows.is_empty());
    }

    #[test]
    fn unconstrained_criteria_produce_an_all_empty_request() {
        let request = FilterCriteria::default().to_request();
        assert_eq!(request, shared::StatSearchRequest::default());
    }

    #[test]
    fn constrained_criteria_map_enums_to_wire_values() {
        let criteria = FilterCriteria {
            player_name: "Travis".into(),
            position: Some(Position::QB),
            season: "2023".into(),
            opponent: "Clemson".into(),
            game_type: Some(shared::GameType::NonConference),
            stat_category: Some(shared::StatCategory::Passing),
        };
        let request = criteria.to_request();
        assert_eq!(request.position, "QB");
        assert_eq!(request.game_type, "non-conference");
        // Stat category is collected but never sent.
        assert!(!serde_json::to_string(&request)
            .unwrap()
            .contains("stat_category"));
    }

    #[rstest]
    #[case(0, 3, 7, true)] // pages remain
    #[case(1, 3, 7, true)]
    #[case(2, 3, 7, false)] // last page
    #[case(0, 3, 3, false)] // exactly one page
    #[case(0, 3, 0, false)] // no results
    fn next_page_advances_only_while_rows_remain(
        #[case] page: usize,
        #[case] page_size: usize,
        #[case] total: u64,
        #[case] advances: bool,
    ) {
        let state = loaded_state(page, page_size, total);
        let next = dispatch(state, DashboardAction::GoToNextPage);
        let expected = if advances { page + 1 } else { page };
        assert_eq!(next.cursor.page, expected);
    }

    #[test]
    fn previous_page_floors_at_zero() {
        let state = loaded_state(0, 3, 7);
        let next = dispatch(state, DashboardAction::GoToPreviousPage);
        assert_eq!(next.cursor.page, 0);

        let state = loaded_state(2, 3, 7);
        let next = dispatch(state, DashboardAction::GoToPreviousPage);
        assert_eq!(next.cursor.page, 1);
    }

    #[test]
    fn reset_clears_all_six_fields_and_nothing_else() {
        let mut state = loaded_state(1, 3, 7);
        state.criteria = FilterCriteria {
            player_name: "Travis".into(),
            position: Some(Position::QB),
            season: "2023".into(),
            opponent: "Miami".into(),
            game_type: Some(shared::GameType::Bowl),
            stat_category: Some(shared::StatCategory::Rushing),
        };
        let next = dispatch(state, DashboardAction::ResetFilters);
        assert_eq!(next.criteria, FilterCriteria::default());
        // Reset is not a fetch trigger: cursor and loading untouched.
        assert_eq!(next.cursor.page, 1);
        assert!(!next.loading);
    }

    #[test]
    fn loaded_response_replaces_rows_wholesale() {
        let state = dispatch(
            DashboardState::default(),
            DashboardAction::SearchStarted { request_id: 1 },
        );
        assert!(state.loading);

        let response: StatSearchResponse =
            serde_json::from_str(r#"{"data":[],"total":7}"#).unwrap();
        let state = dispatch(
            state,
            DashboardAction::SearchLoaded { request_id: 1, response },
        );
        assert!(!state.loading);
        assert_eq!(state.total, 7);
    }

    #[test]
    fn failed_search_keeps_prior_rows_and_clears_loading() {
        let mut state = DashboardState::default();
        state.total = 7;
        let state = dispatch(state, DashboardAction::SearchStarted { request_id: 1 });
        let state = dispatch(state, DashboardAction::SearchFailed { request_id: 1 });
        assert!(!state.loading);
        assert_eq!(state.total, 7);
    }

    #[test]
    fn stale_response_does_not_overwrite_a_newer_one() {
        let state = dispatch(
            DashboardState::default(),
            DashboardAction::SearchStarted { request_id: 1 },
        );
        let state = dispatch(state, DashboardAction::SearchStarted { request_id: 2 });

        let fresh: StatSearchResponse =
            serde_json::from_str(r#"{"data":[],"total":9}"#).unwrap();
        let state = dispatch(
            state,
            DashboardAction::SearchLoaded { request_id: 2, response: fresh },
        );

        let stale: StatSearchResponse =
            serde_json::from_str(r#"{"data":[],"total":1}"#).unwrap();
        let state = dispatch(
            state,
            DashboardAction::SearchLoaded { request_id: 1, response: stale },
        );
        assert_eq!(state.total, 9);
    }

    #[test]
    fn page_indicator_for_seven_rows_in_threes() {
        let state = loaded_state(2, 3, 7);
        assert_eq!(state.page_label(), "Page 3 of 3");
        assert!(!state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn suggestions_match_substrings_case_insensitively() {
        let names = vec![
            "Travis".to_string(),
            "Trey".to_string(),
            "Amari".to_string(),
        ];
        assert_eq!(filter_suggestions(&names, "tr"), vec!["Travis", "Trey"]);
        assert_eq!(filter_suggestions(&names, "MAR"), vec!["Amari"]);
        assert!(filter_suggestions(&names, "zz").is_empty());
    }

    #[test]
    fn selecting_a_suggestion_fills_the_name_and_clears_the_list() {
        let mut state = DashboardState::default();
        state.suggestions = vec!["Travis".into(), "Trey".into()];
        let state = dispatch(state, DashboardAction::SelectSuggestion("Trey".into()));
        assert_eq!(state.criteria.player_name, "Trey");
        assert!(state.suggestions.is_empty());
    }
}
