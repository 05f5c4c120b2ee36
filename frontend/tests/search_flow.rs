//! Reducer-level scenario tests for the dashboard search flow. These
//! run on the host; browser-side behavior is covered by wasm tests.

#![cfg(not(target_arch = "wasm32"))]

use std::rc::Rc;

use pretty_assertions::assert_eq;
use yew::Reducible;

use frontend::state::{filter_suggestions, DashboardAction, DashboardState, DEFAULT_PAGE_SIZE};
use shared::{StatSearchRequest, StatSearchResponse};

fn dispatch(state: DashboardState, action: DashboardAction) -> DashboardState {
    (*Rc::new(state).reduce(action)).clone()
}

fn page_of(total: u64, player_names: &[&str]) -> StatSearchResponse {
    let rows = player_names
        .iter()
        .map(|name| {
            serde_json::from_str(&format!(
                r#"{{
                    "id": 1, "player_name": "{name}", "position": "QB",
                    "opponent": "Miami", "date": "2023-11-11",
                    "game_type": "regular",
                    "passing_yards": 100, "passing_TDs": 1,
                    "rushing_yards": 0, "rushing_TDs": 0,
                    "receptions": 0, "receiving_yards": 0,
                    "receiving_TDs": 0, "tackles": 0, "sacks": 0.0,
                    "interceptions": 0
                }}"#
            ))
            .unwrap()
        })
        .collect();
    StatSearchResponse { data: rows, total }
}

#[test]
fn first_render_searches_the_first_page_unconstrained() {
    let state = DashboardState::default();
    assert_eq!(state.cursor.page, 0);
    assert_eq!(state.cursor.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(state.criteria.to_request(), StatSearchRequest::default());
}

#[test]
fn a_full_search_cycle_replaces_the_result_page() {
    let state = DashboardState::default();
    let state = dispatch(state, DashboardAction::SearchStarted { request_id: 1 });
    assert!(state.loading);

    let state = dispatch(
        state,
        DashboardAction::SearchLoaded {
            request_id: 1,
            response: page_of(7, &["Jordan Travis", "Trey Benson", "Keon Coleman"]),
        },
    );
    assert!(!state.loading);
    assert_eq!(state.rows.len(), 3);
    assert_eq!(state.total, 7);
    assert_eq!(state.page_label(), "Page 1 of 3");
}

#[test]
fn a_failed_fetch_keeps_the_last_known_good_page() {
    let state = dispatch(
        dispatch(
            DashboardState::default(),
            DashboardAction::SearchStarted { request_id: 1 },
        ),
        DashboardAction::SearchLoaded {
            request_id: 1,
            response: page_of(7, &["Jordan Travis"]),
        },
    );

    let state = dispatch(state, DashboardAction::SearchStarted { request_id: 2 });
    let state = dispatch(state, DashboardAction::SearchFailed { request_id: 2 });

    assert!(!state.loading);
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].player_name, "Jordan Travis");
    assert_eq!(state.total, 7);
}

#[test]
fn overlapping_requests_resolve_to_the_latest_issued() {
    // Two submits in quick succession; the slower, earlier response
    // lands last but must not win.
    let state = dispatch(
        DashboardState::default(),
        DashboardAction::SearchStarted { request_id: 1 },
    );
    let state = dispatch(state, DashboardAction::SearchStarted { request_id: 2 });

    let state = dispatch(
        state,
        DashboardAction::SearchLoaded {
            request_id: 2,
            response: page_of(2, &["Trey Benson", "Keon Coleman"]),
        },
    );
    let state = dispatch(
        state,
        DashboardAction::SearchLoaded {
            request_id: 1,
            response: page_of(1, &["Jordan Travis"]),
        },
    );

    assert_eq!(state.total, 2);
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.rows[0].player_name, "Trey Benson");
}

#[test]
fn paging_walks_forward_and_back_within_bounds() {
    let state = dispatch(
        dispatch(
            DashboardState::default(),
            DashboardAction::SearchStarted { request_id: 1 },
        ),
        DashboardAction::SearchLoaded {
            request_id: 1,
            response: page_of(7, &["Jordan Travis", "Trey Benson", "Keon Coleman"]),
        },
    );

    let state = dispatch(state, DashboardAction::GoToNextPage);
    let state = dispatch(state, DashboardAction::GoToNextPage);
    assert_eq!(state.cursor.page, 2);
    assert_eq!(state.page_label(), "Page 3 of 3");

    // Already on the last page of 7 rows in threes.
    let state = dispatch(state, DashboardAction::GoToNextPage);
    assert_eq!(state.cursor.page, 2);

    let state = dispatch(state, DashboardAction::GoToPreviousPage);
    let state = dispatch(state, DashboardAction::GoToPreviousPage);
    let state = dispatch(state, DashboardAction::GoToPreviousPage);
    assert_eq!(state.cursor.page, 0);
}

#[test]
fn typing_then_selecting_a_suggestion_settles_the_name_field() {
    let directory = vec![
        "Travis".to_string(),
        "Trey".to_string(),
        "Amari".to_string(),
    ];

    let state = dispatch(
        DashboardState::default(),
        DashboardAction::SetPlayerName("tr".into()),
    );
    let state = dispatch(
        state,
        DashboardAction::SuggestionsComputed(filter_suggestions(&directory, "tr")),
    );
    assert_eq!(state.suggestions, vec!["Travis", "Trey"]);

    let state = dispatch(state, DashboardAction::SelectSuggestion("Travis".into()));
    assert_eq!(state.criteria.player_name, "Travis");
    assert!(state.suggestions.is_empty());
}

#[test]
fn clearing_the_name_field_drops_suggestions_without_a_fetch() {
    let mut seeded = DashboardState::default();
    seeded.suggestions = vec!["Travis".into()];

    let state = dispatch(seeded, DashboardAction::SetPlayerName(String::new()));
    let state = dispatch(state, DashboardAction::ClearSuggestions);

    assert!(state.suggestions.is_empty());
    // No fetch was started on the empty keystroke.
    assert!(!state.loading);
    assert_eq!(state.last_issued, 0);
}

#[test]
fn reset_filters_issues_no_request() {
    let state = dispatch(
        DashboardState::default(),
        DashboardAction::SetPlayerName("Travis".into()),
    );
    let state = dispatch(state, DashboardAction::ResetFilters);

    assert_eq!(state.criteria.to_request(), StatSearchRequest::default());
    assert!(!state.loading);
    assert_eq!(state.last_issued, 0);
}
