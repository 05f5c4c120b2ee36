use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::players::get_player_directory;
use crate::api::stats::search_stats;
use crate::components::pagination::PaginationBar;
use crate::components::stats_table::StatsTable;
use crate::state::{filter_suggestions, DashboardAction, DashboardState};
use shared::{GameType, Position, StatCategory};

/// The search-and-results view. All mutable state lives in one
/// [`DashboardState`] reducer; event handlers dispatch actions and the
/// async fetches complete back into it.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_reducer(DashboardState::default);
    // Monotonic fetch ids; a response is applied only if it carries the
    // most recently issued id.
    let request_seq = use_mut_ref(|| 0u64);

    let perform_search = {
        let state = state.clone();
        let request_seq = request_seq.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            let request_id = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            state.dispatch(DashboardAction::SearchStarted { request_id });

            let request = state.criteria.to_request();
            let page = state.cursor.page;
            let page_size = state.cursor.page_size;
            wasm_bindgen_futures::spawn_local(async move {
                match search_stats(&request, page, page_size).await {
                    Ok(response) => {
                        gloo_console::log!("search returned", response.data.len(), "rows");
                        state.dispatch(DashboardAction::SearchLoaded { request_id, response });
                    }
                    Err(e) => {
                        error!("{}", e);
                        state.dispatch(DashboardAction::SearchFailed { request_id });
                    }
                }
            });
        })
    };

    // Every page change re-fetches, including the initial mount.
    {
        let perform_search = perform_search.clone();
        use_effect_with(state.cursor.page, move |_| {
            perform_search.emit(());
            || ()
        });
    }

    let on_submit = {
        let perform_search = perform_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            perform_search.emit(());
        })
    };

    let on_player_name_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            state.dispatch(DashboardAction::SetPlayerName(value.clone()));

            if value.is_empty() {
                state.dispatch(DashboardAction::ClearSuggestions);
                return;
            }

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_player_directory().await {
                    Ok(names) => {
                        let matches = filter_suggestions(&names, &value);
                        state.dispatch(DashboardAction::SuggestionsComputed(matches));
                    }
                    // Prior suggestions stay; stale but harmless.
                    Err(e) => error!("{}", e),
                }
            });
        })
    };

    let on_position_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetPosition(Position::from_value(
                &select.value(),
            )));
        })
    };

    let on_season_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetSeason(select.value()));
        })
    };

    let on_opponent_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetOpponent(select.value()));
        })
    };

    let on_game_type_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetGameType(GameType::from_value(
                &select.value(),
            )));
        })
    };

    let on_stat_category_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(DashboardAction::SetStatCategory(StatCategory::from_value(
                &select.value(),
            )));
        })
    };

    // Clears the six filter fields only; the next fetch happens on
    // submit or page change, not here.
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(DashboardAction::ResetFilters);
        })
    };

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(DashboardAction::GoToPreviousPage);
        })
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(DashboardAction::GoToNextPage);
        })
    };

    let suggestion_items: Html = state
        .suggestions
        .iter()
        .map(|name| {
            let state = state.clone();
            let chosen = name.clone();
            let on_pick = Callback::from(move |_: MouseEvent| {
                state.dispatch(DashboardAction::SelectSuggestion(chosen.clone()));
            });
            html! {
                <li onclick={on_pick} class="px-4 py-2 hover:bg-gray-200 cursor-pointer">
                    {name}
                </li>
            }
        })
        .collect();

    html! {
        <div class="max-w-7xl mx-auto px-6 py-8">
            <section class="bg-white rounded-lg shadow-md p-6 mb-8">
                <h2 class="text-xl font-semibold text-[#782F40] mb-6 pb-2 border-b-2 border-[#CEB888]">
                    {"Search Players & Games"}
                </h2>

                <form class="grid grid-cols-1 md:grid-cols-3 gap-6" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            {"Player Name"}
                        </label>
                        <div class="relative">
                            <input
                                type="text"
                                value={state.criteria.player_name.clone()}
                                oninput={on_player_name_input}
                                class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-[#782F40] focus:border-transparent"
                                placeholder="Enter player name"
                            />
                            if !state.suggestions.is_empty() {
                                <ul class="absolute bg-white border border-gray-300 mt-1 rounded-md shadow-md w-full max-w-[300px] max-h-48 overflow-y-auto z-10">
                                    {suggestion_items}
                                </ul>
                            }
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            {"Position"}
                        </label>
                        <select
                            value={state.criteria.position.map(|p| p.as_str()).unwrap_or("")}
                            onchange={on_position_change}
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-[#782F40] focus:border-transparent"
                        >
                            <option value="" selected={state.criteria.position.is_none()}>
                                {"All Positions"}
                            </option>
                            {for Position::variants().iter().map(|position| html! {
                                <option
                                    value={position.as_str()}
                                    selected={state.criteria.position == Some(*position)}
                                >
                                    {position.label()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            {"Season"}
                        </label>
                        <select
                            value={state.criteria.season.clone()}
                            onchange={on_season_change}
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-[#782F40] focus:border-transparent"
                        >
                            <option value="" selected={state.criteria.season.is_empty()}>
                                {"All Seasons"}
                            </option>
                            {for SEASONS.iter().map(|season| html! {
                                <option
                                    value={*season}
                                    selected={state.criteria.season == *season}
                                >
                                    {season}
                                </option>
                            })}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            {"Opponent"}
                        </label>
                        <select
                            value={state.criteria.opponent.clone()}
                            onchange={on_opponent_change}
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-[#782F40] focus:border-transparent"
                        >
                            <option value="" selected={state.criteria.opponent.is_empty()}>
                                {"All Opponents"}
                            </option>
                            {for OPPONENTS.iter().map(|opponent| html! {
                                <option
                                    value={*opponent}
                                    selected={state.criteria.opponent == *opponent}
                                >
                                    {opponent}
                                </option>
                            })}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            {"Game Type"}
                        </label>
                        <select
                            value={state.criteria.game_type.map(|g| g.as_str()).unwrap_or("")}
                            onchange={on_game_type_change}
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-[#782F40] focus:border-transparent"
                        >
                            <option value="" selected={state.criteria.game_type.is_none()}>
                                {"All Games"}
                            </option>
                            {for GameType::variants().iter().map(|game_type| html! {
                                <option
                                    value={game_type.as_str()}
                                    selected={state.criteria.game_type == Some(*game_type)}
                                >
                                    {game_type.label()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-2">
                            {"Stat Category"}
                        </label>
                        <select
                            value={state.criteria.stat_category.map(|c| c.as_str()).unwrap_or("")}
                            onchange={on_stat_category_change}
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-[#782F40] focus:border-transparent"
                        >
                            <option value="" selected={state.criteria.stat_category.is_none()}>
                                {"All Stats"}
                            </option>
                            {for StatCategory::variants().iter().map(|category| html! {
                                <option
                                    value={category.as_str()}
                                    selected={state.criteria.stat_category == Some(*category)}
                                >
                                    {category.label()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="md:col-span-3 flex justify-end space-x-4">
                        <button
                            type="button"
                            onclick={on_reset}
                            class="px-6 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300 transition-colors"
                        >
                            {"Reset"}
                        </button>
                        <button
                            type="submit"
                            class="px-6 py-2 bg-[#782F40] text-white rounded-md hover:bg-[#631d2e] transition-colors flex items-center space-x-2"
                        >
                            <span>{"🔍"}</span>
                            <span>{"Search"}</span>
                        </button>
                    </div>
                </form>
            </section>

            <section class="bg-white rounded-lg shadow-md p-6">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-xl font-semibold text-[#782F40]">
                        {"Player Game Statistics"}
                    </h2>
                    <span class="text-[#782F40] font-medium">
                        {format!("Showing {} results", state.rows.len())}
                    </span>
                </div>

                <StatsTable rows={state.rows.clone()} loading={state.loading} />

                <PaginationBar
                    label={state.page_label()}
                    has_previous={state.has_previous()}
                    has_next={state.has_next()}
                    on_previous={on_previous}
                    on_next={on_next}
                />
            </section>
        </div>
    }
}

const SEASONS: &[&str] = &["2024", "2023", "2022", "2021", "2020"];

const OPPONENTS: &[&str] = &[
    "Miami",
    "Florida",
    "Clemson",
    "NC State",
    "Duke",
    "Pittsburgh",
];
