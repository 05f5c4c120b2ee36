use chrono::NaiveDate;
use yew::prelude::*;

use shared::StatRowDto;

const COLUMN_COUNT: usize = 15;

#[derive(Properties, PartialEq)]
pub struct StatsTableProps {
    pub rows: Vec<StatRowDto>,
    pub loading: bool,
}

/// Pure view over the current result page: a loading row while a fetch
/// is in flight, an empty-state row when there are no matches, the
/// stat grid otherwise.
#[function_component(StatsTable)]
pub fn stats_table(props: &StatsTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="w-full">
                <thead>
                    <tr class="bg-[#782F40] text-white">
                        <th class="px-4 py-3 text-left">{"Player"}</th>
                        <th class="px-4 py-3 text-left">{"Position"}</th>
                        <th class="px-4 py-3 text-left">{"Game"}</th>
                        <th class="px-4 py-3 text-left">{"Date"}</th>
                        <th class="px-4 py-3 text-right">{"Passing Yards"}</th>
                        <th class="px-4 py-3 text-right">{"Passing TDs"}</th>
                        <th class="px-4 py-3 text-right">{"Rushing Yards"}</th>
                        <th class="px-4 py-3 text-right">{"Rushing TDs"}</th>
                        <th class="px-4 py-3 text-right">{"Receptions"}</th>
                        <th class="px-4 py-3 text-right">{"Receiving Yards"}</th>
                        <th class="px-4 py-3 text-right">{"Receiving TDs"}</th>
                        <th class="px-4 py-3 text-right">{"Tackles"}</th>
                        <th class="px-4 py-3 text-right">{"Sacks"}</th>
                        <th class="px-4 py-3 text-right">{"Interceptions"}</th>
                        <th class="px-4 py-3 text-right">{"Game Type"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.loading {
                        <tr>
                            <td colspan={COLUMN_COUNT.to_string()} class="text-center py-4">
                                {"Loading..."}
                            </td>
                        </tr>
                    } else if props.rows.is_empty() {
                        <tr>
                            <td colspan={COLUMN_COUNT.to_string()} class="text-center py-4">
                                {"No results found"}
                            </td>
                        </tr>
                    } else {
                        {for props.rows.iter().map(stat_row)}
                    }
                </tbody>
            </table>
        </div>
    }
}

fn stat_row(row: &StatRowDto) -> Html {
    html! {
        <tr key={row.id.to_string()} class="border-b border-gray-200 hover:bg-gray-50">
            <td class="px-4 py-3">{&row.player_name}</td>
            <td class="px-4 py-3">{&row.position}</td>
            <td class="px-4 py-3">{&row.opponent}</td>
            <td class="px-4 py-3">{format_date(&row.date)}</td>
            <td class="px-4 py-3 text-right">{row.passing_yards}</td>
            <td class="px-4 py-3 text-right">{row.passing_tds}</td>
            <td class="px-4 py-3 text-right">{row.rushing_yards}</td>
            <td class="px-4 py-3 text-right">{row.rushing_tds}</td>
            <td class="px-4 py-3 text-right">{row.receptions}</td>
            <td class="px-4 py-3 text-right">{row.receiving_yards}</td>
            <td class="px-4 py-3 text-right">{row.receiving_tds}</td>
            <td class="px-4 py-3 text-right">{row.tackles}</td>
            <td class="px-4 py-3 text-right">{row.sacks}</td>
            <td class="px-4 py-3 text-right">{row.interceptions}</td>
            <td class="px-4 py-3 text-right">{&row.game_type}</td>
        </tr>
    }
}

/// Renders the backend's ISO date as a US-style date, falling back to
/// the raw string if it does not parse.
fn format_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
