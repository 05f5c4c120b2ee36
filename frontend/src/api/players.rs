use gloo_net::http::Request;
use log::debug;

use crate::api::api_url;
use crate::api::cache::cached_request;
use shared::{ApiError, ErrorResponse, PlayerListResponse};

/// Fetches the full player directory for autocomplete. The raw body is
/// served from the request cache so that typing does not hammer the
/// listing endpoint with one fetch per keystroke.
pub async fn get_player_directory() -> Result<Vec<String>, ApiError> {
    let body = cached_request("/players", fetch_directory)
        .await
        .map_err(ApiError::DirectoryFetch)?;

    let list: PlayerListResponse = serde_json::from_str(&body)
        .map_err(|e| ApiError::DirectoryFetch(format!("failed to parse player list: {}", e)))?;

    debug!("player directory holds {} entries", list.data.len());
    Ok(list.data.into_iter().map(|p| p.player_name).collect())
}

async fn fetch_directory() -> Result<String, String> {
    let response = Request::get(&api_url("/players"))
        .send()
        .await
        .map_err(|e| format!("failed to fetch player directory: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(error);
    }

    response.text().await.map_err(|e| e.to_string())
}
