use gloo_net::http::Request;
use log::debug;

use crate::api::api_url;
use shared::{ApiError, ErrorResponse, StatSearchRequest, StatSearchResponse};

/// Builds the search URL from the paging cursor.
///
/// Wire-contract caveat: `offset` carries the zero-based page index,
/// not a row offset. The backend expects exactly that; do not "fix"
/// it to `page * limit`.
fn search_url(page: usize, page_size: usize) -> String {
    format!("{}?offset={}&limit={}", api_url("/search"), page, page_size)
}

/// Issues `POST /search` with the criteria as the JSON body and the
/// paging cursor as query parameters.
pub async fn search_stats(
    criteria: &StatSearchRequest,
    page: usize,
    page_size: usize,
) -> Result<StatSearchResponse, ApiError> {
    debug!("searching stats, page {} (limit {})", page, page_size);

    let url = search_url(page, page_size);
    let response = Request::post(&url)
        .json(criteria)
        .map_err(|e| ApiError::SearchFetch(format!("failed to serialize criteria: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::SearchFetch(format!("failed to send search request: {}", e)))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(ApiError::SearchFetch(error));
    }

    let result_page = response
        .json::<StatSearchResponse>()
        .await
        .map_err(|e| ApiError::SearchFetch(format!("failed to parse search response: {}", e)))?;

    debug!(
        "search returned {} of {} rows",
        result_page.data.len(),
        result_page.total
    );
    Ok(result_page)
}
