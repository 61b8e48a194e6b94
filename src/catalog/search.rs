use reqwest::Client;

use crate::{
    config,
    types::{Artist, FilterCriteria, SearchResult},
};

/// Issues one combined text+filter search against the catalog.
///
/// Sends the free-text query as the `q` parameter and, when present, the
/// serialized [`FilterCriteria`] as the request body. The very first search of
/// a session passes `None` so the backend applies its own data-driven
/// defaults (no narrowing).
///
/// # Arguments
///
/// * `query` - Free-text query; may be empty
/// * `criteria` - Current filter criteria, or `None` for an unconstrained search
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - The matching artists, in backend ranking order
/// - `Err(reqwest::Error)` - Network error or non-success status
pub async fn search(
    query: &str,
    criteria: Option<&FilterCriteria>,
) -> Result<Vec<Artist>, reqwest::Error> {
    let api_url = format!("{uri}/api/search", uri = config::api_url());

    let client = Client::new();
    let mut request = client.post(&api_url).query(&[("q", query)]);
    if let Some(criteria) = criteria {
        request = request.json(criteria);
    }

    let response = request.send().await?.error_for_status()?;
    let res = response.json::<SearchResult>().await?;
    Ok(res.artists)
}
