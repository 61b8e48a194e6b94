use reqwest::Client;

use crate::{config, types::Suggestion};

/// Fetches ranked match suggestions for a partial query.
///
/// Callers must not issue requests for empty text; the suggestion controller
/// clears its list locally instead. Failures are handled locally by the
/// caller (list cleared, logged) and never surfaced to the user.
pub async fn suggestions(query: &str) -> Result<Vec<Suggestion>, reqwest::Error> {
    let api_url = format!("{uri}/api/suggestions", uri = config::api_url());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", query)])
        .send()
        .await?
        .error_for_status()?;

    response.json::<Vec<Suggestion>>().await
}
