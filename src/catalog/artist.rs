use reqwest::Client;

use crate::{config, types::ArtistDetail};

/// Fetches the detail payload for one artist.
///
/// The payload bundles the artist, its tour locations with coordinates, the
/// catalog-wide date list, and the location-to-dates relations map. It is
/// created fresh per detail view and discarded on navigation; nothing is
/// cached across pages.
pub async fn artist_detail(artist_id: u32) -> Result<ArtistDetail, reqwest::Error> {
    let api_url = format!(
        "{uri}/api/artist/{id}",
        uri = config::api_url(),
        id = artist_id
    );

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;
    response.json::<ArtistDetail>().await
}
