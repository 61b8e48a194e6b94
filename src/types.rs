use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// A musical act in the catalog. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u32,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub creation_date: i32,
    /// Day-month-year string; the year is the third `-`-separated component.
    pub first_album: String,
    /// Location labels in "City-Country" form. The backend sometimes sends a
    /// URL string here instead of a list; anything but a list reads as empty.
    #[serde(default, deserialize_with = "list_or_empty")]
    pub locations: Vec<String>,
}

fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Other(_) => Vec::new(),
    })
}

/// A tour stop with optional coordinates. Invalid coordinates are skipped by
/// the map controller, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoLocation {
    pub address: String,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Detail payload for one artist. Every key in `relations` corresponds to
/// some `GeoLocation::address` in the same payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDetail {
    pub artist: Artist,
    #[serde(default)]
    pub locations: Vec<GeoLocation>,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub relations: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub artists: Vec<Artist>,
}

/// A display hint paired with its match category; ephemeral, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The range and set constraints sent alongside the free-text query.
///
/// Invariant: `min <= max` on both year ranges. Empty member/location sets
/// mean "no constraint", not "exclude all".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub creation_year_min: i32,
    pub creation_year_max: i32,
    pub first_album_year_min: i32,
    pub first_album_year_max: i32,
    pub members: Vec<u32>,
    pub locations: Vec<String>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: u32,
    pub name: String,
    pub created: i32,
    pub first_album: String,
}

impl From<&Artist> for ArtistTableRow {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            created: artist.creation_date,
            first_album: artist.first_album.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct FavoriteTableRow {
    pub artist_id: u32,
}
