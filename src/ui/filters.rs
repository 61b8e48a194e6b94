use crate::{
    types::{Artist, FilterCriteria},
    utils,
};

/// Concrete slider bounds and checkbox option sets, derived from a dataset
/// snapshot.
///
/// Derivation runs exactly once per session, fed by the first result set the
/// orchestrator observes; later result sets never re-derive. Ranges therefore
/// reflect the as-observed set, which may already be narrowed by the
/// backend's defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRanges {
    pub creation_years: (i32, i32),
    pub first_album_years: (i32, i32),
    /// Member-count options, 1 through the largest observed line-up.
    pub member_counts: Vec<u32>,
    /// Unique city names, trimmed, deduplicated case-insensitively, sorted
    /// ascending.
    pub cities: Vec<String>,
}

impl FilterRanges {
    /// Computes bounds and option sets from a dataset snapshot.
    ///
    /// An empty snapshot yields `None`; the controls stay hidden rather than
    /// showing degenerate ranges.
    pub fn derive(artists: &[Artist]) -> Option<Self> {
        if artists.is_empty() {
            return None;
        }

        let creation_min = artists.iter().map(|a| a.creation_date).min()?;
        let creation_max = artists.iter().map(|a| a.creation_date).max()?;

        let album_years: Vec<i32> = artists
            .iter()
            .filter_map(|a| utils::first_album_year(&a.first_album))
            .collect();
        // No parsable album date anywhere: reuse the creation bounds so the
        // slider still has a usable window.
        let first_album_years = match (album_years.iter().min(), album_years.iter().max()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => (creation_min, creation_max),
        };

        let max_members = artists.iter().map(|a| a.members.len()).max().unwrap_or(0) as u32;
        let member_counts: Vec<u32> = (1..=max_members).collect();

        let cities = utils::normalize_cities(
            artists
                .iter()
                .flat_map(|a| a.locations.iter())
                .filter_map(|label| utils::split_city(label)),
        );

        Some(Self {
            creation_years: (creation_min, creation_max),
            first_album_years,
            member_counts,
            cities,
        })
    }

    /// The unconstrained default criteria for these ranges: full year windows,
    /// empty member and location sets.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            creation_year_min: self.creation_years.0,
            creation_year_max: self.creation_years.1,
            first_album_year_min: self.first_album_years.0,
            first_album_year_max: self.first_album_years.1,
            members: Vec::new(),
            locations: Vec::new(),
        }
    }
}

/// Steps the creation-year minimum slider, clamped to the derived bounds and
/// never past the current maximum.
pub fn adjust_creation_min(criteria: &mut FilterCriteria, ranges: &FilterRanges, delta: i32) {
    let (lo, hi) = ranges.creation_years;
    criteria.creation_year_min = (criteria.creation_year_min + delta)
        .clamp(lo, hi.min(criteria.creation_year_max));
}

/// Steps the first-album-year minimum slider, clamped like
/// [`adjust_creation_min`].
pub fn adjust_album_min(criteria: &mut FilterCriteria, ranges: &FilterRanges, delta: i32) {
    let (lo, hi) = ranges.first_album_years;
    criteria.first_album_year_min = (criteria.first_album_year_min + delta)
        .clamp(lo, hi.min(criteria.first_album_year_max));
}

/// Intersects a requested year window with the derived bounds, keeping
/// `min <= max`. A window with no overlap collapses to the nearest bound.
pub fn intersect_years(range: (i32, i32), window: (i32, i32)) -> (i32, i32) {
    let (lo, hi) = range;
    let (requested_min, requested_max) = window;
    if requested_min > hi {
        (hi, hi)
    } else if requested_max < lo {
        (lo, lo)
    } else {
        (requested_min.max(lo), requested_max.min(hi))
    }
}

/// Toggles a member-count checkbox. Counts outside the derived option set are
/// ignored.
pub fn toggle_member(criteria: &mut FilterCriteria, ranges: &FilterRanges, count: u32) {
    if !ranges.member_counts.contains(&count) {
        return;
    }
    match criteria.members.iter().position(|c| *c == count) {
        Some(index) => {
            criteria.members.remove(index);
        }
        None => criteria.members.push(count),
    }
}

/// Toggles a city checkbox, matching case-insensitively.
pub fn toggle_location(criteria: &mut FilterCriteria, city: &str) {
    let city = city.trim();
    if city.is_empty() {
        return;
    }
    match criteria
        .locations
        .iter()
        .position(|c| c.eq_ignore_ascii_case(city))
    {
        Some(index) => {
            criteria.locations.remove(index);
        }
        None => criteria.locations.push(city.to_string()),
    }
}
