use chrono::NaiveDate;

/// Extracts the year from a first-album date string ("13-12-1967" -> 1967).
pub fn first_album_year(first_album: &str) -> Option<i32> {
    let parts: Vec<&str> = first_album.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    parts[2].trim().parse().ok()
}

/// Extracts the city from a "City-Country"-style location label.
pub fn split_city(label: &str) -> Option<String> {
    let city = label.split('-').next()?.trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}

/// Deduplicates city names case-insensitively (first spelling wins) and sorts
/// them ascending.
pub fn normalize_cities<I>(cities: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: Vec<String> = Vec::new();
    for city in cities {
        let trimmed = city.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
            seen.push(trimmed.to_string());
        }
    }
    seen.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    seen
}

/// Formats a concert date string ("02-01-2006" style) for display.
///
/// Unparsable strings pass through unchanged.
pub fn format_concert_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim().trim_start_matches('*'), "%d-%m-%Y") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Builds the public page URL for an artist.
pub fn artist_page_url(site: &str, artist_id: u32) -> String {
    format!("{}/artist/{}", site.trim_end_matches('/'), artist_id)
}

/// Parses a "MIN:MAX" year range argument; a single year stands for itself.
pub fn parse_year_range(raw: &str) -> Result<(i32, i32), String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("year range cannot be empty".to_string());
    }

    let (min, max) = match raw.split_once(':') {
        Some((min, max)) => (min.trim(), max.trim()),
        None => (raw, raw),
    };

    let min: i32 = min
        .parse()
        .map_err(|_| format!("invalid year '{}'", min))?;
    let max: i32 = max
        .parse()
        .map_err(|_| format!("invalid year '{}'", max))?;

    if min > max {
        return Err(format!("range minimum {} exceeds maximum {}", min, max));
    }
    Ok((min, max))
}
