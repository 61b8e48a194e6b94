use colored::Colorize;

use crate::{types::GeoLocation, utils};

/// Bounds-fit padding, in grid cells.
pub const FIT_PADDING: u32 = 2;
/// Bounds-fit animation duration. Purely a presentation parameter.
pub const FIT_DURATION_MS: u64 = 1000;

/// A growable longitude/latitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    empty: bool,
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min_lon: 0.0,
            min_lat: 0.0,
            max_lon: 0.0,
            max_lat: 0.0,
            empty: true,
        }
    }

    pub fn extend(&mut self, lon: f64, lat: f64) {
        if self.empty {
            self.min_lon = lon;
            self.max_lon = lon;
            self.min_lat = lat;
            self.max_lat = lat;
            self.empty = false;
        } else {
            self.min_lon = self.min_lon.min(lon);
            self.max_lon = self.max_lon.max(lon);
            self.min_lat = self.min_lat.min(lat);
            self.max_lat = self.max_lat.max(lat);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn corners(&self) -> ((f64, f64), (f64, f64)) {
        ((self.min_lon, self.min_lat), (self.max_lon, self.max_lat))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

/// What a marker's popup shows: the address and any concert dates there.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub address: String,
    pub dates: Vec<String>,
}

pub type MarkerId = usize;

/// The opaque map provider seam: marker placement with a custom visual
/// element, popup attach/detach, and viewport bounds-fitting. The controller
/// never reaches past this trait into tile rendering.
pub trait MapSurface {
    fn place_marker(&mut self, lon: f64, lat: f64, label: &str) -> MarkerId;
    fn open_popup(&mut self, marker: MarkerId, content: PopupContent);
    fn close_popup(&mut self, marker: MarkerId);
    fn fit_bounds(&mut self, bounds: Bounds, padding: u32, duration_ms: u64);
}

#[derive(Debug)]
struct PlacedMarker {
    id: MarkerId,
    content: PopupContent,
}

/// Locations that could not be placed, reported to the caller for logging.
#[derive(Debug, Default, PartialEq)]
pub struct RenderReport {
    pub placed: usize,
    pub skipped: Vec<String>,
}

/// Owns one map surface for the lifetime of a detail view.
///
/// One marker per location with a valid coordinate pair; exactly one popup
/// open at a time; the viewport is fitted to all markers once, and only when
/// at least one marker exists. A new artist means a new controller over a
/// fresh surface, never marker reuse.
pub struct MapController<S: MapSurface> {
    surface: S,
    markers: Vec<PlacedMarker>,
    active: Option<usize>,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            markers: Vec::new(),
            active: None,
        }
    }

    /// Places one marker per location with finite coordinates. Locations with
    /// missing or non-finite coordinates are skipped and reported; they join
    /// neither the markers nor the bounds-fit computation. With zero valid
    /// locations no fit call is made.
    pub fn render(&mut self, locations: &[GeoLocation]) -> RenderReport {
        let mut bounds = Bounds::new();
        let mut report = RenderReport::default();

        for location in locations {
            match (location.lon, location.lat) {
                (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite() => {
                    let id = self.surface.place_marker(lon, lat, &location.address);
                    self.markers.push(PlacedMarker {
                        id,
                        content: PopupContent {
                            address: location.address.clone(),
                            dates: location.dates.clone(),
                        },
                    });
                    bounds.extend(lon, lat);
                    report.placed += 1;
                }
                _ => report.skipped.push(location.address.clone()),
            }
        }

        if !bounds.is_empty() {
            self.surface.fit_bounds(bounds, FIT_PADDING, FIT_DURATION_MS);
        }
        report
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Marker click: any open popup closes before the clicked marker's popup
    /// opens. Clicking the active marker closes and reopens its popup, so it
    /// stays the one open popup.
    pub fn click(&mut self, index: usize) {
        if index >= self.markers.len() {
            return;
        }
        if let Some(active) = self.active.take() {
            self.surface.close_popup(self.markers[active].id);
        }
        let marker = &self.markers[index];
        self.surface.open_popup(marker.id, marker.content.clone());
        self.active = Some(index);
    }

    /// Background click: closes the active popup, if any.
    pub fn background_click(&mut self) {
        if let Some(active) = self.active.take() {
            self.surface.close_popup(self.markers[active].id);
        }
    }

    pub fn active_popup(&self) -> Option<usize> {
        self.active
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[derive(Debug, Clone)]
struct TermMarker {
    lon: f64,
    lat: f64,
    label: String,
}

/// Terminal map surface: an equirectangular character grid.
///
/// Initialized with the provider credential and named visual style; both feed
/// the static-map URL used by the "open in browser" affordance. Tile imagery
/// itself is out of scope.
pub struct TermMap {
    width: usize,
    height: usize,
    token: String,
    style: String,
    markers: Vec<TermMarker>,
    open: Option<(MarkerId, PopupContent)>,
    window: Option<(Bounds, u32)>,
}

impl TermMap {
    pub fn new(width: usize, height: usize, token: String, style: String) -> Self {
        Self {
            width: width.max(16),
            height: height.max(6),
            token,
            style,
            markers: Vec::new(),
            open: None,
            window: None,
        }
    }

    pub fn fitted_bounds(&self) -> Option<Bounds> {
        self.window.map(|(bounds, _)| bounds)
    }

    pub fn open_popup_content(&self) -> Option<&PopupContent> {
        self.open.as_ref().map(|(_, content)| content)
    }

    /// The Mapbox Static Images URL covering all markers, for opening the
    /// real map in a browser.
    pub fn static_map_url(&self) -> String {
        let pins: Vec<String> = self
            .markers
            .iter()
            .map(|m| format!("pin-s+ff0000({:.5},{:.5})", m.lon, m.lat))
            .collect();
        format!(
            "https://api.mapbox.com/styles/v1/{style}/static/{pins}/auto/640x400?access_token={token}",
            style = self.style,
            pins = pins.join(","),
            token = self.token
        )
    }

    fn projection_window(&self) -> ((f64, f64), (f64, f64)) {
        match self.window {
            Some((bounds, _)) if !bounds.is_empty() => {
                let ((min_lon, min_lat), (max_lon, max_lat)) = bounds.corners();
                // Degenerate spans (a single marker) still need a window.
                let lon_pad = ((max_lon - min_lon) * 0.1).max(1.0);
                let lat_pad = ((max_lat - min_lat) * 0.1).max(1.0);
                (
                    (min_lon - lon_pad, min_lat - lat_pad),
                    (max_lon + lon_pad, max_lat + lat_pad),
                )
            }
            _ => ((-180.0, -85.0), (180.0, 85.0)),
        }
    }

    fn project(&self, lon: f64, lat: f64) -> (usize, usize) {
        let ((min_lon, min_lat), (max_lon, max_lat)) = self.projection_window();
        let pad = self.window.map(|(_, p)| p as usize).unwrap_or(0);
        let cols = self.width.saturating_sub(1 + 2 * pad).max(1) as f64;
        let rows = self.height.saturating_sub(1 + 2 * pad).max(1) as f64;

        let x = (lon - min_lon) / (max_lon - min_lon);
        let y = (max_lat - lat) / (max_lat - min_lat);
        (
            pad + (x.clamp(0.0, 1.0) * cols).round() as usize,
            pad + (y.clamp(0.0, 1.0) * rows).round() as usize,
        )
    }

    /// Renders the framed marker grid plus the open popup panel, if any.
    pub fn render_lines(&self) -> Vec<String> {
        let mut grid = vec![vec![' '; self.width]; self.height];
        let mut highlights: Vec<(usize, usize, char, bool)> = Vec::new();

        for (index, marker) in self.markers.iter().enumerate() {
            let (col, row) = self.project(marker.lon, marker.lat);
            let glyph = if index < 9 {
                char::from_digit(index as u32 + 1, 10).unwrap_or('*')
            } else {
                '*'
            };
            let active = matches!(self.open, Some((id, _)) if id == index);
            grid[row.min(self.height - 1)][col.min(self.width - 1)] = glyph;
            highlights.push((row.min(self.height - 1), col.min(self.width - 1), glyph, active));
        }

        let mut lines = Vec::with_capacity(self.height + 4);
        lines.push(format!("+{}+", "-".repeat(self.width)));
        for (row, cells) in grid.iter().enumerate() {
            let mut line = String::from("|");
            for (col, cell) in cells.iter().enumerate() {
                let styled = highlights
                    .iter()
                    .find(|(r, c, _, _)| *r == row && *c == col)
                    .map(|(_, _, glyph, active)| {
                        if *active {
                            glyph.to_string().yellow().bold().to_string()
                        } else {
                            glyph.to_string().red().to_string()
                        }
                    });
                match styled {
                    Some(marked) => line.push_str(&marked),
                    None => line.push(*cell),
                }
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(format!("+{}+", "-".repeat(self.width)));

        for (index, marker) in self.markers.iter().enumerate() {
            let glyph = if index < 9 {
                (index + 1).to_string()
            } else {
                "*".to_string()
            };
            lines.push(format!("  {} {}", glyph.red(), marker.label.clone().dimmed()));
        }

        if let Some((_, content)) = &self.open {
            lines.push(format!("  {}", content.address.bold()));
            if !content.dates.is_empty() {
                lines.push("  Concert dates:".to_string());
                for date in &content.dates {
                    lines.push(format!("    - {}", utils::format_concert_date(date)));
                }
            }
        }
        lines
    }
}

impl MapSurface for TermMap {
    fn place_marker(&mut self, lon: f64, lat: f64, label: &str) -> MarkerId {
        self.markers.push(TermMarker {
            lon,
            lat,
            label: label.to_string(),
        });
        self.markers.len() - 1
    }

    fn open_popup(&mut self, marker: MarkerId, content: PopupContent) {
        self.open = Some((marker, content));
    }

    fn close_popup(&mut self, marker: MarkerId) {
        if matches!(self.open, Some((id, _)) if id == marker) {
            self.open = None;
        }
    }

    // A character grid has no animation; the duration only matters to real
    // tile surfaces.
    fn fit_bounds(&mut self, bounds: Bounds, padding: u32, _duration_ms: u64) {
        self.window = Some((bounds, padding));
    }
}
