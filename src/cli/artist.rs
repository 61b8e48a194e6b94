use std::{
    io::{self, IsTerminal, Write},
    time::{Duration, Instant},
};

use colored::Colorize;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, catalog,
    cli::share,
    config,
    management::FavoritesManager,
    types::ArtistDetail,
    ui::{
        map::{MapController, TermMap},
        status::{BannerKind, StatusBanner},
    },
    utils, warning,
};

const MAP_WIDTH: usize = 64;
const MAP_HEIGHT: usize = 16;

/// Shows the detail view for one artist: info sections, the tour map with
/// its marker/popup lifecycle, the favorites toggle and sharing.
///
/// The map surface is created fresh for this view and torn down with it;
/// nothing is reused across artists.
pub async fn show_artist(artist_id: u32, plain: bool) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching artist details...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let detail = match catalog::artist_detail(artist_id).await {
        Ok(detail) => {
            pb.finish_and_clear();
            detail
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!(
                "An error occurred while fetching artist details. Please try again later. Err: {}",
                e
            );
            return;
        }
    };

    let mut favorites = FavoritesManager::load().await;

    let surface = TermMap::new(
        MAP_WIDTH,
        MAP_HEIGHT,
        config::mapbox_token(),
        config::mapbox_style(),
    );
    let mut map = MapController::new(surface);

    // The backend keys the relations map by location address; popups show
    // those dates.
    let mut locations = detail.locations.clone();
    for location in &mut locations {
        if location.dates.is_empty() {
            if let Some(dates) = detail.relations.get(&location.address) {
                location.dates = dates.clone();
            }
        }
    }
    let report = map.render(&locations);
    for address in &report.skipped {
        warning!("Skipping location without coordinates: {}", address);
    }

    if plain || !io::stdout().is_terminal() {
        print_detail(&detail, &favorites, &map);
        return;
    }

    if let Err(e) = interactive(&detail, &mut favorites, &mut map).await {
        let _ = terminal::disable_raw_mode();
        warning!("Detail session ended: {}", e);
    }
}

async fn interactive(
    detail: &ArtistDetail,
    favorites: &mut FavoritesManager,
    map: &mut MapController<TermMap>,
) -> Res<()> {
    terminal::enable_raw_mode()?;
    let result = run_loop(detail, favorites, map).await;
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show)?;
    result
}

async fn run_loop(
    detail: &ArtistDetail,
    favorites: &mut FavoritesManager,
    map: &mut MapController<TermMap>,
) -> Res<()> {
    let mut banner = StatusBanner::new();
    let mut dirty = true;

    loop {
        if banner.poll(Instant::now()) {
            dirty = true;
        }
        if dirty {
            draw(detail, favorites, map, &banner)?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('q') => break,
            // Clicking the map background closes the active popup.
            KeyCode::Esc | KeyCode::Char('b') => {
                map.background_click();
                dirty = true;
            }
            KeyCode::Char('n') => {
                let count = map.marker_count();
                if count > 0 {
                    let next = map.active_popup().map(|i| (i + 1) % count).unwrap_or(0);
                    map.click(next);
                    dirty = true;
                }
            }
            KeyCode::Char('p') => {
                let count = map.marker_count();
                if count > 0 {
                    let prev = map
                        .active_popup()
                        .map(|i| (i + count - 1) % count)
                        .unwrap_or(count - 1);
                    map.click(prev);
                    dirty = true;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < map.marker_count() {
                    map.click(index);
                    dirty = true;
                }
            }
            KeyCode::Char('f') => {
                let added = favorites.toggle(detail.artist.id);
                match favorites.persist().await {
                    Ok(()) => banner.show_notice(
                        if added {
                            "Added to favorites"
                        } else {
                            "Removed from favorites"
                        },
                        Instant::now(),
                    ),
                    Err(e) => banner
                        .show_error(format!("Failed to save favorites: {:?}", e), Instant::now()),
                }
                dirty = true;
            }
            KeyCode::Char('s') => {
                let url = utils::artist_page_url(&config::site_url(), detail.artist.id);
                match share::share_url(&url) {
                    Ok(message) => banner.show_notice(message, Instant::now()),
                    Err(e) => banner.show_error(
                        format!("Failed to share artist information: {}", e),
                        Instant::now(),
                    ),
                }
                dirty = true;
            }
            KeyCode::Char('o') => {
                if webbrowser::open(&map.surface().static_map_url()).is_err() {
                    banner.show_error("Failed to open map in browser", Instant::now());
                }
                dirty = true;
            }
            _ => {}
        }
    }
    Ok(())
}

fn draw(
    detail: &ArtistDetail,
    favorites: &FavoritesManager,
    map: &MapController<TermMap>,
    banner: &StatusBanner,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0), cursor::Hide)?;

    for line in detail_lines(detail, favorites, map) {
        write!(stdout, "{}\r\n", line)?;
    }

    if let Some((kind, message)) = banner.message() {
        let styled = match kind {
            BannerKind::Error => message.red().bold().to_string(),
            BannerKind::Notice => message.green().to_string(),
        };
        write!(stdout, "\r\n{}\r\n", styled)?;
    }

    write!(
        stdout,
        "\r\n{}\r\n",
        "n/p markers · 1-9 jump · b close popup · f favorite · s share · o open map · q quit"
            .dimmed()
    )?;
    stdout.flush()
}

fn detail_lines(
    detail: &ArtistDetail,
    favorites: &FavoritesManager,
    map: &MapController<TermMap>,
) -> Vec<String> {
    let artist = &detail.artist;
    let mut lines = Vec::new();

    let star = if favorites.contains(artist.id) {
        "★ favorite".yellow().to_string()
    } else {
        "☆ not a favorite".dimmed().to_string()
    };
    lines.push(format!(
        "{}  {}  {}",
        artist.name.bold().underline(),
        format!("(#{})", artist.id).dimmed(),
        star
    ));
    lines.push(format!("Members: {}", artist.members.join(", ")));
    lines.push(format!(
        "Created: {}   First album: {}",
        artist.creation_date, artist.first_album
    ));
    lines.push(String::new());

    lines.push("Concert locations".bold().to_string());
    for (index, location) in detail.locations.iter().enumerate() {
        lines.push(format!("  {}. {}", index + 1, location.address));
    }

    lines.push("Concert dates".bold().to_string());
    for date in detail.dates.iter().take(12) {
        lines.push(format!("  - {}", utils::format_concert_date(date)));
    }
    if detail.dates.len() > 12 {
        lines.push(format!("  … and {} more", detail.dates.len() - 12));
    }

    lines.push("Location-date relations".bold().to_string());
    for (location, dates) in &detail.relations {
        let formatted: Vec<String> = dates
            .iter()
            .map(|date| utils::format_concert_date(date))
            .collect();
        lines.push(format!("  {}: {}", location.bold(), formatted.join(", ")));
    }

    lines.push(String::new());
    lines.extend(map.surface().render_lines());
    lines
}

fn print_detail(detail: &ArtistDetail, favorites: &FavoritesManager, map: &MapController<TermMap>) {
    for line in detail_lines(detail, favorites, map) {
        println!("{}", line);
    }
    if map.marker_count() > 0 {
        println!();
        println!("Map: {}", map.surface().static_map_url());
    }
}
