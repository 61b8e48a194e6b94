use std::{
    io::{self, IsTerminal, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use colored::Colorize;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::Table;
use tokio::sync::mpsc;

use crate::{
    Res, catalog, info,
    types::{Artist, ArtistTableRow, FilterCriteria, Suggestion},
    ui::{
        filters::{self, FilterRanges},
        results::{EMPTY_RESULTS_MESSAGE, ResultsPresenter},
        search::{SearchOrchestrator, SearchOutcome},
        status::{BannerKind, StatusBanner},
        suggest::{InputOutcome, SuggestDebounce, SuggestSession, SuggestionPanel},
    },
    warning,
};

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const RESULT_VIEWPORT: usize = 6;
const SUGGESTION_LIMIT: usize = 8;

/// Launch parameters for a search session, assembled from the command line.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    pub creation_year: Option<(i32, i32)>,
    pub album_year: Option<(i32, i32)>,
    pub members: Vec<u32>,
    pub locations: Vec<String>,
    pub plain: bool,
}

/// Entry point for `groupli search`. Interactive when stdout is a terminal
/// and `--plain` was not given, otherwise a one-shot table print.
pub async fn run_search(options: SearchOptions) {
    if options.plain || !io::stdout().is_terminal() {
        run_plain(options).await;
        return;
    }

    if let Err(e) = interactive(options).await {
        let _ = terminal::disable_raw_mode();
        warning!("Search session ended: {}", e);
    }
}

/// One-shot mode: an unconstrained search first, then, when filter flags were
/// given, one narrowed search against the derived ranges.
async fn run_plain(options: SearchOptions) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching artists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let artists = match catalog::search(&options.query, None).await {
        Ok(artists) => artists,
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to search artists. Err: {}", e);
            return;
        }
    };

    let has_flags = options.creation_year.is_some()
        || options.album_year.is_some()
        || !options.members.is_empty()
        || !options.locations.is_empty();

    let artists = if has_flags {
        match FilterRanges::derive(&artists) {
            Some(ranges) => {
                pb.set_message("Applying filters...");
                let criteria = criteria_from_options(&ranges, &options);
                match catalog::search(&options.query, Some(&criteria)).await {
                    Ok(filtered) => filtered,
                    Err(e) => {
                        pb.finish_and_clear();
                        warning!("Failed to search artists. Err: {}", e);
                        return;
                    }
                }
            }
            // Nothing to derive ranges from; the filters have no effect.
            None => artists,
        }
    } else {
        artists
    };
    pb.finish_and_clear();

    if artists.is_empty() {
        info!("{}", EMPTY_RESULTS_MESSAGE);
        return;
    }

    let rows: Vec<ArtistTableRow> = artists.iter().map(ArtistTableRow::from).collect();
    println!("{}", Table::new(rows));
}

/// Builds session criteria from the derived ranges plus any launch flags.
/// Year flags override the derived windows; member and location flags toggle
/// their checkboxes before the first narrowed search.
fn criteria_from_options(ranges: &FilterRanges, options: &SearchOptions) -> FilterCriteria {
    let mut criteria = ranges.default_criteria();
    if let Some(window) = options.creation_year {
        let (min, max) = filters::intersect_years(ranges.creation_years, window);
        criteria.creation_year_min = min;
        criteria.creation_year_max = max;
    }
    if let Some(window) = options.album_year {
        let (min, max) = filters::intersect_years(ranges.first_album_years, window);
        criteria.first_album_year_min = min;
        criteria.first_album_year_max = max;
    }
    let mut seen = Vec::new();
    for count in &options.members {
        if !seen.contains(count) {
            seen.push(*count);
            filters::toggle_member(&mut criteria, ranges, *count);
        }
    }
    for city in &options.locations {
        filters::toggle_location(&mut criteria, city);
    }
    criteria
}

enum AppEvent {
    Key(KeyEvent),
    SearchDone {
        generation: u64,
        result: Result<Vec<Artist>, String>,
    },
    SuggestDone {
        seq: u64,
        result: Result<Vec<Suggestion>, String>,
    },
    ImageDone {
        epoch: u64,
        index: usize,
        description: String,
    },
}

enum KeyAction {
    Continue,
    Quit,
    OpenArtist(u32),
}

struct SearchApp {
    options: SearchOptions,
    query: String,
    debounce: SuggestDebounce,
    session: SuggestSession,
    orchestrator: SearchOrchestrator,
    presenter: ResultsPresenter,
    banner: StatusBanner,
    ranges: Option<FilterRanges>,
    criteria: Option<FilterCriteria>,
    panel: SuggestionPanel,
    events: mpsc::UnboundedSender<AppEvent>,
    dirty: bool,
}

impl SearchApp {
    fn new(options: SearchOptions, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        let query = options.query.clone();
        Self {
            options,
            query,
            debounce: SuggestDebounce::new(),
            session: SuggestSession::new(),
            orchestrator: SearchOrchestrator::new(),
            presenter: ResultsPresenter::new(RESULT_VIEWPORT),
            banner: StatusBanner::new(),
            ranges: None,
            criteria: None,
            panel: SuggestionPanel::new(),
            events,
            dirty: true,
        }
    }

    /// Starts a new search generation; only its completion may update the
    /// results or release the loading indicator.
    fn issue_search(&mut self) {
        let generation = self.orchestrator.begin();
        let query = self.query.clone();
        let criteria = self.criteria.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = catalog::search(&query, criteria.as_ref())
                .await
                .map_err(|e| e.to_string());
            let _ = events.send(AppEvent::SearchDone { generation, result });
        });
        self.dirty = true;
    }

    fn issue_suggestions(&mut self, text: String) {
        let seq = self.session.begin();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = catalog::suggestions(&text).await.map_err(|e| e.to_string());
            let _ = events.send(AppEvent::SuggestDone { seq, result });
        });
    }

    /// Fetches every image that became due. Each spawned load carries the
    /// presenter epoch so completions for a superseded result set are dropped.
    fn queue_image_loads(&mut self) {
        let epoch = self.presenter.epoch();
        for (index, url) in self.presenter.take_pending_loads() {
            let events = self.events.clone();
            tokio::spawn(async move {
                let description = match fetch_image(&url).await {
                    Ok(bytes) => format!("{} ({} KB)", url, (bytes + 1023) / 1024),
                    Err(_) => url,
                };
                let _ = events.send(AppEvent::ImageDone {
                    epoch,
                    index,
                    description,
                });
            });
        }
    }

    fn on_text_changed(&mut self, now: Instant) {
        match self.debounce.input(&self.query, now) {
            InputOutcome::Clear => {
                // Emptied text only clears the suggestion list; no search is
                // issued, so the results keep the last non-empty query.
                self.panel.clear();
                self.session.invalidate();
            }
            InputOutcome::Pending => {}
        }
        self.dirty = true;
    }

    fn on_key(&mut self, key: KeyEvent) -> KeyAction {
        let now = Instant::now();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return KeyAction::Quit;
            }
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(digit) = c.to_digit(10) {
                    if let (Some(ranges), Some(criteria)) =
                        (self.ranges.as_ref(), self.criteria.as_mut())
                    {
                        filters::toggle_member(criteria, ranges, digit);
                        self.issue_search();
                    }
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let delta = if key.code == KeyCode::Left { -1 } else { 1 };
                if let (Some(ranges), Some(criteria)) =
                    (self.ranges.as_ref(), self.criteria.as_mut())
                {
                    if key.modifiers.contains(KeyModifiers::ALT) {
                        filters::adjust_album_min(criteria, ranges, delta);
                    } else {
                        filters::adjust_creation_min(criteria, ranges, delta);
                    }
                    self.issue_search();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
                self.on_text_changed(now);
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.on_text_changed(now);
            }
            KeyCode::Down => {
                if self.panel.is_empty() {
                    self.presenter.select_next();
                    self.queue_image_loads();
                } else {
                    self.panel.move_down(SUGGESTION_LIMIT);
                }
                self.dirty = true;
            }
            KeyCode::Up => {
                if self.panel.is_empty() {
                    self.presenter.select_prev();
                    self.queue_image_loads();
                } else {
                    self.panel.move_up();
                }
                self.dirty = true;
            }
            KeyCode::Enter => {
                if let Some(text) = self.panel.select(&mut self.debounce, &mut self.session) {
                    self.query = text;
                    self.issue_search();
                } else if !self.panel.is_empty() {
                    // List open but nothing highlighted: search the typed
                    // text as-is, right now.
                    self.panel.clear();
                    self.debounce.cancel();
                    self.session.invalidate();
                    self.issue_search();
                } else if let Some(card) = self.presenter.selected() {
                    return KeyAction::OpenArtist(card.artist.id);
                }
            }
            KeyCode::Esc => {
                if self.panel.is_empty() {
                    return KeyAction::Quit;
                }
                self.panel.clear();
                self.session.invalidate();
                self.dirty = true;
            }
            _ => {}
        }
        KeyAction::Continue
    }

    fn on_tick(&mut self) {
        let now = Instant::now();
        if let Some(text) = self.debounce.poll(now) {
            self.issue_suggestions(text);
            self.issue_search();
        }
        if self.banner.poll(now) {
            self.dirty = true;
        }
        self.queue_image_loads();
    }

    fn on_search_done(&mut self, generation: u64, result: Result<Vec<Artist>, String>) {
        match self.orchestrator.complete(generation, result) {
            SearchOutcome::Stale => {}
            SearchOutcome::Results {
                artists,
                derive_ranges,
            } => {
                if derive_ranges {
                    if let Some(ranges) = FilterRanges::derive(&artists) {
                        let defaults = ranges.default_criteria();
                        let criteria = criteria_from_options(&ranges, &self.options);
                        let narrowed = criteria != defaults;
                        self.criteria = Some(criteria);
                        self.ranges = Some(ranges);
                        // Launch flags behave like an immediate filter change
                        // once the controls exist.
                        if narrowed {
                            self.issue_search();
                        }
                    }
                }
                self.presenter.set_results(artists);
                self.queue_image_loads();
                self.dirty = true;
            }
            SearchOutcome::Failed(_) => {
                self.banner
                    .show_error("Failed to search artists", Instant::now());
                self.dirty = true;
            }
        }
    }

    fn on_suggest_done(&mut self, seq: u64, result: Result<Vec<Suggestion>, String>) {
        if !self.session.accept(seq) {
            return;
        }
        match result {
            Ok(suggestions) => self.panel.set_items(suggestions),
            // Suggestion failures only clear the list; no banner.
            Err(_) => self.panel.clear(),
        }
        self.dirty = true;
    }

    fn draw(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0), cursor::Hide)?;

        let loading = if self.orchestrator.is_loading() {
            "  [searching...]".dimmed().to_string()
        } else {
            String::new()
        };
        write!(
            stdout,
            "{}\r\nSearch: {}{}{}\r\n",
            "groupli".bold().cyan(),
            self.query,
            "▏".dimmed(),
            loading
        )?;

        if let Some((kind, message)) = self.banner.message() {
            let styled = match kind {
                BannerKind::Error => message.red().bold().to_string(),
                BannerKind::Notice => message.green().to_string(),
            };
            write!(stdout, "{}\r\n", styled)?;
        }

        for (index, suggestion) in self.panel.items().iter().take(SUGGESTION_LIMIT).enumerate() {
            let line = format!("  {} ({})", suggestion.text, suggestion.kind.dimmed());
            if Some(index) == self.panel.cursor() {
                write!(stdout, "{}\r\n", line.black().on_cyan())?;
            } else {
                write!(stdout, "{}\r\n", line)?;
            }
        }

        if let (Some(ranges), Some(criteria)) = (self.ranges.as_ref(), self.criteria.as_ref()) {
            let members = if criteria.members.is_empty() {
                "any".to_string()
            } else {
                criteria
                    .members
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            };
            let cities = if criteria.locations.is_empty() {
                "anywhere".to_string()
            } else {
                criteria.locations.join(", ")
            };
            write!(
                stdout,
                "{}\r\n",
                format!(
                    "Filters: created ≥ {} [{}-{}] · first album ≥ {} [{}-{}] · members {} · {}",
                    criteria.creation_year_min,
                    ranges.creation_years.0,
                    ranges.creation_years.1,
                    criteria.first_album_year_min,
                    ranges.first_album_years.0,
                    ranges.first_album_years.1,
                    members,
                    cities
                )
                .dimmed()
            )?;
        }

        write!(stdout, "\r\n")?;
        for line in self.presenter.render_lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        write!(
            stdout,
            "\r\n{}\r\n",
            "type to search · ↑↓ move · Enter open · ←→ created min · Alt+←→ album min · Alt+1-9 members · Esc quit"
                .dimmed()
        )?;
        stdout.flush()
    }
}

async fn fetch_image(url: &str) -> Result<usize, reqwest::Error> {
    let client = Client::new();
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.len())
}

/// Forwards key presses from a blocking reader thread into the event channel.
/// While `suspended` is set (a detail view owns the terminal) the thread
/// leaves the input stream alone.
fn spawn_key_reader(tx: mpsc::UnboundedSender<AppEvent>, suspended: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            if suspended.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(50));
                continue;
            }
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press
                            && tx.send(AppEvent::Key(key)).is_err()
                        {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

async fn interactive(options: SearchOptions) -> Res<()> {
    terminal::enable_raw_mode()?;
    let result = run_loop(options).await;
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show)?;
    result
}

async fn run_loop(options: SearchOptions) -> Res<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let suspended = Arc::new(AtomicBool::new(false));
    spawn_key_reader(tx.clone(), suspended.clone());

    let mut app = SearchApp::new(options, tx);
    app.issue_search();

    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    loop {
        tokio::select! {
            maybe_event = rx.recv() => {
                let Some(event) = maybe_event else { break; };
                match event {
                    AppEvent::Key(key) => match app.on_key(key) {
                        KeyAction::Continue => {}
                        KeyAction::Quit => break,
                        KeyAction::OpenArtist(id) => {
                            suspended.store(true, Ordering::SeqCst);
                            terminal::disable_raw_mode()?;
                            execute!(
                                io::stdout(),
                                Clear(ClearType::All),
                                cursor::MoveTo(0, 0),
                                cursor::Show
                            )?;
                            super::artist::show_artist(id, false).await;
                            terminal::enable_raw_mode()?;
                            suspended.store(false, Ordering::SeqCst);
                            app.dirty = true;
                        }
                    },
                    AppEvent::SearchDone { generation, result } => {
                        app.on_search_done(generation, result);
                    }
                    AppEvent::SuggestDone { seq, result } => {
                        app.on_suggest_done(seq, result);
                    }
                    AppEvent::ImageDone { epoch, index, description } => {
                        app.presenter.image_loaded(epoch, index, description);
                        app.dirty = true;
                    }
                }
            }
            _ = ticker.tick() => app.on_tick(),
        }
        if app.dirty {
            app.draw()?;
            app.dirty = false;
        }
    }
    Ok(())
}
