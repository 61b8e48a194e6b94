use colored::Colorize;

use crate::types::Artist;

pub const EMPTY_RESULTS_MESSAGE: &str = "No artists found matching your criteria.";
pub const IMAGE_PLACEHOLDER: &str = "placeholder.jpg";

/// Cards within this many positions of the viewport edge count as visible for
/// image loading purposes.
const LOAD_MARGIN: usize = 1;

/// Lifecycle of a card's image: placeholder until the card scrolls into view,
/// then requested exactly once, then swapped for the loaded description. A
/// card is never watched again after its request is issued.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    Placeholder,
    Requested,
    Loaded(String),
}

#[derive(Debug)]
pub struct ArtistCard {
    pub artist: Artist,
    pub image: ImageState,
}

/// Renders result cards and defers image loading until a card is visible.
///
/// No pagination: the full result sequence received is kept; the viewport is
/// a scrolling window over it. `epoch` ties asynchronous image completions to
/// the result set they were issued for.
#[derive(Debug)]
pub struct ResultsPresenter {
    cards: Vec<ArtistCard>,
    selected: usize,
    scroll: usize,
    viewport: usize,
    epoch: u64,
}

impl ResultsPresenter {
    /// `viewport` is the number of cards visible at once.
    pub fn new(viewport: usize) -> Self {
        Self {
            cards: Vec::new(),
            selected: 0,
            scroll: 0,
            viewport: viewport.max(1),
            epoch: 0,
        }
    }

    /// Replaces the card list with a fresh result set. All image states reset
    /// to placeholders and a new epoch begins; stale image completions from
    /// the previous set are ignored from here on.
    pub fn set_results(&mut self, artists: Vec<Artist>) {
        self.cards = artists
            .into_iter()
            .map(|artist| ArtistCard {
                artist,
                image: ImageState::Placeholder,
            })
            .collect();
        self.selected = 0;
        self.scroll = 0;
        self.epoch += 1;
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[ArtistCard] {
        &self.cards
    }

    pub fn selected(&self) -> Option<&ArtistCard> {
        self.cards.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
            if self.selected >= self.scroll + self.viewport {
                self.scroll = self.selected + 1 - self.viewport;
            }
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.scroll {
                self.scroll = self.selected;
            }
        }
    }

    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.scroll + self.viewport).min(self.cards.len());
        self.scroll..end
    }

    /// Collects the image loads that became due: every placeholder card
    /// within the viewport plus the proximity margin. Each returned card is
    /// marked requested and will never be returned again. Cards without an
    /// image URL are consumed silently.
    pub fn take_pending_loads(&mut self) -> Vec<(usize, String)> {
        let start = self.scroll.saturating_sub(LOAD_MARGIN);
        let end = (self.scroll + self.viewport + LOAD_MARGIN).min(self.cards.len());

        let mut due = Vec::new();
        for index in start..end {
            let card = &mut self.cards[index];
            if card.image != ImageState::Placeholder {
                continue;
            }
            card.image = ImageState::Requested;
            if !card.artist.image.is_empty() {
                due.push((index, card.artist.image.clone()));
            }
        }
        due
    }

    /// Swaps the real image in once its load completes. Completions from an
    /// earlier result set (stale epoch) are dropped.
    pub fn image_loaded(&mut self, epoch: u64, index: usize, description: String) {
        if epoch != self.epoch {
            return;
        }
        if let Some(card) = self.cards.get_mut(index) {
            if card.image == ImageState::Requested {
                card.image = ImageState::Loaded(description);
            }
        }
    }

    /// Renders the visible cards (or the explicit empty state) as plain
    /// terminal lines.
    pub fn render_lines(&self) -> Vec<String> {
        if self.cards.is_empty() {
            return vec![EMPTY_RESULTS_MESSAGE.dimmed().to_string()];
        }

        let mut lines = Vec::new();
        for index in self.visible_range() {
            let card = &self.cards[index];
            let cursor = if index == self.selected { ">" } else { " " };
            lines.push(format!(
                "{} {}  {}",
                cursor.cyan().bold(),
                card.artist.name.bold(),
                format!("(#{})", card.artist.id).dimmed()
            ));
            lines.push(format!(
                "    Created: {}   First album: {}",
                card.artist.creation_date, card.artist.first_album
            ));
            let image = match &card.image {
                ImageState::Placeholder | ImageState::Requested => {
                    IMAGE_PLACEHOLDER.dimmed().to_string()
                }
                ImageState::Loaded(description) => description.clone(),
            };
            lines.push(format!("    {}", image));
        }
        lines.push(
            format!(
                "  {} of {} artists",
                self.visible_range().len(),
                self.cards.len()
            )
            .dimmed()
            .to_string(),
        );
        lines
    }
}
