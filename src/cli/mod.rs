//! # CLI Module
//!
//! The user-facing command layer. It wires the `ui` controllers to the
//! terminal and the catalog backend:
//!
//! - [`run_search`] - the list page: an interactive raw-mode session with
//!   debounced suggestions, range/set filters and scrollable result cards,
//!   or a one-shot table in plain mode
//! - [`show_artist`] - the detail page: info sections plus the tour map with
//!   its marker/popup lifecycle, favorites toggle and sharing
//! - [`list_favorites`] / [`toggle_favorite`] - the persisted favorites set
//!   from the shell
//!
//! Long-running fetches show spinners in plain mode; interactive sessions use
//! transient banners instead, so raw-mode output stays clean. Every request
//! path releases its loading indication on success and failure alike.

mod artist;
mod favorites;
mod search;
mod share;

pub use artist::show_artist;
pub use favorites::list_favorites;
pub use favorites::toggle_favorite;
pub use search::SearchOptions;
pub use search::run_search;
