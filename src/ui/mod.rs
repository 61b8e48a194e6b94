//! # UI Controller Module
//!
//! The interactive query-and-visualization orchestration layer. Each
//! controller owns its own explicit state with defined construction and
//! teardown, takes its inputs as values, and reports outcomes as plain data;
//! rendering and network work stay in the `cli` layer. This keeps the timer,
//! ordering and exclusivity rules testable without a terminal or a backend.
//!
//! - [`filters`] - slider bounds and checkbox option sets derived from a
//!   dataset snapshot, plus the criteria mutations the controls perform
//! - [`suggest`] - quiet-period coalescing of keystrokes and stale-response
//!   sequencing for suggestion requests
//! - [`search`] - search request generations, loading-indicator release
//!   discipline, one-time filter initialization
//! - [`results`] - artist cards, empty state, viewport scrolling and
//!   visibility-triggered one-shot image loading
//! - [`map`] - marker placement over an opaque map surface, single-active
//!   popup exclusivity, viewport bounds fitting
//! - [`status`] - transient auto-dismissing banners

pub mod filters;
pub mod map;
pub mod results;
pub mod search;
pub mod status;
pub mod suggest;
