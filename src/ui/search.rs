use crate::types::Artist;

/// Classification of a completed search request.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    /// A newer request superseded this one; results and the loading
    /// indicator are untouched.
    Stale,
    /// The latest request succeeded. `derive_ranges` is true exactly once per
    /// session, on the first successful result set (even an empty one, which
    /// then no-ops in the deriver and consumes the one-time trigger).
    Results {
        artists: Vec<Artist>,
        derive_ranges: bool,
    },
    /// The latest request failed; the caller surfaces a transient banner.
    Failed(String),
}

/// Orders concurrent search requests and owns the loading indicator.
///
/// Every trigger (initial load, text change post-debounce, any filter change,
/// slider step) calls [`begin`](Self::begin) to obtain a generation, issues
/// one request, and feeds the completion back through
/// [`complete`](Self::complete). Only the most recently issued generation may
/// hide the indicator or deliver results; overlapping requests can therefore
/// never leave the indicator stuck or let a slow old response overwrite a
/// newer one.
#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    next_generation: u64,
    latest: u64,
    loading: bool,
    ranges_derived: bool,
}

impl SearchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request generation and shows the loading indicator.
    pub fn begin(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.latest = generation;
        self.loading = true;
        generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Classifies a completed request and releases the loading indicator when
    /// the completion belongs to the latest generation, success or failure
    /// alike.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<Vec<Artist>, String>,
    ) -> SearchOutcome {
        if generation != self.latest {
            return SearchOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(artists) => {
                let derive_ranges = !self.ranges_derived;
                self.ranges_derived = true;
                SearchOutcome::Results {
                    artists,
                    derive_ranges,
                }
            }
            Err(message) => SearchOutcome::Failed(message),
        }
    }
}
