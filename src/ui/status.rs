use std::time::{Duration, Instant};

/// Banner lifetime before auto-dismissal.
pub const BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Notice,
}

/// A transient, auto-dismissing status banner. A new banner replaces any
/// visible one and restarts the dismissal timer.
#[derive(Debug, Default)]
pub struct StatusBanner {
    current: Option<(BannerKind, String, Instant)>,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((BannerKind::Error, message.into(), now));
    }

    pub fn show_notice(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((BannerKind::Notice, message.into(), now));
    }

    /// Dismisses an expired banner; returns true when the display changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, _, shown_at)) if now.duration_since(*shown_at) >= BANNER_TTL => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<(BannerKind, &str)> {
        self.current
            .as_ref()
            .map(|(kind, message, _)| (*kind, message.as_str()))
    }
}
