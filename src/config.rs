//! Sub-root configuration: the newline-separated prefix list and the
//! debounced commit buffer that turns settings edits into registry rebuilds.

use std::time::{Duration, Instant};

/// The parsed sub-root configuration: an ordered list of prefixes.
///
/// Parsing is tolerant by design. Blank and whitespace-only lines are
/// ignored, entries are trimmed and stripped of trailing separators, and a
/// duplicate prefix collapses onto its first occurrence. Empty text yields
/// an empty configuration, which makes every resolution fall back to the
/// host's native behaviour.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootsConfig {
    prefixes: Vec<String>,
}

impl RootsConfig {
    /// Parses a newline-separated list of sub-root prefixes.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut prefixes: Vec<String> = Vec::new();

        for line in text.lines() {
            let prefix = line.trim().trim_end_matches('/');
            if prefix.is_empty() {
                continue;
            }
            if !prefixes.iter().any(|existing| existing == prefix) {
                prefixes.push(prefix.to_string());
            }
        }

        Self { prefixes }
    }

    /// The configured prefixes, in configuration order.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether no sub-roots are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Default quiet period before pending settings edits are committed.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(4);

/// Accumulates settings edits and commits them after a quiet period.
///
/// Every keystroke in a settings surface calls [`record`]; only once no
/// further edit has arrived for the quiet period does [`poll`] hand back a
/// parsed [`RootsConfig`], and only that commit should trigger a registry
/// rebuild. [`flush`] commits immediately, for teardown or an explicit
/// "apply now".
///
/// [`record`]: Self::record
/// [`poll`]: Self::poll
/// [`flush`]: Self::flush
#[derive(Debug, Clone)]
pub struct DebouncedEdits {
    pending: Option<String>,
    deadline: Option<Instant>,
    quiet_period: Duration,
}

impl Default for DebouncedEdits {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl DebouncedEdits {
    /// Creates a buffer with the given quiet period.
    #[must_use]
    pub const fn new(quiet_period: Duration) -> Self {
        Self {
            pending: None,
            deadline: None,
            quiet_period,
        }
    }

    /// Records the latest settings text and re-arms the commit deadline.
    pub fn record(&mut self, text: impl Into<String>) {
        self.pending = Some(text.into());
        self.deadline = Some(Instant::now() + self.quiet_period);
    }

    /// Whether an edit is recorded but not yet committed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Commits the pending text if the quiet period has elapsed.
    ///
    /// Returns `None` while no edit is pending or the deadline has not
    /// passed yet. The caller is expected to invoke this from a timer or
    /// event-loop tick.
    pub fn poll(&mut self) -> Option<RootsConfig> {
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.flush()
    }

    /// Commits the pending text immediately, bypassing the quiet period.
    pub fn flush(&mut self) -> Option<RootsConfig> {
        self.deadline = None;
        self.pending.take().map(|text| RootsConfig::parse(&text))
    }
}
