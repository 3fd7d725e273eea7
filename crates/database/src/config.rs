//! Engine configuration.

/// How the implicit-update mechanism scans replacement candidates for a
/// stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplacementScan {
    /// Stop scanning candidates at the first primary-key mismatch. This
    /// reproduces the historical behavior and only finds replacements when
    /// the candidate list is aligned with stored order.
    #[default]
    AbortOnFirstMismatch,
    /// Continue with the next candidate on a primary-key mismatch: a full
    /// linear search.
    FullScan,
}

/// Configuration handed to the engine at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfig {
    /// Whether truncate operations are permitted.
    pub allow_truncation: bool,
    /// Replacement-candidate scan strategy for implicit updates.
    pub replacement_scan: ReplacementScan,
}

impl EngineConfig {
    /// Permits truncation.
    pub fn allow_truncation(mut self, allow: bool) -> Self {
        self.allow_truncation = allow;
        self
    }

    /// Sets the replacement-candidate scan strategy.
    pub fn replacement_scan(mut self, scan: ReplacementScan) -> Self {
        self.replacement_scan = scan;
        self
    }
}
