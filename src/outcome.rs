//! Tagged fetch outcomes.
//!
//! Composite operations that can complete with partial or fabricated data
//! return [`Fetched`] so callers can distinguish real results from degraded
//! ones instead of receiving silently substituted values.

// ---------------------------------------------------------------------------
// Fetched
// ---------------------------------------------------------------------------

/// A successful fetch that may carry degraded data.
///
/// `Degraded` means the operation completed but the payload is partial or
/// synthesized (e.g. offers relabeled from listings, an orderbook snapshot
/// missing some per-token activity). The reason names what was lost.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Fresh(T),
    Degraded { data: T, reason: String },
}

impl<T> Fetched<T> {
    /// True if the payload is partial or synthesized.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Fetched::Degraded { .. })
    }

    /// The degradation reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Fetched::Fresh(_) => None,
            Fetched::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Borrow the payload regardless of provenance.
    pub fn data(&self) -> &T {
        match self {
            Fetched::Fresh(data) => data,
            Fetched::Degraded { data, .. } => data,
        }
    }

    /// Consume the outcome, discarding the provenance tag.
    pub fn into_inner(self) -> T {
        match self {
            Fetched::Fresh(data) => data,
            Fetched::Degraded { data, .. } => data,
        }
    }
}
