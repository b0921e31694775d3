//! Location gate: decides whether a question needs a known location
//! before it is worth sending.
//!
//! The check is a plain case-insensitive substring match against a fixed
//! keyword list. Any hit is enough; there is no stemming or negation
//! handling, so "no clinic please" still requires a location.

/// Keywords that mark a query as location-dependent.
pub const LOCATION_KEYWORDS: [&str; 5] = ["clinic", "hospital", "doctor", "facility", "nearby"];

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationGate;

impl LocationGate {
    pub fn new() -> Self {
        Self
    }

    pub fn requires_location(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        LOCATION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
    }

    /// Whether `text` must be held back because `location` is unset.
    pub fn blocks(&self, text: &str, location: &str) -> bool {
        location.trim().is_empty() && self.requires_location(text)
    }
}
