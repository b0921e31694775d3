//! Nearby-facility results attached to chat replies.
//!
//! The backend returns a list of facilities (or a single entry carrying an
//! `error`) with each reply. `FacilityResultState` keeps only the most recent
//! list and decides what a view should show for it.

use serde::{Deserialize, Serialize};

/// Kind of medical facility. Unrecognized backend values map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityType {
    Hospital,
    Clinic,
    Doctors,
    Pharmacy,
    #[default]
    #[serde(other)]
    Unknown,
}

impl FacilityType {
    pub fn label(self) -> &'static str {
        match self {
            FacilityType::Hospital => "hospital",
            FacilityType::Clinic => "clinic",
            FacilityType::Doctors => "doctors",
            FacilityType::Pharmacy => "pharmacy",
            FacilityType::Unknown => "unknown",
        }
    }
}

/// One facility, or a lookup failure when `error` is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FacilityEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: FacilityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FacilityEntry {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unnamed Facility",
        }
    }

    /// The lookup error carried by this entry, if it is non-empty.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Map link for directions, when both coordinates are known.
    pub fn directions_url(&self) -> Option<String> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(directions_url(lat, lon)),
            _ => None,
        }
    }
}

/// Google Maps directions link to the given coordinates.
pub fn directions_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lon}")
}

/// What a view should render for the current facility results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FacilityView<'a> {
    /// No results; render nothing.
    Hidden,
    /// A lookup error suppresses every other entry.
    Error(&'a str),
    /// Results exist but the list is folded away.
    Collapsed { count: usize },
    Expanded(&'a [FacilityEntry]),
}

/// The most recent facility list plus its expand/collapse flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityResultState {
    entries: Vec<FacilityEntry>,
    expanded: bool,
    /// Bumped on every replacement, including one with an identical list.
    #[serde(default)]
    revision: u64,
}

impl FacilityResultState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            expanded: true,
            revision: 0,
        }
    }

    /// Discard the previous entries and keep `entries` in the given order.
    /// The expand/collapse flag is left as it was.
    pub fn replace(&mut self, entries: Vec<FacilityEntry>) {
        self.entries = entries;
        self.revision += 1;
    }

    /// Flip the expand/collapse flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn entries(&self) -> &[FacilityEntry] {
        &self.entries
    }

    /// Number of replacements so far. Views use it to tell a fresh result
    /// from the one they already showed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Error text of the first entry (in sequence order) that carries one.
    pub fn first_error(&self) -> Option<&str> {
        self.entries.iter().find_map(FacilityEntry::error_text)
    }

    pub fn view(&self) -> FacilityView<'_> {
        if self.entries.is_empty() {
            return FacilityView::Hidden;
        }
        if let Some(error) = self.first_error() {
            return FacilityView::Error(error);
        }
        if self.expanded {
            FacilityView::Expanded(&self.entries)
        } else {
            FacilityView::Collapsed {
                count: self.entries.len(),
            }
        }
    }

    /// Label for the expand/collapse affordance.
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Hide"
        } else {
            "Show"
        }
    }
}

impl Default for FacilityResultState {
    fn default() -> Self {
        Self::new()
    }
}
