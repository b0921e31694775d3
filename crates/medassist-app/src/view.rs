//! Line-oriented rendering of controller snapshots.
//!
//! The terminal is append-only, so the view remembers what it already
//! printed and only writes what changed since the previous snapshot.

use std::io::{self, Write};

use chrono::Local;
use medassist_chat::{FacilityEntry, FacilityResultState, FacilityView, Message, StateSnapshot};

pub(crate) const LOCATION_WARNING: &str =
    "Please set your location to get nearby clinics and hospitals.";
pub(crate) const THINKING: &str = "Thinking...";
const FACILITIES_TITLE: &str = "Nearby Medical Facilities";

#[derive(Debug, Default)]
pub(crate) struct TranscriptView {
    printed: usize,
    warning_shown: bool,
    thinking_shown: bool,
    prompt_shown: bool,
    facilities: Option<FacilityResultState>,
}

impl TranscriptView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn render(&mut self, snapshot: &StateSnapshot, out: &mut impl Write) -> io::Result<()> {
        if snapshot.location_warning_active && !self.warning_shown {
            writeln!(out, "! {LOCATION_WARNING}")?;
        }
        self.warning_shown = snapshot.location_warning_active;

        for message in snapshot.messages.iter().skip(self.printed) {
            write_message(out, message)?;
        }
        self.printed = snapshot.messages.len();

        if self.facilities.as_ref() != Some(&snapshot.facilities) {
            write_facilities(out, &snapshot.facilities)?;
            self.facilities = Some(snapshot.facilities.clone());
        }

        if snapshot.awaiting_response && !self.thinking_shown {
            writeln!(out, "Assistant: {THINKING}")?;
        }
        self.thinking_shown = snapshot.awaiting_response;

        if snapshot.location_prompt_open && !self.prompt_shown {
            writeln!(out, "Enter your location:")?;
        }
        self.prompt_shown = snapshot.location_prompt_open;

        out.flush()
    }
}

fn write_message(out: &mut impl Write, message: &Message) -> io::Result<()> {
    let who = if message.is_user() { "You" } else { "Assistant" };
    let at = message.sent_at.with_timezone(&Local).format("%H:%M");
    writeln!(out, "[{at}] {who}: {}", message.text)
}

fn write_facilities(out: &mut impl Write, state: &FacilityResultState) -> io::Result<()> {
    match state.view() {
        FacilityView::Hidden => Ok(()),
        FacilityView::Error(error) => {
            writeln!(out, "-- {FACILITIES_TITLE} --")?;
            writeln!(out, "   Error: {error}")
        }
        FacilityView::Collapsed { count } => writeln!(
            out,
            "-- {FACILITIES_TITLE} [{}] -- ({count} hidden, /facilities to expand)",
            state.toggle_label()
        ),
        FacilityView::Expanded(entries) => {
            writeln!(out, "-- {FACILITIES_TITLE} [{}] --", state.toggle_label())?;
            for (i, entry) in entries.iter().enumerate() {
                write_entry(out, i + 1, entry)?;
            }
            Ok(())
        }
    }
}

fn write_entry(out: &mut impl Write, number: usize, entry: &FacilityEntry) -> io::Result<()> {
    writeln!(
        out,
        "{number:>3}. {} ({})",
        entry.display_name(),
        capitalize(entry.kind.label())
    )?;
    if let Some(ref address) = entry.address {
        writeln!(out, "     {address}")?;
    }
    if let Some(url) = entry.directions_url() {
        writeln!(out, "     Directions: {url}")?;
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
