//! Interactive chat loop over a line reader and a terminal writer.
//!
//! Input stays live while a reply is outstanding; a second message in that
//! window is turned away by the controller's busy guard.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;

use medassist_chat::{ChatSessionController, DispatchOutcome, SubmitRejection};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::view::TranscriptView;

type InFlight = Pin<Box<dyn Future<Output = DispatchOutcome>>>;

const HELP: &str = "Commands: /location [place]  /facilities  /help  /quit";
const BUSY_NOTICE: &str = "(still waiting for the previous reply)";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Quit,
    Help,
    ToggleLocationPrompt,
    SetLocation(&'a str),
    ToggleFacilities,
    Say(&'a str),
}

impl<'a> Command<'a> {
    /// Interpret one input line. While the location prompt is open, plain
    /// text is taken as the location.
    pub(crate) fn parse(line: &'a str, location_prompt_open: bool) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/quit" | "/exit" => return Command::Quit,
            "/help" => return Command::Help,
            "/facilities" => return Command::ToggleFacilities,
            "/location" => return Command::ToggleLocationPrompt,
            _ => {}
        }
        if let Some(place) = trimmed.strip_prefix("/location ") {
            return Command::SetLocation(place.trim());
        }
        if location_prompt_open {
            Command::SetLocation(trimmed)
        } else {
            Command::Say(line)
        }
    }
}

async fn next_outcome(in_flight: &mut Option<InFlight>) -> DispatchOutcome {
    match in_flight {
        Some(dispatch) => dispatch.await,
        None => std::future::pending().await,
    }
}

/// Drive `controller` from `input` lines until EOF or `/quit`, rendering to
/// `out`. A reply still outstanding at that point is awaited and shown
/// before returning.
pub(crate) async fn run<R, W>(
    controller: &mut ChatSessionController,
    input: R,
    out: &mut W,
) -> medassist_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut view = TranscriptView::new();
    let mut in_flight: Option<InFlight> = None;

    writeln!(out, "{HELP}")?;
    view.render(&controller.snapshot(), out)?;

    loop {
        tokio::select! {
            outcome = next_outcome(&mut in_flight) => {
                in_flight = None;
                controller.resolve(outcome);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                match Command::parse(&line, controller.location_prompt_open()) {
                    Command::Quit => break,
                    Command::Help => writeln!(out, "{HELP}")?,
                    Command::ToggleLocationPrompt => {
                        controller.toggle_location_prompt();
                    }
                    Command::SetLocation(place) => controller.set_location(place),
                    Command::ToggleFacilities => {
                        controller.toggle_facilities();
                    }
                    Command::Say(text) => match controller.submit(text) {
                        Ok(dispatch) => in_flight = Some(Box::pin(dispatch.run())),
                        Err(SubmitRejection::Busy) => writeln!(out, "{BUSY_NOTICE}")?,
                        Err(SubmitRejection::LocationRequired | SubmitRejection::Blank) => {}
                    },
                }
            }
        }
        view.render(&controller.snapshot(), out)?;
    }

    if let Some(dispatch) = in_flight.take() {
        debug!("waiting for the outstanding reply before exit");
        controller.resolve(dispatch.await);
        view.render(&controller.snapshot(), out)?;
    }
    Ok(())
}
