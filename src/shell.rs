//! Line-driven terminal loop around a [`QueryOrchestrator`]
//!
//! Each input line is a city name, or one of the commands `:cancel` and
//! `:quit`. Lookups run on spawned tasks and report back over a channel, so
//! the loop stays the only place that touches the orchestrator state.

use crate::api::{ForecastFetcher, GeocodeResolver};
use crate::display;
use crate::orchestrator::{Outcome, QueryOrchestrator, RequestState, Submission};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::debug;

pub const BUSY_TEXT: &str = "Still looking up the previous city, please wait.";
pub const NOTHING_TO_CANCEL_TEXT: &str = "Nothing to cancel.";

fn show<W: Write>(out: &mut W, state: &RequestState) -> Result<()> {
    write!(out, "{}", display::render(state))?;
    out.flush()?;
    Ok(())
}

fn say<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Read queries from `input` until `:quit` or end of input.
///
/// When input ends while a lookup is loading, the loop keeps waiting for that
/// lookup and renders its result before returning.
pub async fn run<G, F, R, W>(
    orchestrator: &mut QueryOrchestrator<G, F>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    G: GeocodeResolver + 'static,
    F: ForecastFetcher + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let pipeline = orchestrator.pipeline();
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let mut lines = input.lines();
    let mut input_closed = false;

    show(out, orchestrator.state())?;

    loop {
        if input_closed && !orchestrator.state().is_loading() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !input_closed => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("Input closed");
                    input_closed = true;
                    continue;
                };
                match line.trim() {
                    ":quit" | ":q" => break,
                    ":cancel" => {
                        if orchestrator.abandon() {
                            show(out, orchestrator.state())?;
                        } else {
                            say(out, NOTHING_TO_CANCEL_TEXT)?;
                        }
                    }
                    query => match orchestrator.begin(query) {
                        Submission::Empty => {}
                        Submission::Busy => say(out, BUSY_TEXT)?,
                        Submission::Started(ticket) => {
                            show(out, orchestrator.state())?;
                            let pipeline = pipeline.clone();
                            let tx = tx.clone();
                            tokio::spawn(async move {
                                let _ = tx.send(pipeline.run(ticket).await);
                            });
                        }
                    },
                }
            }
            Some(outcome) = rx.recv() => {
                if orchestrator.complete(outcome) {
                    show(out, orchestrator.state())?;
                }
            }
        }
    }

    Ok(())
}
