//! Headless line presenter.
//!
//! Reads one command per line (`start N`, `swap I J`, `check`, `giveup`,
//! `state`, `quit`) and answers with one JSON message per line. Blank lines and
//! lines starting with `#` are skipped.

pub mod protocol;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::ScoringRules;
use crate::engine::{Controller, Presenter, RoundEvent};
use crate::types::GameCommand;

pub use protocol::{OutboundMessage, StateMessage};

/// Writes each notification as a JSON line.
///
/// [`Presenter::present`] cannot fail, so the first write error is kept and
/// surfaced by [`LinePresenter::take_error`].
pub struct LinePresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LinePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn send(&mut self, msg: &OutboundMessage) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = write_line(&mut self.out, msg) {
            self.error = Some(e);
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_line<W: Write>(out: &mut W, msg: &OutboundMessage) -> io::Result<()> {
    serde_json::to_writer(&mut *out, msg)?;
    out.write_all(b"\n")?;
    out.flush()
}

impl<W: Write> Presenter for LinePresenter<W> {
    fn present(&mut self, event: &RoundEvent) {
        self.send(&OutboundMessage::from(event));
    }
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessRequest {
    Command(GameCommand),
    State,
    Quit,
}

impl HeadlessRequest {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "state" => Some(HeadlessRequest::State),
            "quit" | "exit" => Some(HeadlessRequest::Quit),
            _ => GameCommand::parse(line).map(HeadlessRequest::Command),
        }
    }
}

/// Play rounds from `input` until EOF or `quit`, writing messages to `output`.
pub fn run<R: BufRead, W: Write>(
    seed: u32,
    item_count: usize,
    rules: ScoringRules,
    input: R,
    output: W,
) -> Result<W> {
    let mut controller = Controller::start(seed, item_count, rules, LinePresenter::new(output))
        .context("headless: cannot deal the first round")?;
    info!(seed, item_count, "headless session started");

    for line in input.lines() {
        let line = line.context("headless: read error")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match HeadlessRequest::parse(trimmed) {
            Some(HeadlessRequest::Command(command)) => {
                // Rejections are already reported to the presenter.
                let _ = controller.dispatch(command);
            }
            Some(HeadlessRequest::State) => {
                let state = StateMessage::from(&controller.snapshot());
                controller
                    .presenter_mut()
                    .send(&OutboundMessage::State(state));
            }
            Some(HeadlessRequest::Quit) => break,
            None => {
                debug!(line = trimmed, "unrecognized headless input");
                controller.presenter_mut().send(&OutboundMessage::Error {
                    message: format!("unrecognized command: {}", trimmed),
                });
            }
        }

        if let Some(e) = controller.presenter_mut().take_error() {
            return Err(e).context("headless: write error");
        }
    }

    Ok(controller.into_presenter().into_inner())
}

/// Run against the process stdin/stdout.
pub fn run_stdio(config: &AppConfig, seed: u32) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        seed,
        config.items,
        config.rules(),
        stdin.lock(),
        stdout.lock(),
    )?;
    Ok(())
}
