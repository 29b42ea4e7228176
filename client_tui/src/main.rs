//! Terminal Pong: W/S (or arrows) against the computer.
//!
//! Usage:
//!   cargo run --release -p client_tui
//!   RUST_LOG=game_core=debug cargo run -p client_tui 2>pong.log

mod clock;
mod input;
mod renderer;
mod terminal;

use anyhow::Context;
use game_core::{Config, GameRng, Match};
use std::io::stdout;
use tracing_subscriber::EnvFilter;

use crate::clock::FrameClock;
use crate::input::TerminalInput;
use crate::renderer::TerminalRenderer;
use crate::terminal::TerminalSession;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::new();
    let frame = config.frame_duration();
    let mut game =
        Match::new(config, GameRng::from_entropy()).context("invalid game configuration")?;

    let session = TerminalSession::start().context("failed to set up the terminal")?;
    let mut renderer = TerminalRenderer::new(stdout());
    let mut input = TerminalInput::new(session.key_release());
    let mut clock = FrameClock::new(frame);

    let result = game.run(&mut renderer, &mut input, &mut clock);
    drop(session);

    result.context("game loop aborted")
}
