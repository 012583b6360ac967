//! Terminal crush runner (default binary).
//!
//! Interactive mode draws the grid with the framebuffer renderer and waits for
//! keys; the game is turn based, so there is no tick loop. `--text` mode prints
//! the board and reads `row col` lines instead.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_crush::config::{Cli, GameConfig};
use tui_crush::core::GridSnapshot;
use tui_crush::input::{handle_key_event, should_quit};
use tui_crush::session::Session;
use tui_crush::term::{render_text, FrameBuffer, GridView, HudView, TerminalRenderer, Viewport};

fn init_tracing(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    if cli.text {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
    } else if let Some(path) = &cli.log_path {
        // The alternate screen owns stdout/stderr; interactive logs go to a file.
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = GameConfig::from_cli(&cli);
    info!(?config, "configuration resolved");
    let mut session = Session::new(config).context("cannot start a game")?;

    if cli.text {
        return run_text(&mut session);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GridSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.grid().snapshot_into(&mut snap);
        let hud = HudView {
            cursor: session.cursor(),
            message: session.message(),
        };
        view.render_into_with_hud(&snap, Some(&hud), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply(action)?;
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn run_text(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", render_text(&session.snapshot()))?;
        if session.is_won() {
            writeln!(stdout, "You won!")?;
            return Ok(());
        }
        write!(stdout, "row col> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        match parse_spot(input) {
            Some((row, col)) => {
                if let Some(Err(err)) = session.shoot_at(row, col) {
                    warn!(%err, "shot rejected");
                }
                writeln!(stdout, "{}", session.message())?;
            }
            None => writeln!(stdout, "Expected two numbers, e.g. \"3 4\"; got {:?}", input)?,
        }
    }
}

/// Parse `"row col"` (spaces or a comma between the numbers)
fn parse_spot(input: &str) -> Option<(i32, i32)> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}
