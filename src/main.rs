//! Portfolio TUI - a portfolio site browsed from the terminal
//!
//! A Ratatui-based TUI that renders the site's pages with their interactive
//! widgets: navigation menu, theme toggle, testimonial carousel, smooth
//! scrolling, reveal-on-scroll skill bars, lazy images and a validated
//! contact form.

mod app;
mod config;
mod error;
mod platform;
mod site;
mod state;
mod submit;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Poll interval while a scroll animation runs (~60fps)
const ANIMATION_POLL: Duration = Duration::from_millis(16);

/// Poll interval otherwise; bounds debounce latency
const IDLE_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = SiteConfig::load()?;
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data directory; stderr would draw over the screen
fn init_logging() {
    let writer = SiteConfig::data_dir()
        .and_then(|dir| {
            fs::create_dir_all(&dir).ok()?;
            File::create(dir.join("portfolio-tui.log")).ok()
        })
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.set_terminal_size(term_size.height, term_size.width);

        // Advance scroll animations and fire due validations
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // The "sending" state is on screen; now wait for the submitter
        if app.has_pending_submission() {
            app.flush_submission().await;
            continue;
        }

        let poll_duration = if app.is_animating() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key).await?,
                Event::Mouse(mouse) => app.handle_mouse(mouse).await?,
                Event::Paste(text) => app.handle_paste(&text),
                Event::Resize(width, height) => app.set_terminal_size(height, width),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
