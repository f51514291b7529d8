//! CLI entry-point for the interactive terminal dashboard.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Args as ClapArgs;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, instrument};

use crate::api::ApiClient;
use crate::config::Settings;
use crate::state::route::ViewState;
use crate::state::App;
use crate::ui;

const TICK: Duration = Duration::from_millis(250);

/// Args for the `dash` sub-command.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct Args {
    /// Deep-link state string, e.g. "sector=Technology&stock=AAPL".
    #[arg(long)]
    pub state: Option<String>,
    /// Initial sector filter; overrides any sector in --state.
    #[arg(long)]
    pub sector: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let (tx, rx) = mpsc::unbounded_channel();

    let mut initial = args
        .state
        .as_deref()
        .map(ViewState::parse)
        .unwrap_or_default();
    if let Some(sector) = args.sector {
        initial.sector = (!sector.is_empty()).then_some(sector);
    }

    let mut app = App::new(settings, client, tx, initial);
    app.load(None);

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, rx).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut rx: mpsc::UnboundedReceiver<crate::state::Msg>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.on_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.on_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }
            Some(msg) = rx.recv() => app.apply(msg),
            _ = tick.tick() => app.tick(),
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
