mod config;
mod controller;
mod dom;
mod logging;
mod model;
mod view;

use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::watch;

use config::SiteConfig;
use controller::{AppController, LoadingScreen, PageController, ThemeController};
use dom::Document;
use model::{ColorSchemeSignal, FileStore, QueryClient, RemoteReleaseGateway, SupabaseClient, ThemeStore};
use view::AppView;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== emel0 site starting ===");

    let config = SiteConfig::from_env();
    let client = SupabaseClient::from_config(&config).map(|client| Arc::new(client) as Arc<dyn QueryClient>);
    if client.is_none() {
        tracing::error!("SUPABASE_URL / SUPABASE_ANON_KEY not set, panels will stay empty");
    }
    let gateway = RemoteReleaseGateway::new(client);

    let document = Document::new();

    // Theme is resolved before the first frame is drawn
    let environment = ColorSchemeSignal::detect();
    let storage = Rc::new(FileStore::open(&config.cache_dir));
    let theme_store = ThemeStore::new(storage, environment.clone());
    let environment_changes = theme_store.subscribe();
    let theme = ThemeController::new(
        theme_store,
        document.document_element.clone(),
        document.theme_toggle.clone(),
        document.theme_icon.clone(),
    );
    theme.initialize();

    let loading = LoadingScreen::new(document.loading_screen.clone(), Instant::now());
    let mut page = PageController::new(gateway, &document);
    let mut app = AppController::new(document, theme, loading, environment);

    enable_raw_mode()?;
    let mut terminal = setup_terminal(io::stdout(), || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    })?;

    let res = run_app(&mut terminal, &mut app, &mut page, environment_changes).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("emel0 site shutting down");
    Ok(())
}

/// Enter the alternate screen; `restore` runs if any step fails so the shell
/// is not left in raw mode
fn setup_terminal<W: Write>(mut out: W, restore: impl FnOnce()) -> io::Result<Terminal<CrosstermBackend<W>>> {
    let terminal = execute!(out, EnterAlternateScreen).and_then(|()| Terminal::new(CrosstermBackend::new(out)));
    if terminal.is_err() {
        restore();
    }
    terminal
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppController,
    page: &mut PageController,
    mut environment_changes: watch::Receiver<bool>,
) -> io::Result<()> {
    // Fetches run alongside the event loop; panels fill in as they land
    let init = page.initialize();
    tokio::pin!(init);
    let mut initialized = false;

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut painted = false;

    loop {
        terminal.draw(|frame| AppView::render(frame, app.document()))?;
        if !painted {
            painted = true;
            app.on_page_loaded(Instant::now());
        }

        tokio::select! {
            () = &mut init, if !initialized => {
                initialized = true;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                Some(Ok(Event::Resize(width, height))) => app.handle_resize(width, height),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Ok(()) = environment_changes.changed() => {
                let is_dark = *environment_changes.borrow_and_update();
                app.handle_environment_change(is_dark);
            }
            _ = ticker.tick() => {}
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
