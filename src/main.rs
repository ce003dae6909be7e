//! Atmosphere - terminal weather companion

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use atmosphere::action::Action;
use atmosphere::api::WeatherClient;
use atmosphere::components::{Component, WeatherDisplay, WeatherDisplayProps};
use atmosphere::config::ConfigArgs;
use atmosphere::effect::Effect;
use atmosphere::reducer::reducer;
use atmosphere::state::{AppState, LOADING_ANIM_TICK_MS};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventKind, EventOutcome,
    RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Atmosphere - your personal weather companion
#[derive(Parser, Debug)]
#[command(name = "atmosphere")]
#[command(about = "Current weather for any city, in your terminal")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Write tracing output to this file (RUST_LOG filters it)
    #[arg(long)]
    trace_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        config,
        trace_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = trace_file.as_deref() {
        init_tracing(path)?;
    }

    let config = config.into_config();
    let init_action = Action::WeatherFetch(config.default_city.clone());
    let client = Arc::new(WeatherClient::new(config));
    tracing::info!(
        base_url = %client.config().base_url,
        city = %client.config().default_city,
        "starting"
    );

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::new()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        replay_actions,
        init_action,
        client,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("exiting");
    Ok(())
}

fn init_tracing(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atmosphere=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    init_action: Action,
    client: Arc<WeatherClient>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherDisplay::new()));
    let ui_events = Rc::clone(&ui);

    debug
        .run_effect_app(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(init_action),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            |frame, area, state, render_ctx: RenderContext| {
                let props = WeatherDisplayProps {
                    state,
                    today: chrono::Local::now().date_naive(),
                    is_focused: render_ctx.is_focused(),
                };
                ui.borrow_mut().render(frame, area, props);
            },
            move |event, state| -> EventOutcome<Action> {
                // Re-render on terminal resize (no action needed, just redraw)
                if let EventKind::Resize(_, _) = event {
                    return EventOutcome::ignored().with_render();
                }
                let props = WeatherDisplayProps {
                    state,
                    today: chrono::Local::now().date_naive(),
                    is_focused: true,
                };
                EventOutcome::from_actions(ui_events.borrow_mut().handle_event(event, props))
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&client)),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: Arc<WeatherClient>) {
    match effect {
        Effect::FetchWeather { request, city } => {
            tracing::info!(request, %city, "fetching weather");
            // Same key: a newer fetch replaces the one in flight
            ctx.tasks().spawn("weather", async move {
                match client.fetch_current(&city).await {
                    Ok(report) => Action::WeatherDidLoad { request, report },
                    Err(e) => {
                        tracing::warn!(request, %city, error = %e, "weather fetch failed");
                        Action::WeatherDidError {
                            request,
                            message: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}
