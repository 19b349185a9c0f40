mod app;
mod cli;
mod config;
mod data;
mod error;
mod i18n;
mod logic;
mod models;
mod providers;
mod speech;
mod ui;

use app::{App, LocationRequest, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::{KrishiError, Result};
use i18n::{label, MessageKey};
use providers::{AdvisoryEvent, AdvisoryService, LocationService};
use ratatui::{backend::CrosstermBackend, Terminal};
use speech::SpeechService;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    CropsScreen, DashboardScreen, LanguageScreen, LocationScreen, SoilScreen, WeatherScreen,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; default quiet so nothing writes over the
    // alternate screen
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Some(Commands::Check) => {
            return run_check(cli.config);
        }
        None => {}
    }

    // Load configuration, falling back to interactive setup on a
    // fresh machine
    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(_) if cli.config.is_none() && !Config::exists(None) => {
            let (c, _path) = Config::setup_interactive()?;
            c
        }
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Create app and services
    let mut app = App::new(config.clone())?;
    let location_service = LocationService::new(config.reference.clone(), config.device.clone());
    let (mut advisory_service, mut advisory_rx) = AdvisoryService::new(&config.advisory);
    let speech_service = SpeechService::new(&config.speech);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(
        &mut terminal,
        &mut app,
        &location_service,
        &mut advisory_service,
        &mut advisory_rx,
        &speech_service,
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_check(config_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    println!("Config OK - language: {}", config.general.language);
    println!(
        "Reference location: {} ({:.4}, {:.4})",
        config.reference.label, config.reference.latitude, config.reference.longitude
    );

    let location_service = LocationService::new(config.reference.clone(), config.device.clone());
    if location_service.device_available() {
        println!("Device fix source: OK");
    } else {
        println!("Device fix source: UNAVAILABLE (GPS requests will use the fallback)");
    }

    let speech_service = SpeechService::new(&config.speech);
    if speech_service.available() {
        println!("Speech synthesizer: OK");
    } else {
        println!("Speech synthesizer: UNAVAILABLE (narration will be skipped)");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    location_service: &LocationService,
    advisory_service: &mut AdvisoryService,
    advisory_rx: &mut mpsc::UnboundedReceiver<AdvisoryEvent>,
    speech_service: &SpeechService,
) -> Result<()>
where
    KrishiError: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Location => {
                    let screen = LocationScreen::new(
                        app.language,
                        &app.location_state.input,
                        app.location_state.editing,
                    )
                    .with_location(app.location.as_ref())
                    .loading(app.loading)
                    .with_reference(Some(app.config.reference.label.as_str()))
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Weather => {
                    let weather = app.advisory.as_ref().map(|a| &a.weather);
                    let screen = WeatherScreen::new(app.language, weather).loading(app.loading);
                    f.render_widget(screen, area);
                }
                Screen::Soil => {
                    let soil = app.advisory.as_ref().map(|a| &a.soil);
                    let screen = SoilScreen::new(app.language, soil)
                        .with_location(app.location.as_ref())
                        .loading(app.loading);
                    f.render_widget(screen, area);
                }
                Screen::Crops => {
                    let crops = app
                        .advisory
                        .as_ref()
                        .map(|a| a.crops.as_slice())
                        .unwrap_or(&[]);
                    let screen = CropsScreen::new(app.language, crops)
                        .with_selection(app.crops_state.selected_index)
                        .loading(app.loading);
                    f.render_widget(screen, area);
                }
                Screen::Dashboard => {
                    let screen = DashboardScreen::new(app.language, app.advisory.as_ref())
                        .with_location(app.location.as_ref())
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Language => {
                    let screen =
                        LanguageScreen::new(app.language, app.language_state.selected_index)
                            .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Global key handling
                match key.code {
                    KeyCode::Char('q') if !app.location_state.editing => {
                        app.quit();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        if app.location_state.editing {
                            app.location_state.cancel_editing();
                        } else {
                            app.switch_screen(Screen::Location);
                        }
                    }
                    KeyCode::Char(c) if !app.location_state.editing => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.clear_status();
                            app.switch_screen(screen);
                        } else {
                            // Screen-specific key handling
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        // Completed advisory fetches; stale deliveries are dropped
        // inside apply_advisory
        while let Ok(advisory) = advisory_rx.try_recv() {
            app.apply_advisory(advisory);
        }

        // Location acquisitions queued by the key handlers
        if let Some(request) = app.pending_location.take() {
            let location = match request {
                LocationRequest::Manual(address) => location_service.manual(&address),
                LocationRequest::Device => location_service.device_location().await,
            };
            let request_id = advisory_service.request(&location);
            app.set_location(location);
            app.pending_request = Some(request_id);
        }

        // Narrations queued by the key handlers
        if let Some(text) = app.pending_narration.take() {
            speech_service.speak(&text, app.language.speech_tag());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Location => handle_location_input(app, code),
        Screen::Crops => handle_crops_input(app, code),
        Screen::Language => handle_language_input(app, code),
        Screen::Weather | Screen::Soil | Screen::Dashboard => handle_view_input(app, code),
    }
}

fn handle_location_input(app: &mut App, code: KeyCode) {
    if app.location_state.editing {
        // Editing mode
        match code {
            KeyCode::Enter => {
                if let Some(address) = app.location_state.finish_editing() {
                    app.pending_location = Some(LocationRequest::Manual(address));
                }
            }
            KeyCode::Backspace => {
                app.location_state.input.pop();
            }
            KeyCode::Char(c) => {
                app.location_state.input.push(c);
            }
            _ => {}
        }
    } else {
        match code {
            KeyCode::Char('e') | KeyCode::Char('i') => {
                app.clear_status();
                app.location_state.start_editing();
            }
            KeyCode::Char('g') => {
                app.set_status(label(app.language, MessageKey::GettingLocation));
                app.pending_location = Some(LocationRequest::Device);
            }
            KeyCode::Char('v') => {
                app.pending_narration = app.narration_for_screen();
            }
            _ => {}
        }
    }
}

fn handle_crops_input(app: &mut App, code: KeyCode) {
    let count = app.advisory.as_ref().map(|a| a.crops.len()).unwrap_or(0);
    match code {
        KeyCode::Up => app.crops_state.prev(),
        KeyCode::Down => app.crops_state.next(count),
        KeyCode::Char('v') => {
            app.pending_narration = app.narration_for_screen();
        }
        _ => {}
    }
}

fn handle_language_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.language_state.prev(),
        KeyCode::Down => app.language_state.next(),
        KeyCode::Enter => {
            let choice = app.language_state.highlighted();
            app.select_language(choice);
        }
        KeyCode::Char('v') => {
            app.pending_narration = app.narration_for_screen();
        }
        _ => {}
    }
}

fn handle_view_input(app: &mut App, code: KeyCode) {
    if let KeyCode::Char('v') = code {
        app.pending_narration = app.narration_for_screen();
    }
}
