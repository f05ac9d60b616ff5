mod app;
mod config;
mod error;
mod logging;
mod network;
mod palette;
mod types;
mod ui;
mod utils;

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::Terminal;
use tracing::{error, info};

use app::App;
use config::Config;

fn main() -> io::Result<()> {
    logging::init();
    let config = Config::load().unwrap_or_else(|e| {
        error!("{e}; using default configuration");
        Config::default()
    });
    info!(?config, "starting");

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    info!("exiting");
    result
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, config: &Config) -> io::Result<()> {
    let mut networks = sysinfo::Networks::new_with_refreshed_list();
    let mut app = App::new(config).with_system_sampler();

    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    // Initial data
    app.update(&mut networks);

    // Event loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Ctrl+C quits
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && (key.code == KeyCode::Char('c') || key.code == KeyCode::Char('C'))
                    {
                        break;
                    }
                    if app.handle_key(key.code) {
                        break;
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.update(&mut networks);
            last_tick = Instant::now();
        }
    }
    Ok(())
}
