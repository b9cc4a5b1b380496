use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod app;
mod config;
mod drag;
mod error;
mod layout;
mod percent;
mod pointer;
mod slider;
#[cfg(test)]
mod test_utils;
mod theme;

use app::App;
use error::SlidrError;

/// Interactive terminal range slider
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive terminal range slider with mouse and keyboard control"
)]
struct Args {
    /// Lower domain bound
    #[arg(long, default_value_t = 0.0)]
    min: f64,

    /// Upper domain bound
    #[arg(long, default_value_t = 100.0)]
    max: f64,

    /// Initial domain value
    #[arg(long, default_value_t = 0.0)]
    value: f64,
}

fn main() -> Result<()> {
    // Writes to /tmp/slidr-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/slidr-debug.log")
            .expect("Failed to open /tmp/slidr-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SLIDR DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    validate_range(args.min, args.max)?;

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let terminal = init_terminal()?;

    let app = App::new(args.min, args.max, args.value, &config_result.config);
    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    println!("{}", app.value());

    #[cfg(debug_assertions)]
    log::debug!("=== SLIDR DEBUG SESSION ENDED ===");

    Ok(())
}

/// Reject degenerate ranges before the TUI starts; the value mapping assumes
/// max > min
fn validate_range(min: f64, max: f64) -> Result<(), SlidrError> {
    if max > min {
        Ok(())
    } else {
        Err(SlidrError::InvalidRange { min, max })
    }
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
