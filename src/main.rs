use clap::Parser;
use clap::builder::RangedU64ValueParser;
use color_eyre::Result;
use std::path::{Path, PathBuf};

use termwin::app::App;
use termwin::config;
use termwin::error::TermwinError;
use termwin::session::TerminalSession;

/// Scrollable terminal window
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scrollable terminal window for text that does not fit the screen"
)]
struct Args {
    /// Text file to display (if not provided, shows generated demo lines)
    input: Option<PathBuf>,

    /// Number of demo lines to generate when no file is given
    #[arg(long, default_value_t = 200)]
    lines: usize,

    /// Lines per page (defaults to the config, then to the window height)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    visible: Option<usize>,

    /// Config file (defaults to ~/.config/termwin/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/termwin-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    // Read input before touching the terminal so errors print normally
    let data = match &args.input {
        Some(path) => read_lines(path)?,
        None => demo_lines(args.lines),
    };

    let mut app = App::new(data, &config_result.config, args.visible);
    if let Some(warning) = config_result.warning {
        app.warnings.push(warning);
    }

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, &mut app);
    let restored = session.restore();
    first_error(result, restored)?;

    #[cfg(debug_assertions)]
    log::debug!("=== TERMWIN DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/termwin-debug.log")
    else {
        return;
    };

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

    log::debug!("=== TERMWIN DEBUG SESSION STARTED ===");
}

/// Read a text file as display lines, expanding tabs.
///
/// Invalid UTF-8 is replaced with U+FFFD so stray bytes in logs don't stop
/// the pager.
fn read_lines(path: &Path) -> Result<Vec<String>, TermwinError> {
    let bytes = std::fs::read(path).map_err(|source| TermwinError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(|line| line.replace('\t', "    "))
        .collect())
}

/// Numbered filler lines for the demo window
fn demo_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}{}", i, "    test".repeat(5)))
        .collect()
}

/// Combine the run outcome with the terminal restore outcome, reporting the
/// run error when both failed
fn first_error(result: Result<()>, restored: std::io::Result<()>) -> Result<()> {
    result?;
    restored?;
    Ok(())
}

fn run(session: &mut TerminalSession, app: &mut App) -> Result<()> {
    let terminal = session.terminal_mut();

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

    Ok(())
}
