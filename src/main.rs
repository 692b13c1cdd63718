use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use vincent::config::Config;
use vincent::editor::processor::{Control, ModalProcessor};
use vincent::error::EditorError;
use vincent::file::loader::{load_text_file, load_text_from_stdin};
use vincent::input::{EditorEvent, InputHandler};
use vincent::theme::{get_builtin_theme, Theme, DEFAULT_THEME};
use vincent::ui::UI;

/// Exit status after Ctrl-C, as a shell reports SIGINT.
const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Vincent - A modal, vim-like text editor for the terminal
#[derive(Parser)]
#[command(name = "vincent")]
#[command(version)]
#[command(about = "A modal, vim-like text editor for the terminal", long_about = None)]
struct Cli {
    /// File to view and edit (omit to read from stdin if piped, or start empty if interactive)
    file: Option<PathBuf>,

    /// Config file (default: ~/.config/vincent/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme name, overrides the config file
    #[arg(short, long)]
    theme: Option<String>,

    /// Write logs to this file, overrides the config file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Without this, panic messages would be hidden by the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Picks the theme: CLI first, then config, falling back to the default.
fn resolve_theme(cli_theme: Option<&str>, config: &Config) -> Theme {
    let name = cli_theme.unwrap_or(config.theme.as_str());
    get_builtin_theme(name).unwrap_or_else(|| {
        eprintln!("Warning: Theme '{}' not found, using {}", name, DEFAULT_THEME);
        tracing::warn!(theme = name, "unknown theme");
        Theme::default()
    })
}

fn main() -> Result<ExitCode> {
    setup_panic_hook();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let log_file = cli.log_file.clone().or_else(|| config.log_file.clone());
    // Held until exit so buffered log lines are flushed
    let _log_guard = vincent::logging::init(log_file.as_deref(), &config.log_level)?;

    // Read the text BEFORE terminal setup: stdin may carry the document
    let (text, stdin_was_piped) = match &cli.file {
        Some(path) => (load_text_file(path)?, false),
        None if !io::stdin().is_terminal() => (load_text_from_stdin()?, true),
        None => (String::new(), false),
    };

    let theme = resolve_theme(cli.theme.as_deref(), &config);
    let ui = UI::new(theme);

    // Termion can use /dev/tty directly when stdin is piped, no redirection needed
    let stdout = io::stdout()
        .into_raw_mode()
        .map_err(EditorError::TerminalInit)?;
    let stdout = stdout
        .into_alternate_screen()
        .map_err(EditorError::TerminalInit)?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(EditorError::TerminalInit)?;
    terminal.clear()?;

    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let size = terminal.size().map_err(EditorError::TerminalInit)?;
    let mut editor = ModalProcessor::with_text(&text, size.width as usize, size.height as usize);
    editor.set_show_cursor_position(config.show_cursor_position);

    tracing::info!(
        lines = editor.buffer().line_count(),
        theme = ui.theme_name(),
        "session started"
    );

    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut editor);

    // Termion restores the screen through Drop guards; show the cursor first
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;
    drop(terminal);

    let control = result?;
    tracing::info!(?control, "session ended");
    Ok(match control {
        Control::Interrupt => ExitCode::from(INTERRUPTED_EXIT_CODE),
        Control::Quit | Control::Continue => ExitCode::SUCCESS,
    })
}

/// Renders, waits for one event, handles it; repeats until the processor
/// asks to stop or the input closes.
fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    editor: &mut ModalProcessor,
) -> Result<Control> {
    let mut last_size = terminal.size()?;

    loop {
        // termion has no resize event; poll the size before each frame
        let size = terminal.size()?;
        if size != last_size {
            editor.handle(EditorEvent::Resize {
                width: size.width,
                height: size.height,
            })?;
            last_size = size;
        }

        ui.render(terminal, &editor.snapshot())?;

        let Some(event) = input_handler.poll_event()? else {
            return Ok(Control::Quit);
        };
        match editor.handle(event)? {
            Control::Continue => {}
            stop => return Ok(stop),
        }
    }
}
