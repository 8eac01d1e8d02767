use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use textquill::config::Config;
use textquill::document::buffer::Document;
use textquill::editor::state::EditorState;
use textquill::file::loader::load_text_file;
use textquill::input::InputHandler;
use textquill::logging;
use textquill::theme::{get_builtin_theme, list_builtin_themes, Theme};
use textquill::ui::UI;

/// TextQuill - A small modal terminal text editor
#[derive(Parser)]
#[command(name = "textquill")]
#[command(version)]
#[command(about = "A small modal terminal text editor", long_about = None)]
struct Cli {
    /// File to edit (created on first save if it does not exist)
    file: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Without this, panic messages would be hidden by the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Loads `path`, or starts an empty buffer bound to it if it does not exist yet.
fn open_document(path: &str) -> Result<Document> {
    if !Path::new(path).exists() {
        tracing::info!(path, "new file");
        return Ok(Document::new());
    }
    let lines = load_text_file(path).with_context(|| format!("Failed to open {}", path))?;
    Ok(Document::from_lines(lines))
}

fn resolve_theme(name: &str) -> Result<Theme> {
    if let Some(theme) = get_builtin_theme(name) {
        return Ok(theme);
    }
    eprintln!(
        "Warning: Theme '{}' not found (available: {}), using default-dark",
        name,
        list_builtin_themes().join(", ")
    );
    get_builtin_theme("default-dark").context("default-dark theme is missing")
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    logging::init();
    let config = Config::load();

    // Load the file BEFORE terminal setup so errors print normally
    let document = match cli.file.as_deref() {
        Some(path) => open_document(path)?,
        None => Document::new(),
    };
    let theme = resolve_theme(cli.theme.as_deref().unwrap_or(&config.theme))?;

    let mut state = EditorState::new(document, &config);
    if let Some(name) = cli.file {
        state.set_filename(name);
    }

    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()?
    };

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    tracing::info!(theme = %theme.name, file = ?state.filename(), "starting editor");
    let ui = UI::new(theme);

    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state);

    // Termion restores the screen through Drop guards; show the cursor first
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    if let Err(e) = &result {
        tracing::error!("editor stopped: {:#}", e);
    }
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
) -> Result<()> {
    loop {
        ui.render(terminal, state)?;

        match input_handler.poll_event(Duration::from_millis(100))? {
            Some(event) => {
                if input_handler.handle_event(event, state)? {
                    break;
                }
            }
            // Input closed
            None => break,
        }
    }

    Ok(())
}
