use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use padtty::app::Workspace;
use padtty::app::console::CommandInterpreter;
use padtty::infra::buffer::BufferEditorSurface;
use padtty::runtime::{ConsoleSurface, ConsoleTree};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Logs go to a file because raw mode owns the terminal.
    let log_path = std::env::temp_dir().join("padtty.log");
    init_tracing(&log_path)?;

    let console = Arc::new(ConsoleSurface::new());
    let editor = Arc::new(BufferEditorSurface::new());
    let tree = Arc::new(ConsoleTree::new(console.clone()));

    let mut workspace = Workspace::new(editor, tree, console.clone());
    workspace.seed_default_files();
    workspace.open_file("script.js");

    let mut interpreter = CommandInterpreter::new(console);

    padtty::runtime::run(&mut interpreter).await
}

fn init_tracing(log_path: &Path) -> io::Result<()> {
    let log_file = std::fs::File::create(log_path)?;
    let filter = EnvFilter::try_from_env("PADTTY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
