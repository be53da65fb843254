//! Crew Console binary

use clap::Parser;
use crew_client::ClientConfig;
use crew_console::app::App;
use crew_console::{event, ui};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crew-console")]
#[command(about = "Terminal dashboard for employee management")]
struct Cli {
    /// Base URL of the employee REST backend
    #[arg(long, env = "CREW_BASE_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CREW_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Directory for exported print views
    #[arg(long, env = "CREW_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Directory for the log file (the terminal is owned by the UI)
    #[arg(long, env = "CREW_LOG_DIR", default_value = ".")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_appender = tracing_appender::rolling::never(&cli.log_dir, "crew-console.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let client = ClientConfig::new(&cli.base_url)
        .with_timeout(cli.timeout)
        .build_http_client()?;
    let mut app = App::new(client, cli.export_dir);
    tracing::info!(base_url = %cli.base_url, "console starting");

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app).await;
    ratatui::restore();
    result
}

async fn run(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;
        app.run_pending().await;
        if let Some(event) = event::poll_event(100)? {
            event::handle_event(app, event).await?;
        }
    }
    Ok(())
}
