// Draft board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Open database
// 4. Load ranking feeds (all five concurrently)
// 5. Initialize DraftState, restore saved team names
// 6. Run the TUI event loop until the user quits

use draft_board::app;
use draft_board::config;
use draft_board::db;
use draft_board::draft;
use draft_board::sources;
use draft_board::tui;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Draft board starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {} teams, {}x{} board",
        config.league.num_teams, config.board.rows, config.board.cols
    );

    // 3. Open database
    let db = db::Database::open(&config.storage.db_path).context("failed to open database")?;
    info!("Database opened at {}", config.storage.db_path);

    // 4. Load ranking feeds (join all five before first render)
    info!("Loading ranking feeds...");
    let rankings = sources::load_all(&config.feeds).await;
    info!("Loaded {} players across all sources", rankings.total_count());

    // 5. Initialize DraftState and restore saved team names
    let draft_state = draft::state::DraftState::new(
        config.league.num_teams,
        &config.roster.parsed_slots(),
    );
    let mut board_app = app::BoardApp::new(config, rankings, draft_state, db);

    match app::restore_team_names(&mut board_app) {
        Ok(true) => info!("Team names restored from previous session"),
        Ok(false) => info!("Using default team names"),
        Err(e) => return Err(e.context("failed to restore team names")),
    }

    // 6. Run the TUI event loop (blocking until the user quits)
    tui::run(board_app).await?;

    info!("Draft board shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draft_board=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
