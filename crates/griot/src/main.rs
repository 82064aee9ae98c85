use chrono::Local;
use clap::Parser;
use griot::{
    BotConfig, Cli, Commands, ConsolePublisher, Credentials, CycleOutcome, GriotResult,
    JsonFileStore, MemoryStore, OfflineGenerator, PostPipeline, PostStore, QuotaTracker, Scheduler,
    TOPIC_WINDOW_DAYS,
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BotConfig::from_file(path)?,
        None => BotConfig::default(),
    };

    match cli.command {
        Commands::Once | Commands::Serve => {
            // Required before any pipeline logic runs; a missing variable
            // exits non-zero here. The offline backends ignore the values,
            // real API backends consume them.
            let _credentials = Credentials::from_env()?;

            let serve = matches!(cli.command, Commands::Serve);
            if cli.dry_run {
                run_engine(&config, Arc::new(MemoryStore::new()), serve).await?;
            } else {
                let store = JsonFileStore::new(config.store_path.clone())?;
                run_engine(&config, Arc::new(store), serve).await?;
            }
        }
        Commands::Status => {
            if cli.dry_run {
                show_status(&config, &MemoryStore::new()).await?;
            } else {
                let store = JsonFileStore::new(config.store_path.clone())?;
                show_status(&config, &store).await?;
            }
        }
    }

    Ok(())
}

/// Wire the engine to the offline backends and run one mode to completion.
///
/// Pipeline-level failures are recoverable by policy: they are logged and
/// the process still exits zero. Only configuration problems abort startup.
async fn run_engine<S>(config: &BotConfig, store: Arc<S>, serve: bool) -> GriotResult<()>
where
    S: PostStore + 'static,
{
    let pipeline = PostPipeline::new(
        config,
        Arc::new(OfflineGenerator::new()),
        Arc::new(ConsolePublisher::new()),
        store,
    );
    let scheduler = Scheduler::new(pipeline, config.schedule_times()?, config.poll_interval());

    if serve {
        if let Err(e) = scheduler.run().await {
            error!(error = %e, "Scheduler stopped on an unrecoverable store failure");
        }
        return Ok(());
    }

    match scheduler.run_once().await {
        Ok(CycleOutcome::Published(record)) => {
            info!(
                topic = %record.topic,
                seq = record.sequence_number,
                "Cycle complete"
            );
        }
        Ok(CycleOutcome::QuotaExhausted) => {
            info!("Cycle skipped: daily quota already spent");
        }
        Err(e) => {
            error!(error = %e, "Posting cycle failed; slot left for a later invocation");
        }
    }
    Ok(())
}

/// Read-only report of quota usage and the active topic window.
async fn show_status<S: PostStore>(config: &BotConfig, store: &S) -> GriotResult<()> {
    let today = Local::now().date_naive();
    let quota = QuotaTracker::new(store, config.daily_limit);
    let used = quota.used(today).await?;
    let remaining = quota.remaining(today).await?;

    println!("date: {today}");
    println!("posts today: {used} of {}", config.daily_limit);
    println!("remaining quota: {remaining}");

    let window_start = today - chrono::Duration::days(TOPIC_WINDOW_DAYS);
    let recent = store.records_since(window_start).await?;
    println!("topics used since {window_start}:");
    if recent.is_empty() {
        println!("  (none)");
    }
    for record in &recent {
        println!(
            "  {} {} (seq {})",
            record.date, record.topic, record.sequence_number
        );
    }

    Ok(())
}
