use clap::Parser;
use recordbook_api::AppState;
use recordbook_domain::CliOverrides;
use recordbook_jobs::{JobRunner, SnapshotJob};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "recordbook")]
#[command(version)]
#[command(about = "Recordbook - authoritative DNS answers from a live, persisted record table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Full DNS listen address, e.g. 127.0.0.1:5353 or :53
    #[arg(long, env = "DNSADDR")]
    dns_addr: Option<String>,

    /// Directory holding the store and store_bk files
    #[arg(long, env = "RWDirPath", value_name = "DIR")]
    data_dir: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Admin API port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Upper bound on queries resolved concurrently (unbounded when unset)
    #[arg(long)]
    max_concurrent_queries: Option<usize>,

    /// Serve the admin API
    #[arg(long)]
    enable_api: bool,

    /// Shared secret expected in the `Authorize` header
    #[arg(long, env = "RECORDBOOK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_addr: cli.dns_addr,
        bind_address: cli.bind,
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        data_dir: cli.data_dir,
        log_level: cli.log_level,
        max_concurrent_queries: cli.max_concurrent_queries,
        enable_api: cli.enable_api,
        api_key: cli.api_key,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Recordbook v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config);

    if config.store.load_on_startup {
        bootstrap::load_store(&services).await;
    }

    let shutdown = CancellationToken::new();

    let job_handles = JobRunner::new()
        .with_snapshot(SnapshotJob::new(
            services.persist.clone(),
            config.store.autosave_interval_secs,
        ))
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    // Bind failure is fatal; nothing after this point may stop the process.
    let listener = server::bind_dns_listener(
        &config.server.dns_socket_addr(),
        services.resolver.clone(),
        config.server.max_concurrent_queries,
    )?;
    let dns_task = tokio::spawn(listener.run(shutdown.clone()));

    let web_task = if config.api.enabled {
        let state = AppState::new(services.records.clone(), config.api.api_key.clone());
        let web_addr: SocketAddr = config.server.web_socket_addr().parse()?;
        let token = shutdown.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, state, token).await {
                error!(error = %e, "Admin API server error");
            }
        }))
    } else {
        info!("Admin API disabled");
        None
    };

    bootstrap::wait_for_shutdown_signal().await;
    shutdown.cancel();

    for handle in job_handles {
        let _ = handle.await;
    }
    let _ = dns_task.await;
    if let Some(web_task) = web_task {
        let _ = web_task.await;
    }

    if config.store.save_on_shutdown {
        if let Err(e) = services.persist.save().await {
            error!(error = %e, "Failed to save record store on shutdown");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
