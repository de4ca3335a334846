use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dashboard::config::{ServerConfig, DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_PORT};
use launch_dashboard::dashboard::Dashboard;
use launch_dashboard::data::LaunchTable;
use launch_dashboard::{api, report};

#[derive(Parser)]
#[command(name = "launch-dashboard")]
#[command(about = "Interactive dashboard over launch records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port for the HTTP server
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// CSV file with the launch records
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
    /// Print a summary of the dataset and exit
    Summary {
        /// CSV file with the launch records
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
}

/// Initialize tracing with output to stderr (for summary mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "launch_dashboard=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting launch dashboard on port {}", config.port);

    let table = LaunchTable::open(&config.data_path)?;
    let app = api::create_router(Dashboard::new(table));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Launch dashboard listening on {}", config.url());

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Summary output goes to stdout, keep log lines out of it
    let use_stderr = matches!(cli.command, Some(Commands::Summary { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { host, port, data }) => {
            serve(ServerConfig {
                host,
                port,
                data_path: data,
            })
            .await?;
        }
        Some(Commands::Summary { data }) => {
            let table = LaunchTable::open(&data)?;
            let dashboard = Dashboard::new(table);
            print!(
                "{}",
                report::render_summary(dashboard.table(), dashboard.params())
            );
        }
        None => serve(ServerConfig::default()).await?,
    }

    Ok(())
}
