//! shp: command-line tool for Shipwright builds.

use clap::{Parser, Subcommand};
use shp_client::{ConnectOptions, KubernetesBuildRunClient};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod table;

#[derive(Parser)]
#[command(name = "shp")]
#[command(about = "Command-line tool for Shipwright builds", long_about = None)]
struct Cli {
    /// Path to the kubeconfig file
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    context: Option<String>,

    /// Namespace (defaults to the namespace of the current context)
    #[arg(short, long, env = "SHP_NAMESPACE", global = true)]
    namespace: Option<String>,

    /// Seconds to wait for the API server before giving up
    #[arg(long, default_value = "30", global = true)]
    request_timeout: u64,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage BuildRuns
    #[command(alias = "br")]
    Buildrun {
        #[command(subcommand)]
        command: BuildRunCommands,
    },
}

#[derive(Subcommand)]
enum BuildRunCommands {
    /// List BuildRuns
    #[command(alias = "ls")]
    List {
        /// Do not show columns header in list output
        #[arg(long)]
        no_header: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = KubernetesBuildRunClient::new(&ConnectOptions {
        kubeconfig: cli.kubeconfig,
        context: cli.context,
    })
    .await?;
    let namespace = cli
        .namespace
        .unwrap_or_else(|| client.default_namespace().to_string());
    let params = commands::Params {
        client: Arc::new(client),
        namespace,
        request_timeout: Duration::from_secs(cli.request_timeout),
    };

    match cli.command {
        Commands::Buildrun { command } => match command {
            BuildRunCommands::List { no_header } => {
                commands::buildrun::list(&params, no_header, std::io::stdout()).await?;
            }
        },
    }

    Ok(())
}
