use appcenter_fetch::config::Config;
use appcenter_fetch::core::{format_error_with_help, AppCenterResult};
use appcenter_fetch::di::ServiceContainer;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "appcenter-fetch")]
#[command(about = "Fetch the latest version number of an app from App Center")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// App Center API base URL (overrides the config file)
    #[arg(long, global = true, env = "APPCENTER_API_URL")]
    api_url: Option<String>,

    /// Never read the API token from the OS keychain
    #[arg(long, global = true, env = "APPCENTER_NO_KEYCHAIN")]
    no_keychain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest version number and build number of an app
    Fetch(cli::fetch::FetchArgs),
    /// List the apps visible to an API token
    Apps {
        /// API Token for App Center Access
        #[arg(long, env = "APPCENTER_API_TOKEN", hide_env_values = true)]
        api_token: Option<String>,
        /// Only show apps matching this query (fuzzy match)
        #[arg(short, long)]
        filter: Option<String>,
        /// Print the apps as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store an API token in the OS keychain
    Login {
        /// Token to store (prompted when omitted)
        #[arg(long)]
        token: Option<String>,
    },
    /// Remove the stored API token
    Logout,
    /// Configure global settings
    #[command(subcommand)]
    Config(cli::config::ConfigCommands),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    // Logs go to stderr; stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn container(api_url: Option<String>) -> AppCenterResult<ServiceContainer> {
    let mut config = Config::load()?;
    if let Some(api_url) = api_url {
        config.api_url = api_url;
    }
    ServiceContainer::from_config(config)
}

async fn run(cli_args: Cli) -> AppCenterResult<()> {
    let use_keychain = !cli_args.no_keychain;
    match cli_args.command {
        Commands::Fetch(args) => {
            cli::fetch::run(args, use_keychain, &container(cli_args.api_url)?).await
        }
        Commands::Apps {
            api_token,
            filter,
            json,
        } => {
            let services = container(cli_args.api_url)?;
            cli::apps::run(api_token, filter, json, use_keychain, &services).await
        }
        Commands::Login { token } => cli::login::run(token).await,
        Commands::Logout => cli::logout::run(),
        Commands::Config(cmd) => cli::config::run(cmd),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{:?}", e);
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
