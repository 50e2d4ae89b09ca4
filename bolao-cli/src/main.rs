mod commands;
mod config;

use bolao_core::session::FileStorage;
use bolao_core::{ApiClient, BolaoError, ClientConfig, SessionStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bolao")]
#[command(about = "Bolão platform - shared lottery pools from the terminal")]
#[command(version)]
struct Cli {
    /// Data directory for the persisted session
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Base URL of the platform API
    #[arg(short, long, global = true)]
    api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account and session commands
    #[command(subcommand)]
    Auth(commands::AuthCommands),

    /// Browse pools and their games
    #[command(subcommand)]
    Pools(commands::PoolCommands),

    /// Buy and track shares
    #[command(subcommand)]
    Shares(commands::ShareCommands),

    /// Wallet balance, statement and Pix deposits
    #[command(subcommand)]
    Wallet(commands::WalletCommands),

    /// Pool administration and settlement
    #[command(subcommand)]
    Admin(commands::AdminCommands),
}

/// What a command group requires from the session before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capability {
    Public,
    Authenticated,
    Admin,
}

/// Declarative guard table: evaluated once here, so no handler re-checks
/// authentication on its own.
fn required_capability(command: &Commands) -> Capability {
    match command {
        Commands::Auth(_) | Commands::Pools(_) => Capability::Public,
        Commands::Shares(_) | Commands::Wallet(_) => Capability::Authenticated,
        Commands::Admin(_) => Capability::Admin,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "bolao={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let defaults = config::CliConfig::default();

    // Data directory for the persisted session
    let data_dir = cli.data_dir.unwrap_or(defaults.data_dir);
    tokio::fs::create_dir_all(&data_dir).await?;

    // Session bootstrap: pick up a persisted credential, discarding it when
    // stale or malformed
    let storage = Arc::new(FileStorage::new(data_dir.join("session.json")));
    let session = Arc::new(SessionStore::new(storage));
    session.initialize()?;
    tracing::debug!(
        authenticated = session.is_authenticated(),
        admin = session.is_administrator(),
        "session initialized"
    );

    let api_config = ClientConfig::new(cli.api_url.unwrap_or(defaults.api_url));
    let client = ApiClient::new(&api_config, session.clone())?;

    match required_capability(&cli.command) {
        Capability::Public => {}
        Capability::Authenticated if !session.is_authenticated() => {
            eprintln!("You are not logged in. Run 'bolao auth login <email>' first.");
            std::process::exit(1);
        }
        Capability::Admin if !session.is_administrator() => {
            eprintln!("This command requires an administrator account.");
            std::process::exit(1);
        }
        _ => {}
    }

    // Execute command
    let result = match cli.command {
        Commands::Auth(cmd) => commands::handle_auth_command(cmd, &client).await,
        Commands::Pools(cmd) => commands::handle_pool_command(cmd, &client).await,
        Commands::Shares(cmd) => commands::handle_share_command(cmd, &client).await,
        Commands::Wallet(cmd) => commands::handle_wallet_command(cmd, &client).await,
        Commands::Admin(cmd) => commands::handle_admin_command(cmd, &client).await,
    };

    if let Err(e) = result {
        match e {
            BolaoError::SessionExpired => {
                eprintln!("Error: your session expired or was rejected by the server.");
                eprintln!("Log in again with 'bolao auth login <email>'.");
            }
            BolaoError::Api {
                detail: Some(detail),
                ..
            } => {
                eprintln!("Error: {}", bolao_core::error::rewrite_wallet_detail(&detail));
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::{AuthCommands, PoolCommands, ShareCommands, WalletCommands};

    #[test]
    fn guard_table_maps_command_groups_to_capabilities() {
        let public = Commands::Pools(PoolCommands::List { all: false });
        assert_eq!(required_capability(&public), Capability::Public);

        let auth = Commands::Auth(AuthCommands::Logout);
        assert_eq!(required_capability(&auth), Capability::Public);

        let shares = Commands::Shares(ShareCommands::Mine);
        assert_eq!(required_capability(&shares), Capability::Authenticated);

        let wallet = Commands::Wallet(WalletCommands::Balance);
        assert_eq!(required_capability(&wallet), Capability::Authenticated);

        let admin = Commands::Admin(commands::AdminCommands::Stats);
        assert_eq!(required_capability(&admin), Capability::Admin);
    }
}
