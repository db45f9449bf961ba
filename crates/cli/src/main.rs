//! iSmartPay CLI - Terminal admin console.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (persists the session token locally)
//! isp-cli login -e ops@ismartpay.example -p <password>
//!
//! # List and manage admin accounts
//! isp-cli admins list
//! isp-cli admins set-role adm-17 -r role-3
//! isp-cli admins delete adm-17
//!
//! # Fee configuration
//! isp-cli fees list
//! isp-cli fees create -n "Transfer fee" -d "Per transfer" --rate 1.5 -s money_transfer
//!
//! # Read-only views
//! isp-cli roles list
//! isp-cli kyc list
//! ```
//!
//! # Environment Variables
//!
//! - `ISMARTPAY_API_URL` - Base URL of the admin REST service (required)
//! - `ISMARTPAY_HTTP_TIMEOUT_SECS` - Transport timeout (default: 30)
//! - `ISMARTPAY_SESSION_FILE` - Session file override

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)] // table output is the product of this binary

use std::sync::Arc;

use clap::{Parser, Subcommand};

use ismartpay_client::{ConsoleClient, ConsoleConfig};

mod commands;
mod store;

use store::FileSessionStore;

#[derive(Parser)]
#[command(name = "isp-cli")]
#[command(author, version, about = "iSmartPay terminal admin console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session token
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// End the session and clear persisted state
    Logout,
    /// Register a new admin account
    Register {
        /// First name
        #[arg(short = 'f', long)]
        first_name: String,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(short = 'n', long)]
        phone: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Manage admin accounts
    Admins {
        #[command(subcommand)]
        action: AdminsAction,
    },
    /// View roles and their permissions
    Roles {
        #[command(subcommand)]
        action: RolesAction,
    },
    /// Manage fee configuration
    Fees {
        #[command(subcommand)]
        action: FeesAction,
    },
    /// Review KYC applications
    Kyc {
        #[command(subcommand)]
        action: KycAction,
    },
}

#[derive(Subcommand)]
enum AdminsAction {
    /// List admin accounts
    List,
    /// Reassign an admin's role
    SetRole {
        /// Admin ID
        id: String,

        /// Role ID to assign
        #[arg(short, long)]
        role: String,
    },
    /// Delete an admin account
    Delete {
        /// Admin ID
        id: String,
    },
}

#[derive(Subcommand)]
enum RolesAction {
    /// List roles
    List,
}

#[derive(Subcommand)]
enum FeesAction {
    /// List configured fees
    List,
    /// Create a new fee
    Create {
        /// Fee name
        #[arg(short, long)]
        name: String,

        /// Fee description
        #[arg(short, long)]
        description: String,

        /// Percentage rate (mutually exclusive with --amount)
        #[arg(long)]
        rate: Option<String>,

        /// Flat amount (mutually exclusive with --rate)
        #[arg(long)]
        amount: Option<String>,

        /// Service the fee applies to (e.g. money_transfer, airtime)
        #[arg(short, long, default_value = "")]
        service: String,

        /// Channel (all, app, ussd, web, pos)
        #[arg(short, long, default_value = "all")]
        channel: String,

        /// Create the fee as inactive
        #[arg(long)]
        inactive: bool,
    },
}

#[derive(Subcommand)]
enum KycAction {
    /// List KYC applications
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ismartpay=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client()?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&client, &email, &password).await?;
        }
        Commands::Logout => commands::auth::logout(&client),
        Commands::Register {
            first_name,
            last_name,
            email,
            phone,
            password,
        } => {
            commands::auth::register(&client, first_name, last_name, email, phone, password)
                .await?;
        }
        Commands::Admins { action } => match action {
            AdminsAction::List => commands::admins::list(&client).await?,
            AdminsAction::SetRole { id, role } => {
                commands::admins::set_role(&client, &id, &role).await?;
            }
            AdminsAction::Delete { id } => commands::admins::delete(&client, &id).await?,
        },
        Commands::Roles { action } => match action {
            RolesAction::List => commands::roles::list(&client).await?,
        },
        Commands::Fees { action } => match action {
            FeesAction::List => commands::fees::list(&client).await?,
            FeesAction::Create {
                name,
                description,
                rate,
                amount,
                service,
                channel,
                inactive,
            } => {
                commands::fees::create(
                    &client,
                    commands::fees::CreateArgs {
                        name,
                        description,
                        rate,
                        amount,
                        service,
                        channel,
                        inactive,
                    },
                )
                .await?;
            }
        },
        Commands::Kyc { action } => match action {
            KycAction::List => commands::kyc::list(&client).await?,
        },
    }
    Ok(())
}

/// Build a client with the file-backed session store, restoring any
/// persisted session.
fn build_client() -> Result<ConsoleClient, Box<dyn std::error::Error>> {
    let config = ConsoleConfig::from_env()?;
    let store = Arc::new(FileSessionStore::new(store::session_file_path(&config)));
    Ok(ConsoleClient::with_store(&config, store)?)
}
