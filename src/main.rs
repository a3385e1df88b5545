use clap::{Parser, Subcommand};
use finance_ledger::{
    cli::{
        AnalyticsCommands, CategoryCommands, TransactionCommands, handle_analytics_command,
        handle_category_command, handle_transaction_command,
    },
    config::{database, environment},
    errors::Result,
    resolvers::Context,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "finance-ledger",
    version,
    about = "Track categories, transactions and expenses"
)]
struct Cli {
    /// User the command acts on behalf of (defaults to `FINANCE_LEDGER_USER`)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Expense analytics
    #[command(subcommand)]
    Analytics(AnalyticsCommands),
}

async fn run(cli: Cli) -> Result<String> {
    let user_id = match cli.user {
        Some(user) => user,
        None => environment::current_user()?,
    };

    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    let ctx = Context::new(db, user_id);
    match cli.command {
        Commands::Category(cmd) => handle_category_command(&ctx, cmd).await,
        Commands::Transaction(cmd) => handle_transaction_command(&ctx, cmd).await,
        Commands::Analytics(cmd) => handle_analytics_command(&ctx, cmd).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible); stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load the .env file for the current APP_ENV before anything reads the environment
    environment::load_env_file();

    // 3. Parse arguments after the env file so `FINANCE_LEDGER_USER` can come from it
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e.public_message());
            ExitCode::FAILURE
        }
    }
}
