use std::process::ExitCode;

use clap::{Parser, Subcommand};
use e2e_fixtures::fixtures::{mint_session, session_cookie_value};
use e2e_fixtures::telemetry::init_tracing;
use e2e_fixtures::{
    FixtureConfig, FixtureError, FixtureHarness, InsertUserOptions, SIGNUP_PASSWORD_PHRASE,
};
use migration::MigrationCommand;

#[derive(Parser)]
#[command(name = "e2e-fixtures")]
#[command(about = "Seed users, sessions and signup gates for end-to-end tests")]
struct Args {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a migration command: up | down | fresh | reset | refresh | status
    Migrate { command: MigrationCommand },
    #[command(flatten)]
    Fixture(FixtureCommand),
}

#[derive(Subcommand)]
enum FixtureCommand {
    /// Create a user and print it as JSON. The password defaults to the username.
    CreateUser {
        #[arg(long)]
        password: Option<String>,
    },
    /// Mint a session for an existing user and print the `_session` cookie value
    Login {
        #[arg(long)]
        user_id: i64,
    },
    /// Reset the signup gate to the fixed phrase
    SetSignupPassword,
    /// Delete a user (with its password and sessions) by username
    DeleteUser { username: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.json_logs);

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("e2e-fixtures: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), FixtureError> {
    let config = FixtureConfig::from_env()?;

    match command {
        // plain connect: connect_and_migrate would apply `up` first
        Command::Migrate { command } => {
            let db = db_infra::connect(&config.database).await?;
            db_infra::run_migration(&db, command).await?;
            Ok(())
        }
        Command::Fixture(command) => run_fixture(FixtureHarness::connect(config).await?, command).await,
    }
}

async fn run_fixture(harness: FixtureHarness, command: FixtureCommand) -> Result<(), FixtureError> {
    match command {
        FixtureCommand::CreateUser { password } => {
            let user = harness
                .insert_new_user(InsertUserOptions { password })
                .await?;
            let json = serde_json::to_string_pretty(&user)
                .map_err(|e| FixtureError::config(format!("failed to render user: {e}")))?;
            println!("{json}");
        }
        FixtureCommand::Login { user_id } => {
            let user = harness.find_user(user_id).await?;
            let session_id = mint_session(harness.db(), user.id).await?;
            let value = session_cookie_value(harness.codec(), &session_id)?;
            println!("{value}");
        }
        FixtureCommand::SetSignupPassword => {
            harness.set_signup_password().await?;
            println!("signup password set to '{SIGNUP_PASSWORD_PHRASE}'");
        }
        FixtureCommand::DeleteUser { username } => {
            harness.delete_user_by_username(&username).await?;
        }
    }
    Ok(())
}
