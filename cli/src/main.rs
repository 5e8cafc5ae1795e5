//! Command-line driver for the login and signup flows.
//!
//! Runs the shared `forms` state machines against the remote auth API with
//! `reqwest`, persisting the session token to a JSON file.

mod api;
mod attachment;
mod error;
mod runner;
#[cfg(test)]
mod test_support;
mod token_store;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use forms::wire::DEFAULT_API_BASE_URL;
use tracing_subscriber::EnvFilter;

use crate::api::AuthApi;
use crate::attachment::Attachment;
use crate::error::CliError;
use crate::runner::{Report, Runtime};
use crate::token_store::TokenStore;

#[derive(Parser, Debug)]
#[command(name = "authflow-cli", about = "Log in to or sign up with the authflow API")]
struct Cli {
    #[arg(long, env = "AUTHFLOW_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    #[arg(long, env = "AUTHFLOW_TOKEN_FILE", default_value = ".authflow/token.json")]
    token_file: PathBuf,

    #[arg(long, env = "AUTHFLOW_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTHFLOW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account, optionally with a profile picture.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTHFLOW_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        picture: Option<PathBuf>,
    },
    /// Forget the stored session token.
    Logout,
    /// Report whether a session token is stored.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "authflow-cli failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool, CliError> {
    let api = AuthApi::new(&cli.api_base_url, Duration::from_secs(cli.timeout_secs))?;
    let store = TokenStore::open(&cli.token_file)?;
    let mut runtime = Runtime::new(api, store);

    match cli.command {
        Command::Login { email, password } => {
            let report = runtime.login(&email, &password).await?;
            Ok(print_report(&report))
        }
        Command::Signup { name, email, password, picture } => {
            let picture = picture.as_deref().map(Attachment::read).transpose()?;
            let report = runtime.signup(&name, &email, &password, picture).await?;
            Ok(print_report(&report))
        }
        Command::Logout => {
            if runtime.logout()? {
                println!("logged out");
            } else {
                println!("no stored session");
            }
            Ok(true)
        }
        Command::Status => {
            let state = if runtime.session().is_logged_in() { "logged in" } else { "logged out" };
            println!("{state} ({})", runtime.store().path().display());
            Ok(runtime.session().is_logged_in())
        }
    }
}

fn print_report(report: &Report) -> bool {
    for (field, message) in &report.field_errors {
        eprintln!("{}: {message}", field.as_str());
    }
    if !report.error.is_empty() {
        eprintln!("{}", report.error);
    }
    if let Some(route) = report.navigated_to {
        println!("ok -> {}", route.path());
    }
    report.succeeded()
}
