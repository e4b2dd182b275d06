use crate::api::{self, ApiToken};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub max_connections: u32,
    pub api_token: SecretString,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the DSN is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let dsn = validate_dsn(&args.dsn)?;

    debug!(
        "Connecting to database at {}",
        dsn.host_str().unwrap_or("localhost")
    );

    api::new(
        args.port,
        args.dsn,
        args.max_connections,
        ApiToken::new(args.api_token),
    )
    .await
}

/// Parse the DSN and make sure it targets Postgres.
fn validate_dsn(dsn: &str) -> Result<Url> {
    let parsed = Url::parse(dsn).context("Invalid database connection string")?;

    match parsed.scheme() {
        "postgres" | "postgresql" => Ok(parsed),
        scheme => Err(anyhow!(
            "Unsupported database scheme '{scheme}', expected postgres://"
        )),
    }
}
