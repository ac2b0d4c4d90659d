use crate::{api, cli::globals::GlobalArgs};
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub jwt_secret: SecretString,
    pub token_ttl_minutes: i64,
    pub cors_origin: Option<String>,
    pub dev: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let globals = GlobalArgs::new(args.jwt_secret, args.token_ttl_minutes)
        .with_cors_origin(args.cors_origin)
        .with_dev(args.dev);

    api::new(args.port, args.dsn, globals).await
}
