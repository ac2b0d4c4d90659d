use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

pub const ARG_JWT_SECRET: &str = "jwt-secret";
pub const ARG_TOKEN_MINUTES: &str = "token-minutes";
pub const ARG_CORS_ORIGIN: &str = "cors-origin";
pub const ARG_DEV: &str = "dev";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_JWT_SECRET)
                .long(ARG_JWT_SECRET)
                .help("Secret used to sign and verify access tokens")
                .env("LABGRID_JWT_SECRET")
                .required(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_MINUTES)
                .long(ARG_TOKEN_MINUTES)
                .help("Access token lifetime in minutes")
                .default_value("60")
                .env("LABGRID_TOKEN_MINUTES")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_CORS_ORIGIN)
                .long(ARG_CORS_ORIGIN)
                .help("Exact origin allowed for cross-origin requests, example: https://labs.example.edu")
                .env("LABGRID_CORS_ORIGIN"),
        )
        .arg(
            Arg::new(ARG_DEV)
                .long(ARG_DEV)
                .help("Development mode: reflect any request origin in CORS, with credentials (not for production)")
                .env("LABGRID_DEV")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug)]
pub struct Options {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub cors_origin: Option<String>,
    pub dev: bool,
}

impl Options {
    /// Extract auth/CORS options from parsed matches.
    ///
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let jwt_secret = matches
            .get_one::<String>(ARG_JWT_SECRET)
            .cloned()
            .context("missing required argument: --jwt-secret")?;

        let token_ttl_minutes = matches
            .get_one::<i64>(ARG_TOKEN_MINUTES)
            .copied()
            .unwrap_or(60);

        Ok(Self {
            jwt_secret,
            token_ttl_minutes,
            cors_origin: matches.get_one::<String>(ARG_CORS_ORIGIN).cloned(),
            dev: matches.get_flag(ARG_DEV),
        })
    }
}
