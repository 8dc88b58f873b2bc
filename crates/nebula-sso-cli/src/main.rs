use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use nebula_sso::{resolve_identity, Identity, IdentityClaims};
use tracing::{debug, Level};

use crate::logger::{LoggerConfig, LoggerFormat};

mod config;
mod logger;

/// Resolves a normalized identity from the claims returned by an SSO identity provider
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Reads the claims payload from a file instead of stdin
    #[arg(short = 'i', long, value_name = "FILE")]
    pub claims: Option<PathBuf>,
    /// Sets the claim holding the email
    #[arg(long)]
    pub email_field: Option<String>,
    /// Sets the claim holding the user id
    #[arg(long)]
    pub id_field: Option<String>,
    /// Sets the claim holding the groups
    #[arg(long)]
    pub group_field: Option<String>,
    /// Sets the group assigned when no provider group is mapped
    #[arg(long)]
    pub default_group: Option<String>,
    /// Sets the separator of a single-string group claim
    #[arg(long)]
    pub group_separator: Option<String>,
    /// Pretty-prints the resolved identity
    #[arg(long)]
    pub pretty: bool,
    /// Logs in a human readable format
    #[arg(long)]
    pub compact_log: bool,
    /// Enables debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

fn read_claims(path: Option<&PathBuf>) -> anyhow::Result<IdentityClaims> {
    let claims = match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open claims file {}", path.display()))?;
            IdentityClaims::from_reader(BufReader::new(file))?
        }
        None => IdentityClaims::from_reader(std::io::stdin().lock())?,
    };
    Ok(claims)
}

fn resolve(args: &Args) -> anyhow::Result<Identity> {
    let resolution_config = config::load_config(args)?;
    let claims = read_claims(args.claims.as_ref())?;
    debug!("resolving identity from {} raw claims", claims.raw_attributes.len());

    Ok(resolve_identity(&claims, &resolution_config))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(LoggerConfig {
        format: if args.compact_log { LoggerFormat::Compact } else { LoggerFormat::Json },
        level: if args.verbose { Level::DEBUG } else { Level::INFO },
    });

    let identity = resolve(&args)?;
    let output =
        if args.pretty { serde_json::to_string_pretty(&identity)? } else { serde_json::to_string(&identity)? };
    println!("{output}");
    Ok(())
}
