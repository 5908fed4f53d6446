/*
[INPUT]:  CLI arguments, YAML configuration file, PAYSTACK_SECRET_KEY
[OUTPUT]: Pretty-printed JSON API responses on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paystack_adapter::PaystackClient;
use paystack_cli::{Cli, CliConfig, SECRET_KEY_ENV, run};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::load(args.config_path.as_deref())
        .context("load config")?
        .with_secret_key_override(std::env::var(SECRET_KEY_ENV).ok());
    let secret_key = config.secret_key()?;
    let client_config = config.client_config();
    info!(base_url = %client_config.base_url, "configuration loaded");

    let client = PaystackClient::with_config(secret_key, client_config)
        .context("build paystack client")?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let response = run(&client, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
