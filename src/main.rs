use anyhow::Result;
use clap::Parser;
use tracing::info;
use wms_token_client::config::settings::AuthConfig;
use wms_token_client::sources::OAuth2Source;
use wms_token_client::utils::logging;
use wms_token_client::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read args and init logging
    // -------------------------------

    let args = Args::parse();
    let logging_config = logging::resolve(args.log_level);
    logging::init_logging(&logging_config);

    // -------------------------------
    // 2. Load auth config from env
    // -------------------------------

    let cfg = AuthConfig::from_env()?;

    // -------------------------------
    // 3. Fetch the token once
    // -------------------------------

    let source = OAuth2Source::new(cfg)?;
    let token = source.fetch_token().await?;

    info!(
        token_type = %token.token_type,
        expires_in = token.remaining_seconds(),
        "access token obtained"
    );
    println!(
        "access token obtained ({}, expires in {} seconds)",
        token.token_type,
        token.remaining_seconds()
    );

    Ok(())
}
