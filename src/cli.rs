use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(name = "coffee-compass", version, about = "Coffee-shop directory web service")]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        cc_db_sqlite::Connections::init(&cfg.db.conn_sqlite, u32::from(cfg.db.conn_pool_size))
            .context("Failed to initialize the database connection pool")?;
    cc_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let places_gw = gateways::places_gateway(&cfg);

    let web_cfg = cc_webserver::Cfg {
        guest_user_id: cfg.webserver.guest_user_id,
    };
    cc_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        web_cfg,
        Box::new(places_gw),
    )
    .await;
    Ok(())
}
