use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "coffee-compass.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_PLACES_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

const DEFAULT_DB_URL: &str = "coffee-compass.db";
const DEFAULT_DB_POOL_SIZE: u8 = 10;
const DEFAULT_GUEST_USER_ID: i64 = 1;

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub places: Places,
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub guest_user_id: i64,
}

pub struct Places {
    /// Credential for the external places provider
    pub api_key: Option<String>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(api_key) = env::var(ENV_NAME_PLACES_API_KEY) {
            cfg.places.api_key = Some(api_key);
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config {
            db,
            webserver,
            places,
        } = from;
        let db = Db {
            conn_sqlite: db
                .as_ref()
                .and_then(|db| db.connection_sqlite.clone())
                .unwrap_or_else(|| DEFAULT_DB_URL.to_string()),
            conn_pool_size: db
                .as_ref()
                .and_then(|db| db.connection_pool_size)
                .unwrap_or(DEFAULT_DB_POOL_SIZE),
        };
        let webserver = WebServer {
            enable_cors: webserver
                .as_ref()
                .and_then(|ws| ws.enable_cors)
                .unwrap_or(false),
            guest_user_id: webserver
                .as_ref()
                .and_then(|ws| ws.guest_user_id)
                .unwrap_or(DEFAULT_GUEST_USER_ID),
        };
        let places = Places {
            api_key: places.and_then(|p| p.api_key),
        };
        Self {
            db,
            webserver,
            places,
        }
    }
}
