use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub places: Option<Places>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Db {
    /// SQLite connection
    pub connection_sqlite: Option<String>,
    pub connection_pool_size: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebServer {
    pub enable_cors: Option<bool>,
    pub guest_user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Places {
    pub api_key: Option<String>,
}
