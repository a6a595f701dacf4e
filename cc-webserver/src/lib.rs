#[macro_use]
extern crate log;

use cc_core::gateways::places::PlacesGateway;
use cc_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    places_gw: Box<dyn PlacesGateway + Send + Sync>,
) {
    web::run(connections.into(), enable_cors, cfg, places_gw).await;
}
