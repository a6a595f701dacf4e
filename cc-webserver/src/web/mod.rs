use rocket::{config::Config as RocketCfg, Rocket, Route};

use cc_application::prelude as flows;
use cc_core::gateways::places::PlacesGateway;

pub mod api;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Fixed identity attached to all writes as long as
    /// there is no real authentication.
    pub guest_user_id: i64,
}

impl Default for Cfg {
    fn default() -> Self {
        Self { guest_user_id: 1 }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    places: Box<dyn PlacesGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { places } = gateways;

    info!("Ensuring the guest user exists...");
    let guest = flows::ensure_guest_user(&db).unwrap();
    if guest.id != cfg.guest_user_id {
        warn!(
            "The guest user has id {} instead of the configured id {}",
            guest.id, cfg.guest_user_id
        );
    }

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let places_gw = guards::Places(places);

    let mut instance = r.manage(db).manage(places_gw).manage(cfg);

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    places: Box<dyn PlacesGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { places };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
