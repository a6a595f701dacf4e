use std::ops::Deref;

use cc_core::gateways::places::PlacesGateway;

// Wrapper around the boxed gateway to manage it as Rocket state
pub struct Places(pub Box<dyn PlacesGateway + Send + Sync>);

impl Deref for Places {
    type Target = dyn PlacesGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
