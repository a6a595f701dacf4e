mod google_places;

pub use self::google_places::GooglePlaces;
