pub mod prelude {
    pub use cc_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub(crate) use crate::{
        error::{AppError, BError},
        prelude as flows, sqlite,
    };

    pub fn fixture() -> sqlite::Connections {
        let connections = sqlite::Connections::init(":memory:", 1).unwrap();
        cc_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
        connections
    }

    pub fn default_new_shop() -> usecases::NewCoffeeShop {
        usecases::NewCoffeeShop {
            name: "Blue Cup".into(),
            address: "12 Market St".into(),
            description: "A cozy corner cafe".into(),
            image_url: "https://x/y.jpg".into(),
            ..Default::default()
        }
    }
}

use self::prelude::*;

#[test]
fn create_shop_and_load_it_again() {
    let connections = fixture();
    let guest = flows::ensure_guest_user(&connections).unwrap();

    let new_shop = usecases::NewCoffeeShop {
        coffee_brands: Some(r#"["Roastery A","Roastery B"]"#.into()),
        coffee_styles: Some(r#"["Espresso","Filter"]"#.into()),
        price_range: Some("[2,3]".into()),
        latitude: Some(48.8566),
        longitude: Some(2.3522),
        website: Some("https://bluecup.example".into()),
        opening_hours: Some(r#"{"mon":"8-18"}"#.into()),
        ..default_new_shop()
    };
    let created = flows::create_shop(&connections, new_shop, guest.id).unwrap();
    assert_eq!(created.user_id, guest.id);

    let loaded = connections.shared().unwrap().get_shop(created.id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(
        loaded.attributes.coffee_brands,
        vec!["Roastery A".to_string(), "Roastery B".to_string()]
    );
    assert_eq!((loaded.price_range.min(), loaded.price_range.max()), (2, 3));
    assert_eq!(loaded.location.unwrap().lat_deg(), 48.8566);
}

#[test]
fn do_not_create_shop_with_invalid_payload() {
    let connections = fixture();
    let guest = flows::ensure_guest_user(&connections).unwrap();

    let new_shop = usecases::NewCoffeeShop {
        name: "ab".into(),
        ..default_new_shop()
    };
    let err = flows::create_shop(&connections, new_shop, guest.id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::Validation(_)))
    ));
    assert_eq!(connections.shared().unwrap().count_shops().unwrap(), 0);
}

#[test]
fn create_rating_for_existing_shop() {
    let connections = fixture();
    let guest = flows::ensure_guest_user(&connections).unwrap();
    let shop = flows::create_shop(&connections, default_new_shop(), guest.id).unwrap();

    let new_rating = usecases::NewShopRating {
        rating: 4,
        review: Some("Great flat white".into()),
        visited: Some(true),
        want_to_go: None,
    };
    let rating = flows::create_rating(&connections, shop.id, new_rating, guest.id).unwrap();
    assert_eq!(rating.shop_id, shop.id);
    assert_eq!(rating.user_id, guest.id);
    assert!(rating.visited);
    assert!(!rating.want_to_go);

    let ratings = connections
        .shared()
        .unwrap()
        .ratings_of_shop(shop.id)
        .unwrap();
    assert_eq!(ratings, vec![rating]);
}

#[test]
fn do_not_create_rating_for_missing_shop() {
    let connections = fixture();
    let guest = flows::ensure_guest_user(&connections).unwrap();

    let new_rating = usecases::NewShopRating {
        rating: 4,
        ..Default::default()
    };
    let err = flows::create_rating(&connections, 999, new_rating, guest.id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::Repo(
            RepoError::NotFound
        )))
    ));
}

#[test]
fn guest_user_bootstrap_is_idempotent() {
    let connections = fixture();
    let first = flows::ensure_guest_user(&connections).unwrap();
    let second = flows::ensure_guest_user(&connections).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.id, 1);
    assert_eq!(connections.shared().unwrap().count_users().unwrap(), 1);
}
