// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use cc_core::entities::*;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUserEntity<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
    pub created_at: i64,
}

impl<'a> NewUserEntity<'a> {
    pub fn new(new_user: &'a NewUser, created_at: Timestamp) -> Self {
        let NewUser {
            username,
            password,
            name,
            email,
            avatar_url,
        } = new_user;
        Self {
            username,
            password,
            name: name.as_deref(),
            email: email.as_deref(),
            avatar_url: avatar_url.as_deref(),
            created_at: created_at.as_secs(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: i64,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            username,
            password,
            name,
            email,
            avatar_url,
            created_at,
        } = from;
        Self {
            id,
            username,
            password,
            name,
            email,
            avatar_url,
            created_at: Timestamp::from_secs(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = coffee_shops)]
pub struct NewShopEntity<'a> {
    pub user_id: i64,
    pub created_at: i64,
    pub name: &'a str,
    pub address: &'a str,
    pub description: &'a str,
    pub image_url: String,
    pub noise_level: Option<&'a str>,
    pub price_min: i16,
    pub price_max: i16,
    pub open_now: Option<bool>,
    pub is_independent: Option<bool>,
    pub laptop_friendly: Option<bool>,
    pub coffee_quality: Option<i16>,
    pub ambience: Option<i16>,
    pub service: Option<i16>,
    pub workability: Option<i16>,
    pub menu_variety: Option<i16>,
    pub price_value: Option<i16>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub website: Option<String>,
    pub phone: Option<&'a str>,
    pub maps_url: Option<String>,
    pub opening_hours: Option<&'a str>,
}

fn into_db_score(score: Option<ScoreValue>) -> Option<i16> {
    score.map(|s| i16::from(i8::from(s)))
}

impl<'a> NewShopEntity<'a> {
    pub fn new(details: &'a ShopDetails, user_id: i64, created_at: Timestamp) -> Self {
        let contact = details.contact.as_ref();
        Self {
            user_id,
            created_at: created_at.as_secs(),
            name: &details.name,
            address: &details.address,
            description: &details.description,
            image_url: details.image_url.to_string(),
            noise_level: details.noise_level.as_deref(),
            price_min: i16::from(details.price_range.min()),
            price_max: i16::from(details.price_range.max()),
            open_now: details.open_now,
            is_independent: details.is_independent,
            laptop_friendly: details.laptop_friendly,
            coffee_quality: into_db_score(details.scores.coffee_quality),
            ambience: into_db_score(details.scores.ambience),
            service: into_db_score(details.scores.service),
            workability: into_db_score(details.scores.workability),
            menu_variety: into_db_score(details.scores.menu_variety),
            price_value: into_db_score(details.scores.price_value),
            lat: details.location.map(MapPoint::lat_deg),
            lng: details.location.map(MapPoint::lng_deg),
            website: contact.and_then(|c| c.website.as_ref()).map(Url::to_string),
            phone: contact.and_then(|c| c.phone.as_deref()),
            maps_url: contact.and_then(|c| c.maps_url.as_ref()).map(Url::to_string),
            opening_hours: details.opening_hours.as_ref().map(OpeningHours::as_str),
        }
    }
}

#[derive(Queryable)]
pub struct ShopEntity {
    pub id: i64,
    pub user_id: i64,
    pub created_at: i64,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image_url: String,
    pub noise_level: Option<String>,
    pub price_min: i16,
    pub price_max: i16,
    pub open_now: Option<bool>,
    pub is_independent: Option<bool>,
    pub laptop_friendly: Option<bool>,
    pub coffee_quality: Option<i16>,
    pub ambience: Option<i16>,
    pub service: Option<i16>,
    pub workability: Option<i16>,
    pub menu_variety: Option<i16>,
    pub price_value: Option<i16>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub maps_url: Option<String>,
    pub opening_hours: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = shop_attribute)]
pub struct NewShopAttribute<'a> {
    pub shop_id: i64,
    pub kind: i16,
    pub value: &'a str,
}

#[derive(Queryable)]
pub struct ShopAttributeEntity {
    pub rowid: i64,
    pub shop_id: i64,
    pub kind: i16,
    pub value: String,
}

#[derive(Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRatingEntity<'a> {
    pub shop_id: i64,
    pub user_id: i64,
    pub created_at: i64,
    pub rating: i16,
    pub review: Option<&'a str>,
    pub visited: bool,
    pub want_to_go: bool,
}

impl<'a> NewRatingEntity<'a> {
    pub fn new(
        details: &'a RatingDetails,
        shop_id: i64,
        user_id: i64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            shop_id,
            user_id,
            created_at: created_at.as_secs(),
            rating: i16::from(i8::from(details.value)),
            review: details.review.as_deref(),
            visited: details.visited,
            want_to_go: details.want_to_go,
        }
    }
}

#[derive(Queryable)]
pub struct RatingEntity {
    pub id: i64,
    pub shop_id: i64,
    pub user_id: i64,
    pub created_at: i64,
    pub rating: i16,
    pub review: Option<String>,
    pub visited: bool,
    pub want_to_go: bool,
}
