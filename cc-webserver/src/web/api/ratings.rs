use super::*;

#[get("/coffee-shops/<id>/ratings")]
pub fn get_shop_ratings(db: sqlite::Connections, id: i64) -> Result<Vec<json::Rating>> {
    let ratings = {
        let db = db.shared()?;
        usecases::ratings_of_shop(&db, id)?
    };
    Ok(Json(ratings.into_iter().map(Into::into).collect()))
}

#[post("/coffee-shops/<id>/ratings", data = "<new_rating>")]
pub fn post_shop_rating(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    id: i64,
    new_rating: JsonResult<json::NewShopRating>,
) -> CreatedResult<json::Rating> {
    let new_rating = json::new_rating_params(
        new_rating
            .map_err(|err| {
                log::debug!("Invalid rating payload: {err:?}");
                err
            })?
            .into_inner(),
    );
    // The shop id is taken from the path, the user id from the
    // configured guest identity.
    let rating = flows::create_rating(&db, id, new_rating, cfg.guest_user_id)?;
    Ok(status::Custom(Status::Created, Json(rating.into())))
}
