use super::*;

#[get("/coffee-shops")]
pub fn get_shops(db: sqlite::Connections) -> Result<Vec<json::CoffeeShop>> {
    let shops = {
        let db = db.shared()?;
        usecases::all_shops(&db)?
    };
    Ok(Json(shops.into_iter().map(Into::into).collect()))
}

#[get("/coffee-shops/<id>")]
pub fn get_shop(db: sqlite::Connections, id: i64) -> Result<json::CoffeeShop> {
    let shop = {
        let db = db.shared()?;
        usecases::get_shop(&db, id)?
    };
    Ok(Json(shop.into()))
}

#[post("/coffee-shops", data = "<new_shop>")]
pub fn post_shop(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    new_shop: JsonResult<json::NewCoffeeShop>,
) -> CreatedResult<json::CoffeeShop> {
    let new_shop = json::new_shop_params(
        new_shop
            .map_err(|err| {
                log::debug!("Invalid shop payload: {err:?}");
                err
            })?
            .into_inner(),
    );
    // All writes belong to the guest user as long as there
    // is no real authentication.
    let shop = flows::create_shop(&db, new_shop, cfg.guest_user_id)?;
    Ok(status::Custom(Status::Created, Json(shop.into())))
}
