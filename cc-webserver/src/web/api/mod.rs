use std::{fmt::Display, result};

use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, status, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use cc_boundary::Error as JsonErrorResponse;
use cc_core::usecases;

use super::{guards::*, sqlite, Cfg};
use crate::adapters::json;
use cc_application::prelude as flows;

mod error;
mod places;
mod ratings;
mod shops;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<status::Custom<Json<T>>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   coffee shops   --- //
        shops::get_shops,
        shops::get_shop,
        shops::post_shop,
        // ---   ratings   --- //
        ratings::get_shop_ratings,
        ratings::post_shop_rating,
        // ---   places   --- //
        places::search_places,
        places::place_details,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

// Validation failures carry their field-level complaints
// into the response body.
fn field_errors_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    errors: &[cc_core::util::validate::FieldError],
) -> response::Result<'o> {
    let body: Vec<_> = errors
        .iter()
        .map(|err| json::FieldError {
            field: err.field.to_string(),
            message: err.message.clone(),
        })
        .collect();
    Json(body).respond_to(req).map(|mut res| {
        res.set_status(Status::BadRequest);
        res
    })
}
