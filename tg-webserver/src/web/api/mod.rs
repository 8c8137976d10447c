use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};
use tg_boundary::{self as json, Error as JsonErrorResponse};

use super::guards::*;
use crate::web::sqlite;
use tg_application::prelude as flows;
use tg_core::{entities::*, usecases, venue_source::StoredVenues};

mod error;
mod favorites;
mod util;
mod venues;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   venues   --- //
        venues::get_venues,
        venues::get_venue,
        venues::get_venue_reports,
        venues::post_venue_report,
        venues::post_venue_status,
        venues::get_report,
        // ---   favorites   --- //
        favorites::get_favorites,
        favorites::put_favorite,
        favorites::delete_favorite,
        util::get_version,
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
