use std::{fmt::Display, result};

use dobro_boundary::Error as JsonErrorResponse;
use rocket::{
    self, delete, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{jwt, sqlite},
};
use dobro_application::{error::AppError, prelude as flows};
use dobro_core::{entities::*, usecases};

mod cities;
mod categories;
mod error;
mod events;
mod news;
mod organizations;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        get_ping,
        // ---   organizations   --- //
        organizations::get_organizations,
        organizations::get_organization_favorites,
        organizations::get_organization,
        organizations::post_organization,
        organizations::delete_organization,
        organizations::post_organization_favorite,
        organizations::delete_organization_favorite,
        // ---   events   --- //
        events::get_events,
        events::get_event_favorites,
        events::get_event,
        events::post_event,
        events::delete_event,
        events::post_event_favorite,
        events::delete_event_favorite,
        // ---   news   --- //
        news::get_news_entries,
        news::get_news_favorites,
        news::get_news_entry,
        news::post_news_entry,
        news::delete_news_entry,
        news::post_news_favorite,
        news::delete_news_favorite,
        // ---   cities   --- //
        cities::get_cities,
        cities::post_city,
        cities::get_city,
        cities::delete_city,
        // ---   categories   --- //
        categories::get_organization_categories,
        categories::post_organization_category,
        categories::get_event_categories,
        categories::post_event_category,
        // ---   users   --- //
        users::post_register,
        users::post_login,
        users::post_refresh,
        users::get_current_user,
    ]
}

#[get("/ping")]
fn get_ping() -> Json<json::Ping> {
    Json(json::Ping {
        status: "ok".into(),
        message: "pong".into(),
        timestamp: Timestamp::now().to_string(),
    })
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
