use super::*;

#[get(
    "/event?<nko_id>&<city>&<category>&<regex>&<favorite>&<time_from>&<time_to>&<jwt_token>"
)]
#[allow(clippy::too_many_arguments)]
pub fn get_events(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    nko_id: Vec<i64>,
    city: Option<String>,
    category: Vec<String>,
    regex: Option<String>,
    favorite: Option<bool>,
    time_from: Option<i64>,
    time_to: Option<i64>,
    jwt_token: Option<String>,
) -> Result<Vec<json::Event>> {
    let query = usecases::EventQuery {
        organizations: (!nko_id.is_empty()).then_some(nko_id),
        city,
        categories: (!category.is_empty()).then_some(category),
        starts_after: time_from.map(Timestamp::from_seconds),
        finishes_before: time_to.map(Timestamp::from_seconds),
        pattern: regex,
        favorites_only: favorite.unwrap_or(false),
        token: jwt_token,
    };
    let records = usecases::query_events(&db.shared()?, &**jwt_state, query)?;
    Ok(Json(records.into_iter().map(to_json::event).collect()))
}

#[get("/event/<id>")]
pub fn get_event(db: sqlite::Connections, id: i64) -> Result<json::Event> {
    let record = usecases::get_event(&db.shared()?, id)?;
    Ok(Json(to_json::event(record)))
}

#[post("/event", format = "application/json", data = "<new_event>")]
pub fn post_event(
    db: sqlite::Connections,
    account: Account,
    new_event: JsonResult<json::NewEvent>,
) -> CreatedResult<json::Event> {
    let new_event = from_json::new_event(new_event?.into_inner());
    let record = flows::create_event(&db, account.user_id(), new_event)?;
    Ok((Status::Created, Json(to_json::event(record))))
}

#[delete("/event/<id>")]
pub fn delete_event(db: sqlite::Connections, id: i64) -> Result<json::ResultMessage> {
    flows::delete_event(&db, id)?;
    Ok(Json(json::ResultMessage {
        message: format!("Event {id} has been deleted"),
    }))
}

#[get("/event/favorites")]
pub fn get_event_favorites(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Event>> {
    let records = usecases::event_favorites(&db.shared()?, account.user_id())?;
    Ok(Json(records.into_iter().map(to_json::event).collect()))
}

#[post("/event/<id>/favorite")]
pub fn post_event_favorite(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::ResultMessage> {
    flows::add_event_favorite(&db, account.user_id(), id)?;
    Ok(Json(json::ResultMessage {
        message: format!("Event {id} has been added to favorites"),
    }))
}

#[delete("/event/<id>/favorite")]
pub fn delete_event_favorite(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::ResultMessage> {
    flows::remove_event_favorite(&db, account.user_id(), id)?;
    Ok(Json(json::ResultMessage {
        message: format!("Event {id} has been removed from favorites"),
    }))
}
