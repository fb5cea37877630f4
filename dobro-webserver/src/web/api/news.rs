use super::*;

#[get("/news?<city>&<regex>&<favorite>&<jwt_token>")]
pub fn get_news_entries(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    city: Option<String>,
    regex: Option<String>,
    favorite: Option<bool>,
    jwt_token: Option<String>,
) -> Result<Vec<json::News>> {
    let query = usecases::NewsQuery {
        city,
        pattern: regex,
        favorites_only: favorite.unwrap_or(false),
        token: jwt_token,
    };
    let records = usecases::query_news(&db.shared()?, &**jwt_state, query)?;
    Ok(Json(records.into_iter().map(to_json::news).collect()))
}

#[get("/news/<id>")]
pub fn get_news_entry(db: sqlite::Connections, id: i64) -> Result<json::News> {
    let record = usecases::get_news(&db.shared()?, id)?;
    Ok(Json(to_json::news(record)))
}

#[post("/news", format = "application/json", data = "<new_news>")]
pub fn post_news_entry(
    db: sqlite::Connections,
    account: Account,
    new_news: JsonResult<json::NewNews>,
) -> CreatedResult<json::News> {
    let new_news = from_json::new_news(new_news?.into_inner());
    let record = flows::create_news(&db, account.user_id(), new_news)?;
    Ok((Status::Created, Json(to_json::news(record))))
}

#[delete("/news/<id>")]
pub fn delete_news_entry(db: sqlite::Connections, id: i64) -> Result<json::ResultMessage> {
    flows::delete_news(&db, id)?;
    Ok(Json(json::ResultMessage {
        message: format!("News entry {id} has been deleted"),
    }))
}

#[get("/news/favorites")]
pub fn get_news_favorites(db: sqlite::Connections, account: Account) -> Result<Vec<json::News>> {
    let records = usecases::news_favorites(&db.shared()?, account.user_id())?;
    Ok(Json(records.into_iter().map(to_json::news).collect()))
}

#[post("/news/<id>/favorite")]
pub fn post_news_favorite(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::ResultMessage> {
    flows::add_news_favorite(&db, account.user_id(), id)?;
    Ok(Json(json::ResultMessage {
        message: format!("News entry {id} has been added to favorites"),
    }))
}

#[delete("/news/<id>/favorite")]
pub fn delete_news_favorite(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::ResultMessage> {
    flows::remove_news_favorite(&db, account.user_id(), id)?;
    Ok(Json(json::ResultMessage {
        message: format!("News entry {id} has been removed from favorites"),
    }))
}
