use super::*;

#[get("/city?<regex>")]
pub fn get_cities(db: sqlite::Connections, regex: Option<String>) -> Result<Vec<json::City>> {
    let cities = usecases::query_cities(&db.shared()?, regex.as_deref())?;
    Ok(Json(cities.into_iter().map(to_json::city).collect()))
}

#[post("/city", format = "application/json", data = "<new_city>")]
pub fn post_city(
    db: sqlite::Connections,
    new_city: JsonResult<json::NewCity>,
) -> CreatedResult<json::City> {
    let city = flows::create_city(&db, &new_city?.into_inner().name)?;
    Ok((Status::Created, Json(to_json::city(city))))
}

// A numeric key is looked up as an id, anything else as a city name.
#[get("/city/<key>")]
pub fn get_city(db: sqlite::Connections, key: &str) -> Result<json::City> {
    let city = usecases::get_city(&db.shared()?, key)?;
    Ok(Json(to_json::city(city)))
}

#[delete("/city/<id>")]
pub fn delete_city(db: sqlite::Connections, id: i64) -> Result<json::ResultMessage> {
    flows::delete_city(&db, id)?;
    Ok(Json(json::ResultMessage {
        message: format!("City {id} has been deleted"),
    }))
}
