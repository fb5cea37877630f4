use super::*;

#[get("/category/nko")]
pub fn get_organization_categories(db: sqlite::Connections) -> Result<Vec<json::Category>> {
    let categories = usecases::query_categories(&db.shared()?, CategoryKind::Organization)?;
    Ok(Json(categories.into_iter().map(to_json::category).collect()))
}

#[post("/category/nko", format = "application/json", data = "<new_category>")]
pub fn post_organization_category(
    db: sqlite::Connections,
    new_category: JsonResult<json::NewCategory>,
) -> CreatedResult<json::Category> {
    let json::NewCategory { name, description } = new_category?.into_inner();
    let category = flows::create_category(
        &db,
        CategoryKind::Organization,
        &name,
        description.as_deref(),
    )?;
    Ok((Status::Created, Json(to_json::category(category))))
}

#[get("/category/event")]
pub fn get_event_categories(db: sqlite::Connections) -> Result<Vec<json::Category>> {
    let categories = usecases::query_categories(&db.shared()?, CategoryKind::Event)?;
    Ok(Json(categories.into_iter().map(to_json::category).collect()))
}

#[post("/category/event", format = "application/json", data = "<new_category>")]
pub fn post_event_category(
    db: sqlite::Connections,
    new_category: JsonResult<json::NewCategory>,
) -> CreatedResult<json::Category> {
    let json::NewCategory { name, description } = new_category?.into_inner();
    let category =
        flows::create_category(&db, CategoryKind::Event, &name, description.as_deref())?;
    Ok((Status::Created, Json(to_json::category(category))))
}
