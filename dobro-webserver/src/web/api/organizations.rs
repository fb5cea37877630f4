use super::*;

#[get("/nko?<city>&<category>&<regex>&<favorite>&<jwt_token>")]
pub fn get_organizations(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    city: Option<String>,
    category: Vec<String>,
    regex: Option<String>,
    favorite: Option<bool>,
    jwt_token: Option<String>,
) -> Result<Vec<json::Organization>> {
    let query = usecases::OrganizationQuery {
        city,
        categories: (!category.is_empty()).then_some(category),
        pattern: regex,
        favorites_only: favorite.unwrap_or(false),
        token: jwt_token,
    };
    let records = usecases::query_organizations(&db.shared()?, &**jwt_state, query)?;
    Ok(Json(
        records.into_iter().map(to_json::organization).collect(),
    ))
}

#[get("/nko/<id>")]
pub fn get_organization(db: sqlite::Connections, id: i64) -> Result<json::Organization> {
    let record = usecases::get_organization(&db.shared()?, id)?;
    Ok(Json(to_json::organization(record)))
}

#[post("/nko", format = "application/json", data = "<new_org>")]
pub fn post_organization(
    db: sqlite::Connections,
    new_org: JsonResult<json::NewOrganization>,
) -> CreatedResult<json::Organization> {
    let new_org = from_json::new_organization(new_org?.into_inner());
    let record = flows::create_organization(&db, new_org)?;
    Ok((Status::Created, Json(to_json::organization(record))))
}

#[delete("/nko/<id>")]
pub fn delete_organization(db: sqlite::Connections, id: i64) -> Result<json::ResultMessage> {
    flows::delete_organization(&db, id)?;
    Ok(Json(json::ResultMessage {
        message: format!("Organization {id} has been deleted"),
    }))
}

#[get("/nko/favorites")]
pub fn get_organization_favorites(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Organization>> {
    let records = usecases::organization_favorites(&db.shared()?, account.user_id())?;
    Ok(Json(
        records.into_iter().map(to_json::organization).collect(),
    ))
}

#[post("/nko/<id>/favorite")]
pub fn post_organization_favorite(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::ResultMessage> {
    flows::add_organization_favorite(&db, account.user_id(), id)?;
    Ok(Json(json::ResultMessage {
        message: format!("Organization {id} has been added to favorites"),
    }))
}

#[delete("/nko/<id>/favorite")]
pub fn delete_organization_favorite(
    db: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::ResultMessage> {
    flows::remove_organization_favorite(&db, account.user_id(), id)?;
    Ok(Json(json::ResultMessage {
        message: format!("Organization {id} has been removed from favorites"),
    }))
}
