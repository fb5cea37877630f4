use super::*;
use crate::web::api::error::ParameterError;

#[post("/auth/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let json::NewUser {
        full_name,
        login,
        password,
    } = new_user?.into_inner();
    let user = flows::register_user(
        &db,
        usecases::NewUser {
            full_name,
            login,
            password,
        },
    )?;
    Ok((Status::Created, Json(to_json::user(user))))
}

#[post("/auth/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::TokenPair> {
    let json::Credentials { login, password } = credentials?.into_inner();
    let credentials = usecases::Credentials { login, password };
    let user = usecases::login(&db.shared()?, &credentials).map_err(|err| {
        debug!("Login of '{}' failed: {err}", credentials.login);
        err
    })?;
    token_pair(jwt_state, user.id, &user.login)
}

#[post("/auth/refresh", format = "application/json", data = "<request>")]
pub fn post_refresh(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    request: JsonResult<json::RefreshRequest>,
) -> Result<json::TokenPair> {
    let request = request?.into_inner();
    let token_data = jwt_state
        .validate_refresh_token(&request.refresh_token)
        .map_err(|err| {
            debug!("Token refresh failed: {err}");
            ApiError::from(ParameterError::Unauthorized)
        })?;
    // The account may have been deleted since the token was issued.
    let user = usecases::get_user(&db.shared()?, token_data.user_id)?;
    token_pair(jwt_state, user.id, &user.login)
}

#[get("/users/me")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.user_id())?;
    Ok(Json(to_json::user(user)))
}

fn token_pair(
    jwt_state: &jwt::JwtState,
    user_id: i64,
    login: &str,
) -> Result<json::TokenPair> {
    let (access_token, refresh_token) = jwt_state.generate_token_pair(user_id, login)?;
    Ok(Json(json::TokenPair {
        access_token,
        refresh_token,
        token_type: "bearer".into(),
    }))
}
