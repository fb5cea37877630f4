use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use dobro_core::gateways::auth::AuthTokenDecoder as _;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

pub fn bearer_token_from_header(request: &Request) -> Option<String> {
    request
        .headers()
        .get("Authorization")
        .find_map(get_bearer_token)
        .map(ToOwned::to_owned)
}

/// The authenticated caller, resolved from a valid access token.
#[derive(Debug)]
pub struct Account {
    user_id: i64,
    login: String,
}

impl Account {
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jwt_state = try_outcome!(request.guard::<&State<jwt::JwtState>>().await);
        let token_data = bearer_token_from_header(request)
            .and_then(|token| jwt_state.decode_token(&token));
        match token_data {
            Some(data) => Outcome::Success(Account {
                user_id: data.user_id,
                login: data.login,
            }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
