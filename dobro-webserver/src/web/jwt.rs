use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration, OffsetDateTime};

use dobro_core::gateways::auth::{AuthTokenDecoder, TokenData};

const ACCESS_TOKEN_TTL: Duration = Duration::minutes(30);
const REFRESH_TOKEN_TTL: Duration = Duration::days(7);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The login in our case
    sub: String,
    uid: i64,
    /// Expiry time as Unix timestamp
    exp: usize,
    /// Distinguishes refresh from access tokens
    refresh: bool,
}

pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtState {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    pub fn generate_token_pair(&self, user_id: i64, login: &str) -> Result<(String, String)> {
        let access = self.generate_token(user_id, login, ACCESS_TOKEN_TTL, false)?;
        let refresh = self.generate_token(user_id, login, REFRESH_TOKEN_TTL, true)?;
        Ok((access, refresh))
    }

    fn generate_token(
        &self,
        user_id: i64,
        login: &str,
        time_valid: Duration,
        refresh: bool,
    ) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: login.to_string(),
            uid: user_id,
            exp,
            refresh,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    pub fn validate_refresh_token(&self, token: &str) -> Result<TokenData> {
        let claims = self.decode(token)?;
        if !claims.refresh {
            return Err(anyhow!("Not a refresh token"));
        }
        Ok(TokenData {
            user_id: claims.uid,
            login: claims.sub,
        })
    }
}

impl AuthTokenDecoder for JwtState {
    // Access tokens only; a refresh token must never authenticate a
    // request on its own.
    fn decode_token(&self, token: &str) -> Option<TokenData> {
        let claims = self.decode(token).ok()?;
        if claims.refresh {
            return None;
        }
        Some(TokenData {
            user_id: claims.uid,
            login: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trip() {
        let jwt_state = JwtState::new("test-secret");
        let (access, _) = jwt_state.generate_token_pair(7, "alice").unwrap();
        let data = jwt_state.decode_token(&access).unwrap();
        assert_eq!(data.user_id, 7);
        assert_eq!(data.login, "alice");
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let jwt_state = JwtState::new("test-secret");
        let (access, refresh) = jwt_state.generate_token_pair(7, "alice").unwrap();
        assert!(jwt_state.decode_token(&refresh).is_none());
        assert!(jwt_state.validate_refresh_token(&access).is_err());
        assert!(jwt_state.validate_refresh_token(&refresh).is_ok());
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let jwt_state = JwtState::new("test-secret");
        let (access, _) = jwt_state.generate_token_pair(7, "alice").unwrap();
        let other = JwtState::new("other-secret");
        assert!(other.decode_token(&access).is_none());
    }
}
